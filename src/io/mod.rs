//! I/O Module: Text Formats at the Boundary of the Pipeline
//!
//! - Function files: one function per line, values separated by `:`, `;`,
//!   `,` or whitespace
//! - Boundary matrices: one column per line, row indices separated by
//!   whitespace
//! - Persistence diagrams: one `birth death` point per line, diagrams
//!   separated by blank lines
//!
//! Parse errors report the offending token and its line number.

mod function;
mod matrix;
mod diagram;

pub use function::{load_functions, parse_function_line, read_functions};
pub use matrix::{load_boundary_matrix, read_boundary_matrix};
pub use diagram::{write_diagram, write_diagrams};

/// Split a line at runs of separator characters
fn tokens<'a>(line: &'a str, separators: &'static [char]) -> impl Iterator<Item = &'a str> + 'a {
    line.split(move |c: char| c.is_whitespace() || separators.contains(&c))
        .filter(|token| !token.is_empty())
}
