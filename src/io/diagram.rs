//! Persistence Diagram Output
//!
//! Diagrams are written one point per line as `birth death`, separated by
//! a blank line. Optional comment lines in front of each diagram report
//! its dimension and number of points.

use std::io::Write;

use crate::error::Result;
use crate::persistence::PersistenceDiagram;

/// Write the points of a single diagram
pub fn write_diagram<W: Write>(writer: &mut W, diagram: &PersistenceDiagram) -> Result<()> {
    write!(writer, "{}", diagram)?;
    Ok(())
}

/// Write several diagrams, separated by blank lines
pub fn write_diagrams<W: Write>(
    writer: &mut W,
    diagrams: &[PersistenceDiagram],
    with_header: bool,
) -> Result<()> {
    for (i, diagram) in diagrams.iter().enumerate() {
        if i > 0 {
            writeln!(writer)?;
        }
        if with_header {
            writeln!(writer, "# Dimension: {}", diagram.dimension())?;
            writeln!(writer, "# Points: {}", diagram.len())?;
        }
        write_diagram(writer, diagram)?;
    }
    Ok(())
}
