//! Boundary Matrix Files
//!
//! Line j lists the row indices of column j. A blank line is an empty
//! column, which is what every vertex has. Lines starting with `#` are
//! comments and do not count as columns.
//!
//! The format does not store dimensions. For the boundary matrix of a
//! simplicial complex a column with k+1 entries belongs to a k-simplex,
//! which is how dimensions are recovered.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::tokens;
use crate::boundary::{BoundaryMatrix, Representation};
use crate::error::{ComplexError, Error, Result};

/// Read a boundary matrix in column-per-line format
pub fn read_boundary_matrix<R, B>(reader: B) -> Result<BoundaryMatrix<R>>
where
    R: Representation,
    B: BufRead,
{
    let mut columns = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim_start().starts_with('#') {
            continue;
        }

        let index = columns.len();
        let mut rows = Vec::new();
        for token in tokens(&line, &[]) {
            let row: usize = token.parse().map_err(|_| Error::Conversion {
                token: token.to_string(),
                line: i + 1,
            })?;

            if row >= index {
                return Err(ComplexError::FaceOrder { index, face_index: row }.into());
            }
            rows.push(row);
        }

        let dimension = rows.len().saturating_sub(1);
        columns.push((R::from_indices(rows), dimension));
    }

    tracing::debug!(columns = columns.len(), "Read boundary matrix");
    BoundaryMatrix::from_columns(columns)
}

/// Read a boundary matrix from a file
pub fn load_boundary_matrix<R: Representation>(path: impl AsRef<Path>) -> Result<BoundaryMatrix<R>> {
    let file = File::open(path)?;
    read_boundary_matrix(BufReader::new(file))
}
