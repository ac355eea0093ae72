//! Boundary Matrix over GF(2)
//!
//! Column j of the boundary matrix holds the boundary of simplex j, i.e.
//! the indices of its codimension-1 faces. As every face precedes its
//! cofaces in a valid filtration, the matrix is strictly upper triangular.
//!
//! The matrix only knows about indices and dimensions; filtration values
//! stay with the simplicial complex.

use ndarray::Array2;
use rustc_hash::FxHashSet;
use std::fmt;

use super::{Representation, VectorColumn};
use crate::error::{ComplexError, Result};
use crate::topology::SimplicialComplex;

/// Sparse boundary matrix, generic over the column storage
#[derive(Debug, Clone, Default)]
pub struct BoundaryMatrix<R: Representation = VectorColumn> {
    columns: Vec<R>,
    /// Dimension of the simplex (or dual cell) behind each column
    dimensions: Vec<usize>,
    dualized: bool,
}

impl<R: Representation> BoundaryMatrix<R> {
    /// Build the boundary matrix of a filtered complex.
    ///
    /// Fails if a face is missing or does not precede its coface.
    pub fn from_complex(complex: &SimplicialComplex) -> Result<Self> {
        let mut columns = Vec::with_capacity(complex.len());
        let mut dimensions = Vec::with_capacity(complex.len());

        for (index, simplex) in complex.iter().enumerate() {
            let mut rows = Vec::with_capacity(simplex.dimension() + 1);
            for face in simplex.faces() {
                let face_index = complex.index_of(&face).ok_or_else(|| ComplexError::MissingFace {
                    index,
                    face: face.vertices().to_vec(),
                })?;

                if face_index >= index {
                    return Err(ComplexError::FaceOrder { index, face_index }.into());
                }
                rows.push(face_index);
            }

            columns.push(R::from_indices(rows));
            dimensions.push(simplex.dimension());
        }

        Ok(Self { columns, dimensions, dualized: false })
    }

    /// Build a matrix from `(column, dimension)` pairs.
    ///
    /// Every row index has to precede its column, otherwise the matrix is
    /// not a boundary matrix and `FaceOrder` is reported.
    pub fn from_columns(columns: impl IntoIterator<Item = (R, usize)>) -> Result<Self> {
        let (columns, dimensions): (Vec<R>, Vec<usize>) = columns.into_iter().unzip();

        for (index, column) in columns.iter().enumerate() {
            if let Some(face_index) = column.low().filter(|&low| low >= index) {
                return Err(ComplexError::FaceOrder { index, face_index }.into());
            }
        }

        Ok(Self { columns, dimensions, dualized: false })
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, j: usize) -> &R {
        &self.columns[j]
    }

    /// Replace the contents of column `j`
    pub fn replace(&mut self, j: usize, column: R) {
        self.columns[j] = column;
    }

    /// Add column `source` to column `target` (symmetric difference)
    pub fn add_columns(&mut self, source: usize, target: usize) {
        if source == target {
            self.columns[target].clear();
            return;
        }

        if source < target {
            let (head, tail) = self.columns.split_at_mut(target);
            tail[0].add(&head[source]);
        } else {
            let (head, tail) = self.columns.split_at_mut(source);
            head[target].add(&tail[0]);
        }
    }

    pub fn clear(&mut self, j: usize) {
        self.columns[j].clear();
    }

    pub fn is_empty(&self, j: usize) -> bool {
        self.columns[j].is_empty()
    }

    /// Largest row index of column `j`
    pub fn low(&self, j: usize) -> Option<usize> {
        self.columns[j].low()
    }

    pub fn dimension(&self, j: usize) -> usize {
        self.dimensions[j]
    }

    /// Largest column dimension, or `None` for an empty matrix
    pub fn max_dimension(&self) -> Option<usize> {
        self.dimensions.iter().copied().max()
    }

    pub fn is_dualized(&self) -> bool {
        self.dualized
    }

    /// Anti-transpose of the matrix, used to compute persistent cohomology.
    ///
    /// Entry (i, j) moves to (n-1-j, n-1-i), so the dual is again strictly
    /// upper triangular. A cell of dimension d becomes a dual cell of
    /// dimension `max_dimension - d`. Dualizing twice yields the original.
    pub fn dualize(&self) -> Self {
        let n = self.num_columns();
        let max_dimension = self.max_dimension().unwrap_or(0);

        let mut rows: Vec<Vec<usize>> = vec![Vec::new(); n];
        for (j, column) in self.columns.iter().enumerate() {
            for i in column.iter() {
                rows[n - 1 - i].push(n - 1 - j);
            }
        }

        let columns = rows.into_iter().map(R::from_indices).collect();
        let dimensions = self.dimensions.iter()
            .rev()
            .map(|&d| max_dimension - d)
            .collect();

        Self { columns, dimensions, dualized: !self.dualized }
    }

    /// Whether all non-empty columns have pairwise distinct lows
    pub fn is_reduced(&self) -> bool {
        let mut seen = FxHashSet::default();
        self.columns.iter()
            .filter_map(Representation::low)
            .all(|low| seen.insert(low))
    }

    /// Dense 0/1 view of the matrix
    pub fn to_dense(&self) -> Array2<u8> {
        let n = self.num_columns();
        let mut dense = Array2::<u8>::zeros((n, n));
        for (j, column) in self.columns.iter().enumerate() {
            for i in column.iter() {
                dense[[i, j]] = 1;
            }
        }
        dense
    }
}

/// One column per line, row indices separated by spaces
impl<R: Representation> fmt::Display for BoundaryMatrix<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for column in &self.columns {
            let mut first = true;
            for i in column.iter() {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{}", i)?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
