//! Reduction Module: Boundary Matrix Reduction
//!
//! Reduces a boundary matrix R = ∂ by left-to-right column additions until
//! no two non-empty columns share the same low (pivot) row. The reduced
//! matrix determines the persistence pairing:
//!
//! - low(j) = i  ⇒  simplex j destroys the class created by simplex i
//! - column j empty  ⇒  simplex j creates a class
//!
//! ## Algorithms
//!
//! - [`StandardReduction`]: columns in index order (Edelsbrunner,
//!   Letscher, Zomorodian 2002).
//! - [`TwistReduction`]: columns grouped by decreasing dimension; every
//!   pivot found clears the column of the creator it pairs with (Chen,
//!   Kerber 2011). Same pairs, usually fewer column additions.
//!
//! Both keep an auxiliary table low → column so that the column holding a
//! given pivot is found in constant time instead of by a linear scan.

mod standard;
mod twist;

pub use standard::StandardReduction;
pub use twist::TwistReduction;

use crate::boundary::{BoundaryMatrix, Representation};

/// Work performed by a reduction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReductionStats {
    /// Number of column additions
    pub column_additions: usize,
    /// Columns cleared without being reduced
    pub cleared_columns: usize,
}

/// A matrix reduction algorithm.
///
/// Reductions are total: they run to completion on every matrix and
/// mutate it in place.
pub trait Reduction {
    fn reduce<R: Representation>(&self, matrix: &mut BoundaryMatrix<R>) -> ReductionStats;

    fn name(&self) -> &'static str;
}

/// Reduce column `j` against the columns registered in `lows`.
///
/// Returns the final low of the column, after registering it, or `None`
/// if the column vanished.
fn reduce_column<R: Representation>(
    matrix: &mut BoundaryMatrix<R>,
    j: usize,
    lows: &mut [Option<usize>],
    stats: &mut ReductionStats,
) -> Option<usize> {
    while let Some(low) = matrix.low(j) {
        match lows[low] {
            Some(pivot_column) if pivot_column != j => {
                matrix.add_columns(pivot_column, j);
                stats.column_additions += 1;
            }
            _ => {
                tracing::trace!(column = j, low, "Registered pivot");
                lows[low] = Some(j);
                return Some(low);
            }
        }
    }
    None
}
