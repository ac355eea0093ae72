//! Standard Algorithm
//!
//! ```text
//! for j = 0..n:
//!     while column j ≠ 0 and ∃ j' < j with low(j') = low(j):
//!         column j += column j'
//! ```
//!
//! Worst case O(n³): n columns, up to n additions each, every addition
//! touching up to n rows.

use super::{reduce_column, Reduction, ReductionStats};
use crate::boundary::{BoundaryMatrix, Representation};

/// Column-by-column reduction in index order
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardReduction;

impl Reduction for StandardReduction {
    fn reduce<R: Representation>(&self, matrix: &mut BoundaryMatrix<R>) -> ReductionStats {
        let n = matrix.num_columns();
        let mut lows: Vec<Option<usize>> = vec![None; n];
        let mut stats = ReductionStats::default();

        for j in 0..n {
            reduce_column(matrix, j, &mut lows, &mut stats);
        }

        tracing::debug!(
            columns = n,
            additions = stats.column_additions,
            "Standard reduction finished"
        );

        stats
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}
