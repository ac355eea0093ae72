//! Twist Algorithm (Chen & Kerber, "Persistent Homology Computation with
//! a Twist", 2011)
//!
//! If low(j) = i after reducing column j, then simplex i is a creator and
//! its column would eventually reduce to zero. Processing dimensions from
//! the top down reaches j before i, so column i can be cleared right away
//! and never takes part in an addition.
//!
//! Dimensions read from a file are only inferred, so i may already hold a
//! pivot when j is reduced. Such a column is left alone: clearing it would
//! leave a stale entry in the pivot table.

use super::{reduce_column, Reduction, ReductionStats};
use crate::boundary::{BoundaryMatrix, Representation};

/// Reduction by decreasing dimension with clearing
#[derive(Debug, Clone, Copy, Default)]
pub struct TwistReduction;

impl Reduction for TwistReduction {
    fn reduce<R: Representation>(&self, matrix: &mut BoundaryMatrix<R>) -> ReductionStats {
        let n = matrix.num_columns();
        let mut lows: Vec<Option<usize>> = vec![None; n];
        let mut stats = ReductionStats::default();

        let Some(max_dimension) = matrix.max_dimension() else {
            return stats;
        };

        for dimension in (0..=max_dimension).rev() {
            for j in 0..n {
                if matrix.dimension(j) != dimension || matrix.is_empty(j) {
                    continue;
                }

                if let Some(i) = reduce_column(matrix, j, &mut lows, &mut stats) {
                    let holds_pivot = matrix.low(i).is_some_and(|low| lows[low] == Some(i));
                    if !matrix.is_empty(i) && !holds_pivot {
                        matrix.clear(i);
                        stats.cleared_columns += 1;
                    }
                }
            }
        }

        tracing::debug!(
            columns = n,
            max_dimension,
            additions = stats.column_additions,
            cleared = stats.cleared_columns,
            "Twist reduction finished"
        );

        stats
    }

    fn name(&self) -> &'static str {
        "twist"
    }
}
