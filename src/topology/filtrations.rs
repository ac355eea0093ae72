//! Filtration Orders
//!
//! A filtration assigns each simplex a value that is monotone with respect
//! to the face relation. Sorting by value alone is not enough: ties must be
//! broken so that faces come first, which the dimension tie-break
//! guarantees. Remaining ties are broken lexicographically so that the
//! order is total and deterministic.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::Simplex;

/// Direction of a data-driven filtration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filtration {
    /// Increasing values: a simplex enters once the threshold reaches it
    #[default]
    Sublevel,
    /// Decreasing values
    Superlevel,
}

impl Filtration {
    /// Compare two simplices in filtration order
    pub fn compare(&self, a: &Simplex, b: &Simplex) -> Ordering {
        let by_data = match self {
            Filtration::Sublevel => a.data().total_cmp(&b.data()),
            Filtration::Superlevel => b.data().total_cmp(&a.data()),
        };

        by_data
            .then(a.dimension().cmp(&b.dimension()))
            .then_with(|| a.vertices().cmp(b.vertices()))
    }

    /// Value assigned to an edge between two vertices of the given values,
    /// so that the edge never precedes its endpoints.
    pub fn edge_value(&self, x: f64, y: f64) -> f64 {
        match self {
            Filtration::Sublevel => x.max(y),
            Filtration::Superlevel => x.min(y),
        }
    }
}
