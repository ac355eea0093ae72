//! Norms and Summary Statistics of Persistence Diagrams
//!
//! For a diagram D and p ≥ 1:
//!
//!   pers_p(D) = Σ |d - b|^p
//!   ‖D‖_p     = pers_p(D)^(1/p)
//!   ‖D‖_∞     = max |d - b|
//!
//! Sums are accumulated with Kahan compensation over values sorted by
//! magnitude, which keeps the result stable for diagrams with many short
//! lived points.

use super::PersistenceDiagram;

/// Compensated sum of `values`, smallest magnitude first
pub fn kahan_sum(values: impl IntoIterator<Item = f64>) -> f64 {
    let mut values: Vec<f64> = values.into_iter().collect();
    values.sort_by(|a, b| a.abs().total_cmp(&b.abs()));

    let mut sum = 0.0;
    let mut compensation = 0.0;
    for x in values {
        let y = x - compensation;
        let t = sum + y;
        compensation = (t - sum) - y;
        sum = t;
    }
    sum
}

/// Total persistence: Σ |persistence|^p
pub fn total_persistence(diagram: &PersistenceDiagram, p: f64) -> f64 {
    kahan_sum(diagram.iter().map(|point| point.persistence().abs().powf(p)))
}

/// p-norm of the persistence values; `p = ∞` gives the maximum
pub fn p_norm(diagram: &PersistenceDiagram, p: f64) -> f64 {
    if p.is_infinite() {
        return infinity_norm(diagram);
    }
    total_persistence(diagram, p).powf(1.0 / p)
}

/// Largest absolute persistence, 0 for an empty diagram
pub fn infinity_norm(diagram: &PersistenceDiagram) -> f64 {
    diagram.iter()
        .map(|point| point.persistence().abs())
        .fold(0.0, f64::max)
}

/// Condensed description of a diagram
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Minimum persistence
    pub min: f64,
    /// Maximum persistence
    pub max: f64,
    /// Average persistence
    pub mean: f64,
    /// 2-norm
    pub norm: f64,
}

impl Summary {
    /// Summarize the persistence values of a diagram.
    ///
    /// Returns `None` for an empty diagram.
    pub fn from_diagram(diagram: &PersistenceDiagram) -> Option<Self> {
        if diagram.is_empty() {
            return None;
        }

        let values: Vec<f64> = diagram.iter().map(|p| p.persistence()).collect();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = kahan_sum(values.iter().copied()) / values.len() as f64;

        Some(Self {
            min,
            max,
            mean,
            norm: p_norm(diagram, 2.0),
        })
    }

    pub fn to_vec(&self) -> Vec<f64> {
        vec![self.min, self.max, self.mean, self.norm]
    }
}
