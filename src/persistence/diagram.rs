//! Persistence Diagrams
//!
//! A persistence diagram is a multiset of points (b, d): a topological
//! feature born at filtration value b that dies at value d. Essential
//! features never die and carry d = +∞.
//!
//! ## Interpretation
//!
//! - Long-lived features (large d-b) represent robust topological structure
//! - Points on the diagonal (b = d) carry no information and are usually
//!   removed

use std::fmt;

/// A point in a persistence diagram
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub birth: f64,
    pub death: f64,
}

impl Point {
    pub fn new(birth: f64, death: f64) -> Self {
        Self { birth, death }
    }

    /// Point of an essential class
    pub fn unpaired(birth: f64) -> Self {
        Self { birth, death: f64::INFINITY }
    }

    /// Lifetime of the feature
    pub fn persistence(&self) -> f64 {
        self.death - self.birth
    }

    /// Is this an essential feature (infinite persistence)?
    pub fn is_unpaired(&self) -> bool {
        self.death.is_infinite()
    }
}

/// Persistence diagram of a single dimension
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersistenceDiagram {
    points: Vec<Point>,
    dimension: usize,
}

impl PersistenceDiagram {
    pub fn new(dimension: usize) -> Self {
        Self { points: Vec::new(), dimension }
    }

    pub fn with_points(dimension: usize, points: Vec<Point>) -> Self {
        Self { points, dimension }
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Homological dimension of the diagram
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Remove all points with birth == death. Returns the number of
    /// removed points.
    pub fn remove_diagonal(&mut self) -> usize {
        let before = self.points.len();
        self.points.retain(|p| p.birth != p.death);
        before - self.points.len()
    }

    /// Number of essential classes
    pub fn betti(&self) -> usize {
        self.points.iter().filter(|p| p.is_unpaired()).count()
    }

    /// Sort by decreasing absolute persistence; essential points first
    pub fn sort_by_persistence(&mut self) {
        self.points.sort_by(|a, b| {
            b.persistence().abs().total_cmp(&a.persistence().abs())
        });
    }

    /// Replace infinite deaths by a finite value
    pub fn replace_infinity(&mut self, value: f64) {
        for p in self.points.iter_mut().filter(|p| p.is_unpaired()) {
            p.death = value;
        }
    }

    /// Map both coordinates of every point from [min, max] to [0, 1].
    ///
    /// Leaves the diagram untouched if the range is empty.
    pub fn normalize(&mut self, min: f64, max: f64) {
        let range = max - min;
        if range <= 0.0 || !range.is_finite() {
            return;
        }

        for p in self.points.iter_mut() {
            p.birth = (p.birth - min) / range;
            p.death = (p.death - min) / range;
        }
    }

    /// Persistent (Shannon) entropy of the finite points
    ///
    /// H_P = -Σᵢ pᵢ log(pᵢ)
    ///
    /// where pᵢ = lᵢ / L is the normalized lifetime
    pub fn persistence_entropy(&self) -> f64 {
        let lifetimes: Vec<f64> = self.points.iter()
            .filter(|p| !p.is_unpaired())
            .map(|p| p.persistence().abs())
            .filter(|&l| l > 0.0)
            .collect();

        let total: f64 = lifetimes.iter().sum();
        if total <= 0.0 {
            return 0.0;
        }

        let mut entropy = 0.0;
        for l in lifetimes {
            let p = l / total;
            entropy -= p * p.ln();
        }
        entropy
    }
}

impl<'a> IntoIterator for &'a PersistenceDiagram {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// One point per line, as `birth death`
impl fmt::Display for PersistenceDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in &self.points {
            writeln!(f, "{} {}", p.birth, p.death)?;
        }
        Ok(())
    }
}
