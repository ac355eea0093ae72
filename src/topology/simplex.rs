//! Simplices with Filtration Values
//!
//! A k-simplex is a set of k+1 vertices. Its boundary is the formal sum
//! of its k+1 codimension-1 faces, obtained by dropping one vertex at a
//! time:
//!
//!   ∂[v₀, ..., vₖ] = Σᵢ [v₀, ..., v̂ᵢ, ..., vₖ]
//!
//! Over GF(2) the signs vanish, so the boundary is just the face set.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{Error, Result};

/// Vertex identifier
pub type Vertex = usize;

/// A simplex carrying a single filtration value.
///
/// Vertices are kept sorted in ascending order and free of duplicates.
/// Equality and hashing only consider the vertex set, so a simplex can be
/// looked up regardless of the value it carries.
#[derive(Debug, Clone)]
pub struct Simplex {
    vertices: Vec<Vertex>,
    data: f64,
}

impl Simplex {
    /// Create a simplex from an arbitrary vertex list.
    ///
    /// Vertices are sorted and duplicates removed. Fails if no vertex is
    /// given.
    pub fn new(vertices: impl IntoIterator<Item = Vertex>, data: f64) -> Result<Self> {
        let mut vertices: Vec<Vertex> = vertices.into_iter().collect();
        if vertices.is_empty() {
            return Err(Error::EmptySimplex);
        }
        vertices.sort_unstable();
        vertices.dedup();
        Ok(Self { vertices, data })
    }

    /// Create a simplex from vertices that are already sorted and unique
    pub(crate) fn from_sorted(vertices: Vec<Vertex>, data: f64) -> Self {
        debug_assert!(!vertices.is_empty());
        debug_assert!(vertices.windows(2).all(|w| w[0] < w[1]));
        Self { vertices, data }
    }

    /// 0-simplex
    pub fn vertex(v: Vertex, data: f64) -> Self {
        Self { vertices: vec![v], data }
    }

    /// 1-simplex
    pub fn edge(u: Vertex, v: Vertex, data: f64) -> Self {
        let vertices = match u.cmp(&v) {
            Ordering::Less => vec![u, v],
            Ordering::Greater => vec![v, u],
            Ordering::Equal => vec![u],
        };
        Self { vertices, data }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Dimension k of a k-simplex (number of vertices minus one)
    pub fn dimension(&self) -> usize {
        self.vertices.len() - 1
    }

    /// Filtration value
    pub fn data(&self) -> f64 {
        self.data
    }

    pub fn set_data(&mut self, data: f64) {
        self.data = data;
    }

    pub fn contains(&self, v: Vertex) -> bool {
        self.vertices.binary_search(&v).is_ok()
    }

    /// Codimension-1 faces, in the order obtained by removing vertex 0,
    /// vertex 1, ... Each face inherits the filtration value of `self`.
    ///
    /// A vertex has no faces.
    pub fn faces(&self) -> impl Iterator<Item = Simplex> + '_ {
        let n = if self.vertices.len() > 1 { self.vertices.len() } else { 0 };
        (0..n).map(move |skip| {
            let vertices = self.vertices.iter()
                .enumerate()
                .filter(|&(i, _)| i != skip)
                .map(|(_, &v)| v)
                .collect();
            Simplex { vertices, data: self.data }
        })
    }

    /// Whether `self` is a proper face of `other`
    pub fn is_face_of(&self, other: &Simplex) -> bool {
        self.vertices.len() < other.vertices.len()
            && self.vertices.iter().all(|&v| other.contains(v))
    }
}

impl PartialEq for Simplex {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

impl Eq for Simplex {}

impl Hash for Simplex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.vertices.hash(state);
    }
}

impl fmt::Display for Simplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "}} ({})", self.data)
    }
}
