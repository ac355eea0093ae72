//! Filtered Simplicial Complexes
//!
//! An ordered sequence of simplices. The position of a simplex in the
//! sequence is its index, and that index (not the simplex itself) is what
//! the boundary matrix and the reduction operate on.
//!
//! Two invariants are required for the reduction to be meaningful:
//!
//! 1. Face-closure: every face of a member is also a member.
//! 2. Filtration compatibility: every face appears strictly earlier than
//!    any of its cofaces.
//!
//! Construction does not enforce them; [`SimplicialComplex::validate`]
//! checks both before a calculation is attempted.

use rustc_hash::FxHashMap;
use std::ops::Index;

use super::{Filtration, Simplex, Vertex};
use crate::error::{ComplexError, Result};

/// A filtered simplicial complex
#[derive(Debug, Clone, Default)]
pub struct SimplicialComplex {
    simplices: Vec<Simplex>,
    /// Vertex set -> position of its first occurrence
    index: FxHashMap<Vec<Vertex>, usize>,
}

impl SimplicialComplex {
    /// Create a complex from simplices given in filtration order
    pub fn new(simplices: Vec<Simplex>) -> Self {
        let mut complex = Self { simplices, index: FxHashMap::default() };
        complex.rebuild_index();
        complex
    }

    /// Append a simplex at the end of the filtration
    pub fn push(&mut self, simplex: Simplex) {
        let position = self.simplices.len();
        self.index.entry(simplex.vertices().to_vec()).or_insert(position);
        self.simplices.push(simplex);
    }

    pub fn len(&self) -> usize {
        self.simplices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.simplices.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Simplex> {
        self.simplices.get(index)
    }

    /// Position of a simplex, looked up by its vertex set
    pub fn index_of(&self, simplex: &Simplex) -> Option<usize> {
        self.index.get(simplex.vertices()).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Simplex> {
        self.simplices.iter()
    }

    /// Maximum simplex dimension, or `None` for the empty complex
    pub fn dimension(&self) -> Option<usize> {
        self.simplices.iter().map(Simplex::dimension).max()
    }

    /// Establish a filtration order. Sorting is stable.
    pub fn sort(&mut self, filtration: Filtration) {
        self.simplices.sort_by(|a, b| filtration.compare(a, b));
        self.rebuild_index();
    }

    /// Restrict to the simplices of dimension at most `k`, preserving
    /// their relative order.
    pub fn skeleton(&self, k: usize) -> Self {
        let simplices = self.simplices.iter()
            .filter(|s| s.dimension() <= k)
            .cloned()
            .collect();
        Self::new(simplices)
    }

    /// Minimum and maximum filtration value
    pub fn data_range(&self) -> Option<(f64, f64)> {
        if self.simplices.is_empty() {
            return None;
        }
        let (min, max) = self.simplices.iter()
            .map(Simplex::data)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), d| (lo.min(d), hi.max(d)));
        Some((min, max))
    }

    /// Check uniqueness, face-closure and filtration compatibility.
    ///
    /// Reports the first violation found, scanning in filtration order.
    pub fn validate(&self) -> Result<()> {
        for (index, simplex) in self.simplices.iter().enumerate() {
            if let Some(first) = self.index_of(simplex) {
                if first != index {
                    return Err(ComplexError::DuplicateSimplex { index, first }.into());
                }
            }

            for face in simplex.faces() {
                match self.index_of(&face) {
                    None => {
                        return Err(ComplexError::MissingFace {
                            index,
                            face: face.vertices().to_vec(),
                        }
                        .into());
                    }
                    Some(face_index) if face_index >= index => {
                        return Err(ComplexError::FaceOrder { index, face_index }.into());
                    }
                    Some(_) => {}
                }
            }
        }

        tracing::trace!(simplices = self.simplices.len(), "Validated simplicial complex");
        Ok(())
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        self.index.reserve(self.simplices.len());
        for (position, simplex) in self.simplices.iter().enumerate() {
            self.index.entry(simplex.vertices().to_vec()).or_insert(position);
        }
    }
}

impl Index<usize> for SimplicialComplex {
    type Output = Simplex;

    fn index(&self, index: usize) -> &Simplex {
        &self.simplices[index]
    }
}

impl FromIterator<Simplex> for SimplicialComplex {
    fn from_iter<I: IntoIterator<Item = Simplex>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SimplicialComplex {
    type Item = &'a Simplex;
    type IntoIter = std::slice::Iter<'a, Simplex>;

    fn into_iter(self) -> Self::IntoIter {
        self.simplices.iter()
    }
}
