//! Boundary Module: Sparse GF(2) Matrices
//!
//! The boundary matrix encodes, for every simplex, which lower-indexed
//! simplices are its codimension-1 faces. It is the only structure that
//! the reduction mutates.
//!
//! The storage of a single column is a type parameter, so that the same
//! reduction code runs over vectors, ordered sets or linked lists. The
//! choice changes running time and memory behaviour only.

mod matrix;
mod representation;

pub use matrix::BoundaryMatrix;
pub use representation::{ListColumn, Representation, SetColumn, VectorColumn};
