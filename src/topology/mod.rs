//! Topology Module: Simplices and Filtered Simplicial Complexes
//!
//! Implements the combinatorial input of a persistent homology calculation:
//! - Simplices carrying a filtration value
//! - Filtered simplicial complexes and their validation
//! - Filtration orders (sublevel / superlevel)
//! - Builders for function-value and Vietoris-Rips filtrations
//!
//! ## Mathematical Background
//!
//! A filtration is a nested sequence of complexes K₀ ⊆ K₁ ⊆ ... ⊆ Kₙ.
//! Sorting the simplices of Kₙ by the step at which they enter, with faces
//! before cofaces on ties, turns the filtration into a single ordered list.
//! The position of a simplex in that list is its index in the boundary
//! matrix.

mod simplex;
mod complex;
mod filtrations;
mod function;
mod vietoris_rips;

pub use simplex::{Simplex, Vertex};
pub use complex::SimplicialComplex;
pub use filtrations::Filtration;
pub use function::function_complex;
pub use vietoris_rips::VietorisRips;
