//! Persistence Module: Pairs, Diagrams and Norms
//!
//! Turns a reduced boundary matrix into topological information:
//! - Persistence pairs of simplex indices (creator, destroyer)
//! - Persistence diagrams of filtration values, one per dimension
//! - Norms and summary statistics for comparing diagrams
//!
//! ## Pairing Lemma
//!
//! In the reduced matrix R, low(j) = i means that the homology class
//! created by simplex i is destroyed by simplex j. Every simplex either
//! creates or destroys exactly one class, so the pairs together with the
//! unpaired creators partition the filtration.

mod pairs;
mod diagram;
mod norms;
mod calculation;

pub use pairs::PersistencePairs;
pub use diagram::{PersistenceDiagram, Point};
pub use norms::{infinity_norm, kahan_sum, p_norm, total_persistence, Summary};
pub use calculation::{
    calculate_function_diagram,
    calculate_pairs_with_config,
    calculate_persistence_diagrams,
    calculate_persistence_pairs,
    make_persistence_diagrams,
};
