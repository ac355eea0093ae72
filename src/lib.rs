//! # TDA-Persistence
//!
//! Persistent homology of filtered simplicial complexes via boundary
//! matrix reduction over GF(2).
//!
//! ## Theoretical Framework
//!
//! A filtration K₀ ⊆ K₁ ⊆ ... ⊆ Kₙ of simplicial complexes induces maps
//! between their homology groups. Persistent homology tracks each class
//! from the step where it is born to the step where it dies, producing
//! a persistence diagram of (birth, death) points per dimension:
//!
//! - Dimension 0: connected components
//! - Dimension 1: loops/cycles
//! - Dimension 2: voids/cavities
//!
//! ### Methodology
//!
//! 1. **Filtered complex**: simplices in filtration order, faces first
//! 2. **Boundary matrix**: column j holds the faces of simplex j
//! 3. **Reduction**: column additions until all pivots are distinct
//!    (standard algorithm or the twist variant)
//! 4. **Pairing**: pivots pair creators with destroyers; unpaired
//!    creators are essential classes
//! 5. **Diagrams**: pairs mapped through the filtration values
//!
//! ## Example
//!
//! ```
//! use tda_persistence::{calculate_persistence_diagrams, PersistenceConfig, Simplex, SimplicialComplex};
//!
//! let complex = SimplicialComplex::new(vec![
//!     Simplex::vertex(0, 0.0),
//!     Simplex::vertex(1, 0.0),
//!     Simplex::edge(0, 1, 1.0),
//! ]);
//!
//! let diagrams = calculate_persistence_diagrams(&complex, &PersistenceConfig::default()).unwrap();
//! assert_eq!(diagrams.len(), 1);
//! assert_eq!(diagrams[0].betti(), 1);
//! ```
//!
//! ## References
//!
//! - Edelsbrunner & Harer, "Computational Topology" (2010)
//! - Edelsbrunner, Letscher, Zomorodian, "Topological Persistence and
//!   Simplification" (2002)
//! - Chen & Kerber, "Persistent Homology Computation with a Twist" (2011)
//! - de Silva, Morozov, Vejdemo-Johansson, "Dualities in Persistent
//!   (Co)homology" (2011)

pub mod error;
pub mod config;
pub mod topology;
pub mod boundary;
pub mod reduction;
pub mod persistence;
pub mod io;

pub use error::{ComplexError, Error, Result};
pub use config::{ColumnKind, PersistenceConfig, ReductionKind};

// Re-exports from topology
pub use topology::{
    Filtration,
    Simplex,
    SimplicialComplex,
    Vertex,
    VietorisRips,
    function_complex,
};

// Re-exports from boundary
pub use boundary::{
    BoundaryMatrix,
    ListColumn,
    Representation,
    SetColumn,
    VectorColumn,
};

// Re-exports from reduction
pub use reduction::{
    Reduction,
    ReductionStats,
    StandardReduction,
    TwistReduction,
};

// Re-exports from persistence
pub use persistence::{
    PersistenceDiagram,
    PersistencePairs,
    Point,
    Summary,
    calculate_function_diagram,
    calculate_pairs_with_config,
    calculate_persistence_diagrams,
    calculate_persistence_pairs,
    infinity_norm,
    kahan_sum,
    make_persistence_diagrams,
    p_norm,
    total_persistence,
};
