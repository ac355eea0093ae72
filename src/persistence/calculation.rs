//! Persistent Homology Calculation
//!
//! The full pipeline:
//!
//! 1. Validate the filtered complex (face-closure, filtration order)
//! 2. Build the boundary matrix, optionally dualized
//! 3. Reduce the matrix in place
//! 4. Extract and check the persistence pairs
//! 5. Map pairs through the filtration values into diagrams
//!
//! Steps 1 and 4 are the only fallible ones. The reduction itself never
//! fails.

use std::collections::BTreeMap;

use super::{PersistenceDiagram, PersistencePairs, Point};
use crate::boundary::{BoundaryMatrix, ListColumn, Representation, SetColumn, VectorColumn};
use crate::config::{ColumnKind, PersistenceConfig, ReductionKind};
use crate::error::{Error, Result};
use crate::reduction::{Reduction, StandardReduction, TwistReduction};
use crate::topology::{Filtration, SimplicialComplex};

/// Calculate the persistence pairs of a filtered complex.
///
/// The complex is validated first; an invalid complex is reported as
/// [`Error::InvalidComplex`](crate::Error::InvalidComplex) and no reduction
/// takes place.
pub fn calculate_persistence_pairs<R, A>(
    complex: &SimplicialComplex,
    algorithm: &A,
    dualize: bool,
) -> Result<PersistencePairs>
where
    R: Representation,
    A: Reduction,
{
    complex.validate()?;

    let mut matrix = BoundaryMatrix::<R>::from_complex(complex)?;
    if dualize {
        matrix = matrix.dualize();
    }

    let stats = algorithm.reduce(&mut matrix);
    let pairs = PersistencePairs::from_reduced(&matrix);
    pairs.validate(complex.len())?;

    tracing::debug!(
        simplices = complex.len(),
        algorithm = algorithm.name(),
        dualize,
        pairs = pairs.num_pairs(),
        essential = pairs.essential().len(),
        additions = stats.column_additions,
        "Calculated persistence pairs"
    );

    Ok(pairs)
}

/// Calculate the persistence pairs with the algorithm and column storage
/// selected in `config`
pub fn calculate_pairs_with_config(
    complex: &SimplicialComplex,
    config: &PersistenceConfig,
) -> Result<PersistencePairs> {
    let dualize = config.dualize;
    match (config.representation, config.algorithm) {
        (ColumnKind::Vector, ReductionKind::Standard) => {
            calculate_persistence_pairs::<VectorColumn, _>(complex, &StandardReduction, dualize)
        }
        (ColumnKind::Vector, ReductionKind::Twist) => {
            calculate_persistence_pairs::<VectorColumn, _>(complex, &TwistReduction, dualize)
        }
        (ColumnKind::Set, ReductionKind::Standard) => {
            calculate_persistence_pairs::<SetColumn, _>(complex, &StandardReduction, dualize)
        }
        (ColumnKind::Set, ReductionKind::Twist) => {
            calculate_persistence_pairs::<SetColumn, _>(complex, &TwistReduction, dualize)
        }
        (ColumnKind::List, ReductionKind::Standard) => {
            calculate_persistence_pairs::<ListColumn, _>(complex, &StandardReduction, dualize)
        }
        (ColumnKind::List, ReductionKind::Twist) => {
            calculate_persistence_pairs::<ListColumn, _>(complex, &TwistReduction, dualize)
        }
    }
}

/// Turn persistence pairs into one diagram per dimension.
///
/// Birth and death are the filtration values of creator and destroyer; the
/// dimension is that of the creator. Diagrams are sorted by dimension and
/// only dimensions with at least one point are reported.
pub fn make_persistence_diagrams(
    complex: &SimplicialComplex,
    pairs: &PersistencePairs,
    include_all_unpaired_creators: bool,
) -> Vec<PersistenceDiagram> {
    let top_dimension = complex.dimension();
    let mut diagrams: BTreeMap<usize, PersistenceDiagram> = BTreeMap::new();

    for &(creator, destroyer) in pairs {
        let sigma = &complex[creator];
        let tau = &complex[destroyer];
        diagrams.entry(sigma.dimension())
            .or_insert_with(|| PersistenceDiagram::new(sigma.dimension()))
            .push(Point::new(sigma.data(), tau.data()));
    }

    for &creator in pairs.essential() {
        let sigma = &complex[creator];
        if !include_all_unpaired_creators && Some(sigma.dimension()) == top_dimension {
            continue;
        }
        diagrams.entry(sigma.dimension())
            .or_insert_with(|| PersistenceDiagram::new(sigma.dimension()))
            .push(Point::unpaired(sigma.data()));
    }

    diagrams.into_values().collect()
}

/// Calculate the persistence diagrams of a filtered complex
pub fn calculate_persistence_diagrams(
    complex: &SimplicialComplex,
    config: &PersistenceConfig,
) -> Result<Vec<PersistenceDiagram>> {
    let truncated;
    let complex = match (config.max_dimension, complex.dimension()) {
        (Some(k), Some(d)) if d > k => {
            truncated = complex.skeleton(k);
            &truncated
        }
        _ => complex,
    };

    let pairs = calculate_pairs_with_config(complex, config)?;
    let diagrams = make_persistence_diagrams(complex, &pairs, config.include_all_unpaired_creators);

    tracing::debug!(
        diagrams = diagrams.len(),
        points = diagrams.iter().map(PersistenceDiagram::len).sum::<usize>(),
        "Calculated persistence diagrams"
    );

    Ok(diagrams)
}

/// Zero-dimensional diagram of a function path complex.
///
/// The path is connected, so the diagram has exactly one essential point.
/// Its death is set to the maximum (sublevel) or minimum (superlevel)
/// value of the complex, which keeps every point finite and on the same
/// side of the diagonal. `max_dimension` of `config` is ignored: edges are
/// what merge the components. Returns `None` for an empty complex.
pub fn calculate_function_diagram(
    complex: &SimplicialComplex,
    filtration: Filtration,
    config: &PersistenceConfig,
) -> Result<Option<PersistenceDiagram>> {
    let Some((min, max)) = complex.data_range() else {
        return Ok(None);
    };

    let config = PersistenceConfig {
        include_all_unpaired_creators: true,
        max_dimension: None,
        ..config.clone()
    };

    let mut diagrams = calculate_persistence_diagrams(complex, &config)?;
    if diagrams.len() != 1 {
        return Err(Error::InvariantViolation(format!(
            "expected a single persistence diagram, got {}",
            diagrams.len()
        )));
    }

    let mut diagram = diagrams.remove(0);
    if diagram.betti() != 1 {
        return Err(Error::InvariantViolation(format!(
            "expected Betti number 1, got {}",
            diagram.betti()
        )));
    }

    diagram.replace_infinity(match filtration {
        Filtration::Sublevel => max,
        Filtration::Superlevel => min,
    });

    Ok(Some(diagram))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::{function_complex, Simplex};

    fn single_edge() -> SimplicialComplex {
        SimplicialComplex::new(vec![
            Simplex::vertex(0, 0.0),
            Simplex::vertex(1, 0.0),
            Simplex::edge(0, 1, 1.0),
        ])
    }

    #[test]
    fn test_single_edge() {
        let pairs = calculate_persistence_pairs::<VectorColumn, _>(&single_edge(), &StandardReduction, false).unwrap();
        assert_eq!(pairs.pairs(), &[(1, 2)]);
        assert_eq!(pairs.essential(), &[0]);

        let diagrams = calculate_persistence_diagrams(&single_edge(), &PersistenceConfig::default()).unwrap();
        assert_eq!(diagrams.len(), 1);
        let d = &diagrams[0];
        assert_eq!(d.dimension(), 0);
        assert_eq!(d.betti(), 1);
        assert!(d.iter().any(|p| *p == Point::new(0.0, 1.0)));
        assert!(d.iter().any(|p| *p == Point::unpaired(0.0)));
    }

    #[test]
    fn test_top_dimension_essentials() {
        // Boundary of a triangle: the cycle is never filled
        let k = SimplicialComplex::new(vec![
            Simplex::vertex(0, 0.0),
            Simplex::vertex(1, 0.0),
            Simplex::vertex(2, 0.0),
            Simplex::edge(0, 1, 1.0),
            Simplex::edge(0, 2, 1.0),
            Simplex::edge(1, 2, 1.0),
        ]);

        let diagrams = calculate_persistence_diagrams(&k, &PersistenceConfig::default()).unwrap();
        assert_eq!(diagrams.len(), 1);

        let config = PersistenceConfig::default().with_all_unpaired_creators(true);
        let diagrams = calculate_persistence_diagrams(&k, &config).unwrap();
        assert_eq!(diagrams.len(), 2);
        assert_eq!(diagrams[1].dimension(), 1);
        assert_eq!(diagrams[1].points(), &[Point::unpaired(1.0)]);
    }

    #[test]
    fn test_max_dimension() {
        let k = SimplicialComplex::new(vec![
            Simplex::vertex(0, 0.0),
            Simplex::vertex(1, 0.0),
            Simplex::vertex(2, 0.0),
            Simplex::edge(0, 1, 1.0),
            Simplex::edge(0, 2, 1.0),
            Simplex::edge(1, 2, 1.0),
            Simplex::new([0, 1, 2], 2.0).unwrap(),
        ]);

        let config = PersistenceConfig::default().with_all_unpaired_creators(true);
        let full = calculate_persistence_diagrams(&k, &config).unwrap();
        assert_eq!(full[1].points(), &[Point::new(1.0, 2.0)]);

        let truncated = calculate_persistence_diagrams(&k, &config.with_max_dimension(1)).unwrap();
        assert_eq!(truncated[1].points(), &[Point::unpaired(1.0)]);
    }

    #[test]
    fn test_invalid_complex_is_rejected() {
        let k = SimplicialComplex::new(vec![
            Simplex::edge(0, 1, 1.0),
            Simplex::vertex(0, 0.0),
            Simplex::vertex(1, 0.0),
        ]);
        let err = calculate_persistence_diagrams(&k, &PersistenceConfig::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidComplex(_)));
    }

    #[test]
    fn test_function_diagram_ignores_truncation() {
        let k = function_complex(&[0.0, 3.0, 1.0, 4.0], Filtration::Sublevel);
        let config = PersistenceConfig::default().with_max_dimension(0);

        let diagram = calculate_function_diagram(&k, Filtration::Sublevel, &config)
            .unwrap()
            .unwrap();
        assert_eq!(diagram.dimension(), 0);
        assert_eq!(diagram.betti(), 0);
        assert!(diagram.iter().any(|p| *p == Point::new(0.0, 4.0)));
        assert!(diagram.iter().any(|p| *p == Point::new(1.0, 3.0)));

        let superlevel = function_complex(&[0.0, 3.0, 1.0, 4.0], Filtration::Superlevel);
        let diagram = calculate_function_diagram(&superlevel, Filtration::Superlevel, &config)
            .unwrap()
            .unwrap();
        assert!(diagram.iter().any(|p| *p == Point::new(4.0, 0.0)));

        let empty = calculate_function_diagram(&SimplicialComplex::default(), Filtration::Sublevel, &config);
        assert!(empty.unwrap().is_none());
    }

    #[test]
    fn test_empty_complex() {
        let k = SimplicialComplex::default();
        let pairs = calculate_pairs_with_config(&k, &PersistenceConfig::default()).unwrap();
        assert!(pairs.is_empty());
        let diagrams = calculate_persistence_diagrams(&k, &PersistenceConfig::default()).unwrap();
        assert!(diagrams.is_empty());
    }
}
