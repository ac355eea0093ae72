//! Properties every persistence calculation has to satisfy, checked on
//! random function complexes and random Vietoris-Rips complexes

use ndarray::Array2;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use tda_persistence::{
    calculate_persistence_pairs,
    function_complex,
    make_persistence_diagrams,
    BoundaryMatrix,
    Filtration,
    ListColumn,
    PersistencePairs,
    Reduction,
    Representation,
    SetColumn,
    SimplicialComplex,
    StandardReduction,
    TwistReduction,
    VectorColumn,
    VietorisRips,
};

fn random_rips(seed: u64, n: usize, max_epsilon: f64) -> SimplicialComplex {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0).unwrap();
    let points = Array2::from_shape_fn((n, 2), |_| normal.sample(&mut rng));
    VietorisRips::from_points(&points, max_epsilon, 3).build()
}

fn pairs_of<R: Representation, A: Reduction>(complex: &SimplicialComplex, algorithm: &A) -> PersistencePairs {
    calculate_persistence_pairs::<R, A>(complex, algorithm, false).unwrap()
}

/// Every index is exactly one of: paired creator, destroyer, essential
fn assert_closure(pairs: &PersistencePairs, n: usize) {
    let mut seen = vec![0usize; n];
    for &(creator, destroyer) in pairs {
        assert!(creator < destroyer);
        seen[creator] += 1;
        seen[destroyer] += 1;
    }
    for &creator in pairs.essential() {
        seen[creator] += 1;
    }
    assert_eq!(2 * pairs.num_pairs() + pairs.essential().len(), n);
    assert!(seen.iter().all(|&count| count == 1));
}

fn assert_idempotent<R: Representation, A: Reduction>(complex: &SimplicialComplex, algorithm: &A) {
    let mut matrix = BoundaryMatrix::<R>::from_complex(complex).unwrap();
    algorithm.reduce(&mut matrix);
    assert!(matrix.is_reduced());
    let first = PersistencePairs::from_reduced(&matrix);

    let stats = algorithm.reduce(&mut matrix);
    assert_eq!(stats.column_additions, 0);
    assert_eq!(PersistencePairs::from_reduced(&matrix), first);
}

#[test]
fn rips_closure_and_independence() {
    for seed in 0..8 {
        let complex = random_rips(seed, 12, 1.2);
        complex.validate().unwrap();

        let reference = pairs_of::<VectorColumn, _>(&complex, &StandardReduction);
        assert_closure(&reference, complex.len());

        assert_eq!(pairs_of::<SetColumn, _>(&complex, &StandardReduction), reference);
        assert_eq!(pairs_of::<ListColumn, _>(&complex, &StandardReduction), reference);
        assert_eq!(pairs_of::<VectorColumn, _>(&complex, &TwistReduction), reference);
        assert_eq!(pairs_of::<SetColumn, _>(&complex, &TwistReduction), reference);
        assert_eq!(pairs_of::<ListColumn, _>(&complex, &TwistReduction), reference);

        let dual = calculate_persistence_pairs::<VectorColumn, _>(&complex, &StandardReduction, true).unwrap();
        assert_eq!(dual, reference);
    }
}

#[test]
fn rips_idempotence() {
    for seed in 0..4 {
        let complex = random_rips(seed, 10, 1.5);
        assert_idempotent::<VectorColumn, _>(&complex, &StandardReduction);
        assert_idempotent::<SetColumn, _>(&complex, &StandardReduction);
        assert_idempotent::<ListColumn, _>(&complex, &TwistReduction);
    }
}

#[test]
fn rips_components_and_non_negativity() {
    for seed in 0..4 {
        let complex = random_rips(seed, 15, 1.0);
        let pairs = pairs_of::<VectorColumn, _>(&complex, &TwistReduction);

        for diagram in make_persistence_diagrams(&complex, &pairs, true) {
            for point in diagram.iter().filter(|p| !p.is_unpaired()) {
                assert!(point.death >= point.birth);
            }
        }
    }

    // Every pair of points is connected at a large enough threshold
    let complex = random_rips(42, 10, 100.0);
    let pairs = pairs_of::<VectorColumn, _>(&complex, &StandardReduction);
    let diagrams = make_persistence_diagrams(&complex, &pairs, false);
    assert_eq!(diagrams[0].dimension(), 0);
    assert_eq!(diagrams[0].betti(), 1);
}

#[test]
fn twist_on_degenerate_matrices() {
    // Vertices only: nothing to reduce, everything essential
    let empty_columns = BoundaryMatrix::<VectorColumn>::from_columns(
        (0..4).map(|_| (VectorColumn::default(), 0)),
    )
    .unwrap();

    let mut standard = empty_columns.clone();
    let mut twist = empty_columns;
    StandardReduction.reduce(&mut standard);
    let stats = TwistReduction.reduce(&mut twist);

    assert_eq!(stats.column_additions, 0);
    assert_eq!(stats.cleared_columns, 0);
    assert_eq!(PersistencePairs::from_reduced(&twist), PersistencePairs::from_reduced(&standard));
    assert_eq!(PersistencePairs::from_reduced(&twist).essential(), &[0, 1, 2, 3]);

    let mut nothing = BoundaryMatrix::<SetColumn>::from_columns(std::iter::empty()).unwrap();
    let stats = TwistReduction.reduce(&mut nothing);
    assert_eq!(stats.column_additions, 0);
    assert!(PersistencePairs::from_reduced(&nothing).is_empty());
}

proptest! {
    #[test]
    fn function_complexes_pair_consistently(
        values in prop::collection::vec(-100.0f64..100.0, 1..40),
        superlevel in any::<bool>(),
    ) {
        let filtration = if superlevel { Filtration::Superlevel } else { Filtration::Sublevel };
        let complex = function_complex(&values, filtration);
        prop_assert_eq!(complex.len(), 2 * values.len() - 1);

        let reference = pairs_of::<VectorColumn, _>(&complex, &StandardReduction);
        assert_closure(&reference, complex.len());

        // A path is contractible
        prop_assert_eq!(reference.essential().len(), 1);

        prop_assert_eq!(&pairs_of::<ListColumn, _>(&complex, &TwistReduction), &reference);
        prop_assert_eq!(&pairs_of::<SetColumn, _>(&complex, &StandardReduction), &reference);

        let diagrams = make_persistence_diagrams(&complex, &reference, true);
        prop_assert_eq!(diagrams.len(), 1);
        for point in diagrams[0].iter().filter(|p| !p.is_unpaired()) {
            if superlevel {
                prop_assert!(point.death <= point.birth);
            } else {
                prop_assert!(point.death >= point.birth);
            }
        }
    }

    #[test]
    fn diagonal_removal_counts_diagonal_points(
        values in prop::collection::vec(0u8..5, 1..30),
    ) {
        // Small integer range forces plenty of points on the diagonal
        let values: Vec<f64> = values.into_iter().map(f64::from).collect();
        let complex = function_complex(&values, Filtration::Sublevel);
        let pairs = pairs_of::<VectorColumn, _>(&complex, &StandardReduction);
        let mut diagram = make_persistence_diagrams(&complex, &pairs, true).remove(0);

        let diagonal = diagram.iter().filter(|p| p.birth == p.death).count();
        let before = diagram.len();
        let removed = diagram.remove_diagonal();

        prop_assert_eq!(removed, diagonal);
        prop_assert_eq!(diagram.len(), before - removed);
        prop_assert!(diagram.iter().all(|p| p.birth != p.death));
        prop_assert_eq!(diagram.betti(), 1);
    }
}
