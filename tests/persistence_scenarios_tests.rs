//! End-to-end calculations on small complexes with known homology

use approx::assert_relative_eq;
use std::io::Cursor;

use tda_persistence::io::{read_boundary_matrix, read_functions, write_diagrams};
use tda_persistence::{
    calculate_persistence_diagrams,
    calculate_persistence_pairs,
    function_complex,
    p_norm,
    ColumnKind,
    Error,
    Filtration,
    PersistenceConfig,
    PersistencePairs,
    Point,
    Reduction,
    ReductionKind,
    Simplex,
    SimplicialComplex,
    StandardReduction,
    Summary,
    TwistReduction,
    VectorColumn,
};

fn triangle_boundary() -> SimplicialComplex {
    SimplicialComplex::new(vec![
        Simplex::vertex(0, 0.0),
        Simplex::vertex(1, 0.0),
        Simplex::vertex(2, 0.0),
        Simplex::edge(0, 1, 1.0),
        Simplex::edge(0, 2, 1.0),
        Simplex::edge(1, 2, 1.0),
    ])
}

fn all_configs() -> Vec<PersistenceConfig> {
    let mut configs = Vec::new();
    for algorithm in [ReductionKind::Standard, ReductionKind::Twist] {
        for representation in [ColumnKind::Vector, ColumnKind::Set, ColumnKind::List] {
            for dualize in [false, true] {
                configs.push(
                    PersistenceConfig::default()
                        .with_algorithm(algorithm)
                        .with_representation(representation)
                        .with_dualize(dualize),
                );
            }
        }
    }
    configs
}

#[test]
fn triangle_has_one_component_and_two_merges() {
    for config in all_configs() {
        let diagrams = calculate_persistence_diagrams(&triangle_boundary(), &config).unwrap();
        assert_eq!(diagrams.len(), 1, "{:?}", config);

        let d0 = &diagrams[0];
        assert_eq!(d0.dimension(), 0);
        assert_eq!(d0.betti(), 1);
        assert_eq!(d0.len(), 3);
        assert_eq!(d0.iter().filter(|p| **p == Point::new(0.0, 1.0)).count(), 2);
    }
}

#[test]
fn triangle_cycle_with_all_unpaired_creators() {
    let config = PersistenceConfig::default().with_all_unpaired_creators(true);
    let diagrams = calculate_persistence_diagrams(&triangle_boundary(), &config).unwrap();

    assert_eq!(diagrams.len(), 2);
    assert_eq!(diagrams[1].dimension(), 1);
    assert_eq!(diagrams[1].betti(), 1);
}

#[test]
fn single_edge() {
    let k = SimplicialComplex::new(vec![
        Simplex::vertex(0, 0.0),
        Simplex::vertex(1, 0.0),
        Simplex::edge(0, 1, 1.0),
    ]);

    for config in all_configs() {
        let diagrams = calculate_persistence_diagrams(&k, &config).unwrap();
        assert_eq!(diagrams.len(), 1);
        assert_eq!(diagrams[0].betti(), 1);

        let finite: Vec<&Point> = diagrams[0].iter().filter(|p| !p.is_unpaired()).collect();
        assert_eq!(finite, vec![&Point::new(0.0, 1.0)]);
    }
}

#[test]
fn empty_complex_is_not_an_error() {
    let k = SimplicialComplex::default();
    for config in all_configs() {
        let diagrams = calculate_persistence_diagrams(&k, &config).unwrap();
        assert!(diagrams.is_empty());
    }

    let pairs = calculate_persistence_pairs::<VectorColumn, _>(&k, &TwistReduction, false).unwrap();
    assert_eq!(pairs, PersistencePairs::default());
}

#[test]
fn missing_face_is_rejected_before_reduction() {
    let k = SimplicialComplex::new(vec![
        Simplex::vertex(0, 0.0),
        Simplex::edge(0, 1, 1.0),
    ]);
    let err = calculate_persistence_diagrams(&k, &PersistenceConfig::default()).unwrap_err();
    assert!(err.is_invalid_complex());
}

#[test]
fn filled_square_kills_its_loop() {
    // 0 - 1
    // |   |
    // 3 - 2, filled by two triangles at value 3
    let k = SimplicialComplex::new(vec![
        Simplex::vertex(0, 0.0),
        Simplex::vertex(1, 0.0),
        Simplex::vertex(2, 0.0),
        Simplex::vertex(3, 0.0),
        Simplex::edge(0, 1, 1.0),
        Simplex::edge(1, 2, 1.0),
        Simplex::edge(2, 3, 1.0),
        Simplex::edge(0, 3, 1.0),
        Simplex::edge(0, 2, 2.0),
        Simplex::new([0, 1, 2], 3.0).unwrap(),
        Simplex::new([0, 2, 3], 3.0).unwrap(),
    ]);

    let diagrams = calculate_persistence_diagrams(&k, &PersistenceConfig::default()).unwrap();
    assert_eq!(diagrams.len(), 2);

    let d1 = &diagrams[1];
    assert_eq!(d1.dimension(), 1);
    assert_eq!(d1.betti(), 0);
    let mut points: Vec<Point> = d1.points().to_vec();
    points.sort_by(|a, b| a.birth.total_cmp(&b.birth));
    assert_eq!(points, vec![Point::new(1.0, 3.0), Point::new(2.0, 3.0)]);
}

#[test]
fn function_pipeline_matches_hand_computation() {
    let functions = read_functions(Cursor::new("# two minima\n0 3 1 4 2\n")).unwrap();
    assert_eq!(functions.len(), 1);

    let complex = function_complex(&functions[0], Filtration::Sublevel);
    let config = PersistenceConfig::default().with_all_unpaired_creators(true);
    let mut diagrams = calculate_persistence_diagrams(&complex, &config).unwrap();
    assert_eq!(diagrams.len(), 1);

    let diagram = &mut diagrams[0];
    diagram.replace_infinity(4.0);
    diagram.remove_diagonal();
    diagram.sort_by_persistence();

    // Minima 0, 1, 2 born; 1 and 2 merge at values 3 and 4
    assert_eq!(
        diagram.points(),
        &[Point::new(0.0, 4.0), Point::new(1.0, 3.0), Point::new(2.0, 4.0)]
    );

    let summary = Summary::from_diagram(diagram).unwrap();
    assert_relative_eq!(summary.min, 2.0);
    assert_relative_eq!(summary.max, 4.0);
    assert_relative_eq!(summary.mean, 8.0 / 3.0);
    assert_relative_eq!(summary.norm, 24.0_f64.sqrt(), epsilon = 1e-12);
    assert_relative_eq!(p_norm(diagram, 1.0), 8.0);

    let mut out = Vec::new();
    write_diagrams(&mut out, &diagrams, true).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("# Dimension: 0\n# Points: 3\n"));
}

#[test]
fn loaded_matrix_reduces_like_the_complex() {
    // Filled triangle: three vertices, three edges, one 2-simplex
    let text = "\n\n\n0 1\n0 2\n1 2\n3 4 5\n";

    let mut standard = read_boundary_matrix::<VectorColumn, _>(Cursor::new(text)).unwrap();
    let mut twist = standard.clone();
    StandardReduction.reduce(&mut standard);
    TwistReduction.reduce(&mut twist);

    let a = PersistencePairs::from_reduced(&standard);
    let b = PersistencePairs::from_reduced(&twist);
    assert_eq!(a, b);
    assert_eq!(a.pairs(), &[(1, 3), (2, 4), (5, 6)]);
    assert_eq!(a.essential(), &[0]);
}

#[test]
fn malformed_matrix_reports_line() {
    let err = read_boundary_matrix::<VectorColumn, _>(Cursor::new("\n\n0 x\n")).unwrap_err();
    match err {
        Error::Conversion { token, line } => {
            assert_eq!(token, "x");
            assert_eq!(line, 3);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn twist_finishes_when_loaded_dimensions_disagree() {
    // Column 3 has a single entry, so it is read as dimension 0, yet its
    // face is the edge in column 2
    let text = "\n\n0 1\n2\n1\n";

    let mut standard = read_boundary_matrix::<VectorColumn, _>(Cursor::new(text)).unwrap();
    let mut twist = standard.clone();
    StandardReduction.reduce(&mut standard);
    TwistReduction.reduce(&mut twist);

    let expected = PersistencePairs::from_reduced(&standard);
    assert_eq!(expected.pairs(), &[(0, 4), (1, 2), (2, 3)]);
    assert_eq!(PersistencePairs::from_reduced(&twist), expected);

    // Not a boundary matrix: simplex 2 both destroys and creates
    assert!(expected.validate(standard.num_columns()).is_err());
}
