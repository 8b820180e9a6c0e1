use adjacency::{symmetry, AdjacencyMatrix, Error, Method};
use nalgebra::DMatrix;
use proptest::prelude::*;

/// A weight drawn mostly from "interesting" values, with some arbitrary finite ones mixed in,
/// including ones large enough for sums to overflow.
fn weight() -> impl Strategy<Value = f64> {
    prop_oneof![
        3 => Just(0.0),
        2 => Just(1.0),
        1 => -1e6f64..1e6,
        1 => prop_oneof![Just(f64::MAX), Just(-f64::MAX), 1e307f64..f64::MAX],
    ]
}

fn adjacency_matrix(max_nodes: usize) -> impl Strategy<Value = AdjacencyMatrix> {
    (0..=max_nodes).prop_flat_map(|n| {
        proptest::collection::vec(weight(), n * n).prop_map(move |entries| {
            AdjacencyMatrix::from_matrix(DMatrix::from_vec(n, n, entries)).unwrap()
        })
    })
}

fn any_method() -> impl Strategy<Value = Method> {
    prop_oneof![Just(Method::Average), Just(Method::Triu), Just(Method::Tril)]
}

proptest! {
    #[test]
    fn prop_symmetrized_is_symmetric(a in adjacency_matrix(8), method in any_method()) {
        prop_assert!(a.symmetrize(method).is_symmetric());
    }

    #[test]
    fn prop_average_keeps_symmetric_input(a in adjacency_matrix(8)) {
        // Mirroring a triangle is a cheap way to get an arbitrary symmetric matrix.
        let symmetric = a.symmetrize(Method::Triu);

        prop_assert_eq!(symmetric.symmetrize(Method::Average), symmetric);
    }

    #[test]
    fn prop_symmetrize_is_idempotent(a in adjacency_matrix(8), method in any_method()) {
        let once = a.symmetrize(method);

        prop_assert_eq!(once.symmetrize(method), once);
    }

    #[test]
    fn prop_symmetry_invariant_under_transpose(a in adjacency_matrix(8)) {
        prop_assert_eq!(a.is_symmetric(), a.transpose().is_symmetric());
    }

    #[test]
    fn prop_symmetrize_does_not_mutate(a in adjacency_matrix(8), method in any_method()) {
        let before = a.clone();
        let _ = a.symmetrize(method);

        prop_assert_eq!(a, before);
    }

    #[test]
    fn prop_out_of_bounds_edge_is_rejected(
        a in adjacency_matrix(6),
        offset in 0usize..4,
        column in 0usize..6,
    ) {
        let mut a = a;
        let before = a.clone();
        let n = a.node_count();
        let row = n + offset;

        prop_assert_eq!(
            a.set_edge(row, column, 1.0),
            Err(Error::Index { row, col: column, n })
        );
        prop_assert_eq!(a, before);
    }

    #[test]
    fn prop_free_functions_agree(a in adjacency_matrix(8), method in any_method()) {
        prop_assert_eq!(symmetry::is_symmetric(a.as_matrix()), Ok(a.is_symmetric()));
        prop_assert_eq!(
            symmetry::symmetrize(a.as_matrix(), method),
            Ok(a.symmetrize(method).into_inner())
        );
    }

    #[test]
    fn prop_non_square_is_rejected(rows in 0usize..6, cols in 0usize..6) {
        prop_assume!(rows != cols);
        let matrix = DMatrix::<f64>::zeros(rows, cols);

        prop_assert_eq!(symmetry::is_symmetric(&matrix), Err(Error::Shape { rows, cols }));
        prop_assert_eq!(
            symmetry::symmetrize(&matrix, Method::Average),
            Err(Error::Shape { rows, cols })
        );
        prop_assert_eq!(
            AdjacencyMatrix::from_matrix(matrix),
            Err(Error::Shape { rows, cols })
        );
    }
}

#[test]
fn five_node_scenario() {
    let mut a = AdjacencyMatrix::zeros(5);
    for (i, j) in [(0, 1), (1, 2), (1, 4), (2, 1), (2, 3), (4, 1)] {
        a.add_edge(i, j).unwrap();
    }

    assert!(!a.is_symmetric());

    let b = a.symmetrize(Method::Average);
    let expected = [
        ((0, 1), 0.5),
        ((1, 2), 1.0),
        ((2, 3), 0.5),
        ((1, 4), 1.0),
    ];

    for i in 0..5 {
        for j in 0..5 {
            let weight = expected
                .iter()
                .find(|((p, q), _)| (*p, *q) == (i, j) || (*q, *p) == (i, j))
                .map_or(0.0, |(_, w)| *w);

            assert_eq!(b.get(i, j), Some(weight), "entry ({i}, {j})");
        }
    }
}
