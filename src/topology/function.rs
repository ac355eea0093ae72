//! Function-Value Filtrations
//!
//! A sequence of function values f(0), f(1), ..., f(n-1) is turned into a
//! path complex: one vertex per sample and one edge between consecutive
//! samples. Vertices carry their function value; an edge carries the
//! larger (sublevel) or smaller (superlevel) value of its endpoints, so
//! that it never enters the filtration before them.
//!
//! The zero-dimensional persistent homology of the result tracks the
//! local minima (sublevel) or maxima (superlevel) of the function.

use super::{Filtration, Simplex, SimplicialComplex};

/// Build the path complex of a function, sorted in filtration order
pub fn function_complex(values: &[f64], filtration: Filtration) -> SimplicialComplex {
    let n = values.len();
    let mut simplices = Vec::with_capacity(2 * n.saturating_sub(1) + 1);

    for (i, &value) in values.iter().enumerate() {
        simplices.push(Simplex::vertex(i, value));
    }

    for (i, pair) in values.windows(2).enumerate() {
        simplices.push(Simplex::edge(i, i + 1, filtration.edge_value(pair[0], pair[1])));
    }

    let mut complex = SimplicialComplex::new(simplices);
    complex.sort(filtration);
    complex
}
