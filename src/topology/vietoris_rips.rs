//! Vietoris-Rips Complex Construction
//!
//! The Vietoris-Rips complex VR_ε(X) is a simplicial complex where:
//! - 0-simplices are the points in X
//! - A k-simplex [v₀, ..., vₖ] exists iff d(vᵢ, vⱼ) ≤ ε for all i,j
//!
//! Each simplex enters the filtration at the largest pairwise distance
//! among its vertices, which makes the filtration monotone with respect
//! to the face relation. Building all cliques is exponential in the
//! dimension, so the construction is capped at `max_dimension`.

use ndarray::Array2;

use super::{Filtration, Simplex, SimplicialComplex, Vertex};

/// Vietoris-Rips filtration builder
#[derive(Debug, Clone)]
pub struct VietorisRips {
    /// Distance matrix (precomputed)
    distances: Array2<f64>,
    /// Maximum filtration value
    max_epsilon: f64,
    /// Highest simplex dimension to build
    max_dimension: usize,
}

impl VietorisRips {
    /// Create a new VR filtration from a distance matrix
    pub fn new(distances: Array2<f64>, max_epsilon: f64, max_dimension: usize) -> Self {
        Self {
            distances,
            max_epsilon,
            max_dimension,
        }
    }

    /// Create from point cloud (one point per row, Euclidean distance)
    pub fn from_points(points: &Array2<f64>, max_epsilon: f64, max_dimension: usize) -> Self {
        Self::new(Self::compute_distance_matrix(points), max_epsilon, max_dimension)
    }

    /// Compute Euclidean distance matrix
    pub fn compute_distance_matrix(points: &Array2<f64>) -> Array2<f64> {
        let n = points.nrows();
        let dim = points.ncols();

        let mut dm = Array2::<f64>::zeros((n, n));

        for i in 0..n {
            for j in i+1..n {
                let mut dist_sq = 0.0;
                for d in 0..dim {
                    let diff = points[[i, d]] - points[[j, d]];
                    dist_sq += diff * diff;
                }
                let dist = dist_sq.sqrt();
                dm[[i, j]] = dist;
                dm[[j, i]] = dist;
            }
        }

        dm
    }

    pub fn n_points(&self) -> usize {
        self.distances.nrows()
    }

    pub fn max_epsilon(&self) -> f64 {
        self.max_epsilon
    }

    /// Build the complex in sublevel filtration order
    pub fn build(&self) -> SimplicialComplex {
        let n = self.n_points();

        // Upper neighbours only, so that every clique is produced once
        let neighbours: Vec<Vec<Vertex>> = (0..n)
            .map(|i| {
                (i+1..n)
                    .filter(|&j| self.distances[[i, j]] <= self.max_epsilon)
                    .collect()
            })
            .collect();

        let mut simplices = Vec::new();
        for v in 0..n {
            simplices.push(Simplex::vertex(v, 0.0));
            self.expand(&mut simplices, vec![v], 0.0, &neighbours[v], &neighbours);
        }

        let mut complex = SimplicialComplex::new(simplices);
        complex.sort(Filtration::Sublevel);

        tracing::debug!(
            points = n,
            simplices = complex.len(),
            max_epsilon = self.max_epsilon,
            max_dimension = self.max_dimension,
            "Built Vietoris-Rips complex"
        );

        complex
    }

    /// Add all cofaces of `clique` formed with `candidates`
    fn expand(
        &self,
        simplices: &mut Vec<Simplex>,
        clique: Vec<Vertex>,
        value: f64,
        candidates: &[Vertex],
        neighbours: &[Vec<Vertex>],
    ) {
        if clique.len() > self.max_dimension {
            return;
        }

        for &w in candidates {
            let birth = clique.iter()
                .map(|&u| self.distances[[u, w]])
                .fold(value, f64::max);

            let mut coface = clique.clone();
            coface.push(w);

            // Common upper neighbours of the enlarged clique
            let next: Vec<Vertex> = candidates.iter()
                .copied()
                .filter(|&x| x > w && neighbours[w].binary_search(&x).is_ok())
                .collect();

            simplices.push(Simplex::from_sorted(coface.clone(), birth));
            self.expand(simplices, coface, birth, &next, neighbours);
        }
    }
}
