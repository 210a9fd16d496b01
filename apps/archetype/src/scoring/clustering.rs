//! Fixed-iteration Lloyd refinement seeded at the six pure axes.
//!
//! The loop always runs `iterations` rounds; it never checks convergence, so
//! runtime is bounded and the output is reproducible.

use crate::models::axis::{AxisVector, AXIS_COUNT};

pub const DEFAULT_ITERATIONS: usize = 5;
/// Upper bound on refinement rounds, whatever the caller asks for.
pub const MAX_ITERATIONS: usize = 100;

pub type Centroids = [AxisVector; AXIS_COUNT];

/// Centroid `k` is the unit vector along axis `k`.
pub fn basis_centroids() -> Centroids {
    let mut centroids = [[0.0; AXIS_COUNT]; AXIS_COUNT];
    for (k, centroid) in centroids.iter_mut().enumerate() {
        centroid[k] = 1.0;
    }
    centroids
}

pub fn euclidean_distance(a: &AxisVector, b: &AxisVector) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Relative tolerance under which two distances count as a tie.
const TIE_EPSILON: f64 = 1e-12;

/// Index of the single closest centroid, or `None` when two or more
/// centroids are equally close.
pub fn nearest_centroid(point: &AxisVector, centroids: &Centroids) -> Option<usize> {
    let distances = centroids.map(|centroid| euclidean_distance(point, &centroid));
    let best = distances.iter().copied().fold(f64::INFINITY, f64::min);
    let tolerance = TIE_EPSILON * best.max(1.0);
    let mut nearest = distances
        .iter()
        .enumerate()
        .filter(|(_, d)| **d - best <= tolerance)
        .map(|(k, _)| k);
    match (nearest.next(), nearest.next()) {
        (Some(k), None) => Some(k),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ClusterRefiner {
    iterations: usize,
}

impl Default for ClusterRefiner {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATIONS)
    }
}

impl ClusterRefiner {
    /// `iterations` is capped at `MAX_ITERATIONS`.
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations: iterations.min(MAX_ITERATIONS),
        }
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Runs the refinement. A point tied between centroids sits the round
    /// out; a centroid with no assigned points keeps its previous position.
    pub fn refine(&self, points: &[AxisVector]) -> Centroids {
        let mut centroids = basis_centroids();

        for _ in 0..self.iterations {
            let mut sums = [[0.0; AXIS_COUNT]; AXIS_COUNT];
            let mut counts = [0usize; AXIS_COUNT];

            for point in points {
                let Some(k) = nearest_centroid(point, &centroids) else {
                    continue;
                };
                counts[k] += 1;
                for (sum, component) in sums[k].iter_mut().zip(point) {
                    *sum += component;
                }
            }

            for k in 0..AXIS_COUNT {
                if counts[k] == 0 {
                    continue;
                }
                let n = counts[k] as f64;
                for (c, sum) in centroids[k].iter_mut().zip(&sums[k]) {
                    *c = sum / n;
                }
            }
        }

        centroids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iterations_are_capped() {
        assert_eq!(ClusterRefiner::new(usize::MAX).iterations(), MAX_ITERATIONS);
        assert_eq!(ClusterRefiner::new(7).iterations(), 7);
    }

    #[test]
    fn test_zero_iterations_keeps_basis() {
        let points = vec![[2.0, 0.0, 0.0, 0.0, 0.0, 0.0]];
        assert_eq!(ClusterRefiner::new(0).refine(&points), basis_centroids());
    }

    #[test]
    fn test_empty_clusters_keep_their_centroid() {
        let points = vec![[2.0, 0.0, 0.0, 0.0, 0.0, 0.0], [1.0, 0.0, 0.0, 0.0, 0.0, 0.0]];
        let centroids = ClusterRefiner::default().refine(&points);
        assert_eq!(centroids[0], [1.5, 0.0, 0.0, 0.0, 0.0, 0.0]);
        for k in 1..AXIS_COUNT {
            assert_eq!(centroids[k], basis_centroids()[k]);
        }
    }

    #[test]
    fn test_tied_point_moves_no_centroid() {
        // Equidistant from R and I.
        let points = vec![[1.0, 1.0, 0.0, 0.0, 0.0, 0.0]];
        assert_eq!(nearest_centroid(&points[0], &basis_centroids()), None);
        assert_eq!(ClusterRefiner::default().refine(&points), basis_centroids());
    }

    #[test]
    fn test_three_way_split_is_a_tie() {
        let third = 1.75 / 3.0;
        let point = [0.0, third, 0.0, third, third, 0.0];
        assert_eq!(nearest_centroid(&point, &basis_centroids()), None);
    }

    #[test]
    fn test_tied_point_joins_once_the_tie_breaks() {
        let points = vec![
            [1.0, 1.0, 0.0, 0.0, 0.0, 0.0],
            [1.5, 0.0, 0.0, 0.0, 0.0, 0.0],
        ];
        let centroids = ClusterRefiner::new(2).refine(&points);
        // Round 1 moves R away to (1.5, 0, ..), leaving I strictly closest
        // to the mixed point in round 2.
        assert_eq!(centroids[0], [1.5, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(centroids[1], [1.0, 1.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_refinement_is_deterministic() {
        let points = vec![
            [0.5, 0.5, 0.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 1.25, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 0.6, 0.6, 0.6],
            [0.0, 1.75, 0.0, 0.0, 0.0, 0.0],
        ];
        let refiner = ClusterRefiner::default();
        assert_eq!(refiner.refine(&points), refiner.refine(&points));
    }

    #[test]
    fn test_nearest_centroid_picks_closest() {
        let point = [0.0, 0.0, 0.0, 0.0, 0.0, 0.9];
        assert_eq!(nearest_centroid(&point, &basis_centroids()), Some(5));
    }
}
