use serde::{Deserialize, Serialize};

use crate::models::axis::{AxisVector, AXIS_COUNT};
use crate::scoring::clustering::{euclidean_distance, Centroids};

pub const DEFAULT_TAU: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityMode {
    /// Cosine similarity clamped at 0.
    #[default]
    Cosine,
    /// Negative Euclidean distance.
    Euclidean,
}

impl SimilarityMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "cosine" => Some(Self::Cosine),
            "euclidean" => Some(Self::Euclidean),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cosine => "cosine",
            Self::Euclidean => "euclidean",
        }
    }
}

/// Cosine similarity; 0 when either vector has zero norm.
pub fn cosine_similarity(a: &AxisVector, b: &AxisVector) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Temperature-scaled softmax, stabilized by subtracting the row maximum.
pub fn softmax(scores: &AxisVector, tau: f64) -> AxisVector {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mut out = [0.0; AXIS_COUNT];
    for (o, s) in out.iter_mut().zip(scores) {
        *o = ((s - max) / tau).exp();
    }
    let total: f64 = out.iter().sum();
    for o in out.iter_mut() {
        *o /= total;
    }
    out
}

/// Soft assignment of points over the final centroids.
#[derive(Debug, Clone, Copy)]
pub struct SimilarityScorer {
    mode: SimilarityMode,
    tau: f64,
}

impl SimilarityScorer {
    /// `tau` must be positive and finite; callers sanitize it first.
    pub fn new(mode: SimilarityMode, tau: f64) -> Self {
        Self { mode, tau }
    }

    pub fn score(&self, point: &AxisVector, centroid: &AxisVector) -> f64 {
        match self.mode {
            SimilarityMode::Cosine => cosine_similarity(point, centroid).max(0.0),
            SimilarityMode::Euclidean => -euclidean_distance(point, centroid),
        }
    }

    /// One distribution per point, each summing to 1 across the six centroids.
    pub fn soft_assignments(&self, points: &[AxisVector], centroids: &Centroids) -> Vec<AxisVector> {
        points
            .iter()
            .map(|point| {
                let scores = centroids.map(|centroid| self.score(point, &centroid));
                softmax(&scores, self.tau)
            })
            .collect()
    }
}
