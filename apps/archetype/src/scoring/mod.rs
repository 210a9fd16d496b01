// Scoring engine: grade weights, course vectors, cluster refinement,
// soft assignment, confidence blending, normalization views, debiasing.
// Everything here is pure and synchronous; no I/O.

pub mod blending;
pub mod clustering;
pub mod debias;
pub mod engine;
pub mod normalization;
pub mod params;
pub mod similarity;
pub mod vectors;
pub mod weights;

// Re-export the public API consumed by handlers and the binary.
pub use engine::ArchetypeEngine;
pub use params::{TuningInput, TuningParams};
pub use similarity::SimilarityMode;
