//! Six-axis (RIASEC) vocational profile from per-course grades.
//!
//! The engine turns a grade sequence, aligned to a curriculum's canonical
//! course order, into raw, frequency-normalized, opportunity-normalized and
//! debiased percentage views. See [`scoring::ArchetypeEngine`].

pub mod config;
pub mod curriculum;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod scoring;

pub use curriculum::{CurriculumError, CurriculumMap};
pub use models::{ArchetypeReport, Axis, ProfileRequest};
pub use scoring::{ArchetypeEngine, TuningParams};
