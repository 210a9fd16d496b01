use serde::{Deserialize, Serialize};

use crate::models::axis::{Axis, AxisMap, AxisScores};
use crate::scoring::params::TuningParams;

/// How the report was produced, for transparency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringDiagnostics {
    pub courses_scored: usize,
    /// Mean of per-course maximum soft-assignment probability.
    pub confidence: f64,
    /// Weight given to the soft-clustered totals, in [0.5, 0.95].
    pub alpha: f64,
    pub tuning: TuningParams,
}

/// Full six-axis profile for one student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeReport {
    pub primary_archetype: Axis,
    pub primary_archetype_debiased: Axis,
    /// Raw scheme.
    pub archetype_percentages: AxisScores,
    /// Frequency-normalized scheme.
    pub normalized_percentages: AxisScores,
    pub opportunity_normalized_percentages: AxisScores,
    /// Blended totals behind `archetype_percentages`.
    pub archetype_scores: AxisScores,
    pub debias_percentages: AxisScores,
    pub debias_scores: AxisScores,
    /// Top courses per axis by blended contribution.
    pub contributing_subjects: AxisMap<Vec<String>>,
    pub diagnostics: ScoringDiagnostics,
}

/// The hard-clustering-era shape: primary plus raw percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleArchetypeView {
    pub primary_archetype: Axis,
    pub archetype_percentages: AxisScores,
}

/// Flat columns the persistence layer stores per user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeColumns {
    pub primary_archetype: String,
    pub archetype_realistic_percentage: f64,
    pub archetype_investigative_percentage: f64,
    pub archetype_artistic_percentage: f64,
    pub archetype_social_percentage: f64,
    pub archetype_enterprising_percentage: f64,
    pub archetype_conventional_percentage: f64,
}

impl ArchetypeReport {
    pub fn simple_view(&self) -> SimpleArchetypeView {
        SimpleArchetypeView {
            primary_archetype: self.primary_archetype,
            archetype_percentages: self.archetype_percentages.clone(),
        }
    }

    pub fn record_columns(&self) -> ArchetypeColumns {
        let pct = &self.archetype_percentages;
        ArchetypeColumns {
            primary_archetype: self.primary_archetype.name().to_string(),
            archetype_realistic_percentage: pct[Axis::Realistic],
            archetype_investigative_percentage: pct[Axis::Investigative],
            archetype_artistic_percentage: pct[Axis::Artistic],
            archetype_social_percentage: pct[Axis::Social],
            archetype_enterprising_percentage: pct[Axis::Enterprising],
            archetype_conventional_percentage: pct[Axis::Conventional],
        }
    }
}
