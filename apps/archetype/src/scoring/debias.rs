//! Debiaser: inverse-frequency weighting plus rank-discounted aggregation.
//!
//! Axes that appear on many courses across the curriculum are down-weighted
//! (`idf = 1 / ln(1 + freq)^gamma`), and within an axis the strongest
//! contributions count most (`Σ r^rank · c`), so a long tail of weak,
//! similarly-tagged courses cannot outvote a few strong ones.

use crate::curriculum::CurriculumMap;
use crate::models::axis::{Axis, AxisScores, AxisVector, AXIS_COUNT};
use crate::scoring::blending::BlendOutcome;

pub const DEFAULT_GAMMA: f64 = 0.7;
pub const DEFAULT_DISCOUNT: f64 = 0.75;

/// `1 / ln(1 + freq)^gamma`; an axis no course carries gets 1.
pub fn inverse_frequency_weight(freq: usize, gamma: f64) -> f64 {
    if freq == 0 {
        return 1.0;
    }
    1.0 / (1.0 + freq as f64).ln().powf(gamma)
}

/// Sorts descending and sums `discount^rank * value`, rank starting at 0.
pub fn rank_discounted_sum(mut values: Vec<f64>, discount: f64) -> f64 {
    values.sort_by(|a, b| b.total_cmp(a));
    let mut factor = 1.0;
    let mut total = 0.0;
    for value in values {
        total += factor * value;
        factor *= discount;
    }
    total
}

#[derive(Debug, Clone)]
pub struct DebiasOutcome {
    pub scores: AxisScores,
    pub percentages: AxisScores,
    pub primary: Axis,
}

#[derive(Debug, Clone, Copy)]
pub struct Debiaser {
    gamma: f64,
    discount: f64,
}

impl Default for Debiaser {
    fn default() -> Self {
        Self::new(DEFAULT_GAMMA, DEFAULT_DISCOUNT)
    }
}

impl Debiaser {
    pub fn new(gamma: f64, discount: f64) -> Self {
        Self { gamma, discount }
    }

    pub fn idf_weights(&self, curriculum: &CurriculumMap) -> AxisVector {
        curriculum
            .axis_frequency()
            .map(|freq| inverse_frequency_weight(freq, self.gamma))
    }

    pub fn debias(&self, blend: &BlendOutcome, curriculum: &CurriculumMap) -> DebiasOutcome {
        let idf = self.idf_weights(curriculum);
        let mut scores = [0.0; AXIS_COUNT];
        for axis in Axis::ALL {
            let k = axis.index();
            let weighted = blend
                .contributions_for(axis)
                .into_iter()
                .map(|c| c * idf[k])
                .collect();
            scores[k] = rank_discounted_sum(weighted, self.discount);
        }

        let scores = AxisScores::from(scores);
        let percentages = scores.to_percentages();
        let primary = percentages.primary();
        DebiasOutcome {
            scores,
            percentages,
            primary,
        }
    }
}
