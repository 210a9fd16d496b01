//! Blender: mixes two aggregation strategies through one confidence scalar.
//!
//! The primary strategy (soft clustering) is trusted in proportion to how
//! decisive the soft assignments are; the remainder comes from the fallback
//! strategy (direct per-axis sums). Both strategies are trait objects, so an
//! alternative aggregation can be swapped in without touching the Blender.

use crate::models::axis::{Axis, AxisScores, AxisVector, AXIS_COUNT};
use crate::scoring::vectors::CourseVector;

pub const ALPHA_MIN: f64 = 0.5;
pub const ALPHA_MAX: f64 = 0.95;

/// Distributes one point's signal over the six axes.
pub trait AggregationStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn contribution(&self, point: &CourseVector, assignment: &AxisVector) -> AxisVector;
}

/// Whole course weight spread by its soft assignment, conditioned on the
/// course's own tags: a course never feeds an axis it is not tagged with.
pub struct SoftAggregation;

impl AggregationStrategy for SoftAggregation {
    fn name(&self) -> &'static str {
        "soft"
    }

    fn contribution(&self, point: &CourseVector, assignment: &AxisVector) -> AxisVector {
        let support: f64 = point.tags.axes().iter().map(|a| assignment[a.index()]).sum();
        if support <= 0.0 || !support.is_finite() {
            return point.components;
        }
        let mut out = [0.0; AXIS_COUNT];
        for axis in point.tags.axes() {
            let k = axis.index();
            out[k] = point.weight * (assignment[k] / support);
        }
        out
    }
}

/// The course vector itself; clustering is ignored.
pub struct DirectAggregation;

impl AggregationStrategy for DirectAggregation {
    fn name(&self) -> &'static str {
        "direct"
    }

    fn contribution(&self, point: &CourseVector, _assignment: &AxisVector) -> AxisVector {
        point.components
    }
}

/// Mean over points of the largest assignment probability.
pub fn assignment_confidence(assignments: &[AxisVector]) -> f64 {
    if assignments.is_empty() {
        return 0.0;
    }
    let total: f64 = assignments
        .iter()
        .map(|row| row.iter().copied().fold(0.0, f64::max))
        .sum();
    total / assignments.len() as f64
}

pub fn blend_factor(confidence: f64) -> f64 {
    if confidence.is_nan() {
        return ALPHA_MIN;
    }
    confidence.clamp(ALPHA_MIN, ALPHA_MAX)
}

#[derive(Debug, Clone)]
pub struct BlendOutcome {
    pub confidence: f64,
    pub alpha: f64,
    pub soft_totals: AxisScores,
    pub direct_totals: AxisScores,
    pub blended_totals: AxisScores,
    /// Blended contribution of each point, same order as the input points.
    pub contributions: Vec<AxisVector>,
}

impl BlendOutcome {
    /// Per-point contributions feeding `axis`, in point order.
    pub fn contributions_for(&self, axis: Axis) -> Vec<f64> {
        self.contributions.iter().map(|c| c[axis.index()]).collect()
    }
}

pub struct Blender<'a> {
    primary: &'a dyn AggregationStrategy,
    fallback: &'a dyn AggregationStrategy,
}

impl Default for Blender<'static> {
    fn default() -> Self {
        Self::new(&SoftAggregation, &DirectAggregation)
    }
}

impl<'a> Blender<'a> {
    pub fn new(primary: &'a dyn AggregationStrategy, fallback: &'a dyn AggregationStrategy) -> Self {
        Self { primary, fallback }
    }

    pub fn blend(&self, points: &[CourseVector], assignments: &[AxisVector]) -> BlendOutcome {
        let confidence = assignment_confidence(assignments);
        let alpha = blend_factor(confidence);

        let mut soft_totals = [0.0; AXIS_COUNT];
        let mut direct_totals = [0.0; AXIS_COUNT];
        let mut blended_totals = [0.0; AXIS_COUNT];
        let mut contributions = Vec::with_capacity(points.len());

        for (point, assignment) in points.iter().zip(assignments) {
            let soft = self.primary.contribution(point, assignment);
            let direct = self.fallback.contribution(point, assignment);
            let mut blended = [0.0; AXIS_COUNT];
            for k in 0..AXIS_COUNT {
                blended[k] = alpha * soft[k] + (1.0 - alpha) * direct[k];
                soft_totals[k] += soft[k];
                direct_totals[k] += direct[k];
                blended_totals[k] += blended[k];
            }
            contributions.push(blended);
        }

        tracing::debug!(
            primary = self.primary.name(),
            fallback = self.fallback.name(),
            confidence,
            alpha,
            "Blended axis totals"
        );

        BlendOutcome {
            confidence,
            alpha,
            soft_totals: soft_totals.into(),
            direct_totals: direct_totals.into(),
            blended_totals: blended_totals.into(),
            contributions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum::CourseTags;

    fn point(tags: &str, weight: f64) -> CourseVector {
        CourseVector::new("X", 0, weight, &CourseTags::parse(tags).unwrap())
    }

    #[test]
    fn test_alpha_is_clamped() {
        assert_eq!(blend_factor(0.2), ALPHA_MIN);
        assert_eq!(blend_factor(0.99), ALPHA_MAX);
        assert_eq!(blend_factor(0.7), 0.7);
        assert_eq!(blend_factor(f64::NAN), ALPHA_MIN);
    }

    #[test]
    fn test_confidence_is_mean_of_row_maxima() {
        let rows = vec![
            [0.5, 0.1, 0.1, 0.1, 0.1, 0.1],
            [0.1, 0.1, 0.1, 0.1, 0.1, 0.5],
            [0.9, 0.02, 0.02, 0.02, 0.02, 0.02],
        ];
        assert!((assignment_confidence(&rows) - (0.5 + 0.5 + 0.9) / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_soft_contribution_stays_on_own_tags() {
        let soft = SoftAggregation.contribution(&point("A", 1.5), &[0.4, 0.1, 0.2, 0.1, 0.1, 0.1]);
        assert_eq!(soft, [0.0, 0.0, 1.5, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_blended_totals_mix_soft_and_direct() {
        let points = vec![point("RI", 2.0)];
        let assignments = vec![[0.6, 0.3, 0.1, 0.0, 0.0, 0.0]];
        let outcome = Blender::default().blend(&points, &assignments);

        assert!((outcome.alpha - 0.6).abs() < 1e-12);
        // 2.0 * 0.6 / 0.9 and 2.0 * 0.3 / 0.9
        assert!((outcome.soft_totals[Axis::Realistic] - 4.0 / 3.0).abs() < 1e-12);
        assert!((outcome.soft_totals[Axis::Investigative] - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(outcome.soft_totals[Axis::Artistic], 0.0);
        assert!((outcome.direct_totals[Axis::Realistic] - 1.0).abs() < 1e-12);
        // 0.6 * 4/3 + 0.4 * 1.0
        assert!((outcome.blended_totals[Axis::Realistic] - 1.2).abs() < 1e-12);
        // 0.6 * 2/3 + 0.4 * 1.0
        assert!((outcome.blended_totals[Axis::Investigative] - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_blend_preserves_total_weight() {
        let points = vec![point("RI", 1.5), point("SEC", 0.75)];
        let assignments = vec![[0.3, 0.3, 0.1, 0.1, 0.1, 0.1], [0.0, 0.0, 0.0, 0.2, 0.2, 0.6]];
        let outcome = Blender::default().blend(&points, &assignments);
        assert!((outcome.blended_totals.sum() - 2.25).abs() < 1e-12);
    }

    #[test]
    fn test_contributions_sum_to_blended_totals() {
        let points = vec![point("RI", 1.5), point("I", 1.0)];
        let assignments = vec![[0.5, 0.5, 0.0, 0.0, 0.0, 0.0], [0.1, 0.9, 0.0, 0.0, 0.0, 0.0]];
        let outcome = Blender::default().blend(&points, &assignments);
        for axis in Axis::ALL {
            let sum: f64 = outcome.contributions_for(axis).iter().sum();
            assert!((sum - outcome.blended_totals[axis]).abs() < 1e-12);
        }
    }

    struct Uniform;

    impl AggregationStrategy for Uniform {
        fn name(&self) -> &'static str {
            "uniform"
        }

        fn contribution(&self, point: &CourseVector, _assignment: &AxisVector) -> AxisVector {
            [point.weight / AXIS_COUNT as f64; AXIS_COUNT]
        }
    }

    #[test]
    fn test_strategies_are_swappable() {
        let points = vec![point("R", 1.2)];
        let assignments = vec![[1.0, 0.0, 0.0, 0.0, 0.0, 0.0]];
        let outcome = Blender::new(&Uniform, &DirectAggregation).blend(&points, &assignments);
        assert_eq!(outcome.alpha, ALPHA_MAX);
        assert!((outcome.soft_totals[Axis::Social] - 0.2).abs() < 1e-12);
    }
}
