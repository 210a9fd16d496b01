//! ArchetypeEngine: grades in, six-axis profile out.
//!
//! # Pipeline
//! 1. weights + vectors: one point per graded, tagged course
//! 2. `ClusterRefiner`: fixed-round Lloyd refinement from the axis basis
//! 3. `SimilarityScorer`: temperature softmax over the final centroids
//! 4. `Blender`: soft vs. direct totals mixed by assignment confidence
//! 5. `normalize`: raw / frequency / opportunity percentages
//! 6. `Debiaser`: IDF + rank-discounted profile
//!
//! Pure and synchronous. The curriculum is borrowed read-only, so one map
//! can serve any number of concurrent engines.

use tracing::{debug, warn};

use crate::curriculum::CurriculumMap;
use crate::models::axis::{Axis, AxisMap, AxisVector};
use crate::models::report::{ArchetypeReport, ScoringDiagnostics};
use crate::models::request::ProfileRequest;
use crate::scoring::blending::{BlendOutcome, Blender};
use crate::scoring::clustering::{ClusterRefiner, MAX_ITERATIONS};
use crate::scoring::debias::Debiaser;
use crate::scoring::normalization::normalize;
use crate::scoring::params::TuningParams;
use crate::scoring::similarity::SimilarityScorer;
use crate::scoring::vectors::{build_course_vectors, CourseVector};
use crate::scoring::weights::coerce_grades;

/// Courses listed per axis in `contributing_subjects`.
pub const MAX_CONTRIBUTING_SUBJECTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OrderSource {
    Caller,
    Default,
}

pub struct ArchetypeEngine<'a> {
    curriculum: &'a CurriculumMap,
    params: TuningParams,
}

impl<'a> ArchetypeEngine<'a> {
    pub fn new(curriculum: &'a CurriculumMap) -> Self {
        Self {
            curriculum,
            params: TuningParams::default(),
        }
    }

    /// Out-of-range values are replaced by the built-in defaults.
    pub fn with_params(mut self, params: TuningParams) -> Self {
        self.params = params.sanitized();
        self
    }

    /// Capped at `MAX_ITERATIONS`.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.params.iterations = iterations.min(MAX_ITERATIONS);
        self
    }

    pub fn params(&self) -> &TuningParams {
        &self.params
    }

    /// Scores a loosely-typed request. Per-request tuning overrides this
    /// engine's params; invalid values fall back silently.
    pub fn analyze_request(&self, request: &ProfileRequest) -> Option<ArchetypeReport> {
        let grades = coerce_grades(&request.grades);
        let params = self.params.with_overrides(&request.tuning);
        match request.canonical_order.as_deref() {
            Some(order) => self.run(&grades, order, OrderSource::Caller, params),
            None => self.run(&grades, self.curriculum.default_order(), OrderSource::Default, params),
        }
    }

    /// Scores `grades` against `order` (or the curriculum's default order).
    /// Returns `None` when no course yields a weighted, tagged vector.
    pub fn analyze(&self, grades: &[Option<f64>], order: Option<&[String]>) -> Option<ArchetypeReport> {
        match order {
            Some(order) => self.run(grades, order, OrderSource::Caller, self.params),
            None => self.run(grades, self.curriculum.default_order(), OrderSource::Default, self.params),
        }
    }

    fn run(
        &self,
        grades: &[Option<f64>],
        order: &[String],
        source: OrderSource,
        params: TuningParams,
    ) -> Option<ArchetypeReport> {
        if grades.len() != order.len() && !grades.is_empty() {
            // The default order spans every built-in program, so a single
            // program's transcript is always shorter than it.
            match source {
                OrderSource::Caller => warn!(
                    grades = grades.len(),
                    courses = order.len(),
                    "Grade count does not match canonical order; extra entries are ignored"
                ),
                OrderSource::Default => debug!(
                    grades = grades.len(),
                    courses = order.len(),
                    "Grade count does not match default order; extra entries are ignored"
                ),
            }
        }

        let points = build_course_vectors(grades, order, self.curriculum);
        if points.is_empty() {
            debug!(grades = grades.len(), "No weighted, tagged courses; returning no result");
            return None;
        }

        let raw_points: Vec<AxisVector> = points.iter().map(|p| p.components).collect();
        let centroids = ClusterRefiner::new(params.iterations).refine(&raw_points);
        let assignments =
            SimilarityScorer::new(params.similarity, params.tau).soft_assignments(&raw_points, &centroids);

        let blend = Blender::default().blend(&points, &assignments);
        let views = normalize(&blend.blended_totals, &points, order, self.curriculum);
        let debiased = Debiaser::new(params.gamma, params.r).debias(&blend, self.curriculum);

        let primary = views.raw.primary();
        debug!(
            courses = points.len(),
            alpha = blend.alpha,
            %primary,
            debiased = %debiased.primary,
            "Scored archetype profile"
        );

        Some(ArchetypeReport {
            primary_archetype: primary,
            primary_archetype_debiased: debiased.primary,
            archetype_percentages: views.raw,
            normalized_percentages: views.frequency,
            opportunity_normalized_percentages: views.opportunity,
            archetype_scores: blend.blended_totals.clone(),
            debias_percentages: debiased.percentages,
            debias_scores: debiased.scores,
            contributing_subjects: contributing_subjects(&points, &blend),
            diagnostics: ScoringDiagnostics {
                courses_scored: points.len(),
                confidence: blend.confidence,
                alpha: blend.alpha,
                tuning: params,
            },
        })
    }
}

/// Up to `MAX_CONTRIBUTING_SUBJECTS` course ids per axis, strongest first;
/// equal contributions keep canonical order. A course repeated in the order
/// is listed once.
fn contributing_subjects(points: &[CourseVector], blend: &BlendOutcome) -> AxisMap<Vec<String>> {
    AxisMap::<()>::default().map(|axis, _| top_courses_for(axis, points, blend))
}

fn top_courses_for(axis: Axis, points: &[CourseVector], blend: &BlendOutcome) -> Vec<String> {
    let mut ranked: Vec<(f64, &CourseVector)> = blend
        .contributions_for(axis)
        .into_iter()
        .zip(points)
        .filter(|(c, _)| *c > 0.0)
        .collect();
    // Stable sort keeps canonical order among equals.
    ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

    let mut courses: Vec<String> = Vec::with_capacity(MAX_CONTRIBUTING_SUBJECTS);
    for (_, point) in ranked {
        if courses.len() == MAX_CONTRIBUTING_SUBJECTS {
            break;
        }
        if !courses.contains(&point.course_id) {
            courses.push(point.course_id.clone());
        }
    }
    courses
}
