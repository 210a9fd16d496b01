//! Normalizer: three percentage views over the blended totals.
//!
//! - raw: blended totals as shares of their sum
//! - frequency: each axis divided by how many graded courses carry it
//! - opportunity: each axis divided by the most weight it could have earned
//!
//! Zero denominators contribute 0 and an all-zero view stays all-zero.

use crate::curriculum::CurriculumMap;
use crate::models::axis::{AxisScores, AxisVector, AXIS_COUNT};
use crate::scoring::vectors::CourseVector;
use crate::scoring::weights::MAX_COURSE_WEIGHT;

#[derive(Debug, Clone)]
pub struct NormalizedViews {
    pub raw: AxisScores,
    pub frequency: AxisScores,
    pub opportunity: AxisScores,
}

/// How many scored courses carry each axis.
pub fn graded_tag_counts(points: &[CourseVector]) -> [usize; AXIS_COUNT] {
    let mut counts = [0usize; AXIS_COUNT];
    for point in points {
        for axis in point.tags.axes() {
            counts[axis.index()] += 1;
        }
    }
    counts
}

/// Weight each axis could reach if every course in `order` got the best grade.
///
/// Every position counts, so a course repeated in the order counts twice.
/// Courses missing from the curriculum offer nothing.
pub fn opportunity_ceiling(order: &[String], curriculum: &CurriculumMap) -> AxisVector {
    let mut ceiling = [0.0; AXIS_COUNT];
    for tags in order.iter().filter_map(|id| curriculum.tags_for(id)) {
        let share = MAX_COURSE_WEIGHT / tags.len() as f64;
        for axis in tags.axes() {
            ceiling[axis.index()] += share;
        }
    }
    ceiling
}

fn divide_then_percent(totals: &AxisScores, denominators: &AxisVector) -> AxisScores {
    totals
        .map(|axis, total| {
            let d = denominators[axis.index()];
            if d > 0.0 {
                total / d
            } else {
                0.0
            }
        })
        .to_percentages()
}

pub fn normalize(
    blended_totals: &AxisScores,
    points: &[CourseVector],
    order: &[String],
    curriculum: &CurriculumMap,
) -> NormalizedViews {
    let counts = graded_tag_counts(points).map(|c| c as f64);
    let ceiling = opportunity_ceiling(order, curriculum);

    NormalizedViews {
        raw: blended_totals.to_percentages(),
        frequency: divide_then_percent(blended_totals, &counts),
        opportunity: divide_then_percent(blended_totals, &ceiling),
    }
}
