use crate::curriculum::{CourseTags, CurriculumMap};
use crate::models::axis::{AxisVector, AXIS_COUNT};
use crate::scoring::weights::grade_to_weight;

/// One graded, tagged course as a point in axis space.
///
/// `components` sums to `weight`, split evenly across `tags`.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseVector {
    pub course_id: String,
    /// Index into the canonical order (and the grade sequence).
    pub position: usize,
    pub weight: f64,
    pub tags: CourseTags,
    pub components: AxisVector,
}

impl CourseVector {
    pub fn new(course_id: &str, position: usize, weight: f64, tags: &CourseTags) -> Self {
        let mut components = [0.0; AXIS_COUNT];
        let share = weight / tags.len() as f64;
        for axis in tags.axes() {
            components[axis.index()] = share;
        }
        Self {
            course_id: course_id.to_string(),
            position,
            weight,
            tags: tags.clone(),
            components,
        }
    }
}

/// Builds the working point set from grades aligned to `order`.
///
/// Untagged courses and zero-weight grades are dropped, not kept as zero
/// vectors. Grades past the end of `order` (and vice versa) are ignored.
pub fn build_course_vectors(
    grades: &[Option<f64>],
    order: &[String],
    curriculum: &CurriculumMap,
) -> Vec<CourseVector> {
    grades
        .iter()
        .zip(order)
        .enumerate()
        .filter_map(|(position, (grade, course_id))| {
            let tags = curriculum.tags_for(course_id)?;
            let weight = grade_to_weight(*grade);
            (weight > 0.0).then(|| CourseVector::new(course_id, position, weight, tags))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::axis::Axis;

    fn curriculum() -> CurriculumMap {
        CurriculumMap::from_json_str(
            r#"{"programs":[{"courses":[
                {"course_id":"ART 1","tags":"A"},
                {"course_id":"ENG 1","tags":"RI"},
                {"course_id":"CAP 1","tags":"IES"}
            ]}]}"#,
        )
        .unwrap()
    }

    fn order(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_tag_gets_full_weight() {
        let points = build_course_vectors(&[Some(1.5)], &order(&["ART 1"]), &curriculum());
        assert_eq!(points.len(), 1);
        let v = &points[0].components;
        assert!((v[Axis::Artistic.index()] - 1.5).abs() < 1e-12);
        assert_eq!(v.iter().filter(|c| **c != 0.0).count(), 1);
    }

    #[test]
    fn test_two_tags_split_weight_evenly() {
        let points = build_course_vectors(&[Some(1.0)], &order(&["ENG 1"]), &curriculum());
        let v = &points[0].components;
        assert!((v[Axis::Realistic.index()] - 1.0).abs() < 1e-12);
        assert!((v[Axis::Investigative.index()] - 1.0).abs() < 1e-12);
        assert!((v.iter().sum::<f64>() - points[0].weight).abs() < 1e-12);
    }

    #[test]
    fn test_three_tags_sum_back_to_weight() {
        let points = build_course_vectors(&[Some(1.25)], &order(&["CAP 1"]), &curriculum());
        let v = &points[0].components;
        assert!((v.iter().sum::<f64>() - 1.75).abs() < 1e-12);
        assert!((v[Axis::Social.index()] - 1.75 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_untagged_and_zero_weight_courses_are_excluded() {
        let points = build_course_vectors(
            &[Some(1.0), Some(3.0), Some(1.0), None],
            &order(&["UNKNOWN 9", "ART 1", "ENG 1", "CAP 1"]),
            &curriculum(),
        );
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].course_id, "ENG 1");
        assert_eq!(points[0].position, 2);
    }

    #[test]
    fn test_length_mismatch_uses_shorter_sequence() {
        let cur = curriculum();
        let points = build_course_vectors(&[Some(1.0); 5], &order(&["ART 1", "ENG 1"]), &cur);
        assert_eq!(points.len(), 2);

        let points = build_course_vectors(&[Some(1.0)], &order(&["ART 1", "ENG 1"]), &cur);
        assert_eq!(points.len(), 1);
    }
}
