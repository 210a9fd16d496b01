use serde_json::Value;

/// Best grade on the scale.
pub const GRADE_FLOOR: f64 = 1.0;

/// Worst grade still accepted (3.00 "Passed"). 5.00 "Failed" and anything
/// else beyond this bound contributes no weight, same as a missing grade.
pub const GRADE_CEILING: f64 = 3.0;

/// Weight of a course graded at `GRADE_FLOOR`.
pub const MAX_COURSE_WEIGHT: f64 = GRADE_CEILING - GRADE_FLOOR;

/// Converts a raw grade into a contribution weight in `[0, MAX_COURSE_WEIGHT]`.
///
/// Absent, non-finite, non-positive and out-of-window grades all map to 0.
pub fn grade_to_weight(grade: Option<f64>) -> f64 {
    match grade {
        Some(g) if g.is_finite() && g > 0.0 && (GRADE_FLOOR..=GRADE_CEILING).contains(&g) => {
            GRADE_CEILING - g
        }
        _ => 0.0,
    }
}

/// Reads a grade out of a loosely-typed JSON value.
///
/// Numbers pass through; numeric strings like `" 1.75 "` are parsed.
/// Everything else is treated as absent.
pub fn coerce_grade(value: &Value) -> Option<f64> {
    let grade = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    grade.is_finite().then_some(grade)
}

pub fn coerce_grades(values: &[Value]) -> Vec<Option<f64>> {
    values.iter().map(coerce_grade).collect()
}
