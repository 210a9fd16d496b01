//! Request adapter: JSON body in, JSON-serializable response out.
//!
//! Shape checks on the body happen here. Everything inside a well-shaped
//! request (odd grades, bad tuning values) is the engine's to absorb.

use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use crate::curriculum::CurriculumMap;
use crate::errors::AppError;
use crate::models::report::{ArchetypeColumns, ArchetypeReport};
use crate::models::request::ProfileRequest;
use crate::scoring::ArchetypeEngine;

#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub courses_received: usize,
    /// `null` when no course produced a weighted, tagged vector.
    pub archetype_analysis: Option<ArchetypeReport>,
    pub record_columns: Option<ArchetypeColumns>,
}

/// The curriculum at `path`, or the built-in IT + CS tables.
pub fn load_curriculum(path: Option<&Path>) -> Result<CurriculumMap, AppError> {
    let curriculum = match path {
        Some(path) => CurriculumMap::load(path).map_err(|e| {
            error!(path = %path.display(), "Failed to load curriculum");
            e
        })?,
        None => CurriculumMap::builtin()?,
    };
    info!(
        courses = curriculum.len(),
        canonical_len = curriculum.default_order().len(),
        "Curriculum loaded"
    );
    Ok(curriculum)
}

pub fn handle_profile_json(body: &str, engine: &ArchetypeEngine<'_>) -> Result<ProfileResponse, AppError> {
    let value: Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Err(AppError::Validation("Request body must be a JSON object".to_string()));
    }
    if !matches!(value.get("grades"), None | Some(Value::Null) | Some(Value::Array(_))) {
        return Err(AppError::Validation("'grades' must be an array".to_string()));
    }
    if !matches!(
        value.get("canonical_order"),
        None | Some(Value::Null) | Some(Value::Array(_))
    ) {
        return Err(AppError::Validation("'canonical_order' must be an array of course ids".to_string()));
    }

    let mut value = value;
    if let Some(obj) = value.as_object_mut() {
        // `null` grades means no grades.
        if obj.get("grades").is_some_and(Value::is_null) {
            obj.remove("grades");
        }
    }
    let request: ProfileRequest = serde_json::from_value(value)?;
    Ok(handle_profile(request, engine))
}

pub fn handle_profile(mut request: ProfileRequest, engine: &ArchetypeEngine<'_>) -> ProfileResponse {
    request.email = request
        .email
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty());

    let report = engine.analyze_request(&request);
    let message = match &report {
        Some(r) => {
            info!(
                email = request.email.as_deref().unwrap_or("-"),
                primary = %r.primary_archetype,
                debiased = %r.primary_archetype_debiased,
                "Archetype analysis processed"
            );
            "Archetype analysis processed".to_string()
        }
        None => {
            info!(
                email = request.email.as_deref().unwrap_or("-"),
                grades = request.grades.len(),
                "No gradable courses; archetype analysis skipped"
            );
            "No gradable courses; archetype analysis unavailable".to_string()
        }
    };

    ProfileResponse {
        message,
        email: request.email,
        courses_received: request.grades.len(),
        record_columns: report.as_ref().map(ArchetypeReport::record_columns),
        archetype_analysis: report,
    }
}
