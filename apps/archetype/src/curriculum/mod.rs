//! Curriculum configuration: which RIASEC axes each course is tagged with,
//! and the canonical course order grades are aligned against.
//!
//! A `CurriculumMap` is built once (built-in tables or a JSON file) and then
//! only read. The engine borrows it; there is no process-wide table.

pub mod programs;

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::models::axis::{Axis, AXIS_COUNT};

pub use programs::{ProgramTable, BUILTIN_PROGRAMS, PROGRAM_CS, PROGRAM_IT};

pub const MAX_TAGS_PER_COURSE: usize = 3;

#[derive(Debug, Error)]
pub enum CurriculumError {
    #[error("Failed to read curriculum file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed curriculum JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Course id must not be empty")]
    EmptyCourseId,

    #[error("Unknown axis letter '{letter}' in tags '{tags}'")]
    UnknownAxis { letter: char, tags: String },

    #[error("A course needs between 1 and 3 distinct tags, got {count} in '{tags}'")]
    TagCount { count: usize, tags: String },

    #[error("Course '{course_id}' is listed with conflicting tags ({existing} vs {incoming})")]
    ConflictingTags {
        course_id: String,
        existing: String,
        incoming: String,
    },
}

/// An ordered set of 1–3 distinct axes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseTags(Vec<Axis>);

impl CourseTags {
    /// Parses a letter string such as `"RI"` or `"s, e"`.
    /// Case-insensitive; whitespace and commas are ignored, repeats collapse.
    pub fn parse(tags: &str) -> Result<Self, CurriculumError> {
        let mut axes = Vec::with_capacity(MAX_TAGS_PER_COURSE);
        for letter in tags.chars().filter(|c| !c.is_whitespace() && *c != ',') {
            let axis = Axis::from_letter(letter).ok_or_else(|| CurriculumError::UnknownAxis {
                letter,
                tags: tags.to_string(),
            })?;
            if !axes.contains(&axis) {
                axes.push(axis);
            }
        }
        Self::from_axes(axes).map_err(|count| CurriculumError::TagCount {
            count,
            tags: tags.to_string(),
        })
    }

    fn from_axes(axes: Vec<Axis>) -> Result<Self, usize> {
        if axes.is_empty() || axes.len() > MAX_TAGS_PER_COURSE {
            return Err(axes.len());
        }
        Ok(Self(axes))
    }

    pub fn axes(&self) -> &[Axis] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, axis: Axis) -> bool {
        self.0.contains(&axis)
    }

    pub fn letters(&self) -> String {
        self.0.iter().map(|a| a.letter()).collect()
    }

    fn same_set(&self, other: &CourseTags) -> bool {
        self.len() == other.len() && self.0.iter().all(|a| other.contains(*a))
    }
}

/// Course → tags table plus the default canonical order.
#[derive(Debug, Clone, Default)]
pub struct CurriculumMap {
    entries: BTreeMap<String, CourseTags>,
    default_order: Vec<String>,
}

// JSON file shape for alternate curricula.
#[derive(Debug, Deserialize)]
struct CurriculumFile {
    programs: Vec<ProgramFile>,
}

#[derive(Debug, Deserialize)]
struct ProgramFile {
    #[serde(default)]
    name: Option<String>,
    courses: Vec<CourseFile>,
}

#[derive(Debug, Deserialize)]
struct CourseFile {
    course_id: String,
    tags: String,
}

impl CurriculumMap {
    /// Program A (IT) followed by program B (CS).
    pub fn builtin() -> Result<Self, CurriculumError> {
        Self::from_programs(&BUILTIN_PROGRAMS)
    }

    pub fn from_programs(programs: &[ProgramTable]) -> Result<Self, CurriculumError> {
        let mut map = Self::default();
        for program in programs {
            for (course_id, tags) in program.courses {
                map.insert(course_id, CourseTags::parse(tags)?)?;
            }
        }
        Ok(map)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CurriculumError> {
        let file: CurriculumFile = serde_json::from_str(json)?;
        let mut map = Self::default();
        for program in &file.programs {
            for course in &program.courses {
                map.insert(&course.course_id, CourseTags::parse(&course.tags)?)?;
            }
            tracing::debug!(
                program = program.name.as_deref().unwrap_or("unnamed"),
                courses = program.courses.len(),
                "Loaded curriculum program"
            );
        }
        Ok(map)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CurriculumError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Appends `course_id` to the default order and records its tags.
    /// A course may repeat (same tags) across programs.
    fn insert(&mut self, course_id: &str, tags: CourseTags) -> Result<(), CurriculumError> {
        let course_id = course_id.trim();
        if course_id.is_empty() {
            return Err(CurriculumError::EmptyCourseId);
        }
        if let Some(existing) = self.entries.get(course_id) {
            if !existing.same_set(&tags) {
                return Err(CurriculumError::ConflictingTags {
                    course_id: course_id.to_string(),
                    existing: existing.letters(),
                    incoming: tags.letters(),
                });
            }
        } else {
            self.entries.insert(course_id.to_string(), tags);
        }
        self.default_order.push(course_id.to_string());
        Ok(())
    }

    pub fn tags_for(&self, course_id: &str) -> Option<&CourseTags> {
        self.entries.get(course_id.trim())
    }

    pub fn default_order(&self) -> &[String] {
        &self.default_order
    }

    /// Number of distinct courses in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// How many distinct courses carry each axis, over the whole table.
    pub fn axis_frequency(&self) -> [usize; AXIS_COUNT] {
        let mut freq = [0usize; AXIS_COUNT];
        for tags in self.entries.values() {
            for axis in tags.axes() {
                freq[axis.index()] += 1;
            }
        }
        freq
    }
}
