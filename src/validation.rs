//! Structural validation of timetabling requests.
//!
//! Checks the data-model invariants before any solving attempt:
//! - non-empty course and day sets
//! - unique course IDs and day labels
//! - positive weekly hour demands
//! - positive capacity limits, with the per-course-per-day cap not
//!   exceeding the per-day cap
//!
//! All violations are collected and reported together.

use std::collections::HashSet;

use crate::models::Course;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A structural violation of the request data model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of request validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The request names no courses.
    EmptyCourseSet,
    /// The request names no days.
    EmptyDaySet,
    /// Two courses share an ID, or two days share a label.
    DuplicateId,
    /// A course demands zero weekly hours.
    NonPositiveWeeklyHours,
    /// A capacity limit is zero.
    NonPositiveCapacity,
    /// The per-course-per-day cap exceeds the per-day cap.
    CapacityOrdering,
    /// A non-positive option count was requested.
    NonPositiveOptionCount,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Validates the structural invariants of a request.
///
/// Checks:
/// 1. At least one course and at least one day
/// 2. No duplicate course IDs or day labels
/// 3. Every course demands at least one weekly hour
/// 4. Both capacity limits are at least one
/// 5. Per-course-per-day cap does not exceed the per-day cap
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(
    courses: &[Course],
    days: &[String],
    max_hours_per_day: u32,
    max_hours_per_course_per_day: u32,
) -> ValidationResult {
    let mut errors = Vec::new();

    if courses.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCourseSet,
            "Request contains no courses",
        ));
    }
    if days.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyDaySet,
            "Request contains no days",
        ));
    }

    let mut course_ids = HashSet::new();
    for course in courses {
        if !course_ids.insert(course.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", course.id),
            ));
        }
        if course.weekly_hours == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveWeeklyHours,
                format!("Course '{}' demands zero weekly hours", course.id),
            ));
        }
    }

    let mut day_labels = HashSet::new();
    for day in days {
        if !day_labels.insert(day.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate day label: {day}"),
            ));
        }
    }

    if max_hours_per_day == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveCapacity,
            "max_hours_per_day must be at least 1",
        ));
    }
    if max_hours_per_course_per_day == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveCapacity,
            "max_hours_per_course_per_day must be at least 1",
        ));
    }
    if max_hours_per_course_per_day > max_hours_per_day {
        errors.push(ValidationError::new(
            ValidationErrorKind::CapacityOrdering,
            format!(
                "max_hours_per_course_per_day ({max_hours_per_course_per_day}) exceeds \
                 max_hours_per_day ({max_hours_per_day})"
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
