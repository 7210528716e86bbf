//! Schedule request model.
//!
//! A request bundles the weekly demand (courses) with the capacity
//! side of the problem: the ordered day set, the per-day hour cap,
//! and the per-course-per-day hour cap. Construction validates every
//! structural invariant, so a `ScheduleRequest` value is always
//! well-formed and read-only thereafter.

use serde::Serialize;

use crate::error::ScheduleError;
use crate::validation::validate_request;

use super::Course;

/// A validated timetabling request.
///
/// Invariants (enforced at construction):
/// - at least one course, each with `weekly_hours >= 1` and a unique ID
/// - at least one day, each label unique; day order is preserved
/// - `max_hours_per_day >= 1`
/// - `1 <= max_hours_per_course_per_day <= max_hours_per_day`
///
/// Serializes for transport/logging; construction (and therefore
/// validation) always goes through [`ScheduleRequest::new`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleRequest {
    courses: Vec<Course>,
    days: Vec<String>,
    max_hours_per_day: u32,
    max_hours_per_course_per_day: u32,
}

impl ScheduleRequest {
    /// Creates a validated request.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidRequest`] listing every violated invariant.
    pub fn new(
        courses: Vec<Course>,
        days: Vec<impl Into<String>>,
        max_hours_per_day: u32,
        max_hours_per_course_per_day: u32,
    ) -> Result<Self, ScheduleError> {
        let days: Vec<String> = days.into_iter().map(Into::into).collect();
        validate_request(
            &courses,
            &days,
            max_hours_per_day,
            max_hours_per_course_per_day,
        )
        .map_err(ScheduleError::InvalidRequest)?;

        Ok(Self {
            courses,
            days,
            max_hours_per_day,
            max_hours_per_course_per_day,
        })
    }

    /// Courses to schedule, in declaration order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Day labels, in schedule order.
    pub fn days(&self) -> &[String] {
        &self.days
    }

    /// Maximum total hours any single day may carry.
    pub fn max_hours_per_day(&self) -> u32 {
        self.max_hours_per_day
    }

    /// Maximum hours a single course may occupy on a single day.
    pub fn max_hours_per_course_per_day(&self) -> u32 {
        self.max_hours_per_course_per_day
    }

    /// Total weekly demand across all courses.
    ///
    /// Widened to `u64`: per-course demands are `u32`, so their sum can
    /// exceed `u32::MAX` on structurally valid input.
    pub fn total_weekly_hours(&self) -> u64 {
        self.courses.iter().map(|c| u64::from(c.weekly_hours)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_courses() -> Vec<Course> {
        vec![Course::new("A", 4), Course::new("B", 2)]
    }

    #[test]
    fn test_request_accessors() {
        let request = ScheduleRequest::new(sample_courses(), vec!["Mon", "Tue", "Wed"], 3, 2)
            .expect("valid request");

        assert_eq!(request.courses().len(), 2);
        assert_eq!(request.days(), ["Mon", "Tue", "Wed"]);
        assert_eq!(request.max_hours_per_day(), 3);
        assert_eq!(request.max_hours_per_course_per_day(), 2);
        assert_eq!(request.total_weekly_hours(), 6);
    }

    #[test]
    fn test_request_rejects_invalid_input() {
        let err = ScheduleRequest::new(Vec::new(), vec!["Mon"], 3, 2).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidRequest(_)));
    }

    #[test]
    fn test_total_weekly_hours_exceeding_u32() {
        let request = ScheduleRequest::new(
            vec![Course::new("A", 2_147_483_648), Course::new("B", 2_147_483_648)],
            vec!["Mon"],
            u32::MAX,
            u32::MAX,
        )
        .expect("structurally valid");
        assert_eq!(request.total_weekly_hours(), 4_294_967_296);
    }

    #[test]
    fn test_request_preserves_day_order() {
        let request = ScheduleRequest::new(sample_courses(), vec!["Wed", "Mon"], 6, 3)
            .expect("valid request");
        assert_eq!(request.days(), ["Wed", "Mon"]);
    }
}
