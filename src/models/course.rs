//! Course model.
//!
//! A course is a unit of weekly demand: it must receive exactly
//! `weekly_hours` hour-units across the days of the schedule.

use serde::{Deserialize, Serialize};

/// A course with a fixed weekly hour demand.
///
/// Immutable once a request is built; the solver distributes the
/// demanded hours across days without splitting hour-units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier.
    pub id: String,
    /// Human-readable name. Empty when unused.
    pub name: String,
    /// Total hours this course must receive per week.
    pub weekly_hours: u32,
}

impl Course {
    /// Creates a new course with the given ID and weekly hour demand.
    pub fn new(id: impl Into<String>, weekly_hours: u32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            weekly_hours,
        }
    }

    /// Sets the course name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Display label: the name when set, otherwise the ID.
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_builder() {
        let course = Course::new("MATH101", 4).with_name("Calculus I");
        assert_eq!(course.id, "MATH101");
        assert_eq!(course.name, "Calculus I");
        assert_eq!(course.weekly_hours, 4);
        assert_eq!(course.label(), "Calculus I");
    }

    #[test]
    fn test_course_label_falls_back_to_id() {
        let course = Course::new("PHY", 2);
        assert_eq!(course.label(), "PHY");
    }
}
