//! Assignment (solution) model.
//!
//! An assignment is a concrete integer hour count per (course, day)
//! pair. A valid assignment satisfies three invariants against its
//! request:
//! 1. every course's counts sum to its `weekly_hours` exactly
//! 2. every day's counts sum to at most `max_hours_per_day`
//! 3. every single count is at most `max_hours_per_course_per_day`
//!
//! A [`ScheduleOption`] is a presentable rendering of an assignment:
//! per day, an ordered list of course IDs with one entry per assigned
//! hour-unit. Different orderings of the same per-day multiset are the
//! same assignment but different presentations.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::ScheduleRequest;

/// Integer hour counts per (course, day) pair.
///
/// Created by the solver and never mutated afterwards. Row order
/// follows the request's course declaration order, column order the
/// request's day order.
///
/// Deserialization re-checks the grid shape against the ID lists, so a
/// decoded value is as well-formed as a solver-built one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAssignment")]
pub struct Assignment {
    /// Course IDs, one per grid row.
    course_ids: Vec<String>,
    /// Day labels, one per grid column.
    days: Vec<String>,
    /// `hours[course][day]` grid.
    hours: Vec<Vec<u32>>,
}

impl Assignment {
    /// Creates an assignment from a course/day grid.
    ///
    /// Row and column counts must match the ID lists; the solver
    /// upholds this by construction.
    pub(crate) fn new(course_ids: Vec<String>, days: Vec<String>, hours: Vec<Vec<u32>>) -> Self {
        debug_assert_eq!(hours.len(), course_ids.len());
        debug_assert!(hours.iter().all(|row| row.len() == days.len()));
        Self {
            course_ids,
            days,
            hours,
        }
    }

    /// Course IDs in grid row order.
    pub fn course_ids(&self) -> &[String] {
        &self.course_ids
    }

    /// Day labels in grid column order.
    pub fn days(&self) -> &[String] {
        &self.days
    }

    /// Hour count for a (course, day) pair. Zero for unknown labels.
    pub fn hours_for(&self, course_id: &str, day: &str) -> u32 {
        let Some(c) = self.course_ids.iter().position(|id| id == course_id) else {
            return 0;
        };
        let Some(d) = self.days.iter().position(|label| label == day) else {
            return 0;
        };
        self.hours[c][d]
    }

    /// Total hours assigned to a course across all days.
    pub fn course_total(&self, course_id: &str) -> u32 {
        self.course_ids
            .iter()
            .position(|id| id == course_id)
            .map(|c| self.hours[c].iter().sum())
            .unwrap_or(0)
    }

    /// Total hours assigned on a day across all courses.
    pub fn day_total(&self, day: &str) -> u32 {
        self.days
            .iter()
            .position(|label| label == day)
            .map(|d| self.hours.iter().map(|row| row[d]).sum())
            .unwrap_or(0)
    }

    /// Raw grid, indexed `[course][day]` in declaration order.
    pub(crate) fn grid(&self) -> &[Vec<u32>] {
        &self.hours
    }

    /// Whether this assignment satisfies all three invariants of the
    /// given request. The request's courses and days must be the ones
    /// the assignment was built against.
    pub fn satisfies(&self, request: &ScheduleRequest) -> bool {
        if self.course_ids.len() != request.courses().len()
            || self.days.len() != request.days().len()
        {
            return false;
        }

        // Conservation: each course receives exactly its weekly demand.
        for (row, course) in self.hours.iter().zip(request.courses()) {
            if row.iter().sum::<u32>() != course.weekly_hours {
                return false;
            }
        }

        // Day capacity and per-course-per-day capacity.
        for d in 0..self.days.len() {
            let day_sum: u32 = self.hours.iter().map(|row| row[d]).sum();
            if day_sum > request.max_hours_per_day() {
                return false;
            }
        }
        self.hours
            .iter()
            .flatten()
            .all(|&count| count <= request.max_hours_per_course_per_day())
    }
}

/// Wire shape of an [`Assignment`], validated on the way in.
#[derive(Deserialize)]
struct RawAssignment {
    course_ids: Vec<String>,
    days: Vec<String>,
    hours: Vec<Vec<u32>>,
}

impl TryFrom<RawAssignment> for Assignment {
    type Error = String;

    fn try_from(raw: RawAssignment) -> Result<Self, Self::Error> {
        if raw.hours.len() != raw.course_ids.len() {
            return Err(format!(
                "hours grid has {} rows but {} course IDs",
                raw.hours.len(),
                raw.course_ids.len()
            ));
        }
        if let Some(row) = raw.hours.iter().find(|row| row.len() != raw.days.len()) {
            return Err(format!(
                "hours row has {} entries but {} days",
                row.len(),
                raw.days.len()
            ));
        }
        Ok(Self {
            course_ids: raw.course_ids,
            days: raw.days,
            hours: raw.hours,
        })
    }
}

/// A presentable rendering of an [`Assignment`].
///
/// For each day, an ordered sequence of course IDs, one entry per
/// assigned hour-unit. The within-day order carries no meaning beyond
/// presentation; the counts always agree with the assignment.
///
/// Deserialization re-checks that agreement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawScheduleOption")]
pub struct ScheduleOption {
    assignment: Assignment,
    /// `layout[day]` = course IDs in slot order.
    layout: Vec<Vec<String>>,
}

impl ScheduleOption {
    /// Renders an assignment with the canonical layout: within each
    /// day, hour-units appear in course declaration order.
    pub fn from_assignment(assignment: Assignment) -> Self {
        let layout = Self::canonical_layout(&assignment);
        Self { assignment, layout }
    }

    /// Renders an assignment with a randomized within-day slot order.
    ///
    /// Purely cosmetic: the underlying counts are untouched.
    pub fn from_assignment_shuffled<R: Rng>(assignment: Assignment, rng: &mut R) -> Self {
        let mut layout = Self::canonical_layout(&assignment);
        for day_slots in &mut layout {
            day_slots.shuffle(rng);
        }
        Self { assignment, layout }
    }

    /// The underlying assignment.
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Slot order for every day, indexed in the request's day order.
    pub fn layout(&self) -> &[Vec<String>] {
        &self.layout
    }

    /// Slot order for a single day by label. Empty for unknown labels.
    pub fn day_slots(&self, day: &str) -> &[String] {
        self.assignment
            .days()
            .iter()
            .position(|label| label == day)
            .map(|d| self.layout[d].as_slice())
            .unwrap_or(&[])
    }

    /// Whether a layout is a reordering of the assignment's counts.
    fn layout_matches(assignment: &Assignment, layout: &[Vec<String>]) -> bool {
        layout.len() == assignment.days().len()
            && layout.iter().enumerate().all(|(d, slots)| {
                slots.len() as u32 == assignment.grid().iter().map(|row| row[d]).sum::<u32>()
                    && assignment.course_ids().iter().enumerate().all(|(c, id)| {
                        slots.iter().filter(|slot| *slot == id).count() as u32
                            == assignment.grid()[c][d]
                    })
            })
    }

    fn canonical_layout(assignment: &Assignment) -> Vec<Vec<String>> {
        (0..assignment.days().len())
            .map(|d| {
                let mut slots = Vec::new();
                for (c, course_id) in assignment.course_ids().iter().enumerate() {
                    for _ in 0..assignment.grid()[c][d] {
                        slots.push(course_id.clone());
                    }
                }
                slots
            })
            .collect()
    }
}

/// Wire shape of a [`ScheduleOption`], validated on the way in.
#[derive(Deserialize)]
struct RawScheduleOption {
    assignment: Assignment,
    layout: Vec<Vec<String>>,
}

impl TryFrom<RawScheduleOption> for ScheduleOption {
    type Error = String;

    fn try_from(raw: RawScheduleOption) -> Result<Self, Self::Error> {
        if !Self::layout_matches(&raw.assignment, &raw.layout) {
            return Err("layout disagrees with the assignment's hour counts".into());
        }
        Ok(Self {
            assignment: raw.assignment,
            layout: raw.layout,
        })
    }
}
