//! Flow-to-assignment extraction.
//!
//! Converts a saturating flow back into hour counts: every recorded
//! course→day edge contributes `lower_bound + flow`. Pure and
//! deterministic — a given flow always extracts to the same grid, and
//! the result satisfies all three assignment invariants by
//! construction.

use crate::flow::FlowProblem;
use crate::models::{Assignment, ScheduleRequest};

/// Extracts the assignment encoded by a saturating flow.
pub(crate) fn extract_assignment(problem: &FlowProblem, request: &ScheduleRequest) -> Assignment {
    let mut hours = vec![vec![0u32; request.days().len()]; request.courses().len()];
    for entry in &problem.course_day_edges {
        let count = i64::from(entry.lower_bound) + problem.network.flow(entry.edge);
        hours[entry.course][entry.day] = count as u32;
    }

    let course_ids = request.courses().iter().map(|c| c.id.clone()).collect();
    let days = request.days().to_vec();
    let assignment = Assignment::new(course_ids, days, hours);
    debug_assert!(assignment.satisfies(request));
    assignment
}
