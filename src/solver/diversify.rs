//! Option diversification.
//!
//! Produces a feasible assignment that differs from a previous one,
//! best-effort. Two techniques run in order under bounded budgets:
//!
//! 1. **Randomized re-solve**: fresh flow problem, shuffled augmenting
//!    order. When multiple saturating flows exist, this usually lands
//!    on a different one.
//! 2. **Constraint-preserving local swap**: move a single hour-unit of
//!    one course from one day to another, only when the target day's
//!    total and the course's target-day count both stay within their
//!    caps. One accepted move already yields a distinct assignment.
//!
//! The result never violates an invariant. When both budgets run out
//! without finding a difference, the previous assignment is returned
//! unchanged — duplicates are a silent degradation, never an error.

use rand::Rng;

use crate::models::{Assignment, ScheduleRequest};

use super::feasibility;

/// Attempts to produce an assignment different from `previous`.
///
/// `resolve_budget` bounds the randomized re-solves, `swap_budget` the
/// local swap attempts. The request must be the one `previous` was
/// solved from.
pub fn diversify<R: Rng>(
    request: &ScheduleRequest,
    previous: &Assignment,
    resolve_budget: usize,
    swap_budget: usize,
    rng: &mut R,
) -> Assignment {
    for _ in 0..resolve_budget {
        if let Ok(candidate) = feasibility::solve_randomized(request, rng) {
            if candidate != *previous {
                return candidate;
            }
        }
    }

    if let Some(swapped) = try_local_swap(request, previous, swap_budget, rng) {
        return swapped;
    }

    previous.clone()
}

/// Moves one hour-unit between two days of one course, keeping all
/// invariants intact. Returns `None` when no attempt lands a valid
/// move within the budget.
fn try_local_swap<R: Rng>(
    request: &ScheduleRequest,
    previous: &Assignment,
    swap_budget: usize,
    rng: &mut R,
) -> Option<Assignment> {
    let courses = request.courses().len();
    let days = request.days().len();
    if days < 2 {
        return None;
    }

    let mut grid: Vec<Vec<u32>> = previous.grid().to_vec();
    let mut day_totals: Vec<u32> = (0..days)
        .map(|d| grid.iter().map(|row| row[d]).sum())
        .collect();

    for _ in 0..swap_budget {
        let c = rng.random_range(0..courses);
        let from = rng.random_range(0..days);
        let to = rng.random_range(0..days);
        if from == to || grid[c][from] == 0 {
            continue;
        }
        if day_totals[to] >= request.max_hours_per_day()
            || grid[c][to] >= request.max_hours_per_course_per_day()
        {
            continue;
        }

        grid[c][from] -= 1;
        grid[c][to] += 1;
        day_totals[from] -= 1;
        day_totals[to] += 1;

        let swapped = Assignment::new(
            previous.course_ids().to_vec(),
            previous.days().to_vec(),
            grid,
        );
        debug_assert!(swapped.satisfies(request));
        return Some(swapped);
    }

    None
}
