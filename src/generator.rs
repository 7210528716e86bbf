//! Schedule option generation.
//!
//! Orchestrates production of N schedule options from one request.
//! The first option is fully deterministic (same request ⇒ same first
//! option, independent of the seed); each later option is diversified
//! from its predecessor and rendered with a cosmetic within-day
//! shuffle. Infeasibility aborts the whole run — no partial output.
//!
//! All randomness flows from one `StdRng` owned by the call, seeded
//! explicitly or from OS entropy, so a seeded run is reproducible
//! end to end.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::ScheduleError;
use crate::models::{ScheduleOption, ScheduleRequest};
use crate::solver;
use crate::validation::{ValidationError, ValidationErrorKind};

const DEFAULT_RESOLVE_BUDGET: usize = 3;
const DEFAULT_SWAP_BUDGET_FACTOR: usize = 4;

/// Generates schedule options with tunable diversification budgets.
///
/// # Example
///
/// ```
/// use weektable::{Course, OptionGenerator, ScheduleRequest};
///
/// let request = ScheduleRequest::new(
///     vec![Course::new("A", 4), Course::new("B", 2)],
///     vec!["Mon", "Tue", "Wed"],
///     3,
///     2,
/// )?;
///
/// let options = OptionGenerator::new().generate(&request, 3, Some(42))?;
/// assert_eq!(options.len(), 3);
/// for option in &options {
///     assert!(option.assignment().satisfies(&request));
/// }
/// # Ok::<(), weektable::ScheduleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct OptionGenerator {
    resolve_budget: usize,
    swap_budget_factor: usize,
}

impl OptionGenerator {
    /// Creates a generator with default budgets.
    pub fn new() -> Self {
        Self {
            resolve_budget: DEFAULT_RESOLVE_BUDGET,
            swap_budget_factor: DEFAULT_SWAP_BUDGET_FACTOR,
        }
    }

    /// Sets how many randomized re-solves to attempt per option.
    pub fn with_resolve_budget(mut self, budget: usize) -> Self {
        self.resolve_budget = budget;
        self
    }

    /// Sets the local-swap budget as attempts per (course, day) cell.
    pub fn with_swap_budget_factor(mut self, factor: usize) -> Self {
        self.swap_budget_factor = factor;
        self
    }

    /// Produces `count` schedule options for the request.
    ///
    /// `count` must be at least 1. With a seed the entire run is
    /// reproducible; without one, OS entropy seeds the RNG. Later
    /// options may duplicate earlier ones when the instance admits no
    /// alternative within the budgets.
    ///
    /// # Errors
    /// - [`ScheduleError::InvalidRequest`] when `count` is zero
    /// - [`ScheduleError::Infeasible`] when no valid assignment exists;
    ///   nothing partial is returned
    pub fn generate(
        &self,
        request: &ScheduleRequest,
        count: usize,
        seed: Option<u64>,
    ) -> Result<Vec<ScheduleOption>, ScheduleError> {
        if count == 0 {
            return Err(ScheduleError::InvalidRequest(vec![ValidationError::new(
                ValidationErrorKind::NonPositiveOptionCount,
                "at least one option must be requested",
            )]));
        }

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let first = solver::solve(request).map_err(ScheduleError::Infeasible)?;
        let swap_budget =
            self.swap_budget_factor * request.courses().len() * request.days().len();

        let mut options = Vec::with_capacity(count);
        let mut previous = first.clone();
        options.push(ScheduleOption::from_assignment(first));

        for _ in 1..count {
            let next = solver::diversify(
                request,
                &previous,
                self.resolve_budget,
                swap_budget,
                &mut rng,
            );
            previous = next.clone();
            options.push(ScheduleOption::from_assignment_shuffled(next, &mut rng));
        }

        Ok(options)
    }
}

impl Default for OptionGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates `count` schedule options with default budgets.
///
/// See [`OptionGenerator::generate`].
pub fn generate_options(
    request: &ScheduleRequest,
    count: usize,
    seed: Option<u64>,
) -> Result<Vec<ScheduleOption>, ScheduleError> {
    OptionGenerator::new().generate(request, count, seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InfeasibilityReason;
    use crate::models::Course;

    fn sample_request() -> ScheduleRequest {
        ScheduleRequest::new(
            vec![Course::new("A", 4), Course::new("B", 2)],
            vec!["Mon", "Tue", "Wed"],
            3,
            2,
        )
        .expect("valid request")
    }

    #[test]
    fn test_generates_requested_count() {
        let options = generate_options(&sample_request(), 4, Some(1)).expect("feasible");
        assert_eq!(options.len(), 4);
    }

    #[test]
    fn test_every_option_satisfies_request() {
        let request = sample_request();
        let options = generate_options(&request, 5, Some(2)).expect("feasible");
        for option in &options {
            assert!(option.assignment().satisfies(&request));
        }
    }

    #[test]
    fn test_first_option_deterministic_across_seeds() {
        let request = sample_request();
        let a = generate_options(&request, 1, Some(1)).unwrap();
        let b = generate_options(&request, 1, Some(999)).unwrap();
        let c = generate_options(&request, 1, None).unwrap();
        assert_eq!(a[0].assignment(), b[0].assignment());
        assert_eq!(a[0].assignment(), c[0].assignment());
    }

    #[test]
    fn test_same_seed_reproduces_full_run() {
        let request = sample_request();
        let a = generate_options(&request, 4, Some(77)).unwrap();
        let b = generate_options(&request, 4, Some(77)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_count_rejected() {
        let err = generate_options(&sample_request(), 0, Some(1)).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidRequest(_)));
    }

    #[test]
    fn test_infeasible_request_returns_no_options() {
        // 1 course, 10 hours, 3 days × 3 = 9 max.
        let request =
            ScheduleRequest::new(vec![Course::new("A", 10)], vec!["Mon", "Tue", "Wed"], 3, 3)
                .expect("structurally valid");

        let err = generate_options(&request, 2, Some(1)).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::Infeasible(InfeasibilityReason::TotalDemandExceedsDayCapacity {
                total_hours: 10,
                capacity: 9,
            })
        );
    }

    #[test]
    fn test_degenerate_instance_yields_equal_options() {
        // Exactly one assignment exists; 3 requested options all equal.
        let request = ScheduleRequest::new(vec![Course::new("A", 1)], vec!["Mon"], 1, 1)
            .expect("valid request");

        let options = generate_options(&request, 3, Some(5)).expect("feasible");
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].assignment(), options[1].assignment());
        assert_eq!(options[1].assignment(), options[2].assignment());
    }

    #[test]
    fn test_later_options_diversify_when_possible() {
        // Plenty of slack: a second distribution must exist and the
        // diversifier is guaranteed to land one (re-solve or swap).
        let request = ScheduleRequest::new(vec![Course::new("A", 2)], vec!["Mon", "Tue", "Wed"], 2, 2)
            .expect("valid request");

        let generator = OptionGenerator::new().with_swap_budget_factor(32);
        let options = generator.generate(&request, 2, Some(6)).expect("feasible");
        assert_ne!(options[0].assignment(), options[1].assignment());
    }

    #[test]
    fn test_budget_builders() {
        let generator = OptionGenerator::new()
            .with_resolve_budget(1)
            .with_swap_budget_factor(8);
        let options = generator.generate(&sample_request(), 3, Some(4)).unwrap();
        assert_eq!(options.len(), 3);
    }
}
