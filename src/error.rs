//! Error taxonomy for option generation.
//!
//! Two failure families exist: structurally invalid requests (caught
//! before any solving) and proven infeasibility (caught by the cheap
//! necessary-condition checks or by the flow computation). Everything
//! else in the pipeline is total. Producing fewer distinct options
//! than requested is not an error; duplicates are acceptable.

use crate::validation::ValidationError;

/// Failure of a `generate_options` run.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// The request violates the data model; all violations are listed.
    InvalidRequest(Vec<ValidationError>),
    /// No assignment satisfying all three constraint families exists.
    Infeasible(InfeasibilityReason),
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleError::InvalidRequest(errors) => {
                write!(f, "invalid request: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{e}")?;
                }
                Ok(())
            }
            ScheduleError::Infeasible(reason) => write!(f, "infeasible request: {reason}"),
        }
    }
}

impl std::error::Error for ScheduleError {}

/// Why no valid assignment exists.
///
/// The first two variants come from the cheap necessary-condition
/// checks and name the violated bound; the last is the generic outcome
/// when the max-flow computation falls short of full demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfeasibilityReason {
    /// Sum of weekly hours exceeds `days × max_hours_per_day`.
    TotalDemandExceedsDayCapacity {
        /// Total weekly hours demanded across all courses.
        total_hours: u64,
        /// `days × max_hours_per_day`.
        capacity: u64,
    },
    /// A single course demands more than `days × max_hours_per_course_per_day`.
    CourseDemandExceedsCourseCapacity {
        /// Offending course ID.
        course_id: String,
        /// That course's weekly demand.
        weekly_hours: u64,
        /// `days × max_hours_per_course_per_day`.
        capacity: u64,
    },
    /// The flow computation could not saturate full demand.
    NoFeasibleDistribution,
}

impl std::fmt::Display for InfeasibilityReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InfeasibilityReason::TotalDemandExceedsDayCapacity {
                total_hours,
                capacity,
            } => write!(
                f,
                "sum of weekly hours ({total_hours}) exceeds days × max_hours_per_day ({capacity})"
            ),
            InfeasibilityReason::CourseDemandExceedsCourseCapacity {
                course_id,
                weekly_hours,
                capacity,
            } => write!(
                f,
                "course '{course_id}' demands {weekly_hours} hours but at most {capacity} \
                 fit within days × max_hours_per_course_per_day"
            ),
            InfeasibilityReason::NoFeasibleDistribution => {
                write!(f, "no hour distribution satisfies all capacity limits")
            }
        }
    }
}
