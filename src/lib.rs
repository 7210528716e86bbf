//! Weekly course-hour timetabling core.
//!
//! Assigns each course's fixed weekly hour quota to an ordered set of
//! days under two capacity limits (per day, per course per day),
//! decides feasibility, and emits one or more valid assignments. The
//! surrounding input/output layer (prompting, rendering) is the
//! caller's concern: it supplies a validated [`ScheduleRequest`] and
//! consumes [`ScheduleOption`]s.
//!
//! # Modules
//!
//! - **`models`**: domain types — `Course`, `ScheduleRequest`,
//!   `Assignment`, `ScheduleOption`
//! - **`validation`**: structural request checks (empty sets,
//!   duplicate IDs, capacity ordering)
//! - **`flow`**: integer max-flow network and the lower-bound
//!   transform encoding the constraints
//! - **`solver`**: feasibility verdicts, flow→assignment extraction,
//!   option diversification
//! - **`generator`**: N-option orchestration with an injectable seed
//!
//! # Approach
//!
//! All three constraint families are simple sums with bounds, so
//! feasibility is a max-flow saturation test with integral capacities;
//! integral hour counts follow without a separate argument. Option
//! diversity comes from randomizing the augmenting order and from
//! constraint-preserving single-hour swaps, both driven by one
//! explicit, seedable random source per generation call.
//!
//! # Reference
//!
//! - Ahuja, Magnanti & Orlin (1993), "Network Flows", §6.7
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 26

pub mod error;
pub mod flow;
pub mod generator;
pub mod models;
pub mod solver;
pub mod validation;

pub use error::{InfeasibilityReason, ScheduleError};
pub use generator::{generate_options, OptionGenerator};
pub use models::{Assignment, Course, ScheduleOption, ScheduleRequest};
