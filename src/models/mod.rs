//! Timetabling domain models.
//!
//! Core data types for weekly course-hour timetabling: the demand and
//! capacity side ([`Course`], [`ScheduleRequest`]) and the solution
//! side ([`Assignment`], [`ScheduleOption`]).
//!
//! Requests are validated at construction and immutable afterwards;
//! assignments and options are created fresh by the solver per
//! generated option and never mutated.

mod assignment;
mod course;
mod request;

pub use assignment::{Assignment, ScheduleOption};
pub use course::Course;
pub use request::ScheduleRequest;
