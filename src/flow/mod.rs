//! Integer max-flow machinery.
//!
//! The timetabling constraints are all simple sums with upper or lower
//! bounds, so feasibility reduces to a max-flow problem with integral
//! capacities — integral flows come for free, with no separate
//! integrality argument.
//!
//! - [`network`]: generic residual-graph max-flow (Dinic phases), with
//!   a randomized-order variant used for option diversification
//! - [`builder`]: lower-bound transform from a `ScheduleRequest` into
//!   a saturation-test instance

pub mod builder;
pub mod network;

pub use builder::{build_flow_problem, CourseDayEdge, FlowProblem};
pub use network::{EdgeId, FlowNetwork, NodeId};
