//! Feasibility solving, extraction, and diversification.
//!
//! The pipeline for one option: build the flow problem, run max flow,
//! test saturation, extract the hour grid. Later options reuse the
//! pipeline through [`diversify`], which perturbs a prior assignment
//! instead of re-deriving everything from scratch.
//!
//! - [`feasibility`]: necessary-condition checks + saturation test
//! - [`extract`]: flow → [`crate::models::Assignment`] (pure)
//! - [`diversify`]: randomized re-solve, then local swaps

mod diversify;
mod extract;
pub mod feasibility;

pub use diversify::diversify;
pub use feasibility::{solve, solve_randomized};
