//! Query to select planning.
//!
//! - [`PlannerConfig`] - Planner tuning knobs
//! - [`QueryPlanner`] - Compiles a [`Query`](crate::Query) into selects

mod config;
mod planner;

pub use config::{PlannerConfig, DEFAULT_FAN_OUT_FACTOR};
pub use planner::QueryPlanner;
