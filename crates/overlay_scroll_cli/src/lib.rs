//! Headless scenario runner for the overlay scrollbar engine
//!
//! A scenario is a JSON file describing a viewport, its content and a list of
//! steps (scrolls, resizes, thumb drags, config swaps) interleaved with
//! assertions on the resulting thumb and scroll state. The runner stops at the
//! first failed assertion and reports it.

pub mod assert;
pub mod report;
pub mod runner;
pub mod scenario;

pub use report::{ReportStatus, ScenarioReport};
pub use runner::{run_loaded_scenario, run_scenario, RunOutcome};
pub use scenario::{Scenario, ScenarioStep};
