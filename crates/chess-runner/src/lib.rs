//! Scenario runner for the chess rules engine.
//!
//! Scenario files describe a board, a piece list and a sequence of
//! commands. [`runner::run_file`] executes one file and
//! [`runner::run_suite`] executes a numbered series of them.

pub mod config;
pub mod runner;
pub mod scenario;

pub use config::{ConfigError, RunnerConfig, SuiteRange};
pub use runner::{run_file, run_scenario, run_suite, Report};
pub use scenario::{Command, Placement, Scenario, ScenarioError};
