//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the logic of one CLI subcommand.

mod config;
mod new;

pub use config::{run_config_example, run_config_schema};
pub use new::{run_new, Acquisition, NewOptions, NewOutcome};
