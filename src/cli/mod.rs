//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand
//! and returns the process exit code.

mod aggregate;
mod assess;
mod catalog;
mod score;

pub use aggregate::run_aggregate;
pub use assess::run_assess;
pub use catalog::run_catalog;
pub use score::run_score;
