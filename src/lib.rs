//! Static agent prompt configurations.
//!
//! Two programs share this library:
//!
//! - `setup-agents` writes the built-in agent records, the shared prompt
//!   template, and a copy of the runner into a base directory
//! - `run-agent` loads one agent record, fills the template with it, appends
//!   a task, and prints the result

pub mod agent;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod layout;
pub mod logging;
pub mod prompt;
pub mod store;
