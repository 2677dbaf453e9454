//! Command implementations for `setup-agents` and `run-agent`.

mod run;
mod setup;

pub use run::{cmd_run, render_agent_prompt};
pub use setup::{SetupOptions, SetupReport, cmd_setup, default_runner_source, run_setup};
