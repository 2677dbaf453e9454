//! CLI argument parsing for `setup-agents` and `run-agent`.
//!
//! Uses clap derive macros for declarative argument definitions. The
//! implementations live in the `commands` module.

use crate::exit_codes;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::process::ExitCode;

/// Write the built-in agent configurations, prompt template, and runner.
///
/// Creates `<dir>/agents/<name>.json` for every built-in agent,
/// `<dir>/agents/prompt_template.txt`, and an executable `<dir>/run_agent`.
/// Existing files are overwritten.
#[derive(Parser, Debug)]
#[command(name = "setup-agents")]
#[command(author, version, about, long_about = None)]
pub struct SetupArgs {
    /// Base directory to populate [default: directory of this executable].
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Project directory named in the prompt template [default: current directory].
    #[arg(long, value_name = "DIR")]
    pub working_dir: Option<PathBuf>,

    /// Runner executable to install [default: run-agent next to this executable].
    #[arg(long, value_name = "PATH")]
    pub runner: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Print the prompt for a configured agent followed by a task.
///
/// Example:
///   run-agent mcp-implementation "Set up the base MCP server class"
#[derive(Parser, Debug)]
#[command(name = "run-agent")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Options go before the agent name; every word after it is task text.\n\
Errors, including the list of available agents for an unknown name, are\n\
written to stderr. Stdout carries only the prompt.")]
pub struct RunArgs {
    /// Base directory containing `agents/` [default: directory of this executable].
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Agent name (file stem in the agents directory) followed by the task words.
    ///
    /// Everything after the agent name is taken verbatim, including words
    /// that look like options.
    #[arg(
        required = true,
        num_args = 2..,
        value_names = ["AGENT", "TASK"],
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub words: Vec<String>,
}

impl RunArgs {
    /// The requested agent name.
    pub fn agent(&self) -> &str {
        self.words.first().map(String::as_str).unwrap_or_default()
    }

    /// The task: every word after the agent name joined with single spaces.
    pub fn task(&self) -> String {
        self.words.get(1..).unwrap_or_default().join(" ")
    }
}

/// Parse process arguments.
///
/// Usage errors print clap's message and map to the user-error exit code
/// instead of clap's default of 2. `--help` and `--version` exit successfully.
pub fn parse_args<T: Parser>() -> Result<T, ExitCode> {
    T::try_parse().map_err(|err| {
        let code = if err.use_stderr() {
            exit_codes::USER_ERROR
        } else {
            exit_codes::SUCCESS
        };
        let _ = err.print();
        ExitCode::from(code as u8)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_definitions() {
        SetupArgs::command().debug_assert();
        RunArgs::command().debug_assert();
    }

    #[test]
    fn run_args_collect_task_words() {
        let args =
            RunArgs::try_parse_from(["run-agent", "test-engineer", "write", "unit", "tests"])
                .unwrap();
        assert_eq!(args.agent(), "test-engineer");
        assert_eq!(args.task(), "write unit tests");
    }

    #[test]
    fn run_args_keep_hyphenated_task_words() {
        let args = RunArgs::try_parse_from(["run-agent", "a", "fix", "--force", "-x"]).unwrap();
        assert_eq!(args.task(), "fix --force -x");
    }

    #[test]
    fn run_args_flags_after_agent_are_task_text() {
        let args = RunArgs::try_parse_from(["run-agent", "a", "-v", "fix"]).unwrap();
        assert_eq!(args.agent(), "a");
        assert_eq!(args.task(), "-v fix");
        assert_eq!(args.verbose, 0);

        let args = RunArgs::try_parse_from(["run-agent", "a", "--dir", "x"]).unwrap();
        assert_eq!(args.task(), "--dir x");
        assert!(args.dir.is_none());

        let args = RunArgs::try_parse_from(["run-agent", "a", "--help", "me"]).unwrap();
        assert_eq!(args.task(), "--help me");

        let args = RunArgs::try_parse_from(["run-agent", "a", "--", "x"]).unwrap();
        assert_eq!(args.task(), "-- x");
    }

    #[test]
    fn run_help_notes_errors_go_to_stderr() {
        let help = RunArgs::command().render_long_help().to_string();
        assert!(help.contains("written to stderr"));
    }

    #[test]
    fn run_args_require_agent_and_task() {
        assert!(RunArgs::try_parse_from(["run-agent"]).is_err());
        assert!(RunArgs::try_parse_from(["run-agent", "only-agent"]).is_err());
    }

    #[test]
    fn run_args_accept_dir_and_verbosity() {
        let args =
            RunArgs::try_parse_from(["run-agent", "--dir", "/tmp/s", "-vv", "a", "task"]).unwrap();
        assert_eq!(args.dir, Some(PathBuf::from("/tmp/s")));
        assert_eq!(args.verbose, 2);
        assert_eq!(args.agent(), "a");
        assert_eq!(args.task(), "task");
    }

    #[test]
    fn setup_args_defaults() {
        let args = SetupArgs::try_parse_from(["setup-agents"]).unwrap();
        assert!(args.dir.is_none());
        assert!(args.working_dir.is_none());
        assert!(args.runner.is_none());
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn setup_args_reject_positionals() {
        assert!(SetupArgs::try_parse_from(["setup-agents", "extra"]).is_err());
    }
}
