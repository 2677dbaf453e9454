//! Entry point for `run-agent`.
//!
//! Prints the prompt for a configured agent followed by the task text.

use agentprompt::cli::{RunArgs, parse_args};
use agentprompt::{commands, exit_codes, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: RunArgs = match parse_args() {
        Ok(args) => args,
        Err(code) => return code,
    };
    logging::init(args.verbose);

    match commands::cmd_run(args) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Unknown agents include the list of available names.
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
