//! Entry point for `setup-agents`.
//!
//! Writes the built-in agent configurations and installs the runner, then
//! prints a summary of the files created.

use agentprompt::cli::{SetupArgs, parse_args};
use agentprompt::{commands, exit_codes, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: SetupArgs = match parse_args() {
        Ok(args) => args,
        Err(code) => return code,
    };
    logging::init(args.verbose);

    match commands::cmd_setup(args) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
