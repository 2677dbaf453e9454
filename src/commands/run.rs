//! Implementation of `run-agent`.

use crate::cli::RunArgs;
use crate::error::Result;
use crate::layout::{Layout, resolve_base_dir};
use crate::prompt::{format_prompt, render_banner};
use crate::store::{load_agent, read_template};
use log::info;

/// Execute the `run-agent` command.
///
/// 1. Loads the agent record (unknown names list the available agents)
/// 2. Renders the shared template with the record
/// 3. Appends the task and prints the framed prompt to stdout
pub fn cmd_run(args: RunArgs) -> Result<()> {
    let base_dir = resolve_base_dir(args.dir.clone())?;
    let layout = Layout::open(&base_dir)?;
    let output = render_agent_prompt(&layout, args.agent(), &args.task())?;
    print!("{}", output);
    Ok(())
}

/// Load `agent`, render its prompt with `task`, and frame it for printing.
pub fn render_agent_prompt(layout: &Layout, agent: &str, task: &str) -> Result<String> {
    let config = load_agent(layout, agent)?;
    info!("rendering prompt for agent '{}'", config.name);

    let template = read_template(layout)?;
    let prompt = format_prompt(&config, &template, task)?;
    Ok(render_banner(&prompt, &layout.settings))
}
