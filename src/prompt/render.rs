//! Filling the prompt template from an agent record.

use super::template::{escape_braces, render_template, vars};
use crate::agent::AgentConfig;
use crate::config::Settings;
use crate::error::Result;
use std::collections::HashMap;

/// Source of the shared template written by `setup-agents`.
///
/// The agent placeholders are escaped here and become `{description}`,
/// `{expertise}` and `{guidelines}` once `{working_directory}` is filled in.
pub const DEFAULT_TEMPLATE: &str = "\
You are a specialized agent for the MCP Persistence System project.

Agent Role: {{description}}

Your Areas of Expertise:
{{expertise}}

Guidelines to Follow:
{{guidelines}}

Current Working Directory: {working_directory}
Project Type: TypeScript/Node.js MCP Server
Key Reference: HLD.md contains the complete system design

Please help with the following task:
";

/// Produce the shared template text for a project rooted at `working_directory`.
pub fn default_template(working_directory: &str) -> Result<String> {
    let vars = vars([("working_directory", escape_braces(working_directory))]);
    Ok(render_template(DEFAULT_TEMPLATE, &vars)?)
}

/// Render items one per line, each prefixed with `"- "`. No trailing newline.
pub fn bullet_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Template variables for an agent record.
pub fn prompt_variables(config: &AgentConfig) -> HashMap<String, String> {
    vars([
        ("description", config.description.clone()),
        ("expertise", bullet_list(&config.expertise)),
        ("guidelines", bullet_list(&config.guidelines)),
    ])
}

/// Render `template` for `config` and append `task` directly, with no separator.
pub fn format_prompt(config: &AgentConfig, template: &str, task: &str) -> Result<String> {
    let mut prompt = render_template(template, &prompt_variables(config))?;
    prompt.push_str(task);
    Ok(prompt)
}

/// Frame a prompt with the banner title and `=` rules, one per line.
pub fn render_banner(prompt: &str, settings: &Settings) -> String {
    let rule = "=".repeat(settings.banner_width);
    format!(
        "{}\n{}\n{}\n{}\n",
        settings.banner_title, rule, prompt, rule
    )
}
