//! Settings struct definition and default implementation.

use serde::Deserialize;

/// Name of the optional settings file inside the base directory.
pub const SETTINGS_FILE: &str = "agentprompt.yaml";

/// Directory layout and output formatting for the agent tools.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding agent records and the template, relative to the base directory.
    #[serde(default = "default_agents_dir")]
    pub agents_dir: String,

    /// File name of the shared prompt template inside `agents_dir`.
    #[serde(default = "default_template_file")]
    pub template_file: String,

    /// Extension of agent record files, without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// File name of the installed runner in the base directory.
    #[serde(default = "default_runner_name")]
    pub runner_name: String,

    /// Line printed before the prompt.
    #[serde(default = "default_banner_title")]
    pub banner_title: String,

    /// Width of the `=` rules around the prompt.
    #[serde(default = "default_banner_width")]
    pub banner_width: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            agents_dir: default_agents_dir(),
            template_file: default_template_file(),
            extension: default_extension(),
            runner_name: default_runner_name(),
            banner_title: default_banner_title(),
            banner_width: default_banner_width(),
        }
    }
}

fn default_agents_dir() -> String {
    "agents".to_string()
}

fn default_template_file() -> String {
    "prompt_template.txt".to_string()
}

fn default_extension() -> String {
    "json".to_string()
}

fn default_runner_name() -> String {
    "run_agent".to_string()
}

fn default_banner_title() -> String {
    "Agent Prompt:".to_string()
}

fn default_banner_width() -> usize {
    80
}
