//! Implementation of `setup-agents`.
//!
//! Writes every built-in agent record, the shared template, and an executable
//! copy of the runner into the base directory. Re-running overwrites the same
//! files with the same content.

use crate::agent::{AgentConfig, builtin_agents};
use crate::cli::SetupArgs;
use crate::error::{AgentError, Result};
use crate::fs::install_executable;
use crate::layout::{Layout, resolve_base_dir};
use crate::prompt::default_template;
use crate::store::{write_agent_configs, write_template};
use log::{debug, info};
use std::env;
use std::path::{Path, PathBuf};

/// File name of the runner binary built alongside `setup-agents`.
const RUNNER_BINARY: &str = "run-agent";

/// Inputs for a setup run.
#[derive(Debug, Clone)]
pub struct SetupOptions {
    /// Where agent records, the template, and the runner are written.
    pub layout: Layout,

    /// Project directory named in the template's working-directory note.
    pub working_directory: String,

    /// Runner executable to install.
    pub runner_source: PathBuf,
}

/// Files written by a setup run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupReport {
    pub agent_files: Vec<PathBuf>,
    pub template_file: PathBuf,
    pub runner_file: PathBuf,
}

impl SetupReport {
    /// Human-readable summary of the created files and how to use them.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        for path in &self.agent_files {
            out.push_str(&format!("Created agent configuration: {}\n", path.display()));
        }
        out.push_str(&format!(
            "\nCreated prompt template: {}\n",
            self.template_file.display()
        ));
        out.push_str(&format!(
            "\nCreated agent runner: {}\n",
            self.runner_file.display()
        ));

        let runner = self.runner_file.display();
        out.push_str("\nAgent setup complete!\n");
        out.push_str("\nTo use an agent:\n");
        out.push_str(&format!("  {} <agent-name> <task>\n", runner));
        out.push_str("\nExample:\n");
        out.push_str(&format!(
            "  {} mcp-implementation \"Set up the base MCP server class\"\n",
            runner
        ));
        out
    }
}

/// Execute the `setup-agents` command.
pub fn cmd_setup(args: SetupArgs) -> Result<()> {
    let base_dir = resolve_base_dir(args.dir)?;
    let layout = Layout::open(&base_dir)?;

    let working_directory = match args.working_dir {
        Some(dir) => dir,
        None => env::current_dir()
            .map_err(|e| AgentError::fs("failed to get current working directory", e))?,
    };

    let runner_source = match args.runner {
        Some(path) => path,
        None => default_runner_source()?,
    };

    let report = run_setup(&SetupOptions {
        layout,
        working_directory: working_directory.to_string_lossy().into_owned(),
        runner_source,
    })?;

    print!("{}", report.summary());
    Ok(())
}

/// Write agent records, the template, and the runner.
pub fn run_setup(options: &SetupOptions) -> Result<SetupReport> {
    let layout = &options.layout;
    info!("setting up agents in {}", layout.base_dir.display());

    let agents: Vec<AgentConfig> = builtin_agents().iter().map(|a| a.to_config()).collect();
    let agent_files = write_agent_configs(layout, &agents)?;

    let template = default_template(&options.working_directory)?;
    let template_file = write_template(layout, &template)?;

    install_executable(&options.runner_source, &layout.runner_path)?;
    info!("installed runner at {}", layout.runner_path.display());

    Ok(SetupReport {
        agent_files,
        template_file,
        runner_file: layout.runner_path.clone(),
    })
}

/// The `run-agent` binary that sits next to the current executable.
pub fn default_runner_source() -> Result<PathBuf> {
    let exe = env::current_exe()
        .map_err(|e| AgentError::fs("failed to locate the running executable", e))?;
    let dir = exe.parent().unwrap_or(Path::new("."));
    let candidate = dir.join(format!("{}{}", RUNNER_BINARY, env::consts::EXE_SUFFIX));

    if !candidate.is_file() {
        return Err(AgentError::fs(
            format!(
                "runner executable '{}' not found; pass --runner <PATH>",
                candidate.display()
            ),
            std::io::Error::from(std::io::ErrorKind::NotFound),
        ));
    }

    debug!("using runner {}", candidate.display());
    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::store::{list_agents, load_agent, read_template};
    use std::collections::BTreeMap;
    use std::fs;
    use tempfile::TempDir;

    fn options(temp_dir: &TempDir) -> SetupOptions {
        let runner_source = temp_dir.path().join("run-agent-src");
        fs::write(&runner_source, b"runner-bytes").unwrap();

        SetupOptions {
            layout: Layout::new(temp_dir.path().join("scripts"), Settings::default()),
            working_directory: "/home/dev/project".to_string(),
            runner_source,
        }
    }

    fn snapshot(dir: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
        let mut files = BTreeMap::new();
        let mut stack = vec![dir.to_path_buf()];
        while let Some(current) = stack.pop() {
            for entry in fs::read_dir(&current).unwrap() {
                let path = entry.unwrap().path();
                if path.is_dir() {
                    stack.push(path);
                } else {
                    files.insert(path.clone(), fs::read(&path).unwrap());
                }
            }
        }
        files
    }

    #[test]
    fn test_setup_writes_every_builtin_agent() {
        let temp_dir = TempDir::new().unwrap();
        let options = options(&temp_dir);

        let report = run_setup(&options).unwrap();

        let builtins = builtin_agents();
        assert_eq!(report.agent_files.len(), builtins.len());
        let mut expected: Vec<_> = builtins.iter().map(|a| a.name.to_string()).collect();
        expected.sort();
        assert_eq!(list_agents(&options.layout).unwrap(), expected);

        let loaded = load_agent(&options.layout, "search-optimizer").unwrap();
        assert_eq!(loaded, builtins[3].to_config());
    }

    #[test]
    fn test_setup_writes_template_and_runner() {
        let temp_dir = TempDir::new().unwrap();
        let options = options(&temp_dir);

        let report = run_setup(&options).unwrap();

        assert_eq!(report.template_file, options.layout.template_path);
        let template = read_template(&options.layout).unwrap();
        assert!(template.contains("Current Working Directory: /home/dev/project\n"));

        assert_eq!(report.runner_file, options.layout.runner_path);
        assert_eq!(fs::read(&report.runner_file).unwrap(), b"runner-bytes");
    }

    #[test]
    fn test_setup_twice_produces_identical_tree() {
        let temp_dir = TempDir::new().unwrap();
        let options = options(&temp_dir);

        run_setup(&options).unwrap();
        let first = snapshot(&options.layout.base_dir);
        run_setup(&options).unwrap();
        let second = snapshot(&options.layout.base_dir);

        assert_eq!(first, second);
    }

    #[test]
    fn test_setup_missing_runner_fails() {
        let temp_dir = TempDir::new().unwrap();
        let mut options = options(&temp_dir);
        options.runner_source = temp_dir.path().join("nope");

        let err = run_setup(&options).unwrap_err();
        assert!(matches!(err, AgentError::Filesystem { .. }));
    }

    #[test]
    fn test_summary_lists_files() {
        let report = SetupReport {
            agent_files: vec![PathBuf::from("s/agents/a.json")],
            template_file: PathBuf::from("s/agents/prompt_template.txt"),
            runner_file: PathBuf::from("s/run_agent"),
        };

        let summary = report.summary();
        assert!(summary.starts_with("Created agent configuration: s/agents/a.json\n"));
        assert!(summary.contains("\nCreated prompt template: s/agents/prompt_template.txt\n"));
        assert!(summary.contains("\nCreated agent runner: s/run_agent\n"));
        assert!(summary.contains("  s/run_agent <agent-name> <task>\n"));
    }
}
