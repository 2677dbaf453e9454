//! Reading and writing the flat-file agent directory.

use crate::agent::AgentConfig;
use crate::error::{AgentError, Result};
use crate::fs::atomic_write_file;
use crate::layout::Layout;
use log::{debug, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Load the record for `name`.
///
/// # Returns
///
/// * `Ok(AgentConfig)` - The parsed record, named after its file stem
/// * `Err(AgentError::NotFound)` - No record file exists; carries the sorted
///   list of names that do exist
/// * `Err(AgentError::MalformedConfig)` - The file is not a valid record
pub fn load_agent(layout: &Layout, name: &str) -> Result<AgentConfig> {
    let path = layout.agent_path(name);

    // A name that is not a plain file stem can never match a record.
    let plain_name = !name.is_empty()
        && !name.contains(['/', '\\'])
        && name != "."
        && name != "..";

    let content = if plain_name {
        fs::read_to_string(&path)
    } else {
        Err(ErrorKind::NotFound.into())
    };

    match content {
        Ok(content) => {
            debug!("loaded agent '{}' from {}", name, path.display());
            AgentConfig::from_json(&path, &content)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Err(AgentError::NotFound {
            name: name.to_string(),
            available: list_agents(layout)?,
        }),
        Err(e) => Err(AgentError::fs(
            format!("failed to read agent configuration '{}'", path.display()),
            e,
        )),
    }
}

/// List the names of every record in the agents directory, sorted.
///
/// A missing agents directory yields an empty list.
pub fn list_agents(layout: &Layout) -> Result<Vec<String>> {
    let entries = match fs::read_dir(&layout.agents_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(
                "agents directory '{}' does not exist; run setup-agents first",
                layout.agents_dir.display()
            );
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(AgentError::fs(
                format!(
                    "failed to list agents directory '{}'",
                    layout.agents_dir.display()
                ),
                e,
            ));
        }
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            AgentError::fs(
                format!(
                    "failed to read entry in '{}'",
                    layout.agents_dir.display()
                ),
                e,
            )
        })?;

        let path = entry.path();
        if !path.is_file() || !layout.is_agent_file(&path) {
            continue;
        }
        if let Some(stem) = path.file_stem() {
            names.push(stem.to_string_lossy().into_owned());
        }
    }

    names.sort();
    Ok(names)
}

/// Read the shared prompt template.
pub fn read_template(layout: &Layout) -> Result<String> {
    fs::read_to_string(&layout.template_path).map_err(|e| {
        AgentError::fs(
            format!(
                "failed to read prompt template '{}'",
                layout.template_path.display()
            ),
            e,
        )
    })
}

/// Write one record file per agent, creating the agents directory if needed.
///
/// Existing files are overwritten. Returns the written paths in input order.
pub fn write_agent_configs(layout: &Layout, agents: &[AgentConfig]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(&layout.agents_dir).map_err(|e| {
        AgentError::fs(
            format!(
                "failed to create agents directory '{}'",
                layout.agents_dir.display()
            ),
            e,
        )
    })?;

    let mut written = Vec::with_capacity(agents.len());
    for agent in agents {
        let path = layout.agent_path(&agent.name);
        let json = agent
            .to_json()
            .map_err(|source| AgentError::MalformedConfig {
                path: path.clone(),
                source,
            })?;

        atomic_write_file(&path, &json)?;
        debug!("wrote agent '{}' to {}", agent.name, path.display());
        written.push(path);
    }

    Ok(written)
}

/// Write the shared prompt template.
pub fn write_template(layout: &Layout, template: &str) -> Result<PathBuf> {
    atomic_write_file(&layout.template_path, template)?;
    debug!("wrote prompt template to {}", layout.template_path.display());
    Ok(layout.template_path.clone())
}
