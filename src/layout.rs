//! Directory layout resolution.
//!
//! Everything lives under one base directory:
//!
//! ```text
//! <base>/
//!   agentprompt.yaml          optional settings
//!   run_agent                 installed runner
//!   agents/
//!     <name>.json             one record per agent
//!     prompt_template.txt     shared template
//! ```
//!
//! When no base directory is given, the directory containing the running
//! executable is used, so an installed runner finds the `agents/` directory
//! that sits beside it.

use crate::config::Settings;
use crate::error::{AgentError, Result};
use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Resolved paths for one base directory. All paths are absolute when the
/// base directory is.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Directory holding the agents directory and the installed runner.
    pub base_dir: PathBuf,

    /// Directory holding agent records and the template.
    pub agents_dir: PathBuf,

    /// Shared prompt template.
    pub template_path: PathBuf,

    /// Installed runner executable.
    pub runner_path: PathBuf,

    /// Settings the paths were derived from.
    pub settings: Settings,
}

impl Layout {
    /// Build a layout from explicit settings.
    pub fn new<P: Into<PathBuf>>(base_dir: P, settings: Settings) -> Self {
        let base_dir = base_dir.into();
        let agents_dir = base_dir.join(&settings.agents_dir);
        let template_path = agents_dir.join(&settings.template_file);
        let runner_path = base_dir.join(format!(
            "{}{}",
            settings.runner_name,
            env::consts::EXE_SUFFIX
        ));

        Self {
            base_dir,
            agents_dir,
            template_path,
            runner_path,
            settings,
        }
    }

    /// Build a layout, reading `agentprompt.yaml` from the base directory if present.
    pub fn open<P: Into<PathBuf>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.into();
        let settings = Settings::load_from_base(&base_dir)?;
        Ok(Self::new(base_dir, settings))
    }

    /// Path of the record for `name`: `<agents_dir>/<name>.<extension>`.
    pub fn agent_path(&self, name: &str) -> PathBuf {
        self.agents_dir
            .join(format!("{}.{}", name, self.settings.extension))
    }

    /// Returns true if `path` has the configured record extension.
    pub fn is_agent_file(&self, path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext == OsStr::new(&self.settings.extension))
    }
}

/// Resolve the base directory: the explicit path if given, else the
/// directory of the current executable.
pub fn resolve_base_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }

    let exe = env::current_exe()
        .map_err(|e| AgentError::fs("failed to locate the running executable", e))?;

    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        AgentError::fs(
            format!("executable '{}' has no parent directory", exe.display()),
            std::io::Error::from(std::io::ErrorKind::NotFound),
        )
    })
}
