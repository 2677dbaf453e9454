//! Settings loading and validation.

use super::model::{SETTINGS_FILE, Settings};
use crate::error::{AgentError, Result};
use log::debug;
use std::path::Path;

impl Settings {
    /// Load settings for a base directory.
    ///
    /// Returns defaults when `agentprompt.yaml` does not exist.
    pub fn load_from_base<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let path = base_dir.as_ref().join(SETTINGS_FILE);
        if !path.exists() {
            debug!("no settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Load settings from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            AgentError::fs(
                format!("failed to read settings file '{}'", path.display()),
                e,
            )
        })?;

        debug!("loaded settings from {}", path.display());
        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // serde_yaml rejects an empty document for a struct
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings: Settings = serde_yaml::from_str(yaml)
            .map_err(|e| AgentError::Settings(format!("failed to parse {}: {}", SETTINGS_FILE, e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Validate field values.
    ///
    /// - `banner_width` must be positive
    /// - path-like fields must be non-empty
    /// - `extension` must be a single extension: no dots or path separators
    pub fn validate(&self) -> Result<()> {
        if self.banner_width == 0 {
            return Err(AgentError::Settings(
                "banner_width must be greater than 0".to_string(),
            ));
        }

        for (field, value) in [
            ("agents_dir", &self.agents_dir),
            ("template_file", &self.template_file),
            ("extension", &self.extension),
            ("runner_name", &self.runner_name),
        ] {
            if value.trim().is_empty() {
                return Err(AgentError::Settings(format!("{} must be non-empty", field)));
            }
        }

        if self.extension.starts_with('.') {
            return Err(AgentError::Settings(format!(
                "extension must not have a leading dot (found '{}'). Use '{}' instead.",
                self.extension,
                self.extension.trim_start_matches('.')
            )));
        }

        // Path::extension() only sees the text after the last dot.
        if self.extension.contains(['.', '/', '\\']) {
            return Err(AgentError::Settings(format!(
                "extension must be a single extension without '.' or path separators (found '{}')",
                self.extension
            )));
        }

        Ok(())
    }
}
