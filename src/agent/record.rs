//! The agent configuration record.
//!
//! # File Format
//!
//! ```json
//! {
//!   "description": "Design and implement SQLite database schema and operations",
//!   "expertise": [
//!     "SQLite database design",
//!     "Schema migrations"
//!   ],
//!   "guidelines": [
//!     "Use exact schema from HLD.md"
//!   ]
//! }
//! ```
//!
//! The agent's name is not stored in the file; it is the file stem.

use crate::error::{AgentError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A named agent: role description, areas of expertise, and guidelines.
///
/// Unknown fields in the JSON are ignored. All three content fields are
/// required; a record missing any of them is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Lookup key and file stem. Populated on load, never serialized.
    #[serde(skip)]
    pub name: String,

    /// One-line role description, substituted verbatim.
    pub description: String,

    /// Areas of expertise, rendered one bullet per entry.
    pub expertise: Vec<String>,

    /// Guidelines to follow, rendered one bullet per entry.
    pub guidelines: Vec<String>,
}

impl AgentConfig {
    /// Parse a record read from `path`, naming it after the file stem.
    pub fn from_json(path: &Path, content: &str) -> Result<Self> {
        let mut config: AgentConfig =
            serde_json::from_str(content).map_err(|source| AgentError::MalformedConfig {
                path: path.to_path_buf(),
                source,
            })?;

        config.name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(config)
    }

    /// Serialize to pretty JSON with two-space indentation and no trailing newline.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
