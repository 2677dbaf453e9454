//! Error types for the agent prompt tools.
//!
//! Uses thiserror for derive macros. Every variant maps to an exit code so the
//! binaries can report a message and terminate without unwinding.

use crate::exit_codes;
use crate::prompt::TemplateError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for agent setup and prompt rendering.
#[derive(Error, Debug)]
pub enum AgentError {
    /// Invalid command-line usage.
    #[error("{0}")]
    Usage(String),

    /// No configuration file exists for the requested agent.
    #[error("Agent '{name}' not found\nAvailable agents:{}", bullet_names(.available))]
    NotFound {
        /// The requested agent name.
        name: String,
        /// Stems of every configuration file that does exist, sorted.
        available: Vec<String>,
    },

    /// An agent record exists but is not valid JSON or lacks a required field.
    #[error("malformed agent configuration '{}': {source}", .path.display())]
    MalformedConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The prompt template could not be rendered.
    #[error("failed to render prompt template: {0}")]
    Template(#[from] TemplateError),

    /// The optional settings file is unreadable or invalid.
    #[error("invalid settings: {0}")]
    Settings(String),

    /// A filesystem operation failed.
    #[error("{context}: {source}")]
    Filesystem {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl AgentError {
    /// Build a `Filesystem` error with a human-readable context line.
    pub fn fs(context: impl Into<String>, source: io::Error) -> Self {
        AgentError::Filesystem {
            context: context.into(),
            source,
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            AgentError::Usage(_) => exit_codes::USER_ERROR,
            AgentError::NotFound { .. } => exit_codes::USER_ERROR,
            AgentError::MalformedConfig { .. } => exit_codes::MALFORMED_INPUT,
            AgentError::Template(_) => exit_codes::MALFORMED_INPUT,
            AgentError::Settings(_) => exit_codes::MALFORMED_INPUT,
            AgentError::Filesystem { .. } => exit_codes::FILESYSTEM_FAILURE,
        }
    }
}

fn bullet_names(names: &[String]) -> String {
    names.iter().map(|n| format!("\n  - {}", n)).collect()
}

/// Result type alias for agent operations.
pub type Result<T> = std::result::Result<T, AgentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_error_has_correct_exit_code() {
        let err = AgentError::Usage("missing task".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn not_found_lists_available_agents() {
        let err = AgentError::NotFound {
            name: "ghost".to_string(),
            available: vec!["alpha".to_string(), "beta".to_string()],
        };
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert_eq!(
            err.to_string(),
            "Agent 'ghost' not found\nAvailable agents:\n  - alpha\n  - beta"
        );
    }

    #[test]
    fn not_found_with_empty_directory() {
        let err = AgentError::NotFound {
            name: "ghost".to_string(),
            available: Vec::new(),
        };
        assert_eq!(err.to_string(), "Agent 'ghost' not found\nAvailable agents:");
    }

    #[test]
    fn malformed_config_has_correct_exit_code() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = AgentError::MalformedConfig {
            path: PathBuf::from("agents/broken.json"),
            source,
        };
        assert_eq!(err.exit_code(), exit_codes::MALFORMED_INPUT);
        assert!(
            err.to_string()
                .starts_with("malformed agent configuration 'agents/broken.json': ")
        );
    }

    #[test]
    fn template_error_has_correct_exit_code() {
        let err: AgentError = TemplateError::UnmatchedBrace { position: 3 }.into();
        assert_eq!(err.exit_code(), exit_codes::MALFORMED_INPUT);
        assert_eq!(
            err.to_string(),
            "failed to render prompt template: unmatched '{' at position 3 in template"
        );
    }

    #[test]
    fn filesystem_error_has_correct_exit_code() {
        let err = AgentError::fs(
            "failed to create directory 'agents'",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.exit_code(), exit_codes::FILESYSTEM_FAILURE);
        assert_eq!(err.to_string(), "failed to create directory 'agents': denied");
    }
}
