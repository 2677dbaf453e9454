//! Agent configuration records.
//!
//! - **Record**: the `AgentConfig` structure stored as one JSON file per agent
//! - **Builtin**: the fixed table of agents written by `setup-agents`

mod builtin;
mod record;

pub use builtin::{BuiltinAgent, builtin_agents};
pub use record::AgentConfig;
