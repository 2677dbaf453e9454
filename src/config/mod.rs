//! Optional settings for the agent directory.
//!
//! Settings are read from `agentprompt.yaml` in the base directory. The file
//! is optional: when it is absent every field takes its default. Unknown
//! fields are ignored for forward compatibility.

mod model;
mod operations;


pub use model::{SETTINGS_FILE, Settings};
