//! Filesystem helpers.
//!
//! Writes go through a temp-file-and-rename so a reader never observes a
//! partially written agent record, template, or runner.

pub mod atomic;
mod install;

pub use atomic::{atomic_write, atomic_write_file};
pub use install::install_executable;
