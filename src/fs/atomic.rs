//! Atomic file writes.
//!
//! 1. Write content to `.{filename}.tmp` in the target's directory
//! 2. Sync the file to disk
//! 3. Rename over the target
//!
//! `std::fs::rename` replaces an existing target on both POSIX and Windows.
//! Source and destination share a directory, so the rename never crosses
//! filesystems. A crash can leave the temp file behind.

use crate::error::{AgentError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, creating parent directories as needed.
///
/// ```no_run
/// use agentprompt::fs::atomic_write;
/// use std::path::Path;
///
/// atomic_write(Path::new("agents/prompt_template.txt"), b"{description}\n")?;
/// # Ok::<(), agentprompt::error::AgentError>(())
/// ```
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            AgentError::fs(
                format!("failed to create parent directory '{}'", parent.display()),
                e,
            )
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content)?;
    replace(&temp_path, path)
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target.file_name().and_then(|n| n.to_str()).ok_or_else(|| {
        AgentError::fs(
            format!("invalid file path '{}'", target.display()),
            std::io::Error::from(std::io::ErrorKind::InvalidInput),
        )
    })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        AgentError::fs(
            format!("failed to create temporary file '{}'", path.display()),
            e,
        )
    })?;

    let written = file.write_all(content).and_then(|()| file.sync_all());
    if let Err(e) = written {
        let _ = fs::remove_file(path);
        return Err(AgentError::fs(
            format!("failed to write temporary file '{}'", path.display()),
            e,
        ));
    }

    Ok(())
}

fn replace(source: &Path, target: &Path) -> Result<()> {
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        AgentError::fs(format!("failed to replace '{}'", target.display()), e)
    })
}
