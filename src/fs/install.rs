//! Installing an executable copy of a file.

use super::atomic_write;
use crate::error::{AgentError, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Copy `source` to `dest` and mark the copy executable (`0o755` on Unix).
///
/// The copy is written atomically, so replacing a runner that is currently
/// executing does not fail with "text file busy". Installing a file onto
/// itself only refreshes its permissions.
pub fn install_executable(source: &Path, dest: &Path) -> Result<()> {
    let same_file = match (source.canonicalize(), dest.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    };

    if same_file {
        debug!("{} is already installed, not copying", dest.display());
    } else {
        let bytes = fs::read(source).map_err(|e| {
            AgentError::fs(format!("failed to read runner '{}'", source.display()), e)
        })?;
        atomic_write(dest, &bytes)?;
        debug!("copied {} -> {}", source.display(), dest.display());
    }

    set_executable(dest)
}

#[cfg(unix)]
fn set_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).map_err(|e| {
        AgentError::fs(
            format!("failed to set permissions on '{}'", path.display()),
            e,
        )
    })
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_install_copies_content() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("run-agent");
        let dest = temp_dir.path().join("base").join("run_agent");
        fs::write(&source, b"\x7fELF runner").unwrap();

        install_executable(&source, &dest).unwrap();

        assert_eq!(fs::read(&dest).unwrap(), b"\x7fELF runner");
    }

    #[cfg(unix)]
    #[test]
    fn test_install_sets_mode_755() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("run-agent");
        let dest = temp_dir.path().join("run_agent");
        fs::write(&source, b"runner").unwrap();

        install_executable(&source, &dest).unwrap();

        let mode = fs::metadata(&dest).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn test_install_onto_itself_keeps_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("run_agent");
        fs::write(&path, b"runner").unwrap();

        install_executable(&path, &path).unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"runner");
    }

    #[test]
    fn test_install_missing_source_fails() {
        let temp_dir = TempDir::new().unwrap();
        let err = install_executable(
            &temp_dir.path().join("missing"),
            &temp_dir.path().join("run_agent"),
        )
        .unwrap_err();

        assert!(matches!(err, AgentError::Filesystem { .. }));
        assert!(err.to_string().contains("failed to read runner"));
    }
}
