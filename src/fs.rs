//! File system operations performed by the renamer.

use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing::info;

pub trait FileSystem: Send + Sync {
    /// Create `path` and all missing parents.
    fn mkdir_all(&self, path: &Path) -> io::Result<()>;

    /// Move `from` to `to`.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// The real file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn mkdir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        if to.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", to.display()),
            ));
        }
        std::fs::rename(from, to)
    }
}

/// Logs every operation instead of performing it.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunFileSystem;

impl FileSystem for DryRunFileSystem {
    fn mkdir_all(&self, path: &Path) -> io::Result<()> {
        info!("[DRY RUN] Would create directory {}", path.display());
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        info!("[DRY RUN] Would move {} to {}", from.display(), to.display());
        Ok(())
    }
}

/// Pick the file system for a run.
pub fn for_run(dry_run: bool) -> Arc<dyn FileSystem> {
    if dry_run {
        Arc::new(DryRunFileSystem)
    } else {
        Arc::new(OsFileSystem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn os_rename_moves_file() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("a.mkv");
        std::fs::write(&from, b"x").unwrap();

        let target_dir = dir.path().join("nested/dir");
        OsFileSystem.mkdir_all(&target_dir).unwrap();
        let to = target_dir.join("b.mkv");
        OsFileSystem.rename(&from, &to).unwrap();

        assert!(!from.exists());
        assert_eq!(std::fs::read(&to).unwrap(), b"x");
    }

    #[test]
    fn os_rename_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("a.mkv");
        let to = dir.path().join("b.mkv");
        std::fs::write(&from, b"new").unwrap();
        std::fs::write(&to, b"old").unwrap();

        let err = OsFileSystem.rename(&from, &to).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(std::fs::read(&to).unwrap(), b"old");
    }

    #[test]
    fn dry_run_touches_nothing() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("a.mkv");
        std::fs::write(&from, b"x").unwrap();
        let to = dir.path().join("new/b.mkv");

        let fs = for_run(true);
        fs.mkdir_all(&dir.path().join("new")).unwrap();
        fs.rename(&from, &to).unwrap();

        assert!(from.exists());
        assert!(!dir.path().join("new").exists());
    }
}
