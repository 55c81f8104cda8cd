//! Request-scoped temp files.
//!
//! A `ScopedTempFile` owns a path on local disk and deletes it when dropped, whichever
//! way the owning scope exits. Guards declared later in a scope drop first, so files
//! are released in reverse order of acquisition.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct ScopedTempFile {
    path: PathBuf,
    label: &'static str,
}

impl ScopedTempFile {
    /// Create a new, uniquely named file in `dir` and take ownership of it.
    ///
    /// Returns the open handle alongside the guard. The handle may be dropped early;
    /// the file itself lives until the guard does.
    pub fn create_in(
        dir: &Path,
        prefix: &str,
        suffix: &str,
        label: &'static str,
    ) -> io::Result<(File, Self)> {
        let named = tempfile::Builder::new()
            .prefix(prefix)
            .suffix(suffix)
            .tempfile_in(dir)?;
        let (file, path) = named.keep().map_err(|e| e.error)?;

        tracing::debug!(path = %path.display(), label, "Temp file created");

        Ok((file, Self { path, label }))
    }

    /// Take ownership of a path another process is about to write.
    ///
    /// Nothing is created; if the file never appears, drop is a no-op.
    pub fn reserve(path: PathBuf, label: &'static str) -> Self {
        Self { path, label }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScopedTempFile {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), label = self.label, "Temp file removed");
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    path = %self.path.display(),
                    label = self.label,
                    "Failed to remove temp file"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_created_file_removed_on_drop() {
        let dir = tempdir().unwrap();
        let (mut file, guard) =
            ScopedTempFile::create_in(dir.path(), "tubely-upload-", ".mp4", "staged").unwrap();
        file.write_all(b"bytes").unwrap();
        drop(file);

        let path = guard.path().to_path_buf();
        assert!(path.exists());
        assert!(path.file_name().unwrap().to_string_lossy().ends_with(".mp4"));

        drop(guard);
        assert!(!path.exists());
    }

    #[test]
    fn test_reserved_path_tolerates_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("never-written.processing");
        let guard = ScopedTempFile::reserve(path.clone(), "processed");
        drop(guard);
        assert!(!path.exists());
    }

    #[test]
    fn test_reserved_path_removed_once_written() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.processing");
        let guard = ScopedTempFile::reserve(path.clone(), "processed");
        std::fs::write(&path, b"partial").unwrap();
        drop(guard);
        assert!(!path.exists());
    }

    #[test]
    fn test_guards_release_on_early_return() {
        fn stage_then_fail(dir: &Path) -> io::Result<()> {
            let (_file, _staged) = ScopedTempFile::create_in(dir, "a-", ".mp4", "staged")?;
            let (_file, _processed) = ScopedTempFile::create_in(dir, "b-", ".mp4", "processed")?;
            Err(io::Error::other("remux failed"))
        }

        let dir = tempdir().unwrap();
        assert!(stage_then_fail(dir.path()).is_err());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
