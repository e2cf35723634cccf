//! Atomic manifest writes
//!
//! Contents go to a temporary file beside the destination which is then
//! renamed over it, so a failed run never leaves a half-written manifest.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use tempfile::{Builder, NamedTempFile};

use crate::error::Result;

/// Replace `path` with `contents` in one step
///
/// The parent directory must already exist. Existing permissions on the
/// destination are kept; new files get the mode a plain `File::create`
/// would give them under the current umask.
///
/// # Errors
///
/// Returns an error if the parent directory is missing or unwritable, or
/// if the rename fails.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    if !parent.is_dir() {
        anyhow::bail!("Output directory does not exist: {}", parent.display());
    }

    let existing = fs::metadata(path).ok();
    let mut tmp = temp_file_in(parent, existing.is_none())
        .with_context(|| format!("Failed to create temporary file in {}", parent.display()))?;

    tmp.write_all(contents.as_bytes())
        .with_context(|| format!("Failed to write temporary file for {}", path.display()))?;
    tmp.as_file()
        .sync_all()
        .with_context(|| format!("Failed to flush temporary file for {}", path.display()))?;

    if let Some(existing) = existing {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .with_context(|| format!("Failed to copy permissions of {}", path.display()))?;
    }

    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to replace {}", path.display()))?;

    Ok(())
}

/// Temporary file in `dir`; `fresh` files are opened with mode 0666 so the
/// umask applies instead of tempfile's private 0600
#[cfg(unix)]
fn temp_file_in(dir: &Path, fresh: bool) -> std::io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    let mut builder = Builder::new();
    if fresh {
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

#[cfg(not(unix))]
fn temp_file_in(dir: &Path, _fresh: bool) -> std::io::Result<NamedTempFile> {
    Builder::new().tempfile_in(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("sources.cmake");

        write_atomic(&path, "hello\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn test_write_overwrites_wholesale() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("sources.am");
        fs::write(&path, "a much longer previous content\n".repeat(10)).unwrap();

        write_atomic(&path, "short\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "short\n");
    }

    #[test]
    fn test_missing_parent_fails_without_creating_it() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("buildsys/autotools/sources.am");

        let err = write_atomic(&path, "x").unwrap_err();
        assert!(err.to_string().contains("does not exist"));
        assert!(!tmp.path().join("buildsys").exists());
    }

    #[test]
    fn test_no_temporary_files_left_behind() {
        let tmp = TempDir::new().unwrap();
        write_atomic(&tmp.path().join("out.txt"), "x").unwrap();

        let names: Vec<_> = fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("out.txt")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_mode_follows_umask() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let reference = tmp.path().join("reference.txt");
        fs::File::create(&reference).unwrap();
        let path = tmp.path().join("out.txt");
        write_atomic(&path, "x").unwrap();

        let mode = |p: &Path| fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(path.as_path()), mode(reference.as_path()));
    }

    #[cfg(unix)]
    #[test]
    fn test_existing_mode_is_kept() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.txt");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

        write_atomic(&path, "new").unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
    }
}
