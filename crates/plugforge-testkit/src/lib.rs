//! Test utilities shared across the plugforge workspace.

use std::path::PathBuf;
use tempfile::TempDir;

fn tmp_base() -> std::io::Result<PathBuf> {
    let base = std::env::current_dir()?.join(".tmp");
    std::fs::create_dir_all(&base)?;
    Ok(base)
}

/// Create a temporary directory under `.tmp/` in the crate being tested.
///
/// Keeping test scratch space inside the workspace (rather than the system
/// temp dir) puts everything a failed run leaves behind in one gitignored
/// place. The directory is removed when the returned guard drops.
///
/// # Panics
///
/// Panics when the current directory cannot be determined or the directory
/// cannot be created; tests have no useful way to proceed from either.
///
/// # Examples
///
/// ```rust
/// let temp = plugforge_testkit::temp_dir_in_workspace();
/// std::fs::write(temp.path().join("probe.txt"), "data").unwrap();
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("failed to create temp dir under .tmp/")
}

/// Fallible variant of [`temp_dir_in_workspace`].
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    TempDir::new_in(tmp_base()?)
}
