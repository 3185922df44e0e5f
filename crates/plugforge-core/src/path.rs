//! Cross-platform path validation
//!
//! `Path::is_absolute()` is platform-dependent: `/tmp` is absolute on Unix
//! but merely *rooted* on Windows, so a naive check passes on one platform
//! and silently fails on the other. These helpers use component-based
//! analysis so manifest output paths and user-supplied names are validated
//! identically everywhere.

use anyhow::{bail, Result};
use std::path::{Component, Path};

/// Check if path is absolute OR rooted (cross-platform).
pub fn has_absolute_or_rooted_component(path: &Path) -> bool {
    if path.is_absolute() {
        return true;
    }

    path.components()
        .any(|c| matches!(c, Component::RootDir | Component::Prefix(_)))
}

/// Validate a relative path that must stay inside its root.
///
/// Accepts one or more `Normal` components; rejects absolute/rooted paths,
/// drive prefixes, `.` and `..` components, and the empty path.
pub fn is_safe_relative(path: &Path) -> Result<()> {
    if has_absolute_or_rooted_component(path) {
        bail!("Path cannot be absolute or rooted: '{}'", path.display());
    }

    let mut normal_count = 0;

    for component in path.components() {
        match component {
            Component::Normal(_) => normal_count += 1,
            Component::Prefix(_) => {
                bail!("Path cannot contain drive prefix: '{}'", path.display())
            }
            Component::RootDir => {
                bail!("Path cannot be absolute or rooted: '{}'", path.display())
            }
            Component::CurDir => {
                bail!(
                    "Path cannot contain current directory (.): '{}'",
                    path.display()
                )
            }
            Component::ParentDir => {
                bail!(
                    "Path cannot contain parent directory (..): '{}'",
                    path.display()
                )
            }
        }
    }

    if normal_count == 0 {
        bail!("Path cannot be empty");
    }

    Ok(())
}

/// Validate a path that must be a single directory or file name.
pub fn is_safe_single_component(path: &Path) -> Result<()> {
    is_safe_relative(path)?;

    let normal_count = path
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .count();
    if normal_count != 1 {
        bail!(
            "Path must be a single component, found {}: '{}'",
            normal_count,
            path.display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_and_rooted_detected() {
        assert!(has_absolute_or_rooted_component(Path::new("/tmp")));
        assert!(has_absolute_or_rooted_component(Path::new("/etc/passwd")));
        assert!(!has_absolute_or_rooted_component(Path::new("foo/bar")));
        assert!(!has_absolute_or_rooted_component(Path::new("my-plugin")));
    }

    #[test]
    fn test_safe_relative_accepts_nested_paths() {
        assert!(is_safe_relative(Path::new("src/module.cpp")).is_ok());
        assert!(is_safe_relative(Path::new("README.md")).is_ok());
        assert!(is_safe_relative(Path::new("a/b/c.txt")).is_ok());
    }

    #[test]
    fn test_safe_relative_rejects_escapes() {
        assert!(is_safe_relative(Path::new("/tmp/out")).is_err());
        assert!(is_safe_relative(Path::new("../outside")).is_err());
        assert!(is_safe_relative(Path::new("a/../b")).is_err());
        assert!(is_safe_relative(Path::new("./a")).is_err());
        assert!(is_safe_relative(Path::new("")).is_err());
    }

    #[test]
    fn test_single_component() {
        assert!(is_safe_single_component(Path::new("my-plugin")).is_ok());
        assert!(is_safe_single_component(Path::new("foo/bar")).is_err());
        assert!(is_safe_single_component(Path::new("..")).is_err());
        assert!(is_safe_single_component(Path::new("/tmp")).is_err());
    }

    #[cfg(target_os = "windows")]
    #[test]
    fn test_windows_drive_prefix_rejected() {
        assert!(is_safe_relative(Path::new("C:\\Windows")).is_err());
        assert!(has_absolute_or_rooted_component(Path::new("C:\\Windows")));
    }
}
