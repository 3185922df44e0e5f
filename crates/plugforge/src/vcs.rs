//! Git repository detection, initialization, and file staging
//!
//! Generated files are staged into the enclosing repository so a fresh
//! scaffold starts tracked. Everything shells out to the `git` binary; there
//! is no libgit dependency.

use anyhow::{Context as _, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Check whether a git binary is available on PATH.
pub fn git_available() -> bool {
    which::which("git").is_ok()
}

/// Ignores seeded into fresh repositories: build intermediates, outputs, and
/// MSVC user/state files.
const GITIGNORE: &str = "int/
out/
*.opensdf
*.sdf
*.suo
*.orig
*.user
";

/// A directory and the git repository enclosing it, if any.
pub struct Repo {
    dir: PathBuf,
    root: Option<PathBuf>,
}

impl Repo {
    /// Locate the enclosing repository by walking up from `dir` looking for
    /// a `.git` entry.
    pub fn discover(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let mut cursor = dir.clone();
        let root = loop {
            if cursor.join(".git").exists() {
                break Some(cursor);
            }
            if !cursor.pop() {
                break None;
            }
        };
        Self { dir, root }
    }

    /// Whether an enclosing repository was found
    pub fn exists(&self) -> bool {
        self.root.is_some()
    }

    /// Repository root, falling back to the starting directory before `init`
    pub fn root(&self) -> &Path {
        self.root.as_deref().unwrap_or(&self.dir)
    }

    /// Initialize a repository at the starting directory and seed it with a
    /// `.gitignore`.
    pub fn init(&mut self) -> Result<()> {
        run_git(&self.dir, &["init", "--quiet", "."])?;
        self.root = Some(self.dir.clone());

        let gitignore = self.dir.join(".gitignore");
        fs::write(&gitignore, GITIGNORE)
            .with_context(|| format!("failed to write {}", gitignore.display()))?;
        self.add(&gitignore)?;

        Ok(())
    }

    /// Stage one file.
    pub fn add(&self, file: &Path) -> Result<()> {
        let status = Command::new("git")
            .arg("add")
            .arg("--")
            .arg(file)
            .current_dir(self.root())
            .status()
            .with_context(|| format!("failed to run git add for {}", file.display()))?;
        if !status.success() {
            bail!("git add {} failed with {}", file.display(), status);
        }
        Ok(())
    }
}

fn run_git(cwd: &Path, args: &[&str]) -> Result<()> {
    let status = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .status()
        .with_context(|| format!("failed to run git {}", args.join(" ")))?;
    if !status.success() {
        bail!("git {} failed with {}", args.join(" "), status);
    }
    Ok(())
}
