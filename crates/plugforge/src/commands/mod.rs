//! CLI command implementations

pub mod new;
pub mod sets;

use plugforge_core::config::Config;
use std::path::{Path, PathBuf};

/// Resolve the template-sets root.
///
/// Priority: `--templates-root` flag (the clap `env` attribute folds the
/// `PLUGFORGE_TEMPLATES` variable into it), then `[templates].root` from
/// plugforge.toml, then `templates/` in the invocation directory. Relative
/// roots resolve against the invocation directory.
pub(crate) fn resolve_templates_root(
    flag: Option<PathBuf>,
    config: &Config,
    current_dir: &Path,
) -> PathBuf {
    let root = flag
        .or_else(|| config.templates.root.clone())
        .unwrap_or_else(|| PathBuf::from("templates"));
    current_dir.join(root)
}
