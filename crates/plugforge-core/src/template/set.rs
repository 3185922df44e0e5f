//! Manifest-driven template sets
//!
//! A template set is a directory `<sets_root>/<name>` holding a manifest
//! `<name>.files` plus the content templates it references. The manifest is
//! itself a template: it is rendered against the context before parsing, so
//! entries can be included conditionally.

use crate::error::{PlugforgeError, Result};
use crate::path::is_safe_relative;
use crate::template::context::TemplateContext;
use crate::template::file::{generate, FileTemplate};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Manifest file suffix appended to the set name
pub const MANIFEST_SUFFIX: &str = ".files";

/// One file written during set installation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    /// Logical name from the manifest
    pub logical: String,
    /// Path the file was written to
    pub path: PathBuf,
}

/// A resolved template set with its parsed manifest table.
#[derive(Debug)]
pub struct TemplateSet {
    name: String,
    dir: PathBuf,
    files: BTreeMap<String, String>,
}

impl TemplateSet {
    /// Resolve a named set and render + parse its manifest.
    pub fn load(sets_root: &Path, name: &str, context: &TemplateContext) -> Result<Self> {
        let dir = sets_root.join(name);
        if !dir.is_dir() {
            return Err(PlugforgeError::SetNotFound {
                name: name.to_string(),
                root: sets_root.to_path_buf(),
            });
        }

        let manifest = dir.join(format!("{}{}", name, MANIFEST_SUFFIX));
        if !manifest.is_file() {
            return Err(PlugforgeError::ManifestNotFound(manifest));
        }

        let text = FileTemplate::compile(&manifest)?.render(context)?;
        let files = parse_manifest(&text)?;

        Ok(Self {
            name: name.to_string(),
            dir,
            files,
        })
    }

    /// Set name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set directory on disk
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The logical-name to relative-output-path table, sorted by logical name
    pub fn files(&self) -> &BTreeMap<String, String> {
        &self.files
    }

    /// Generate every manifest entry under `out_root`.
    ///
    /// Entries are processed in lexicographic order of logical name. The
    /// first failure aborts the remainder: nothing past the failure point is
    /// written. Returns the table of files actually written.
    pub fn install(
        &self,
        out_root: &Path,
        context: &TemplateContext,
    ) -> Result<Vec<GeneratedFile>> {
        let mut written = Vec::with_capacity(self.files.len());

        for (logical, relative) in &self.files {
            let source = self.dir.join(logical);
            if !source.is_file() {
                return Err(PlugforgeError::SourceNotFound {
                    logical: logical.clone(),
                    path: source,
                });
            }

            let dest = out_root.join(relative);
            generate(&source, &dest, context)?;
            written.push(GeneratedFile {
                logical: logical.clone(),
                path: dest,
            });
        }

        Ok(written)
    }
}

/// Parse rendered manifest text into the sorted file table.
///
/// One entry per line, `logical = relative/output/path`, whitespace trimmed
/// on both sides. Lines without a `=` are skipped, not errors. Both sides
/// must stay inside their respective roots; traversal is rejected.
fn parse_manifest(text: &str) -> Result<BTreeMap<String, String>> {
    let mut files = BTreeMap::new();

    for line in text.lines() {
        let Some((logical, relative)) = line.split_once('=') else {
            continue;
        };
        let logical = logical.trim();
        let relative = relative.trim();
        if logical.is_empty() || relative.is_empty() {
            continue;
        }

        for side in [logical, relative] {
            if is_safe_relative(Path::new(side)).is_err() {
                return Err(PlugforgeError::PathEscape {
                    path: PathBuf::from(side),
                });
            }
        }

        files.insert(logical.to_string(), relative.to_string());
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use plugforge_testkit::temp_dir_in_workspace;
    use std::fs;

    fn context() -> TemplateContext {
        TemplateContext::new()
            .with("NAME", "demo")
            .with("FULL", true)
    }

    /// Write a small set: manifest with one conditional entry plus three
    /// content templates.
    fn write_fixture_set(root: &Path) {
        let dir = root.join("sample");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("sample.files"),
            "main = src/%[[NAME]].txt\nnotes = NOTES.md\n%[[if:FULL]]\nextra = extra/%[[NAME]].cfg\n%[[endif]]\n",
        )
        .unwrap();
        fs::write(dir.join("main"), "name=%[[NAME]]\n").unwrap();
        fs::write(dir.join("notes"), "# notes for %[[NAME]]\n").unwrap();
        fs::write(dir.join("extra"), "full config\n").unwrap();
    }

    #[test]
    fn test_load_parses_rendered_manifest() {
        let temp = temp_dir_in_workspace();
        write_fixture_set(temp.path());

        let set = TemplateSet::load(temp.path(), "sample", &context()).unwrap();

        assert_eq!(set.name(), "sample");
        assert_eq!(set.files().len(), 3);
        assert_eq!(set.files()["main"], "src/demo.txt");
        assert_eq!(set.files()["notes"], "NOTES.md");
        assert_eq!(set.files()["extra"], "extra/demo.cfg");
    }

    #[test]
    fn test_conditional_manifest_entry_excluded() {
        let temp = temp_dir_in_workspace();
        write_fixture_set(temp.path());

        let context = TemplateContext::new().with("NAME", "demo");
        let set = TemplateSet::load(temp.path(), "sample", &context).unwrap();

        assert!(!set.files().contains_key("extra"));
        assert_eq!(set.files().len(), 2);
    }

    #[test]
    fn test_install_writes_all_entries() {
        let temp = temp_dir_in_workspace();
        write_fixture_set(temp.path());

        let out = temp.path().join("out");
        let context = context();
        let set = TemplateSet::load(temp.path(), "sample", &context).unwrap();
        let written = set.install(&out, &context).unwrap();

        assert_eq!(written.len(), 3);
        assert_eq!(
            fs::read_to_string(out.join("src/demo.txt")).unwrap(),
            "name=demo\n"
        );
        assert_eq!(
            fs::read_to_string(out.join("NOTES.md")).unwrap(),
            "# notes for demo\n"
        );
        assert!(out.join("extra/demo.cfg").exists());
    }

    #[test]
    fn test_install_order_is_sorted_by_logical_name() {
        let temp = temp_dir_in_workspace();
        write_fixture_set(temp.path());

        let context = context();
        let set = TemplateSet::load(temp.path(), "sample", &context).unwrap();
        let written = set.install(&temp.path().join("out"), &context).unwrap();

        let logical: Vec<&str> = written.iter().map(|f| f.logical.as_str()).collect();
        assert_eq!(logical, ["extra", "main", "notes"]);
    }

    #[test]
    fn test_malformed_manifest_lines_skipped() {
        let temp = temp_dir_in_workspace();
        let dir = temp.path().join("loose");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("loose.files"),
            "# not an entry\n\nonly = kept.txt\nno separator here\n",
        )
        .unwrap();
        fs::write(dir.join("only"), "ok").unwrap();

        let set = TemplateSet::load(temp.path(), "loose", &context()).unwrap();
        assert_eq!(set.files().len(), 1);
        assert_eq!(set.files()["only"], "kept.txt");
    }

    #[test]
    fn test_missing_source_aborts_with_no_trailing_output() {
        let temp = temp_dir_in_workspace();
        let dir = temp.path().join("broken");
        fs::create_dir_all(&dir).unwrap();
        // Five entries; the third ("c") has no source file.
        fs::write(
            dir.join("broken.files"),
            "a = a.txt\nb = b.txt\nc = c.txt\nd = d.txt\ne = e.txt\n",
        )
        .unwrap();
        for name in ["a", "b", "d", "e"] {
            fs::write(dir.join(name), name).unwrap();
        }

        let out = temp.path().join("out");
        let context = context();
        let set = TemplateSet::load(temp.path(), "broken", &context).unwrap();
        let result = set.install(&out, &context);

        match result {
            Err(PlugforgeError::SourceNotFound { logical, .. }) => assert_eq!(logical, "c"),
            other => panic!("Expected SourceNotFound, got {:?}", other.map(|_| ())),
        }
        assert!(out.join("a.txt").exists());
        assert!(out.join("b.txt").exists());
        assert!(!out.join("c.txt").exists());
        assert!(!out.join("d.txt").exists());
        assert!(!out.join("e.txt").exists());
    }

    #[test]
    fn test_manifest_path_escape_rejected() {
        let temp = temp_dir_in_workspace();
        let dir = temp.path().join("evil");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("evil.files"), "payload = ../outside.txt\n").unwrap();

        let result = TemplateSet::load(temp.path(), "evil", &context());
        assert!(matches!(result, Err(PlugforgeError::PathEscape { .. })));
    }

    #[test]
    fn test_set_not_found() {
        let temp = temp_dir_in_workspace();
        let result = TemplateSet::load(temp.path(), "nonexistent", &context());
        match result {
            Err(PlugforgeError::SetNotFound { name, .. }) => assert_eq!(name, "nonexistent"),
            other => panic!("Expected SetNotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_manifest_not_found() {
        let temp = temp_dir_in_workspace();
        fs::create_dir_all(temp.path().join("empty")).unwrap();

        let result = TemplateSet::load(temp.path(), "empty", &context());
        assert!(matches!(result, Err(PlugforgeError::ManifestNotFound(_))));
    }
}
