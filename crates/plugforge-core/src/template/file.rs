//! Single-file templates: compile once, render many, write once

use crate::error::{PlugforgeError, Result};
use crate::template::context::TemplateContext;
use crate::template::engine::{self, Node};
use std::fs;
use std::path::{Path, PathBuf};

/// A compiled template file.
///
/// Compilation happens once at construction; the node sequence can then be
/// rendered against any number of contexts. Errors carry the source path.
#[derive(Debug, Clone)]
pub struct FileTemplate {
    source: PathBuf,
    nodes: Vec<Node>,
}

impl FileTemplate {
    /// Read and compile a template file.
    pub fn compile(path: impl Into<PathBuf>) -> Result<Self> {
        let source = path.into();
        let text = fs::read_to_string(&source).map_err(|e| PlugforgeError::Io {
            path: source.clone(),
            source: e,
        })?;
        let nodes = engine::compile(&text).map_err(|e| PlugforgeError::TemplateSyntax {
            path: source.clone(),
            source: e,
        })?;
        Ok(Self { source, nodes })
    }

    /// Path of the source file this template was compiled from
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Render against a context.
    pub fn render(&self, context: &TemplateContext) -> Result<String> {
        engine::render(&self.nodes, context).map_err(|e| PlugforgeError::TemplateRender {
            path: self.source.clone(),
            source: e,
        })
    }

    /// Render and write to `dest`, creating missing parent directories and
    /// silently overwriting an existing file.
    pub fn generate(&self, dest: &Path, context: &TemplateContext) -> Result<()> {
        let text = self.render(context)?;

        if let Some(parent) = dest.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| PlugforgeError::Io {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        fs::write(dest, text).map_err(|e| PlugforgeError::Io {
            path: dest.to_path_buf(),
            source: e,
        })
    }
}

/// Compile, render, and write in one step.
pub fn generate(source: &Path, dest: &Path, context: &TemplateContext) -> Result<()> {
    FileTemplate::compile(source)?.generate(dest, context)
}
