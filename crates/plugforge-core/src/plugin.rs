//! Plugin project description and template variable assembly
//!
//! Turns the user-facing plugin parameters into the variable context the
//! template engine consumes. The engine itself never sees these names; they
//! are plain context keys like any other.

use crate::template::context::TemplateContext;
use chrono::{Datelike, Local};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Everything needed to describe one plugin project
#[derive(Debug, Clone)]
pub struct PluginSpec {
    /// Human-facing plugin name
    pub name: String,
    /// MIME type the plugin registers for
    pub mime_type: String,
    /// Description (may be empty; templates test it for presence)
    pub description: String,
    /// Plugin version string
    pub version: String,
    /// Code namespace
    pub namespace: String,
    /// Output/library name, also the default destination directory
    pub target: String,
    /// Class name for the plugin instance
    pub instance_class: String,
    /// Class name for the plugin module
    pub module_class: String,
    /// Solution directory; when set it becomes the destination root and the
    /// solution file is generated
    pub solution: Option<PathBuf>,
    /// Project GUID, allocated once per spec
    pub guid: String,
}

impl PluginSpec {
    /// Create a spec with derived defaults: namespace from the name, target
    /// from the namespace, `Instance`/`Module` classes, version 1.0.0, and a
    /// freshly allocated project GUID.
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        let name = name.into();
        let namespace = derive_namespace(&name);
        Self {
            name,
            mime_type: mime_type.into(),
            description: String::new(),
            version: "1.0.0".to_string(),
            target: namespace.clone(),
            namespace,
            instance_class: "Instance".to_string(),
            module_class: "Module".to_string(),
            solution: None,
            guid: project_guid(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Override the namespace; also re-derives the default target
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self.target = self.namespace.clone();
        self
    }

    /// Override the target name
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Set the instance class
    pub fn with_instance_class(mut self, class: impl Into<String>) -> Self {
        self.instance_class = class.into();
        self
    }

    /// Set the module class
    pub fn with_module_class(mut self, class: impl Into<String>) -> Self {
        self.module_class = class.into();
        self
    }

    /// Generate into a solution directory
    pub fn with_solution(mut self, dir: impl Into<PathBuf>) -> Self {
        self.solution = Some(dir.into());
        self
    }

    /// Build the variable context for one generation run.
    pub fn context(&self) -> TemplateContext {
        let mut context = TemplateContext::new();
        context.set("PLUGIN_NAME", self.name.as_str());
        context.set("PLUGIN_MIMETYPE", self.mime_type.as_str());
        context.set("PLUGIN_DESCRIPTION", self.description.as_str());
        context.set("PLUGIN_VERSION", self.version.as_str());
        context.set("PLUGIN_NAMESPACE", self.namespace.as_str());
        context.set("PLUGIN_TARGET", self.target.as_str());
        context.set("INSTANCE_CLASS", self.instance_class.as_str());
        context.set("MODULE_CLASS", self.module_class.as_str());
        context.set("YEAR", i64::from(Local::now().year()));
        context.set("PROJ_GUID", self.guid.as_str());
        if let Some(solution) = &self.solution {
            context.set("SOLUTION", solution.display().to_string());
        }
        context
    }

    /// The destination root for generated files: the solution directory when
    /// one was requested, the target directory otherwise.
    pub fn output_root(&self) -> &Path {
        match &self.solution {
            Some(solution) => solution.as_path(),
            None => Path::new(&self.target),
        }
    }
}

/// Derive a lower_snake namespace from a CamelCase plugin name.
///
/// Non-alphanumeric characters become underscores; an underscore is inserted
/// at every lower-to-upper boundary.
pub fn derive_namespace(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;

    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
            prev_lower = false;
        } else if ch.is_ascii_alphanumeric() {
            out.push(ch);
            prev_lower = true;
        } else {
            out.push('_');
            prev_lower = false;
        }
    }

    out
}

/// Allocate a project GUID in the uppercase braced form MSVC project files
/// use.
pub fn project_guid() -> String {
    format!("{{{}}}", Uuid::new_v4().to_string().to_uppercase())
}
