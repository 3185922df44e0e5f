use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlugforgeError {
    // Template errors
    #[error("TEMPLATE_SYNTAX: {path}: {source}")]
    TemplateSyntax {
        path: PathBuf,
        source: crate::template::error::TemplateError,
    },

    #[error("TEMPLATE_RENDER: {path}: {source}")]
    TemplateRender {
        path: PathBuf,
        source: crate::template::error::TemplateError,
    },

    // Template set errors
    #[error("SET_NOT_FOUND: template set '{name}' not found under {root}")]
    SetNotFound { name: String, root: PathBuf },

    #[error("MANIFEST_NOT_FOUND: manifest {0} does not exist")]
    ManifestNotFound(PathBuf),

    #[error("SOURCE_NOT_FOUND: template '{logical}' listed in manifest has no source at {path}")]
    SourceNotFound { logical: String, path: PathBuf },

    #[error("PATH_ESCAPE: path '{path}' would resolve outside the destination root")]
    PathEscape { path: PathBuf },

    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParse(String),

    #[error("CONFIG_INVALID: failed to parse plugforge.toml: {0}")]
    ConfigInvalid(String),

    // IO errors
    #[error("IO_ERROR: {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // Generic errors
    #[error("{0}")]
    Generic(String),
}

pub type Result<T> = std::result::Result<T, PlugforgeError>;
