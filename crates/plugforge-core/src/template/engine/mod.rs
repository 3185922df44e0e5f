//! Template engine implementation
//!
//! Three passes: tokenize (flat typed tokens), group (nested conditional
//! tree), render (tree walk against a variable context). Compilation is
//! separate from rendering so one compiled template can be rendered against
//! any number of contexts.

mod group;
mod render;
mod tokenize;

pub use group::{Branch, Node};

use crate::template::context::TemplateContext;
use crate::template::error::TemplateError;

/// Compile template source into a node sequence.
pub fn compile(source: &str) -> Result<Vec<Node>, TemplateError> {
    let tokens = tokenize::tokenize(source)?;
    group::group(&tokens)
}

/// Render a compiled node sequence against a context.
pub fn render(nodes: &[Node], context: &TemplateContext) -> Result<String, TemplateError> {
    let mut out = String::new();
    render::render_nodes(nodes, context, &mut out)?;
    Ok(out)
}

/// Convenience: compile and render in one step.
pub fn render_str(source: &str, context: &TemplateContext) -> Result<String, TemplateError> {
    render(&compile(source)?, context)
}

#[cfg(test)]
mod tests;
