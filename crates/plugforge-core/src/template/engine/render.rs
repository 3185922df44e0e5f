//! Tree-walking renderer
//!
//! Walks the grouped node tree against a variable context. Undefined
//! variables render as nothing (config leniency); unknown function names are
//! hard failures (code-correctness signal). The asymmetry is deliberate.

use super::group::Node;
use crate::template::context::TemplateContext;
use crate::template::error::TemplateError;

/// Built-in functions, resolved once per directive
enum Builtin {
    /// `STR:name` — value as a double-quoted, escaped string literal
    Str,
}

impl Builtin {
    fn lookup(name: &str) -> Option<Builtin> {
        match name {
            "STR" => Some(Builtin::Str),
            _ => None,
        }
    }
}

/// Render a node sequence into `out`.
pub(crate) fn render_nodes(
    nodes: &[Node],
    context: &TemplateContext,
    out: &mut String,
) -> Result<(), TemplateError> {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Variable(name) => {
                if let Some(value) = context.get(name) {
                    out.push_str(&value.to_string());
                }
            }
            Node::Func { name, arg, line } => {
                let builtin =
                    Builtin::lookup(name).ok_or_else(|| TemplateError::UnknownFunction {
                        name: name.clone(),
                        line: *line,
                    })?;
                match builtin {
                    Builtin::Str => {
                        if let Some(value) = context.get(arg) {
                            out.push_str(&quote(&value.to_string()));
                        }
                    }
                }
            }
            Node::Conditional(branches) => {
                for branch in branches {
                    let selected = match &branch.condition {
                        Some(condition) => context.truthy(condition),
                        None => true,
                    };
                    if selected {
                        render_nodes(&branch.body, context, out)?;
                        break;
                    }
                }
            }
        }
    }

    Ok(())
}

/// Wrap a value in double quotes, escaping backslashes and embedded quotes,
/// so the result can be spliced into a quoted literal in generated source.
fn quote(raw: &str) -> String {
    let mut quoted = String::with_capacity(raw.len() + 2);
    quoted.push('"');
    for ch in raw.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            _ => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}
