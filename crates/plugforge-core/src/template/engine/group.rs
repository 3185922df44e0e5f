//! Block grouping: flat token stream to nested node tree
//!
//! Resolves `if` / `elif` / `else` / `endif` markers into structured
//! conditional nodes. The pass is a pure recursive function returning
//! `(nodes, next_index, terminator)`; the terminator is an explicit enum
//! rather than state threaded through loop iterations, so "which directive
//! ended this block" and "was an `else` already seen" are always visible at
//! the call site.

use super::tokenize::{Token, TokenKind};
use crate::template::error::TemplateError;

/// The grouped, nested representation used for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal text, emitted verbatim
    Text(String),

    /// Variable reference; absent variables render as nothing
    Variable(String),

    /// Built-in function call
    Func {
        name: String,
        arg: String,
        /// Source line, for unknown-function diagnostics
        line: usize,
    },

    /// An `if`/`elif`/`else` chain; branches in document order
    Conditional(Vec<Branch>),
}

/// One branch of a conditional
///
/// `condition: None` is the trailing else-branch. The grouper guarantees at
/// most one per conditional, always last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub condition: Option<String>,
    pub body: Vec<Node>,
}

/// What ended a grouped block
enum Terminator {
    Elif { condition: String, line: usize },
    Else { line: usize },
    EndIf,
    EndOfInput,
}

/// Group a full token stream into a node sequence.
pub(crate) fn group(tokens: &[Token]) -> Result<Vec<Node>, TemplateError> {
    let (nodes, _, terminator) = group_block(tokens, 0, false)?;
    // group_block rejects dangling elif/else/endif at the top level, so the
    // only way back out here is end-of-input.
    debug_assert!(matches!(terminator, Terminator::EndOfInput));
    Ok(nodes)
}

/// Group one block starting at `start`, stopping at a same-depth terminator.
///
/// `in_branch` is true when the block is a conditional branch body: its first
/// text run loses leading line terminators (a directive ending a source line
/// must not leave a blank line in the output), and `elif`/`else`/`endif`
/// terminate the block instead of being errors. The same stripping applies to
/// the text run following a closed conditional at any depth; the very first
/// text run of the whole template is never stripped.
fn group_block(
    tokens: &[Token],
    start: usize,
    in_branch: bool,
) -> Result<(Vec<Node>, usize, Terminator), TemplateError> {
    let mut nodes = Vec::new();
    let mut strip_newline = in_branch;
    let mut pos = start;

    while pos < tokens.len() {
        let token = &tokens[pos];
        match &token.kind {
            TokenKind::Text(text) => {
                let text = if strip_newline {
                    text.trim_start_matches(['\n', '\r'])
                } else {
                    text.as_str()
                };
                if !text.is_empty() {
                    nodes.push(Node::Text(text.to_string()));
                }
                strip_newline = false;
                pos += 1;
            }
            TokenKind::Variable(name) => {
                nodes.push(Node::Variable(name.clone()));
                strip_newline = false;
                pos += 1;
            }
            TokenKind::Func { name, arg } => {
                nodes.push(Node::Func {
                    name: name.clone(),
                    arg: arg.clone(),
                    line: token.line,
                });
                strip_newline = false;
                pos += 1;
            }
            TokenKind::If(_) => {
                let (node, next) = group_conditional(tokens, pos)?;
                nodes.push(node);
                pos = next;
                strip_newline = true;
            }
            TokenKind::Elif(condition) => {
                if !in_branch {
                    return Err(TemplateError::DanglingDirective {
                        directive: "elif".to_string(),
                        line: token.line,
                    });
                }
                return Ok((
                    nodes,
                    pos + 1,
                    Terminator::Elif {
                        condition: condition.clone(),
                        line: token.line,
                    },
                ));
            }
            TokenKind::Else => {
                if !in_branch {
                    return Err(TemplateError::DanglingDirective {
                        directive: "else".to_string(),
                        line: token.line,
                    });
                }
                return Ok((nodes, pos + 1, Terminator::Else { line: token.line }));
            }
            TokenKind::EndIf => {
                if !in_branch {
                    return Err(TemplateError::DanglingDirective {
                        directive: "endif".to_string(),
                        line: token.line,
                    });
                }
                return Ok((nodes, pos + 1, Terminator::EndIf));
            }
        }
    }

    Ok((nodes, tokens.len(), Terminator::EndOfInput))
}

/// Group the conditional opening at `tokens[pos]` (an `If` token).
///
/// Accumulates one branch per `if`/`elif` plus an optional trailing
/// else-branch, consuming tokens through the matching `endif`.
fn group_conditional(tokens: &[Token], pos: usize) -> Result<(Node, usize), TemplateError> {
    let (mut condition, if_line) = match &tokens[pos].kind {
        TokenKind::If(condition) => (Some(condition.clone()), tokens[pos].line),
        kind => unreachable!("group_conditional called on {:?}", kind),
    };

    let mut branches = Vec::new();
    let mut saw_else = false;
    let mut cursor = pos + 1;

    loop {
        let (body, next, terminator) = group_block(tokens, cursor, true)?;
        branches.push(Branch {
            condition: condition.take(),
            body,
        });
        cursor = next;

        match terminator {
            Terminator::Elif {
                condition: next_condition,
                line,
            } => {
                if saw_else {
                    return Err(TemplateError::BranchAfterElse {
                        directive: "elif".to_string(),
                        line,
                    });
                }
                condition = Some(next_condition);
            }
            Terminator::Else { line } => {
                if saw_else {
                    return Err(TemplateError::BranchAfterElse {
                        directive: "else".to_string(),
                        line,
                    });
                }
                saw_else = true;
            }
            Terminator::EndIf => return Ok((Node::Conditional(branches), cursor)),
            Terminator::EndOfInput => {
                return Err(TemplateError::UnclosedConditional { line: if_line })
            }
        }
    }
}
