//! Tokenization for the template engine
//!
//! Splits raw template text on the `%[[` ... `]]` delimiters into a flat,
//! ordered token stream. Directive bodies are classified here, once, with an
//! explicit ordered match; nothing is re-derived at render time.

use crate::template::error::TemplateError;

/// Opening directive delimiter
pub(crate) const OPEN: &str = "%[[";
/// Closing directive delimiter
pub(crate) const CLOSE: &str = "]]";

/// Token classification
///
/// Classification priority over a directive body: `if:` prefix, `elif:`
/// prefix, exact `else`, exact `endif`, then any body containing `:` is a
/// function call, and everything else a variable reference. Bodies are not
/// trimmed; `%[[ X ]]` refers to the variable named ` X `.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TokenKind {
    /// Literal text outside any delimiter pair
    Text(String),

    /// `%[[NAME]]`
    Variable(String),

    /// `%[[NAME:argument]]`
    Func { name: String, arg: String },

    /// `%[[if:condition]]`
    If(String),

    /// `%[[elif:condition]]`
    Elif(String),

    /// `%[[else]]`
    Else,

    /// `%[[endif]]`
    EndIf,
}

/// A token with the 1-based source line it starts on
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub line: usize,
}

/// Classify one directive body
fn classify(body: &str) -> TokenKind {
    if let Some(condition) = body.strip_prefix("if:") {
        TokenKind::If(condition.to_string())
    } else if let Some(condition) = body.strip_prefix("elif:") {
        TokenKind::Elif(condition.to_string())
    } else if body == "else" {
        TokenKind::Else
    } else if body == "endif" {
        TokenKind::EndIf
    } else if let Some((name, arg)) = body.split_once(':') {
        TokenKind::Func {
            name: name.to_string(),
            arg: arg.to_string(),
        }
    } else {
        TokenKind::Variable(body.to_string())
    }
}

fn count_newlines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}

/// Split template source into an ordered token stream.
///
/// Text between delimiter pairs is literal, including any stray `]]`; empty
/// text runs are not emitted. A `%[[` with no closing `]]` is fatal.
pub(crate) fn tokenize(source: &str) -> Result<Vec<Token>, TemplateError> {
    let mut tokens = Vec::new();
    let mut line = 1;
    let mut rest = source;

    while let Some(open) = rest.find(OPEN) {
        let (text, tail) = rest.split_at(open);
        if !text.is_empty() {
            tokens.push(Token {
                kind: TokenKind::Text(text.to_string()),
                line,
            });
            line += count_newlines(text);
        }

        let after_open = &tail[OPEN.len()..];
        let close = after_open
            .find(CLOSE)
            .ok_or(TemplateError::UnterminatedDirective { line })?;
        let body = &after_open[..close];
        tokens.push(Token {
            kind: classify(body),
            line,
        });
        line += count_newlines(body);

        rest = &after_open[close + CLOSE.len()..];
    }

    if !rest.is_empty() {
        tokens.push(Token {
            kind: TokenKind::Text(rest.to_string()),
            line,
        });
    }

    Ok(tokens)
}
