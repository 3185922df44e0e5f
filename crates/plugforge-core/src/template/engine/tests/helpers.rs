//! Shared test helpers for template engine tests

use crate::template::context::TemplateContext;

/// Context with one truthy value of each type plus the falsy variants
pub(super) fn simple_context() -> TemplateContext {
    TemplateContext::new()
        .with("NAME", "Foo")
        .with("COUNT", 42)
        .with("ENABLED", true)
        .with("EMPTY", "")
        .with("ZERO", 0)
        .with("OFF", false)
}
