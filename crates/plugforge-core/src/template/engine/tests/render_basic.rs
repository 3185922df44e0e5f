//! Basic rendering tests

use super::helpers::simple_context;
use crate::template::engine::render_str;

#[test]
fn test_literal_round_trip() {
    let source = "no directives here,\njust text.\n";
    let result = render_str(source, &simple_context()).unwrap();
    assert_eq!(result, source);
}

#[test]
fn test_variable_substitution() {
    let result = render_str("name: %[[NAME]]", &simple_context()).unwrap();
    assert_eq!(result, "name: Foo");
}

#[test]
fn test_absent_variable_renders_nothing() {
    let result = render_str("[%[[MISSING]]]", &simple_context()).unwrap();
    assert_eq!(result, "[]");
}

#[test]
fn test_integer_value() {
    let result = render_str("count: %[[COUNT]]", &simple_context()).unwrap();
    assert_eq!(result, "count: 42");
}

#[test]
fn test_boolean_value() {
    let result = render_str("enabled: %[[ENABLED]]", &simple_context()).unwrap();
    assert_eq!(result, "enabled: true");
}

#[test]
fn test_falsy_values_still_interpolate() {
    // Truthiness only affects conditions; present-but-falsy variables still
    // have a textual representation.
    let result = render_str("%[[ZERO]]/%[[OFF]]/[%[[EMPTY]]]", &simple_context()).unwrap();
    assert_eq!(result, "0/false/[]");
}

#[test]
fn test_multiple_substitutions() {
    let result = render_str("%[[NAME]]-%[[COUNT]]-%[[NAME]]", &simple_context()).unwrap();
    assert_eq!(result, "Foo-42-Foo");
}

#[test]
fn test_empty_template() {
    assert_eq!(render_str("", &simple_context()).unwrap(), "");
}
