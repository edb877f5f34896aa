//! CSS rendering of the flat token map.

use crate::merger::FlatTokenMap;
use crate::number::format_number;
use serde_json::Value;
use std::fmt::Write;

/// Selector the custom properties are scoped to.
pub const ROOT_SELECTOR: &str = ":root";

/// Renders a [`FlatTokenMap`] as one CSS rule of custom properties.
///
/// Values are written verbatim. Entries whose value is `null`, an object or
/// an array produce no declaration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Emitter;

impl Emitter {
    /// Creates an emitter.
    pub fn new() -> Self {
        Self
    }

    /// Renders the map, one declaration per line, with a trailing newline.
    pub fn emit(&self, tokens: &FlatTokenMap) -> String {
        let mut css = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(css, "{ROOT_SELECTOR} {{");
        for (name, value) in tokens {
            if let Some(text) = css_value(value) {
                let _ = writeln!(css, "  --{name}: {text};");
            }
        }
        css.push_str("}\n");
        css
    }
}

/// Text form of a value for emission, or `None` if it is not emittable.
pub fn css_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(format_number(n)),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
