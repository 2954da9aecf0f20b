//! Inline-style serialization.
//!
//! Template records carry per-section style objects as JSON mappings from
//! camel-case CSS property names to string or number values. Rendering
//! flattens each mapping into a declaration list suitable for an element's
//! `style` attribute.

use serde_json::Value;

/// Serialize a JSON style object into an inline CSS declaration string.
///
/// Properties are emitted in the object's iteration order as
/// `property: value;` pairs separated by single spaces, with camel-case
/// names converted to kebab-case. Values are emitted verbatim — no quoting
/// or escaping is applied, so callers must only pass trusted CSS values.
///
/// Anything that is not a JSON object (including `null`) produces an empty
/// string. Total function, no error conditions.
///
/// # Examples
///
/// ```
/// use maildeck_core::style::inline_style;
/// use serde_json::json;
///
/// let style = json!({ "fontSize": "12px", "color": "red" });
/// assert_eq!(inline_style(&style), "font-size: 12px; color: red;");
/// assert_eq!(inline_style(&serde_json::Value::Null), "");
/// ```
pub fn inline_style(style: &Value) -> String {
    let Some(obj) = style.as_object() else {
        return String::new();
    };

    obj.iter()
        .map(|(name, value)| format!("{}: {};", camel_to_kebab(name), css_value(value)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convert a camel-case property name to kebab-case.
///
/// Each upper-case letter is preceded by a hyphen and lower-cased:
/// `fontSize` → `font-size`, `borderTopWidth` → `border-top-width`.
/// Names without upper-case letters pass through unchanged.
pub fn camel_to_kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Render a JSON value as CSS text. Strings are used as-is (no quotes);
/// everything else falls back to its JSON display form.
fn css_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
