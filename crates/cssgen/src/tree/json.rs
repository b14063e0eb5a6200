//! Loading style fragments from JSON.
//!
//! Objects become [`StyleNode`]s, strings and numbers become leaves, and
//! arrays become fallback lists. The reserved `_names` field is lifted out of
//! the entries into the node's name list; it may be an object whose keys are
//! the names or an array of strings.
//!
//! ```
//! use cssgen::tree::parse_fragments;
//!
//! let fragments = parse_fragments(r#"[
//!     { "color": "red" },
//!     { ">>label": { "_names": { "label_x1": true }, "opacity": 0.5 } }
//! ]"#).unwrap();
//!
//! assert_eq!(fragments.len(), 2);
//! ```

use serde_json::Value;

use crate::error::{CssGenError, Result};
use crate::tree::node::{NAMES_FIELD, StyleNode, StyleValue};

impl StyleNode {
    /// Builds a node from a JSON object.
    pub fn from_json(value: &Value) -> Result<StyleNode> {
        match value {
            Value::Object(map) => {
                let mut node = StyleNode::new();
                for (key, value) in map {
                    if key == NAMES_FIELD {
                        for name in names_from_json(value)? {
                            node.add_name(name);
                        }
                    } else {
                        node.insert(key.as_str(), value_from_json(key, value)?);
                    }
                }
                Ok(node)
            }
            other => Err(CssGenError::InvalidValue {
                property: String::from("<fragment>"),
                reason: format!("expected an object, found {}", json_kind(other)),
            }),
        }
    }
}

/// Parses either a single fragment object or an array of fragment objects.
pub fn parse_fragments(source: &str) -> Result<Vec<StyleNode>> {
    let value: Value = serde_json::from_str(source)?;
    match &value {
        Value::Array(items) => items.iter().map(StyleNode::from_json).collect(),
        single => Ok(vec![StyleNode::from_json(single)?]),
    }
}

fn value_from_json(key: &str, value: &Value) -> Result<StyleValue> {
    match value {
        Value::String(s) => Ok(StyleValue::Str(s.clone())),
        Value::Number(n) => n
            .as_f64()
            .map(StyleValue::Number)
            .ok_or_else(|| invalid(key, "number out of range")),
        Value::Array(items) => items
            .iter()
            .map(|item| value_from_json(key, item))
            .collect::<Result<Vec<_>>>()
            .map(StyleValue::List),
        Value::Object(_) => StyleNode::from_json(value).map(StyleValue::Node),
        Value::Bool(_) | Value::Null => Err(invalid(
            key,
            &format!("{} has no CSS representation", json_kind(value)),
        )),
    }
}

fn names_from_json(value: &Value) -> Result<Vec<String>> {
    match value {
        Value::Object(map) => Ok(map.keys().cloned().collect()),
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| invalid(NAMES_FIELD, "class names must be strings"))
            })
            .collect(),
        other => Err(invalid(
            NAMES_FIELD,
            &format!("expected an object or array, found {}", json_kind(other)),
        )),
    }
}

fn invalid(property: &str, reason: &str) -> CssGenError {
    CssGenError::InvalidValue {
        property: property.to_string(),
        reason: reason.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
