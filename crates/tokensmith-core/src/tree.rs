use serde_json::{Map, Value};

/// Member that marks an object as a token leaf.
pub const VALUE_KEY: &str = "value";
/// Wrapper member whose children belong to the enclosing node.
pub const WRAPPER_KEY: &str = "tokens";
/// Container members that never hold tokens.
pub const RESERVED_KEYS: [&str; 3] = ["extensions", "$metadata", "$themes"];

/// Classification of a token tree node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'a> {
    /// An object carrying a `value` member.
    Leaf(&'a Value),
    /// An object without a `value` member.
    Branch {
        /// The `tokens` wrapper, if present and an object.
        wrapper: Option<&'a Value>,
        /// All members of the node, wrapper included.
        children: &'a Map<String, Value>,
    },
    /// Arrays and scalars; they contribute nothing.
    Ignored,
}

impl<'a> Node<'a> {
    /// Object children worth descending into, in document order.
    ///
    /// The wrapper and reserved containers are excluded, as are non-object
    /// members.
    // The wrapper is walked only under the parent's prefix, never again as a
    // `tokens` child, so no name carries a `tokens-` segment.
    pub fn descendable(&self) -> impl Iterator<Item = (&'a String, &'a Value)> {
        let children = match self {
            Node::Branch { children, .. } => Some(*children),
            _ => None,
        };
        children
            .into_iter()
            .flat_map(|map| map.iter())
            .filter(|(key, value)| {
                value.is_object() && key.as_str() != WRAPPER_KEY && !is_reserved(key)
            })
    }
}

/// Returns true for container keys that must never be descended into.
pub fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// Classifies a node once so callers can switch on the result.
pub fn classify(value: &Value) -> Node<'_> {
    match value {
        Value::Object(map) => match map.get(VALUE_KEY) {
            Some(leaf) => Node::Leaf(leaf),
            None => Node::Branch {
                wrapper: map.get(WRAPPER_KEY).filter(|w| w.is_object()),
                children: map,
            },
        },
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Array(_) => {
            Node::Ignored
        }
    }
}

/// Short name of a JSON value's kind, for diagnostics.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn leaf_is_detected_by_value_member() {
        let node = json!({ "value": "#fff", "type": "color" });
        assert_eq!(classify(&node), Node::Leaf(&json!("#fff")));
    }

    #[test]
    fn null_value_is_still_a_leaf() {
        let node = json!({ "value": null });
        assert!(matches!(classify(&node), Node::Leaf(Value::Null)));
    }

    #[test]
    fn branch_exposes_wrapper() {
        let node = json!({ "tokens": { "a": { "value": 1 } }, "b": {} });
        match classify(&node) {
            Node::Branch { wrapper, .. } => assert!(wrapper.unwrap().get("a").is_some()),
            other => panic!("expected branch, got {other:?}"),
        }
    }

    #[test]
    fn non_object_wrapper_is_ignored() {
        let node = json!({ "tokens": [1, 2] });
        assert!(matches!(classify(&node), Node::Branch { wrapper: None, .. }));
    }

    #[test]
    fn scalars_and_arrays_are_ignored() {
        assert_eq!(classify(&json!(1)), Node::Ignored);
        assert_eq!(classify(&json!([{ "value": 1 }])), Node::Ignored);
    }

    #[test]
    fn descendable_skips_reserved_wrapper_and_scalars() {
        let node = json!({
            "color": {},
            "tokens": {},
            "extensions": {},
            "$metadata": {},
            "$themes": {},
            "note": "text",
            "list": []
        });
        let keys: Vec<_> = classify(&node).descendable().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["color"]);
    }
}
