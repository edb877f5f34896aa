//! Token tree flattening.

use crate::errors::CollectError;
use crate::tree::{classify, kind_of, Node};
use indexmap::IndexMap;
use serde_json::Value;
use tokensmith_canonical::join_path;

/// Collected name → raw value, in encounter order.
pub type RawTokens = IndexMap<String, Value>;

/// How to treat leaves whose `value` is not a scalar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollectMode {
    /// Object/array leaf values are errors; the document is rejected.
    #[default]
    Strict,
    /// Object/array leaf values pass through and are dropped at emission.
    Permissive,
}

/// Flattens a token tree into path-derived names.
///
/// The walk is depth-first in document key order and uses an explicit work
/// stack, so nesting depth is bounded by memory rather than the call stack.
#[derive(Debug, Clone, Default)]
pub struct Collector {
    mode: CollectMode,
}

impl Collector {
    /// Creates a collector with the given leaf policy.
    pub fn new(mode: CollectMode) -> Self {
        Self { mode }
    }

    /// Returns the leaf policy.
    pub fn mode(&self) -> CollectMode {
        self.mode
    }

    /// Collects every leaf reachable from the document root.
    pub fn collect(&self, tree: &Value) -> Result<RawTokens, CollectError> {
        self.collect_at(tree, Vec::new())
    }

    /// Collects every leaf reachable from `tree`, prefixing names with `prefix`.
    ///
    /// Within one document a repeated name keeps its first position and takes
    /// the last value seen.
    pub fn collect_at(
        &self,
        tree: &Value,
        prefix: Vec<String>,
    ) -> Result<RawTokens, CollectError> {
        let mut out = RawTokens::new();
        let mut stack: Vec<(&Value, Vec<String>)> = vec![(tree, prefix)];

        while let Some((node, path)) = stack.pop() {
            match classify(node) {
                Node::Leaf(value) => {
                    let structured = value.is_object() || value.is_array();
                    if self.mode == CollectMode::Strict && structured {
                        return Err(CollectError::MalformedLeaf {
                            path: path.join("."),
                            kind: kind_of(value),
                        });
                    }
                    out.insert(join_path(&path), value.clone());
                }
                branch @ Node::Branch { wrapper, .. } => {
                    // Pushed in reverse so pops follow document order.
                    let children: Vec<_> = branch.descendable().collect();
                    for (key, child) in children.into_iter().rev() {
                        let mut child_path = path.clone();
                        child_path.push(key.clone());
                        stack.push((child, child_path));
                    }
                    if let Some(wrapper) = wrapper {
                        stack.push((wrapper, path));
                    }
                }
                Node::Ignored => {}
            }
        }

        Ok(out)
    }
}
