use crate::names::canonical_name;
use std::fmt;

/// A reference from one token value to another token, written `{a.b.c}`.
///
/// Only a single brace pair with a non-empty, brace-free interior counts.
/// Resolution rewrites the syntax into a CSS variable reference; it never
/// looks the target up, so chains of aliases stay chains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRef {
    path: String,
}

impl AliasRef {
    /// Parses `raw` as an alias reference. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Option<Self> {
        let inner = raw.trim().strip_prefix('{')?.strip_suffix('}')?;
        if inner.is_empty() || inner.contains(['{', '}']) {
            return None;
        }
        Some(Self {
            path: inner.to_string(),
        })
    }

    /// Returns true when `raw` is an alias reference.
    pub fn is_alias(raw: &str) -> bool {
        Self::parse(raw).is_some()
    }

    /// The dotted path between the braces, as written.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The canonical name of the referenced token.
    pub fn target(&self) -> String {
        canonical_name(&self.path)
    }

    /// The CSS variable reference this alias resolves to.
    pub fn to_css_var(&self) -> String {
        format!("var(--{})", self.target())
    }
}

impl fmt::Display for AliasRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.path)
    }
}
