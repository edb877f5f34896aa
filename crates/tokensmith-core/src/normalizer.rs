//! Name canonicalization and value rewriting.

use crate::collector::RawTokens;
use crate::rules::RuleTable;
use indexmap::IndexMap;
use serde_json::Value;
use tokensmith_canonical::{AliasRef, CanonicalName};
use tracing::debug;

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueOrigin {
    /// The raw value was used as-is or rewritten by a rule.
    Literal,
    /// The raw value was an alias reference.
    Alias,
}

/// A value ready for verbatim CSS emission.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    /// Resolved value.
    pub value: Value,
    /// Origin of the value.
    pub origin: ValueOrigin,
}

impl Resolved {
    /// A literal value.
    pub fn literal(value: Value) -> Self {
        Self {
            value,
            origin: ValueOrigin::Literal,
        }
    }

    /// Returns true when the value came from an alias reference.
    pub fn is_alias(&self) -> bool {
        self.origin == ValueOrigin::Alias
    }
}

/// One document's tokens after normalization, in encounter order.
pub type NormalizedTokens = IndexMap<CanonicalName, Resolved>;

/// Canonicalizes names and rewrites values through a [`RuleTable`].
///
/// Precedence per value: keyword substitution, then alias translation, then
/// unit injection. An alias value is never unit-suffixed.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    rules: RuleTable,
}

impl Normalizer {
    /// Creates a normalizer over the given rules.
    pub fn new(rules: RuleTable) -> Self {
        Self { rules }
    }

    /// The rules in use.
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Normalizes one collected token.
    ///
    /// Returns `None` when the name canonicalizes to nothing.
    pub fn normalize(&self, name: &str, raw: &Value) -> Option<(CanonicalName, Resolved)> {
        let name = CanonicalName::derive(name)?;
        let resolved = self.resolve(name.as_str(), raw);
        Some((name, resolved))
    }

    /// Resolves a raw value for an already-canonical name.
    pub fn resolve(&self, name: &str, raw: &Value) -> Resolved {
        if let Some(value) = self.rules.substitute_keyword(name, raw) {
            return Resolved::literal(value);
        }

        if let Some(alias) = raw.as_str().and_then(AliasRef::parse) {
            return Resolved {
                value: Value::String(alias.to_css_var()),
                origin: ValueOrigin::Alias,
            };
        }

        if let Some(value) = self.rules.inject_unit(name, raw) {
            return Resolved::literal(value);
        }

        Resolved::literal(raw.clone())
    }

    /// Normalizes a whole document, returning a new map.
    ///
    /// Distinct collected names that canonicalize to the same name collapse;
    /// the later one wins.
    pub fn normalize_all(&self, tokens: &RawTokens) -> NormalizedTokens {
        let mut out = NormalizedTokens::with_capacity(tokens.len());
        for (raw_name, raw_value) in tokens {
            match self.normalize(raw_name, raw_value) {
                Some((name, resolved)) => {
                    out.insert(name, resolved);
                }
                None => debug!(name = %raw_name, "dropping token with empty canonical name"),
            }
        }
        out
    }
}
