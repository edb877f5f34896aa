use thiserror::Error;

/// Errors raised while flattening a token tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectError {
    /// A leaf's `value` member is an object or array.
    #[error("malformed leaf at {path}: value is {kind}, expected a scalar")]
    MalformedLeaf {
        /// Dotted path of the offending leaf.
        path: String,
        /// JSON kind that was found (`object` or `array`).
        kind: &'static str,
    },
}

/// Errors raised while building a rule table.
#[derive(Error, Debug)]
pub enum RuleError {
    /// A family pattern is not a valid regular expression.
    #[error("invalid rule pattern '{pattern}': {source}")]
    InvalidPattern {
        /// Pattern as written.
        pattern: String,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },
    /// A keyword rule has an empty match literal.
    #[error("keyword rule for '{family}' has an empty match literal")]
    EmptyKeyword {
        /// Family pattern of the rule.
        family: String,
    },
}

