use crate::validation::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Rewrites `input` into lower-case, hyphen-delimited form.
///
/// Whitespace, underscores and any character outside `[A-Za-z0-9.-]` become
/// hyphens, runs of hyphens collapse to one, a leading and a trailing hyphen
/// are trimmed and the result is lower-cased. Dots survive; callers decide
/// what a dot means.
pub fn to_kebab(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        let mapped = if c.is_ascii_alphanumeric() || c == '.' { c } else { '-' };
        if mapped == '-' && out.ends_with('-') {
            continue;
        }
        out.push(mapped);
    }
    let trimmed = out.strip_prefix('-').unwrap_or(&out);
    let trimmed = trimmed.strip_suffix('-').unwrap_or(trimmed);
    trimmed.to_ascii_lowercase()
}

/// Joins token path segments into a collected name.
///
/// Empty segments are dropped. `.-` sequences left behind by dotted segments
/// collapse to a single hyphen.
pub fn join_path<S: AsRef<str>>(segments: &[S]) -> String {
    let joined = segments
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    to_kebab(&joined).replace(".-", "-")
}

/// Derives the final CSS-safe name from a collected name.
///
/// Slashes and dots are path separators at this point, so both become
/// hyphens before the kebab rules run again.
pub fn canonical_name(raw: &str) -> String {
    to_kebab(&raw.replace('/', "-").replace('.', "-"))
}

/// A validated canonical token name (`[a-z0-9]` words joined by single hyphens).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalName(String);

impl CanonicalName {
    const PATTERN: &'static str = r"^[a-z0-9]+(-[a-z0-9]+)*$";

    /// Canonicalizes a collected name. Returns `None` when nothing survives.
    pub fn derive(raw: &str) -> Option<Self> {
        let name = canonical_name(raw);
        if name.is_empty() {
            None
        } else {
            Some(Self(name))
        }
    }

    /// Parses an already-canonical name, rejecting anything the kebab rules
    /// would have rewritten.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.is_empty() {
            return Err(ValidationError::Empty {
                field: "CanonicalName",
            });
        }
        if !Regex::new(Self::PATTERN).expect("invalid regex").is_match(&s) {
            return Err(ValidationError::PatternMismatch {
                field: "CanonicalName",
                value: s,
            });
        }
        Ok(Self(s))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the legacy-typo mirror of this name (`gird-` → `grid-`), if any.
    pub fn typo_mirror(&self) -> Option<Self> {
        if self.0.contains("gird-") {
            Some(Self(self.0.replace("gird-", "grid-")))
        } else {
            None
        }
    }
}

impl AsRef<str> for CanonicalName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CanonicalName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
