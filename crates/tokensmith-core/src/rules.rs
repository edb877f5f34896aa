//! Declarative keyword and unit rules.
//!
//! A rule pairs a token-family pattern (matched against the canonical name)
//! with a value transform. Adding a family is a table entry, not a new branch
//! in the normalizer.

use crate::errors::RuleError;
use crate::number::format_number;
use regex::Regex;
use serde_json::Value;

/// Families whose bare numbers are pixel lengths.
pub const DEFAULT_PX_FAMILIES: &[&str] = &[
    "^width-",
    "^breakpoint",
    "^breakpoints-",
    "^grid-columns-",
    "^gird-columns-",
];

/// Built-in keyword substitutions as `(family, from, to)`.
pub const DEFAULT_KEYWORDS: &[(&str, &str, &str)] = &[("^lineheights-", "AUTO", "normal")];

const NUMERIC_PATTERN: &str = r"^-?[0-9]+(\.[0-9]+)?$";

/// What a matching rule does to a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transform {
    /// Replace a value whose upper-cased text equals `from` with `to`.
    Keyword {
        /// Upper-cased literal to match.
        from: String,
        /// Replacement value.
        to: String,
    },
    /// Append `suffix` to numeric values.
    Unit {
        /// Unit suffix, e.g. `px`.
        suffix: String,
    },
}

/// A token family pattern and its transform.
#[derive(Debug, Clone)]
pub struct Rule {
    family: Regex,
    transform: Transform,
}

impl Rule {
    /// Compiles a rule.
    pub fn new(family: &str, transform: Transform) -> Result<Self, RuleError> {
        if let Transform::Keyword { from, .. } = &transform {
            if from.is_empty() {
                return Err(RuleError::EmptyKeyword {
                    family: family.to_string(),
                });
            }
        }
        let family = Regex::new(family).map_err(|source| RuleError::InvalidPattern {
            pattern: family.to_string(),
            source,
        })?;
        Ok(Self { family, transform })
    }

    /// Keyword substitution rule; `from` is matched case-insensitively.
    pub fn keyword(family: &str, from: &str, to: &str) -> Result<Self, RuleError> {
        Self::new(
            family,
            Transform::Keyword {
                from: from.to_uppercase(),
                to: to.to_string(),
            },
        )
    }

    /// Pixel unit injection rule.
    pub fn px(family: &str) -> Result<Self, RuleError> {
        Self::new(
            family,
            Transform::Unit {
                suffix: "px".to_string(),
            },
        )
    }

    /// Returns true when the rule applies to `name`.
    pub fn matches(&self, name: &str) -> bool {
        self.family.is_match(name)
    }

    /// The family pattern as written.
    pub fn family(&self) -> &str {
        self.family.as_str()
    }

    /// The rule's transform.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }
}

/// Ordered rule set consulted by the normalizer.
///
/// Keyword rules are evaluated before unit rules; within a class the first
/// matching rule wins.
#[derive(Debug, Clone)]
pub struct RuleTable {
    keywords: Vec<Rule>,
    units: Vec<Rule>,
    numeric: Regex,
}

impl RuleTable {
    /// An empty table: every value passes through except aliases.
    pub fn empty() -> Self {
        Self {
            keywords: Vec::new(),
            units: Vec::new(),
            numeric: Regex::new(NUMERIC_PATTERN).expect("invalid regex"),
        }
    }

    /// Adds a rule, routing it to its class.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        match rule.transform {
            Transform::Keyword { .. } => self.keywords.push(rule),
            Transform::Unit { .. } => self.units.push(rule),
        }
        self
    }

    /// Adds a pixel family.
    pub fn with_px_family(self, family: &str) -> Result<Self, RuleError> {
        Ok(self.with_rule(Rule::px(family)?))
    }

    /// Adds a keyword substitution.
    pub fn with_keyword(self, family: &str, from: &str, to: &str) -> Result<Self, RuleError> {
        Ok(self.with_rule(Rule::keyword(family, from, to)?))
    }

    /// Number of rules in the table.
    pub fn len(&self) -> usize {
        self.keywords.len() + self.units.len()
    }

    /// Returns true when the table holds no rules.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Applies the first matching keyword rule, if its literal matches.
    pub fn substitute_keyword(&self, name: &str, value: &Value) -> Option<Value> {
        let text = scalar_text(value)?.to_uppercase();
        self.keywords
            .iter()
            .filter(|rule| rule.matches(name))
            .find_map(|rule| match &rule.transform {
                Transform::Keyword { from, to } if *from == text => Some(Value::String(to.clone())),
                _ => None,
            })
    }

    /// Applies the first matching unit rule to a numeric value.
    pub fn inject_unit(&self, name: &str, value: &Value) -> Option<Value> {
        let number = match value {
            Value::Number(n) => format_number(n),
            Value::String(s) if self.numeric.is_match(s) => s.clone(),
            _ => return None,
        };
        let rule = self.units.iter().find(|rule| rule.matches(name))?;
        match &rule.transform {
            Transform::Unit { suffix } => Some(Value::String(format!("{number}{suffix}"))),
            Transform::Keyword { .. } => None,
        }
    }
}

impl Default for RuleTable {
    /// The built-in families: pixel widths, breakpoints, grid columns (both
    /// spellings) and `AUTO` line heights.
    fn default() -> Self {
        let mut table = Self::empty();
        for (family, from, to) in DEFAULT_KEYWORDS {
            table = table.with_rule(Rule::keyword(family, from, to).expect("invalid built-in rule"));
        }
        for family in DEFAULT_PX_FAMILIES {
            table = table.with_rule(Rule::px(family).expect("invalid built-in rule"));
        }
        table
    }
}

/// Text form of a scalar, as used for keyword comparison.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(format_number(n)),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_table_has_all_families() {
        let table = RuleTable::default();
        assert_eq!(table.len(), DEFAULT_KEYWORDS.len() + DEFAULT_PX_FAMILIES.len());
    }

    #[test]
    fn keyword_is_case_insensitive() {
        let table = RuleTable::default();
        assert_eq!(
            table.substitute_keyword("lineheights-tight", &json!("AUTO")),
            Some(json!("normal"))
        );
        assert_eq!(
            table.substitute_keyword("lineheights-tight", &json!("auto")),
            Some(json!("normal"))
        );
        assert_eq!(table.substitute_keyword("lineheights-tight", &json!("1.2")), None);
        assert_eq!(table.substitute_keyword("spacing-auto", &json!("AUTO")), None);
    }

    #[test]
    fn unit_injection_accepts_numbers_and_numeric_strings() {
        let table = RuleTable::default();
        assert_eq!(table.inject_unit("width-100", &json!(100)), Some(json!("100px")));
        assert_eq!(table.inject_unit("width-100", &json!("100")), Some(json!("100px")));
        assert_eq!(table.inject_unit("width-neg", &json!("-4.5")), Some(json!("-4.5px")));
        assert_eq!(table.inject_unit("breakpoint-md", &json!(768)), Some(json!("768px")));
        assert_eq!(table.inject_unit("breakpoints-lg", &json!(1024)), Some(json!("1024px")));
        assert_eq!(table.inject_unit("grid-columns-12", &json!(12)), Some(json!("12px")));
        assert_eq!(table.inject_unit("gird-columns-6", &json!(6)), Some(json!("6px")));
    }

    #[test]
    fn unit_injection_ignores_other_values_and_families() {
        let table = RuleTable::default();
        assert_eq!(table.inject_unit("spacing-md", &json!(16)), None);
        assert_eq!(table.inject_unit("width-full", &json!("100%")), None);
        assert_eq!(table.inject_unit("width-pad", &json!(" 4")), None);
        assert_eq!(table.inject_unit("width-x", &json!(true)), None);
        assert_eq!(table.inject_unit("max-width-100", &json!(100)), None);
    }

    #[test]
    fn whole_valued_floats_get_unit_without_fraction() {
        let table = RuleTable::default();
        let value: Value = serde_json::from_str("1e2").unwrap();
        assert_eq!(table.inject_unit("width-a", &value), Some(json!("100px")));
        let value: Value = serde_json::from_str("100.0").unwrap();
        assert_eq!(table.inject_unit("width-b", &value), Some(json!("100px")));
        let value: Value = serde_json::from_str("1.50").unwrap();
        assert_eq!(table.inject_unit("width-c", &value), Some(json!("1.5px")));
    }

    #[test]
    fn non_ascii_digits_are_not_numeric() {
        let table = RuleTable::default();
        assert_eq!(table.inject_unit("width-x", &json!("٣")), None);
    }

    #[test]
    fn custom_families_extend_the_table() {
        let table = RuleTable::default()
            .with_px_family("^radius-")
            .unwrap()
            .with_keyword("^fontweights-", "regular", "400")
            .unwrap();
        assert_eq!(table.inject_unit("radius-sm", &json!(2)), Some(json!("2px")));
        assert_eq!(
            table.substitute_keyword("fontweights-body", &json!("Regular")),
            Some(json!("400"))
        );
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let err = RuleTable::empty().with_px_family("^(width").unwrap_err();
        assert!(matches!(err, RuleError::InvalidPattern { ref pattern, .. } if pattern == "^(width"));
    }

    #[test]
    fn empty_keyword_is_rejected() {
        let err = Rule::keyword("^x-", "", "y").unwrap_err();
        assert!(matches!(err, RuleError::EmptyKeyword { .. }));
    }

    #[test]
    fn empty_table_transforms_nothing() {
        let table = RuleTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.inject_unit("width-100", &json!(100)), None);
        assert_eq!(table.substitute_keyword("lineheights-x", &json!("AUTO")), None);
    }
}
