//! Configuration file loading and settings resolution.
//!
//! Precedence, lowest first: built-in defaults, `tokensmith.toml`,
//! environment (`TOKENSMITH_INPUT`, `TOKENSMITH_OUTPUT`), command-line flags.
//! Environment and flags are merged by clap before they reach [`Config::resolve`].

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokensmith_core::{CollectMode, CompileOptions, RuleError, RuleTable};

/// Configuration file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "tokensmith.toml";
/// Default directory of token documents.
pub const DEFAULT_INPUT: &str = "src/styles/import";
/// Default CSS artifact.
pub const DEFAULT_OUTPUT: &str = "src/styles/tokens.css";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Config file is not valid TOML or has unknown fields.
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// A configured rule is invalid.
    #[error(transparent)]
    Rule(#[from] RuleError),
}

/// Extra keyword substitution from configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct KeywordConfig {
    pub family: String,
    pub from: String,
    pub to: String,
}

/// `[rules]` table.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RulesConfig {
    /// Extra families whose numeric values get a `px` suffix.
    pub px_families: Vec<String>,
    /// Extra keyword substitutions.
    pub keywords: Vec<KeywordConfig>,
}

/// Contents of `tokensmith.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub permissive: Option<bool>,
    pub rules: RulesConfig,
}

/// Fully resolved settings for one command.
#[derive(Debug, Clone)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub compile: CompileOptions,
}

impl Config {
    /// Loads `explicit`, or `./tokensmith.toml` if it exists, or defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Reads and parses a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parses config text.
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Built-in rules extended with the configured ones.
    pub fn rule_table(&self) -> Result<RuleTable, RuleError> {
        let mut table = RuleTable::default();
        for keyword in &self.rules.keywords {
            table = table.with_keyword(&keyword.family, &keyword.from, &keyword.to)?;
        }
        for family in &self.rules.px_families {
            table = table.with_px_family(family)?;
        }
        Ok(table)
    }

    /// Combines the config with command-line values (which already include
    /// environment overrides).
    pub fn resolve(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        permissive: bool,
    ) -> Result<Settings, ConfigError> {
        let permissive = permissive || self.permissive.unwrap_or(false);
        let mode = if permissive {
            CollectMode::Permissive
        } else {
            CollectMode::Strict
        };
        Ok(Settings {
            input: input
                .or_else(|| self.input.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
            output: output
                .or_else(|| self.output.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            compile: CompileOptions::new().mode(mode).rules(self.rule_table()?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let settings = Config::default().resolve(None, None, false).unwrap();
        assert_eq!(settings.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(settings.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(settings.compile.mode, CollectMode::Strict);
    }

    #[test]
    fn flags_override_config() {
        let config = Config::parse(
            r#"
            input = "design/tokens"
            output = "public/tokens.css"
            permissive = true
            "#,
        )
        .unwrap();
        let settings = config
            .resolve(Some(PathBuf::from("cli/in")), None, false)
            .unwrap();
        assert_eq!(settings.input, PathBuf::from("cli/in"));
        assert_eq!(settings.output, PathBuf::from("public/tokens.css"));
        assert_eq!(settings.compile.mode, CollectMode::Permissive);
    }

    #[test]
    fn rules_extend_the_builtin_table() {
        let config = Config::parse(
            r#"
            [rules]
            px_families = ["^radius-"]

            [[rules.keywords]]
            family = "^fontweights-"
            from = "REGULAR"
            to = "400"
            "#,
        )
        .unwrap();
        let table = config.rule_table().unwrap();
        assert_eq!(table.len(), RuleTable::default().len() + 2);
    }

    #[test]
    fn invalid_rule_pattern_is_reported() {
        let config = Config::parse("[rules]\npx_families = [\"(\"]\n").unwrap();
        assert!(matches!(
            config.resolve(None, None, false),
            Err(ConfigError::Rule(RuleError::InvalidPattern { .. }))
        ));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(Config::parse("outptu = \"x\"").is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = Config::load(Some(Path::new("/definitely/missing/tokensmith.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
