use crate::merger::MergeStats;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tokensmith_canonical::Digest;

/// Overall outcome of a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildStatus {
    /// Every discovered document contributed.
    Ok,
    /// At least one document was skipped; the output covers the rest.
    Degraded,
}

/// Stable warning code emitted during a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildWarning(String);

impl BuildWarning {
    /// Creates a warning from a literal code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The warning code.
    pub fn code(&self) -> &str {
        &self.0
    }
}

/// A document that was left out of the build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedDocument {
    /// Document identifier (usually its path).
    pub document: String,
    /// Why it was skipped.
    pub reason: String,
}

/// Diagnostics for one build. Informational only; never affects the output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildReport {
    /// Overall status.
    pub status: BuildStatus,
    /// Stable warning codes.
    pub warnings: Vec<BuildWarning>,
    /// Counters such as `variables` and `aliases`.
    pub metrics: BTreeMap<String, u64>,
    /// Documents left out of the build.
    pub skipped: Vec<SkippedDocument>,
    /// Digest of the emitted CSS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<Digest>,
}

impl Default for BuildReport {
    fn default() -> Self {
        Self {
            status: BuildStatus::Ok,
            warnings: Vec::new(),
            metrics: BTreeMap::new(),
            skipped: Vec::new(),
            digest: None,
        }
    }
}

impl BuildReport {
    /// Records a skipped document and downgrades the status.
    pub fn record_skip(&mut self, document: impl Into<String>, reason: impl Into<String>) {
        self.skipped.push(SkippedDocument {
            document: document.into(),
            reason: reason.into(),
        });
        self.status = BuildStatus::Degraded;
        self.warn("SkippedDocument");
    }

    /// Adds a warning code once.
    pub fn warn(&mut self, code: &str) {
        if !self.warnings.iter().any(|w| w.code() == code) {
            self.warnings.push(BuildWarning::new(code));
        }
    }

    /// Sets a counter.
    pub fn set_metric(&mut self, name: &str, value: u64) {
        self.metrics.insert(name.to_string(), value);
    }

    /// Reads a counter, defaulting to zero.
    pub fn metric(&self, name: &str) -> u64 {
        self.metrics.get(name).copied().unwrap_or(0)
    }

    /// Copies fold counters into the metrics.
    pub fn record_merge(&mut self, stats: &MergeStats) {
        self.set_metric("documents", stats.documents);
        self.set_metric("tokens", stats.tokens);
        self.set_metric("overrides", stats.overrides);
        self.set_metric("aliases", stats.aliases);
        self.set_metric("mirrored", stats.mirrored);
    }
}
