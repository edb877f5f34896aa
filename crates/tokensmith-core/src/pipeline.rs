//! In-memory compilation: collect, normalize, merge, emit.

use crate::collector::{CollectMode, Collector};
use crate::emitter::Emitter;
use crate::merger::{FlatTokenMap, Merger};
use crate::normalizer::Normalizer;
use crate::report::{BuildReport, SkippedDocument};
use crate::rules::RuleTable;
use serde_json::Value;
use tokensmith_canonical::Digest;
use tracing::{debug, info, warn};

/// A parsed token document and its identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Identifier used in diagnostics, usually the source path.
    pub id: String,
    /// Parsed token tree.
    pub tree: Value,
}

impl Document {
    /// Creates a document.
    pub fn new(id: impl Into<String>, tree: Value) -> Self {
        Self {
            id: id.into(),
            tree,
        }
    }
}

/// Options for compilation.
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    /// Leaf policy for the collector.
    pub mode: CollectMode,
    /// Keyword and unit rules for the normalizer.
    pub rules: RuleTable,
}

impl CompileOptions {
    /// Default options: strict leaves, built-in rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the leaf policy.
    pub fn mode(mut self, mode: CollectMode) -> Self {
        self.mode = mode;
        self
    }

    /// Replaces the rule table.
    pub fn rules(mut self, rules: RuleTable) -> Self {
        self.rules = rules;
        self
    }
}

/// Compilation result.
#[derive(Debug, Clone)]
pub struct CompileOutput {
    /// Emitted CSS text.
    pub css: String,
    /// The map the CSS was emitted from.
    pub tokens: FlatTokenMap,
    /// Build diagnostics.
    pub report: BuildReport,
}

/// Runs the token pipeline over a sequence of documents.
#[derive(Debug, Clone)]
pub struct Compiler {
    collector: Collector,
    normalizer: Normalizer,
    merger: Merger,
    emitter: Emitter,
}

impl Compiler {
    /// Creates a compiler with the given options.
    pub fn new(options: CompileOptions) -> Self {
        Self {
            collector: Collector::new(options.mode),
            normalizer: Normalizer::new(options.rules),
            merger: Merger::new(),
            emitter: Emitter::new(),
        }
    }

    /// Creates a compiler with strict leaves and the built-in rules.
    pub fn with_defaults() -> Self {
        Self::new(CompileOptions::default())
    }

    /// Compiles documents in the order given; later documents win.
    pub fn compile<I>(&self, documents: I) -> CompileOutput
    where
        I: IntoIterator<Item = Document>,
    {
        self.compile_loaded(documents.into_iter().map(Ok))
    }

    /// Compiles a load sequence in which some documents already failed.
    ///
    /// Failed entries and documents rejected by the collector are recorded in
    /// the report; neither stops the build.
    pub fn compile_loaded<I>(&self, inputs: I) -> CompileOutput
    where
        I: IntoIterator<Item = Result<Document, SkippedDocument>>,
    {
        let mut report = BuildReport::default();
        let mut normalized = Vec::new();

        for input in inputs {
            let document = match input {
                Ok(document) => document,
                Err(skipped) => {
                    warn!(document = %skipped.document, reason = %skipped.reason, "skipping document");
                    report.record_skip(skipped.document, skipped.reason);
                    continue;
                }
            };
            match self.collector.collect(&document.tree) {
                Ok(raw) => {
                    debug!(document = %document.id, tokens = raw.len(), "collected document");
                    normalized.push(self.normalizer.normalize_all(&raw));
                }
                Err(err) => {
                    warn!(document = %document.id, error = %err, "skipping document");
                    report.record_skip(document.id, err.to_string());
                }
            }
        }

        let outcome = self.merger.merge(normalized);
        let css = self.emitter.emit(&outcome.map);

        report.record_merge(&outcome.stats);
        report.set_metric("variables", outcome.map.len() as u64);
        if outcome.stats.documents == 0 && report.skipped.is_empty() {
            report.warn("NoDocuments");
        }
        report.digest = Some(Digest::sha256(css.as_bytes()));

        info!(
            variables = outcome.map.len(),
            aliases = outcome.stats.aliases,
            skipped = report.skipped.len(),
            "compiled tokens"
        );

        CompileOutput {
            css,
            tokens: outcome.map,
            report,
        }
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::BuildStatus;
    use serde_json::json;

    #[test]
    fn empty_input_yields_empty_block() {
        let output = Compiler::with_defaults().compile(Vec::new());
        assert_eq!(output.css, ":root {\n}\n");
        assert_eq!(output.report.status, BuildStatus::Ok);
        assert_eq!(output.report.warnings[0].code(), "NoDocuments");
    }

    #[test]
    fn failed_loads_are_recorded_in_order() {
        let inputs = vec![
            Err(SkippedDocument {
                document: "bad.json".to_string(),
                reason: "expected value at line 1 column 1".to_string(),
            }),
            Ok(Document::new("good.json", json!({ "a": { "value": 1 } }))),
        ];
        let output = Compiler::with_defaults().compile_loaded(inputs);
        assert_eq!(output.css, ":root {\n  --a: 1;\n}\n");
        assert_eq!(output.report.status, BuildStatus::Degraded);
        assert_eq!(output.report.skipped[0].document, "bad.json");
        assert_eq!(output.report.metric("documents"), 1);
    }

    #[test]
    fn strict_collector_rejection_skips_document() {
        let output = Compiler::with_defaults().compile(vec![
            Document::new("a.json", json!({ "a": { "value": 1 } })),
            Document::new("b.json", json!({ "b": { "value": { "x": 1 } }, "c": { "value": 2 } })),
        ]);
        assert_eq!(output.css, ":root {\n  --a: 1;\n}\n");
        assert!(output.report.skipped[0].reason.contains("malformed leaf at b"));
    }

    #[test]
    fn permissive_collector_keeps_siblings() {
        let compiler = Compiler::new(CompileOptions::new().mode(CollectMode::Permissive));
        let output = compiler.compile(vec![Document::new(
            "b.json",
            json!({ "b": { "value": { "x": 1 } }, "c": { "value": 2 } }),
        )]);
        assert_eq!(output.css, ":root {\n  --c: 2;\n}\n");
        assert_eq!(output.tokens.len(), 2);
    }

    #[test]
    fn digest_is_reported() {
        let output = Compiler::with_defaults().compile(Vec::new());
        assert_eq!(output.report.digest, Some(Digest::sha256(b":root {\n}\n")));
    }
}
