//! Design-token compiler core.
//!
//! This crate turns nested design-tool token exports into a flat block of CSS
//! custom properties:
//! - [`Collector`] flattens one token tree into path names and raw values
//! - [`Normalizer`] canonicalizes names and rewrites values through a [`RuleTable`]
//! - [`Merger`] folds per-document results, last document wins
//! - [`Emitter`] renders the final [`FlatTokenMap`] as a `:root` block
//!
//! [`Compiler`] composes the four stages over already-parsed documents.
//!
//! Core invariants:
//! - Normalization depends only on `(name, raw value)`
//! - Merge order is document order; the same input yields byte-identical CSS
//! - A malformed document is skipped, never fatal
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use tokensmith_core::{Compiler, Document};
//!
//! let compiler = Compiler::with_defaults();
//! let output = compiler.compile(vec![Document::new(
//!     "a.json",
//!     json!({ "width": { "100": { "value": 100 } } }),
//! )]);
//! assert_eq!(output.css, ":root {\n  --width-100: 100px;\n}\n");
//! ```
//!
#![deny(missing_docs)]

/// Token tree flattening.
pub mod collector;
/// CSS rendering of the flat token map.
pub mod emitter;
/// Error types for core operations.
pub mod errors;
/// Cross-document fold and the legacy-typo mirror rule.
pub mod merger;
/// Name canonicalization and value rewriting.
pub mod normalizer;
/// Text form of JSON numbers in emitted values.
pub mod number;
/// End-to-end in-memory compilation.
pub mod pipeline;
/// Build diagnostics.
pub mod report;
/// Declarative keyword and unit rules.
pub mod rules;
/// Token tree node classification.
pub mod tree;

pub use collector::{CollectMode, Collector, RawTokens};
pub use emitter::Emitter;
pub use errors::{CollectError, RuleError};
pub use merger::{FlatTokenMap, MergeOutcome, MergeStats, Merger};
pub use normalizer::{NormalizedTokens, Normalizer, Resolved, ValueOrigin};
pub use number::format_number;
pub use pipeline::{CompileOptions, CompileOutput, Compiler, Document};
pub use report::{BuildReport, BuildStatus, BuildWarning, SkippedDocument};
pub use rules::{Rule, RuleTable, Transform};
pub use tree::{classify, Node};
