//! Canonical naming primitives for tokensmith design tokens.
//!
//! Everything that decides what a token is *called* in the emitted CSS lives
//! in this crate: kebab-case name derivation, alias reference parsing and the
//! digest used to fingerprint an emitted artifact.
//!
#![deny(missing_docs)]

/// Alias references (`{a.b.c}`) and their `var(--a-b-c)` translation.
pub mod alias;
/// Digest primitives used to fingerprint emitted artifacts.
pub mod digest;
/// Canonical name derivation and the `CanonicalName` newtype.
pub mod names;
/// Validation helpers used by canonical types.
pub mod validation;

pub use alias::AliasRef;
pub use digest::{Digest, DigestAlg};
pub use names::{canonical_name, join_path, to_kebab, CanonicalName};
pub use validation::ValidationError;
