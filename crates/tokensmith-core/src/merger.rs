//! Cross-document fold and the legacy-typo mirror rule.

use crate::normalizer::{NormalizedTokens, Resolved};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use tokensmith_canonical::CanonicalName;
use tracing::debug;

/// The final, ordered canonical name → value mapping handed to the emitter.
///
/// Built once per compilation and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FlatTokenMap(IndexMap<CanonicalName, Value>);

impl FlatTokenMap {
    /// Looks up a token by canonical name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Iterates entries in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (&CanonicalName, &Value)> {
        self.0.iter()
    }

    /// Iterates names in emission order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(CanonicalName::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(CanonicalName, Value)> for FlatTokenMap {
    fn from_iter<I: IntoIterator<Item = (CanonicalName, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a FlatTokenMap {
    type Item = (&'a CanonicalName, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, CanonicalName, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Counters gathered during a fold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MergeStats {
    /// Documents folded.
    pub documents: u64,
    /// Tokens seen across all documents.
    pub tokens: u64,
    /// Tokens that replaced a value from an earlier document.
    pub overrides: u64,
    /// Final values that came from alias references.
    pub aliases: u64,
    /// Mirror entries added by the typo rule.
    pub mirrored: u64,
}

/// Result of a fold.
#[derive(Debug, Clone, Default)]
pub struct MergeOutcome {
    /// The merged map.
    pub map: FlatTokenMap,
    /// Fold counters.
    pub stats: MergeStats,
}

/// Folds per-document tokens into a [`FlatTokenMap`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Merger;

impl Merger {
    /// Creates a merger.
    pub fn new() -> Self {
        Self
    }

    /// Folds documents in order; a later document's value wins.
    ///
    /// An overwritten name keeps the position of its first appearance. The
    /// typo rule runs once over the folded result, so a mirrored pair always
    /// reflects the final value.
    pub fn merge<I>(&self, documents: I) -> MergeOutcome
    where
        I: IntoIterator<Item = NormalizedTokens>,
    {
        let mut stats = MergeStats::default();
        let mut folded: IndexMap<CanonicalName, Resolved> = IndexMap::new();

        for document in documents {
            stats.documents += 1;
            for (name, resolved) in document {
                stats.tokens += 1;
                if folded.insert(name, resolved).is_some() {
                    stats.overrides += 1;
                }
            }
        }

        stats.aliases = folded.values().filter(|r| r.is_alias()).count() as u64;

        let map = self.mirror_typos(&folded, &mut stats);
        MergeOutcome { map, stats }
    }

    /// Emits each entry followed by its `grid-` mirror when the name carries
    /// the legacy `gird-` segment.
    ///
    /// An explicitly defined `grid-*` token takes precedence over a mirror.
    fn mirror_typos(
        &self,
        folded: &IndexMap<CanonicalName, Resolved>,
        stats: &mut MergeStats,
    ) -> FlatTokenMap {
        let mut out = IndexMap::with_capacity(folded.len());
        for (name, resolved) in folded {
            out.insert(name.clone(), resolved.value.clone());
            let Some(mirror) = name.typo_mirror() else {
                continue;
            };
            if folded.contains_key(&mirror) {
                debug!(name = %name, mirror = %mirror, "explicit token shadows typo mirror");
                continue;
            }
            out.insert(mirror, resolved.value.clone());
            stats.mirrored += 1;
        }
        FlatTokenMap(out)
    }
}
