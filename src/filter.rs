//! Compound filtering of a catalog snapshot.

use std::collections::BTreeSet;

use schema::CatalogEntry;

/// A name term plus a selected set of type tags, applied conjunctively.
///
/// The empty term matches every name; the empty selection matches every type
/// set. Selected tags are ANDed: an entry must carry all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    term: String,
    types: BTreeSet<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn selected_types(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(String::as_str)
    }

    /// Replace the name term. No trimming or normalization beyond matching
    /// case-insensitively at apply time.
    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
    }

    pub fn select_type(&mut self, tag: impl Into<String>) {
        self.types.insert(tag.into());
    }

    pub fn deselect_type(&mut self, tag: &str) {
        self.types.remove(tag);
    }

    pub fn clear_types(&mut self) {
        self.types.clear();
    }

    /// True when both predicates are vacuous.
    pub fn is_empty(&self) -> bool {
        self.term.is_empty() && self.types.is_empty()
    }

    /// The ordered subsequence of `entries` whose name contains the term
    /// case-insensitively and whose type set carries every selected tag.
    /// Preserves input order, mutates nothing.
    pub fn apply<'a>(&self, entries: &'a [CatalogEntry]) -> Vec<&'a CatalogEntry> {
        let needle = self.term.to_lowercase();
        entries
            .iter()
            .filter(|entry| {
                (needle.is_empty() || entry.name.to_lowercase().contains(&needle))
                    && self.types.iter().all(|tag| entry.has_type(tag))
            })
            .collect()
    }
}
