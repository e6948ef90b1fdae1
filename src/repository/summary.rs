//! Period summary cache.

use crate::models::SummaryEntry;

/// Cached basic-summary figures of the active period.
#[derive(Debug, Clone, Default)]
pub struct SummaryRepository {
    /// Figures ordered by key.
    entries: Vec<SummaryEntry>,
}

impl SummaryRepository {
    /// Creates an empty repository.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a figure by its key, e.g. `spent-in-EUR`.
    #[inline]
    #[must_use]
    pub fn by_key(&self, key: &str) -> Option<&SummaryEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// Iterates over the figures reported in one currency.
    #[inline]
    pub fn in_currency<'repo>(
        &'repo self,
        code: &'repo str,
    ) -> impl Iterator<Item = &'repo SummaryEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.currency_code.eq_ignore_ascii_case(code))
    }

    /// Returns every figure.
    #[inline]
    #[must_use]
    pub fn all(&self) -> &[SummaryEntry] {
        &self.entries
    }

    /// Returns `true` if no figure is cached.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replaces the whole contents.
    pub(crate) fn replace(&mut self, entries: Vec<SummaryEntry>) {
        self.entries = entries;
        tracing::debug!(total = self.entries.len(), "summary replaced");
    }
}
