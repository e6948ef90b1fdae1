//! Per-account insight deltas for the active period.

use std::collections::HashMap;

use crate::models::{AccountId, InsightEntry, InsightKind};

/// Deltas of one insight kind plus the outcome of its last pass.
#[derive(Debug, Clone, Default)]
struct InsightSlot {
    /// Delta per account.
    deltas: HashMap<AccountId, f64>,
    /// A pass of this kind has succeeded at least once.
    loaded: bool,
    /// The most recent pass failed; `deltas` are from an earlier one.
    stale: bool,
}

/// Cached spent/earned deltas, one map per [`InsightKind`].
///
/// Expense deltas are stored as non-negative magnitudes; revenue deltas
/// unchanged. A failed pass keeps the previous map and marks it stale.
#[derive(Debug, Clone, Default)]
pub struct InsightRepository {
    /// Expense (spent) deltas.
    expense: InsightSlot,
    /// Revenue (earned) deltas.
    revenue: InsightSlot,
}

impl InsightRepository {
    /// Creates an empty repository.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the delta of `account`, or `0` if none was recorded.
    #[inline]
    #[must_use]
    pub fn delta(&self, kind: InsightKind, account: &AccountId) -> f64 {
        self.slot(kind)
            .deltas
            .get(account)
            .copied()
            .unwrap_or_default()
    }

    /// Returns every recorded delta of one kind.
    #[inline]
    #[must_use]
    pub fn deltas(&self, kind: InsightKind) -> &HashMap<AccountId, f64> {
        &self.slot(kind).deltas
    }

    /// Returns `true` once a pass of this kind has succeeded.
    #[inline]
    #[must_use]
    pub fn is_loaded(&self, kind: InsightKind) -> bool {
        self.slot(kind).loaded
    }

    /// Returns `true` if the most recent pass of this kind failed and
    /// the cached deltas predate it.
    #[inline]
    #[must_use]
    pub fn is_stale(&self, kind: InsightKind) -> bool {
        self.slot(kind).stale
    }

    /// Replaces the deltas of one kind with the aggregate of `entries`.
    pub(crate) fn store(&mut self, kind: InsightKind, entries: &[InsightEntry]) {
        let slot = self.slot_mut(kind);
        slot.deltas = aggregate(kind, entries);
        slot.loaded = true;
        slot.stale = false;
        tracing::debug!(?kind, accounts = slot.deltas.len(), "insights stored");
    }

    /// Records a failed pass, keeping the previous deltas.
    pub(crate) fn mark_stale(&mut self, kind: InsightKind) {
        self.slot_mut(kind).stale = true;
    }

    /// Returns the slot of one kind.
    const fn slot(&self, kind: InsightKind) -> &InsightSlot {
        match kind {
            InsightKind::Expense => &self.expense,
            InsightKind::Revenue => &self.revenue,
        }
    }

    /// Returns the slot of one kind for writing.
    const fn slot_mut(&mut self, kind: InsightKind) -> &mut InsightSlot {
        match kind {
            InsightKind::Expense => &mut self.expense,
            InsightKind::Revenue => &mut self.revenue,
        }
    }
}

/// Sums the server deltas per account, negating expense outflows.
fn aggregate(kind: InsightKind, entries: &[InsightEntry]) -> HashMap<AccountId, f64> {
    let mut deltas: HashMap<AccountId, f64> = HashMap::with_capacity(entries.len());
    for entry in entries {
        let raw = entry.delta();
        let delta = match kind {
            InsightKind::Expense => -raw,
            InsightKind::Revenue => raw,
        };
        *deltas.entry(entry.id.clone()).or_default() += delta;
    }
    deltas
}
