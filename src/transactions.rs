//! Reconstruction of logical transactions from raw journal entries.
//!
//! The ledger stores one financial event as a group of splits. A
//! [`Transaction`] resolves every split's accounts and category against
//! the caches and derives single-valued fields (source, destination,
//! amount, ...) following a fixed per-type policy. Fields with no single
//! representative value come back as [`Resolved::Multiple`]; an empty
//! withdrawal or transfer reports its source and destination as
//! [`Resolved::Malformed`].

use chrono::{DateTime, FixedOffset};

use crate::models::{
    Account, AccountId, Category, CategoryId, JournalEntry, JournalId, JournalSplit,
    TransactionId, TransactionType,
};
use crate::repository::{AccountRepository, CategoryRepository};

/// Label rendered for [`Resolved::Multiple`].
pub const MULTIPLE_LABEL: &str = "multiple";

/// Label rendered for [`Resolved::Malformed`].
pub const MALFORMED_LABEL: &str = "error";

/// Something with a display name.
pub trait Named {
    /// Returns the display name.
    fn display_name(&self) -> &str;
}

impl Named for Account {
    #[inline]
    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Named for Category {
    #[inline]
    fn display_name(&self) -> &str {
        &self.name
    }
}

/// Outcome of deriving a single account or category from a transaction.
#[derive(Debug)]
pub enum Resolved<'tx, T> {
    /// One well-defined value.
    One(&'tx T),
    /// Several splits, no single representative value.
    Multiple,
    /// The entry has no split to take the value from.
    Malformed,
}

impl<'tx, T> Resolved<'tx, T> {
    /// Returns the value if there is exactly one.
    #[inline]
    #[must_use]
    pub const fn one(self) -> Option<&'tx T> {
        match self {
            Self::One(value) => Some(value),
            Self::Multiple | Self::Malformed => None,
        }
    }

    /// Returns `true` for [`Resolved::Multiple`].
    #[inline]
    #[must_use]
    pub const fn is_multiple(&self) -> bool {
        matches!(*self, Self::Multiple)
    }

    /// Returns `true` for [`Resolved::Malformed`].
    #[inline]
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(*self, Self::Malformed)
    }

    /// Returns the value's name, or the placeholder label.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'tx str
    where
        T: Named,
    {
        match *self {
            Self::One(value) => value.display_name(),
            Self::Multiple => MULTIPLE_LABEL,
            Self::Malformed => MALFORMED_LABEL,
        }
    }
}

impl<T> Clone for Resolved<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Resolved<'_, T> {}

impl<T: PartialEq> PartialEq for Resolved<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Self::One(left), Self::One(right)) => left == right,
            (Self::Multiple, Self::Multiple) | (Self::Malformed, Self::Malformed) => true,
            (Self::One(_) | Self::Multiple | Self::Malformed, _) => false,
        }
    }
}

/// One split with its accounts and category resolved.
///
/// References the caches could not resolve are zero-value placeholders
/// ([`Account::default`], [`Category::default`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    /// Identifier used to address this split in updates.
    pub journal_id: JournalId,
    /// Source account.
    pub source: Account,
    /// Destination account.
    pub destination: Account,
    /// Category.
    pub category: Category,
    /// Amount in the split currency.
    pub amount: f64,
    /// Amount in the foreign currency.
    pub foreign_amount: f64,
    /// Currency code of `amount`.
    pub currency_code: String,
    /// Currency code of `foreign_amount`, empty when absent.
    pub foreign_currency_code: String,
    /// Split description.
    pub description: String,
}

/// A reconstructed transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Local sequential id, unique only within one reconstruction.
    pub id: usize,
    /// Server id of the transaction group.
    pub transaction_id: TransactionId,
    /// Type of the first split.
    pub kind: TransactionType,
    /// Date of the first split; `None` for an entry without splits.
    pub date: Option<DateTime<FixedOffset>>,
    /// Title of the group, empty for single-split transactions.
    pub group_title: String,
    /// Resolved splits, in reverse server order.
    pub splits: Vec<Split>,
}

impl Transaction {
    /// Sum of all split amounts.
    #[inline]
    #[must_use]
    pub fn total_amount(&self) -> f64 {
        self.splits.iter().map(|split| split.amount).sum()
    }

    /// Sum of foreign amounts for transfers; `0` for every other type.
    #[inline]
    #[must_use]
    pub fn foreign_amount(&self) -> f64 {
        match self.kind {
            TransactionType::Transfer => self.splits.iter().map(|split| split.foreign_amount).sum(),
            TransactionType::Withdrawal
            | TransactionType::Deposit
            | TransactionType::Reconciliation
            | TransactionType::OpeningBalance
            | TransactionType::Other => 0.0,
        }
    }

    /// The split description for a single split, the group title
    /// otherwise.
    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        self.only_split()
            .map_or(self.group_title.as_str(), |only| only.description.as_str())
    }

    /// Source account.
    ///
    /// Withdrawals and transfers take the first split's source; deposits
    /// only have one with exactly one split. An empty withdrawal or
    /// transfer is malformed.
    #[inline]
    #[must_use]
    pub fn source(&self) -> Resolved<'_, Account> {
        match self.kind {
            TransactionType::Withdrawal | TransactionType::Transfer => {
                self.first(|split| &split.source)
            }
            TransactionType::Deposit => self.single(|split| &split.source),
            TransactionType::Reconciliation
            | TransactionType::OpeningBalance
            | TransactionType::Other => Resolved::Multiple,
        }
    }

    /// Destination account.
    ///
    /// Deposits and transfers take the first split's destination;
    /// withdrawals only have one with exactly one split. An empty
    /// withdrawal or transfer is malformed.
    #[inline]
    #[must_use]
    pub fn destination(&self) -> Resolved<'_, Account> {
        match self.kind {
            TransactionType::Deposit | TransactionType::Transfer => {
                self.first(|split| &split.destination)
            }
            TransactionType::Withdrawal if self.splits.is_empty() => Resolved::Malformed,
            TransactionType::Withdrawal => self.single(|split| &split.destination),
            TransactionType::Reconciliation
            | TransactionType::OpeningBalance
            | TransactionType::Other => Resolved::Multiple,
        }
    }

    /// Category, defined only for exactly one split.
    #[inline]
    #[must_use]
    pub fn category(&self) -> Resolved<'_, Category> {
        self.single(|split| &split.category)
    }

    /// Currency code of the first split, empty without splits.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> &str {
        self.splits
            .first()
            .map_or("", |split| split.currency_code.as_str())
    }

    /// Foreign currency code.
    ///
    /// Transfers take the first split's; withdrawals and deposits only
    /// report one with exactly one split; other types never do.
    #[inline]
    #[must_use]
    pub fn foreign_currency(&self) -> &str {
        let split = match self.kind {
            TransactionType::Transfer => self.splits.first(),
            TransactionType::Withdrawal | TransactionType::Deposit => self.only_split(),
            TransactionType::Reconciliation
            | TransactionType::OpeningBalance
            | TransactionType::Other => None,
        };
        split.map_or("", |first| first.foreign_currency_code.as_str())
    }

    /// Returns `true` if the transaction has more than one split.
    #[inline]
    #[must_use]
    pub fn is_split(&self) -> bool {
        self.splits.len() > 1
    }

    /// Derives a field from the first split.
    fn first<'tx, T>(&'tx self, field: fn(&'tx Split) -> &'tx T) -> Resolved<'tx, T> {
        self.splits
            .first()
            .map_or(Resolved::Malformed, |split| Resolved::One(field(split)))
    }

    /// Derives a field from the only split; anything but exactly one
    /// split is ambiguous.
    fn single<'tx, T>(&'tx self, field: fn(&'tx Split) -> &'tx T) -> Resolved<'tx, T> {
        self.only_split()
            .map_or(Resolved::Multiple, |split| Resolved::One(field(split)))
    }

    /// Returns the split if there is exactly one.
    fn only_split(&self) -> Option<&Split> {
        if self.splits.len() == 1 {
            self.splits.first()
        } else {
            None
        }
    }
}

/// Rebuilds transactions from raw journal entries.
///
/// Local ids count from `0` in input order. Accounts and categories are
/// resolved once, here; later cache refreshes do not affect the result.
#[inline]
#[must_use]
pub fn reconstruct(
    entries: &[JournalEntry],
    accounts: &AccountRepository,
    categories: &CategoryRepository,
) -> Vec<Transaction> {
    let transactions: Vec<Transaction> = entries
        .iter()
        .enumerate()
        .map(|(local_id, entry)| reconstruct_entry(local_id, entry, accounts, categories))
        .collect();
    tracing::debug!(count = transactions.len(), "transactions reconstructed");
    transactions
}

/// Rebuilds one transaction.
fn reconstruct_entry(
    local_id: usize,
    entry: &JournalEntry,
    accounts: &AccountRepository,
    categories: &CategoryRepository,
) -> Transaction {
    let raw_splits = &entry.attributes.transactions;
    let first = raw_splits.first();
    if first.is_none() {
        tracing::warn!(id = %entry.id, "journal entry without splits");
    }
    Transaction {
        id: local_id,
        transaction_id: entry.id.clone(),
        kind: first.map(|split| split.kind).unwrap_or_default(),
        date: first.map(|split| split.date),
        group_title: entry.attributes.group_title.clone().unwrap_or_default(),
        splits: raw_splits
            .iter()
            .rev()
            .map(|split| resolve_split(split, accounts, categories))
            .collect(),
    }
}

/// Resolves one raw split against the caches.
fn resolve_split(
    split: &JournalSplit,
    accounts: &AccountRepository,
    categories: &CategoryRepository,
) -> Split {
    Split {
        journal_id: split.transaction_journal_id.clone(),
        source: resolve_account(accounts, split.source_id.as_ref()),
        destination: resolve_account(accounts, split.destination_id.as_ref()),
        category: resolve_category(categories, split.category_id.as_ref()),
        amount: split.amount,
        foreign_amount: split.foreign_amount,
        currency_code: split.currency_code.clone().unwrap_or_default(),
        foreign_currency_code: split.foreign_currency_code.clone().unwrap_or_default(),
        description: split.description.clone(),
    }
}

/// Looks up an account, falling back to the zero-value placeholder.
fn resolve_account(accounts: &AccountRepository, id: Option<&AccountId>) -> Account {
    id.and_then(|id_ref| {
        let found = accounts.by_id(id_ref);
        if found.is_none() {
            tracing::trace!(id = %id_ref, "split references an unknown account");
        }
        found
    })
    .cloned()
    .unwrap_or_default()
}

/// Looks up a category, falling back to the zero-value placeholder.
fn resolve_category(categories: &CategoryRepository, id: Option<&CategoryId>) -> Category {
    id.and_then(|id_ref| categories.by_id(id_ref))
        .cloned()
        .unwrap_or_default()
}
