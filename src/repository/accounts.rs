//! Account cache grouped by account kind.

use std::collections::HashMap;

use crate::models::{Account, AccountId, AccountScope, AccountType, InsightKind};

/// Cached accounts, grouped by [`AccountType`] with a flat id index.
///
/// Both views are rebuilt in the same pass whenever the contents change,
/// so `by_id` is a hash lookup and never disagrees with `of_type`.
#[derive(Debug, Clone, Default)]
pub struct AccountRepository {
    /// Accounts per kind, in server order.
    by_kind: HashMap<AccountType, Vec<Account>>,
    /// Position of every account inside `by_kind`.
    index: HashMap<AccountId, (AccountType, usize)>,
}

impl AccountRepository {
    /// Creates an empty repository.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up an account by id.
    #[inline]
    #[must_use]
    pub fn by_id(&self, id: &AccountId) -> Option<&Account> {
        self.index.get(id).and_then(|&(kind, position)| {
            self.by_kind
                .get(&kind)
                .and_then(|accounts| accounts.get(position))
        })
    }

    /// Looks up the first account with the given name, ignoring case.
    #[inline]
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Account> {
        let needle = name.to_lowercase();
        self.all()
            .find(|account| account.name.to_lowercase() == needle)
    }

    /// Returns the accounts of one kind, in server order.
    #[inline]
    #[must_use]
    pub fn of_type(&self, kind: AccountType) -> &[Account] {
        self.by_kind
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Iterates over every account, kind by kind in
    /// [`AccountType::ALL`] order.
    #[inline]
    pub fn all(&self) -> impl Iterator<Item = &Account> {
        AccountType::ALL
            .into_iter()
            .flat_map(|kind| self.of_type(kind).iter())
    }

    /// Returns the number of cached accounts.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if no account is cached.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Replaces the accounts covered by `scope` with `accounts`.
    ///
    /// [`AccountScope::All`] swaps the whole repository; a single-kind
    /// scope swaps only that kind's list and ignores accounts of other
    /// kinds.
    pub(crate) fn replace(&mut self, scope: AccountScope, accounts: Vec<Account>) {
        match scope {
            AccountScope::All => self.by_kind.clear(),
            AccountScope::Only(kind) => {
                let _previous = self.by_kind.remove(&kind);
            }
        }
        for account in accounts {
            if !scope.includes(account.kind) {
                tracing::warn!(
                    id = %account.id,
                    kind = %account.kind,
                    "skipping account outside the refreshed scope"
                );
                continue;
            }
            self.by_kind.entry(account.kind).or_default().push(account);
        }
        self.rebuild_index();
        tracing::debug!(scope = scope.query_value(), total = self.len(), "accounts replaced");
    }

    /// Attaches insight deltas to the accounts of the matching kind.
    ///
    /// Accounts without an entry get `0`.
    pub(crate) fn apply_insights(&mut self, kind: InsightKind, deltas: &HashMap<AccountId, f64>) {
        let Some(accounts) = self.by_kind.get_mut(&kind.account_type()) else {
            return;
        };
        for account in accounts {
            let delta = Some(deltas.get(&account.id).copied().unwrap_or_default());
            match kind {
                InsightKind::Expense => account.spent = delta,
                InsightKind::Revenue => account.earned = delta,
            }
        }
    }

    /// Rebuilds the flat id index from `by_kind`.
    fn rebuild_index(&mut self) {
        self.index.clear();
        for (&kind, accounts) in &self.by_kind {
            for (position, account) in accounts.iter().enumerate() {
                let _old = self.index.insert(account.id.clone(), (kind, position));
            }
        }
    }
}
