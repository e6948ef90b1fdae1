//! Enumeration types for constrained API values.

use serde::{Deserialize, Serialize};

/// Kind of a ledger account.
///
/// The ledger knows more account types than the five the cache groups
/// by; every liability flavour collapses into [`AccountType::Liability`]
/// and every bookkeeping type (cash, initial balance, reconciliation,
/// ...) into [`AccountType::Special`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Asset account (checking, savings, cash wallet).
    Asset,
    /// Expense account (where money goes).
    Expense,
    /// Revenue account (where money comes from).
    Revenue,
    /// Liability (debt, loan, mortgage).
    #[serde(alias = "liabilities", alias = "debt", alias = "loan", alias = "mortgage")]
    Liability,
    /// Any other bookkeeping account type.
    #[default]
    #[serde(other)]
    Special,
}

impl AccountType {
    /// All account kinds, in display order.
    pub const ALL: [Self; 5] = [
        Self::Asset,
        Self::Expense,
        Self::Revenue,
        Self::Liability,
        Self::Special,
    ];

    /// Returns the lower-case name of the kind.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asset => "asset",
            Self::Expense => "expense",
            Self::Revenue => "revenue",
            Self::Liability => "liability",
            Self::Special => "special",
        }
    }

    /// Returns the value of the `type` query parameter selecting this
    /// kind on the accounts endpoint.
    #[inline]
    #[must_use]
    pub const fn query_value(self) -> &'static str {
        match self {
            Self::Liability => "liabilities",
            Self::Asset | Self::Expense | Self::Revenue | Self::Special => self.as_str(),
        }
    }
}

impl core::fmt::Display for AccountType {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for AccountType {
    type Err = String;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown account type: {s}"))
    }
}

/// Selects which account kinds a refresh targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountScope {
    /// Every account kind in a single request.
    All,
    /// A single account kind.
    Only(AccountType),
}

impl AccountScope {
    /// Returns the value of the `type` query parameter for this scope.
    #[inline]
    #[must_use]
    pub const fn query_value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(kind) => kind.query_value(),
        }
    }

    /// Returns `true` if the scope covers the given account kind.
    #[inline]
    #[must_use]
    pub fn includes(self, kind: AccountType) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => only == kind,
        }
    }
}

impl core::str::FromStr for AccountScope {
    type Err = String;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// Type of a journal entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money leaves an asset account towards an expense account.
    Withdrawal,
    /// Money enters an asset account from a revenue account.
    Deposit,
    /// Money moves between two own accounts.
    Transfer,
    /// Balance correction entry.
    Reconciliation,
    /// Initial balance entry of a new account.
    #[serde(rename = "opening balance")]
    OpeningBalance,
    /// Any other (or unknown) entry type.
    #[default]
    #[serde(other)]
    Other,
}

impl TransactionType {
    /// Returns the ledger's name for the entry type.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Withdrawal => "withdrawal",
            Self::Deposit => "deposit",
            Self::Transfer => "transfer",
            Self::Reconciliation => "reconciliation",
            Self::OpeningBalance => "opening balance",
            Self::Other => "other",
        }
    }
}

impl core::fmt::Display for TransactionType {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a per-account insight delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsightKind {
    /// Money spent towards expense accounts.
    Expense,
    /// Money earned from revenue accounts.
    Revenue,
}

impl InsightKind {
    /// Returns the account kind the insight is reported for.
    #[inline]
    #[must_use]
    pub const fn account_type(self) -> AccountType {
        match self {
            Self::Expense => AccountType::Expense,
            Self::Revenue => AccountType::Revenue,
        }
    }
}
