//! Ledger account models.

use serde::{Deserialize, Serialize};

use super::amount::parse_amount;
use super::{AccountId, AccountType};

/// An account resource as returned by the accounts endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    /// Unique identifier.
    pub id: AccountId,
    /// Resource attributes.
    pub attributes: AccountAttributes,
}

/// Attributes of an [`AccountRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountAttributes {
    /// Display name.
    pub name: String,
    /// Kind of account.
    #[serde(rename = "type")]
    pub kind: AccountType,
    /// ISO code of the account currency.
    #[serde(default)]
    pub currency_code: Option<String>,
    /// Current balance as a decimal string.
    #[serde(default)]
    pub current_balance: Option<String>,
    /// Whether the account is active.
    #[serde(default)]
    pub active: Option<bool>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// A cached account.
///
/// The [`Default`] value is the zero-value placeholder used when a
/// journal split references an account the cache does not know.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Account {
    /// Unique identifier.
    pub id: AccountId,
    /// Display name.
    pub name: String,
    /// ISO code of the account currency.
    pub currency_code: String,
    /// Current balance; zero if the server value did not parse.
    pub balance: f64,
    /// Kind of account.
    pub kind: AccountType,
    /// Amount spent towards this account in the active period.
    ///
    /// `None` until an expense insight pass has succeeded.
    pub spent: Option<f64>,
    /// Amount earned from this account in the active period.
    ///
    /// `None` until a revenue insight pass has succeeded.
    pub earned: Option<f64>,
}

impl From<AccountRecord> for Account {
    #[inline]
    fn from(record: AccountRecord) -> Self {
        let AccountRecord { id, attributes } = record;
        Self {
            id,
            name: attributes.name,
            currency_code: attributes.currency_code.unwrap_or_default(),
            balance: attributes
                .current_balance
                .as_deref()
                .map(parse_amount)
                .unwrap_or_default(),
            kind: attributes.kind,
            spent: None,
            earned: None,
        }
    }
}

/// Request body for creating an account.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewAccount {
    /// Display name.
    pub name: String,
    /// Kind of account.
    #[serde(rename = "type")]
    pub kind: AccountType,
    /// ISO code of the account currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    /// Role of an asset account (`defaultAsset`, `savingAsset`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_role: Option<String>,
    /// Opening balance as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_balance: Option<String>,
    /// Date of the opening balance (`YYYY-MM-DD`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_balance_date: Option<String>,
    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Role the ledger requires for newly created asset accounts.
const DEFAULT_ASSET_ROLE: &str = "defaultAsset";

impl NewAccount {
    /// Creates a minimal account payload.
    ///
    /// Asset accounts get the default asset role, which the ledger
    /// requires for that kind.
    #[inline]
    #[must_use]
    pub fn new<T: Into<String>>(name: T, kind: AccountType) -> Self {
        Self {
            name: name.into(),
            kind,
            currency_code: None,
            account_role: (kind == AccountType::Asset).then(|| DEFAULT_ASSET_ROLE.to_owned()),
            opening_balance: None,
            opening_balance_date: None,
            notes: None,
        }
    }

    /// Sets the account currency.
    #[inline]
    #[must_use]
    pub fn currency<T: Into<String>>(mut self, code: T) -> Self {
        self.currency_code = Some(code.into());
        self
    }

    /// Sets the opening balance and its date (`YYYY-MM-DD`).
    #[inline]
    #[must_use]
    pub fn opening_balance<T: Into<String>>(mut self, amount: f64, date: T) -> Self {
        self.opening_balance = Some(amount.to_string());
        self.opening_balance_date = Some(date.into());
        self
    }

    /// Sets the account notes.
    #[inline]
    #[must_use]
    pub fn notes<T: Into<String>>(mut self, notes: T) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
