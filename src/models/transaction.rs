//! Raw journal entry models and transaction request bodies.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use super::amount::deserialize_amount;
use super::{AccountId, CategoryId, JournalId, TransactionId, TransactionType};

/// A journal entry (transaction group) as returned by the transaction
/// listing and search endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Server identifier of the group.
    pub id: TransactionId,
    /// Resource attributes.
    pub attributes: JournalAttributes,
}

/// Attributes of a [`JournalEntry`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalAttributes {
    /// Title of a multi-split group.
    #[serde(default)]
    pub group_title: Option<String>,
    /// Splits in journal-insertion order.
    #[serde(default)]
    pub transactions: Vec<JournalSplit>,
}

/// One leg of a journal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalSplit {
    /// Identifier of this split, used for per-split updates.
    pub transaction_journal_id: JournalId,
    /// Entry type.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Booking date.
    pub date: DateTime<FixedOffset>,
    /// Amount in the split currency.
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub amount: f64,
    /// Amount in the foreign currency, zero when absent.
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub foreign_amount: f64,
    /// Split description.
    #[serde(default)]
    pub description: String,
    /// Source account.
    #[serde(default)]
    pub source_id: Option<AccountId>,
    /// Destination account.
    #[serde(default)]
    pub destination_id: Option<AccountId>,
    /// Category.
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    /// Currency code of `amount`.
    #[serde(default)]
    pub currency_code: Option<String>,
    /// Currency code of `foreign_amount`.
    #[serde(default)]
    pub foreign_currency_code: Option<String>,
}

/// Request body for creating a transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTransaction {
    /// Reject the transaction if an identical one exists.
    pub error_if_duplicate_hash: bool,
    /// Run the server's rule engine on the new transaction.
    pub apply_rules: bool,
    /// Title of the group; required by the server for multi-split
    /// transactions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_title: Option<String>,
    /// Splits of the new transaction.
    pub transactions: Vec<NewSplit>,
}

impl NewTransaction {
    /// Creates a transaction with a single split.
    #[inline]
    #[must_use]
    pub fn single(split: NewSplit) -> Self {
        Self {
            error_if_duplicate_hash: false,
            apply_rules: true,
            group_title: None,
            transactions: vec![split],
        }
    }

    /// Creates a multi-split transaction with a group title.
    #[inline]
    #[must_use]
    pub fn split<T: Into<String>>(group_title: T, splits: Vec<NewSplit>) -> Self {
        Self {
            error_if_duplicate_hash: false,
            apply_rules: true,
            group_title: Some(group_title.into()),
            transactions: splits,
        }
    }
}

/// One split of a [`NewTransaction`].
///
/// Accounts and categories can be given by id or by name; the server
/// creates missing expense/revenue accounts and categories by name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSplit {
    /// Entry type.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Booking date (`YYYY-MM-DD`).
    pub date: String,
    /// Amount as a decimal string.
    pub amount: String,
    /// Split description.
    pub description: String,
    /// Source account id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<AccountId>,
    /// Source account name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    /// Destination account id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_id: Option<AccountId>,
    /// Destination account name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_name: Option<String>,
    /// Category id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    /// Category name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    /// Currency code of `amount`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    /// Currency code of `foreign_amount`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreign_currency_code: Option<String>,
    /// Amount in the foreign currency as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreign_amount: Option<String>,
}

impl NewSplit {
    /// Creates a split with the mandatory fields.
    #[inline]
    #[must_use]
    pub fn new<T: Into<String>>(
        kind: TransactionType,
        date: NaiveDate,
        amount: f64,
        description: T,
    ) -> Self {
        Self {
            kind,
            date: date.format("%Y-%m-%d").to_string(),
            amount: amount.to_string(),
            description: description.into(),
            source_id: None,
            source_name: None,
            destination_id: None,
            destination_name: None,
            category_id: None,
            category_name: None,
            currency_code: None,
            foreign_currency_code: None,
            foreign_amount: None,
        }
    }

    /// Sets the source account by id.
    #[inline]
    #[must_use]
    pub fn source(mut self, id: AccountId) -> Self {
        self.source_id = Some(id);
        self
    }

    /// Sets the source account by name.
    #[inline]
    #[must_use]
    pub fn source_name<T: Into<String>>(mut self, name: T) -> Self {
        self.source_name = Some(name.into());
        self
    }

    /// Sets the destination account by id.
    #[inline]
    #[must_use]
    pub fn destination(mut self, id: AccountId) -> Self {
        self.destination_id = Some(id);
        self
    }

    /// Sets the destination account by name.
    #[inline]
    #[must_use]
    pub fn destination_name<T: Into<String>>(mut self, name: T) -> Self {
        self.destination_name = Some(name.into());
        self
    }

    /// Sets the category by id.
    #[inline]
    #[must_use]
    pub fn category(mut self, id: CategoryId) -> Self {
        self.category_id = Some(id);
        self
    }

    /// Sets the category by name.
    #[inline]
    #[must_use]
    pub fn category_name<T: Into<String>>(mut self, name: T) -> Self {
        self.category_name = Some(name.into());
        self
    }

    /// Sets the currency of the amount.
    #[inline]
    #[must_use]
    pub fn currency<T: Into<String>>(mut self, code: T) -> Self {
        self.currency_code = Some(code.into());
        self
    }

    /// Sets a foreign amount and its currency.
    #[inline]
    #[must_use]
    pub fn foreign<T: Into<String>>(mut self, amount: f64, code: T) -> Self {
        self.foreign_amount = Some(amount.to_string());
        self.foreign_currency_code = Some(code.into());
        self
    }
}

/// Request body for updating an existing transaction.
///
/// Splits are addressed by [`JournalId`]; unset fields are left
/// untouched by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateTransaction {
    /// New group title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_title: Option<String>,
    /// Split updates.
    pub transactions: Vec<UpdateSplit>,
}

impl UpdateTransaction {
    /// Creates an update touching the given splits.
    #[inline]
    #[must_use]
    pub const fn new(splits: Vec<UpdateSplit>) -> Self {
        Self {
            group_title: None,
            transactions: splits,
        }
    }

    /// Sets a new group title.
    #[inline]
    #[must_use]
    pub fn group_title<T: Into<String>>(mut self, title: T) -> Self {
        self.group_title = Some(title.into());
        self
    }
}

/// Update of one split, addressed by its journal id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateSplit {
    /// Split to update.
    pub transaction_journal_id: JournalId,
    /// New booking date (`YYYY-MM-DD`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// New amount as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New source account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<AccountId>,
    /// New destination account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_id: Option<AccountId>,
    /// New category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
}

impl UpdateSplit {
    /// Creates an empty update for the given split.
    #[inline]
    #[must_use]
    pub fn new(journal_id: JournalId) -> Self {
        Self {
            transaction_journal_id: journal_id,
            ..Self::default()
        }
    }

    /// Sets a new booking date.
    #[inline]
    #[must_use]
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date.format("%Y-%m-%d").to_string());
        self
    }

    /// Sets a new amount.
    #[inline]
    #[must_use]
    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount.to_string());
        self
    }

    /// Sets a new description.
    #[inline]
    #[must_use]
    pub fn description<T: Into<String>>(mut self, description: T) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets a new source account.
    #[inline]
    #[must_use]
    pub fn source(mut self, id: AccountId) -> Self {
        self.source_id = Some(id);
        self
    }

    /// Sets a new destination account.
    #[inline]
    #[must_use]
    pub fn destination(mut self, id: AccountId) -> Self {
        self.destination_id = Some(id);
        self
    }

    /// Sets a new category.
    #[inline]
    #[must_use]
    pub fn category(mut self, id: CategoryId) -> Self {
        self.category_id = Some(id);
        self
    }
}
