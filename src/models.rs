//! Data models for the ledger API.
//!
//! Wire records (`*Record`, [`JournalEntry`], [`InsightEntry`],
//! [`SummaryEntry`]) mirror the JSON the server sends; the cached
//! entities ([`Account`], [`Category`], [`Currency`]) are flattened views
//! of them. Request bodies (`New*`, `Update*`) are serialize-only.

mod account;
mod amount;
mod category;
mod currency;
mod envelope;
mod enums;
mod ids;
mod insight;
mod summary;
mod transaction;

pub use account::{Account, AccountAttributes, AccountRecord, NewAccount};
pub use amount::parse_amount;
pub use category::{Category, CategoryAttributes, CategoryRecord, NewCategory};
pub use chrono::{NaiveDate, NaiveDateTime};
pub use currency::{Currency, CurrencyAttributes, CurrencyRecord};
pub use envelope::{Envelope, Meta, Pagination};
pub use enums::{AccountScope, AccountType, InsightKind, TransactionType};
pub use ids::{AccountId, CategoryId, CurrencyId, JournalId, TransactionId};
pub use insight::InsightEntry;
pub use summary::SummaryEntry;
pub use transaction::{
    JournalAttributes, JournalEntry, JournalSplit, NewSplit, NewTransaction, UpdateSplit,
    UpdateTransaction,
};
