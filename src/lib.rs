//! Rust client library and sync cache for the
//! [Firefly III](https://www.firefly-iii.org/) personal finance API.
//!
//! The crate mirrors a remote ledger into an in-process cache and
//! rebuilds a normalized transaction view from the ledger's raw journal
//! splits:
//!
//! - [`client::FireflyClient`] speaks the JSON API: authentication,
//!   response envelopes, pagination.
//! - [`repository`] holds typed caches of accounts, categories,
//!   currencies, insights and the period summary.
//! - [`period::PeriodWindow`] is the active accounting month.
//! - [`transactions::reconstruct`] turns journal entries into
//!   [`transactions::Transaction`] values with derived source,
//!   destination and category.
//! - [`ledger::Ledger`] ties them together with bootstrap and refresh
//!   operations.
//!
//! ```no_run
//! # async fn run() -> firefly_rs::Result<()> {
//! use firefly_rs::Ledger;
//! use firefly_rs::models::AccountType;
//!
//! let mut ledger = Ledger::builder()
//!     .base_url("https://firefly.example.com")
//!     .api_key("personal-access-token")
//!     .build()?;
//! ledger.bootstrap().await?;
//!
//! for account in ledger.accounts_of_type(AccountType::Expense) {
//!     let spent = ledger.expense_delta(&account.id);
//!     println!("{}: {spent:.2}", account.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod ledger;
pub mod models;
pub mod period;
pub mod repository;
pub mod transactions;

pub use client::{FireflyClient, FireflyClientBuilder};
pub use error::{FireflyError, Result};
pub use ledger::{Ledger, LedgerBuilder};
pub use period::PeriodWindow;
