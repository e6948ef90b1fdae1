//! HTTP transport for the ledger API.
//!
//! [`FireflyClient`] issues authenticated JSON requests, unwraps the
//! response envelope and drives pagination for list endpoints.

mod async_client;
mod envelope;
mod pagination;

pub use async_client::{FireflyClient, FireflyClientBuilder};
pub use pagination::DEFAULT_MAX_PAGES;

/// Prefix of every API path.
const API_PREFIX: &str = "/api/v1";

/// Accounts endpoint path.
const ACCOUNTS_PATH: &str = "/accounts";

/// Categories endpoint path.
const CATEGORIES_PATH: &str = "/categories";

/// Currencies endpoint path.
const CURRENCIES_PATH: &str = "/currencies";

/// Transactions endpoint path.
const TRANSACTIONS_PATH: &str = "/transactions";

/// Transaction search endpoint path.
const SEARCH_TRANSACTIONS_PATH: &str = "/search/transactions";

/// Expense-per-expense-account insight endpoint path.
const EXPENSE_INSIGHT_PATH: &str = "/insight/expense/expense";

/// Revenue-per-revenue-account insight endpoint path.
const REVENUE_INSIGHT_PATH: &str = "/insight/income/revenue";

/// Basic summary endpoint path.
const SUMMARY_PATH: &str = "/summary/basic";
