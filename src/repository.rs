//! In-memory caches of ledger resources.
//!
//! Every repository is replaced wholesale by a refresh; none of them
//! talks to the network or writes back to the ledger. Lookup misses are
//! `None` (or `0` for insight deltas), never errors.

mod accounts;
mod categories;
mod currencies;
mod insights;
mod summary;

pub use accounts::AccountRepository;
pub use categories::CategoryRepository;
pub use currencies::CurrencyRepository;
pub use insights::InsightRepository;
pub use summary::SummaryRepository;
