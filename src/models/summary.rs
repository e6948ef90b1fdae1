//! Basic period summary models.

use serde::{Deserialize, Serialize};

use super::amount::deserialize_amount;

/// One figure of the basic summary (balance, spent, earned, bills,
/// left to spend or net worth) in one currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryEntry {
    /// Lookup key, e.g. `spent-in-EUR`.
    pub key: String,
    /// Human-readable title.
    #[serde(default)]
    pub title: String,
    /// Value of the figure.
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub monetary_value: f64,
    /// Currency code of the figure.
    #[serde(default)]
    pub currency_code: String,
    /// Value formatted by the server, with currency symbol.
    #[serde(default)]
    pub value_parsed: Option<String>,
    /// Secondary line shown under the figure.
    #[serde(default)]
    pub sub_title: Option<String>,
}

impl SummaryEntry {
    /// Returns the figure name without its currency suffix
    /// (`spent-in-EUR` -> `spent`).
    #[inline]
    #[must_use]
    pub fn figure(&self) -> &str {
        self.key
            .split_once("-in-")
            .map_or(self.key.as_str(), |(figure, _)| figure)
    }
}
