//! Period insight models.

use serde::{Deserialize, Serialize};

use super::AccountId;
use super::amount::parse_amount;

/// One entry of an insight endpoint response.
///
/// Insight endpoints answer with a bare JSON array, one entry per
/// account and currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightEntry {
    /// Account the delta belongs to.
    pub id: AccountId,
    /// Account name.
    #[serde(default)]
    pub name: String,
    /// Delta as a decimal string.
    #[serde(default)]
    pub difference: Option<String>,
    /// Delta as a floating-point number.
    #[serde(default)]
    pub difference_float: Option<f64>,
    /// Currency code of the delta.
    #[serde(default)]
    pub currency_code: Option<String>,
}

impl InsightEntry {
    /// Returns the raw signed delta.
    ///
    /// Prefers `difference_float`; falls back to parsing `difference`,
    /// and yields `0` when neither is usable.
    #[inline]
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.difference_float
            .filter(|value| value.is_finite())
            .unwrap_or_else(|| self.difference.as_deref().map(parse_amount).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_expense_insight() {
        let json = r#"[{
            "id": "14",
            "name": "Supermarket",
            "difference": "-50.000000000000",
            "difference_float": -50.0,
            "currency_id": "1",
            "currency_code": "EUR"
        }]"#;
        let entries: Vec<InsightEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, AccountId::new("14".to_owned()));
        assert!((entries[0].delta() + 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn delta_falls_back_to_string() {
        let entry: InsightEntry =
            serde_json::from_str(r#"{"id": "3", "difference": "12.75", "difference_float": null}"#)
                .unwrap();
        assert!((entry.delta() - 12.75).abs() < f64::EPSILON);
    }

    #[test]
    fn delta_without_values_is_zero() {
        let entry: InsightEntry = serde_json::from_str(r#"{"id": "3"}"#).unwrap();
        assert!(entry.delta().abs() < f64::EPSILON);
    }
}
