//! Currency models.

use serde::{Deserialize, Serialize};

use super::CurrencyId;

/// Number of decimal places assumed when the server omits it.
const DEFAULT_DECIMAL_PLACES: u8 = 2;

/// A currency resource as returned by the currencies endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyRecord {
    /// Unique identifier.
    pub id: CurrencyId,
    /// Resource attributes.
    pub attributes: CurrencyAttributes,
}

/// Attributes of a [`CurrencyRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyAttributes {
    /// ISO-like currency code (`EUR`).
    pub code: String,
    /// Display name.
    pub name: String,
    /// Currency symbol.
    #[serde(default)]
    pub symbol: String,
    /// Whether this is the user's primary currency.
    #[serde(default)]
    pub primary: Option<bool>,
    /// Name of the primary flag on older servers.
    #[serde(default)]
    pub default: Option<bool>,
    /// Whether the currency is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,
    /// Number of decimal places used for display.
    #[serde(default)]
    pub decimal_places: Option<u8>,
}

/// A cached currency.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Currency {
    /// Unique identifier.
    pub id: CurrencyId,
    /// ISO-like currency code as sent by the server.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Currency symbol.
    pub symbol: String,
    /// Whether this is the user's primary currency.
    pub primary: bool,
    /// Number of decimal places used for display.
    pub decimal_places: u8,
}

impl Currency {
    /// Returns `true` if the currency code matches, ignoring case.
    #[inline]
    #[must_use]
    pub fn has_code(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code)
    }

    /// Returns the lower-case code, used as a display/lookup key.
    #[inline]
    #[must_use]
    pub fn display_key(&self) -> String {
        self.code.to_ascii_lowercase()
    }
}

impl From<CurrencyRecord> for Currency {
    #[inline]
    fn from(record: CurrencyRecord) -> Self {
        let CurrencyRecord { id, attributes } = record;
        Self {
            id,
            code: attributes.code,
            name: attributes.name,
            symbol: attributes.symbol,
            primary: attributes.primary.or(attributes.default).unwrap_or(false),
            decimal_places: attributes
                .decimal_places
                .unwrap_or(DEFAULT_DECIMAL_PLACES),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_primary_currency() {
        let json = r#"{
            "type": "currencies",
            "id": "1",
            "attributes": {
                "enabled": true,
                "primary": true,
                "code": "EUR",
                "name": "Euro",
                "symbol": "€",
                "decimal_places": 2
            }
        }"#;
        let currency = Currency::from(serde_json::from_str::<CurrencyRecord>(json).unwrap());
        assert_eq!(currency.code, "EUR");
        assert!(currency.primary);
        assert_eq!(currency.decimal_places, 2);
    }

    #[test]
    fn legacy_default_flag_is_primary() {
        let json = r#"{
            "id": "2",
            "attributes": {"code": "USD", "name": "US Dollar", "symbol": "$", "default": true}
        }"#;
        let currency = Currency::from(serde_json::from_str::<CurrencyRecord>(json).unwrap());
        assert!(currency.primary);
    }

    #[test]
    fn both_flags_present_prefers_primary() {
        let json = r#"{
            "id": "4",
            "attributes": {"code": "GBP", "name": "Pound", "primary": false, "default": true}
        }"#;
        let currency = Currency::from(serde_json::from_str::<CurrencyRecord>(json).unwrap());
        assert!(!currency.primary);
    }

    #[test]
    fn missing_flags_default() {
        let json = r#"{"id": "3", "attributes": {"code": "JPY", "name": "Yen"}}"#;
        let currency = Currency::from(serde_json::from_str::<CurrencyRecord>(json).unwrap());
        assert!(!currency.primary);
        assert_eq!(currency.symbol, "");
        assert_eq!(currency.decimal_places, DEFAULT_DECIMAL_PLACES);
    }

    #[test]
    fn code_comparison_ignores_case() {
        let currency = Currency {
            code: "EUR".to_owned(),
            ..Currency::default()
        };
        assert!(currency.has_code("eur"));
        assert!(currency.has_code("EUR"));
        assert!(!currency.has_code("usd"));
        assert_eq!(currency.display_key(), "eur");
    }
}
