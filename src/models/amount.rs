//! Lenient decoding of monetary amounts.
//!
//! The ledger serializes amounts as decimal strings (`"12.500000000000"`)
//! and sometimes as bare numbers or `null`. Anything that is not a finite
//! number decodes as zero instead of failing the whole response.

use serde::{Deserialize, Deserializer};

/// Any JSON value an amount field may carry.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    /// Bare JSON number.
    Number(f64),
    /// Decimal string.
    Text(String),
    /// Anything else (booleans, objects, arrays).
    Other(serde::de::IgnoredAny),
}

/// Parses a decimal string, returning `0.0` when it is not a finite
/// number.
#[inline]
#[must_use]
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or_default()
}

/// Deserializes a lenient amount field; use with
/// `#[serde(default, deserialize_with = "...")]`.
pub(crate) fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawAmount>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawAmount::Number(value)) if value.is_finite() => value,
        Some(RawAmount::Text(text)) => parse_amount(&text),
        Some(RawAmount::Number(_) | RawAmount::Other(_)) | None => 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "deserialize_amount")]
        amount: f64,
    }

    fn decode(json: &str) -> f64 {
        serde_json::from_str::<Holder>(json).unwrap().amount
    }

    #[test]
    fn parses_decimal_strings() {
        assert!((parse_amount("12.500000000000") - 12.5).abs() < f64::EPSILON);
        assert!((parse_amount(" -3.25 ") + 3.25).abs() < f64::EPSILON);
    }

    #[test]
    fn garbage_parses_as_zero() {
        assert!(parse_amount("twelve").abs() < f64::EPSILON);
        assert!(parse_amount("").abs() < f64::EPSILON);
        assert!(parse_amount("NaN").abs() < f64::EPSILON);
    }

    #[test]
    fn deserializes_every_shape() {
        assert!((decode(r#"{"amount":"7.10"}"#) - 7.1).abs() < f64::EPSILON);
        assert!((decode(r#"{"amount":7.1}"#) - 7.1).abs() < f64::EPSILON);
        assert!(decode(r#"{"amount":null}"#).abs() < f64::EPSILON);
        assert!(decode(r#"{"amount":true}"#).abs() < f64::EPSILON);
        assert!(decode("{}").abs() < f64::EPSILON);
    }
}
