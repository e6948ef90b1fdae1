//! Status and envelope checks applied to every response body.
//!
//! Precedence: a non-empty server `message` always wins over the HTTP
//! status; an unexpected status without a message is reported as
//! [`FireflyError::HttpStatus`].

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::{FireflyError, Result};
use crate::models::Envelope;

/// Extracts a non-empty `message` field from an arbitrary JSON value.
fn message_of(value: &serde_json::Value) -> Option<String> {
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .filter(|message| !message.is_empty())
        .map(ToOwned::to_owned)
}

/// Fails when `status` differs from `expected`.
///
/// The body is only inspected for an error message; a body that is not
/// JSON at all still yields [`FireflyError::HttpStatus`].
fn check_status(status: StatusCode, expected: StatusCode, body: &str) -> Result<()> {
    if status == expected {
        return Ok(());
    }
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .as_ref()
        .and_then(message_of);
    tracing::debug!(
        status = status.as_u16(),
        expected = expected.as_u16(),
        has_message = message.is_some(),
        "unexpected response status"
    );
    Err(message.map_or(
        FireflyError::HttpStatus {
            status: status.as_u16(),
        },
        |message| FireflyError::Api { message },
    ))
}

/// Decodes an enveloped response body.
///
/// # Errors
///
/// Returns [`FireflyError::Api`] if the server reported a message,
/// [`FireflyError::HttpStatus`] on an unexpected status without one, and
/// [`FireflyError::Decode`] if the body is not an envelope.
pub(crate) fn decode_envelope(
    status: StatusCode,
    expected: StatusCode,
    body: &str,
) -> Result<Envelope> {
    check_status(status, expected, body)?;
    let envelope: Envelope = serde_json::from_str(body)?;
    if let Some(message) = envelope.error_message() {
        return Err(FireflyError::Api {
            message: message.to_owned(),
        });
    }
    Ok(envelope)
}

/// Decodes a response body that is not wrapped in an envelope (bare
/// arrays and maps), with the same status and message precedence as
/// [`decode_envelope`].
///
/// # Errors
///
/// Same as [`decode_envelope`].
pub(crate) fn decode_json<T: DeserializeOwned>(
    status: StatusCode,
    expected: StatusCode,
    body: &str,
) -> Result<T> {
    check_status(status, expected, body)?;
    let value: serde_json::Value = serde_json::from_str(body)?;
    if let Some(message) = message_of(&value) {
        return Err(FireflyError::Api { message });
    }
    Ok(serde_json::from_value(value)?)
}

/// Checks a response that must carry no content. The body is never
/// parsed on success.
///
/// # Errors
///
/// Returns [`FireflyError::Api`] or [`FireflyError::HttpStatus`] if the
/// status is not `204 No Content`.
pub(crate) fn expect_no_content(status: StatusCode, body: &str) -> Result<()> {
    check_status(status, StatusCode::NO_CONTENT, body)
}
