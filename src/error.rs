//! Error types for the Firefly III client library.

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, FireflyError>;

/// All errors that can occur when using the Firefly III client.
#[derive(Debug, thiserror::Error)]
pub enum FireflyError {
    /// The request could not be delivered (connection refused, DNS,
    /// TLS, broken body stream).
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The request did not complete within the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// The server answered with a status other than the expected one
    /// and did not explain why.
    #[error("unexpected HTTP status {status}")]
    HttpStatus {
        /// Observed HTTP status code.
        status: u16,
    },

    /// The server reported a logical error in the `message` field.
    ///
    /// Takes precedence over the HTTP status code.
    #[error("API error: {message}")]
    Api {
        /// Error message returned by the server.
        message: String,
    },

    /// The response body did not match the expected JSON shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A request URL could not be built from the configured base URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// No API key was given to the client builder.
    #[error("API key is required")]
    MissingApiKey,

    /// No base URL was given to the client builder.
    #[error("base URL is required")]
    MissingBaseUrl,

    /// Pagination was aborted after reaching the safety page ceiling.
    ///
    /// Signals a server reporting inconsistent pagination metadata, not
    /// a normal end of data.
    #[error("pagination of {path} aborted after {limit} pages")]
    PageLimitExceeded {
        /// Endpoint path that was being paginated.
        path: String,
        /// Page ceiling that was reached.
        limit: u32,
    },

    /// A period window was requested for a month that does not exist.
    #[error("invalid period {year}-{month:02}")]
    InvalidPeriod {
        /// Requested year.
        year: i32,
        /// Requested month (1-based).
        month: u32,
    },
}

impl From<reqwest::Error> for FireflyError {
    #[inline]
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else {
            Self::Transport(err)
        }
    }
}
