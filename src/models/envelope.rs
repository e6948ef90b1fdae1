//! Generic response envelope shared by every list and item endpoint.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Top-level response body of the ledger API.
///
/// `data` stays untyped until the caller knows which resource it holds;
/// [`Envelope::items`] and [`Envelope::item`] unwrap it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Single resource object or array of resources.
    #[serde(default)]
    pub data: serde_json::Value,
    /// Error message; non-empty means the request failed.
    #[serde(default)]
    pub message: Option<String>,
    /// Response metadata.
    #[serde(default)]
    pub meta: Meta,
}

impl Envelope {
    /// Returns the server message if it is present and non-empty.
    #[inline]
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.message.as_deref().filter(|message| !message.is_empty())
    }

    /// Decodes `data` as an array of items.
    ///
    /// A `null` or absent `data` decodes as an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if `data` is not an array of `T`.
    #[inline]
    pub fn items<T: DeserializeOwned>(&self) -> Result<Vec<T>, serde_json::Error> {
        if self.data.is_null() {
            return Ok(Vec::new());
        }
        Vec::<T>::deserialize(&self.data)
    }

    /// Decodes `data` as a single item.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if `data` is not a `T`.
    #[inline]
    pub fn item<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.data)
    }
}

/// Response metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Pagination state of a list response.
    #[serde(default)]
    pub pagination: Pagination,
}

/// Pagination state reported by the server.
///
/// The all-zero default (no metadata) reads as "last page".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// 1-based index of the returned page.
    #[serde(default)]
    pub current_page: u32,
    /// Number of pages the server claims to hold.
    #[serde(default)]
    pub total_pages: u32,
    /// Number of items across all pages.
    #[serde(default)]
    pub total: u64,
}

impl Pagination {
    /// Returns `true` if the server reports no page after this one.
    #[inline]
    #[must_use]
    pub const fn is_last_page(&self) -> bool {
        self.current_page >= self.total_pages
    }
}
