//! Newtype wrappers for entity identifiers.
//!
//! The ledger serializes every identifier as a decimal string (`"42"`).
//! Wrapping them prevents mixing up IDs of different entity types at
//! compile time.

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapping a `String` inner type.
///
/// The `Default` value (an empty string) is the zero-value identifier
/// carried by placeholder records.
macro_rules! define_string_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier from the given string.
            #[inline]
            #[must_use]
            pub const fn new(value: String) -> Self {
                Self(value)
            }

            /// Returns a reference to the inner string.
            #[inline]
            #[must_use]
            pub fn as_inner(&self) -> &str {
                &self.0
            }

            /// Consumes the wrapper and returns the inner string.
            #[inline]
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }

            /// Returns `true` for the zero-value identifier.
            #[inline]
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl core::fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<String> for $name {
            #[inline]
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }
    };
}

define_string_id! {
    /// Unique identifier for an account.
    AccountId
}

define_string_id! {
    /// Unique identifier for a category.
    CategoryId
}

define_string_id! {
    /// Unique identifier for a currency.
    CurrencyId
}

define_string_id! {
    /// Unique identifier for a transaction group (a journal entry).
    TransactionId
}

define_string_id! {
    /// Unique identifier for one split of a journal entry.
    ///
    /// Used to address individual splits when updating a transaction.
    JournalId
}
