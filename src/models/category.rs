//! Transaction category models.

use serde::{Deserialize, Serialize};

use super::CategoryId;

/// A category resource as returned by the categories endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    /// Unique identifier.
    pub id: CategoryId,
    /// Resource attributes.
    pub attributes: CategoryAttributes,
}

/// Attributes of a [`CategoryRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAttributes {
    /// Display name.
    pub name: String,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// A cached category. Categories form a flat list.
///
/// The [`Default`] value is the zero-value placeholder used for splits
/// without a (known) category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Category {
    /// Unique identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Free-form notes (empty when absent).
    pub notes: String,
}

impl From<CategoryRecord> for Category {
    #[inline]
    fn from(record: CategoryRecord) -> Self {
        Self {
            id: record.id,
            name: record.attributes.name,
            notes: record.attributes.notes.unwrap_or_default(),
        }
    }
}

/// Request body for creating a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCategory {
    /// Display name.
    pub name: String,
    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewCategory {
    /// Creates a category payload with the given name.
    #[inline]
    #[must_use]
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            notes: None,
        }
    }

    /// Sets the category notes.
    #[inline]
    #[must_use]
    pub fn notes<T: Into<String>>(mut self, notes: T) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
