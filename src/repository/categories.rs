//! Category cache.

use std::collections::HashMap;

use crate::models::{Category, CategoryId};

/// Cached categories in server order.
#[derive(Debug, Clone, Default)]
pub struct CategoryRepository {
    /// Categories in server order.
    categories: Vec<Category>,
    /// Position of every category by id.
    index: HashMap<CategoryId, usize>,
}

impl CategoryRepository {
    /// Creates an empty repository.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a category by id.
    #[inline]
    #[must_use]
    pub fn by_id(&self, id: &CategoryId) -> Option<&Category> {
        self.index
            .get(id)
            .and_then(|&position| self.categories.get(position))
    }

    /// Looks up the first category with the given name, ignoring case.
    #[inline]
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Category> {
        let needle = name.to_lowercase();
        self.categories
            .iter()
            .find(|category| category.name.to_lowercase() == needle)
    }

    /// Returns every category in server order.
    #[inline]
    #[must_use]
    pub fn all(&self) -> &[Category] {
        &self.categories
    }

    /// Returns the number of cached categories.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns `true` if no category is cached.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Replaces the whole contents.
    pub(crate) fn replace(&mut self, categories: Vec<Category>) {
        self.index = categories
            .iter()
            .enumerate()
            .map(|(position, category)| (category.id.clone(), position))
            .collect();
        self.categories = categories;
        tracing::debug!(total = self.categories.len(), "categories replaced");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: CategoryId::from(id),
            name: name.to_owned(),
            notes: String::new(),
        }
    }

    #[test]
    fn lookups_before_and_after_replace() {
        let mut repo = CategoryRepository::new();
        assert!(repo.by_id(&CategoryId::from("1")).is_none());

        repo.replace(vec![category("1", "Groceries"), category("2", "Rent")]);
        assert_eq!(repo.len(), 2);
        assert_eq!(
            repo.by_id(&CategoryId::from("2")).map(|c| c.name.as_str()),
            Some("Rent")
        );
        assert_eq!(
            repo.by_name("GROCERIES").map(|c| c.id.as_inner()),
            Some("1")
        );
    }

    #[test]
    fn replace_discards_previous_contents() {
        let mut repo = CategoryRepository::new();
        repo.replace(vec![category("1", "Groceries")]);
        repo.replace(vec![category("3", "Travel")]);
        assert!(repo.by_id(&CategoryId::from("1")).is_none());
        assert_eq!(repo.all().len(), 1);
    }
}
