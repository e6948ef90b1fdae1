//! Currency cache with a memoized primary currency.

use std::sync::OnceLock;

use crate::models::{Currency, CurrencyId};

/// Cached currencies in server order.
#[derive(Debug, Clone, Default)]
pub struct CurrencyRepository {
    /// Currencies in server order.
    currencies: Vec<Currency>,
    /// Position of the primary currency, resolved on first request and
    /// reset by [`CurrencyRepository::replace`].
    primary: OnceLock<Option<usize>>,
}

impl CurrencyRepository {
    /// Creates an empty repository.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a currency by id.
    #[inline]
    #[must_use]
    pub fn by_id(&self, id: &CurrencyId) -> Option<&Currency> {
        self.currencies.iter().find(|currency| currency.id == *id)
    }

    /// Looks up a currency by code, ignoring case.
    #[inline]
    #[must_use]
    pub fn by_code(&self, code: &str) -> Option<&Currency> {
        self.currencies.iter().find(|currency| currency.has_code(code))
    }

    /// Returns the user's primary currency.
    ///
    /// If the server flags several currencies as primary, the first one
    /// wins.
    #[inline]
    #[must_use]
    pub fn primary(&self) -> Option<&Currency> {
        let position = *self.primary.get_or_init(|| {
            let mut flagged = self
                .currencies
                .iter()
                .enumerate()
                .filter(|&(_, currency)| currency.primary);
            let first = flagged.next().map(|(position, _)| position);
            let extra = flagged.count();
            if extra > 0 {
                tracing::warn!(extra, "several currencies are flagged primary, using the first");
            }
            first
        });
        position.and_then(|index| self.currencies.get(index))
    }

    /// Returns every currency in server order.
    #[inline]
    #[must_use]
    pub fn all(&self) -> &[Currency] {
        &self.currencies
    }

    /// Returns the number of cached currencies.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    /// Returns `true` if no currency is cached.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    /// Replaces the whole contents and forgets the memoized primary.
    pub(crate) fn replace(&mut self, currencies: Vec<Currency>) {
        self.currencies = currencies;
        self.primary = OnceLock::new();
        tracing::debug!(total = self.currencies.len(), "currencies replaced");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn currency(id: &str, code: &str, primary: bool) -> Currency {
        Currency {
            id: CurrencyId::from(id),
            code: code.to_owned(),
            primary,
            ..Currency::default()
        }
    }

    #[test]
    fn code_lookup_ignores_case() {
        let mut repo = CurrencyRepository::new();
        repo.replace(vec![currency("1", "EUR", true), currency("2", "USD", false)]);
        assert_eq!(repo.by_code("usd").map(|c| c.id.as_inner()), Some("2"));
        assert!(repo.by_code("GBP").is_none());
        assert_eq!(
            repo.by_id(&CurrencyId::from("1")).map(|c| c.code.as_str()),
            Some("EUR")
        );
    }

    #[test]
    fn primary_is_resolved_and_reset_on_replace() {
        let mut repo = CurrencyRepository::new();
        assert!(repo.primary().is_none());

        repo.replace(vec![currency("1", "EUR", false), currency("2", "USD", true)]);
        assert_eq!(repo.primary().map(|c| c.code.as_str()), Some("USD"));

        repo.replace(vec![currency("1", "EUR", true)]);
        assert_eq!(repo.primary().map(|c| c.code.as_str()), Some("EUR"));
    }

    #[test]
    fn first_of_several_primaries_wins() {
        let mut repo = CurrencyRepository::new();
        repo.replace(vec![
            currency("1", "EUR", false),
            currency("2", "USD", true),
            currency("3", "GBP", true),
        ]);
        assert_eq!(repo.primary().map(|c| c.code.as_str()), Some("USD"));
    }

    #[test]
    fn no_primary_flag_means_none() {
        let mut repo = CurrencyRepository::new();
        repo.replace(vec![currency("1", "EUR", false)]);
        assert!(repo.primary().is_none());
    }
}
