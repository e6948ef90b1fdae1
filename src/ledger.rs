//! High-level ledger cache.
//!
//! [`Ledger`] owns the HTTP client, the active [`PeriodWindow`] and one
//! repository per resource. It is the single explicit cache object:
//! refreshes take `&mut self`, so overlapping refreshes of the same cache
//! cannot be issued, and mutations go straight to the server without
//! touching the cached contents.

use core::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};

use crate::client::{FireflyClient, FireflyClientBuilder};
use crate::error::Result;
use crate::models::{
    Account, AccountId, AccountScope, AccountType, Category, CategoryId, Currency, InsightEntry,
    InsightKind, JournalEntry, NewAccount, NewCategory, NewTransaction, TransactionId,
    UpdateTransaction,
};
use crate::period::PeriodWindow;
use crate::repository::{
    AccountRepository, CategoryRepository, CurrencyRepository, InsightRepository,
    SummaryRepository,
};
use crate::transactions::{Transaction, reconstruct};

/// Builder for constructing a [`Ledger`].
#[derive(Debug)]
pub struct LedgerBuilder {
    /// Builder of the underlying HTTP client.
    client: FireflyClientBuilder,
    /// Initial period; the current local month when unset.
    period: Option<PeriodWindow>,
}

impl LedgerBuilder {
    /// Sets the personal access token used as bearer credential.
    #[inline]
    #[must_use]
    pub fn api_key<T: Into<String>>(mut self, api_key: T) -> Self {
        self.client = self.client.api_key(api_key);
        self
    }

    /// Sets the server URL.
    #[inline]
    #[must_use]
    pub fn base_url<T: Into<String>>(mut self, url: T) -> Self {
        self.client = self.client.base_url(url);
        self
    }

    /// Sets the per-request timeout.
    #[inline]
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.client = self.client.timeout(timeout);
        self
    }

    /// Sets the pagination safety ceiling.
    #[inline]
    #[must_use]
    pub fn max_pages(mut self, max_pages: u32) -> Self {
        self.client = self.client.max_pages(max_pages);
        self
    }

    /// Sets the initial period window.
    #[inline]
    #[must_use]
    pub const fn period(mut self, period: PeriodWindow) -> Self {
        self.period = Some(period);
        self
    }

    /// Builds an empty ledger cache. Call [`Ledger::bootstrap`] to
    /// populate it.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the
    /// current month cannot be determined.
    #[inline]
    pub fn build(self) -> Result<Ledger> {
        let client = self.client.build()?;
        let period = match self.period {
            Some(period) => period,
            None => PeriodWindow::current()?,
        };
        Ok(Ledger::with_client(client, period))
    }
}

/// Client-side cache of a remote ledger.
///
/// Use [`Ledger::builder()`] to construct an instance.
#[derive(Debug)]
pub struct Ledger {
    /// Low-level HTTP client.
    client: FireflyClient,
    /// Active accounting month.
    period: PeriodWindow,
    /// Cached accounts.
    accounts: AccountRepository,
    /// Cached categories.
    categories: CategoryRepository,
    /// Cached currencies.
    currencies: CurrencyRepository,
    /// Cached insight deltas of the active period.
    insights: InsightRepository,
    /// Cached summary of the active period.
    summary: SummaryRepository,
}

impl Ledger {
    /// Creates a new builder for configuring the ledger.
    #[inline]
    #[must_use]
    pub const fn builder() -> LedgerBuilder {
        LedgerBuilder {
            client: FireflyClient::builder(),
            period: None,
        }
    }

    /// Creates an empty cache around an existing client.
    #[inline]
    #[must_use]
    pub fn with_client(client: FireflyClient, period: PeriodWindow) -> Self {
        Self {
            client,
            period,
            accounts: AccountRepository::new(),
            categories: CategoryRepository::new(),
            currencies: CurrencyRepository::new(),
            insights: InsightRepository::new(),
            summary: SummaryRepository::new(),
        }
    }

    /// Returns the underlying HTTP client.
    #[inline]
    #[must_use]
    pub const fn client(&self) -> &FireflyClient {
        &self.client
    }

    // ── Lifecycle and refresh ───────────────────────────────────────

    /// Populates every repository.
    ///
    /// Accounts, categories, currencies and the period summary are
    /// fetched concurrently and stored only once all of them succeeded;
    /// both insight passes then run concurrently.
    ///
    /// # Errors
    ///
    /// Returns the first fetch error; the cache is left untouched.
    #[tracing::instrument(skip_all, fields(period = %self.period))]
    pub async fn bootstrap(&mut self) -> Result<()> {
        let (start, end) = self.period_dates();
        tracing::debug!("bootstrapping ledger cache");
        let (accounts, categories, currencies, summary) = tokio::try_join!(
            self.client.accounts(AccountScope::All),
            self.client.categories(),
            self.client.currencies(),
            self.client.basic_summary(start, end),
        )?;
        self.accounts.replace(AccountScope::All, accounts);
        self.categories.replace(categories);
        self.currencies.replace(currencies);
        self.summary.replace(summary);
        self.compute_all_insights().await;
        tracing::debug!(
            accounts = self.accounts.len(),
            categories = self.categories.len(),
            currencies = self.currencies.len(),
            "ledger cache ready"
        );
        Ok(())
    }

    /// Re-fetches the accounts of `scope` and swaps them in.
    ///
    /// Refreshing expense, revenue or all accounts also re-runs the
    /// matching insight pass(es).
    ///
    /// # Errors
    ///
    /// Returns the fetch error; the cached accounts are left untouched.
    #[tracing::instrument(skip_all, fields(scope = scope.query_value()))]
    pub async fn refresh_accounts(&mut self, scope: AccountScope) -> Result<()> {
        let accounts = self.client.accounts(scope).await?;
        self.accounts.replace(scope, accounts);
        match scope {
            AccountScope::All => self.compute_all_insights().await,
            AccountScope::Only(AccountType::Expense) => self.compute_expense_insights().await,
            AccountScope::Only(AccountType::Revenue) => self.compute_revenue_insights().await,
            AccountScope::Only(
                AccountType::Asset | AccountType::Liability | AccountType::Special,
            ) => {}
        }
        Ok(())
    }

    /// Re-fetches the categories and swaps them in.
    ///
    /// # Errors
    ///
    /// Returns the fetch error; the cached categories are left untouched.
    #[tracing::instrument(skip_all)]
    pub async fn refresh_categories(&mut self) -> Result<()> {
        let categories = self.client.categories().await?;
        self.categories.replace(categories);
        Ok(())
    }

    /// Re-fetches the currencies and swaps them in, forgetting the
    /// memoized primary currency.
    ///
    /// # Errors
    ///
    /// Returns the fetch error; the cached currencies are left untouched.
    #[tracing::instrument(skip_all)]
    pub async fn refresh_currencies(&mut self) -> Result<()> {
        let currencies = self.client.currencies().await?;
        self.currencies.replace(currencies);
        Ok(())
    }

    /// Re-fetches the summary of the active period.
    ///
    /// # Errors
    ///
    /// Returns the fetch error; the cached summary is left untouched.
    #[tracing::instrument(skip_all, fields(period = %self.period))]
    pub async fn refresh_summary(&mut self) -> Result<()> {
        let (start, end) = self.period_dates();
        let summary = self.client.basic_summary(start, end).await?;
        self.summary.replace(summary);
        Ok(())
    }

    /// Re-runs both insight passes and the summary for the active
    /// period, e.g. after moving the window.
    ///
    /// # Errors
    ///
    /// Returns the summary fetch error; insight failures are only
    /// logged.
    #[tracing::instrument(skip_all, fields(period = %self.period))]
    pub async fn refresh_period_data(&mut self) -> Result<()> {
        self.compute_all_insights().await;
        self.refresh_summary().await
    }

    /// Recomputes the spent deltas of expense accounts.
    ///
    /// Never fails: on error the previous deltas are kept and marked
    /// stale (see [`InsightRepository::is_stale`]).
    #[inline]
    pub async fn compute_expense_insights(&mut self) {
        let (start, end) = self.period_dates();
        let result = self.client.expense_insight(start, end).await;
        self.store_insights(InsightKind::Expense, result);
    }

    /// Recomputes the earned deltas of revenue accounts.
    ///
    /// Never fails: on error the previous deltas are kept and marked
    /// stale (see [`InsightRepository::is_stale`]).
    #[inline]
    pub async fn compute_revenue_insights(&mut self) {
        let (start, end) = self.period_dates();
        let result = self.client.revenue_insight(start, end).await;
        self.store_insights(InsightKind::Revenue, result);
    }

    /// Runs both insight passes concurrently.
    async fn compute_all_insights(&mut self) {
        let (start, end) = self.period_dates();
        let (expense, revenue) = tokio::join!(
            self.client.expense_insight(start, end),
            self.client.revenue_insight(start, end),
        );
        self.store_insights(InsightKind::Expense, expense);
        self.store_insights(InsightKind::Revenue, revenue);
    }

    /// Stores the outcome of one insight pass and re-attaches the
    /// deltas to the cached accounts.
    fn store_insights(&mut self, kind: InsightKind, result: Result<Vec<InsightEntry>>) {
        match result {
            Ok(entries) => self.insights.store(kind, &entries),
            Err(err) => {
                tracing::warn!(?kind, error = %err, "insight pass failed, keeping previous deltas");
                self.insights.mark_stale(kind);
            }
        }
        if self.insights.is_loaded(kind) {
            self.accounts
                .apply_insights(kind, self.insights.deltas(kind));
        }
    }

    // ── Period ──────────────────────────────────────────────────────

    /// Returns the active period window.
    #[inline]
    #[must_use]
    pub const fn period(&self) -> &PeriodWindow {
        &self.period
    }

    /// Returns the first instant of the active period.
    #[inline]
    #[must_use]
    pub const fn current_period_start(&self) -> NaiveDateTime {
        self.period.start()
    }

    /// Returns the last instant of the active period.
    #[inline]
    #[must_use]
    pub const fn current_period_end(&self) -> NaiveDateTime {
        self.period.end()
    }

    /// Moves the period to the next month. Cached period data is not
    /// refreshed; call [`Ledger::refresh_period_data`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPeriod`](crate::error::FireflyError::InvalidPeriod) past the supported range.
    #[inline]
    pub fn advance_period(&mut self) -> Result<()> {
        self.period.advance()
    }

    /// Moves the period to the previous month.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPeriod`](crate::error::FireflyError::InvalidPeriod) before the supported
    /// range.
    #[inline]
    pub fn retreat_period(&mut self) -> Result<()> {
        self.period.retreat()
    }

    /// Moves the period to `month` of `year`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPeriod`](crate::error::FireflyError::InvalidPeriod) if the month does not
    /// exist; the period is left unchanged.
    #[inline]
    pub fn set_period(&mut self, year: i32, month: u32) -> Result<()> {
        self.period.set_to(year, month)
    }

    /// Returns the first and last day of the active period.
    const fn period_dates(&self) -> (NaiveDate, NaiveDate) {
        (self.period.start_date(), self.period.end_date())
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// Returns the account cache.
    #[inline]
    #[must_use]
    pub const fn accounts(&self) -> &AccountRepository {
        &self.accounts
    }

    /// Returns the category cache.
    #[inline]
    #[must_use]
    pub const fn categories(&self) -> &CategoryRepository {
        &self.categories
    }

    /// Returns the currency cache.
    #[inline]
    #[must_use]
    pub const fn currencies(&self) -> &CurrencyRepository {
        &self.currencies
    }

    /// Returns the insight cache.
    #[inline]
    #[must_use]
    pub const fn insights(&self) -> &InsightRepository {
        &self.insights
    }

    /// Returns the summary cache.
    #[inline]
    #[must_use]
    pub const fn summary(&self) -> &SummaryRepository {
        &self.summary
    }

    /// Looks up an account by id.
    #[inline]
    #[must_use]
    pub fn account_by_id(&self, id: &AccountId) -> Option<&Account> {
        self.accounts.by_id(id)
    }

    /// Looks up an account by name, ignoring case.
    #[inline]
    #[must_use]
    pub fn account_by_name(&self, name: &str) -> Option<&Account> {
        self.accounts.by_name(name)
    }

    /// Returns the accounts of one kind.
    #[inline]
    #[must_use]
    pub fn accounts_of_type(&self, kind: AccountType) -> &[Account] {
        self.accounts.of_type(kind)
    }

    /// Looks up a category by id.
    #[inline]
    #[must_use]
    pub fn category_by_id(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.by_id(id)
    }

    /// Looks up a category by name, ignoring case.
    #[inline]
    #[must_use]
    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.by_name(name)
    }

    /// Looks up a currency by code, ignoring case.
    #[inline]
    #[must_use]
    pub fn currency_by_code(&self, code: &str) -> Option<&Currency> {
        self.currencies.by_code(code)
    }

    /// Returns the user's primary currency.
    #[inline]
    #[must_use]
    pub fn primary_currency(&self) -> Option<&Currency> {
        self.currencies.primary()
    }

    /// Returns the amount spent towards `account` in the active period,
    /// `0` if unknown.
    #[inline]
    #[must_use]
    pub fn expense_delta(&self, account: &AccountId) -> f64 {
        self.insights.delta(InsightKind::Expense, account)
    }

    /// Returns the amount earned from `account` in the active period,
    /// `0` if unknown.
    #[inline]
    #[must_use]
    pub fn revenue_delta(&self, account: &AccountId) -> f64 {
        self.insights.delta(InsightKind::Revenue, account)
    }

    // ── Transactions ────────────────────────────────────────────────

    /// Fetches and reconstructs the transactions of the active period.
    ///
    /// # Errors
    ///
    /// Returns an error if any page fails to load or decode.
    #[tracing::instrument(skip_all, fields(period = %self.period))]
    pub async fn transactions(&self) -> Result<Vec<Transaction>> {
        let (start, end) = self.period_dates();
        let entries = self.client.transactions(start, end).await?;
        Ok(reconstruct(&entries, &self.accounts, &self.categories))
    }

    /// Runs a free-text search and reconstructs the matches.
    ///
    /// # Errors
    ///
    /// Returns an error if any page fails to load or decode.
    #[tracing::instrument(skip_all)]
    pub async fn search_transactions(&self, query: &str) -> Result<Vec<Transaction>> {
        let entries = self.client.search_transactions(query).await?;
        Ok(reconstruct(&entries, &self.accounts, &self.categories))
    }

    // ── Mutations ───────────────────────────────────────────────────

    /// Creates a transaction on the server. The cache is not updated.
    ///
    /// # Errors
    ///
    /// Returns the server's error if the transaction is rejected.
    #[inline]
    pub async fn create_transaction(&self, transaction: &NewTransaction) -> Result<JournalEntry> {
        self.client.create_transaction(transaction).await
    }

    /// Updates a transaction on the server. The cache is not updated.
    ///
    /// # Errors
    ///
    /// Returns the server's error if the update is rejected.
    #[inline]
    pub async fn update_transaction(
        &self,
        id: &TransactionId,
        update: &UpdateTransaction,
    ) -> Result<JournalEntry> {
        self.client.update_transaction(id, update).await
    }

    /// Deletes a transaction on the server. The cache is not updated.
    ///
    /// # Errors
    ///
    /// Returns the server's error if the deletion is rejected.
    #[inline]
    pub async fn delete_transaction(&self, id: &TransactionId) -> Result<()> {
        self.client.delete_transaction(id).await
    }

    /// Creates an account on the server. Call
    /// [`Ledger::refresh_accounts`] to see it in the cache.
    ///
    /// # Errors
    ///
    /// Returns the server's error if the account is rejected.
    #[inline]
    pub async fn create_account(&self, account: &NewAccount) -> Result<Account> {
        self.client.create_account(account).await
    }

    /// Creates a category on the server. Call
    /// [`Ledger::refresh_categories`] to see it in the cache.
    ///
    /// # Errors
    ///
    /// Returns the server's error if the category is rejected.
    #[inline]
    pub async fn create_category(&self, category: &NewCategory) -> Result<Category> {
        self.client.create_category(category).await
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    /// Wraps items in a single-page envelope.
    fn single_page(data: serde_json::Value) -> serde_json::Value {
        serde_json::json!({
            "data": data,
            "meta": {"pagination": {"current_page": 1, "total_pages": 1, "total": 1}}
        })
    }

    fn accounts_body() -> serde_json::Value {
        single_page(serde_json::json!([
            {"id": "1", "attributes": {"name": "Checking", "type": "asset", "currency_code": "EUR", "current_balance": "1500.00"}},
            {"id": "7", "attributes": {"name": "Supermarket", "type": "expense", "currency_code": "EUR", "current_balance": "-50.00"}},
            {"id": "9", "attributes": {"name": "Employer", "type": "revenue", "currency_code": "EUR", "current_balance": "-2000.00"}}
        ]))
    }

    async fn mount_ok(server: &MockServer, endpoint: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    async fn mount_failure(server: &MockServer, endpoint: &str) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(500))
            .mount(server)
            .await;
    }

    /// Mounts every endpoint the bootstrap touches.
    async fn mount_bootstrap(server: &MockServer) {
        mount_ok(server, "/api/v1/accounts", accounts_body()).await;
        mount_ok(
            server,
            "/api/v1/categories",
            single_page(serde_json::json!([
                {"id": "4", "attributes": {"name": "Groceries", "notes": null}}
            ])),
        )
        .await;
        mount_ok(
            server,
            "/api/v1/currencies",
            single_page(serde_json::json!([
                {"id": "1", "attributes": {"code": "EUR", "name": "Euro", "symbol": "€", "primary": true}},
                {"id": "2", "attributes": {"code": "USD", "name": "US Dollar", "symbol": "$", "primary": false}}
            ])),
        )
        .await;
        mount_ok(
            server,
            "/api/v1/summary/basic",
            serde_json::json!({
                "spent-in-EUR": {"key": "spent-in-EUR", "monetary_value": "-50", "currency_code": "EUR"}
            }),
        )
        .await;
        mount_ok(
            server,
            "/api/v1/insight/expense/expense",
            serde_json::json!([
                {"id": "7", "name": "Supermarket", "difference": "-50.0", "difference_float": -50.0, "currency_code": "EUR"}
            ]),
        )
        .await;
        mount_ok(
            server,
            "/api/v1/insight/income/revenue",
            serde_json::json!([
                {"id": "9", "name": "Employer", "difference": "2000.0", "difference_float": 2000.0, "currency_code": "EUR"}
            ]),
        )
        .await;
    }

    fn ledger_for(server: &MockServer) -> Ledger {
        Ledger::builder()
            .api_key("test-token")
            .base_url(server.uri())
            .period(PeriodWindow::new(2024, 1).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn builder_defaults_to_current_month() {
        let ledger = Ledger::builder()
            .api_key("token")
            .base_url("http://localhost")
            .build()
            .unwrap();
        assert_eq!(*ledger.period(), PeriodWindow::current().unwrap());
    }

    #[test]
    fn builder_propagates_client_errors() {
        let result = Ledger::builder().base_url("http://localhost").build();
        assert!(matches!(result, Err(crate::FireflyError::MissingApiKey)));
    }

    #[tokio::test]
    async fn lookups_before_bootstrap_are_empty() {
        let server = MockServer::start().await;
        let ledger = ledger_for(&server);
        assert!(ledger.account_by_id(&AccountId::from("1")).is_none());
        assert!(ledger.category_by_name("Groceries").is_none());
        assert!(ledger.primary_currency().is_none());
        assert!(ledger.expense_delta(&AccountId::from("7")).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn bootstrap_populates_every_repository() {
        let server = MockServer::start().await;
        mount_bootstrap(&server).await;
        let mut ledger = ledger_for(&server);
        ledger.bootstrap().await.unwrap();

        assert_eq!(
            ledger.account_by_id(&AccountId::from("1")).map(|a| a.name.as_str()),
            Some("Checking")
        );
        assert_eq!(ledger.accounts_of_type(AccountType::Expense).len(), 1);
        assert!(ledger.account_by_name("employer").is_some());
        assert_eq!(
            ledger.category_by_id(&CategoryId::from("4")).map(|c| c.name.as_str()),
            Some("Groceries")
        );
        assert!(ledger.currency_by_code("usd").is_some());
        assert_eq!(ledger.primary_currency().map(|c| c.code.as_str()), Some("EUR"));
        assert!(ledger.summary().by_key("spent-in-EUR").is_some());
    }

    #[tokio::test]
    async fn expense_insights_are_positive_magnitudes() {
        let server = MockServer::start().await;
        mount_bootstrap(&server).await;
        let mut ledger = ledger_for(&server);
        ledger.bootstrap().await.unwrap();

        let supermarket = AccountId::from("7");
        assert!((ledger.expense_delta(&supermarket) - 50.0).abs() < f64::EPSILON);
        assert_eq!(ledger.account_by_id(&supermarket).unwrap().spent, Some(50.0));
        assert!((ledger.revenue_delta(&AccountId::from("9")) - 2000.0).abs() < f64::EPSILON);
        assert!(ledger.revenue_delta(&supermarket).abs() < f64::EPSILON);
        assert!(!ledger.insights().is_stale(InsightKind::Expense));
    }

    #[tokio::test]
    async fn insights_use_the_active_period() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/insight/expense/expense"))
            .and(query_param("start", "2024-02-01"))
            .and(query_param("end", "2024-02-29"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;
        let mut ledger = ledger_for(&server);
        ledger.advance_period().unwrap();
        ledger.compute_expense_insights().await;
        assert!(ledger.insights().is_loaded(InsightKind::Expense));
    }

    #[tokio::test]
    async fn bootstrap_failure_leaves_cache_empty() {
        let server = MockServer::start().await;
        mount_failure(&server, "/api/v1/currencies").await;
        mount_bootstrap(&server).await;
        let mut ledger = ledger_for(&server);

        let err = ledger.bootstrap().await.unwrap_err();
        assert!(matches!(err, crate::FireflyError::HttpStatus { status: 500 }));
        assert!(ledger.accounts().is_empty());
        assert!(ledger.categories().is_empty());
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_contents() {
        let server = MockServer::start().await;
        mount_bootstrap(&server).await;
        let mut ledger = ledger_for(&server);
        ledger.bootstrap().await.unwrap();

        server.reset().await;
        mount_failure(&server, "/api/v1/categories").await;
        assert!(ledger.refresh_categories().await.is_err());
        assert!(ledger.category_by_name("groceries").is_some());
    }

    #[tokio::test]
    async fn failed_insight_pass_is_swallowed_and_marked_stale() {
        let server = MockServer::start().await;
        mount_bootstrap(&server).await;
        let mut ledger = ledger_for(&server);
        ledger.bootstrap().await.unwrap();

        server.reset().await;
        mount_ok(&server, "/api/v1/accounts", accounts_body()).await;
        mount_failure(&server, "/api/v1/insight/expense/expense").await;
        ledger
            .refresh_accounts(AccountScope::Only(AccountType::Expense))
            .await
            .unwrap();

        let supermarket = AccountId::from("7");
        assert!(ledger.insights().is_stale(InsightKind::Expense));
        assert!((ledger.expense_delta(&supermarket) - 50.0).abs() < f64::EPSILON);
        assert_eq!(ledger.account_by_id(&supermarket).unwrap().spent, Some(50.0));
    }

    #[tokio::test]
    async fn asset_refresh_skips_insights() {
        let server = MockServer::start().await;
        mount_ok(&server, "/api/v1/accounts", accounts_body()).await;
        Mock::given(method("GET"))
            .and(path("/api/v1/insight/expense/expense"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(0)
            .mount(&server)
            .await;
        let mut ledger = ledger_for(&server);
        ledger
            .refresh_accounts(AccountScope::Only(AccountType::Asset))
            .await
            .unwrap();
        assert_eq!(ledger.accounts().len(), 1);
    }

    #[tokio::test]
    async fn transactions_are_reconstructed_for_the_period() {
        let server = MockServer::start().await;
        mount_bootstrap(&server).await;
        Mock::given(method("GET"))
            .and(path("/api/v1/transactions"))
            .and(query_param("start", "2024-01-01"))
            .and(query_param("end", "2024-01-31"))
            .respond_with(ResponseTemplate::new(200).set_body_json(single_page(serde_json::json!([{
                "id": "100",
                "attributes": {"group_title": null, "transactions": [{
                    "transaction_journal_id": "101",
                    "type": "withdrawal",
                    "date": "2024-01-10T00:00:00+01:00",
                    "amount": "50.00",
                    "currency_code": "EUR",
                    "description": "Groceries",
                    "source_id": "1",
                    "destination_id": "7",
                    "category_id": "4"
                }]}
            }]))))
            .expect(1)
            .mount(&server)
            .await;
        let mut ledger = ledger_for(&server);
        ledger.bootstrap().await.unwrap();

        let transactions = ledger.transactions().await.unwrap();
        assert_eq!(transactions.len(), 1);
        let tx = &transactions[0];
        assert_eq!(tx.source().name(), "Checking");
        assert_eq!(tx.destination().name(), "Supermarket");
        assert_eq!(tx.category().name(), "Groceries");
    }

    #[tokio::test]
    async fn mutations_do_not_touch_the_cache() {
        let server = MockServer::start().await;
        mount_bootstrap(&server).await;
        Mock::given(method("POST"))
            .and(path("/api/v1/categories"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {"id": "12", "attributes": {"name": "Travel"}}
            })))
            .expect(1)
            .mount(&server)
            .await;
        let mut ledger = ledger_for(&server);
        ledger.bootstrap().await.unwrap();

        let created = ledger
            .create_category(&NewCategory::new("Travel"))
            .await
            .unwrap();
        assert_eq!(created.id, CategoryId::from("12"));
        assert!(ledger.category_by_name("Travel").is_none());
    }

    #[test]
    fn period_navigation_round_trips() {
        let mut ledger = Ledger::builder()
            .api_key("token")
            .base_url("http://localhost")
            .period(PeriodWindow::new(2023, 12).unwrap())
            .build()
            .unwrap();
        let start = ledger.current_period_start();
        let end = ledger.current_period_end();
        ledger.advance_period().unwrap();
        assert_eq!(ledger.period().to_string(), "2024-01");
        ledger.retreat_period().unwrap();
        assert_eq!(ledger.current_period_start(), start);
        assert_eq!(ledger.current_period_end(), end);

        assert!(ledger.set_period(2024, 0).is_err());
        assert_eq!(ledger.current_period_start(), start);
        ledger.set_period(2022, 7).unwrap();
        assert_eq!(ledger.period().to_string(), "2022-07");
    }
}
