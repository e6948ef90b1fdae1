//! Async HTTP client for the ledger API.

use core::time::Duration;
use std::collections::HashMap;

use chrono::NaiveDate;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use secrecy::{ExposeSecret as _, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::envelope::{decode_envelope, decode_json, expect_no_content};
use super::pagination::{DEFAULT_MAX_PAGES, Page, collect_pages};
use super::{
    ACCOUNTS_PATH, API_PREFIX, CATEGORIES_PATH, CURRENCIES_PATH, EXPENSE_INSIGHT_PATH,
    REVENUE_INSIGHT_PATH, SEARCH_TRANSACTIONS_PATH, SUMMARY_PATH, TRANSACTIONS_PATH,
};
use crate::error::{FireflyError, Result};
use crate::models::{
    Account, AccountRecord, AccountScope, Category, CategoryRecord, Currency, CurrencyRecord,
    Envelope, InsightEntry, JournalEntry, NewAccount, NewCategory, NewTransaction, SummaryEntry,
    TransactionId, UpdateTransaction,
};

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// JSON media type sent in `Accept` and `Content-Type`.
const JSON_MEDIA_TYPE: &str = "application/json";

/// Query parameters of one request.
type Query<'query> = [(&'query str, String)];

/// Formats a date the way the API expects it in query strings.
fn query_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Builder for constructing a [`FireflyClient`].
#[derive(Debug)]
pub struct FireflyClientBuilder {
    /// Personal access token for API authentication.
    api_key: Option<SecretString>,
    /// Server URL without the `/api/v1` suffix.
    base_url: Option<String>,
    /// Per-request timeout.
    timeout: Duration,
    /// Pagination safety ceiling.
    max_pages: u32,
}

impl FireflyClientBuilder {
    /// Sets the personal access token used as bearer credential.
    #[inline]
    #[must_use]
    pub fn api_key<T: Into<String>>(mut self, api_key: T) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Sets the server URL, e.g. `https://firefly.example.com`.
    ///
    /// A trailing slash and a trailing `/api/v1` are accepted.
    #[inline]
    #[must_use]
    pub fn base_url<T: Into<String>>(mut self, url: T) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the per-request timeout (default 30 seconds).
    #[inline]
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the pagination safety ceiling (default
    /// [`DEFAULT_MAX_PAGES`]).
    #[inline]
    #[must_use]
    pub const fn max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`FireflyError::MissingApiKey`] or
    /// [`FireflyError::MissingBaseUrl`] if either was not provided,
    /// [`FireflyError::InvalidUrl`] if the base URL does not parse, and
    /// [`FireflyError::Transport`] if the HTTP client fails to build.
    #[inline]
    #[tracing::instrument(skip_all)]
    pub fn build(self) -> Result<FireflyClient> {
        let api_key = self.api_key.ok_or(FireflyError::MissingApiKey)?;
        let raw_url = self.base_url.ok_or(FireflyError::MissingBaseUrl)?;
        let trimmed = raw_url.trim_end_matches('/');
        let server = trimmed.strip_suffix(API_PREFIX).unwrap_or(trimmed);
        let _parsed = Url::parse(server)?;
        let base_url = format!("{server}{API_PREFIX}");
        tracing::debug!(base_url = %base_url, timeout = ?self.timeout, "building client");
        let http = reqwest::Client::builder().timeout(self.timeout).build()?;

        Ok(FireflyClient {
            http,
            api_key,
            base_url,
            max_pages: self.max_pages,
        })
    }
}

/// Async client for the ledger API.
///
/// Use [`FireflyClient::builder()`] to construct an instance.
#[derive(Debug)]
pub struct FireflyClient {
    /// Underlying HTTP client.
    http: reqwest::Client,
    /// Bearer access token.
    api_key: SecretString,
    /// API root, including `/api/v1`.
    base_url: String,
    /// Pagination safety ceiling.
    max_pages: u32,
}

impl FireflyClient {
    /// Creates a new builder for configuring the client.
    #[inline]
    #[must_use]
    pub const fn builder() -> FireflyClientBuilder {
        FireflyClientBuilder {
            api_key: None,
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Returns the API root this client talks to.
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches every account of the given scope.
    ///
    /// # Errors
    ///
    /// Returns an error if any page fails to load or decode.
    #[inline]
    #[tracing::instrument(skip_all, fields(scope = scope.query_value()))]
    pub async fn accounts(&self, scope: AccountScope) -> Result<Vec<Account>> {
        let query = [("type", scope.query_value().to_owned())];
        let records: Vec<AccountRecord> = self.get_list(ACCOUNTS_PATH, &query).await?;
        Ok(records.into_iter().map(Account::from).collect())
    }

    /// Fetches every category.
    ///
    /// # Errors
    ///
    /// Returns an error if any page fails to load or decode.
    #[inline]
    #[tracing::instrument(skip_all)]
    pub async fn categories(&self) -> Result<Vec<Category>> {
        let records: Vec<CategoryRecord> = self.get_list(CATEGORIES_PATH, &[]).await?;
        Ok(records.into_iter().map(Category::from).collect())
    }

    /// Fetches every currency.
    ///
    /// # Errors
    ///
    /// Returns an error if any page fails to load or decode.
    #[inline]
    #[tracing::instrument(skip_all)]
    pub async fn currencies(&self) -> Result<Vec<Currency>> {
        let records: Vec<CurrencyRecord> = self.get_list(CURRENCIES_PATH, &[]).await?;
        Ok(records.into_iter().map(Currency::from).collect())
    }

    /// Fetches every journal entry booked between `start` and `end`
    /// (inclusive).
    ///
    /// # Errors
    ///
    /// Returns an error if any page fails to load or decode.
    #[inline]
    #[tracing::instrument(skip_all, fields(start = %start, end = %end))]
    pub async fn transactions(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<JournalEntry>> {
        let query = [
            ("start", query_date(start)),
            ("end", query_date(end)),
            ("type", "all".to_owned()),
        ];
        self.get_list(TRANSACTIONS_PATH, &query).await
    }

    /// Runs a free-text transaction search.
    ///
    /// # Errors
    ///
    /// Returns an error if any page fails to load or decode.
    #[inline]
    #[tracing::instrument(skip_all)]
    pub async fn search_transactions(&self, query: &str) -> Result<Vec<JournalEntry>> {
        let params = [("query", query.to_owned())];
        self.get_list(SEARCH_TRANSACTIONS_PATH, &params).await
    }

    /// Fetches spending per expense account between `start` and `end`.
    ///
    /// Deltas are returned as sent: outflows are negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[inline]
    #[tracing::instrument(skip_all, fields(start = %start, end = %end))]
    pub async fn expense_insight(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<InsightEntry>> {
        self.get_json(EXPENSE_INSIGHT_PATH, &Self::range_query(start, end))
            .await
    }

    /// Fetches income per revenue account between `start` and `end`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[inline]
    #[tracing::instrument(skip_all, fields(start = %start, end = %end))]
    pub async fn revenue_insight(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<InsightEntry>> {
        self.get_json(REVENUE_INSIGHT_PATH, &Self::range_query(start, end))
            .await
    }

    /// Fetches the basic summary figures between `start` and `end`,
    /// ordered by key.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    #[inline]
    #[tracing::instrument(skip_all, fields(start = %start, end = %end))]
    pub async fn basic_summary(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<SummaryEntry>> {
        let map: HashMap<String, SummaryEntry> = self
            .get_json(SUMMARY_PATH, &Self::range_query(start, end))
            .await?;
        let mut entries: Vec<SummaryEntry> = map.into_values().collect();
        entries.sort_by(|left, right| left.key.cmp(&right.key));
        Ok(entries)
    }

    /// Creates a transaction and returns the stored journal entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the transaction.
    #[inline]
    #[tracing::instrument(skip_all)]
    pub async fn create_transaction(&self, transaction: &NewTransaction) -> Result<JournalEntry> {
        self.send_item(Method::POST, TRANSACTIONS_PATH, transaction)
            .await
    }

    /// Updates the transaction group `id`; splits are addressed by their
    /// journal id.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the update.
    #[inline]
    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn update_transaction(
        &self,
        id: &TransactionId,
        update: &UpdateTransaction,
    ) -> Result<JournalEntry> {
        let path = format!("{TRANSACTIONS_PATH}/{id}");
        self.send_item(Method::PUT, &path, update).await
    }

    /// Deletes the transaction group `id`.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers `204 No Content`.
    #[inline]
    #[tracing::instrument(skip_all, fields(id = %id))]
    pub async fn delete_transaction(&self, id: &TransactionId) -> Result<()> {
        let path = format!("{TRANSACTIONS_PATH}/{id}");
        let (status, body) = Self::execute(self.request(Method::DELETE, &path, &[])?).await?;
        expect_no_content(status, &body)
    }

    /// Creates an account.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the account.
    #[inline]
    #[tracing::instrument(skip_all)]
    pub async fn create_account(&self, account: &NewAccount) -> Result<Account> {
        let record: AccountRecord = self.send_item(Method::POST, ACCOUNTS_PATH, account).await?;
        Ok(Account::from(record))
    }

    /// Creates a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the category.
    #[inline]
    #[tracing::instrument(skip_all)]
    pub async fn create_category(&self, category: &NewCategory) -> Result<Category> {
        let record: CategoryRecord = self
            .send_item(Method::POST, CATEGORIES_PATH, category)
            .await?;
        Ok(Category::from(record))
    }

    /// Builds the `start`/`end` query of period-scoped endpoints.
    fn range_query(start: NaiveDate, end: NaiveDate) -> [(&'static str, String); 2] {
        [("start", query_date(start)), ("end", query_date(end))]
    }

    /// Builds an authenticated request for `path` with the given query.
    fn request(
        &self,
        method: Method,
        path: &str,
        query: &Query<'_>,
    ) -> Result<reqwest::RequestBuilder> {
        let raw = format!("{}{path}", self.base_url);
        let url = if query.is_empty() {
            Url::parse(&raw)?
        } else {
            Url::parse_with_params(&raw, query)?
        };
        tracing::trace!(method = %method, url = %url, "building request");
        Ok(self
            .http
            .request(method, url)
            .header(ACCEPT, JSON_MEDIA_TYPE)
            .header(CONTENT_TYPE, JSON_MEDIA_TYPE)
            .bearer_auth(self.api_key.expose_secret()))
    }

    /// Sends a request and reads the whole body.
    async fn execute(request: reqwest::RequestBuilder) -> Result<(StatusCode, String)> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(status = %status, body_len = body.len(), "received response");
        Ok((status, body))
    }

    /// Fetches one enveloped page.
    async fn get_envelope(&self, path: &str, query: &Query<'_>) -> Result<Envelope> {
        let (status, body) = Self::execute(self.request(Method::GET, path, query)?).await?;
        decode_envelope(status, StatusCode::OK, &body)
    }

    /// Fetches every page of a list endpoint.
    #[tracing::instrument(skip_all, fields(path = %path))]
    async fn get_list<T: DeserializeOwned>(&self, path: &str, query: &Query<'_>) -> Result<Vec<T>> {
        collect_pages(path, self.max_pages, move |page| {
            let mut paged = query.to_vec();
            paged.push(("page", page.to_string()));
            async move {
                let envelope = self.get_envelope(path, &paged).await?;
                Ok(Page {
                    items: envelope.items()?,
                    pagination: envelope.meta.pagination,
                })
            }
        })
        .await
    }

    /// Fetches a non-enveloped JSON body.
    #[tracing::instrument(skip_all, fields(path = %path))]
    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &Query<'_>) -> Result<T> {
        let (status, body) = Self::execute(self.request(Method::GET, path, query)?).await?;
        decode_json(status, StatusCode::OK, &body)
    }

    /// Sends a JSON body and decodes the single item of the enveloped
    /// response.
    #[tracing::instrument(skip_all, fields(method = %method, path = %path))]
    async fn send_item<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.request(method, path, &[])?.json(body);
        let (status, text) = Self::execute(request).await?;
        let envelope = decode_envelope(status, StatusCode::OK, &text)?;
        Ok(envelope.item()?)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::models::{AccountId, AccountType, NewSplit, TransactionType};

    /// Builds a client pointed at the mock server.
    fn client_for(server: &MockServer) -> FireflyClient {
        FireflyClient::builder()
            .api_key("test-token")
            .base_url(server.uri())
            .build()
            .unwrap()
    }

    /// Builds one envelope page of category records.
    fn category_page(ids: &[u32], current_page: u32, total_pages: u32) -> serde_json::Value {
        let data: Vec<serde_json::Value> = ids
            .iter()
            .map(|id| {
                serde_json::json!({
                    "type": "categories",
                    "id": id.to_string(),
                    "attributes": {"name": format!("Category {id}")}
                })
            })
            .collect();
        serde_json::json!({
            "data": data,
            "meta": {"pagination": {
                "current_page": current_page,
                "total_pages": total_pages,
                "total": 100
            }}
        })
    }

    #[test]
    fn builder_requires_api_key() {
        let result = FireflyClient::builder().base_url("http://localhost").build();
        assert!(matches!(result, Err(FireflyError::MissingApiKey)));
    }

    #[test]
    fn builder_requires_base_url() {
        let result = FireflyClient::builder().api_key("token").build();
        assert!(matches!(result, Err(FireflyError::MissingBaseUrl)));
    }

    #[test]
    fn builder_rejects_invalid_url() {
        let result = FireflyClient::builder()
            .api_key("token")
            .base_url("not a url")
            .build();
        assert!(matches!(result, Err(FireflyError::InvalidUrl(_))));
    }

    #[test]
    fn builder_normalizes_base_url() {
        for raw in [
            "https://demo.firefly-iii.org",
            "https://demo.firefly-iii.org/",
            "https://demo.firefly-iii.org/api/v1/",
        ] {
            let client = FireflyClient::builder()
                .api_key("token")
                .base_url(raw)
                .build()
                .unwrap();
            assert_eq!(client.base_url(), "https://demo.firefly-iii.org/api/v1");
        }
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let client = FireflyClient::builder()
            .api_key("super-secret")
            .base_url("http://localhost")
            .build()
            .unwrap();
        assert!(!format!("{client:?}").contains("super-secret"));
    }

    #[tokio::test]
    async fn sends_json_and_bearer_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/categories"))
            .and(header("Authorization", "Bearer test-token"))
            .and(header("Accept", "application/json"))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(category_page(&[1], 1, 1)))
            .expect(1)
            .mount(&server)
            .await;

        let categories = client_for(&server).categories().await.unwrap();
        assert_eq!(categories.len(), 1);
    }

    #[tokio::test]
    async fn paginates_until_empty_page() {
        let server = MockServer::start().await;
        for (page, ids) in [(1_u32, vec![1_u32, 2]), (2, vec![3]), (3, vec![])] {
            Mock::given(method("GET"))
                .and(path("/api/v1/categories"))
                .and(query_param("page", page.to_string()))
                .respond_with(
                    ResponseTemplate::new(200).set_body_json(category_page(&ids, page, 50)),
                )
                .expect(1)
                .mount(&server)
                .await;
        }

        let categories = client_for(&server).categories().await.unwrap();
        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Category 1", "Category 2", "Category 3"]);
    }

    #[tokio::test]
    async fn accounts_pass_type_filter() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/accounts"))
            .and(query_param("type", "expense"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{
                    "id": "7",
                    "attributes": {
                        "name": "Supermarket",
                        "type": "expense",
                        "currency_code": "EUR",
                        "current_balance": "-12.00"
                    }
                }],
                "meta": {"pagination": {"current_page": 1, "total_pages": 1, "total": 1}}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let accounts = client_for(&server)
            .accounts(AccountScope::Only(AccountType::Expense))
            .await
            .unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].kind, AccountType::Expense);
        assert!((accounts[0].balance + 12.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn not_found_message_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/currencies"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(serde_json::json!({"message": "Resource not found"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).currencies().await.unwrap_err();
        assert!(
            matches!(err, FireflyError::Api { ref message } if message == "Resource not found"),
            "got {err:?}"
        );
    }

    #[tokio::test]
    async fn server_error_without_message_is_http_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/currencies"))
            .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
            .mount(&server)
            .await;

        let err = client_for(&server).currencies().await.unwrap_err();
        assert!(matches!(err, FireflyError::HttpStatus { status: 500 }));
    }

    #[tokio::test]
    async fn slow_response_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/categories"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(category_page(&[1], 1, 1))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client = FireflyClient::builder()
            .api_key("test-token")
            .base_url(server.uri())
            .timeout(Duration::from_millis(50))
            .build()
            .unwrap();
        let err = client.categories().await.unwrap_err();
        assert!(matches!(err, FireflyError::Timeout(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn page_ceiling_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/categories"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(category_page(&[1], 1, 1_000_000)),
            )
            .expect(3)
            .mount(&server)
            .await;

        let client = FireflyClient::builder()
            .api_key("test-token")
            .base_url(server.uri())
            .max_pages(3)
            .build()
            .unwrap();
        let err = client.categories().await.unwrap_err();
        assert!(matches!(err, FireflyError::PageLimitExceeded { limit: 3, .. }));
    }

    #[tokio::test]
    async fn transactions_use_date_range() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/transactions"))
            .and(query_param("start", "2024-02-01"))
            .and(query_param("end", "2024-02-29"))
            .and(query_param("type", "all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [],
                "meta": {"pagination": {"current_page": 1, "total_pages": 1, "total": 0}}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let entries = client_for(&server)
            .transactions(
                NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            )
            .await
            .unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn summary_is_sorted_by_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/summary/basic"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "spent-in-EUR": {"key": "spent-in-EUR", "monetary_value": "-20", "currency_code": "EUR"},
                "balance-in-EUR": {"key": "balance-in-EUR", "monetary_value": "100", "currency_code": "EUR"}
            })))
            .mount(&server)
            .await;

        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let entries = client_for(&server).basic_summary(day, day).await.unwrap();
        let keys: Vec<&str> = entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["balance-in-EUR", "spent-in-EUR"]);
    }

    #[tokio::test]
    async fn create_transaction_posts_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/transactions"))
            .and(body_partial_json(serde_json::json!({
                "transactions": [{"type": "withdrawal", "amount": "4.5", "description": "Tea"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {
                    "id": "88",
                    "attributes": {"group_title": null, "transactions": [{
                        "transaction_journal_id": "90",
                        "type": "withdrawal",
                        "date": "2024-01-02T00:00:00+00:00",
                        "amount": "4.5",
                        "description": "Tea",
                        "source_id": "1",
                        "destination_id": "2"
                    }]}
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let payload = NewTransaction::single(
            NewSplit::new(
                TransactionType::Withdrawal,
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                4.5,
                "Tea",
            )
            .source(AccountId::from("1")),
        );
        let entry = client_for(&server)
            .create_transaction(&payload)
            .await
            .unwrap();
        assert_eq!(entry.id.as_inner(), "88");
    }

    #[tokio::test]
    async fn create_with_validation_message_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/categories"))
            .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
                "message": "The given data was invalid.",
                "errors": {"name": ["This name is already in use."]}
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .create_category(&NewCategory::new("Food"))
            .await
            .unwrap_err();
        assert!(matches!(err, FireflyError::Api { ref message } if message == "The given data was invalid."));
    }

    #[tokio::test]
    async fn delete_expects_no_content() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/v1/transactions/5"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/v1/transactions/6"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = client_for(&server);
        client
            .delete_transaction(&TransactionId::from("5"))
            .await
            .unwrap();
        let err = client
            .delete_transaction(&TransactionId::from("6"))
            .await
            .unwrap_err();
        assert!(matches!(err, FireflyError::HttpStatus { status: 200 }));
    }
}
