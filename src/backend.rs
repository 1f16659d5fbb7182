//! REST transport for the SpendFlow transaction API.
//!
//! [`Backend`] is the seam between the client and the network. The
//! [`HttpBackend`] implementation talks to the real service with a blocking
//! reqwest client that is built lazily on first use.

use std::sync::OnceLock;
use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::Url;
use serde_json::Value;

use crate::config;
use crate::error::{Result, SpendflowError};
use crate::models::TransactionPayload;

/// Operations the backend of record exposes for transactions.
///
/// Every call except [`export_transactions`](Backend::export_transactions)
/// carries a bearer token.
pub trait Backend: Send {
    /// `GET /api/transactions/user/{user_id}`; returns the raw JSON envelope.
    fn list_transactions(&self, user_id: &str, token: &str) -> Result<Value>;

    /// `POST /api/transactions`
    fn create_transaction(&self, payload: &TransactionPayload, token: &str) -> Result<Value>;

    /// `PUT /api/transactions/{id}`
    fn update_transaction(
        &self,
        id: &str,
        payload: &TransactionPayload,
        token: &str,
    ) -> Result<Value>;

    /// `DELETE /api/transactions/{id}`
    fn delete_transaction(&self, id: &str, token: &str) -> Result<()>;

    /// `GET /api/transactions/export/{user_id}`; returns the CSV bytes.
    fn export_transactions(&self, user_id: &str) -> Result<Vec<u8>>;
}

// ---------------------------------------------------------------------------
// HttpBackend
// ---------------------------------------------------------------------------

pub struct HttpBackend {
    base_url: Url,
    timeout: Duration,
    client: OnceLock<Client>,
}

impl HttpBackend {
    /// Create a backend rooted at `base_url` (e.g. `https://api.example.com`).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            SpendflowError::InvalidArgument(format!("invalid backend URL {base_url:?}: {e}"))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(SpendflowError::InvalidArgument(format!(
                "backend URL cannot be used as a base: {base_url}"
            )));
        }
        Ok(Self {
            base_url,
            timeout,
            client: OnceLock::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Lazy HTTP client, created on first use.
    fn client(&self) -> Result<&Client> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }
        let client = Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(self.client.get_or_init(|| client))
    }

    /// Join path segments onto the base URL, percent-encoding each one.
    pub fn endpoint(&self, segments: &[String]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                SpendflowError::InvalidArgument(format!(
                    "backend URL cannot be used as a base: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn send(&self, request: RequestBuilder) -> Result<Response> {
        let resp = request.send()?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().unwrap_or_default();
        Err(SpendflowError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

impl Backend for HttpBackend {
    fn list_transactions(&self, user_id: &str, token: &str) -> Result<Value> {
        let url = self.endpoint(&config::user_transactions_path(user_id))?;
        tracing::debug!(%url, "fetching transactions");
        let resp = self.send(self.client()?.get(url).bearer_auth(token))?;
        Ok(resp.json()?)
    }

    fn create_transaction(&self, payload: &TransactionPayload, token: &str) -> Result<Value> {
        let url = self.endpoint(&config::transactions_path())?;
        tracing::debug!(%url, "creating transaction");
        let resp = self.send(self.client()?.post(url).bearer_auth(token).json(payload))?;
        Ok(resp.json()?)
    }

    fn update_transaction(
        &self,
        id: &str,
        payload: &TransactionPayload,
        token: &str,
    ) -> Result<Value> {
        let url = self.endpoint(&config::transaction_path(id))?;
        tracing::debug!(%url, "updating transaction");
        let resp = self.send(self.client()?.put(url).bearer_auth(token).json(payload))?;
        Ok(resp.json()?)
    }

    fn delete_transaction(&self, id: &str, token: &str) -> Result<()> {
        let url = self.endpoint(&config::transaction_path(id))?;
        tracing::debug!(%url, "deleting transaction");
        self.send(self.client()?.delete(url).bearer_auth(token))?;
        Ok(())
    }

    fn export_transactions(&self, user_id: &str) -> Result<Vec<u8>> {
        let url = self.endpoint(&config::export_path(user_id))?;
        tracing::debug!(%url, "downloading export");
        let resp = self.send(self.client()?.get(url))?;
        Ok(resp.bytes()?.to_vec())
    }
}
