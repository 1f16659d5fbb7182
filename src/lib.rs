//! SpendFlow SDK for Rust.
//!
//! Provides a client for the SpendFlow personal finance backend. The
//! signed-in user's transactions are fetched over REST into a local
//! [`TransactionStore`], and the dashboard's derived views (summary totals,
//! chart series, the filtered history list) are computed from that store.
//!
//! # Quick start
//!
//! ```no_run
//! use spendflow_sdk::{SpendflowClient, StaticToken, User};
//! use spendflow_sdk::views::{SortOption, TransactionFilter};
//!
//! let mut client = SpendflowClient::builder()
//!     .base_url("https://api.spendflow.example")
//!     .token_provider(StaticToken::new("token"))
//!     .build()
//!     .unwrap();
//!
//! client.sign_in(User::new("user_123"));
//!
//! let summary = client.summary();
//! let recent = client.filtered(&TransactionFilter::new().sort(SortOption::Newest));
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod auth;
pub mod backend;
pub mod config;
pub mod dashboard;
pub mod display;
pub mod error;
pub mod export;
pub mod form;
pub mod models;
pub mod store;
pub mod views;

#[cfg(feature = "async")]
pub use async_client::AsyncSpendflowClient;
pub use auth::{EnvToken, Session, StaticToken, TokenProvider, User};
pub use backend::{Backend, HttpBackend};
pub use dashboard::{Action, Dashboard, DashboardState, DeleteOutcome, Modal, PendingSubmit};
pub use error::{Result, SpendflowError};
pub use form::{FormEdit, TransactionForm};
pub use models::{
    CategoryTotal, MonthlyTotal, Summary, Transaction, TransactionPayload, TransactionType,
};
pub use store::TransactionStore;

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use views::TransactionFilter;

// ---------------------------------------------------------------------------
// SpendflowClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`SpendflowClient`].
///
/// Use [`SpendflowClient::builder()`] for explicit configuration or
/// [`SpendflowClientBuilder::from_env()`] to pick up the backend URL and
/// token from the environment.
pub struct SpendflowClientBuilder {
    base_url: String,
    timeout: Duration,
    tokens: Option<Arc<dyn TokenProvider>>,
    user: Option<User>,
    backend: Option<Box<dyn Backend>>,
}

impl Default for SpendflowClientBuilder {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_BACKEND_URL.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            tokens: None,
            user: None,
            backend: None,
        }
    }
}

impl SpendflowClientBuilder {
    /// Start from `SPENDFLOW_BACKEND_URL` and a token read from
    /// `SPENDFLOW_TOKEN` on every call.
    pub fn from_env() -> Self {
        let mut builder = Self::default().token_provider(EnvToken::default());
        if let Ok(url) = std::env::var(config::BACKEND_URL_ENV) {
            if !url.trim().is_empty() {
                builder.base_url = url.trim().to_string();
            }
        }
        builder
    }

    /// Set the backend base URL. Defaults to `http://localhost:5000`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the HTTP request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set where bearer tokens come from.
    pub fn token_provider<T: TokenProvider + 'static>(mut self, tokens: T) -> Self {
        self.tokens = Some(Arc::new(tokens));
        self
    }

    /// Start with a user already signed in. The store stays empty until
    /// the first [`refresh`](SpendflowClient::refresh).
    pub fn user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    /// Use a custom transport instead of [`HttpBackend`]. The base URL and
    /// timeout are ignored when this is set.
    pub fn backend<B: Backend + 'static>(mut self, backend: B) -> Self {
        self.backend = Some(Box::new(backend));
        self
    }

    pub fn build(self) -> Result<SpendflowClient> {
        let backend: Box<dyn Backend> = match self.backend {
            Some(backend) => backend,
            None => Box::new(HttpBackend::new(&self.base_url, self.timeout)?),
        };
        let tokens: Arc<dyn TokenProvider> = match self.tokens {
            Some(tokens) => tokens,
            None => Arc::new(EnvToken::default()),
        };
        let mut session = Session::new(tokens);
        session.set_user(self.user);
        Ok(SpendflowClient {
            backend,
            session,
            store: TransactionStore::new(),
        })
    }
}

// ---------------------------------------------------------------------------
// SpendflowClient
// ---------------------------------------------------------------------------

/// The main entry point for the SpendFlow SDK.
///
/// Owns the backend transport, the session and the transaction store.
/// Every successful create, update or delete is followed by a full
/// re-fetch, so [`transactions()`](Self::transactions) always mirrors the
/// backend as of the last refresh.
pub struct SpendflowClient {
    backend: Box<dyn Backend>,
    session: Session,
    store: TransactionStore,
}

impl SpendflowClient {
    pub fn builder() -> SpendflowClientBuilder {
        SpendflowClientBuilder::default()
    }

    // -- Session -------------------------------------------------------------

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    /// Set the signed-in user and fetch their transactions.
    pub fn sign_in(&mut self, user: User) -> bool {
        tracing::info!(user_id = %user.id, "user signed in");
        self.session.set_user(Some(user));
        self.refresh()
    }

    /// Forget the user and drop their transactions.
    pub fn sign_out(&mut self) {
        self.session.set_user(None);
        self.store = TransactionStore::new();
    }

    // -- Store ---------------------------------------------------------------

    pub fn store(&self) -> &TransactionStore {
        &self.store
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.store.transactions()
    }

    /// Re-fetch the transaction list. See [`TransactionStore::refresh`].
    pub fn refresh(&mut self) -> bool {
        self.store.refresh(self.backend.as_ref(), &self.session)
    }

    // -- Mutations -----------------------------------------------------------

    /// Create a transaction, then refresh the store.
    ///
    /// Returns the backend's response body.
    pub fn create_transaction(&mut self, payload: &TransactionPayload) -> Result<serde_json::Value> {
        let token = self.session.token()?;
        let created = self.backend.create_transaction(payload, &token)?;
        tracing::info!(title = %payload.title, "transaction created");
        self.refresh();
        Ok(created)
    }

    /// Replace every field of transaction `id`, then refresh the store.
    pub fn update_transaction(
        &mut self,
        id: &str,
        payload: &TransactionPayload,
    ) -> Result<serde_json::Value> {
        let token = self.session.token()?;
        let updated = self.backend.update_transaction(id, payload, &token)?;
        tracing::info!(id, "transaction updated");
        self.refresh();
        Ok(updated)
    }

    /// Delete transaction `id`, then refresh the store.
    ///
    /// Whether an unknown id is an error is up to the backend; the local
    /// list always ends up as the backend reports it.
    pub fn delete_transaction(&mut self, id: &str) -> Result<()> {
        let token = self.session.token()?;
        self.backend.delete_transaction(id, &token)?;
        tracing::info!(id, "transaction deleted");
        self.refresh();
        Ok(())
    }

    // -- Export --------------------------------------------------------------

    /// Download the signed-in user's CSV export.
    ///
    /// The export endpoint is called without a bearer token.
    pub fn export_csv(&self) -> Result<Vec<u8>> {
        let user = self.session.require_user()?;
        self.backend.export_transactions(&user.id)
    }

    /// Download the CSV export and save it as `transactions.csv` in `dir`,
    /// or in the default download directory when `dir` is `None`.
    pub fn save_export(&self, dir: Option<&Path>) -> Result<PathBuf> {
        let csv = self.export_csv()?;
        let dir = dir
            .map(Path::to_path_buf)
            .unwrap_or_else(config::default_export_dir);
        export::save_csv(&dir, &csv)
    }

    // -- Derived views -------------------------------------------------------

    pub fn summary(&self) -> Summary {
        Summary::from_transactions(self.transactions())
    }

    pub fn category_totals(&self) -> Vec<CategoryTotal> {
        views::category_totals(self.transactions())
    }

    pub fn monthly_totals(&self) -> Vec<MonthlyTotal> {
        views::monthly_totals(self.transactions())
    }

    pub fn filtered(&self, filter: &TransactionFilter) -> Vec<&Transaction> {
        filter.apply(self.transactions())
    }
}

impl fmt::Display for SpendflowClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SpendflowClient(user={}, transactions={})",
            self.user().map(|u| u.id.as_str()).unwrap_or("<none>"),
            self.store.len()
        )
    }
}
