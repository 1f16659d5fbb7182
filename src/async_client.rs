//! Async wrapper around [`SpendflowClient`] for use in async runtimes (Tokio, etc.).
//!
//! Runs every client operation on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], so network calls never stall the
//! caller's event loop. There is no cancellation: dropping a returned
//! future does not abort a request that has already started.
//!
//! # Example
//!
//! ```no_run
//! use spendflow_sdk::{AsyncSpendflowClient, SpendflowClient, User};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = SpendflowClient::builder().build().unwrap();
//!     let client = AsyncSpendflowClient::new(client);
//!
//!     client.sign_in(User::new("user_123")).await.unwrap();
//!     let summary = client.run(|c| Ok(c.summary())).await.unwrap();
//! }
//! ```

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::auth::User;
use crate::error::{Result, SpendflowError};
use crate::models::{Transaction, TransactionPayload};
use crate::SpendflowClient;

/// Async wrapper around [`SpendflowClient`].
///
/// The client is shared behind a [`Mutex`], so operations issued
/// concurrently run one after another.
#[derive(Clone)]
pub struct AsyncSpendflowClient {
    inner: Arc<Mutex<SpendflowClient>>,
}

impl AsyncSpendflowClient {
    pub fn new(client: SpendflowClient) -> Self {
        Self {
            inner: Arc::new(Mutex::new(client)),
        }
    }

    /// Run a sync client operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut SpendflowClient) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let client = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = client
                .lock()
                .map_err(|_| SpendflowError::InvalidArgument("client lock poisoned".into()))?;
            f(&mut guard)
        })
        .await
        .map_err(|e| SpendflowError::InvalidArgument(format!("Task join error: {e}")))?
    }

    pub async fn sign_in(&self, user: User) -> Result<bool> {
        self.run(move |c| Ok(c.sign_in(user))).await
    }

    pub async fn refresh(&self) -> Result<bool> {
        self.run(|c| Ok(c.refresh())).await
    }

    /// Snapshot of the store as of the last refresh.
    pub async fn transactions(&self) -> Result<Vec<Transaction>> {
        self.run(|c| Ok(c.transactions().to_vec())).await
    }

    pub async fn create_transaction(&self, payload: TransactionPayload) -> Result<serde_json::Value> {
        self.run(move |c| c.create_transaction(&payload)).await
    }

    pub async fn update_transaction(
        &self,
        id: String,
        payload: TransactionPayload,
    ) -> Result<serde_json::Value> {
        self.run(move |c| c.update_transaction(&id, &payload)).await
    }

    pub async fn delete_transaction(&self, id: String) -> Result<()> {
        self.run(move |c| c.delete_transaction(&id)).await
    }

    pub async fn save_export(&self, dir: Option<PathBuf>) -> Result<PathBuf> {
        self.run(move |c| c.save_export(dir.as_deref())).await
    }
}
