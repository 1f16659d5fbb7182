//! Client-side copy of the signed-in user's transactions.
//!
//! The backend is the source of record. The store is only ever replaced
//! wholesale by [`TransactionStore::refresh`]; mutations elsewhere in the
//! crate go to the backend first and are followed by a full refresh.

use serde_json::Value;

use crate::auth::Session;
use crate::backend::Backend;
use crate::error::Result;
use crate::models::Transaction;

#[derive(Debug, Default, Clone)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|tx| tx.id == id)
    }

    /// Re-fetch the full list for the session's user.
    ///
    /// Returns `true` if the store was replaced. Nothing happens while no
    /// user is signed in. On any failure the previous list is kept and the
    /// error is logged.
    pub fn refresh(&mut self, backend: &dyn Backend, session: &Session) -> bool {
        let Some(user) = session.user() else {
            tracing::debug!("no signed-in user; skipping transaction fetch");
            return false;
        };

        match fetch(backend, session, &user.id) {
            Ok(transactions) => {
                tracing::debug!(count = transactions.len(), "transaction store refreshed");
                self.transactions = transactions;
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching transactions");
                false
            }
        }
    }
}

fn fetch(backend: &dyn Backend, session: &Session, user_id: &str) -> Result<Vec<Transaction>> {
    let token = session.token()?;
    let envelope = backend.list_transactions(user_id, &token)?;
    Ok(parse_envelope(envelope))
}

/// Extract the transactions from a `{ "data": [...] }` response.
///
/// A missing or malformed `data` field yields an empty list. Records that
/// fail to deserialize are skipped.
pub fn parse_envelope(envelope: Value) -> Vec<Transaction> {
    let records = match envelope {
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(records)) => records,
            _ => {
                tracing::warn!("transaction response has no data array");
                return Vec::new();
            }
        },
        _ => {
            tracing::warn!("transaction response is not a JSON object");
            return Vec::new();
        }
    };

    records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<Transaction>(record) {
            Ok(tx) => Some(tx),
            Err(e) => {
                tracing::warn!(error = %e, "skipping malformed transaction record");
                None
            }
        })
        .collect()
}
