//! Shared test fixtures for the SpendFlow SDK integration tests.
//!
//! Provides an in-memory [`FakeBackend`] that behaves like the REST service
//! (assigns ids, stores records, serves the `{ "data": [...] }` envelope)
//! and records every call it receives, plus a small sample data set.

#![allow(dead_code)]

use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::{json, Value};
use spendflow_sdk::{
    Backend, Result, SpendflowClient, SpendflowError, StaticToken, Transaction,
    TransactionPayload, User,
};

pub const TOKEN: &str = "test-token";
pub const USER_ID: &str = "user_1";

#[derive(Debug, Default)]
pub struct FakeState {
    pub records: Vec<Value>,
    pub next_id: u32,
    /// Replaces the list response body when set.
    pub list_body: Option<Value>,
    pub fail_list: bool,
    pub fail_mutations: bool,
    pub fail_export: bool,
    pub export_csv: Vec<u8>,
    /// `"METHOD path"` for every call, in order.
    pub calls: Vec<String>,
    /// Bearer token seen on each authenticated call.
    pub tokens: Vec<String>,
}

/// Cloneable handle; clones share the same state so a test can keep one
/// after handing the other to the client builder.
#[derive(Debug, Clone, Default)]
pub struct FakeBackend {
    state: Arc<Mutex<FakeState>>,
}

impl FakeBackend {
    pub fn with_records(records: Vec<Value>) -> Self {
        let backend = Self::default();
        {
            let mut state = backend.state();
            state.next_id = records.len() as u32 + 1;
            state.records = records;
            state.export_csv = b"title,amount\nSalary,1000\n".to_vec();
        }
        backend
    }

    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    pub fn calls(&self) -> Vec<String> {
        self.state().calls.clone()
    }
}

fn failure() -> SpendflowError {
    SpendflowError::Status {
        status: 500,
        body: "{\"message\":\"boom\"}".into(),
    }
}

fn record_id(record: &Value) -> &Value {
    record.get("id").unwrap_or(&record["_id"])
}

fn record_from_payload(id: &str, payload: &TransactionPayload) -> Value {
    let mut record = serde_json::to_value(payload).unwrap();
    record["id"] = json!(id);
    record
}

impl Backend for FakeBackend {
    fn list_transactions(&self, user_id: &str, token: &str) -> Result<Value> {
        let mut state = self.state();
        state.calls.push(format!("GET /api/transactions/user/{user_id}"));
        state.tokens.push(token.to_string());
        if state.fail_list {
            return Err(failure());
        }
        if let Some(body) = &state.list_body {
            return Ok(body.clone());
        }
        let data: Vec<Value> = state
            .records
            .iter()
            .filter(|r| r["userId"] == user_id)
            .cloned()
            .collect();
        Ok(json!({ "data": data }))
    }

    fn create_transaction(&self, payload: &TransactionPayload, token: &str) -> Result<Value> {
        let mut state = self.state();
        state.calls.push("POST /api/transactions".into());
        state.tokens.push(token.to_string());
        if state.fail_mutations {
            return Err(failure());
        }
        let id = format!("tx-{}", state.next_id);
        state.next_id += 1;
        let record = record_from_payload(&id, payload);
        state.records.push(record.clone());
        Ok(json!({ "data": record }))
    }

    fn update_transaction(
        &self,
        id: &str,
        payload: &TransactionPayload,
        token: &str,
    ) -> Result<Value> {
        let mut state = self.state();
        state.calls.push(format!("PUT /api/transactions/{id}"));
        state.tokens.push(token.to_string());
        if state.fail_mutations {
            return Err(failure());
        }
        let record = record_from_payload(id, payload);
        match state.records.iter_mut().find(|r| record_id(r) == id) {
            Some(existing) => {
                *existing = record.clone();
                Ok(json!({ "data": record }))
            }
            None => Err(SpendflowError::Status {
                status: 404,
                body: "not found".into(),
            }),
        }
    }

    fn delete_transaction(&self, id: &str, token: &str) -> Result<()> {
        let mut state = self.state();
        state.calls.push(format!("DELETE /api/transactions/{id}"));
        state.tokens.push(token.to_string());
        if state.fail_mutations {
            return Err(failure());
        }
        state.records.retain(|r| record_id(r) != id);
        Ok(())
    }

    fn export_transactions(&self, user_id: &str) -> Result<Vec<u8>> {
        let mut state = self.state();
        state.calls.push(format!("GET /api/transactions/export/{user_id}"));
        if state.fail_export {
            return Err(failure());
        }
        Ok(state.export_csv.clone())
    }
}

// ---------------------------------------------------------------------------
// Sample data
// ---------------------------------------------------------------------------

/// Six records across three months and two years, in backend wire format.
pub fn sample_records() -> Vec<Value> {
    vec![
        json!({"id": "tx-1", "title": "Salary", "amount": 1000.0, "type": "income",
               "category": "Salary", "date": "2024-01-05", "userId": USER_ID}),
        json!({"id": "tx-2", "title": "Groceries", "amount": 200.0, "type": "expense",
               "category": "Food & Dining", "date": "2024-01-10",
               "description": "weekly shop", "userId": USER_ID}),
        json!({"_id": "tx-3", "title": "Rent", "amount": 800.0, "type": "expense",
               "category": "Bills & Utilities", "date": "2024-02-01T00:00:00.000Z",
               "userId": USER_ID}),
        json!({"id": "tx-4", "title": "Freelance", "amount": 300.0, "type": "income",
               "category": "Salary", "date": "2024-02-15", "userId": USER_ID}),
        json!({"id": "tx-5", "title": "Bus pass", "amount": 50.0, "type": "expense",
               "category": "Transportation", "date": "2024-03-03", "userId": USER_ID}),
        json!({"id": "tx-6", "title": "Dinner out", "amount": 120.0, "type": "expense",
               "category": "Food & Dining", "date": "2023-01-20", "userId": USER_ID}),
    ]
}

pub fn sample_transactions() -> Vec<Transaction> {
    sample_records()
        .into_iter()
        .map(|r| serde_json::from_value(r).unwrap())
        .collect()
}

/// Build a transaction directly, for tests that need precise control.
pub fn tx(id: &str, title: &str, amount: f64, kind: &str, category: &str, date: &str) -> Transaction {
    serde_json::from_value(json!({
        "id": id, "title": title, "amount": amount, "type": kind,
        "category": category, "date": date, "userId": USER_ID
    }))
    .unwrap()
}

/// A client on `backend` with a static token and no user signed in yet.
pub fn client_for(backend: &FakeBackend) -> SpendflowClient {
    SpendflowClient::builder()
        .backend(backend.clone())
        .token_provider(StaticToken::new(TOKEN))
        .build()
        .unwrap()
}

/// A client on `backend` with the sample user signed in and the store loaded.
pub fn signed_in_client(backend: &FakeBackend) -> SpendflowClient {
    let mut client = client_for(backend);
    assert!(client.sign_in(User::new(USER_ID).with_first_name("Asha")));
    client
}
