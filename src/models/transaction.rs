use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SpendflowError;

// ---------------------------------------------------------------------------
// TransactionType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = SpendflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(SpendflowError::InvalidArgument(format!(
                "unknown transaction type: {other}"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Transaction — a record as returned by the backend
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "TransactionRecord")]
pub struct Transaction {
    pub id: String,
    pub title: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub user_id: String,
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }
}

/// Wire shape of a backend record. Either `id` or Mongo's `_id` may carry
/// the identifier; `id` wins when both are present.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransactionRecord {
    #[serde(default)]
    id: Option<String>,
    #[serde(default, rename = "_id")]
    mongo_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    title: String,
    amount: f64,
    #[serde(rename = "type")]
    kind: TransactionType,
    #[serde(default, deserialize_with = "null_as_empty")]
    category: String,
    #[serde(deserialize_with = "deserialize_date")]
    date: NaiveDate,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    user_id: String,
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = SpendflowError;

    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        let id = record
            .id
            .or(record.mongo_id)
            .ok_or_else(|| SpendflowError::InvalidArgument("transaction has no id".into()))?;
        Ok(Transaction {
            id,
            title: record.title,
            amount: record.amount,
            kind: record.kind,
            category: record.category,
            date: record.date,
            description: record.description,
            user_id: record.user_id,
        })
    }
}

// ---------------------------------------------------------------------------
// TransactionPayload — request body for create and update
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPayload {
    pub title: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    pub date: NaiveDate,
    pub description: String,
    pub user_id: String,
}

/// Parse a calendar date, accepting either `YYYY-MM-DD` or a full ISO-8601
/// timestamp whose date part is kept.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let date_part = raw.split('T').next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid transaction date: {raw}")))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
