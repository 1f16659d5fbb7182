use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CategoryTotal — one slice of the expense pie chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

// ---------------------------------------------------------------------------
// MonthlyTotal — one point of the income/expense trend chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTotal {
    pub month: String,
    pub income: f64,
    pub expense: f64,
}

// ---------------------------------------------------------------------------
// Summary — totals shown on the summary cards
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
}
