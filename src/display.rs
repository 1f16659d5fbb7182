//! Presentation models for the dashboard: summary cards, list rows and pie
//! slices. These carry already-formatted text plus a colour tone so any
//! front end can draw them without re-deriving anything.

use serde::Serialize;

use crate::config::{CHART_COLORS, CURRENCY_SYMBOL};
use crate::models::{CategoryTotal, Summary, Transaction, TransactionType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

impl From<TransactionType> for Tone {
    fn from(kind: TransactionType) -> Self {
        match kind {
            TransactionType::Income => Tone::Positive,
            TransactionType::Expense => Tone::Negative,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CategoryIcon {
    Building,
    Home,
    Car,
    Utensils,
    ShoppingBag,
    Gift,
    Wallet,
}

impl CategoryIcon {
    pub fn for_category(category: &str) -> Self {
        match category {
            "Salary" => CategoryIcon::Building,
            "Bills & Utilities" => CategoryIcon::Home,
            "Transportation" => CategoryIcon::Car,
            "Food & Dining" => CategoryIcon::Utensils,
            "Shopping" => CategoryIcon::ShoppingBag,
            "Entertainment" => CategoryIcon::Gift,
            _ => CategoryIcon::Wallet,
        }
    }
}

// ---------------------------------------------------------------------------
// Number formatting
// ---------------------------------------------------------------------------

/// Group thousands and keep at most three fraction digits, trimming
/// trailing zeros: `1234.5` → `1,234.5`, `-1000` → `-1,000`.
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    let sign = if value.is_sign_negative() && !is_zero { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

// ---------------------------------------------------------------------------
// SummaryCard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryCard {
    pub label: &'static str,
    pub value: String,
    pub tone: Tone,
}

pub fn summary_cards(summary: &Summary) -> [SummaryCard; 3] {
    [
        SummaryCard {
            label: "Total Income",
            value: format!("{CURRENCY_SYMBOL}{}", format_amount(summary.total_income)),
            tone: Tone::Positive,
        },
        SummaryCard {
            label: "Total Expenses",
            value: format!("{CURRENCY_SYMBOL}{}", format_amount(summary.total_expenses)),
            tone: Tone::Negative,
        },
        SummaryCard {
            label: "Total Balance",
            value: format!("{CURRENCY_SYMBOL}{}", format_amount(summary.balance)),
            tone: Tone::Neutral,
        },
    ]
}

// ---------------------------------------------------------------------------
// TransactionRow
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub title: String,
    /// `{category} • {dd/mm/yyyy}`
    pub subtitle: String,
    /// Amount with its sign, e.g. `+₹1000` or `-₹200`.
    pub amount: String,
    pub tone: Tone,
    pub icon: CategoryIcon,
}

impl From<&Transaction> for TransactionRow {
    fn from(tx: &Transaction) -> Self {
        let sign = match tx.kind {
            TransactionType::Income => '+',
            TransactionType::Expense => '-',
        };
        Self {
            id: tx.id.clone(),
            title: tx.title.clone(),
            subtitle: format!("{} • {}", tx.category, tx.date.format("%d/%m/%Y")),
            amount: format!("{sign}{CURRENCY_SYMBOL}{}", tx.amount),
            tone: tx.kind.into(),
            icon: CategoryIcon::for_category(&tx.category),
        }
    }
}

// ---------------------------------------------------------------------------
// PieSlice
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub category: String,
    pub amount: f64,
    pub color: &'static str,
    pub tooltip: String,
}

/// Colour each category total, cycling through the chart palette.
pub fn pie_slices(totals: &[CategoryTotal]) -> Vec<PieSlice> {
    totals
        .iter()
        .enumerate()
        .map(|(i, total)| PieSlice {
            category: total.category.clone(),
            amount: total.amount,
            color: CHART_COLORS[i % CHART_COLORS.len()],
            tooltip: format!("${:.2}", total.amount),
        })
        .collect()
}
