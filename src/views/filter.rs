//! Search, category filter and sort for the transaction history list.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::SpendflowError;
use crate::models::Transaction;

// ---------------------------------------------------------------------------
// SortOption
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOption {
    Newest,
    Oldest,
    AmountHigh,
    AmountLow,
}

impl SortOption {
    pub const ALL: [SortOption; 4] = [
        SortOption::Newest,
        SortOption::Oldest,
        SortOption::AmountHigh,
        SortOption::AmountLow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Newest => "newest",
            SortOption::Oldest => "oldest",
            SortOption::AmountHigh => "amount-high",
            SortOption::AmountLow => "amount-low",
        }
    }

    /// Label shown in the sort menu.
    pub fn label(&self) -> &'static str {
        match self {
            SortOption::Newest => "Newest",
            SortOption::Oldest => "Oldest",
            SortOption::AmountHigh => "High → Low",
            SortOption::AmountLow => "Low → High",
        }
    }

    fn compare(&self, a: &Transaction, b: &Transaction) -> Ordering {
        match self {
            SortOption::Newest => b.date.cmp(&a.date),
            SortOption::Oldest => a.date.cmp(&b.date),
            SortOption::AmountHigh => b.amount.total_cmp(&a.amount),
            SortOption::AmountLow => a.amount.total_cmp(&b.amount),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = SpendflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|opt| opt.as_str() == s)
            .ok_or_else(|| SpendflowError::InvalidArgument(format!("unknown sort option: {s}")))
    }
}

// ---------------------------------------------------------------------------
// TransactionFilter
// ---------------------------------------------------------------------------

/// Search term, category filter and sort option applied to the history list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub search: String,
    pub category: Option<String>,
    pub sort: Option<SortOption>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn sort(mut self, sort: SortOption) -> Self {
        self.sort = Some(sort);
        self
    }

    /// True if `tx` passes both the search term and the category filter.
    pub fn matches(&self, tx: &Transaction) -> bool {
        let needle = self.search.to_lowercase();
        let text_match = tx.title.to_lowercase().contains(&needle)
            || tx.category.to_lowercase().contains(&needle);
        let category_match = match &self.category {
            Some(category) => tx.category == *category,
            None => true,
        };
        text_match && category_match
    }

    /// Filter and order `transactions` without touching the input.
    ///
    /// The sort is stable, so entries that compare equal keep their input
    /// order, and with no sort option the input order is kept entirely.
    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        let mut kept: Vec<&Transaction> = transactions.iter().filter(|tx| self.matches(tx)).collect();
        if let Some(sort) = self.sort {
            kept.sort_by(|a, b| sort.compare(a, b));
        }
        kept
    }
}

/// Categories present in `transactions`, first-seen order, without duplicates.
pub fn distinct_categories(transactions: &[Transaction]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for tx in transactions {
        if !seen.contains(&tx.category.as_str()) {
            seen.push(&tx.category);
        }
    }
    seen
}
