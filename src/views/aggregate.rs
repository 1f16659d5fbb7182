//! Chart series: expense totals per category and income/expense per month.
//!
//! Both groupings keep buckets in the order they are first seen in the
//! input rather than sorting them.

use std::collections::HashMap;

use crate::models::{CategoryTotal, MonthlyTotal, Transaction, TransactionType};

/// Sum expense amounts per category, first-seen order.
///
/// Categories with no expense transactions are absent from the result.
pub fn category_totals(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for tx in transactions.iter().filter(|tx| tx.is_expense()) {
        let slot = *index.entry(tx.category.as_str()).or_insert_with(|| {
            totals.push(CategoryTotal {
                category: tx.category.clone(),
                amount: 0.0,
            });
            totals.len() - 1
        });
        totals[slot].amount += tx.amount;
    }

    totals
}

/// Sum income and expense per month name (`Jan`..`Dec`), first-seen order.
///
/// The bucket key carries no year, so January 2023 and January 2024 land
/// in the same `Jan` bucket. Use [`monthly_totals_by_year`] when the data
/// spans more than one year.
pub fn monthly_totals(transactions: &[Transaction]) -> Vec<MonthlyTotal> {
    group_by_month(transactions, |tx| tx.date.format("%b").to_string())
}

/// Like [`monthly_totals`] but keyed by year and month (`Jan 2024`).
pub fn monthly_totals_by_year(transactions: &[Transaction]) -> Vec<MonthlyTotal> {
    group_by_month(transactions, |tx| tx.date.format("%b %Y").to_string())
}

fn group_by_month<F>(transactions: &[Transaction], label: F) -> Vec<MonthlyTotal>
where
    F: Fn(&Transaction) -> String,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut totals: Vec<MonthlyTotal> = Vec::new();

    for tx in transactions {
        let month = label(tx);
        let slot = match index.get(&month) {
            Some(&slot) => slot,
            None => {
                totals.push(MonthlyTotal {
                    month: month.clone(),
                    income: 0.0,
                    expense: 0.0,
                });
                index.insert(month, totals.len() - 1);
                totals.len() - 1
            }
        };
        match tx.kind {
            TransactionType::Income => totals[slot].income += tx.amount,
            TransactionType::Expense => totals[slot].expense += tx.amount,
        }
    }

    totals
}
