use crate::models::{Summary, Transaction, TransactionType};

impl Summary {
    /// Total income, total expenses and their difference over `transactions`.
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let total_income = total_of(transactions, TransactionType::Income);
        let total_expenses = total_of(transactions, TransactionType::Expense);
        Self {
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
        }
    }
}

/// Sum of `amount` over transactions of the given type.
pub fn total_of(transactions: &[Transaction], kind: TransactionType) -> f64 {
    transactions
        .iter()
        .filter(|tx| tx.kind == kind)
        .fold(0.0, |total, tx| total + tx.amount)
}
