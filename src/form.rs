//! Add / Update transaction form.
//!
//! Fields are held as the user typed them and only converted into a
//! [`TransactionPayload`] on submit. The form also carries the busy flag
//! that disables the submit control while a call is in flight.

use chrono::{NaiveDate, Utc};

use crate::error::{Result, SpendflowError};
use crate::models::{parse_date, Transaction, TransactionPayload, TransactionType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Update,
}

/// A single field change made in the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEdit {
    Kind(TransactionType),
    Title(String),
    Amount(String),
    Category(String),
    Date(String),
    Description(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionForm {
    mode: FormMode,
    pub kind: TransactionType,
    pub title: String,
    pub amount: String,
    pub category: String,
    pub date: String,
    pub description: String,
    submitting: bool,
}

impl TransactionForm {
    /// Empty add form dated today (UTC).
    pub fn for_add() -> Self {
        Self::for_add_on(Utc::now().date_naive())
    }

    /// Empty add form with the given default date.
    pub fn for_add_on(date: NaiveDate) -> Self {
        Self {
            mode: FormMode::Add,
            kind: TransactionType::Expense,
            title: String::new(),
            amount: String::new(),
            category: String::new(),
            date: date.format("%Y-%m-%d").to_string(),
            description: String::new(),
            submitting: false,
        }
    }

    /// Update form pre-filled from an existing transaction.
    pub fn for_update(tx: &Transaction) -> Self {
        Self {
            mode: FormMode::Update,
            kind: tx.kind,
            title: tx.title.clone(),
            amount: tx.amount.to_string(),
            category: tx.category.clone(),
            date: tx.date.format("%Y-%m-%d").to_string(),
            description: tx.description.clone().unwrap_or_default(),
            submitting: false,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn apply(&mut self, edit: FormEdit) {
        match edit {
            FormEdit::Kind(kind) => self.kind = kind,
            FormEdit::Title(title) => self.title = title,
            FormEdit::Amount(amount) => self.amount = amount,
            FormEdit::Category(category) => self.category = category,
            FormEdit::Date(date) => self.date = date,
            FormEdit::Description(description) => self.description = description,
        }
    }

    /// Check required fields and build the request body for `user_id`.
    ///
    /// Only presence and parseability are checked; the amount is not
    /// range-checked.
    pub fn to_payload(&self, user_id: &str) -> Result<TransactionPayload> {
        let title = required(&self.title, "title")?;
        let amount_text = required(&self.amount, "amount")?;
        let category = required(&self.category, "category")?;
        let date_text = required(&self.date, "date")?;

        let amount: f64 = amount_text.parse().map_err(|_| {
            SpendflowError::Validation(format!("amount is not a number: {amount_text}"))
        })?;
        let date = parse_date(date_text)
            .ok_or_else(|| SpendflowError::Validation(format!("date is not valid: {date_text}")))?;

        Ok(TransactionPayload {
            title: title.to_string(),
            amount,
            kind: self.kind,
            category: category.to_string(),
            date,
            description: self.description.trim().to_string(),
            user_id: user_id.to_string(),
        })
    }

    // -- Busy flag -----------------------------------------------------------

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Mark the form busy. Fails if a submission is already in flight.
    pub fn begin_submit(&mut self) -> Result<()> {
        if self.submitting {
            return Err(SpendflowError::InvalidArgument(
                "a submission is already in progress".into(),
            ));
        }
        self.submitting = true;
        Ok(())
    }

    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    // -- Labels --------------------------------------------------------------

    pub fn heading(&self) -> &'static str {
        match self.mode {
            FormMode::Add => "Add New Transaction",
            FormMode::Update => "Update Transaction",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match (self.mode, self.submitting) {
            (FormMode::Add, false) => "Add Transaction",
            (FormMode::Add, true) => "Adding...",
            (FormMode::Update, false) => "Update Transaction",
            (FormMode::Update, true) => "Updating...",
        }
    }
}

fn required<'a>(value: &'a str, field: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SpendflowError::Validation(format!("{field} is required")));
    }
    Ok(trimmed)
}
