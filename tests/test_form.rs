//! Add / Update form tests: defaults, pre-fill, validation and busy flag.

mod common;

use chrono::NaiveDate;
use common::tx;
use spendflow_sdk::form::FormMode;
use spendflow_sdk::{FormEdit, SpendflowError, TransactionForm, TransactionType};

fn filled_add_form() -> TransactionForm {
    let mut form = TransactionForm::for_add_on(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    form.apply(FormEdit::Title("  Coffee beans ".into()));
    form.apply(FormEdit::Amount("18.75".into()));
    form.apply(FormEdit::Category("Food & Dining".into()));
    form
}

#[test]
fn add_form_defaults_to_expense_on_given_date() {
    let form = TransactionForm::for_add_on(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    assert_eq!(form.mode(), FormMode::Add);
    assert_eq!(form.kind, TransactionType::Expense);
    assert_eq!(form.date, "2024-06-01");
    assert!(form.title.is_empty());
    assert!(!form.is_submitting());
    assert_eq!(form.heading(), "Add New Transaction");
}

#[test]
fn update_form_is_prefilled() {
    let mut source = tx("tx-9", "Salary", 1000.0, "income", "Salary", "2024-01-05T00:00:00Z");
    source.description = None;

    let form = TransactionForm::for_update(&source);
    assert_eq!(form.mode(), FormMode::Update);
    assert_eq!(form.kind, TransactionType::Income);
    assert_eq!(form.title, "Salary");
    assert_eq!(form.amount, "1000");
    assert_eq!(form.category, "Salary");
    assert_eq!(form.date, "2024-01-05");
    assert_eq!(form.description, "");
    assert_eq!(form.heading(), "Update Transaction");
}

#[test]
fn payload_trims_and_parses() {
    let mut form = filled_add_form();
    form.apply(FormEdit::Kind(TransactionType::Income));
    form.apply(FormEdit::Description("  from the market  ".into()));

    let payload = form.to_payload("user_1").unwrap();
    assert_eq!(payload.title, "Coffee beans");
    assert_eq!(payload.amount, 18.75);
    assert_eq!(payload.kind, TransactionType::Income);
    assert_eq!(payload.category, "Food & Dining");
    assert_eq!(payload.date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    assert_eq!(payload.description, "from the market");
    assert_eq!(payload.user_id, "user_1");
}

#[test]
fn each_required_field_is_checked() {
    let blanks = [
        FormEdit::Title("   ".into()),
        FormEdit::Amount(String::new()),
        FormEdit::Category(String::new()),
        FormEdit::Date(String::new()),
    ];
    for blank in blanks {
        let mut form = filled_add_form();
        form.apply(blank.clone());
        let err = form.to_payload("user_1").unwrap_err();
        assert!(err.is_validation(), "{blank:?} should fail validation");
    }
}

#[test]
fn description_is_optional() {
    let form = filled_add_form();
    assert_eq!(form.to_payload("user_1").unwrap().description, "");
}

#[test]
fn amount_must_be_numeric_but_not_range_checked() {
    let mut form = filled_add_form();
    form.apply(FormEdit::Amount("12abc".into()));
    assert!(matches!(
        form.to_payload("user_1"),
        Err(SpendflowError::Validation(_))
    ));

    form.apply(FormEdit::Amount("-5".into()));
    assert_eq!(form.to_payload("user_1").unwrap().amount, -5.0);
}

#[test]
fn date_must_be_iso() {
    let mut form = filled_add_form();
    form.apply(FormEdit::Date("01/06/2024".into()));
    assert!(form.to_payload("user_1").unwrap_err().is_validation());
}

#[test]
fn busy_flag_blocks_second_submit() {
    let mut form = filled_add_form();
    assert_eq!(form.submit_label(), "Add Transaction");

    form.begin_submit().unwrap();
    assert!(form.is_submitting());
    assert_eq!(form.submit_label(), "Adding...");
    assert!(matches!(
        form.begin_submit(),
        Err(SpendflowError::InvalidArgument(_))
    ));

    form.finish_submit();
    assert!(!form.is_submitting());
    assert!(form.begin_submit().is_ok());
}

#[test]
fn update_labels() {
    let source = tx("tx-1", "Rent", 800.0, "expense", "Bills & Utilities", "2024-02-01");
    let mut form = TransactionForm::for_update(&source);
    assert_eq!(form.submit_label(), "Update Transaction");
    form.begin_submit().unwrap();
    assert_eq!(form.submit_label(), "Updating...");
}
