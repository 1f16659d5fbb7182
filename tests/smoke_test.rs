//! Smoke test against a live SpendFlow backend.
//!
//! Creates, updates and deletes one transaction for a real user, checking
//! the store after each step. Needs `SPENDFLOW_BACKEND_URL`,
//! `SPENDFLOW_TOKEN` and `SPENDFLOW_USER_ID`.
//!
//! Run with:
//! ```sh
//! cargo test --test smoke_test -- --ignored --nocapture
//! ```

use chrono::Utc;
use spendflow_sdk::views::{SortOption, TransactionFilter};
use spendflow_sdk::{SpendflowClientBuilder, TransactionPayload, TransactionType, User};

fn section(name: &str) {
    eprintln!("\n{}", "=".repeat(60));
    eprintln!("  {}", name);
    eprintln!("{}", "=".repeat(60));
}

#[test]
#[ignore]
fn live_backend_round_trip() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let user_id = std::env::var("SPENDFLOW_USER_ID").expect("SPENDFLOW_USER_ID must be set");
    let mut client = SpendflowClientBuilder::from_env()
        .build()
        .expect("client should build from env");

    section("Fetch");
    assert!(client.sign_in(User::new(&user_id)), "initial fetch failed");
    let before = client.transactions().len();
    eprintln!("  {} transactions, {}", before, client);

    section("Create");
    let marker = format!("sdk smoke {}", Utc::now().timestamp());
    let payload = TransactionPayload {
        title: marker.clone(),
        amount: 1.0,
        kind: TransactionType::Expense,
        category: "Shopping".into(),
        date: Utc::now().date_naive(),
        description: "created by the smoke test".into(),
        user_id: user_id.clone(),
    };
    client.create_transaction(&payload).expect("create failed");
    let created = client
        .filtered(&TransactionFilter::new().search(&marker).sort(SortOption::Newest))
        .first()
        .map(|t| t.id.clone())
        .expect("created transaction not listed");
    assert_eq!(client.transactions().len(), before + 1);

    section("Update");
    let mut changed = payload.clone();
    changed.amount = 2.0;
    client
        .update_transaction(&created, &changed)
        .expect("update failed");
    assert_eq!(client.store().get(&created).map(|t| t.amount), Some(2.0));

    section("Delete");
    client.delete_transaction(&created).expect("delete failed");
    assert!(client.store().get(&created).is_none());
    assert_eq!(client.transactions().len(), before);

    section("Export");
    let csv = client.export_csv().expect("export failed");
    eprintln!("  export is {} bytes", csv.len());
}
