use std::path::PathBuf;
use std::time::Duration;

/// Environment variable holding the backend base URL.
pub const BACKEND_URL_ENV: &str = "SPENDFLOW_BACKEND_URL";
/// Environment variable holding a bearer token, read by [`EnvToken`](crate::auth::EnvToken).
pub const TOKEN_ENV: &str = "SPENDFLOW_TOKEN";

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// File name used when saving the CSV export.
pub const EXPORT_FILE_NAME: &str = "transactions.csv";

/// Prompt shown before a transaction is deleted.
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this transaction?";

/// Categories offered by the add/update form.
pub const CATEGORY_SUGGESTIONS: [&str; 5] = [
    "Food & Dining",
    "Transportation",
    "Salary",
    "Bills & Utilities",
    "Shopping",
];

/// Colours cycled through by the expense pie chart.
pub const CHART_COLORS: [&str; 5] = ["#344F1F", "#F4991A", "#5a823c", "#f5a639", "#80b464"];

pub const CURRENCY_SYMBOL: &str = "₹";

// ---------------------------------------------------------------------------
// Endpoint paths
// ---------------------------------------------------------------------------

const API_ROOT: [&str; 2] = ["api", "transactions"];

fn under_root(rest: &[&str]) -> Vec<String> {
    API_ROOT
        .iter()
        .chain(rest.iter())
        .map(|s| s.to_string())
        .collect()
}

/// `POST /api/transactions`
pub fn transactions_path() -> Vec<String> {
    under_root(&[])
}

/// `GET /api/transactions/user/{user_id}`
pub fn user_transactions_path(user_id: &str) -> Vec<String> {
    under_root(&["user", user_id])
}

/// `PUT`/`DELETE /api/transactions/{id}`
pub fn transaction_path(id: &str) -> Vec<String> {
    under_root(&[id])
}

/// `GET /api/transactions/export/{user_id}`
pub fn export_path(user_id: &str) -> Vec<String> {
    under_root(&["export", user_id])
}

/// Directory the CSV export is saved to when the caller does not pick one.
pub fn default_export_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}
