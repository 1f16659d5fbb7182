//! Views derived from the transaction list.
//!
//! Every function here is pure: it borrows the list, never mutates it, and
//! recomputes its result from scratch on each call.

pub mod aggregate;
pub mod filter;
pub mod summary;

pub use aggregate::{category_totals, monthly_totals, monthly_totals_by_year};
pub use filter::{distinct_categories, SortOption, TransactionFilter};
pub use summary::total_of;
