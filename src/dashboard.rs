//! The dashboard: UI state as a reducer over tagged actions, plus the
//! fetch → update-store → re-render cycle behind each user action.
//!
//! [`DashboardState`] only changes through [`DashboardState::apply`], so
//! every transition of the menus and modals is one of the [`Action`]
//! variants. [`Dashboard`] pairs that state with a [`SpendflowClient`] and
//! applies the error policy: add/update failures are returned so the caller
//! can alert the user, while delete and export failures are only logged.

use std::path::{Path, PathBuf};

use crate::auth::User;
use crate::config;
use crate::display::{self, PieSlice, SummaryCard, TransactionRow};
use crate::error::{Result, SpendflowError};
use crate::form::{FormEdit, TransactionForm};
use crate::models::{MonthlyTotal, Summary, Transaction, TransactionPayload};
use crate::views::{self, SortOption, TransactionFilter};
use crate::SpendflowClient;

// ---------------------------------------------------------------------------
// Modal
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Modal {
    #[default]
    Closed,
    Add(TransactionForm),
    Update {
        transaction_id: String,
        form: TransactionForm,
    },
}

impl Modal {
    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::Closed)
    }

    pub fn form(&self) -> Option<&TransactionForm> {
        match self {
            Modal::Closed => None,
            Modal::Add(form) | Modal::Update { form, .. } => Some(form),
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut TransactionForm> {
        match self {
            Modal::Closed => None,
            Modal::Add(form) | Modal::Update { form, .. } => Some(form),
        }
    }
}

// ---------------------------------------------------------------------------
// Action / DashboardState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Search(String),
    ToggleSortMenu,
    /// Pick a sort option and close the sort menu.
    SelectSort(Option<SortOption>),
    ToggleFilterMenu,
    /// Pick a category (`None` for "All") and close the filter menu.
    SelectCategory(Option<String>),
    /// Open the row menu of a transaction, or close it if already open.
    ToggleRowMenu(String),
    OpenAdd,
    OpenUpdate(Transaction),
    EditForm(FormEdit),
    CloseModal,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub filter: TransactionFilter,
    pub sort_menu_open: bool,
    pub filter_menu_open: bool,
    pub row_menu: Option<String>,
    pub modal: Modal,
}

impl DashboardState {
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Search(term) => self.filter.search = term,
            Action::ToggleSortMenu => self.sort_menu_open = !self.sort_menu_open,
            Action::SelectSort(sort) => {
                self.filter.sort = sort;
                self.sort_menu_open = false;
            }
            Action::ToggleFilterMenu => self.filter_menu_open = !self.filter_menu_open,
            Action::SelectCategory(category) => {
                self.filter.category = category;
                self.filter_menu_open = false;
            }
            Action::ToggleRowMenu(id) => {
                self.row_menu = match self.row_menu.take() {
                    Some(open) if open == id => None,
                    _ => Some(id),
                };
            }
            Action::OpenAdd => self.modal = Modal::Add(TransactionForm::for_add()),
            Action::OpenUpdate(tx) => {
                self.row_menu = None;
                self.modal = Modal::Update {
                    form: TransactionForm::for_update(&tx),
                    transaction_id: tx.id,
                };
            }
            Action::EditForm(edit) => match self.modal.form_mut() {
                Some(form) => form.apply(edit),
                None => tracing::debug!(?edit, "form edit ignored; no modal is open"),
            },
            Action::CloseModal => self.modal = Modal::Closed,
        }
    }
}

// ---------------------------------------------------------------------------
// DashboardView
// ---------------------------------------------------------------------------

/// Everything the dashboard draws, derived from the store and UI state.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView<'a> {
    pub greeting: String,
    pub summary: Summary,
    pub cards: [SummaryCard; 3],
    /// Empty when there are no expenses; the chart shows "No expense data".
    pub pie: Vec<PieSlice>,
    pub monthly: Vec<MonthlyTotal>,
    pub rows: Vec<TransactionRow>,
    /// Entries of the category filter menu, after the "All" entry.
    pub categories: Vec<&'a str>,
}

impl DashboardView<'_> {
    /// Text shown in place of the list when no transaction matches.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.rows.is_empty().then_some("No transactions found.")
    }
}

/// A validated submission whose form is marked busy, returned by
/// [`Dashboard::begin_submit`].
#[derive(Debug, Clone, PartialEq)]
#[must_use = "the form stays busy until the submission is completed"]
pub struct PendingSubmit {
    transaction_id: Option<String>,
    payload: TransactionPayload,
}

impl PendingSubmit {
    /// The transaction being updated, or `None` for an add.
    pub fn transaction_id(&self) -> Option<&str> {
        self.transaction_id.as_deref()
    }

    pub fn payload(&self) -> &TransactionPayload {
        &self.payload
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Cancelled,
    Deleted,
    Failed,
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

pub struct Dashboard {
    client: SpendflowClient,
    state: DashboardState,
}

impl Dashboard {
    pub fn new(client: SpendflowClient) -> Self {
        Self {
            client,
            state: DashboardState::default(),
        }
    }

    pub fn client(&self) -> &SpendflowClient {
        &self.client
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Initial fetch. Does nothing until a user is signed in.
    pub fn mount(&mut self) -> bool {
        self.client.refresh()
    }

    /// The identity provider reported a user: fetch their transactions.
    pub fn sign_in(&mut self, user: User) -> bool {
        self.client.sign_in(user)
    }

    pub fn dispatch(&mut self, action: Action) {
        self.state.apply(action);
    }

    /// Submit the open add or update form.
    ///
    /// On success the modal closes and the store has been refreshed. On
    /// failure the error is logged and returned for the caller to alert;
    /// the modal stays open with the busy flag cleared.
    pub fn submit(&mut self) -> Result<()> {
        let pending = self.begin_submit().inspect_err(|e| {
            tracing::error!(error = %e, "transaction submit failed");
        })?;
        self.complete_submit(pending)
    }

    /// Validate the open form and mark it busy.
    ///
    /// Until the returned [`PendingSubmit`] is passed to
    /// [`complete_submit`](Self::complete_submit) the form reports
    /// [`is_submitting`](TransactionForm::is_submitting) and another
    /// `begin_submit` is rejected. Nothing is sent to the backend yet.
    pub fn begin_submit(&mut self) -> Result<PendingSubmit> {
        let user_id = self.client.session().require_user()?.id.clone();

        let (transaction_id, form) = match &mut self.state.modal {
            Modal::Closed => {
                return Err(SpendflowError::InvalidArgument("no form is open".into()));
            }
            Modal::Add(form) => (None, form),
            Modal::Update {
                transaction_id,
                form,
            } => (Some(transaction_id.clone()), form),
        };
        let payload = form.to_payload(&user_id)?;
        form.begin_submit()?;
        Ok(PendingSubmit {
            transaction_id,
            payload,
        })
    }

    /// Send a pending submission, clear the busy flag and close the modal
    /// on success. Failures are logged and returned.
    pub fn complete_submit(&mut self, pending: PendingSubmit) -> Result<()> {
        let result = match &pending.transaction_id {
            None => self.client.create_transaction(&pending.payload),
            Some(id) => self.client.update_transaction(id, &pending.payload),
        };

        // The modal may have been replaced while the call was pending; only
        // the busy form belongs to this submission.
        let owned = match self.state.modal.form_mut() {
            Some(form) if form.is_submitting() => {
                form.finish_submit();
                true
            }
            _ => false,
        };

        match result {
            Ok(_) => {
                if owned {
                    self.state.modal = Modal::Closed;
                }
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "transaction submit failed");
                Err(e)
            }
        }
    }

    /// Delete a transaction after `confirm` agrees. Failures are logged only.
    pub fn delete<F>(&mut self, id: &str, confirm: F) -> DeleteOutcome
    where
        F: FnOnce(&str) -> bool,
    {
        self.state.row_menu = None;
        if !confirm(config::DELETE_CONFIRMATION) {
            return DeleteOutcome::Cancelled;
        }
        match self.client.delete_transaction(id) {
            Ok(()) => DeleteOutcome::Deleted,
            Err(e) => {
                tracing::error!(error = %e, id, "Delete failed");
                DeleteOutcome::Failed
            }
        }
    }

    /// Save the CSV export into `dir` (or the download directory). Failures
    /// are logged only.
    pub fn export(&self, dir: Option<&Path>) -> Option<PathBuf> {
        match self.client.save_export(dir) {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                None
            }
        }
    }

    /// Recompute every derived view from the current store and UI state.
    pub fn view(&self) -> DashboardView<'_> {
        let transactions = self.client.transactions();
        let summary = Summary::from_transactions(transactions);
        let greeting = format!(
            "Welcome, {}",
            self.client.user().map(User::display_name).unwrap_or("User")
        );

        DashboardView {
            greeting,
            summary,
            cards: display::summary_cards(&summary),
            pie: display::pie_slices(&views::category_totals(transactions)),
            monthly: views::monthly_totals(transactions),
            rows: self
                .state
                .filter
                .apply(transactions)
                .into_iter()
                .map(TransactionRow::from)
                .collect(),
            categories: views::distinct_categories(transactions),
        }
    }
}
