//! Headless view-models for the orders page
//!
//! Everything the page shows lives in [`OrdersViewState`]. Components read it
//! through a Leptos signal; [`crate::actions`] change it through the
//! [`StateCell`] seam so the same code runs against a `RefCell` in tests.

pub mod add_order;
pub mod columns;
pub mod notifications;
pub mod orders_list;
pub mod pagination;
pub mod removal;
pub mod selection;

pub use add_order::{AddOrderForm, FormErrors, FormField, OrderDraft, SubmitBlocked};
pub use columns::{Column, ColumnSetting, ColumnVisibility};
pub use notifications::{Notifications, Toast, ToastKind};
pub use orders_list::{FetchOutcome, FetchTicket, OrdersList};
pub use pagination::Pagination;
pub use removal::RemovalState;
pub use selection::Selection;

use crate::text;
use leptos::prelude::{RwSignal, Update};
use orderdesk_core::OrdersPage;
use std::cell::RefCell;

/// Somewhere view state can be changed from async code
///
/// `mutate` returns `None` when the state is gone (the view was torn down),
/// in which case late results are dropped.
pub trait StateCell<T> {
    /// Run `f` against the state
    fn mutate<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T> StateCell<T> for RefCell<T> {
    fn mutate<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_borrow_mut().ok().map(|mut state| f(&mut state))
    }
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn mutate<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// State of the orders page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrdersViewState {
    /// Loaded rows and pagination
    pub list: OrdersList,
    /// Checked rows
    pub selection: Selection,
    /// Shown columns
    pub columns: ColumnVisibility,
    /// Delete confirmation dialog
    pub removal: RemovalState,
    /// Add-order modal
    pub add_form: AddOrderForm,
    /// Toasts
    pub notifications: Notifications,
}

impl OrdersViewState {
    /// Empty state for pages of `per_page` orders
    pub fn new(per_page: u32) -> Self {
        Self {
            list: OrdersList::new(per_page),
            selection: Selection::default(),
            columns: ColumnVisibility::default(),
            removal: RemovalState::default(),
            add_form: AddOrderForm::default(),
            notifications: Notifications::default(),
        }
    }

    /// Start re-fetching the current page
    pub fn refresh(&mut self) -> FetchTicket {
        self.list.begin_fetch()
    }

    /// Move to `page`, clearing the selection
    ///
    /// Returns `None` when `page` is out of range or already current.
    pub fn go_to_page(&mut self, page: u32) -> Option<FetchTicket> {
        let ticket = self.list.go_to_page(page)?;
        self.selection.clear();
        Some(ticket)
    }

    /// Apply a fetched page and prune the selection to the loaded rows
    pub fn apply_fetch(&mut self, ticket: FetchTicket, page: OrdersPage) -> FetchOutcome {
        let outcome = self.list.apply(ticket, page);
        if outcome == FetchOutcome::Applied {
            let list = &self.list;
            self.selection.retain(|id| list.contains(id));
        }
        outcome
    }

    /// Record a failed fetch; only the latest one shows a notification
    pub fn fail_fetch(&mut self, ticket: FetchTicket) {
        if self.list.fail(ticket) {
            self.notifications.error(text::GENERIC_FAILURE);
        }
    }

    /// Check or uncheck a loaded row; unknown ids are ignored
    pub fn toggle_select(&mut self, id: &str) {
        if self.list.contains(id) {
            self.selection.toggle(id);
        }
    }

    /// Uncheck everything if every loaded row is checked, otherwise check every row
    pub fn toggle_select_all(&mut self) {
        if self.all_selected() {
            self.selection.clear();
        } else {
            self.selection.select_all(self.list.ids());
        }
    }

    /// Whether there are rows and all of them are checked
    pub fn all_selected(&self) -> bool {
        self.selection.covers(self.list.ids())
    }

    /// Show or hide a column
    pub fn toggle_column(&mut self, column: Column) {
        self.columns.toggle(column);
    }

    /// Open the delete confirmation for `id`
    pub fn request_removal(&mut self, id: &str) {
        self.removal.open(id);
    }

    /// Show the add-order modal
    pub fn open_add_form(&mut self) {
        self.add_form.open();
    }

    /// Hide the add-order modal, discarding its values
    pub fn close_add_form(&mut self) {
        self.add_form.close();
    }

    /// Pagination controls for the current page
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.list.current_page(), self.list.total_pages())
    }
}
