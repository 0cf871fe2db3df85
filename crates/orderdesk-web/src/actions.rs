//! Async actions driving [`OrdersViewState`]
//!
//! Each action takes the API and the cell holding the state. The state is
//! never borrowed across an await, so a Leptos signal or a `RefCell` both work.

use crate::state::{FetchOutcome, FetchTicket, OrdersViewState, StateCell, SubmitBlocked};
use crate::text;
use orderdesk_client::{ApiError, OrdersApi};
use tracing::{debug, info, warn};

/// Result of confirming the delete dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// Nothing to do: no target, already pending, or the view is gone
    Skipped,
    /// The order was deleted and the page re-fetched
    Removed,
    /// The delete request failed
    Failed,
}

/// Result of submitting the add-order form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another submission is in flight, or the view is gone
    Skipped,
    /// Client-side validation failed; no request was sent
    Invalid,
    /// The order was created
    Created,
    /// The server answered 422
    Rejected,
    /// The request failed
    Failed,
}

/// Fetch the page named by `ticket` and apply it, following relocations
pub async fn run_fetch<A, C>(api: &A, state: &C, ticket: FetchTicket)
where
    A: OrdersApi + ?Sized,
    C: StateCell<OrdersViewState>,
{
    let mut ticket = ticket;
    loop {
        debug!(
            generation = ticket.generation,
            page = ticket.query.page,
            "Fetching page"
        );
        let result = api.list_orders(ticket.query).await;

        let next = state
            .mutate(|view| match result {
                Ok(page) => match view.apply_fetch(ticket, page) {
                    FetchOutcome::Relocated(next) => Some(next),
                    FetchOutcome::Stale => {
                        debug!(generation = ticket.generation, "Dropped superseded fetch");
                        None
                    }
                    FetchOutcome::Applied => None,
                },
                Err(e) => {
                    warn!(generation = ticket.generation, error = %e, "Fetching orders failed");
                    view.fail_fetch(ticket);
                    None
                }
            })
            .flatten();

        match next {
            Some(next) => {
                debug!(page = next.query.page, "Page out of range, moving to last page");
                ticket = next;
            }
            None => return,
        }
    }
}

/// Re-fetch the current page
pub async fn refresh<A, C>(api: &A, state: &C)
where
    A: OrdersApi + ?Sized,
    C: StateCell<OrdersViewState>,
{
    if let Some(ticket) = state.mutate(OrdersViewState::refresh) {
        run_fetch(api, state, ticket).await;
    }
}

/// Go to `page` and fetch it; out-of-range or current pages are ignored
pub async fn change_page<A, C>(api: &A, state: &C, page: u32)
where
    A: OrdersApi + ?Sized,
    C: StateCell<OrdersViewState>,
{
    if let Some(Some(ticket)) = state.mutate(|view| view.go_to_page(page)) {
        run_fetch(api, state, ticket).await;
    }
}

/// Delete the dialog's target and re-fetch the page on success
pub async fn confirm_removal<A, C>(api: &A, state: &C) -> RemovalOutcome
where
    A: OrdersApi + ?Sized,
    C: StateCell<OrdersViewState>,
{
    let Some(Some(id)) = state.mutate(|view| view.removal.begin_confirm()) else {
        return RemovalOutcome::Skipped;
    };

    match api.delete_order(&id).await {
        Ok(()) => {
            info!(id = %id, "Order deleted");
            let ticket = state.mutate(|view| {
                view.removal.finish();
                view.notifications.success(text::DELETE_SUCCESS);
                view.refresh()
            });
            if let Some(ticket) = ticket {
                run_fetch(api, state, ticket).await;
            }
            RemovalOutcome::Removed
        }
        Err(e) => {
            warn!(id = %id, error = %e, "Deleting order failed");
            state.mutate(|view| {
                view.removal.finish();
                view.notifications.error(text::GENERIC_FAILURE);
            });
            RemovalOutcome::Failed
        }
    }
}

/// Validate and submit the add-order form
///
/// The list is not refreshed here; callers refresh on [`SubmitOutcome::Created`].
pub async fn submit_order<A, C>(api: &A, state: &C) -> SubmitOutcome
where
    A: OrdersApi + ?Sized,
    C: StateCell<OrdersViewState>,
{
    let order = match state.mutate(|view| view.add_form.begin_submit()) {
        Some(Ok(order)) => order,
        Some(Err(SubmitBlocked::Invalid)) => return SubmitOutcome::Invalid,
        Some(Err(SubmitBlocked::Busy)) | None => return SubmitOutcome::Skipped,
    };

    match api.create_order(&order).await {
        Ok(()) => {
            info!(order_number = %order.order_number, "Order created");
            state.mutate(|view| {
                view.add_form.finish_created();
                view.notifications.success(text::ADD_SUCCESS);
            });
            SubmitOutcome::Created
        }
        Err(ApiError::FieldErrors(field_errors)) => {
            debug!(count = field_errors.len(), "Order rejected by server");
            state.mutate(|view| {
                if !view.add_form.finish_rejected(&field_errors) {
                    view.notifications.error(text::GENERIC_FAILURE);
                }
            });
            SubmitOutcome::Rejected
        }
        Err(e) => {
            warn!(error = %e, "Creating order failed");
            state.mutate(|view| {
                view.add_form.finish_failed();
                view.notifications.error(text::GENERIC_FAILURE);
            });
            SubmitOutcome::Failed
        }
    }
}
