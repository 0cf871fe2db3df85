//! Leptos components for the orders page

pub mod add_order_modal;
pub mod header;
pub mod loading;
pub mod orders_view;
pub mod pagination;
pub mod remove_dialog;
pub mod status_badge;
pub mod toaster;

pub use add_order_modal::AddOrderModal;
pub use header::Header;
pub use loading::Loading;
pub use orders_view::OrdersView;
pub use pagination::Pagination;
pub use remove_dialog::RemoveDialog;
pub use status_badge::StatusBadge;
pub use toaster::Toaster;

use leptos::prelude::*;
use leptos::task::spawn_local;
use orderdesk_client::ApiClient;
use std::future::Future;

/// API client handle shared by the components of one page
///
/// The client stays on the UI thread; the handle itself is `Copy`.
pub type SharedApi = StoredValue<ApiClient, LocalStorage>;

/// Run an action with a clone of the page's client on the local executor
pub(crate) fn spawn_with_api<F, Fut>(api: SharedApi, action: F)
where
    F: FnOnce(ApiClient) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    if let Some(client) = api.try_get_value() {
        spawn_local(action(client));
    }
}
