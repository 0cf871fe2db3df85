//! The seam between the dashboard and the order collection endpoint

use crate::error::ApiResult;
use async_trait::async_trait;
use orderdesk_core::{NewOrder, OrdersPage, PageQuery};

/// Operations the dashboard needs from the order collection
///
/// In the browser the futures are not `Send` (fetch is bound to the JS
/// thread), so the trait drops that bound on wasm.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait OrdersApi {
    /// Fetch one page of orders
    async fn list_orders(&self, query: PageQuery) -> ApiResult<OrdersPage>;

    /// Create an order
    ///
    /// A 422 answer surfaces as [`crate::ApiError::FieldErrors`].
    async fn create_order(&self, order: &NewOrder) -> ApiResult<()>;

    /// Delete the order with `id`
    async fn delete_order(&self, id: &str) -> ApiResult<()>;
}
