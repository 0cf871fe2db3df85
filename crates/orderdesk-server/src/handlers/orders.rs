//! Order collection proxy handlers

use crate::error::{ForwardError, HostError};
use crate::state::AppState;
use axum::{
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::Json,
};
use orderdesk_core::{NewOrder, OrdersPage, PageQuery};
use std::sync::Arc;
use tracing::{debug, info, warn};
use validator::Validate;

/// List one page of orders from the upstream
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<OrdersPage>, HostError> {
    let Query(query) = query.map_err(|e| HostError::bad_request(e.body_text()))?;
    query
        .validate()
        .map_err(|e| HostError::bad_request(format!("Invalid page query: {e}")))?;

    debug!(page = query.page, per_page = query.per_page, "Forwarding order list");

    match state.orders.list_orders(query).await {
        Ok(page) => Ok(Json(page)),
        Err(e) => {
            warn!(error = %e, "Upstream order list failed");
            Err(HostError::bad_gateway("Failed to fetch orders"))
        }
    }
}

/// Forward a new order to the upstream
///
/// Statuses outside the known set are refused rather than forwarded as `unknown`.
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewOrder>, JsonRejection>,
) -> Result<StatusCode, ForwardError> {
    let Json(order) =
        payload.map_err(|e| HostError::bad_request(format!("Invalid JSON: {}", e.body_text())))?;
    if !order.status.is_known() {
        return Err(HostError::bad_request("Unknown order status").into());
    }

    match state.orders.create_order(&order).await {
        Ok(()) => {
            info!(order_number = %order.order_number, "Order forwarded");
            Ok(StatusCode::CREATED)
        }
        Err(e) => {
            warn!(order_number = %order.order_number, error = %e, "Upstream rejected order");
            Err(ForwardError::from(e))
        }
    }
}

/// Forward a delete to the upstream
pub async fn delete_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ForwardError> {
    match state.orders.delete_order(&id).await {
        Ok(()) => {
            info!(id = %id, "Order deleted upstream");
            Ok(StatusCode::NO_CONTENT)
        }
        Err(e) => {
            warn!(id = %id, error = %e, "Upstream delete failed");
            Err(ForwardError::from(e))
        }
    }
}
