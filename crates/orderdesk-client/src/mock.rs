//! In-memory order collection for tests and offline development

use crate::api::OrdersApi;
use crate::error::{ApiError, ApiResult};
use async_trait::async_trait;
use orderdesk_core::{FieldError, NewOrder, Order, OrdersPage, PageQuery};
use parking_lot::Mutex;
use std::sync::Arc;

/// A call received by [`InMemoryOrdersApi`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    /// `list_orders`
    List(PageQuery),
    /// `create_order`
    Create(NewOrder),
    /// `delete_order`
    Delete(String),
}

/// A failure to return from the next call of one kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedFailure {
    /// Answer with a plain HTTP status
    Status(u16),
    /// Answer with a 422 carrying field errors
    FieldErrors(Vec<FieldError>),
}

impl From<ScriptedFailure> for ApiError {
    fn from(failure: ScriptedFailure) -> Self {
        match failure {
            ScriptedFailure::Status(status) => Self::status(status),
            ScriptedFailure::FieldErrors(errors) => Self::FieldErrors(errors),
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    orders: Vec<Order>,
    next_id: u64,
    calls: Vec<ApiCall>,
    fail_list: Option<ScriptedFailure>,
    fail_create: Option<ScriptedFailure>,
    fail_delete: Option<ScriptedFailure>,
}

/// Order collection kept in memory
///
/// Clones share the same collection. Failures are one-shot: a scripted
/// failure answers the next matching call and is then cleared.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrdersApi {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryOrdersApi {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection holding `orders`
    pub fn with_orders(orders: Vec<Order>) -> Self {
        let api = Self::new();
        {
            let mut inner = api.inner.lock();
            inner.next_id = u64::try_from(orders.len()).unwrap_or(u64::MAX);
            inner.orders = orders;
        }
        api
    }

    /// Fail the next `list_orders` call
    pub fn fail_next_list(&self, failure: ScriptedFailure) {
        self.inner.lock().fail_list = Some(failure);
    }

    /// Fail the next `create_order` call
    pub fn fail_next_create(&self, failure: ScriptedFailure) {
        self.inner.lock().fail_create = Some(failure);
    }

    /// Fail the next `delete_order` call
    pub fn fail_next_delete(&self, failure: ScriptedFailure) {
        self.inner.lock().fail_delete = Some(failure);
    }

    /// Calls received so far, oldest first
    pub fn calls(&self) -> Vec<ApiCall> {
        self.inner.lock().calls.clone()
    }

    /// Number of `list_orders` calls received
    pub fn list_calls(&self) -> usize {
        self.inner
            .lock()
            .calls
            .iter()
            .filter(|call| matches!(call, ApiCall::List(_)))
            .count()
    }

    /// Snapshot of the stored orders
    pub fn orders(&self) -> Vec<Order> {
        self.inner.lock().orders.clone()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl OrdersApi for InMemoryOrdersApi {
    async fn list_orders(&self, query: PageQuery) -> ApiResult<OrdersPage> {
        let mut inner = self.inner.lock();
        inner.calls.push(ApiCall::List(query));
        if let Some(failure) = inner.fail_list.take() {
            return Err(failure.into());
        }

        let per_page = usize::try_from(query.per_page.max(1)).unwrap_or(usize::MAX);
        let page = usize::try_from(query.page.max(1)).unwrap_or(usize::MAX);
        let total = inner.orders.len();
        let start = (page - 1).saturating_mul(per_page);
        let items = inner
            .orders
            .iter()
            .skip(start)
            .take(per_page)
            .cloned()
            .collect();
        let total_pages = u32::try_from(total.div_ceil(per_page)).unwrap_or(u32::MAX);

        Ok(OrdersPage {
            items,
            total: u64::try_from(total).unwrap_or(u64::MAX),
            total_pages,
        })
    }

    async fn create_order(&self, order: &NewOrder) -> ApiResult<()> {
        let mut inner = self.inner.lock();
        inner.calls.push(ApiCall::Create(order.clone()));
        if let Some(failure) = inner.fail_create.take() {
            return Err(failure.into());
        }

        inner.next_id += 1;
        let id = inner.next_id.to_string();
        inner.orders.push(Order {
            id,
            order_number: order.order_number.clone(),
            customer: order.customer.clone(),
            status: order.status,
            due_date: order.due_date,
            total_gross: order.total_gross,
        });
        Ok(())
    }

    async fn delete_order(&self, id: &str) -> ApiResult<()> {
        let mut inner = self.inner.lock();
        inner.calls.push(ApiCall::Delete(id.to_string()));
        if let Some(failure) = inner.fail_delete.take() {
            return Err(failure.into());
        }

        let before = inner.orders.len();
        inner.orders.retain(|order| order.id != id);
        if inner.orders.len() == before {
            return Err(ApiError::status(404));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use orderdesk_core::OrderStatus;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    fn order(n: u32) -> Order {
        Order {
            id: n.to_string(),
            order_number: format!("ZAM-{n:03}"),
            customer: format!("Klient {n}"),
            status: OrderStatus::New,
            due_date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            total_gross: Decimal::new(i64::from(n) * 100, 2),
        }
    }

    #[tokio::test]
    async fn test_pages_slice_collection() {
        let api = InMemoryOrdersApi::with_orders((1..=15).map(order).collect());

        let page = api.list_orders(PageQuery::new(3, 7)).await.unwrap();
        assert_eq!(page.total, 15);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "15");

        let beyond = api.list_orders(PageQuery::new(4, 7)).await.unwrap();
        assert!(beyond.items.is_empty());
    }

    #[tokio::test]
    async fn test_scripted_failure_is_one_shot() {
        let api = InMemoryOrdersApi::with_orders(vec![order(1)]);
        api.fail_next_delete(ScriptedFailure::Status(500));

        let first = api.delete_order("1").await;
        assert!(matches!(first, Err(ApiError::Status { status: 500 })));

        api.delete_order("1").await.unwrap();
        assert!(api.orders().is_empty());
        assert_eq!(
            api.calls(),
            vec![
                ApiCall::Delete("1".to_string()),
                ApiCall::Delete("1".to_string())
            ]
        );
    }

    #[tokio::test]
    async fn test_create_assigns_id() {
        let api = InMemoryOrdersApi::with_orders(vec![order(1)]);
        let new_order = NewOrder {
            order_number: "ZAM-100".to_string(),
            customer: "Nowy".to_string(),
            status: OrderStatus::Shipped,
            due_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            total_gross: Decimal::new(5, 0),
        };

        api.create_order(&new_order).await.unwrap();
        let stored = api.orders();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[1].id, "2");
        assert_eq!(stored[1].status, OrderStatus::Shipped);
    }

    #[tokio::test]
    async fn test_missing_order_is_not_found() {
        let api = InMemoryOrdersApi::new();
        let result = api.delete_order("nope").await;
        assert!(matches!(result, Err(ApiError::Status { status: 404 })));
    }
}
