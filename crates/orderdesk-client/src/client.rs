//! reqwest-backed implementation of [`OrdersApi`]

use crate::api::OrdersApi;
use crate::error::{ApiError, ApiResult};
use async_trait::async_trait;
use orderdesk_core::{DashboardConfig, FieldErrorsBody, NewOrder, OrdersPage, PageQuery};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// HTTP client for the order collection
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client for `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client whose requests time out after `timeout`
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not absolute or the underlying
    /// HTTP client cannot be built.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: std::time::Duration,
    ) -> ApiResult<Self> {
        let base_url = base_url.into();
        check_base_url(&base_url)?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Wrap an existing reqwest client
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the dashboard settings published by the web host
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the host answers with a
    /// non-success status, or the body is not a dashboard section.
    pub async fn dashboard_settings(&self) -> ApiResult<DashboardConfig> {
        debug!("Fetching dashboard settings");

        let response = self
            .client
            .get(format!("{}/api/dashboard", self.base_url))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status));
        }

        read_json(response).await
    }

    fn orders_url(&self) -> String {
        format!("{}/api/orders", self.base_url)
    }

    fn order_url(&self, id: &str) -> String {
        format!("{}/api/orders/{}", self.base_url, urlencoding::encode(id))
    }
}

/// Reject base URLs that requests could not be joined onto
///
/// # Errors
///
/// Returns [`ApiError::InvalidBaseUrl`] when `base_url` does not parse as an
/// absolute http(s) URL.
pub fn check_base_url(base_url: &str) -> ApiResult<()> {
    let invalid = |message: String| ApiError::InvalidBaseUrl {
        url: base_url.to_string(),
        message,
    };
    let url = reqwest::Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("unsupported scheme {other}"))),
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| ApiError::decode(e.to_string()))
}

fn status_error(status: StatusCode) -> ApiError {
    ApiError::status(status.as_u16())
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl OrdersApi for ApiClient {
    async fn list_orders(&self, query: PageQuery) -> ApiResult<OrdersPage> {
        debug!(page = query.page, per_page = query.per_page, "Fetching orders");

        let response = self
            .client
            .get(self.orders_url())
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Listing orders failed");
            return Err(status_error(status));
        }

        read_json(response).await
    }

    async fn create_order(&self, order: &NewOrder) -> ApiResult<()> {
        debug!(order_number = %order.order_number, "Creating order");

        let response = self
            .client
            .post(self.orders_url())
            .json(order)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        if status == StatusCode::UNPROCESSABLE_ENTITY {
            // A 422 without a readable body is treated like any other failure
            return match read_json::<FieldErrorsBody>(response).await {
                Ok(body) => Err(ApiError::FieldErrors(body.field_errors)),
                Err(_) => Err(status_error(status)),
            };
        }

        warn!(status = status.as_u16(), "Creating order failed");
        Err(status_error(status))
    }

    async fn delete_order(&self, id: &str) -> ApiResult<()> {
        debug!(id, "Deleting order");

        let response = self.client.delete(self.order_url(id)).send().await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            warn!(id, status = status.as_u16(), "Deleting order failed");
            Err(status_error(status))
        }
    }
}
