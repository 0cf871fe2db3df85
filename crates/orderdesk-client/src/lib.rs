//! Client for the order collection endpoint
//!
//! [`OrdersApi`] is the seam the dashboard talks through. [`ApiClient`]
//! speaks HTTP with reqwest, [`InMemoryOrdersApi`] keeps everything in
//! memory for tests.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod api;
pub mod client;
pub mod error;
pub mod mock;

pub use api::OrdersApi;
pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
pub use mock::{ApiCall, InMemoryOrdersApi, ScriptedFailure};
