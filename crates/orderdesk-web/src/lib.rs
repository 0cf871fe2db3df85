//! Orderdesk web interface
//!
//! Client-side rendered orders dashboard. View state lives in [`state`] and is
//! driven by [`actions`]; [`components`] only render it.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod actions;
pub mod app;
pub mod components;
pub mod settings;
pub mod state;
pub mod text;

pub use app::App;
pub use settings::Settings;
