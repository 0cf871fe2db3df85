//! Build-time settings for the browser bundle

use orderdesk_core::DashboardConfig;
use tracing::warn;

/// API base URL used when neither `ORDERDESK_API_BASE_URL` nor the page origin is known
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8080";

/// Settings the UI starts with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Where the web host serves `/api/orders`
    pub api_base_url: String,
    /// Dashboard section, replaced by the host's copy once loaded
    pub dashboard: DashboardConfig,
}

impl Settings {
    /// Settings baked in through `ORDERDESK_API_BASE_URL` and `ORDERDESK_PER_PAGE`
    ///
    /// Without a baked-in URL the bundle talks to the origin it was served from.
    pub fn from_build_env() -> Self {
        let origin = page_origin();
        Self::from_values(
            option_env!("ORDERDESK_API_BASE_URL"),
            option_env!("ORDERDESK_PER_PAGE"),
            origin.as_deref(),
        )
    }

    /// Settings from raw values; blank or invalid values fall back to defaults
    ///
    /// The API base URL is the explicit value, else `origin`, else
    /// [`DEFAULT_API_BASE_URL`].
    pub fn from_values(
        api_base_url: Option<&str>,
        per_page: Option<&str>,
        origin: Option<&str>,
    ) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .or_else(|| origin.map(str::trim).filter(|url| !url.is_empty()))
            .unwrap_or(DEFAULT_API_BASE_URL)
            .to_string();

        let mut dashboard = DashboardConfig::default();
        if let Some(raw) = per_page {
            match raw.trim().parse::<u32>() {
                Ok(value) => dashboard.per_page = value,
                Err(e) => warn!(raw, error = %e, "Ignoring invalid ORDERDESK_PER_PAGE"),
            }
        }
        if let Err(e) = dashboard.validate() {
            warn!(error = %e, "Falling back to default dashboard settings");
            dashboard = DashboardConfig::default();
        }

        Self {
            api_base_url,
            dashboard,
        }
    }

    /// Adopt the host's dashboard section if it validates
    pub fn with_dashboard(mut self, dashboard: DashboardConfig) -> Self {
        match dashboard.validate() {
            Ok(()) => self.dashboard = dashboard,
            Err(e) => warn!(error = %e, "Ignoring dashboard settings from host"),
        }
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

/// Origin of the page the bundle runs in
#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    leptos::prelude::window().location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
const fn page_origin() -> Option<String> {
    None
}
