//! Front-end configuration.
//!
//! The browser build cannot read the process environment at runtime, so the
//! backend location is baked in at compile time through `AFCON_API_URL`.

/// Fallback used when `AFCON_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Local storage key holding the selected display theme.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Local storage key marking that the chat onboarding badge was shown.
pub const ONBOARDING_STORAGE_KEY: &str = "hasVisitedChatbot";

/// Location of the ticketing REST API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl ApiConfig {
    /// Builds a configuration from an explicit base URL, normalizing away
    /// surrounding whitespace and trailing slashes.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Reads `AFCON_API_URL` as captured when the crate was compiled.
    pub fn from_env() -> Self {
        Self::from_value(option_env!("AFCON_API_URL"))
    }

    fn from_value(value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(url) => Self::new(url),
            None => Self::new(DEFAULT_API_URL),
        }
    }

    /// The normalized base URL, never ending in `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins `path` onto the base URL with exactly one separator.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
