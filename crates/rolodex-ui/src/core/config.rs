//! Endpoint configuration for the contacts lookup.
//!
//! # Design
//! - The base address is the only configurable value; the list path is fixed.
//! - Joining never produces doubled or missing slashes.

/// Default backend address when nothing else is known.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
/// Listing path for contacts on the backend.
pub const CONTACTS_LIST_PATH: &str = "/contacts/list/";
/// LocalStorage key that overrides the derived base address.
pub const BASE_URL_OVERRIDE_KEY: &str = "rolodex.api_base_url";

/// Where contact lookups are sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickerConfig {
    /// Scheme, host and optional port of the backend.
    pub base_url: String,
    /// Path of the contacts listing endpoint.
    pub list_path: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl PickerConfig {
    /// Build a config for `base_url` using the standard listing path.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            list_path: CONTACTS_LIST_PATH.to_string(),
        }
    }

    /// Absolute listing URL without a query string.
    #[must_use]
    pub fn list_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.list_path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

/// Pick the effective base address: a non-blank override wins over the derived one.
#[must_use]
pub fn resolve_base_url(derived: &str, override_value: Option<&str>) -> String {
    override_value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(derived)
        .trim_end_matches('/')
        .to_string()
}
