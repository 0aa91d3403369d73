//! Environment helpers for the app shell.

use crate::core::config::{BASE_URL_OVERRIDE_KEY, DEFAULT_BASE_URL, PickerConfig, resolve_base_url};
use crate::core::query::QueryPairs;
use crate::features::contacts::logic::UrlState;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use web_sys::Url;

/// Endpoint configuration for this page load.
pub(crate) fn load_picker_config() -> PickerConfig {
    let override_value = LocalStorage::get::<String>(BASE_URL_OVERRIDE_KEY).ok();
    PickerConfig::new(resolve_base_url(
        &api_base_url(),
        override_value.as_deref(),
    ))
}

/// Picker parameters present in the address at boot.
pub(crate) fn load_url_state() -> UrlState {
    let search = window().location().search().unwrap_or_default();
    UrlState::from_query(&QueryPairs::parse(&search))
}

fn api_base_url() -> String {
    let href = window()
        .location()
        .href()
        .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    if let Ok(url) = Url::new(&href) {
        let mut base = format!("{}//{}", url.protocol(), url.hostname());
        let port = url.port();
        if !port.is_empty() {
            base.push(':');
            base.push_str(&port);
        }
        return base;
    }

    DEFAULT_BASE_URL.to_string()
}
