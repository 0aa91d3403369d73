//! HTTP client helpers for the contacts lookup.

pub mod error;

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
