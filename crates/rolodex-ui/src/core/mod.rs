//! Core, DOM-free primitives and helpers for the Web UI.
pub mod config;
pub mod query;
pub mod store;
