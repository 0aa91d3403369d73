//! Feature slices for the Web UI.
pub mod contacts;
