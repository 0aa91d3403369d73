//! Contact picker feature wiring.
//!
//! # Design
//! - Keep search, selection and address sync contained in a single feature slice.
//! - Restrict API calls to this feature layer to honor UI boundaries.

pub mod actions;
#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
