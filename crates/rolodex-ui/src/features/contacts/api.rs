//! API helpers for contact lookups.
//!
//! # Design
//! - Keep HTTP calls localized to the feature layer.
//! - Reuse the shared ApiClient for transport and status handling.
//! - A 2xx body that is not JSON counts as an empty page, like any other odd shape.

use crate::features::contacts::logic::empty_page_on_decode_error;
use crate::features::contacts::state::Candidate;
use crate::services::api::ApiClient;
use crate::services::error::ApiError;
use gloo::console;

/// Fetch the first page of candidates for `term`.
pub(crate) async fn fetch_candidates(
    client: &ApiClient,
    term: &str,
) -> Result<Vec<Candidate>, ApiError> {
    let result = client.fetch_contacts(term).await;
    if let Err(ApiError::Decode(detail)) = &result {
        console::warn!("contact lookup returned a non-JSON body", detail.clone());
    }
    empty_page_on_decode_error(result)
}
