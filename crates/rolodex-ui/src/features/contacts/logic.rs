//! Contact picker parsing and formatting helpers.
//!
//! # Design
//! - Treat the address as a projection of picker state; only initial load reads it.
//! - Missing or malformed address values fall back to defaults, never errors.
//! - Keep request building and response shaping DOM-free for native tests.

use crate::core::config::PickerConfig;
use crate::core::query::QueryPairs;
use crate::features::contacts::state::Candidate;
use crate::services::error::ApiError;
use rolodex_api_models::{ContactListQuery, ContactListResponse, PAGE_LIMIT};
use serde_json::Value;
use std::fmt::Write;

/// Address parameter mirroring the search text.
pub const CONTACT_PARAM: &str = "contact";
/// Address parameter mirroring the selected id (`0` = none).
pub const ID_PARAM: &str = "id";
/// Address parameter recording that a selection was committed.
pub const PAGINATE_PARAM: &str = "paginate";

/// Picker state as serialized into the address query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UrlState {
    /// Search text.
    pub contact: String,
    /// Selected contact id, `0` when nothing is selected.
    pub id: u64,
    /// Pagination flag, set once a selection is committed.
    pub paginate: bool,
}

impl UrlState {
    /// Read picker parameters, defaulting anything missing or malformed.
    #[must_use]
    pub fn from_query(pairs: &QueryPairs) -> Self {
        Self {
            contact: pairs.get(CONTACT_PARAM).unwrap_or_default().to_string(),
            id: pairs.get(ID_PARAM).map_or(0, parse_id),
            paginate: pairs.get(PAGINATE_PARAM) == Some("true"),
        }
    }

    /// Write picker parameters, leaving every other parameter untouched.
    pub fn write_into(&self, pairs: &mut QueryPairs) {
        pairs.set(CONTACT_PARAM, self.contact.clone());
        pairs.set(ID_PARAM, self.id.to_string());
        pairs.set(PAGINATE_PARAM, self.paginate.to_string());
    }

    /// Selected id, if any.
    #[must_use]
    pub const fn selected_id(&self) -> Option<u64> {
        if self.id == 0 { None } else { Some(self.id) }
    }
}

fn parse_id(raw: &str) -> u64 {
    raw.trim().parse::<u64>().unwrap_or(0)
}

/// Term actually sent to the backend; whitespace-only text means unfiltered.
#[must_use]
pub fn lookup_term(search_text: &str) -> &str {
    if search_text.trim().is_empty() {
        ""
    } else {
        search_text
    }
}

/// Full lookup URL for the first page of matches.
#[must_use]
pub fn build_lookup_url(config: &PickerConfig, term: &str) -> String {
    let mut url = config.list_url();
    let query = ContactListQuery::first_page(term);
    for (index, (key, value)) in query.pairs().iter().enumerate() {
        url.push(if index == 0 { '?' } else { '&' });
        let _ = write!(url, "{key}={}", urlencoding::encode(value));
    }
    url
}

/// Shape a listing payload into picker candidates.
///
/// Unexpected payloads give an empty list; rows without a positive id are
/// dropped since `0` already means "no selection" in the address.
#[must_use]
pub fn candidates_from_payload(payload: &Value) -> Vec<Candidate> {
    ContactListResponse::from_value(payload)
        .results
        .into_iter()
        .filter_map(|row| {
            u64::try_from(row.id)
                .ok()
                .filter(|id| *id > 0)
                .map(|id| Candidate {
                    id,
                    display_name: row.company_name,
                })
        })
        .take(PAGE_LIMIT as usize)
        .collect()
}

/// Treat a 2xx body that is not JSON as an empty page; other failures pass through.
///
/// # Errors
///
/// Returns transport and status failures unchanged.
pub fn empty_page_on_decode_error(
    result: Result<Vec<Candidate>, ApiError>,
) -> Result<Vec<Candidate>, ApiError> {
    match result {
        Err(ApiError::Decode(_)) => Ok(Vec::new()),
        other => other,
    }
}
