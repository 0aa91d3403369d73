#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Rolodex contacts listing endpoint.
//!
//! The listing endpoint is owned by another service, so decoding here is
//! deliberately lenient: a payload that does not carry a `results` list is an
//! empty page rather than an error.
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Maximum number of rows requested per lookup.
pub const PAGE_LIMIT: u32 = 25;

/// Single contact row as returned by the listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactSummary {
    /// Backend identifier for the contact.
    pub id: i64,
    /// Company name shown to the user.
    pub company_name: String,
}

/// Query parameters accepted by the listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactListQuery {
    /// Free-text search term; empty means unfiltered.
    pub search: String,
    /// Request the paginated envelope.
    pub paginate: bool,
    /// Page size.
    pub limit: u32,
    /// Row offset.
    pub offset: u32,
}

impl ContactListQuery {
    /// First page of at most [`PAGE_LIMIT`] matches for `term`.
    #[must_use]
    pub fn first_page(term: impl Into<String>) -> Self {
        Self {
            search: term.into(),
            paginate: true,
            limit: PAGE_LIMIT,
            offset: 0,
        }
    }

    /// Query parameters in wire order, values not yet percent-encoded.
    #[must_use]
    pub fn pairs(&self) -> [(&'static str, String); 4] {
        [
            ("search", self.search.clone()),
            ("paginate", self.paginate.to_string()),
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ]
    }
}

impl Default for ContactListQuery {
    fn default() -> Self {
        Self::first_page(String::new())
    }
}

/// Paginated listing envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ContactListResponse {
    /// Rows for the requested page, in server order.
    pub results: Vec<ContactSummary>,
}

impl ContactListResponse {
    /// Decode an arbitrary JSON payload.
    ///
    /// Payloads without a `results` array decode to an empty page and rows
    /// that do not match [`ContactSummary`] are skipped.
    #[must_use]
    pub fn from_value(payload: &Value) -> Self {
        let results = payload
            .get("results")
            .and_then(Value::as_array)
            .map(|rows| {
                rows.iter()
                    .filter_map(|row| ContactSummary::deserialize(row).ok())
                    .collect()
            })
            .unwrap_or_default();
        Self { results }
    }
}
