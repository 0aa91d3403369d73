//! HTTP client helpers (REST).

use crate::core::config::PickerConfig;
use crate::features::contacts::logic::{build_lookup_url, candidates_from_payload};
use crate::features::contacts::state::Candidate;
use crate::services::error::ApiError;
use gloo_net::http::Request;
use serde_json::Value;

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub config: PickerConfig,
}

impl ApiClient {
    pub(crate) const fn new(config: PickerConfig) -> Self {
        Self { config }
    }

    async fn get_json(&self, url: &str) -> Result<Value, ApiError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        if let Some(err) = ApiError::from_status(response.status()) {
            return Err(err);
        }
        response
            .json::<Value>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    /// First page of contacts matching `term`.
    pub(crate) async fn fetch_contacts(&self, term: &str) -> Result<Vec<Candidate>, ApiError> {
        let payload = self.get_json(&build_lookup_url(&self.config, term)).await?;
        Ok(candidates_from_payload(&payload))
    }
}
