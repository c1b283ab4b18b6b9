//! Blocking REST client for the activity service.
//!
//! Wraps the three read endpoints the calendar and its forms consume
//! (`/api/activities`, `/api/categories`, `/api/locations`) and the
//! quick-create `POST /api/activities`. There is no retry: a failed call is
//! reported once and the caller decides how to degrade.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::models::activity::{Activity, ActivityDraft, DraftError};
use crate::models::category::Category;
use crate::models::location::Location;
use crate::models::settings::Settings;

pub const ACTIVITIES_PATH: &str = "/api/activities";
pub const CATEGORIES_PATH: &str = "/api/categories";
pub const LOCATIONS_PATH: &str = "/api/locations";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API base URL must use http or https (got '{0}')")]
    InvalidBaseUrl(String),
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("network error calling {endpoint}: {source}")]
    Network {
        endpoint: String,
        source: reqwest::Error,
    },
    #[error("{endpoint} answered with HTTP status {status}")]
    Status { endpoint: String, status: StatusCode },
    #[error("response from {endpoint} is too large ({size} bytes > {limit} bytes)")]
    TooLarge {
        endpoint: String,
        size: usize,
        limit: usize,
    },
    #[error("could not decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        source: serde_json::Error,
    },
    #[error("server rejected the request: {0}")]
    Rejected(String),
    #[error("invalid activity draft: {0}")]
    InvalidDraft(#[from] DraftError),
}

/// Body of a write response: `{"success": true, "id": 12}` or `{"error": "..."}`.
#[derive(Debug, Deserialize)]
struct WriteResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    error: Option<String>,
}

pub struct ApiClient {
    client: Client,
    base_url: String,
    max_response_bytes: usize,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            max_response_bytes: 5 * 1024 * 1024,
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, ApiError> {
        Self::new(
            &settings.api_base_url,
            Duration::from_secs(settings.request_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn activities(&self) -> Result<Vec<Activity>, ApiError> {
        self.get_json(ACTIVITIES_PATH)
    }

    pub fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json(CATEGORIES_PATH)
    }

    pub fn locations(&self) -> Result<Vec<Location>, ApiError> {
        self.get_json(LOCATIONS_PATH)
    }

    /// Validate and submit a quick-create draft. Returns the new id when the
    /// server reports one.
    pub fn create_activity(&self, draft: &ActivityDraft) -> Result<Option<i64>, ApiError> {
        draft.validate()?;

        let endpoint = self.endpoint(ACTIVITIES_PATH);
        let response = self
            .client
            .post(&endpoint)
            .json(&draft.normalized())
            .send()
            .map_err(|source| ApiError::Network {
                endpoint: endpoint.clone(),
                source,
            })?;

        let status = response.status();
        let body = self.read_body(&endpoint, response)?;
        let parsed: Option<WriteResponse> = serde_json::from_str(&body).ok();

        match parsed {
            Some(WriteResponse { error: Some(error), .. }) => Err(ApiError::Rejected(error)),
            _ if !status.is_success() => Err(ApiError::Status { endpoint, status }),
            Some(WriteResponse { success: true, id, .. }) => {
                log::info!("Created activity {:?} via {}", id, endpoint);
                Ok(id)
            }
            _ => Err(ApiError::Rejected(
                "server did not confirm the activity was saved".to_string(),
            )),
        }
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let endpoint = self.endpoint(path);
        let response = self
            .client
            .get(&endpoint)
            .send()
            .map_err(|source| ApiError::Network {
                endpoint: endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ApiError::Status { endpoint, status });
        }

        let body = self.read_body(&endpoint, response)?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode { endpoint, source })
    }

    fn read_body(
        &self,
        endpoint: &str,
        response: reqwest::blocking::Response,
    ) -> Result<String, ApiError> {
        if let Some(content_length) = response.content_length() {
            if content_length as usize > self.max_response_bytes {
                return Err(ApiError::TooLarge {
                    endpoint: endpoint.to_string(),
                    size: content_length as usize,
                    limit: self.max_response_bytes,
                });
            }
        }

        let body = response.text().map_err(|source| ApiError::Network {
            endpoint: endpoint.to_string(),
            source,
        })?;

        if body.len() > self.max_response_bytes {
            return Err(ApiError::TooLarge {
                endpoint: endpoint.to_string(),
                size: body.len(),
                limit: self.max_response_bytes,
            });
        }

        Ok(body)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
