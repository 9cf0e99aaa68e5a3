//! Backend profile client.
//!
//! `GET {base}/schools/{id}/profile` returns an envelope
//! `{success, data?, message?}`. Anything other than a successful envelope
//! with a profile object is a `FetchError`; there are no automatic retries.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::profile::Profile;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Profile service unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Profile service returned HTTP {status}")]
    Status { status: u16 },

    #[error("Malformed profile response: {0}")]
    Malformed(String),

    #[error("Profile request rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    message: Option<String>,
}

/// Decode a backend response body into a profile.
pub fn parse_envelope(body: &[u8]) -> Result<Profile, FetchError> {
    let envelope: Envelope =
        serde_json::from_slice(body).map_err(|e| FetchError::Malformed(e.to_string()))?;

    if !envelope.success {
        let message = envelope
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| "Failed to load school profile".to_string());
        return Err(FetchError::Rejected(message));
    }

    match envelope.data {
        Some(data @ Value::Object(_)) => {
            serde_json::from_value(data).map_err(|e| FetchError::Malformed(e.to_string()))
        }
        _ => Err(FetchError::Malformed("response has no profile data".to_string())),
    }
}

#[derive(Debug, Clone)]
pub struct ProfileClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProfileClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn profile_url(&self, school_id: &str) -> String {
        format!(
            "{}/schools/{}/profile",
            self.base_url,
            urlencoding::encode(school_id)
        )
    }

    pub async fn fetch(&self, school_id: &str) -> Result<Profile, FetchError> {
        let url = self.profile_url(school_id);
        tracing::debug!("Fetching profile from {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status: status.as_u16() });
        }

        let body = response.bytes().await?;
        parse_envelope(&body)
    }
}
