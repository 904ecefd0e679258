//! Typed client for the score store HTTP API.

use std::fmt;
use std::time::Duration;

use reqwest::StatusCode;

use crate::models::ScoreRecord;
use crate::protocol::{AddScoreRequest, ErrorBody, ADD_SCORE_PATH, CLEAR_LEADERBOARD_PATH, GET_LEADERBOARD_PATH};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Shown when a submission fails without a message from the store.
pub const SUBMIT_FALLBACK_MESSAGE: &str = "Failed to submit score. Please try again.";

#[derive(Debug)]
pub enum ApiError {
    /// The request never produced a response.
    Network(reqwest::Error),
    /// The store answered with a non-success status.
    Server { status: u16, message: String },
    /// The response body was not what the API promises.
    Decode(reqwest::Error),
}

impl ApiError {
    /// Text shown next to the submit button after a failed submission.
    ///
    /// The store's own message wins. Anything else gets the generic
    /// submission fallback, so only use this for `add_score` failures.
    pub fn submit_message(&self) -> String {
        match self {
            ApiError::Server { message, .. } => message.clone(),
            _ => SUBMIT_FALLBACK_MESSAGE.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "could not reach the score store: {}", e),
            ApiError::Server { message, .. } => write!(f, "{}", message),
            ApiError::Decode(e) => write!(f, "unexpected response from the score store: {}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Network(e) | ApiError::Decode(e) => Some(e),
            ApiError::Server { .. } => None,
        }
    }
}

/// Build the error for a non-success answer.
///
/// Uses the body's `error` field when there is one, otherwise a generic
/// message naming the failed action and the status.
pub fn server_error(status: StatusCode, body: &str, action: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.error)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| {
            format!(
                "Failed to {}: {} {}",
                action,
                status.as_u16(),
                status.canonical_reason().unwrap_or("")
            )
            .trim_end()
            .to_string()
        });

    ApiError::Server {
        status: status.as_u16(),
        message,
    }
}

#[derive(Clone)]
pub struct ScoreClient {
    http: reqwest::Client,
    base_url: String,
}

impl ScoreClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn add_score(&self, name: &str, score: u32) -> Result<(), ApiError> {
        let url = self.url(ADD_SCORE_PATH);
        log::debug!("POST {} name={} score={}", url, name, score);

        let response = self
            .http
            .post(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&AddScoreRequest {
                name: name.to_string(),
                score,
            })
            .send()
            .await
            .map_err(ApiError::Network)?;

        ensure_success(response, "submit score").await?;
        Ok(())
    }

    pub async fn get_leaderboard(&self) -> Result<Vec<ScoreRecord>, ApiError> {
        let url = self.url(GET_LEADERBOARD_PATH);
        log::debug!("GET {}", url);

        let response = self.http.get(&url).send().await.map_err(ApiError::Network)?;
        let response = ensure_success(response, "fetch scores").await?;
        response.json().await.map_err(ApiError::Decode)
    }

    pub async fn clear_leaderboard(&self) -> Result<(), ApiError> {
        let url = self.url(CLEAR_LEADERBOARD_PATH);
        log::debug!("POST {}", url);

        let response = self.http.post(&url).send().await.map_err(ApiError::Network)?;
        ensure_success(response, "clear leaderboard").await?;
        Ok(())
    }
}

async fn ensure_success(response: reqwest::Response, action: &str) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let err = server_error(status, &body, action);
    log::warn!("Score store answered {} to {}: {}", status, action, err);
    Err(err)
}
