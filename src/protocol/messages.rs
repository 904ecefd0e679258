//! Request and response bodies for the score store HTTP API.
//!
//! All bodies are JSON. Leaderboard listings are bare arrays of
//! [`ScoreRecord`](crate::models::ScoreRecord).

use serde::{Deserialize, Serialize};

pub const ADD_SCORE_PATH: &str = "/add_score";
pub const GET_LEADERBOARD_PATH: &str = "/get_leaderboard";
pub const CLEAR_LEADERBOARD_PATH: &str = "/clear_leaderboard";

/// Body of `POST /add_score`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddScoreRequest {
    pub name: String,
    pub score: u32,
}

/// Successful acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
}

/// Acknowledgement of an accepted score, carrying the stored record's id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreAccepted {
    pub status: String,
    pub message: String,
    pub id: String,
}

/// Body returned with every non-2xx answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn success_response(message: &str) -> ApiResponse {
    ApiResponse {
        status: "success".to_string(),
        message: message.to_string(),
    }
}

pub fn error_body(message: impl Into<String>) -> ErrorBody {
    ErrorBody {
        error: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_shape() {
        let json = serde_json::to_string(&error_body("db down")).unwrap();
        assert_eq!(json, r#"{"error":"db down"}"#);
    }

    #[test]
    fn test_add_score_request_rejects_negative_scores() {
        let parsed: Result<AddScoreRequest, _> = serde_json::from_str(r#"{"name":"Ada","score":-1}"#);
        assert!(parsed.is_err());
    }
}
