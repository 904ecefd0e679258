//! # daa-quiz
//!
//! A Design and Analysis of Algorithms multiple-choice quiz with a shared,
//! live leaderboard.
//!
//! The crate has two halves:
//!
//! * the **score store** ([`server`], [`store`]): an HTTP service with
//!   `add_score`, `get_leaderboard` and `clear_leaderboard`;
//! * the **terminal client** ([`tui`], [`session`], [`client`]): asks for a
//!   display name, runs a shuffled quiz, submits the score and polls the
//!   leaderboard while it is on screen.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use daa_quiz::{context::MemoryNameStore, data::daa_questions, App, ScoreClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), daa_quiz::QuizError> {
//!     let client = ScoreClient::new("http://localhost:3001")?;
//!     let app = App::new(daa_questions(), Box::new(MemoryNameStore::default()));
//!     daa_quiz::tui::run(app, client).await
//! }
//! ```

mod app;
pub mod client;
pub mod config;
pub mod context;
pub mod data;
pub mod models;
pub mod protocol;
pub mod server;
pub mod session;
pub mod store;
pub mod terminal;
pub mod tui;
mod ui;

use std::io;

pub use app::{App, AppEvent, Command};
pub use client::{ApiError, ScoreClient};
pub use config::{ConfigError, ServerConfig};
pub use context::ProfileError;
pub use data::{load_questions_from_json, LoadError};
pub use models::{AppState, Performance, Question, ScoreRecord};
pub use session::QuizSession;
pub use store::{ScoreStore, StoreError};

/// Error type for quiz operations.
#[derive(Debug)]
pub enum QuizError {
    /// Error loading questions from file.
    Load(LoadError),
    /// IO error during quiz execution or while serving.
    Io(io::Error),
    /// The score store could not be opened.
    Store(StoreError),
    /// A request to the score store failed.
    Api(ApiError),
    /// Bad server settings.
    Config(ConfigError),
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Load(e) => write!(f, "Failed to load questions: {}", e),
            QuizError::Io(e) => write!(f, "IO error: {}", e),
            QuizError::Store(e) => write!(f, "Score store error: {}", e),
            QuizError::Api(e) => write!(f, "{}", e),
            QuizError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Load(e) => Some(e),
            QuizError::Io(e) => Some(e),
            QuizError::Store(e) => Some(e),
            QuizError::Api(e) => Some(e),
            QuizError::Config(e) => Some(e),
        }
    }
}

impl From<LoadError> for QuizError {
    fn from(err: LoadError) -> Self {
        QuizError::Load(err)
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}

impl From<StoreError> for QuizError {
    fn from(err: StoreError) -> Self {
        QuizError::Store(err)
    }
}

impl From<ApiError> for QuizError {
    fn from(err: ApiError) -> Self {
        QuizError::Api(err)
    }
}

impl From<ConfigError> for QuizError {
    fn from(err: ConfigError) -> Self {
        QuizError::Config(err)
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;
    use crate::client::api::server_error;

    #[test]
    fn test_api_error_names_the_failed_request() {
        let err: QuizError = server_error(StatusCode::BAD_GATEWAY, "", "clear leaderboard").into();
        assert_eq!(err.to_string(), "Failed to clear leaderboard: 502 Bad Gateway");
    }

    #[test]
    fn test_api_error_shows_store_message() {
        let err: QuizError = server_error(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error":"db down"}"#, "fetch scores").into();
        assert_eq!(err.to_string(), "db down");
    }
}
