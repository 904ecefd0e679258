//! State behind the leaderboard screen.

use crate::models::{Performance, ScoreRecord};

use super::api::ApiError;

pub const LOAD_ERROR_MESSAGE: &str = "Failed to load leaderboard. Please try again later.";
pub const EMPTY_MESSAGE: &str = "No scores yet. Be the first to take the quiz!";

/// Outcome of one leaderboard fetch.
pub type LeaderboardFetch = Result<Vec<ScoreRecord>, ApiError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderboardStatus {
    /// No response has arrived yet.
    Loading,
    Empty,
    Ready,
}

/// One display row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub rank: usize,
    pub name: String,
    pub score: u32,
    pub performance: Performance,
    pub is_you: bool,
}

#[derive(Debug, Clone)]
pub struct LeaderboardView {
    entries: Vec<ScoreRecord>,
    loading: bool,
    error: Option<String>,
    show_resources: bool,
}

impl Default for LeaderboardView {
    fn default() -> Self {
        Self::new()
    }
}

impl LeaderboardView {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            loading: true,
            error: None,
            show_resources: false,
        }
    }

    /// Fold a fetch result into the view.
    ///
    /// Success replaces the whole list. Failure keeps the last list and
    /// shows the error. Either way loading is over.
    pub fn apply(&mut self, fetch: LeaderboardFetch) {
        match fetch {
            Ok(entries) => {
                self.entries = entries;
                self.error = None;
            }
            Err(e) => {
                log::warn!("Leaderboard refresh failed: {}", e);
                self.error = Some(LOAD_ERROR_MESSAGE.to_string());
            }
        }
        self.loading = false;
    }

    pub fn status(&self) -> LeaderboardStatus {
        if self.loading {
            LeaderboardStatus::Loading
        } else if self.entries.is_empty() {
            LeaderboardStatus::Empty
        } else {
            LeaderboardStatus::Ready
        }
    }

    pub fn entries(&self) -> &[ScoreRecord] {
        &self.entries
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn show_resources(&self) -> bool {
        self.show_resources
    }

    pub fn toggle_resources(&mut self) {
        self.show_resources = !self.show_resources;
    }

    /// Rows in store order, ranked from 1.
    pub fn rows(&self, current_user: Option<&str>, total_questions: u32) -> Vec<LeaderboardRow> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| LeaderboardRow {
                rank: i + 1,
                name: entry.name.clone(),
                score: entry.score,
                performance: Performance::grade(entry.score, total_questions),
                is_you: current_user == Some(entry.name.as_str()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;
    use crate::client::api::server_error;

    fn fetch_failure() -> LeaderboardFetch {
        Err(server_error(StatusCode::SERVICE_UNAVAILABLE, "", "fetch scores"))
    }

    #[test]
    fn test_starts_loading() {
        let view = LeaderboardView::new();
        assert_eq!(view.status(), LeaderboardStatus::Loading);
        assert!(view.error().is_none());
    }

    #[test]
    fn test_empty_response_shows_empty_state() {
        let mut view = LeaderboardView::new();
        view.apply(Ok(vec![]));
        assert_eq!(view.status(), LeaderboardStatus::Empty);
        assert!(view.rows(Some("Ada"), 10).is_empty());
    }

    #[test]
    fn test_success_replaces_list_and_clears_error() {
        let mut view = LeaderboardView::new();
        view.apply(fetch_failure());
        assert_eq!(view.error(), Some(LOAD_ERROR_MESSAGE));

        view.apply(Ok(vec![ScoreRecord::new("Ada", 10), ScoreRecord::new("Grace", 7)]));
        assert!(view.error().is_none());
        assert_eq!(view.status(), LeaderboardStatus::Ready);

        view.apply(Ok(vec![ScoreRecord::new("Linus", 3)]));
        assert_eq!(view.entries(), &[ScoreRecord::new("Linus", 3)]);
    }

    #[test]
    fn test_failure_keeps_previous_list_and_stops_loading() {
        let mut view = LeaderboardView::new();
        view.apply(fetch_failure());
        assert_eq!(view.status(), LeaderboardStatus::Empty);

        view.apply(Ok(vec![ScoreRecord::new("Ada", 8)]));
        view.apply(fetch_failure());
        assert_eq!(view.entries().len(), 1);
        assert_eq!(view.error(), Some(LOAD_ERROR_MESSAGE));
    }

    #[test]
    fn test_rows_mark_current_user_and_grade() {
        let mut view = LeaderboardView::new();
        view.apply(Ok(vec![
            ScoreRecord::new("Ada", 10),
            ScoreRecord::new("Grace", 8),
            ScoreRecord::new("Linus", 2),
        ]));

        let rows = view.rows(Some("Grace"), 10);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].performance, Performance::Perfect);
        assert!(!rows[0].is_you);
        assert!(rows[1].is_you);
        assert_eq!(rows[1].performance, Performance::Excellent);
        assert_eq!(rows[2].performance, Performance::KeepPracticing);
    }

    #[test]
    fn test_toggle_resources() {
        let mut view = LeaderboardView::new();
        view.toggle_resources();
        assert!(view.show_resources());
        view.toggle_resources();
        assert!(!view.show_resources());
    }
}
