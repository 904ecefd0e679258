mod question;
mod score;

pub use question::Question;
pub use score::{Performance, ScoreRecord};

/// Which screen the terminal client is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    NameEntry,
    Quiz,
    Results,
    Leaderboard,
}
