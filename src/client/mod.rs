//! Score store client.
//!
//! HTTP access to the store, the leaderboard view state, and the poller
//! that keeps it fresh.

pub mod api;
pub mod leaderboard;
pub mod poller;

pub use api::{ApiError, ScoreClient};
pub use leaderboard::{LeaderboardFetch, LeaderboardRow, LeaderboardStatus, LeaderboardView};
pub use poller::spawn_poller;
