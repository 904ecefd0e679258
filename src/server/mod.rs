//! Score store service.
//!
//! Serves `add_score`, `get_leaderboard` and `clear_leaderboard` over HTTP.

mod cors;
mod handlers;
mod routes;
mod server;

pub use cors::configure_cors;
pub use handlers::ScoreService;
pub use routes::configure_routes;
pub use server::{open_store, run};
