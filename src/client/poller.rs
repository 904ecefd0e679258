//! Interval polling of the leaderboard.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::api::ScoreClient;
use super::leaderboard::LeaderboardFetch;

/// Fetch the leaderboard now and then once per `period`.
///
/// Every tick runs its fetch as a separate task, so a slow response never
/// delays the next poll and overlapping fetches are not merged. Results are
/// delivered on `tx`. Polling stops when the returned handle is aborted or
/// the receiver is dropped.
pub fn spawn_poller<E>(client: ScoreClient, period: Duration, tx: mpsc::UnboundedSender<E>) -> JoinHandle<()>
where
    E: From<LeaderboardFetch> + Send + 'static,
{
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            if tx.is_closed() {
                log::debug!("Leaderboard receiver gone, stopping poller");
                break;
            }

            let client = client.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let fetch = client.get_leaderboard().await;
                let _ = tx.send(E::from(fetch));
            });
        }
    })
}
