//! Terminal client event loop.
//!
//! The loop owns the [`App`]. Network work runs on spawned tasks that report
//! back through an unbounded channel drained before every frame.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::app::{App, AppEvent, Command};
use crate::client::{spawn_poller, ScoreClient};
use crate::config::LEADERBOARD_POLL_INTERVAL;
use crate::models::AppState;
use crate::terminal::TerminalGuard;
use crate::ui;
use crate::QuizError;

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Run the terminal client until the user quits.
pub async fn run(mut app: App, client: ScoreClient) -> Result<(), QuizError> {
    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();
    let mut poller: Option<JoinHandle<()>> = None;
    let mut terminal = TerminalGuard::enter()?;

    loop {
        while let Ok(event) = rx.try_recv() {
            app.apply_event(event);
        }

        terminal.draw(|frame| ui::render(frame, &app))?;

        if !event::poll(INPUT_POLL_TIMEOUT)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match handle_key(&mut app, key.code) {
            Some(Command::Quit) => break,
            Some(command) => execute(command, &client, &tx, &mut poller),
            None => {}
        }
    }

    if let Some(handle) = poller.take() {
        handle.abort();
    }
    Ok(())
}

fn execute(
    command: Command,
    client: &ScoreClient,
    tx: &mpsc::UnboundedSender<AppEvent>,
    poller: &mut Option<JoinHandle<()>>,
) {
    match command {
        Command::Submit(submission) => {
            let client = client.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = client.add_score(&submission.name, submission.score).await;
                let _ = tx.send(AppEvent::ScoreSubmitted(result));
            });
        }
        Command::StartPolling => {
            if let Some(old) = poller.take() {
                old.abort();
            }
            *poller = Some(spawn_poller(client.clone(), LEADERBOARD_POLL_INTERVAL, tx.clone()));
        }
        Command::StopPolling => {
            if let Some(handle) = poller.take() {
                handle.abort();
            }
        }
        Command::Quit => {}
    }
}

/// Map a key press to app changes, returning any side effect to run.
pub fn handle_key(app: &mut App, key: KeyCode) -> Option<Command> {
    match app.state {
        AppState::NameEntry => handle_name_entry_key(app, key),
        AppState::Quiz => handle_quiz_key(app, key),
        AppState::Results => handle_results_key(app, key),
        AppState::Leaderboard => handle_leaderboard_key(app, key),
    }
}

fn handle_name_entry_key(app: &mut App, key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Char(c) => app.name_input_push(c),
        KeyCode::Backspace => app.name_input_pop(),
        KeyCode::Enter => {
            app.confirm_name();
        }
        KeyCode::Esc => return Some(Command::Quit),
        _ => {}
    }
    None
}

fn handle_quiz_key(app: &mut App, key: KeyCode) -> Option<Command> {
    let session = app.session_mut();
    match key {
        KeyCode::Up | KeyCode::Char('k') => session.highlight_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => session.highlight_next_option(),
        KeyCode::Left | KeyCode::Char('h') => session.previous_question(),
        KeyCode::Right | KeyCode::Char('l') => session.next_question(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            session.select_highlighted();
        }
        KeyCode::Char('s') | KeyCode::Char('S') => return app.submit(),
        KeyCode::Tab => return app.open_leaderboard(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return Some(Command::Quit),
        _ => {}
    }
    None
}

fn handle_results_key(app: &mut App, key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.retry();
            None
        }
        KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Tab => app.open_leaderboard(),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        _ => None,
    }
}

fn handle_leaderboard_key(app: &mut App, key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.leaderboard_mut().toggle_resources();
            None
        }
        KeyCode::Tab | KeyCode::Esc | KeyCode::Char('b') => app.close_leaderboard(),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::MemoryNameStore;
    use crate::data::daa_questions;
    use crate::session::QuizSession;

    fn new_app() -> App {
        App::with_session(
            QuizSession::in_order(daa_questions()),
            Box::new(MemoryNameStore::default()),
        )
    }

    fn type_name(app: &mut App, name: &str) {
        for c in name.chars() {
            assert!(handle_key(app, KeyCode::Char(c)).is_none());
        }
        handle_key(app, KeyCode::Enter);
    }

    #[test]
    fn test_q_is_typed_on_name_entry() {
        let mut app = new_app();
        type_name(&mut app, "Quinn");
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.context().display_name(), Some("Quinn"));
    }

    #[test]
    fn test_escape_quits_from_name_entry() {
        let mut app = new_app();
        assert_eq!(handle_key(&mut app, KeyCode::Esc), Some(Command::Quit));
    }

    #[test]
    fn test_answering_with_keys_then_submitting() {
        let mut app = new_app();
        type_name(&mut app, "Ada");

        assert!(handle_key(&mut app, KeyCode::Char('s')).is_none());

        for _ in 0..app.total_questions() {
            handle_key(&mut app, KeyCode::Enter);
            handle_key(&mut app, KeyCode::Char('l'));
        }
        assert_eq!(app.session().answered_count(), 10);

        let command = handle_key(&mut app, KeyCode::Char('s'));
        assert!(matches!(command, Some(Command::Submit(_))));

        // Answers are frozen while the submission is in flight.
        handle_key(&mut app, KeyCode::Char('j'));
        handle_key(&mut app, KeyCode::Enter);
        let last = app.session().current_question().unwrap().clone();
        assert_eq!(app.session().selection(last.id), Some(last.options[0].as_str()));
    }

    #[test]
    fn test_tab_toggles_leaderboard() {
        let mut app = new_app();
        type_name(&mut app, "Ada");

        assert_eq!(handle_key(&mut app, KeyCode::Tab), Some(Command::StartPolling));
        assert_eq!(app.state, AppState::Leaderboard);

        handle_key(&mut app, KeyCode::Char('s'));
        assert!(app.leaderboard().show_resources());

        assert_eq!(handle_key(&mut app, KeyCode::Tab), Some(Command::StopPolling));
        assert_eq!(app.state, AppState::Quiz);
    }
}
