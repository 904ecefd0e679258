use crate::client::{ApiError, LeaderboardFetch, LeaderboardView};
use crate::context::{NameStore, SessionContext};
use crate::models::{AppState, Question};
use crate::session::{QuizSession, ScoreSubmission, SubmitStatus};

/// Results arriving from background network tasks.
#[derive(Debug)]
pub enum AppEvent {
    Leaderboard(LeaderboardFetch),
    ScoreSubmitted(Result<(), ApiError>),
}

impl From<LeaderboardFetch> for AppEvent {
    fn from(fetch: LeaderboardFetch) -> Self {
        AppEvent::Leaderboard(fetch)
    }
}

/// Side effects the event loop performs on the app's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Submit(ScoreSubmission),
    StartPolling,
    StopPolling,
    Quit,
}

pub struct App {
    pub state: AppState,
    context: SessionContext,
    names: Box<dyn NameStore>,
    session: QuizSession,
    name_input: String,
    name_error: Option<String>,
    leaderboard: LeaderboardView,
    return_state: AppState,
}

impl App {
    /// Build the app with a freshly shuffled session.
    pub fn new(questions: Vec<Question>, names: Box<dyn NameStore>) -> Self {
        Self::with_session(QuizSession::new(questions), names)
    }

    pub fn with_session(session: QuizSession, names: Box<dyn NameStore>) -> Self {
        let context = SessionContext::restore(names.as_ref());
        let name_input = context.display_name().unwrap_or_default().to_string();

        Self {
            state: AppState::NameEntry,
            context,
            names,
            session,
            name_input,
            name_error: None,
            leaderboard: LeaderboardView::new(),
            return_state: AppState::Quiz,
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut QuizSession {
        &mut self.session
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn leaderboard(&self) -> &LeaderboardView {
        &self.leaderboard
    }

    pub fn leaderboard_mut(&mut self) -> &mut LeaderboardView {
        &mut self.leaderboard
    }

    pub fn name_input(&self) -> &str {
        &self.name_input
    }

    pub fn name_error(&self) -> Option<&str> {
        self.name_error.as_deref()
    }

    pub fn name_input_push(&mut self, c: char) {
        self.name_error = None;
        self.name_input.push(c);
    }

    pub fn name_input_pop(&mut self) {
        self.name_error = None;
        self.name_input.pop();
    }

    /// Adopt the typed name and move on to the quiz.
    pub fn confirm_name(&mut self) -> bool {
        match self
            .context
            .set_display_name(&self.name_input, self.names.as_ref())
        {
            Ok(()) => {
                self.name_error = None;
                self.state = AppState::Quiz;
                true
            }
            Err(reason) => {
                self.name_error = Some(reason.to_string());
                false
            }
        }
    }

    /// Start submitting the score if every question is answered.
    pub fn submit(&mut self) -> Option<Command> {
        let name = self.context.display_name()?.to_string();
        self.session.begin_submit(&name).map(Command::Submit)
    }

    pub fn retry(&mut self) {
        self.session.retry();
        self.state = AppState::Quiz;
    }

    pub fn open_leaderboard(&mut self) -> Option<Command> {
        if self.state == AppState::Leaderboard || self.state == AppState::NameEntry {
            return None;
        }

        self.return_state = self.state;
        self.leaderboard = LeaderboardView::new();
        self.state = AppState::Leaderboard;
        Some(Command::StartPolling)
    }

    pub fn close_leaderboard(&mut self) -> Option<Command> {
        if self.state != AppState::Leaderboard {
            return None;
        }

        self.state = self.return_state;
        Some(Command::StopPolling)
    }

    pub fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Leaderboard(fetch) => {
                // Late fetches can land after the screen was left.
                if self.state == AppState::Leaderboard {
                    self.leaderboard.apply(fetch);
                }
            }
            AppEvent::ScoreSubmitted(result) => {
                self.session.complete_submit(result.map_err(|e| e.submit_message()));
                if let SubmitStatus::Submitted { score } = self.session.status() {
                    log::info!("Score {} submitted", score);
                    if self.state == AppState::Quiz {
                        self.state = AppState::Results;
                    } else if self.state == AppState::Leaderboard {
                        self.return_state = AppState::Results;
                    }
                }
            }
        }
    }

    pub fn total_questions(&self) -> usize {
        self.session.total_questions()
    }
}
