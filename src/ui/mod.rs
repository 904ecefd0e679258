mod leaderboard;
mod name_entry;
mod quiz;
mod results;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::AppState;

const TITLE: &str = "DAA QUIZ";

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state {
        AppState::NameEntry => name_entry::render(frame, area, app),
        AppState::Quiz => quiz::render(frame, area, app),
        AppState::Results => results::render(frame, area, app),
        AppState::Leaderboard => leaderboard::render(frame, area, app),
    }
}

fn title_line() -> Line<'static> {
    Line::from(Span::styled(TITLE, Style::default().fg(Color::Cyan).bold()))
}

fn render_controls(frame: &mut Frame, area: Rect, text: &str) {
    let widget = ratatui::widgets::Paragraph::new(text.to_string())
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
