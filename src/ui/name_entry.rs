use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Percentage(35),
        Constraint::Length(12),
        Constraint::Percentage(35),
    ])
    .split(area);

    let mut content = vec![
        Line::from(""),
        super::title_line(),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} Questions · Algorithms", app.total_questions()),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter your name: ", Style::default().fg(Color::White)),
            Span::styled(app.name_input(), Style::default().fg(Color::Yellow)),
            Span::styled("_", Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
    ];

    match app.name_error() {
        Some(err) => content.push(Line::from(Span::styled(err, Style::default().fg(Color::Red)))),
        None => content.push(Line::from("")),
    }

    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "[Enter] start quiz  ·  [Esc] quit",
        Style::default().fg(Color::DarkGray),
    )));

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);
}
