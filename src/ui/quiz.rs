use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::session::{OptionMark, QuizSession, SubmitStatus};

const OPTION_LABELS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let Some(question) = session.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_progress(frame, chunks[0], session, app.context().display_name());
    render_question_text(frame, chunks[1], question.id, &question.prompt);
    render_options(frame, chunks[2], session, question.id, &question.options);
    render_submit_status(frame, chunks[3], session);
    super::render_controls(
        frame,
        chunks[4],
        "j/k option  ·  h/l question  ·  enter select  ·  s submit  ·  tab leaderboard  ·  q quit",
    );
}

fn render_progress(frame: &mut Frame, area: Rect, session: &QuizSession, name: Option<&str>) {
    let chunks = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let welcome = Paragraph::new(format!("Welcome, {}!", name.unwrap_or("")))
        .fg(Color::Green);
    frame.render_widget(welcome, chunks[0]);

    let progress = format!(
        "{}/{}  ·  answered {}",
        session.current_index() + 1,
        session.total_questions(),
        session.answered_count()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, chunks[1]);
}

fn render_question_text(frame: &mut Frame, area: Rect, id: u32, text: &str) {
    let widget = Paragraph::new(format!("{}. {}", id, text))
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, session: &QuizSession, question_id: u32, options: &[String]) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_highlighted = index == session.highlighted_option();
        let mark = session.option_mark(question_id, option);

        let style = match mark {
            OptionMark::Selected => Style::default().fg(Color::Cyan).bold(),
            OptionMark::Correct => Style::default().fg(Color::Green).bold(),
            OptionMark::Incorrect => Style::default().fg(Color::Red).bold(),
            OptionMark::Unselected | OptionMark::Neutral => Style::default().fg(Color::Gray),
        };
        let cursor = if is_highlighted { ">" } else { " " };
        let bullet = if mark == OptionMark::Selected { "●" } else { "○" };
        let label = OPTION_LABELS.get(index).copied().unwrap_or('?');

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", cursor), Style::default().fg(Color::Yellow)),
            Span::styled(format!("{} {}. ", bullet, label), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_submit_status(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let mut lines = Vec::new();

    if let Some(err) = session.error() {
        lines.push(Line::from(Span::styled(err, Style::default().fg(Color::Red).bold())));
    } else {
        lines.push(Line::from(""));
    }

    let hint = match session.status() {
        SubmitStatus::Submitting => Span::styled("Submitting...", Style::default().fg(Color::Yellow)),
        _ if session.can_submit() => Span::styled(
            "All questions answered. Press [S] to submit.",
            Style::default().fg(Color::Green),
        ),
        _ => Span::styled(
            "Please answer all questions before submitting",
            Style::default().fg(Color::DarkGray),
        ),
    };
    lines.push(Line::from(hint));

    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}
