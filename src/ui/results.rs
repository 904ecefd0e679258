use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::session::QuizSession;

const QUESTION_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let score = session.compute_score() as usize;
    let total = session.total_questions();

    let chunks = Layout::vertical([
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[0], session, score, total);
    render_question_breakdown(frame, chunks[1], session);
    super::render_controls(frame, chunks[2], "r try again  ·  l leaderboard  ·  q quit");
}

fn grade_color(score: usize, total: usize) -> Color {
    let percentage = if total > 0 { score * 100 / total } else { 0 };
    match percentage {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, session: &QuizSession, score: usize, total: usize) {
    let content = vec![
        Line::from(""),
        super::title_line(),
        Line::from(""),
        Line::from(Span::styled(
            format!("Your Score: {} out of {}", score, total),
            Style::default().fg(grade_color(score, total)).bold(),
        )),
        Line::from(Span::styled(session.feedback(), Style::default().fg(Color::Gray))),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_question_breakdown(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let lines: Vec<Line> = session
        .review()
        .iter()
        .map(|item| {
            let (symbol, color) = if item.is_correct() {
                ("+", Color::Green)
            } else {
                ("-", Color::Red)
            };

            let mut spans = vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", item.question.id),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(truncate_question(&item.question.prompt), Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("  {} ", item.selected.unwrap_or("-")),
                    Style::default().fg(color),
                ),
            ];
            if !item.is_correct() {
                spans.push(Span::styled(
                    format!(" answer: {}", item.correct_answer()),
                    Style::default().fg(Color::Green),
                ));
            }
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}
