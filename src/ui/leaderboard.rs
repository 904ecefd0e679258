use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::app::App;
use crate::client::leaderboard::{EMPTY_MESSAGE, LeaderboardRow, LeaderboardStatus};
use crate::config::LEADERBOARD_POLL_INTERVAL;
use crate::models::Question;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.leaderboard();
    let resources_height = if view.show_resources() {
        Constraint::Percentage(40)
    } else {
        Constraint::Length(0)
    };

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Fill(1),
        resources_height,
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0]);

    if let Some(err) = view.error() {
        let widget = Paragraph::new(err.to_string())
            .alignment(Alignment::Center)
            .fg(Color::Red);
        frame.render_widget(widget, chunks[1]);
    }

    match view.status() {
        LeaderboardStatus::Loading => render_message(frame, chunks[2], "Loading leaderboard...", Color::Yellow),
        LeaderboardStatus::Empty => render_message(frame, chunks[2], EMPTY_MESSAGE, Color::Gray),
        LeaderboardStatus::Ready => {
            let rows = view.rows(app.context().display_name(), app.total_questions() as u32);
            render_table(frame, chunks[2], &rows);
        }
    }

    if view.show_resources() {
        render_resources(frame, chunks[3], app.session().questions());
    }

    let footer = Paragraph::new(format!(
        "Leaderboard updates every {} seconds",
        LEADERBOARD_POLL_INTERVAL.as_secs()
    ))
    .alignment(Alignment::Center)
    .fg(Color::DarkGray);
    frame.render_widget(footer, chunks[4]);

    super::render_controls(frame, chunks[5], "s study resources  ·  tab back  ·  q quit");
}

fn render_header(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            "Real-Time Leaderboard",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            "Top performers in DAA MCQ Practice",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), area);
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let widget = Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .fg(color);
    frame.render_widget(widget, area);
}

fn rank_label(rank: usize) -> String {
    match rank {
        1 => "1st".to_string(),
        2 => "2nd".to_string(),
        3 => "3rd".to_string(),
        n => format!("#{}", n),
    }
}

fn rank_style(rank: usize) -> Style {
    match rank {
        1 => Style::default().fg(Color::Yellow).bold(),
        2 => Style::default().fg(Color::White),
        3 => Style::default().fg(Color::LightRed),
        _ => Style::default().fg(Color::DarkGray),
    }
}

fn render_table(frame: &mut Frame, area: Rect, rows: &[LeaderboardRow]) {
    let mut lines = vec![Line::from(Span::styled(
        format!("  {:<6}{:<24}{:<8}{}", "RANK", "NAME", "SCORE", "PERFORMANCE"),
        Style::default().fg(Color::Cyan).bold(),
    ))];

    lines.extend(rows.iter().map(|row| {
        let name_style = if row.is_you {
            Style::default().fg(Color::Black).bg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::White)
        };

        Line::from(vec![
            Span::styled(format!("  {:<6}", rank_label(row.rank)), rank_style(row.rank)),
            Span::styled(format!("{:<24}", row.name), name_style),
            Span::styled(format!("{:<8}", row.score), Style::default().fg(Color::White).bold()),
            Span::styled(row.performance.label(), Style::default().fg(Color::Green)),
        ])
    }));

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_resources(frame: &mut Frame, area: Rect, questions: &[Question]) {
    let mut sorted: Vec<&Question> = questions.iter().collect();
    sorted.sort_by_key(|q| q.id);

    let lines: Vec<Line> = sorted
        .iter()
        .map(|q| {
            Line::from(vec![
                Span::styled(format!("{:2}. ", q.id), Style::default().fg(Color::DarkGray)),
                Span::styled(q.prompt.as_str(), Style::default().fg(Color::White)),
                Span::styled(
                    format!("  {}", q.resource.as_deref().unwrap_or("-")),
                    Style::default().fg(Color::Cyan),
                ),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Study Resources ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_labels() {
        assert_eq!(rank_label(1), "1st");
        assert_eq!(rank_label(3), "3rd");
        assert_eq!(rank_label(4), "#4");
    }
}
