use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::controller::FinalReport;
use crate::view::{summary_answer_line, summary_question_line};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(report) = app.report() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[0], report);
    render_correct_answers(frame, chunks[1], report, app.summary_scroll());
    render_controls(frame, chunks[2]);
}

fn get_grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, report: &FinalReport) {
    let grade_color = get_grade_color(report.percentage());

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            report.score_text(),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(Span::styled(
            format!(
                "{} answered  ·  {} unanswered",
                report.answered, report.unanswered
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_correct_answers(frame: &mut Frame, area: Rect, report: &FinalReport, scroll: usize) {
    let lines: Vec<Line> = report
        .summary
        .iter()
        .flat_map(|entry| {
            [
                Line::from(Span::styled(
                    summary_question_line(entry),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(Span::styled(
                    format!("   {}", summary_answer_line(entry)),
                    Style::default().fg(Color::Green),
                )),
            ]
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Correct Answers ")
                .title_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        )
        .scroll((scroll_offset(scroll), 0));
    frame.render_widget(widget, area);
}

fn scroll_offset(scroll: usize) -> u16 {
    u16::try_from(scroll).unwrap_or(u16::MAX)
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r restart  ·  h home  ·  t 12/24h  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset_saturates() {
        assert_eq!(scroll_offset(7), 7);
        assert_eq!(scroll_offset(70_000), u16::MAX);
    }
}
