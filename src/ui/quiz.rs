use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::view::{OptionState, OptionView, QuestionView};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.current_view();

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Length(8),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], &view);
    render_question_text(frame, chunks[1], view.text);
    render_options(frame, chunks[2], &view, app.option_cursor());
    render_feedback(frame, chunks[3], view.feedback.as_deref());
    render_controls(frame, chunks[4], &view);
}

fn render_progress(frame: &mut Frame, area: Rect, view: &QuestionView) {
    let widget = Paragraph::new(view.indicator())
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn option_style(option: &OptionView, locked: bool, is_cursor: bool) -> Style {
    match option.state {
        OptionState::CorrectSelected => Style::default().fg(Color::Green).bold(),
        OptionState::WrongSelected => Style::default().fg(Color::Red).bold(),
        OptionState::Unselected if locked => Style::default().fg(Color::DarkGray),
        OptionState::Unselected if is_cursor => Style::default().fg(Color::Cyan).bold(),
        OptionState::Unselected => Style::default().fg(Color::Gray),
    }
}

fn render_options(frame: &mut Frame, area: Rect, view: &QuestionView, cursor: usize) {
    let mut lines: Vec<Line> = Vec::with_capacity(view.options.len() * 2);

    for (index, option) in view.options.iter().enumerate() {
        let is_cursor = index == cursor && !view.locked;
        let style = option_style(option, view.locked, is_cursor);
        let marker = match option.state {
            OptionState::CorrectSelected => "+",
            OptionState::WrongSelected => "x",
            OptionState::Unselected if is_cursor => ">",
            OptionState::Unselected => " ",
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", option.label), style),
            Span::styled(option.text, style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_feedback(frame: &mut Frame, area: Rect, feedback: Option<&str>) {
    let Some(feedback) = feedback else {
        return;
    };
    let widget = Paragraph::new(feedback)
        .wrap(Wrap { trim: true })
        .fg(Color::Green);
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, view: &QuestionView) {
    let mut hints = Vec::new();
    if !view.locked {
        hints.push("j/k move  ·  enter/a-d answer");
    }
    if view.can_go_back {
        hints.push("h prev");
    }
    if view.can_go_forward {
        hints.push("l next");
    }
    hints.push("s submit  ·  t 12/24h  ·  q quit");

    let widget = Paragraph::new(hints.join("  ·  "))
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
