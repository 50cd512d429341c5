use ratatui::{prelude::*, widgets::Paragraph};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let [date_area, time_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(20)])
            .horizontal_margin(1)
            .areas(area);

    let date = Paragraph::new(app.date_line()).fg(Color::DarkGray);
    frame.render_widget(date, date_area);

    let face = app.clock_face();
    let mut spans = vec![Span::styled(
        face.time.as_str(),
        Style::default().fg(Color::Cyan).bold(),
    )];
    if let Some(suffix) = face.suffix {
        spans.push(Span::styled(
            format!(" {}", suffix),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let time = Paragraph::new(Line::from(spans)).alignment(Alignment::Right);
    frame.render_widget(time, time_area);
}
