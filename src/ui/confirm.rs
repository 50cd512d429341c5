use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

const WIDTH: u16 = 44;
const HEIGHT: u16 = 7;

pub fn render(frame: &mut Frame, area: Rect) {
    let popup = centered(area, WIDTH, HEIGHT);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Are you sure you want to submit?",
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().fg(Color::Green).bold()),
            Span::styled(" submit  ·  ", Style::default().fg(Color::DarkGray)),
            Span::styled("n", Style::default().fg(Color::Red).bold()),
            Span::styled(" keep going", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::Yellow),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(widget, popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
