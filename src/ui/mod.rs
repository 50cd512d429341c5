mod clock;
mod confirm;
mod quiz;
mod result;
mod welcome;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::SessionState;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let [clock_area, body] =
        Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);
    clock::render(frame, clock_area, app);

    match app.state() {
        SessionState::NotStarted => welcome::render(frame, body, app),
        SessionState::InProgress => quiz::render(frame, body, app),
        SessionState::AwaitingSubmitConfirmation => {
            quiz::render(frame, body, app);
            confirm::render(frame, body);
        }
        SessionState::Finished => result::render(frame, body, app),
    }
}
