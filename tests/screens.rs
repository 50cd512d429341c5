//! Rendering of each screen against ratatui's test backend.

use chrono::NaiveTime;
use quiz_clock::{default_questions, App};
use ratatui::{backend::TestBackend, Terminal};

fn app() -> App {
    let mut app = App::with_questions(default_questions(), false).unwrap();
    app.tick_clock(&NaiveTime::from_hms_opt(13, 5, 9).unwrap());
    app
}

fn draw(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal
        .draw(|frame| quiz_clock::ui::render(frame, app))
        .unwrap();

    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn home_screen_shows_clock_and_count() {
    let screen = draw(&app());
    assert!(screen.contains("01 : 05 : 09 PM"));
    assert!(screen.contains("10 Questions"));
    assert!(screen.contains("ENTER"));
}

#[test]
fn clock_toggle_drops_suffix() {
    let mut app = app();
    app.toggle_clock_mode();
    app.tick_clock(&NaiveTime::from_hms_opt(13, 5, 9).unwrap());
    let screen = draw(&app);
    assert!(screen.contains("13 : 05 : 09"));
    assert!(!screen.contains("PM"));
}

#[test]
fn question_screen_shows_indicator_and_options() {
    let mut app = app();
    app.start_quiz();
    let screen = draw(&app);
    assert!(screen.contains("Question 1 of 10"));
    assert!(screen.contains("What is the main function of an operating system?"));
    assert!(screen.contains("A. Manage hardware resources"));
    assert!(screen.contains("D. Run antivirus software"));
}

#[test]
fn wrong_answer_shows_feedback() {
    let mut app = app();
    app.start_quiz();
    app.next_question();
    app.choose_option(0);
    let screen = draw(&app);
    assert!(screen.contains("Correct Answer: Linux"));
}

#[test]
fn confirmation_overlay_is_drawn() {
    let mut app = app();
    app.start_quiz();
    app.request_submit();
    let screen = draw(&app);
    assert!(screen.contains("Are you sure you want to submit?"));
}

#[test]
fn result_screen_shows_score_and_summary() {
    let mut app = app();
    app.start_quiz();
    app.choose_option(0);
    app.next_question();
    app.choose_option(0);
    app.request_submit();
    app.confirm_submit();

    let screen = draw(&app);
    assert!(screen.contains("You scored: 1 / 10"));
    assert!(screen.contains("2 answered"));
    assert!(screen.contains("8 unanswered"));
    assert!(screen.contains("1  What is the main function of an operating system?"));
    assert!(screen.contains("\u{2192} Manage hardware resources"));
}
