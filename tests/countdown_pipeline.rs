//! End-to-end tests from options to rendered frames.

use chrono::NaiveDate;
use countdown_protocol::{DisplayMode, ResolveError, TimeSpec, resolve::resolve_at};
use countdown_tui::{Countdown, Phase};
use ratatui::{Terminal, backend::TestBackend};

fn now() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2030, 3, 14)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

fn screen_text(countdown: &Countdown, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| countdown.view(frame)).unwrap();

    let buf = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            text.push_str(buf[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn relative_request_renders_clock() {
    let request = resolve_at(&TimeSpec::relative(0, 1, 1, 1), now())
        .unwrap()
        .with_message(Some("Pizza".to_string()));
    let countdown = Countdown::new(request);

    assert_eq!(countdown.mode(), DisplayMode::Clock);
    assert_eq!(countdown.remaining(), 3_661);

    let text = screen_text(&countdown, 80, 24);
    assert!(text.contains("Pizza"));
    assert!(text.contains("Hours"));
    assert!(text.contains("1 hours, 1 minutes, 1 seconds"));
}

#[test]
fn absolute_request_renders_days() {
    let request = resolve_at(&TimeSpec::absolute(Some("2030-03-20"), Some("09:00")), now()).unwrap();
    let countdown = Countdown::new(request);

    assert_eq!(countdown.mode(), DisplayMode::Days);
    assert_eq!(countdown.remaining(), 6 * 86_400);

    let text = screen_text(&countdown, 80, 24);
    assert!(text.contains("Days"));
    assert!(text.contains("Countdown until 2030-03-20 09:00"));
}

#[test]
fn cancel_stops_resolved_countdown() {
    let request = resolve_at(&TimeSpec::relative(0, 0, 0, 30), now()).unwrap();
    let mut countdown = Countdown::new(request);

    countdown.advance(None);
    countdown.advance(Some(countdown_protocol::Message::Cancel));

    assert_eq!(countdown.phase(), Phase::Cancelled);
    assert_eq!(countdown.remaining(), 28);
}

#[test]
fn resolution_errors_are_reported() {
    assert_eq!(
        resolve_at(&TimeSpec::default(), now()).unwrap_err(),
        ResolveError::NoDurationSpecified
    );
    assert_eq!(
        resolve_at(&TimeSpec::absolute(Some("2030-03-13"), None), now()).unwrap_err(),
        ResolveError::TargetInPast
    );
}
