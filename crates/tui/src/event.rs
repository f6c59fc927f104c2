//! Event handling and key mappings.
//!
//! Key events are read without blocking once per tick and converted to loop
//! messages.

use std::io;
use std::time::Duration;

use countdown_protocol::Message;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A source of loop messages.
///
/// The countdown loop polls it once per tick and, after the countdown ends,
/// checks it repeatedly until a key is pressed.
pub trait KeySource {
    /// Returns a pending message without blocking.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying input cannot be read.
    fn poll(&mut self) -> io::Result<Option<Message>>;

    /// Returns whether any key was pressed, without blocking.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying input cannot be read.
    fn key_pressed(&mut self) -> io::Result<bool>;
}

/// Keys read from the controlling terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn poll(&mut self) -> io::Result<Option<Message>> {
        poll_message()
    }

    fn key_pressed(&mut self) -> io::Result<bool> {
        poll_key_press()
    }
}

/// Drains pending terminal events without blocking.
///
/// Returns the first event that maps to a message, or `None` when the
/// queue holds no cancelling key.
///
/// # Errors
///
/// Returns an error if polling or reading the terminal fails.
pub fn poll_message() -> io::Result<Option<Message>> {
    while event::poll(Duration::ZERO)? {
        if let Some(msg) = event_to_message(&event::read()?) {
            return Ok(Some(msg));
        }
    }
    Ok(None)
}

/// Drains pending terminal events without blocking and reports whether any
/// of them was a key press.
///
/// # Errors
///
/// Returns an error if polling or reading the terminal fails.
pub fn poll_key_press() -> io::Result<bool> {
    while event::poll(Duration::ZERO)? {
        if is_key_press(&event::read()?) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Returns whether an event is a key press.
#[must_use]
pub fn is_key_press(event: &Event) -> bool {
    matches!(event, Event::Key(key) if key.kind == KeyEventKind::Press)
}

/// Converts a terminal event to a loop message.
#[must_use]
pub fn event_to_message(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) => key_to_message(*key),
        _ => None,
    }
}

/// Converts a terminal key event to a loop message.
///
/// Release and repeat events are ignored.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Interrupt |
/// | `Esc` | Cancel |
/// | `q` | Cancel |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Raw mode delivers Ctrl+C as a key instead of SIGINT
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Interrupt);
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(Message::Cancel),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseButton, MouseEvent, MouseEventKind};

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_key_with_kind(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn cancel_keys() {
        assert_eq!(key_to_message(make_key(KeyCode::Esc)), Some(Message::Cancel));
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('q'))),
            Some(Message::Cancel)
        );
    }

    #[test]
    fn uppercase_q_does_not_cancel() {
        assert_eq!(key_to_message(make_key(KeyCode::Char('Q'))), None);
    }

    #[test]
    fn ctrl_c_interrupts() {
        assert_eq!(
            key_to_message(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Message::Interrupt)
        );
        assert_eq!(key_to_message(make_key(KeyCode::Char('c'))), None);
    }

    #[test]
    fn unmapped_keys_return_none() {
        assert_eq!(key_to_message(make_key(KeyCode::Char('x'))), None);
        assert_eq!(key_to_message(make_key(KeyCode::Enter)), None);
        assert_eq!(key_to_message(make_key(KeyCode::F(1))), None);
    }

    #[test]
    fn release_events_are_ignored() {
        assert_eq!(
            key_to_message(make_key_with_kind(KeyCode::Esc, KeyEventKind::Release)),
            None
        );
        assert_eq!(
            key_to_message(make_key_with_kind(KeyCode::Char('q'), KeyEventKind::Repeat)),
            None
        );
    }

    #[test]
    fn event_to_message_handles_key_events() {
        let key_event = Event::Key(make_key(KeyCode::Esc));
        assert_eq!(event_to_message(&key_event), Some(Message::Cancel));
    }

    #[test]
    fn any_pressed_key_ends_the_final_wait() {
        assert!(is_key_press(&Event::Key(make_key(KeyCode::Char('x')))));
        assert!(is_key_press(&Event::Key(make_key(KeyCode::Enter))));
        assert!(!is_key_press(&Event::Key(make_key_with_kind(
            KeyCode::Enter,
            KeyEventKind::Release
        ))));
        assert!(!is_key_press(&Event::Resize(80, 24)));
    }

    #[test]
    fn event_to_message_ignores_other_events() {
        assert_eq!(event_to_message(&Event::Resize(80, 24)), None);
        assert_eq!(event_to_message(&Event::FocusLost), None);

        let mouse = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(event_to_message(&mouse), None);
    }
}
