//! Loop control messages.
//!
//! This module defines the message enum used between the terminal input
//! handler and the countdown loop.

/// Messages that represent user actions while the countdown is running.
///
/// # Examples
///
/// ```
/// use countdown_protocol::Message;
///
/// let msg = Message::Cancel;
/// assert!(matches!(msg, Message::Cancel));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    /// Stop the countdown early (Escape or `q`).
    Cancel,
    /// The process was interrupted (Ctrl+C or SIGINT).
    Interrupt,
}
