//! Widget components for the countdown screen.
//!
//! Each widget is a pure function that paints into a ratatui [`Buffer`],
//! so a frame depends only on its inputs and is easy to test.
//!
//! # Modules
//!
//! - [`clock`]: Enlarged digits, banner message, and unit labels
//! - [`description`]: Countdown summary in the bottom-right corner
//!
//! # Example
//!
//! ```
//! use countdown_protocol::DisplayMode;
//! use countdown_tui::widgets::{CountdownFrame, render_countdown};
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//!
//! let frame = CountdownFrame {
//!     remaining: 3_661,
//!     mode: DisplayMode::Clock,
//!     message: Some("Launch"),
//!     description: "1 hours, 1 minutes, 1 seconds",
//! };
//!
//! let area = Rect::new(0, 0, 80, 24);
//! let mut buf = Buffer::empty(area);
//! render_countdown(&frame, area, &mut buf);
//! ```

pub mod clock;
pub mod description;

use countdown_protocol::DisplayMode;
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

pub use clock::render_clock;
pub use description::render_description;

/// Everything needed to draw one countdown frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownFrame<'a> {
    /// Seconds left on the clock.
    pub remaining: u64,
    /// Clock or days display, fixed for the whole run.
    pub mode: DisplayMode,
    /// Banner shown above the digits.
    pub message: Option<&'a str>,
    /// Summary shown in the bottom-right corner.
    pub description: &'a str,
}

/// Renders a complete countdown frame.
pub fn render_countdown(frame: &CountdownFrame<'_>, area: Rect, buf: &mut Buffer) {
    render_clock(frame, area, buf);
    render_description(frame.description, area, buf);
}

/// Writes `text` at a signed position relative to `area`, clipping whatever
/// falls outside of it.
pub(crate) fn put_clipped(buf: &mut Buffer, area: Rect, x: i32, y: i32, text: &str, style: Style) {
    if y < 0 || y >= i32::from(area.height) {
        return;
    }
    let width = i32::from(area.width);
    let start = x.max(0);
    if start >= width {
        return;
    }

    let skipped = usize::try_from(start - x).unwrap_or(0);
    let visible: String = text.chars().skip(skipped).collect();
    let max_width = usize::try_from(width - start).unwrap_or(0);

    // start and y are bounded by the area dimensions, which fit in u16
    let column = area.x + start as u16;
    let row = area.y + y as u16;
    buf.set_stringn(column, row, visible, max_width, style);
}

/// Number of terminal columns taken by `text`.
pub(crate) fn text_width(text: &str) -> i32 {
    i32::try_from(text.chars().count()).unwrap_or(i32::MAX)
}
