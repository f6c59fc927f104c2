//! Countdown description rendering.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};

use super::{put_clipped, text_width};
use crate::layout::DESCRIPTION_RIGHT_MARGIN;

/// Renders the countdown description in the bottom-right corner.
///
/// The text ends one column before the right edge of the bottom row.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use countdown_tui::widgets::render_description;
///
/// let area = Rect::new(0, 0, 40, 10);
/// let mut buf = Buffer::empty(area);
///
/// render_description("2 days, 3 hours", area, &mut buf);
/// ```
pub fn render_description(description: &str, area: Rect, buf: &mut Buffer) {
    let x = i32::from(area.width) - text_width(description) - DESCRIPTION_RIGHT_MARGIN;
    let y = i32::from(area.height) - 1;
    put_clipped(
        buf,
        area,
        x,
        y,
        description,
        Style::default().fg(Color::DarkGray),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_lines;

    #[test]
    fn description_in_bottom_right_corner() {
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);

        render_description("5 minutes", area, &mut buf);

        let lines = buffer_lines(&buf);
        // 30 - 9 - 1 = 20
        assert_eq!(lines[4], format!("{}5 minutes", " ".repeat(20)));
        assert!(lines[..4].iter().all(String::is_empty));
    }

    #[test]
    fn long_description_is_clipped_on_the_left() {
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);

        render_description("Countdown until 2099-01-01 00:00", area, &mut buf);

        let lines = buffer_lines(&buf);
        assert_eq!(lines[1], "-01 00:00");
    }
}
