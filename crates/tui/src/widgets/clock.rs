//! Enlarged clock rendering.
//!
//! The remaining time is formatted for the frame's [`DisplayMode`], enlarged
//! through the glyph table and centered in the drawing area.
//!
//! # Layout
//!
//! ```text
//!                 <message>
//!
//!  ██████  ██████          ██████  ██████  ...
//!  ██  ██  ██  ██    ██    ██  ██  ██  ██
//!  ...
//!
//!      Hours                  Minutes       ...
//! ```

use countdown_protocol::{DisplayMode, glyph::enlarge};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};

use super::{CountdownFrame, put_clipped, text_width};
use crate::layout::{
    BLOCK_TOP_OFFSET, CLOCK_LABEL_OFFSETS, LABEL_ROW_OFFSET, LABEL_SLOT_WIDTH, MESSAGE_GAP,
};

/// Renders the banner message, the enlarged digits and the unit labels.
///
/// The block is centered horizontally (`width / 2 - line_width / 2`) and
/// starts at row `height / 2 - 5`. The message sits two rows above the
/// block and the labels one blank row below it.
pub fn render_clock(frame: &CountdownFrame<'_>, area: Rect, buf: &mut Buffer) {
    let width = i32::from(area.width);
    let height = i32::from(area.height);

    let rows = enlarge(&frame.mode.format(frame.remaining));
    let line_width = text_width(&rows[0]);
    let start_x = width / 2 - line_width / 2;
    let start_y = height / 2 - BLOCK_TOP_OFFSET;

    if let Some(message) = frame.message.filter(|m| !m.is_empty()) {
        let message_x = width / 2 - text_width(message) / 2;
        put_clipped(
            buf,
            area,
            message_x,
            start_y - MESSAGE_GAP,
            message,
            Style::default().add_modifier(Modifier::BOLD),
        );
    }

    let digit_style = Style::default().fg(Color::White);
    for (offset, row) in (0..).zip(rows.iter()) {
        put_clipped(buf, area, start_x, start_y + offset, row, digit_style);
    }

    render_labels(frame.mode, start_x, start_y + LABEL_ROW_OFFSET, area, buf);
}

fn render_labels(mode: DisplayMode, start_x: i32, y: i32, area: Rect, buf: &mut Buffer) {
    let style = Style::default().fg(Color::Gray);
    let width = i32::from(area.width);

    match mode {
        DisplayMode::Days => {
            for label in mode.labels() {
                let x = width / 2 - text_width(label) / 2 - 1;
                put_clipped(buf, area, x, y, label, style);
            }
        }
        DisplayMode::Clock => {
            for (offset, label) in CLOCK_LABEL_OFFSETS.iter().zip(mode.labels()) {
                let x = start_x + offset + (LABEL_SLOT_WIDTH - text_width(label)) / 2;
                put_clipped(buf, area, x, y, label, style);
            }
        }
    }
}
