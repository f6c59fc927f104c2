//! Test utilities for the TUI crate.
//!
//! Helpers to read rendered buffers back as text.

use ratatui::buffer::Buffer;

/// Returns every row of the buffer as a string with trailing spaces removed.
#[must_use]
pub(crate) fn buffer_lines(buf: &Buffer) -> Vec<String> {
    (0..buf.area.height)
        .map(|y| {
            let line: String = (0..buf.area.width)
                .filter_map(|x| buf.cell((buf.area.x + x, buf.area.y + y)))
                .map(|cell| cell.symbol())
                .collect();
            line.trim_end_matches(' ').to_string()
        })
        .collect()
}

/// Converts a buffer to a single string, one line per row.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = buffer_lines(buf).join("\n");
    result.push('\n');
    result
}
