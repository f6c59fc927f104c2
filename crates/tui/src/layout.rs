//! Centralized layout measurements for the countdown screen.
//!
//! All positions are relative to the top-left corner of the drawing area and
//! may be negative on very small terminals; drawing clips them.

/// Rows between the vertical center and the top row of the digit block.
///
/// The block starts at `height / 2 - BLOCK_TOP_OFFSET`.
pub const BLOCK_TOP_OFFSET: i32 = 5;

/// Rows between the banner message and the top of the digit block.
pub const MESSAGE_GAP: i32 = 2;

/// Row of the unit labels, relative to the top of the digit block.
///
/// The block is five rows tall, leaving one blank row before the labels.
pub const LABEL_ROW_OFFSET: i32 = 6;

/// Column of each clock label slot relative to the start of the block,
/// one slot per two-digit group (hours, minutes, seconds).
pub const CLOCK_LABEL_OFFSETS: [i32; 3] = [2, 27, 51];

/// Width of the slot each clock label is centered in.
pub const LABEL_SLOT_WIDTH: i32 = 10;

/// Columns left free between the description and the right edge.
pub const DESCRIPTION_RIGHT_MARGIN: i32 = 1;
