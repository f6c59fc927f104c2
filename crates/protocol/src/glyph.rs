//! Block-character glyph table.
//!
//! Every supported character is drawn as a 5-row bitmap, each row exactly
//! [`GLYPH_WIDTH`] columns wide. Characters without a glyph are skipped when
//! enlarging text.

/// Number of rows in every glyph.
pub const GLYPH_HEIGHT: usize = 5;

/// Width of every glyph row, in terminal columns.
pub const GLYPH_WIDTH: usize = 6;

/// Blank columns appended after each enlarged character.
pub const GLYPH_GAP: usize = 2;

/// A single glyph: five rows of block characters.
pub type Glyph = [&'static str; GLYPH_HEIGHT];

static ZERO: Glyph = ["██████", "██  ██", "██  ██", "██  ██", "██████"];
static ONE: Glyph = ["  ██  ", "  ██  ", "  ██  ", "  ██  ", "  ██  "];
static TWO: Glyph = ["██████", "    ██", "██████", "██    ", "██████"];
static THREE: Glyph = ["██████", "    ██", " █████", "    ██", "██████"];
static FOUR: Glyph = ["██  ██", "██  ██", "██████", "    ██", "    ██"];
static FIVE: Glyph = ["██████", "██    ", "██████", "    ██", "██████"];
static SIX: Glyph = ["█████ ", "██    ", "██████", "██  ██", "██████"];
static SEVEN: Glyph = ["██████", "    ██", "    ██", "    ██", "    ██"];
static EIGHT: Glyph = ["██████", "██  ██", "██████", "██  ██", "██████"];
static NINE: Glyph = ["██████", "██  ██", "██████", "    ██", "██████"];
static COLON: Glyph = ["      ", "  ██  ", "      ", "  ██  ", "      "];
static DOT: Glyph = ["      ", "      ", "      ", "      ", "  ██  "];

/// Returns the glyph for a character, if the table has one.
///
/// # Examples
///
/// ```
/// use countdown_protocol::glyph::glyph;
///
/// assert_eq!(glyph('1').map(|g| g[0]), Some("  ██  "));
/// assert!(glyph('x').is_none());
/// ```
#[must_use]
pub fn glyph(ch: char) -> Option<&'static Glyph> {
    match ch {
        '0' => Some(&ZERO),
        '1' => Some(&ONE),
        '2' => Some(&TWO),
        '3' => Some(&THREE),
        '4' => Some(&FOUR),
        '5' => Some(&FIVE),
        '6' => Some(&SIX),
        '7' => Some(&SEVEN),
        '8' => Some(&EIGHT),
        '9' => Some(&NINE),
        ':' => Some(&COLON),
        '.' => Some(&DOT),
        _ => None,
    }
}

/// Enlarges text into five rows of block characters.
///
/// Each known character contributes its glyph row followed by a
/// [`GLYPH_GAP`]-column gap, so every row has the same width:
/// `known_chars * (GLYPH_WIDTH + GLYPH_GAP)`.
///
/// # Examples
///
/// ```
/// use countdown_protocol::glyph::enlarge;
///
/// let rows = enlarge("10");
/// assert_eq!(rows[0], "  ██    ██████  ");
/// ```
#[must_use]
pub fn enlarge(text: &str) -> [String; GLYPH_HEIGHT] {
    let mut rows: [String; GLYPH_HEIGHT] = Default::default();
    for bitmap in text.chars().filter_map(glyph) {
        for (row, line) in rows.iter_mut().zip(bitmap.iter()) {
            row.push_str(line);
            row.push_str(&" ".repeat(GLYPH_GAP));
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "0123456789:.";

    #[test]
    fn every_glyph_row_has_fixed_width() {
        for ch in TABLE.chars() {
            let bitmap = glyph(ch).unwrap();
            for row in bitmap {
                assert_eq!(row.chars().count(), GLYPH_WIDTH, "glyph {ch:?}");
            }
        }
    }

    #[test]
    fn unknown_characters_have_no_glyph() {
        assert!(glyph(' ').is_none());
        assert!(glyph('a').is_none());
        assert!(glyph('-').is_none());
    }

    #[test]
    fn enlarge_clock_text_width() {
        let rows = enlarge("01:01:01");
        for row in &rows {
            assert_eq!(row.chars().count(), 8 * (GLYPH_WIDTH + GLYPH_GAP));
        }
    }

    #[test]
    fn enlarge_skips_unknown_characters() {
        assert_eq!(enlarge("1 day"), enlarge("1"));
    }

    #[test]
    fn enlarge_empty_text() {
        let rows = enlarge("");
        assert!(rows.iter().all(String::is_empty));
    }

    #[test]
    fn enlarge_colon_rows() {
        let rows = enlarge(":");
        assert_eq!(rows[1], "  ██    ");
        assert_eq!(rows[2], "        ");
    }
}
