//! Expiry date display formatting.
//!
//! Normalizes free-form expiry input into the fixed-width `MM/YY` string
//! shown on the card face. The output is always exactly five characters,
//! with mask glyphs standing in for digits not yet entered, so the card
//! layout never shifts while the user types.
//!
//! Tolerated inputs include bare digit runs (`"1218"`), separated forms
//! (`"12/18"`, `"12-18"`), four-digit years (`"01/2025"`), and garbage;
//! anything unparseable degrades to the fully masked `••/••`.

use crate::format::{strip_formatting, MASK_GLYPH};

/// Formats raw expiry input as a five-character `MM/YY` display string.
///
/// All non-digit characters are stripped before splitting: the first two
/// digits are the month, the remainder the year. A year given with its
/// century (e.g. `2025`) shows only the final two digits. Missing positions
/// are padded with [`MASK_GLYPH`].
///
/// # Example
///
/// ```
/// use cc_display::format_expiry;
///
/// assert_eq!(format_expiry("1218"), "12/18");
/// assert_eq!(format_expiry("01/2025"), "01/25");
/// assert_eq!(format_expiry("12/1"), "12/1\u{2022}");
/// assert_eq!(format_expiry("/"), "\u{2022}\u{2022}/\u{2022}\u{2022}");
/// ```
pub fn format_expiry(raw_expiry: &str) -> String {
    let digits = strip_formatting(raw_expiry);

    let (month, year) = if digits.len() <= 2 {
        (digits.as_str(), "")
    } else {
        (&digits[..2], &digits[2..])
    };

    // A year longer than two digits carries its century; drop it.
    let year = if year.len() > 2 {
        &year[2..year.len().min(4)]
    } else {
        year
    };

    let mut result = String::with_capacity(7);
    push_padded(&mut result, month);
    result.push('/');
    push_padded(&mut result, year);
    result
}

/// Appends `digits` right-padded with the mask glyph to two characters.
fn push_padded(out: &mut String, digits: &str) {
    out.push_str(digits);
    for _ in digits.len()..2 {
        out.push(MASK_GLYPH);
    }
}
