//! Card number display formatting.
//!
//! Renders the digits typed so far into the fixed-width, issuer-grouped
//! string shown on the card face. Positions not yet typed are filled with a
//! mask glyph, so the spacing never shifts as the user types:
//!
//! - Visa, 2 digits typed: `41•• •••• •••• ••••`
//! - Amex, complete: `3782 822463 10005`
//! - Nothing typed: `•••• •••• •••• ••••`

use crate::classify::Classification;
use crate::registry::FALLBACK_MAX_LENGTH;

/// Placeholder character for digit positions not yet entered.
pub const MASK_GLYPH: char = '\u{2022}';

/// Strips all non-digit characters from a raw card number.
///
/// Shared by the classifier and the formatters; exported because callers
/// often need the sanitized digits for their own cursor handling.
///
/// # Example
///
/// ```
/// use cc_display::strip_formatting;
///
/// assert_eq!(strip_formatting("4111 1111-1111.1111"), "4111111111111111");
/// assert_eq!(strip_formatting("no digits"), "");
/// ```
pub fn strip_formatting(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Formats a raw card number for display under the given classification.
///
/// Digits beyond the issuer's maximum are dropped from the rendered string
/// (the caller's raw value is untouched); missing positions are padded with
/// [`MASK_GLYPH`]; single spaces separate the issuer's display blocks. The
/// output length is therefore a function of the classification alone, never
/// of how many digits were typed.
///
/// Issuers that allow more than 16 digits render as a 16-position 4-4-4-4
/// card until a 17th digit is typed, at which point the display expands to
/// the full length with the issuer's own grouping. A 16-digit Visa therefore
/// shows no trailing mask positions.
///
/// # Example
///
/// ```
/// use cc_display::{classify, format_number};
///
/// let number = "378282246310005";
/// assert_eq!(format_number(number, &classify(number)), "3782 822463 10005");
///
/// assert_eq!(format_number("41", &classify("41")), "41\u{2022}\u{2022} \u{2022}\u{2022}\u{2022}\u{2022} \u{2022}\u{2022}\u{2022}\u{2022} \u{2022}\u{2022}\u{2022}\u{2022}");
/// ```
pub fn format_number(raw_number: &str, classification: &Classification) -> String {
    let digits = strip_formatting(raw_number);

    let display_length = display_length(digits.len(), classification.max_length);
    let blocks: &[usize] = if display_length == classification.max_length {
        classification.block_sizes()
    } else {
        // Collapsed 16-position view of a longer scheme.
        &[4, 4, 4, 4]
    };

    let mut padded: Vec<char> = digits.chars().take(display_length).collect();
    padded.resize(display_length, MASK_GLYPH);

    group_into_blocks(&padded, blocks)
}

/// Number of positions the card face shows for `typed` digits under a scheme
/// allowing up to `max_length`.
fn display_length(typed: usize, max_length: usize) -> usize {
    if max_length > FALLBACK_MAX_LENGTH && typed <= FALLBACK_MAX_LENGTH {
        FALLBACK_MAX_LENGTH
    } else {
        max_length
    }
}

/// Inserts a single space at each cumulative block boundary.
fn group_into_blocks(chars: &[char], blocks: &[usize]) -> String {
    let mut result = String::with_capacity(chars.len() * 3 + blocks.len());
    let mut pos = 0;

    for (i, &size) in blocks.iter().enumerate() {
        if pos >= chars.len() {
            break;
        }
        if i > 0 {
            result.push(' ');
        }
        let end = (pos + size).min(chars.len());
        result.extend(&chars[pos..end]);
        pos = end;
    }

    result
}
