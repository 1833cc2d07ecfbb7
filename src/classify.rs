//! Issuer classification for raw, partially typed card numbers.
//!
//! Classification scans the registry in declared order and returns the first
//! definition whose prefix patterns match the digits typed so far. It is a
//! pure function with no hidden state: the same input always yields the same
//! result, and it is cheap enough to re-run on every keystroke (the scan is
//! bounded by the registry size).

use crate::format::strip_formatting;
use crate::registry::{self, FALLBACK_MAX_LENGTH, REGISTRY};
use crate::CardIssuer;

/// The outcome of classifying a raw card number.
///
/// A derived value, recomputed on every input change. Two classifications
/// compare equal when both the issuer and the maximum length agree, which is
/// exactly the comparison the change notifier performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Classification {
    /// The matched issuer, or [`CardIssuer::Unknown`].
    pub issuer: CardIssuer,
    /// Maximum significant digits for the matched issuer.
    pub max_length: usize,
}

impl Classification {
    /// The fallback classification for unrecognized input.
    pub const UNKNOWN: Self = Self {
        issuer: CardIssuer::Unknown,
        max_length: FALLBACK_MAX_LENGTH,
    };

    /// Returns the display block sizes for the matched issuer.
    #[inline]
    pub fn block_sizes(&self) -> &'static [usize] {
        registry::definition(self.issuer)
            .map(|def| def.block_sizes)
            .unwrap_or(registry::FALLBACK_BLOCK_SIZES)
    }
}

/// Classifies a raw card number string against the full issuer registry.
///
/// Non-digit characters are ignored for matching purposes. Input matching no
/// registered scheme degrades to [`Classification::UNKNOWN`] - a normal
/// result, not an error.
///
/// # Example
///
/// ```
/// use cc_display::{classify, CardIssuer};
///
/// let result = classify("378282246310005");
/// assert_eq!(result.issuer, CardIssuer::Amex);
/// assert_eq!(result.max_length, 15);
///
/// assert_eq!(classify("9999").issuer, CardIssuer::Unknown);
/// assert_eq!(classify("").max_length, 16);
/// ```
pub fn classify(raw_number: &str) -> Classification {
    classify_accepting(raw_number, &[])
}

/// Classifies a raw card number, considering only the accepted issuers.
///
/// An empty `accepted` slice means no restriction. With a non-empty slice,
/// excluded definitions are skipped during the registry scan, so digits that
/// would have matched an excluded issuer may fall through to a later one
/// (e.g. with Visa Electron excluded, `4508...` classifies as Visa). Digits
/// matching only excluded issuers degrade to [`Classification::UNKNOWN`].
///
/// # Example
///
/// ```
/// use cc_display::{classify_accepting, CardIssuer};
///
/// let only_visa = [CardIssuer::Visa];
/// assert_eq!(classify_accepting("4111111111111111", &only_visa).issuer, CardIssuer::Visa);
/// assert_eq!(classify_accepting("5105105105105100", &only_visa).issuer, CardIssuer::Unknown);
/// ```
pub fn classify_accepting(raw_number: &str, accepted: &[CardIssuer]) -> Classification {
    let digits = strip_formatting(raw_number);

    REGISTRY
        .iter()
        .filter(|def| accepted.is_empty() || accepted.contains(&def.issuer))
        .find(|def| def.matches(&digits))
        .map(|def| Classification {
            issuer: def.issuer,
            max_length: def.max_length,
        })
        .unwrap_or(Classification::UNKNOWN)
}
