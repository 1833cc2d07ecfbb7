//! # cc_display
//!
//! Card number classification and display formatting for payment card
//! previews.
//!
//! This crate is the text engine behind an interactive card widget: given
//! the digits a user has typed so far, it identifies the issuer's numbering
//! scheme, derives the maximum digit length, and renders the fixed-width
//! masked display string - incrementally and stably, one keystroke at a
//! time. A smaller companion formatter does the same for expiry input.
//!
//! Everything is a pure function over strings: no I/O, no hidden state, no
//! failure modes. Unrecognized input degrades to the generic "unknown"
//! issuer rather than erroring.
//!
//! ## Classification
//!
//! ```rust
//! use cc_display::{classify, CardIssuer};
//!
//! let result = classify("378282246310005");
//! assert_eq!(result.issuer, CardIssuer::Amex);
//! assert_eq!(result.issuer.id(), "american-express");
//! assert_eq!(result.max_length, 15);
//!
//! // Anything unrecognized falls back to unknown with a 16-digit budget.
//! assert_eq!(classify("9911").issuer, CardIssuer::Unknown);
//! ```
//!
//! ## Number formatting
//!
//! ```rust
//! use cc_display::{classify, format_number};
//!
//! // Issuer-specific grouping, mask-padded to a stable width.
//! let amex = "378282246310005";
//! assert_eq!(format_number(amex, &classify(amex)), "3782 822463 10005");
//!
//! let partial = "41";
//! assert_eq!(format_number(partial, &classify(partial)), "41\u{2022}\u{2022} \u{2022}\u{2022}\u{2022}\u{2022} \u{2022}\u{2022}\u{2022}\u{2022} \u{2022}\u{2022}\u{2022}\u{2022}");
//! ```
//!
//! ## Expiry formatting
//!
//! ```rust
//! use cc_display::format_expiry;
//!
//! assert_eq!(format_expiry("1218"), "12/18");
//! assert_eq!(format_expiry("01/2025"), "01/25");
//! assert_eq!(format_expiry("/"), "\u{2022}\u{2022}/\u{2022}\u{2022}");
//! ```
//!
//! ## Change notification
//!
//! The caller owns the previous classification and asks for a diff; the
//! engine emits at most one event per actual change:
//!
//! ```rust
//! use cc_display::{classify, IssuerTracker};
//!
//! let mut tracker = IssuerTracker::new();
//! tracker.update(classify(""));
//!
//! let event = tracker.update(classify("378282246310005")).unwrap();
//! assert_eq!(event.issuer.id(), "american-express");
//! assert_eq!(event.max_length, 15);
//!
//! // Re-render with an unrelated field changed: no duplicate event.
//! assert!(tracker.update(classify("378282246310005")).is_none());
//! ```
//!
//! ## Restricting accepted issuers
//!
//! ```rust
//! use cc_display::{classify_accepting, CardIssuer};
//!
//! let accepted = [CardIssuer::Visa, CardIssuer::Mastercard];
//! let result = classify_accepting("378282246310005", &accepted);
//! assert_eq!(result.issuer, CardIssuer::Unknown);
//! ```
//!
//! ## Supported issuers
//!
//! | Issuer | Patterns | Max digits | Grouping |
//! |--------|----------|------------|----------|
//! | Visa Electron | 4026, 417500, 4405, 4508, 4844, 4913, 4917 | 16 | 4-4-4-4 |
//! | Visa | 4 | 19 | 4-4-4-7 |
//! | Mastercard | 51-55, 2221-2720 | 19 | 4-4-4-7 |
//! | American Express | 34, 37 | 15 | 4-6-5 |
//! | Hipercard | 384100, 384140, 384160, 606282, 637095, 637568 | 19 | 4-4-4-7 |
//! | Diners Club | 36, 38, 300-305 | 14 | 4-6-4 |
//! | Dankort | 5019 | 16 | 4-4-4-4 |
//! | Discover | 6011, 65, 644-649, 622126-622925 | 16 | 4-4-4-4 |
//! | Elo | 636297, 636368 | 16 | 4-4-4-4 |
//! | JCB | 3528-3589 | 16 | 4-4-4-4 |
//! | Laser | 6706, 6709, 6771 | 16 | 4-4-4-4 |
//! | Maestro | 5018, 5020, 5038, 6304, 67xx set | 16 | 4-4-4-4 |
//! | UnionPay | 62, 88 | 16 | 4-4-4-4 |
//!
//! Declaration order in the registry is the match priority; see
//! [`registry::REGISTRY`].
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialize/Deserialize for issuers, classifications, events |
//!
//! ## Security
//!
//! The engine never stores card data, but the [`CardFields`] holder offered
//! to callers zeroes its memory on drop and masks `Debug` output, so typed
//! numbers do not linger or leak into logs.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod classify;
pub mod expiry;
pub mod fields;
pub mod format;
pub mod issuer;
pub mod notify;
pub mod registry;

// Re-export main types at crate root
pub use classify::{classify, classify_accepting, Classification};
pub use expiry::format_expiry;
pub use fields::{CardFields, FocusedField};
pub use format::{format_number, strip_formatting, MASK_GLYPH};
pub use issuer::CardIssuer;
pub use notify::{issuer_change, IssuerChange, IssuerTracker};
