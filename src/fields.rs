//! Collaborator-facing input state.
//!
//! The presentation layer feeds the engine four free-form strings (number,
//! name, expiry, cvc) plus a focus indicator. [`CardFields`] is the owned
//! holder for those strings, with the same memory posture the rest of the
//! payment-card ecosystem expects: zeroed on drop and masked in `Debug`
//! output, so card data never lingers in memory or leaks into logs.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::classify::classify;
use crate::expiry::format_expiry;
use crate::format::format_number;

/// The input field currently holding focus, if any.
///
/// Controls which card face the presentation layer shows (the cvc field
/// flips the card to its back).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FocusedField {
    /// The card number input.
    Number,
    /// The cardholder name input.
    Name,
    /// The expiry date input.
    Expiry,
    /// The security code input.
    Cvc,
}

impl FocusedField {
    /// Returns the canonical identifier for this field.
    #[inline]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Name => "name",
            Self::Expiry => "expiry",
            Self::Cvc => "cvc",
        }
    }

    /// Parses a field identifier; unknown or empty strings mean no focus.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "number" => Some(Self::Number),
            "name" => Some(Self::Name),
            "expiry" => Some(Self::Expiry),
            "cvc" => Some(Self::Cvc),
            _ => None,
        }
    }
}

impl fmt::Display for FocusedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Owned card input fields, zeroed on drop.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct CardFields {
    /// Raw card number input, as typed.
    pub number: String,
    /// Cardholder name, as typed.
    pub name: String,
    /// Raw expiry input, as typed.
    pub expiry: String,
    /// Security code, as typed.
    pub cvc: String,
}

impl CardFields {
    /// Creates an empty set of fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the number field through classification and formatting.
    ///
    /// Convenience for callers that do not need to hold the classification
    /// themselves; equivalent to `format_number(&self.number,
    /// &classify(&self.number))`.
    pub fn formatted_number(&self) -> String {
        format_number(&self.number, &classify(&self.number))
    }

    /// Renders the expiry field as the fixed-width `MM/YY` display string.
    pub fn formatted_expiry(&self) -> String {
        format_expiry(&self.expiry)
    }
}

impl fmt::Debug for CardFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardFields")
            .field("number", &"<redacted>")
            .field("name", &"<redacted>")
            .field("expiry", &self.formatted_expiry())
            .field("cvc", &"***")
            .finish()
    }
}
