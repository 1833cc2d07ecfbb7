//! Card issuer identifiers.
//!
//! This module provides the `CardIssuer` enum naming each payment network the
//! display engine can recognize. The canonical string form of an issuer is a
//! kebab-case identifier (e.g. `"american-express"`), which is what the
//! presentation layer consumes for styling and change events.

use std::fmt;

/// Payment networks recognized by the classifier.
///
/// Each variant corresponds to one entry in the issuer registry, except
/// [`CardIssuer::Unknown`], the fallback for digits that match no registered
/// numbering scheme (or match only issuers excluded by the caller).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CardIssuer {
    /// Visa Electron - Prefix 4026, 417500, 4405, 4508, 4844, 4913, 4917
    VisaElectron,
    /// Visa - Prefix 4, up to 19 digits
    Visa,
    /// Mastercard - Prefix 51-55, 2221-2720, up to 19 digits
    Mastercard,
    /// American Express - Prefix 34, 37, 15 digits
    #[cfg_attr(feature = "serde", serde(rename = "american-express"))]
    Amex,
    /// Hipercard - Brazilian network, prefix 384100/384140/384160/606282/637095/637568
    Hipercard,
    /// Diners Club - Prefix 36, 38, 300-305, 14 digits
    DinersClub,
    /// Dankort - Danish network, prefix 5019
    Dankort,
    /// Discover - Prefix 6011, 65, 644-649, 622126-622925
    Discover,
    /// Elo - Brazilian network, prefix 636297, 636368
    Elo,
    /// JCB - Prefix 3528-3589
    Jcb,
    /// Laser - Irish network, prefix 6706, 6709, 6771
    Laser,
    /// Maestro - Prefix 5018, 5020, 5038, 6304, 6703, 6708, 6759, 6761-6763
    Maestro,
    /// UnionPay - Prefix 62, 88
    #[cfg_attr(feature = "serde", serde(rename = "unionpay"))]
    UnionPay,
    /// Fallback for unrecognized numbers.
    Unknown,
}

impl CardIssuer {
    /// Returns the canonical kebab-case identifier for this issuer.
    ///
    /// This is the string emitted to the presentation layer and carried in
    /// change events.
    #[inline]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::VisaElectron => "visa-electron",
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Amex => "american-express",
            Self::Hipercard => "hipercard",
            Self::DinersClub => "diners-club",
            Self::Dankort => "dankort",
            Self::Discover => "discover",
            Self::Elo => "elo",
            Self::Jcb => "jcb",
            Self::Laser => "laser",
            Self::Maestro => "maestro",
            Self::UnionPay => "unionpay",
            Self::Unknown => "unknown",
        }
    }

    /// Returns a human-readable name for the issuer.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::VisaElectron => "Visa Electron",
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
            Self::Hipercard => "Hipercard",
            Self::DinersClub => "Diners Club",
            Self::Dankort => "Dankort",
            Self::Discover => "Discover",
            Self::Elo => "Elo",
            Self::Jcb => "JCB",
            Self::Laser => "Laser",
            Self::Maestro => "Maestro",
            Self::UnionPay => "UnionPay",
            Self::Unknown => "Unknown",
        }
    }

    /// Parses a canonical identifier back into an issuer.
    ///
    /// Useful at the collaborator boundary, e.g. when the caller supplies an
    /// accepted-issuer list as strings.
    ///
    /// # Example
    ///
    /// ```
    /// use cc_display::CardIssuer;
    ///
    /// assert_eq!(CardIssuer::from_id("visa"), Some(CardIssuer::Visa));
    /// assert_eq!(CardIssuer::from_id("american-express"), Some(CardIssuer::Amex));
    /// assert_eq!(CardIssuer::from_id("bitcoin"), None);
    /// ```
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "visa-electron" => Some(Self::VisaElectron),
            "visa" => Some(Self::Visa),
            "mastercard" => Some(Self::Mastercard),
            "american-express" => Some(Self::Amex),
            "hipercard" => Some(Self::Hipercard),
            "diners-club" => Some(Self::DinersClub),
            "dankort" => Some(Self::Dankort),
            "discover" => Some(Self::Discover),
            "elo" => Some(Self::Elo),
            "jcb" => Some(Self::Jcb),
            "laser" => Some(Self::Laser),
            "maestro" => Some(Self::Maestro),
            "unionpay" => Some(Self::UnionPay),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    /// Returns the maximum number of significant digits for this issuer.
    ///
    /// [`CardIssuer::Unknown`] uses the generic 16-digit fallback.
    #[inline]
    pub fn max_length(&self) -> usize {
        crate::registry::definition(*self)
            .map(|def| def.max_length)
            .unwrap_or(crate::registry::FALLBACK_MAX_LENGTH)
    }
}

impl fmt::Display for CardIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issuer_ids() {
        assert_eq!(CardIssuer::Visa.id(), "visa");
        assert_eq!(CardIssuer::Amex.id(), "american-express");
        assert_eq!(CardIssuer::DinersClub.id(), "diners-club");
        assert_eq!(CardIssuer::VisaElectron.id(), "visa-electron");
        assert_eq!(CardIssuer::Unknown.id(), "unknown");
    }

    #[test]
    fn test_issuer_names() {
        assert_eq!(CardIssuer::Amex.name(), "American Express");
        assert_eq!(CardIssuer::Jcb.name(), "JCB");
        assert_eq!(CardIssuer::Mastercard.to_string(), "mastercard");
    }

    #[test]
    fn test_from_id_roundtrip() {
        for issuer in [
            CardIssuer::VisaElectron,
            CardIssuer::Visa,
            CardIssuer::Mastercard,
            CardIssuer::Amex,
            CardIssuer::Hipercard,
            CardIssuer::DinersClub,
            CardIssuer::Dankort,
            CardIssuer::Discover,
            CardIssuer::Elo,
            CardIssuer::Jcb,
            CardIssuer::Laser,
            CardIssuer::Maestro,
            CardIssuer::UnionPay,
            CardIssuer::Unknown,
        ] {
            assert_eq!(CardIssuer::from_id(issuer.id()), Some(issuer));
        }
    }

    #[test]
    fn test_max_lengths() {
        assert_eq!(CardIssuer::Amex.max_length(), 15);
        assert_eq!(CardIssuer::DinersClub.max_length(), 14);
        assert_eq!(CardIssuer::Visa.max_length(), 19);
        assert_eq!(CardIssuer::Mastercard.max_length(), 19);
        assert_eq!(CardIssuer::Hipercard.max_length(), 19);
        assert_eq!(CardIssuer::Discover.max_length(), 16);
        assert_eq!(CardIssuer::Unknown.max_length(), 16);
    }

    #[test]
    fn test_issuer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CardIssuer>();
    }
}
