//! Issuer numbering-scheme registry.
//!
//! A static, ordered table of issuer definitions: prefix patterns, maximum
//! digit length, and display block sizes. Declaration order is semantically
//! significant - the classifier scans the table top to bottom and the first
//! matching definition wins, which is how overlapping prefix space is
//! resolved (e.g. Discover's 622126-622925 range sits inside UnionPay's 62).
//!
//! Ordering constraints encoded by the table:
//!
//! - Visa Electron before Visa (4026... vs bare 4)
//! - Hipercard before Diners Club (384100 vs 38)
//! - Dankort before Maestro (5019 vs 5018/5020)
//! - Discover before UnionPay (622126-622925 vs 62)
//! - Elo and Laser before Maestro (63xx/67xx overlaps)
//!
//! Adding an issuer is a data change here, not a control-flow change.

use crate::CardIssuer;

/// A prefix rule matched against the leading digits of a card number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// A fixed digit prefix, e.g. `"34"` or `"417500"`.
    Prefix(&'static str),
    /// An inclusive numeric range over the first `width` digits,
    /// e.g. `644-649` over 3 digits.
    Range {
        /// Lower bound, inclusive.
        low: u32,
        /// Upper bound, inclusive.
        high: u32,
        /// Number of leading digits the bounds are compared against.
        width: usize,
    },
}

impl Pattern {
    /// Tests whether a digits-only string satisfies this pattern.
    ///
    /// Matching is progressive so that classification stays stable while the
    /// user types: a `Prefix` matches when either string is a prefix of the
    /// other, so `"40"` already matches the prefix `"4026"`. A `Range` needs
    /// at least `width` digits before it can be decided; shorter input is
    /// treated as no match rather than an error.
    pub fn matches(&self, digits: &str) -> bool {
        if digits.is_empty() {
            return false;
        }
        match *self {
            Self::Prefix(prefix) => {
                digits.starts_with(prefix) || prefix.starts_with(digits)
            }
            Self::Range { low, high, width } => {
                if digits.len() < width {
                    return false;
                }
                digits[..width]
                    .parse::<u32>()
                    .is_ok_and(|value| (low..=high).contains(&value))
            }
        }
    }
}

/// One issuer's numbering scheme: patterns, digit budget, display grouping.
#[derive(Debug, Clone, Copy)]
pub struct IssuerDefinition {
    /// The issuer this definition describes.
    pub issuer: CardIssuer,
    /// Prefix rules; a card number matches the definition if any rule matches.
    pub patterns: &'static [Pattern],
    /// Maximum number of significant digits (14-19).
    pub max_length: usize,
    /// Display group sizes, summing to `max_length`.
    pub block_sizes: &'static [usize],
}

impl IssuerDefinition {
    /// Tests whether a digits-only string matches any of this definition's
    /// patterns.
    #[inline]
    pub fn matches(&self, digits: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(digits))
    }
}

/// Maximum digit length of the unknown-issuer fallback.
pub const FALLBACK_MAX_LENGTH: usize = 16;

/// Display grouping of the unknown-issuer fallback.
pub const FALLBACK_BLOCK_SIZES: &[usize] = &[4, 4, 4, 4];

const BLOCKS_4X4: &[usize] = &[4, 4, 4, 4];
const BLOCKS_19: &[usize] = &[4, 4, 4, 7];

/// The issuer registry, in match-priority order.
pub const REGISTRY: &[IssuerDefinition] = &[
    IssuerDefinition {
        issuer: CardIssuer::VisaElectron,
        patterns: &[
            Pattern::Prefix("4026"),
            Pattern::Prefix("417500"),
            Pattern::Prefix("4405"),
            Pattern::Prefix("4508"),
            Pattern::Prefix("4844"),
            Pattern::Prefix("4913"),
            Pattern::Prefix("4917"),
        ],
        max_length: 16,
        block_sizes: BLOCKS_4X4,
    },
    IssuerDefinition {
        issuer: CardIssuer::Visa,
        patterns: &[Pattern::Prefix("4")],
        max_length: 19,
        block_sizes: BLOCKS_19,
    },
    IssuerDefinition {
        issuer: CardIssuer::Mastercard,
        patterns: &[
            Pattern::Range {
                low: 51,
                high: 55,
                width: 2,
            },
            Pattern::Range {
                low: 2221,
                high: 2720,
                width: 4,
            },
        ],
        max_length: 19,
        block_sizes: BLOCKS_19,
    },
    IssuerDefinition {
        issuer: CardIssuer::Amex,
        patterns: &[Pattern::Prefix("34"), Pattern::Prefix("37")],
        max_length: 15,
        block_sizes: &[4, 6, 5],
    },
    IssuerDefinition {
        issuer: CardIssuer::Hipercard,
        patterns: &[
            Pattern::Prefix("384100"),
            Pattern::Prefix("384140"),
            Pattern::Prefix("384160"),
            Pattern::Prefix("606282"),
            Pattern::Prefix("637095"),
            Pattern::Prefix("637568"),
        ],
        max_length: 19,
        block_sizes: BLOCKS_19,
    },
    IssuerDefinition {
        issuer: CardIssuer::DinersClub,
        patterns: &[
            Pattern::Prefix("36"),
            Pattern::Prefix("38"),
            Pattern::Range {
                low: 300,
                high: 305,
                width: 3,
            },
        ],
        max_length: 14,
        block_sizes: &[4, 6, 4],
    },
    IssuerDefinition {
        issuer: CardIssuer::Dankort,
        patterns: &[Pattern::Prefix("5019")],
        max_length: 16,
        block_sizes: BLOCKS_4X4,
    },
    IssuerDefinition {
        issuer: CardIssuer::Discover,
        patterns: &[
            Pattern::Prefix("6011"),
            Pattern::Prefix("65"),
            Pattern::Range {
                low: 644,
                high: 649,
                width: 3,
            },
            Pattern::Range {
                low: 622126,
                high: 622925,
                width: 6,
            },
        ],
        max_length: 16,
        block_sizes: BLOCKS_4X4,
    },
    IssuerDefinition {
        issuer: CardIssuer::Elo,
        patterns: &[Pattern::Prefix("636297"), Pattern::Prefix("636368")],
        max_length: 16,
        block_sizes: BLOCKS_4X4,
    },
    IssuerDefinition {
        issuer: CardIssuer::Jcb,
        patterns: &[Pattern::Range {
            low: 3528,
            high: 3589,
            width: 4,
        }],
        max_length: 16,
        block_sizes: BLOCKS_4X4,
    },
    IssuerDefinition {
        issuer: CardIssuer::Laser,
        patterns: &[
            Pattern::Prefix("6706"),
            Pattern::Prefix("6709"),
            Pattern::Prefix("6771"),
        ],
        max_length: 16,
        block_sizes: BLOCKS_4X4,
    },
    IssuerDefinition {
        issuer: CardIssuer::Maestro,
        patterns: &[
            Pattern::Prefix("5018"),
            Pattern::Prefix("5020"),
            Pattern::Prefix("5038"),
            Pattern::Prefix("6304"),
            Pattern::Prefix("6703"),
            Pattern::Prefix("6708"),
            Pattern::Prefix("6759"),
            Pattern::Prefix("6761"),
            Pattern::Prefix("6762"),
            Pattern::Prefix("6763"),
        ],
        max_length: 16,
        block_sizes: BLOCKS_4X4,
    },
    IssuerDefinition {
        issuer: CardIssuer::UnionPay,
        patterns: &[Pattern::Prefix("62"), Pattern::Prefix("88")],
        max_length: 16,
        block_sizes: BLOCKS_4X4,
    },
];

/// Looks up the registry definition for an issuer.
///
/// Returns `None` for [`CardIssuer::Unknown`], which has no definition of its
/// own; callers fall back to [`FALLBACK_MAX_LENGTH`] and
/// [`FALLBACK_BLOCK_SIZES`].
pub fn definition(issuer: CardIssuer) -> Option<&'static IssuerDefinition> {
    REGISTRY.iter().find(|def| def.issuer == issuer)
}
