//! Issuer change notification.
//!
//! The presentation layer re-renders on every field edit, but only wants to
//! hear about the card number when its classification actually changed. The
//! core contract is a pure diff: the caller owns the previous classification
//! and threads it through [`issuer_change`]; nothing in this module holds
//! state of its own. [`IssuerTracker`] is a small caller-side convenience
//! that does the threading for you.

use crate::classify::Classification;
use crate::CardIssuer;

/// Event emitted when the number field's classification changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IssuerChange {
    /// The newly matched issuer.
    pub issuer: CardIssuer,
    /// Maximum significant digits for the new issuer.
    pub max_length: usize,
}

impl From<Classification> for IssuerChange {
    fn from(classification: Classification) -> Self {
        Self {
            issuer: classification.issuer,
            max_length: classification.max_length,
        }
    }
}

/// Compares two classifications and returns an event if they differ.
///
/// Emits when either the issuer or the maximum length changed, and on the
/// first evaluation (`previous` is `None`) regardless of what the first
/// classification is - mirroring a first render with whatever number is
/// already present. Returns `None` for re-evaluations where the tuple is
/// unchanged, so unrelated field edits (name, expiry, cvc, focus) never
/// produce duplicate notifications.
///
/// # Example
///
/// ```
/// use cc_display::{classify, issuer_change};
///
/// let first = classify("378282246310005");
/// let event = issuer_change(None, &first).unwrap();
/// assert_eq!(event.issuer.id(), "american-express");
/// assert_eq!(event.max_length, 15);
///
/// // Same classification again: no event.
/// assert!(issuer_change(Some(&first), &first).is_none());
/// ```
pub fn issuer_change(
    previous: Option<&Classification>,
    current: &Classification,
) -> Option<IssuerChange> {
    match previous {
        Some(prev) if prev == current => None,
        _ => Some(IssuerChange::from(*current)),
    }
}

/// Caller-owned holder for the last known classification.
///
/// Feed it each freshly computed classification; it returns an event exactly
/// when [`issuer_change`] would. The tracker lives in the caller's state,
/// keeping the core functions pure.
///
/// # Example
///
/// ```
/// use cc_display::{classify, CardIssuer, IssuerTracker};
///
/// let mut tracker = IssuerTracker::new();
///
/// let event = tracker.update(classify("")).unwrap();
/// assert_eq!(event.issuer, CardIssuer::Unknown);
///
/// let event = tracker.update(classify("4111111111111111")).unwrap();
/// assert_eq!(event.issuer, CardIssuer::Visa);
///
/// // Re-render with the same number: nothing to report.
/// assert!(tracker.update(classify("4111111111111111")).is_none());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct IssuerTracker {
    last: Option<Classification>,
}

impl IssuerTracker {
    /// Creates a tracker with no previous classification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `current` and returns an event if it differs from the last
    /// recorded classification.
    pub fn update(&mut self, current: Classification) -> Option<IssuerChange> {
        let event = issuer_change(self.last.as_ref(), &current);
        self.last = Some(current);
        event
    }

    /// Returns the last classification seen, if any.
    pub fn last(&self) -> Option<&Classification> {
        self.last.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;

    #[test]
    fn test_first_evaluation_always_emits() {
        let unknown = classify("");
        let event = issuer_change(None, &unknown).unwrap();
        assert_eq!(event.issuer, CardIssuer::Unknown);
        assert_eq!(event.max_length, 16);
    }

    #[test]
    fn test_emits_once_per_change() {
        let empty = classify("");
        let amex = classify("378282246310005");

        let event = issuer_change(Some(&empty), &amex).unwrap();
        assert_eq!(event.issuer, CardIssuer::Amex);
        assert_eq!(event.max_length, 15);

        // Unchanged tuple across a re-render: no event.
        assert!(issuer_change(Some(&amex), &amex).is_none());
    }

    #[test]
    fn test_emits_on_max_length_change_alone() {
        // Both Visa, but a hypothetical prior state with a different length
        // must still notify.
        let prev = Classification {
            issuer: CardIssuer::Visa,
            max_length: 16,
        };
        let current = Classification {
            issuer: CardIssuer::Visa,
            max_length: 19,
        };
        assert!(issuer_change(Some(&prev), &current).is_some());
    }

    #[test]
    fn test_tracker_threads_previous_state() {
        let mut tracker = IssuerTracker::new();
        assert!(tracker.last().is_none());

        assert!(tracker.update(classify("")).is_some());
        let event = tracker.update(classify("378282246310005")).unwrap();
        assert_eq!(event.issuer, CardIssuer::Amex);

        // Name/focus edits re-run classification with the same number.
        assert!(tracker.update(classify("378282246310005")).is_none());
        assert!(tracker.update(classify("378282246310005")).is_none());

        assert_eq!(tracker.last().unwrap().issuer, CardIssuer::Amex);
    }

    #[test]
    fn test_event_from_classification() {
        let c = classify("30569309025904");
        let event = IssuerChange::from(c);
        assert_eq!(event.issuer, CardIssuer::DinersClub);
        assert_eq!(event.max_length, 14);
    }
}
