//! Selection tracking.
//!
//! The selection is recomputed from the hand on every evaluation instead of
//! being kept in sync with selection events.

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::HandCard;

/// Maximum number of cards that can be selected at once.
pub const MAX_SELECTED: usize = 5;

/// Returns the faces of the selected cards that are still in play, in hand
/// order.
#[must_use]
pub fn refresh(hand: &[HandCard]) -> Vec<Card> {
    hand.iter()
        .filter(|c| counts_as_selected(c))
        .map(HandCard::card)
        .collect()
}

/// Returns the number of selected cards that are still in play.
#[must_use]
pub fn selected_count(hand: &[HandCard]) -> usize {
    hand.iter().filter(|c| counts_as_selected(c)).count()
}

const fn counts_as_selected(card: &HandCard) -> bool {
    card.is_selected() && card.is_active()
}
