use alloc::vec::Vec;
use log::trace;

use crate::card::{ACE, Card, KING, Suit};
use crate::result::TrashResult;

use super::Table;

/// Suit order when arranging by suit.
const fn suit_sort_order(suit: Suit) -> u8 {
    match suit {
        Suit::Spades => 0,
        Suit::Diamonds => 1,
        Suit::Hearts => 2,
        Suit::Clubs => 3,
    }
}

/// Suit order for breaking rank ties.
const fn suit_tie_order(suit: Suit) -> u8 {
    match suit {
        Suit::Spades => 0,
        Suit::Hearts => 1,
        Suit::Diamonds => 2,
        Suit::Clubs => 3,
    }
}

/// Ace first, then King down to Two.
const fn rank_sort_order(rank: u8) -> u8 {
    match rank {
        ACE => 0,
        2..=KING => KING + 1 - rank,
        _ => u8::MAX,
    }
}

impl Table {
    /// Arranges the cards in play by suit (Spades, Diamonds, Hearts, Clubs),
    /// ascending rank within a suit. Jokers go last.
    pub fn sort_by_suit(&mut self) {
        self.hand
            .sort_active_by_key(|c: &Card| (c.joker, suit_sort_order(c.suit), c.rank));
    }

    /// Arranges the cards in play from Ace, King down to Two, breaking ties
    /// Spades, Hearts, Diamonds, Clubs. Jokers go last.
    pub fn sort_by_rank(&mut self) {
        self.hand.sort_active_by_key(|c: &Card| {
            (c.joker, rank_sort_order(c.rank), suit_tie_order(c.suit))
        });
    }

    /// Discards every selected card and draws a replacement into each vacated
    /// position.
    ///
    /// Replacements are drawn after all selected cards have been discarded,
    /// so an empty draw pile recycles them. Positions that cannot be refilled
    /// are closed up.
    pub fn trash_selected(&mut self) -> TrashResult {
        let slots: Vec<_> = self
            .hand
            .cards()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_selected() && c.is_active())
            .map(|(index, c)| (index, c.id()))
            .collect();

        let mut result = TrashResult::default();
        if slots.is_empty() {
            return result;
        }

        for &(_, id) in &slots {
            if let Some(mut card) = self.hand.remove(id) {
                card.deactivate();
                self.discard.push(card);
                result.discarded.push(id);
            }
        }

        for &(index, _) in &slots {
            let Some(card) = self.take_top() else {
                break;
            };
            result.replacements.push(card.id());
            self.hand.insert(index, card);
        }

        trace!(
            "Trashed {} cards, drew {} replacements",
            result.discarded.len(),
            result.replacements.len()
        );
        result
    }
}
