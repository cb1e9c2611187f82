//! Result types for table operations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, CardId};
use crate::combination::Combination;

/// Outcome of one evaluation tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Selected cards still in play, in hand order.
    pub selected: Vec<Card>,
    /// Combination of the selection, or `None` when nothing is selected.
    pub combination: Option<Combination>,
}

/// Outcome of trashing the selected cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrashResult {
    /// Cards moved to the discard pile.
    pub discarded: Vec<CardId>,
    /// Cards drawn into the vacated positions.
    pub replacements: Vec<CardId>,
}
