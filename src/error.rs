//! Error types for table operations.

use thiserror::Error;

/// Errors that can occur while classifying a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// Selection size outside `1..=5`.
    #[error("invalid hand size: {0} (expected 1..=5)")]
    InvalidHandSize(usize),
}

/// Errors that can occur while drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Both the draw pile and the discard pile are empty.
    #[error("draw and discard piles are empty")]
    EmptyDeckExhausted,
}

/// Errors that can occur while discarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiscardError {
    /// Card is not in the hand.
    #[error("card is not in the hand")]
    NotInHand,
}

/// Errors that can occur while selecting cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    /// Card is not in the hand.
    #[error("card not found in the hand")]
    CardNotFound,
    /// Card is no longer in play.
    #[error("card is not in play")]
    CardInactive,
    /// Maximum number of selected cards reached.
    #[error("maximum number of selected cards reached")]
    LimitReached,
}
