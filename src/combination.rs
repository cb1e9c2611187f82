//! Combination labels produced by the classifier.

use core::fmt;

/// Poker-style combination recognized in a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combination {
    /// No other combination matched.
    HighCard,
    /// Two cards of the same rank.
    OnePair,
    /// Two ranks held at least twice, or any shared rank among three cards.
    TwoPair,
    /// Three cards of the same rank (triple).
    ThreeOfAKind,
    /// Ranks forming a gapless ascending run.
    Straight,
    /// All cards share a suit.
    Flush,
    /// A triple and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight in a single suit.
    StraightFlush,
    /// A straight flush topped by an Ace.
    RoyalFlush,
}

impl Combination {
    /// Every label, weakest first.
    pub const ALL: [Self; 10] = [
        Self::HighCard,
        Self::OnePair,
        Self::TwoPair,
        Self::ThreeOfAKind,
        Self::Straight,
        Self::Flush,
        Self::FullHouse,
        Self::FourOfAKind,
        Self::StraightFlush,
        Self::RoyalFlush,
    ];

    /// Returns the display name of the combination.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HighCard => "High Card",
            Self::OnePair => "One Pair",
            Self::TwoPair => "Two Pair",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOfAKind => "Four of a Kind",
            Self::StraightFlush => "Straight Flush",
            Self::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
