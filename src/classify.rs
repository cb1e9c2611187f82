//! Variable-size hand classifier.
//!
//! A selection of one to five cards is matched against a cascade of
//! predicates chosen by its exact size. The first predicate that holds names
//! the combination; every cascade falls back to [`Combination::HighCard`].
//!
//! | Size | Cascade |
//! |---|---|
//! | 1 | high card |
//! | 2 | pair, flush, straight |
//! | 3 | three of a kind, two pair (any shared rank), flush, straight |
//! | 4 | four of a kind, full house, flush, straight, three of a kind, two pair |
//! | 5 | royal flush, straight flush, four of a kind, full house, flush, straight |
//!
//! Ranks are compared numerically with the Ace at 1, so an Ace only ever
//! starts a straight and a royal flush cannot be formed. Jokers are compared
//! by their own suit and rank and never substitute for other cards.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{ACE, Card};
use crate::combination::Combination;
use crate::error::ClassifyError;

/// Smallest selection the classifier accepts.
pub const MIN_CARDS: usize = 1;
/// Largest selection the classifier accepts.
pub const MAX_CARDS: usize = 5;

/// Number of cards holding each rank.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    counts: HashMap<u8, u8>,
}

impl Tally {
    /// Counts the ranks of `cards`.
    #[must_use]
    pub fn new(cards: &[Card]) -> Self {
        let mut counts = HashMap::new();
        for card in cards {
            let count = counts.entry(card.rank).or_insert(0u8);
            *count = count.saturating_add(1);
        }
        Self { counts }
    }

    /// Returns how many cards hold `rank`.
    #[must_use]
    pub fn count(&self, rank: u8) -> u8 {
        self.counts.get(&rank).copied().unwrap_or(0)
    }

    /// Returns the number of distinct ranks.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Returns whether some rank is held exactly `count` times.
    #[must_use]
    pub fn has_count(&self, count: u8) -> bool {
        self.counts.values().any(|&c| c == count)
    }

    /// Returns the number of ranks held at least `count` times.
    #[must_use]
    pub fn ranks_with_at_least(&self, count: u8) -> usize {
        self.counts.values().filter(|&&c| c >= count).count()
    }
}

/// A test over a selection of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predicate {
    /// Every card has the same rank.
    AllSameRank,
    /// At least two cards share a rank.
    AnyPair,
    /// Every card has the same suit.
    Flush,
    /// Sorted ranks step up by exactly one.
    Straight,
    /// Some rank is held four times.
    FourOfAKind,
    /// Some rank is held three times and another twice.
    FullHouse,
    /// Some rank is held three times.
    ThreeOfAKind,
    /// At least two ranks are held twice or more.
    TwoPair,
    /// Flush and straight.
    StraightFlush,
    /// Straight flush whose highest rank is the Ace.
    RoyalFlush,
}

impl Predicate {
    /// Evaluates the predicate over `cards`.
    #[must_use]
    pub fn test(self, cards: &[Card]) -> bool {
        self.holds(&Profile::new(cards))
    }

    fn holds(self, profile: &Profile) -> bool {
        match self {
            Self::AllSameRank => profile.tally.distinct() <= 1,
            Self::AnyPair => profile.tally.ranks_with_at_least(2) >= 1,
            Self::Flush => profile.suited,
            Self::Straight => profile.is_straight(),
            Self::FourOfAKind => profile.tally.has_count(4),
            Self::FullHouse => profile.tally.has_count(3) && profile.tally.has_count(2),
            Self::ThreeOfAKind => profile.tally.has_count(3),
            Self::TwoPair => profile.tally.ranks_with_at_least(2) >= 2,
            Self::StraightFlush => profile.suited && profile.is_straight(),
            Self::RoyalFlush => {
                profile.suited && profile.is_straight() && profile.ranks.last() == Some(&ACE)
            }
        }
    }
}

/// A cascade entry: the combination named when the predicate holds.
pub type Rule = (Predicate, Combination);

const SINGLE: &[Rule] = &[];

const PAIR: &[Rule] = &[
    (Predicate::AllSameRank, Combination::OnePair),
    (Predicate::Flush, Combination::Flush),
    (Predicate::Straight, Combination::Straight),
];

const TRIPLE: &[Rule] = &[
    (Predicate::AllSameRank, Combination::ThreeOfAKind),
    (Predicate::AnyPair, Combination::TwoPair),
    (Predicate::Flush, Combination::Flush),
    (Predicate::Straight, Combination::Straight),
];

const QUAD: &[Rule] = &[
    (Predicate::FourOfAKind, Combination::FourOfAKind),
    (Predicate::FullHouse, Combination::FullHouse),
    (Predicate::Flush, Combination::Flush),
    (Predicate::Straight, Combination::Straight),
    (Predicate::ThreeOfAKind, Combination::ThreeOfAKind),
    (Predicate::TwoPair, Combination::TwoPair),
];

const FIVE: &[Rule] = &[
    (Predicate::RoyalFlush, Combination::RoyalFlush),
    (Predicate::StraightFlush, Combination::StraightFlush),
    (Predicate::FourOfAKind, Combination::FourOfAKind),
    (Predicate::FullHouse, Combination::FullHouse),
    (Predicate::Flush, Combination::Flush),
    (Predicate::Straight, Combination::Straight),
];

const CASCADES: [&[Rule]; MAX_CARDS] = [SINGLE, PAIR, TRIPLE, QUAD, FIVE];

/// Returns the cascade used for selections of `size` cards.
///
/// Returns `None` if `size` is outside `1..=5`.
#[must_use]
pub fn cascade(size: usize) -> Option<&'static [Rule]> {
    if (MIN_CARDS..=MAX_CARDS).contains(&size) {
        Some(CASCADES[size - 1])
    } else {
        None
    }
}

/// Classifies a selection of cards.
///
/// The order of `selected` does not matter.
///
/// # Example
///
/// ```
/// use handrank::{Card, Combination, Suit, classify};
///
/// let pair = [Card::new(Suit::Hearts, 5), Card::new(Suit::Hearts, 5)];
/// assert_eq!(classify(&pair), Ok(Combination::OnePair));
/// ```
///
/// # Errors
///
/// Returns [`ClassifyError::InvalidHandSize`] if `selected` holds fewer than
/// one or more than five cards.
pub fn classify(selected: &[Card]) -> Result<Combination, ClassifyError> {
    let rules = cascade(selected.len()).ok_or(ClassifyError::InvalidHandSize(selected.len()))?;
    let profile = Profile::new(selected);

    Ok(rules
        .iter()
        .find(|(predicate, _)| predicate.holds(&profile))
        .map_or(Combination::HighCard, |&(_, combination)| combination))
}

/// Facts about a selection shared by every predicate.
struct Profile {
    /// Ranks in ascending order.
    ranks: Vec<u8>,
    tally: Tally,
    suited: bool,
}

impl Profile {
    fn new(cards: &[Card]) -> Self {
        let mut ranks: Vec<u8> = cards.iter().map(|c| c.rank).collect();
        ranks.sort_unstable();

        let suited = cards.windows(2).all(|pair| pair[0].suit == pair[1].suit);

        Self {
            ranks,
            tally: Tally::new(cards),
            suited,
        }
    }

    fn is_straight(&self) -> bool {
        self.ranks
            .windows(2)
            .all(|pair| pair[1].checked_sub(pair[0]) == Some(1))
    }
}
