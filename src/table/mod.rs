//! Card table: deck, hand and discard pile bookkeeping.

use alloc::vec::Vec;
use log::{debug, info, trace};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, CardId, DECK_SIZE, Suit};
use crate::classify::classify;
use crate::error::{ClassifyError, DiscardError, DrawError};
use crate::hand::{Hand, HandCard};
use crate::options::TableOptions;
use crate::result::Evaluation;
use crate::selection;

mod arrange;
mod select;

/// A single-player card table.
///
/// The table owns every card instance. Cards move by value between the draw
/// pile, the hand and the discard pile, so a card is always in exactly one
/// of them.
#[derive(Debug, Clone)]
pub struct Table {
    /// Table options.
    pub options: TableOptions,
    /// Draw pile; the last card is drawn first.
    deck: Vec<HandCard>,
    /// Cards drawn by the player.
    hand: Hand,
    /// Discarded cards waiting to be recycled.
    discard: Vec<HandCard>,
    /// Next card id to assign.
    next_id: u32,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Table {
    /// Creates a table with a shuffled deck of 52 cards plus the configured
    /// jokers.
    ///
    /// # Example
    ///
    /// ```
    /// use handrank::{Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 42);
    /// assert_eq!(table.deck_count(), 52);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE + options.jokers as usize);
        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }
        for _ in 0..options.jokers {
            cards.push(Card::joker());
        }

        let mut table = Self::with_deck(options, seed, &cards);
        table.shuffle();
        table
    }

    /// Creates a table whose draw pile holds `cards` in draw order, unshuffled.
    ///
    /// The first card of `cards` is drawn first. `options.jokers` is ignored.
    #[must_use]
    pub fn with_deck(options: TableOptions, seed: u64, cards: &[Card]) -> Self {
        let mut table = Self {
            options,
            deck: Vec::with_capacity(cards.len()),
            hand: Hand::new(),
            discard: Vec::new(),
            next_id: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };

        let mut deck: Vec<HandCard> = cards.iter().map(|&card| table.mint(card)).collect();
        deck.reverse();
        table.deck = deck;
        table
    }

    /// Creates a new card instance with a fresh id.
    fn mint(&mut self, card: Card) -> HandCard {
        let id = CardId(self.next_id);
        self.next_id += 1;
        HandCard::new(id, card)
    }

    /// Shuffles the draw pile.
    pub fn shuffle(&mut self) {
        self.deck.shuffle(&mut self.rng);
        trace!("Shuffled {} cards", self.deck.len());
    }

    /// Moves the discard pile into the draw pile and shuffles it.
    fn recycle_discard_pile(&mut self) {
        if self.discard.is_empty() {
            return;
        }

        info!(
            "Recycling {} discarded cards into the draw pile",
            self.discard.len()
        );
        self.deck.append(&mut self.discard);
        self.shuffle();
    }

    /// Takes the top card of the draw pile and puts it into play, recycling
    /// the discard pile first if the draw pile is empty.
    fn take_top(&mut self) -> Option<HandCard> {
        if self.deck.is_empty() {
            self.recycle_discard_pile();
        }

        let mut card = self.deck.pop()?;
        card.activate();
        trace!("Drew {} {}", card.id(), card.card());
        Some(card)
    }

    /// Draws a card into the hand.
    ///
    /// Returns `None` only if both the draw pile and the discard pile are
    /// empty.
    pub fn draw(&mut self) -> Option<CardId> {
        let card = self.take_top()?;
        let id = card.id();
        self.hand.push(card);
        Some(id)
    }

    /// Draws a card into the hand.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeckExhausted`] if both the draw pile and the
    /// discard pile are empty.
    pub fn try_draw(&mut self) -> Result<CardId, DrawError> {
        self.draw().ok_or(DrawError::EmptyDeckExhausted)
    }

    /// Draws up to `count` cards and returns how many were drawn.
    pub fn deal(&mut self, count: usize) -> usize {
        (0..count).map_while(|_| self.draw()).count()
    }

    /// Deals the configured hand size.
    pub fn deal_hand(&mut self) -> usize {
        self.deal(self.options.hand_size)
    }

    /// Moves a card from the hand to the discard pile.
    ///
    /// The card is taken out of play and deselected.
    ///
    /// # Errors
    ///
    /// Returns [`DiscardError::NotInHand`] if the card is not in the hand.
    pub fn discard(&mut self, id: CardId) -> Result<Card, DiscardError> {
        let mut card = self.hand.remove(id).ok_or(DiscardError::NotInHand)?;
        card.deactivate();
        trace!("Discarded {} {}", card.id(), card.card());

        let face = card.card();
        self.discard.push(card);
        Ok(face)
    }

    /// Moves every hand card to the discard pile.
    pub fn clear_hand(&mut self) {
        for mut card in self.hand.take_all() {
            card.deactivate();
            self.discard.push(card);
        }
    }

    /// Adds a joker to the bottom of the draw pile.
    pub fn add_joker(&mut self) -> CardId {
        let joker = self.mint(Card::joker());
        let id = joker.id();
        self.deck.insert(0, joker);
        id
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the hand card with the given id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&HandCard> {
        self.hand.get(id)
    }

    /// Returns the number of cards in the draw pile.
    #[must_use]
    pub fn deck_count(&self) -> usize {
        self.deck.len()
    }

    /// Returns the number of cards in the discard pile.
    #[must_use]
    pub fn discard_count(&self) -> usize {
        self.discard.len()
    }

    /// Returns the number of cards still available to the player: the draw
    /// pile plus the hand cards in play.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.deck.len() + self.hand.active_count()
    }

    /// Returns the number of card instances owned by the table.
    #[must_use]
    pub fn total(&self) -> usize {
        self.next_id as usize
    }

    /// Selects the current cards and classifies them.
    ///
    /// Nothing is cached; call this once per tick.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::InvalidHandSize`] if more than five cards are
    /// selected.
    pub fn evaluate(&self) -> Result<Evaluation, ClassifyError> {
        let selected = selection::refresh(self.hand.cards());
        debug!("Selected cards: {}", selected.len());

        let combination = if selected.is_empty() {
            None
        } else {
            let combination = classify(&selected)?;
            debug!("Current combination: {combination}");
            Some(combination)
        };

        Ok(Evaluation {
            selected,
            combination,
        })
    }
}
