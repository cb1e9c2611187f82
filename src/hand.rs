//! Card instances and the player's hand.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, CardId};

/// A physical card instance together with its table state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandCard {
    id: CardId,
    card: Card,
    /// Whether the player has selected the card.
    selected: bool,
    /// Whether the card is still in play on the table.
    active: bool,
}

impl HandCard {
    /// Creates an inactive, unselected card instance.
    #[must_use]
    pub const fn new(id: CardId, card: Card) -> Self {
        Self {
            id,
            card,
            selected: false,
            active: false,
        }
    }

    /// Returns the identity of this instance.
    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    /// Returns the card face.
    #[must_use]
    pub const fn card(&self) -> Card {
        self.card
    }

    /// Returns whether the card is selected.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    /// Sets the selection flag.
    pub const fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Returns whether the card is still in play.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Sets the in-play flag.
    pub const fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Puts the card into play, unselected.
    pub(crate) const fn activate(&mut self) {
        self.active = true;
        self.selected = false;
    }

    /// Takes the card out of play, unselected.
    pub(crate) const fn deactivate(&mut self) {
        self.active = false;
        self.selected = false;
    }
}

/// Cards currently drawn by the player, in display order.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<HandCard>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[HandCard] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the position of the card with the given id.
    #[must_use]
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id() == id)
    }

    /// Returns the card with the given id.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&HandCard> {
        self.cards.iter().find(|c| c.id() == id)
    }

    /// Returns the card with the given id mutably.
    pub fn get_mut(&mut self, id: CardId) -> Option<&mut HandCard> {
        self.cards.iter_mut().find(|c| c.id() == id)
    }

    /// Returns the number of cards still in play.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_active()).count()
    }

    /// Appends a card to the end of the hand.
    pub(crate) fn push(&mut self, card: HandCard) {
        self.cards.push(card);
    }

    /// Places a card at `index`, shifting later cards right.
    pub(crate) fn insert(&mut self, index: usize, card: HandCard) {
        let index = index.min(self.cards.len());
        self.cards.insert(index, card);
    }

    /// Removes and returns the card with the given id.
    pub(crate) fn remove(&mut self, id: CardId) -> Option<HandCard> {
        let index = self.position(id)?;
        Some(self.cards.remove(index))
    }

    /// Removes every card, returning them in hand order.
    pub(crate) fn take_all(&mut self) -> Vec<HandCard> {
        core::mem::take(&mut self.cards)
    }

    /// Deselects every card.
    pub(crate) fn clear_selection(&mut self) {
        for card in &mut self.cards {
            card.set_selected(false);
        }
    }

    /// Reorders the active cards by `key`, keeping inactive cards after them
    /// in their current relative order.
    pub(crate) fn sort_active_by_key<K: Ord>(&mut self, key: impl Fn(&Card) -> K) {
        // Stable: `false` (active) sorts before `true` (inactive).
        self.cards.sort_by(|a, b| {
            (!a.is_active())
                .cmp(&!b.is_active())
                .then_with(|| {
                    if a.is_active() && b.is_active() {
                        key(&a.card()).cmp(&key(&b.card()))
                    } else {
                        core::cmp::Ordering::Equal
                    }
                })
        });
    }
}
