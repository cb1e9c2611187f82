use log::trace;

use crate::card::CardId;
use crate::error::SelectError;
use crate::selection;

use super::Table;

impl Table {
    /// Returns the number of selected cards in play.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        selection::selected_count(self.hand.cards())
    }

    /// Returns whether another card can be selected.
    #[must_use]
    pub fn can_select(&self) -> bool {
        self.selected_count() < self.options.max_selected
    }

    /// Toggles the selection of a hand card and returns the new state.
    ///
    /// Deselecting always succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the card is not in the hand, is not in play, or the
    /// selection limit has been reached.
    pub fn toggle_select(&mut self, id: CardId) -> Result<bool, SelectError> {
        let can_select = self.can_select();
        let card = self.hand.get_mut(id).ok_or(SelectError::CardNotFound)?;

        if card.is_selected() {
            card.set_selected(false);
            trace!("Deselected {id}");
            return Ok(false);
        }

        if !card.is_active() {
            return Err(SelectError::CardInactive);
        }
        if !can_select {
            return Err(SelectError::LimitReached);
        }

        card.set_selected(true);
        trace!("Selected {id}");
        Ok(true)
    }

    /// Deselects every hand card.
    pub fn clear_selection(&mut self) {
        self.hand.clear_selection();
    }

    /// Puts a hand card into or out of play.
    ///
    /// A card taken out of play is also deselected.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::CardNotFound`] if the card is not in the hand.
    pub fn set_active(&mut self, id: CardId, active: bool) -> Result<(), SelectError> {
        let card = self.hand.get_mut(id).ok_or(SelectError::CardNotFound)?;
        if active {
            card.set_active(true);
        } else {
            card.deactivate();
        }
        Ok(())
    }
}
