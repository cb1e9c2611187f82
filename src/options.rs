//! Table configuration options.

use crate::selection::MAX_SELECTED;

/// Configuration options for a card table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use handrank::TableOptions;
///
/// let options = TableOptions::default()
///     .with_hand_size(10)
///     .with_jokers(2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableOptions {
    /// Number of cards dealt by [`Table::deal_hand`](crate::Table::deal_hand).
    pub hand_size: usize,
    /// Maximum number of cards that can be selected at once (at most 5).
    pub max_selected: usize,
    /// Number of jokers shuffled into a new deck.
    pub jokers: u8,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            hand_size: 8,
            max_selected: MAX_SELECTED,
            jokers: 0,
        }
    }
}

impl TableOptions {
    /// Sets the number of cards in an initial deal.
    ///
    /// # Example
    ///
    /// ```
    /// use handrank::TableOptions;
    ///
    /// let options = TableOptions::default().with_hand_size(5);
    /// assert_eq!(options.hand_size, 5);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the selection limit.
    ///
    /// Values above 5 are clamped to 5, the largest selection the classifier
    /// accepts.
    ///
    /// # Example
    ///
    /// ```
    /// use handrank::TableOptions;
    ///
    /// let options = TableOptions::default().with_max_selected(3);
    /// assert_eq!(options.max_selected, 3);
    ///
    /// let options = TableOptions::default().with_max_selected(9);
    /// assert_eq!(options.max_selected, 5);
    /// ```
    #[must_use]
    pub const fn with_max_selected(mut self, max_selected: usize) -> Self {
        self.max_selected = if max_selected > MAX_SELECTED {
            MAX_SELECTED
        } else {
            max_selected
        };
        self
    }

    /// Sets the number of jokers added to a new deck.
    ///
    /// # Example
    ///
    /// ```
    /// use handrank::TableOptions;
    ///
    /// let options = TableOptions::default().with_jokers(2);
    /// assert_eq!(options.jokers, 2);
    /// ```
    #[must_use]
    pub const fn with_jokers(mut self, jokers: u8) -> Self {
        self.jokers = jokers;
        self
    }
}
