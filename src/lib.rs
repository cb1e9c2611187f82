//! A single-player card table with a variable-size poker hand classifier and
//! optional `no_std` support.
//!
//! The crate provides a [`Table`] type that owns the deck, the player's hand
//! and the discard pile, and [`classify`], which names the poker-style
//! combination formed by one to five selected cards.
//!
//! # Example
//!
//! ```
//! use handrank::{Table, TableOptions};
//!
//! let mut table = Table::new(TableOptions::default(), 42);
//! table.deal_hand();
//!
//! let first = table.hand().cards()[0].id();
//! table.toggle_select(first).unwrap();
//!
//! let evaluation = table.evaluate().unwrap();
//! assert_eq!(evaluation.combination, Some(handrank::Combination::HighCard));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod classify;
pub mod combination;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod selection;
pub mod table;

// Re-export main types
pub use card::{ACE, Card, CardId, DECK_SIZE, JACK, KING, QUEEN, Suit};
pub use classify::{Predicate, Tally, classify};
pub use combination::Combination;
pub use error::{ClassifyError, DiscardError, DrawError, SelectError};
pub use hand::{Hand, HandCard};
pub use options::TableOptions;
pub use result::{Evaluation, TrashResult};
pub use selection::MAX_SELECTED;
pub use table::Table;
