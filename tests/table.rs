//! Table integration tests.

use handrank::selection::{refresh, selected_count};
use handrank::{
    ACE, Card, CardId, ClassifyError, Combination, DECK_SIZE, DiscardError, DrawError, HandCard,
    KING, QUEEN, SelectError, Suit, Table, TableOptions,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn stacked(draws: &[Card]) -> Table {
    Table::with_deck(TableOptions::default(), 1, draws)
}

fn hand_ids(table: &Table) -> Vec<CardId> {
    table.hand().cards().iter().map(HandCard::id).collect()
}

fn hand_faces(table: &Table) -> Vec<Card> {
    table.hand().cards().iter().map(HandCard::card).collect()
}

#[test]
fn new_table_builds_full_deck() {
    let table = Table::new(TableOptions::default(), 42);
    assert_eq!(table.deck_count(), DECK_SIZE);
    assert_eq!(table.total(), DECK_SIZE);
    assert_eq!(table.remaining(), DECK_SIZE);
    assert!(table.hand().is_empty());

    let with_jokers = Table::new(TableOptions::default().with_jokers(2), 42);
    assert_eq!(with_jokers.deck_count(), DECK_SIZE + 2);
    assert_eq!(with_jokers.total(), DECK_SIZE + 2);
}

#[test]
fn same_seed_deals_same_hand() {
    let mut a = Table::new(TableOptions::default(), 7);
    let mut b = Table::new(TableOptions::default(), 7);
    assert_eq!(a.deal_hand(), 8);
    assert_eq!(b.deal_hand(), 8);
    assert_eq!(hand_faces(&a), hand_faces(&b));
}

#[test]
fn deal_draws_every_card_once() {
    let mut table = Table::new(TableOptions::default(), 3);
    assert_eq!(table.deal(DECK_SIZE + 10), DECK_SIZE);
    assert_eq!(table.deck_count(), 0);

    let mut faces = hand_faces(&table);
    faces.sort_by_key(|c| (c.suit as u8, c.rank));
    faces.dedup();
    assert_eq!(faces.len(), DECK_SIZE);
    assert!(table.hand().cards().iter().all(HandCard::is_active));
}

#[test]
fn draw_follows_stacked_order_and_activates() {
    let mut table = stacked(&[card(Suit::Hearts, 2), card(Suit::Clubs, 9)]);
    let first = table.draw().unwrap();
    let drawn = table.card(first).unwrap();
    assert_eq!(drawn.card(), card(Suit::Hearts, 2));
    assert!(drawn.is_active());
    assert!(!drawn.is_selected());
    assert_eq!(table.deck_count(), 1);
}

#[test]
fn draw_on_empty_piles_returns_none() {
    let mut table = stacked(&[]);
    assert_eq!(table.draw(), None);
    assert_eq!(table.try_draw(), Err(DrawError::EmptyDeckExhausted));
}

#[test]
fn empty_deck_recycles_discard_pile() {
    let mut table = stacked(&[card(Suit::Hearts, 2), card(Suit::Clubs, 9)]);
    let a = table.draw().unwrap();
    let b = table.draw().unwrap();
    assert_eq!(table.deck_count(), 0);

    assert_eq!(table.discard(a), Ok(card(Suit::Hearts, 2)));
    assert_eq!(table.discard_count(), 1);

    let again = table.try_draw().unwrap();
    assert_eq!(again, a);
    assert_eq!(table.discard_count(), 0);
    assert_eq!(hand_ids(&table), vec![b, a]);

    // Both piles empty now.
    assert_eq!(table.draw(), None);
}

#[test]
fn discard_requires_card_in_hand() {
    let mut table = stacked(&[card(Suit::Hearts, 2)]);
    let id = table.draw().unwrap();
    table.toggle_select(id).unwrap();

    table.discard(id).unwrap();
    assert_eq!(table.discard(id), Err(DiscardError::NotInHand));
    assert!(table.hand().is_empty());

    // Recycled cards come back unselected.
    let id = table.draw().unwrap();
    assert!(!table.card(id).unwrap().is_selected());
}

#[test]
fn clear_hand_moves_cards_to_discard() {
    let mut table = Table::new(TableOptions::default(), 5);
    table.deal_hand();
    table.clear_hand();
    assert!(table.hand().is_empty());
    assert_eq!(table.discard_count(), 8);
    assert_eq!(table.deck_count() + table.discard_count(), table.total());
}

#[test]
fn add_joker_goes_to_bottom() {
    let mut table = stacked(&[card(Suit::Hearts, 2)]);
    let joker = table.add_joker();
    assert_eq!(table.total(), 2);

    let first = table.draw().unwrap();
    assert_ne!(first, joker);
    assert_eq!(table.draw(), Some(joker));
    assert!(table.card(joker).unwrap().card().joker);
}

#[test]
fn remaining_counts_deck_and_cards_in_play() {
    let mut table = Table::new(TableOptions::default(), 11);
    table.deal_hand();
    assert_eq!(table.remaining(), DECK_SIZE);

    let id = table.hand().cards()[0].id();
    table.set_active(id, false).unwrap();
    assert_eq!(table.remaining(), DECK_SIZE - 1);

    table.discard(hand_ids(&table)[1]).unwrap();
    assert_eq!(table.remaining(), DECK_SIZE - 2);
}

#[test]
fn selection_limit_is_enforced() {
    let mut table = Table::new(TableOptions::default(), 9);
    table.deal_hand();
    let ids = hand_ids(&table);

    for &id in &ids[..5] {
        assert_eq!(table.toggle_select(id), Ok(true));
    }
    assert!(!table.can_select());
    assert_eq!(table.toggle_select(ids[5]), Err(SelectError::LimitReached));

    // Deselecting frees a slot.
    assert_eq!(table.toggle_select(ids[0]), Ok(false));
    assert!(table.can_select());
    assert_eq!(table.toggle_select(ids[5]), Ok(true));
    assert_eq!(table.selected_count(), 5);

    table.clear_selection();
    assert_eq!(table.selected_count(), 0);
}

#[test]
fn selection_errors() {
    let mut table = Table::new(TableOptions::default().with_max_selected(2), 9);
    table.deal(3);
    let ids = hand_ids(&table);

    assert_eq!(
        table.toggle_select(CardId(999)),
        Err(SelectError::CardNotFound)
    );

    table.set_active(ids[0], false).unwrap();
    assert_eq!(table.toggle_select(ids[0]), Err(SelectError::CardInactive));

    table.toggle_select(ids[1]).unwrap();
    table.toggle_select(ids[2]).unwrap();
    assert!(!table.can_select());
    assert_eq!(
        table.set_active(CardId(999), true),
        Err(SelectError::CardNotFound)
    );
}

#[test]
fn deactivating_a_card_deselects_it() {
    let mut table = stacked(&[card(Suit::Hearts, 2), card(Suit::Clubs, 2)]);
    table.deal(2);
    let ids = hand_ids(&table);
    table.toggle_select(ids[0]).unwrap();
    table.toggle_select(ids[1]).unwrap();

    table.set_active(ids[1], false).unwrap();
    let evaluation = table.evaluate().unwrap();
    assert_eq!(evaluation.selected, vec![card(Suit::Hearts, 2)]);
    assert_eq!(evaluation.combination, Some(Combination::HighCard));
}

#[test]
fn refresh_filters_selected_cards_in_play() {
    let mut cards: Vec<HandCard> = [
        card(Suit::Hearts, 2),
        card(Suit::Clubs, 3),
        card(Suit::Spades, 4),
        card(Suit::Diamonds, 5),
    ]
    .iter()
    .enumerate()
    .map(|(i, &c)| HandCard::new(CardId(i as u32), c))
    .collect();

    for c in &mut cards {
        c.set_active(true);
    }
    cards[0].set_selected(true);
    cards[2].set_selected(true);
    cards[3].set_selected(true);
    cards[3].set_active(false);

    let before = cards.clone();
    let selected = refresh(&cards);
    assert_eq!(selected, vec![card(Suit::Hearts, 2), card(Suit::Spades, 4)]);
    assert_eq!(selected_count(&cards), 2);

    // No mutation, same answer every tick.
    assert_eq!(cards, before);
    assert_eq!(refresh(&cards), selected);
}

#[test]
fn evaluate_tracks_selection() {
    let mut table = stacked(&[
        card(Suit::Hearts, 5),
        card(Suit::Hearts, 5),
        card(Suit::Clubs, 9),
    ]);
    table.deal(3);
    let ids = hand_ids(&table);

    let evaluation = table.evaluate().unwrap();
    assert!(evaluation.selected.is_empty());
    assert_eq!(evaluation.combination, None);

    table.toggle_select(ids[0]).unwrap();
    table.toggle_select(ids[1]).unwrap();
    assert_eq!(
        table.evaluate().unwrap().combination,
        Some(Combination::OnePair)
    );

    table.toggle_select(ids[2]).unwrap();
    assert_eq!(
        table.evaluate().unwrap().combination,
        Some(Combination::TwoPair)
    );
    assert_eq!(table.evaluate(), table.evaluate());
}

#[test]
fn evaluate_rejects_oversized_selection() {
    let mut table = Table::new(TableOptions::default(), 2);
    table.deal_hand();

    // Bypass the selection limit through the options.
    table.options.max_selected = 8;
    for id in hand_ids(&table) {
        table.toggle_select(id).unwrap();
    }
    assert_eq!(table.evaluate(), Err(ClassifyError::InvalidHandSize(8)));
}

#[test]
fn sort_by_suit_orders_cards_in_play() {
    let mut table = stacked(&[
        card(Suit::Clubs, 3),
        card(Suit::Hearts, KING),
        card(Suit::Spades, 9),
        card(Suit::Diamonds, 4),
        card(Suit::Spades, 2),
        card(Suit::Hearts, 1),
    ]);
    table.deal(6);
    let hearts_king = hand_ids(&table)[1];
    table.set_active(hearts_king, false).unwrap();

    table.sort_by_suit();
    assert_eq!(
        hand_faces(&table),
        vec![
            card(Suit::Spades, 2),
            card(Suit::Spades, 9),
            card(Suit::Diamonds, 4),
            card(Suit::Hearts, 1),
            card(Suit::Clubs, 3),
            card(Suit::Hearts, KING),
        ]
    );
}

#[test]
fn sort_by_rank_puts_aces_first() {
    let mut table = stacked(&[
        card(Suit::Clubs, 2),
        Card::joker(),
        card(Suit::Hearts, QUEEN),
        card(Suit::Diamonds, ACE),
        card(Suit::Clubs, QUEEN),
        card(Suit::Spades, QUEEN),
        card(Suit::Hearts, KING),
    ]);
    table.deal(7);

    table.sort_by_rank();
    assert_eq!(
        hand_faces(&table),
        vec![
            card(Suit::Diamonds, ACE),
            card(Suit::Hearts, KING),
            card(Suit::Spades, QUEEN),
            card(Suit::Hearts, QUEEN),
            card(Suit::Clubs, QUEEN),
            card(Suit::Clubs, 2),
            Card::joker(),
        ]
    );
}

#[test]
fn trash_replaces_selected_cards_in_place() {
    let mut table = stacked(&[
        card(Suit::Hearts, 2),
        card(Suit::Hearts, 3),
        card(Suit::Hearts, 4),
        card(Suit::Hearts, 5),
        card(Suit::Clubs, 10),
        card(Suit::Clubs, 11),
    ]);
    table.deal(4);
    let ids = hand_ids(&table);
    table.toggle_select(ids[0]).unwrap();
    table.toggle_select(ids[2]).unwrap();

    let result = table.trash_selected();
    assert_eq!(result.discarded, vec![ids[0], ids[2]]);
    assert_eq!(result.replacements.len(), 2);
    assert_eq!(
        hand_faces(&table),
        vec![
            card(Suit::Clubs, 10),
            card(Suit::Hearts, 3),
            card(Suit::Clubs, 11),
            card(Suit::Hearts, 5),
        ]
    );
    assert_eq!(table.selected_count(), 0);
    assert_eq!(table.discard_count(), 2);
    assert_eq!(table.evaluate().unwrap().combination, None);
}

#[test]
fn trash_recycles_when_deck_is_empty() {
    let mut table = stacked(&[card(Suit::Hearts, 2), card(Suit::Hearts, 3)]);
    table.deal(2);
    let ids = hand_ids(&table);
    table.toggle_select(ids[1]).unwrap();

    let result = table.trash_selected();
    assert_eq!(result.discarded, vec![ids[1]]);
    assert_eq!(result.replacements, vec![ids[1]]);
    assert_eq!(hand_ids(&table), ids);
    assert!(!table.card(ids[1]).unwrap().is_selected());
}

#[test]
fn trash_without_selection_is_noop() {
    let mut table = Table::new(TableOptions::default(), 4);
    table.deal_hand();
    let before = hand_ids(&table);

    let result = table.trash_selected();
    assert!(result.discarded.is_empty());
    assert!(result.replacements.is_empty());
    assert_eq!(hand_ids(&table), before);
}

#[test]
fn options_builder_sets_fields() {
    let options = TableOptions::default()
        .with_hand_size(6)
        .with_max_selected(3)
        .with_jokers(1);

    assert_eq!(options.hand_size, 6);
    assert_eq!(options.max_selected, 3);
    assert_eq!(options.jokers, 1);
    assert_eq!(TableOptions::default().with_max_selected(7).max_selected, 5);
}

#[test]
fn card_ids_stay_unique_past_u16_range() {
    let draws = vec![card(Suit::Spades, 7); 70_000];
    let mut table = stacked(&draws);
    assert_eq!(table.total(), 70_000);

    let joker = table.add_joker();
    assert_eq!(joker, CardId(70_000));
    assert_eq!(table.total(), 70_001);

    assert_eq!(table.draw(), Some(CardId(0)));
    assert_eq!(table.draw(), Some(CardId(1)));
}
