//! Deck integration tests.

use std::collections::HashSet;
use std::str::FromStr;

use deckrs::{Card, DECK_SIZE, Deck, ParseCardError, Suit};

#[test]
fn fresh_deck_counts() {
    let deck = Deck::new(1);
    assert_eq!(deck.remaining(), DECK_SIZE);
    assert_eq!(deck.drawn_count(), 0);
    assert!(deck.drawn().is_empty());
}

#[test]
fn draw_moves_card_to_discard_pile() {
    let mut deck = Deck::new(7);
    let card = deck.draw().unwrap();
    assert_eq!(deck.remaining(), DECK_SIZE - 1);
    assert_eq!(deck.drawn_count(), 1);
    assert_eq!(deck.drawn(), &[card]);
}

#[test]
fn counters_stay_complementary() {
    let mut deck = Deck::new(3);
    for _ in 0..20 {
        deck.draw();
        assert_eq!(deck.remaining() + deck.drawn_count(), DECK_SIZE);
    }
    deck.shuffle();
    assert_eq!(deck.remaining() + deck.drawn_count(), DECK_SIZE);
    deck.reset();
    assert_eq!(deck.remaining() + deck.drawn_count(), DECK_SIZE);
}

#[test]
fn fifty_two_draws_are_distinct() {
    let mut deck = Deck::new(42);
    let mut seen = HashSet::new();
    for i in 0..DECK_SIZE {
        let card = deck
            .draw()
            .unwrap_or_else(|| panic!("deck empty after {i} draws"));
        assert!(seen.insert(card), "{card} drawn twice");
    }
    assert_eq!(seen.len(), DECK_SIZE);
}

#[test]
fn draw_on_empty_deck_returns_none_without_side_effects() {
    let mut deck = Deck::new(0);
    for _ in 0..DECK_SIZE {
        assert!(deck.draw().is_some());
    }
    assert!(deck.draw().is_none());
    assert_eq!(deck.remaining(), 0);
    assert_eq!(deck.drawn_count(), DECK_SIZE);
}

#[test]
fn same_seed_draws_the_same_sequence() {
    let mut a = Deck::new(42);
    let mut b = Deck::new(42);
    let left: Vec<Card> = std::iter::from_fn(|| a.draw()).collect();
    let right: Vec<Card> = std::iter::from_fn(|| b.draw()).collect();
    assert_eq!(left.len(), DECK_SIZE);
    assert_eq!(left, right);
}

#[test]
fn different_seeds_draw_different_sequences() {
    let mut a = Deck::new(1);
    let mut b = Deck::new(2);
    let left: Vec<Card> = std::iter::from_fn(|| a.draw()).collect();
    let right: Vec<Card> = std::iter::from_fn(|| b.draw()).collect();
    assert_ne!(left, right);
}

#[test]
fn reset_mid_round_restores_the_full_deck() {
    let mut deck = Deck::new(9);
    let drawn_before: Vec<Card> = (0..10).map(|_| deck.draw().unwrap()).collect();

    deck.reset();
    assert_eq!(deck.remaining(), DECK_SIZE);
    assert_eq!(deck.drawn_count(), 0);

    let all_after: HashSet<Card> = std::iter::from_fn(|| deck.draw()).collect();
    assert_eq!(all_after.len(), DECK_SIZE);
    for card in drawn_before {
        assert!(all_after.contains(&card), "{card} not drawable after reset");
    }
}

#[test]
fn shuffle_leaves_discard_pile_and_card_set_alone() {
    let mut deck = Deck::new(5);
    let first = deck.draw().unwrap();

    deck.shuffle();
    assert_eq!(deck.drawn(), &[first]);
    assert_eq!(deck.remaining(), DECK_SIZE - 1);

    let mut rest: HashSet<Card> = std::iter::from_fn(|| deck.draw()).collect();
    assert_eq!(rest.len(), DECK_SIZE - 1);
    assert!(!rest.contains(&first));
    rest.insert(first);
    assert_eq!(rest.len(), DECK_SIZE);
}

#[test]
fn repeated_resets_always_yield_a_full_deck() {
    let mut deck = Deck::new(11);
    for _ in 0..3 {
        deck.reset();
        assert_eq!(deck.remaining(), DECK_SIZE);
        assert_eq!(deck.drawn_count(), 0);
    }
}

#[test]
fn rank_and_suit_display_names() {
    assert_eq!(Card::new(Suit::Hearts, 1).to_string(), "Ace of Hearts");
    assert_eq!(Card::new(Suit::Diamonds, 7).to_string(), "7 of Diamonds");
    assert_eq!(Card::new(Suit::Spades, 11).to_string(), "Jack of Spades");
    assert_eq!(Card::new(Suit::Clubs, 12).to_string(), "Queen of Clubs");
    assert_eq!(Card::new(Suit::Clubs, 13).to_string(), "King of Clubs");
    assert_eq!(Suit::Hearts.name(), "Hearts");
    assert_eq!(Card::new(Suit::Hearts, 10).rank_name(), "10");
}

#[test]
fn card_codes_round_trip() {
    for code in ["AS", "10H", "KD", "2C", "QD", "JH"] {
        let card = Card::from_str(code).unwrap();
        assert_eq!(card.code(), code);
    }
    assert_eq!(Card::from_str("as").unwrap(), Card::new(Suit::Spades, 1));
    assert_eq!(Card::from_str("10h").unwrap(), Card::new(Suit::Hearts, 10));
}

#[test]
fn card_parse_errors() {
    assert_eq!(Card::from_str("").unwrap_err(), ParseCardError::Empty);
    assert_eq!(Card::from_str("  ").unwrap_err(), ParseCardError::Empty);
    assert_eq!(Card::from_str("ZS").unwrap_err(), ParseCardError::UnknownRank);
    assert_eq!(Card::from_str("14H").unwrap_err(), ParseCardError::UnknownRank);
    assert_eq!(Card::from_str("H").unwrap_err(), ParseCardError::UnknownRank);
    assert_eq!(Card::from_str("7X").unwrap_err(), ParseCardError::UnknownSuit);
}
