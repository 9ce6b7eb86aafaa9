//! Deck state and drawing operations.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};

/// A standard 52-card drawing deck.
///
/// The deck keeps an available pool and a discard pile. A drawn card moves to
/// the discard pile and cannot come up again until [`reset`](Self::reset)
/// returns every card to the pool and reshuffles. Together the two piles
/// always hold each of the 52 cards exactly once.
///
/// # Example
///
/// ```
/// use deckrs::{DECK_SIZE, Deck};
///
/// let mut deck = Deck::new(42);
/// let card = deck.draw().expect("a fresh deck has 52 cards");
/// assert_eq!(deck.remaining(), DECK_SIZE - 1);
/// assert_eq!(deck.drawn(), &[card]);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    /// All 52 cards in enumeration order. Never mutated after construction;
    /// `reset` restores the pool from this.
    population: Vec<Card>,
    /// Cards not yet drawn this round, shuffled.
    available: Vec<Card>,
    /// Cards drawn this round, in draw order.
    discarded: Vec<Card>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a shuffled deck seeded with the given value.
    ///
    /// The population is enumerated rank by rank (Ace through King), cycling
    /// suits in the order Diamonds, Clubs, Spades, Hearts. Two decks created
    /// with the same seed draw the same sequence of cards; callers wanting a
    /// non-deterministic deck pass an entropy- or time-derived seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut deck = Self {
            population: Self::full_population(),
            available: Vec::with_capacity(DECK_SIZE),
            discarded: Vec::with_capacity(DECK_SIZE),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.reset();
        deck
    }

    /// Enumerates the 52 distinct cards.
    fn full_population() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for rank in 1..=13 {
            for suit in Suit::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        cards
    }

    /// Shuffles the available pool in place.
    ///
    /// The discard pile and the recorded draw order are unaffected.
    pub fn shuffle(&mut self) {
        self.available.shuffle(&mut self.rng);
    }

    /// Draws the top card of the available pool.
    ///
    /// The card moves to the discard pile and cannot be drawn again until
    /// [`reset`](Self::reset). Returns `None` when the pool is empty, leaving
    /// the deck untouched; callers recover by resetting.
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.available.pop()?;
        self.discarded.push(card);
        Some(card)
    }

    /// Returns the number of cards still available to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.available.len()
    }

    /// Returns the number of cards drawn since the last reset.
    #[must_use]
    pub fn drawn_count(&self) -> usize {
        self.discarded.len()
    }

    /// Returns the cards drawn since the last reset, in draw order.
    #[must_use]
    pub fn drawn(&self) -> &[Card] {
        &self.discarded
    }

    /// Returns every card to the available pool and reshuffles.
    ///
    /// Afterwards [`remaining`](Self::remaining) is 52 and
    /// [`drawn_count`](Self::drawn_count) is 0. This is the only operation
    /// that makes a drawn card drawable again.
    pub fn reset(&mut self) {
        self.available.clear();
        self.available.extend_from_slice(&self.population);
        self.discarded.clear();
        self.shuffle();
    }
}
