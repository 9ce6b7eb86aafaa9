//! A drawing-deck engine for a standard 52-card deck.
//!
//! The crate provides a [`Deck`] type that hands out cards one at a time with
//! no repeats until the deck is reset, plus [`Card`] rendering and parsing.
//!
//! # Example
//!
//! ```
//! use deckrs::{DECK_SIZE, Deck};
//!
//! let mut deck = Deck::new(42);
//! while let Some(card) = deck.draw() {
//!     println!("You drew the {card}");
//! }
//! assert_eq!(deck.drawn_count(), DECK_SIZE);
//!
//! deck.reset();
//! assert_eq!(deck.remaining(), DECK_SIZE);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::ParseCardError;
