//! Error types for card parsing.

use thiserror::Error;

/// Errors that can occur when parsing a card from a compact code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Input is empty.
    #[error("empty card code")]
    Empty,
    /// Rank is not a face letter or a numeral in 1..=13.
    #[error("unknown rank in card code")]
    UnknownRank,
    /// Suit letter is not one of D, C, S, H.
    #[error("unknown suit in card code")]
    UnknownSuit,
}
