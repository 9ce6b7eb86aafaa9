//! Card types and rendering.

use alloc::format;
use alloc::string::{String, ToString};

use crate::error::ParseCardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
}

impl Suit {
    /// All four suits, in the order used to enumerate a fresh deck.
    pub const ALL: [Self; 4] = [Self::Diamonds, Self::Clubs, Self::Spades, Self::Hearts];

    /// Display name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
            Self::Hearts => "Hearts",
        }
    }

    /// One-letter code used by [`Card::code`] and parsing.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Spades => 'S',
            Self::Hearts => 'H',
        }
    }
}

impl core::fmt::Display for Suit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but render with a bare numeral name.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Display name of the rank.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, Suit};
    ///
    /// assert_eq!(Card::new(Suit::Hearts, 1).rank_name(), "Ace");
    /// assert_eq!(Card::new(Suit::Hearts, 7).rank_name(), "7");
    /// ```
    #[must_use]
    pub fn rank_name(self) -> String {
        match self.rank {
            1 => String::from("Ace"),
            11 => String::from("Jack"),
            12 => String::from("Queen"),
            13 => String::from("King"),
            n => n.to_string(),
        }
    }

    /// Compact code for the card, e.g. `"AS"` for the Ace of Spades or
    /// `"10H"` for the 10 of Hearts. Round-trips through [`str::parse`].
    #[must_use]
    pub fn code(self) -> String {
        let rank = match self.rank {
            1 => String::from("A"),
            11 => String::from("J"),
            12 => String::from("Q"),
            13 => String::from("K"),
            n => n.to_string(),
        };
        format!("{rank}{}", self.suit.letter())
    }
}

/// Renders the long name, e.g. `"Queen of Hearts"`.
impl core::fmt::Display for Card {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} of {}", self.rank_name(), self.suit)
    }
}

/// Parses a compact card code such as `"AS"`, `"10h"` or `"kd"`.
///
/// The final character is the suit letter; everything before it is the rank,
/// either a face letter (A, J, Q, K) or a numeral in 1..=13. Case-insensitive.
impl core::str::FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let suit_ch = chars.next_back().ok_or(ParseCardError::Empty)?;
        let rank_part = chars.as_str();

        let suit = match suit_ch.to_ascii_uppercase() {
            'D' => Suit::Diamonds,
            'C' => Suit::Clubs,
            'S' => Suit::Spades,
            'H' => Suit::Hearts,
            _ => return Err(ParseCardError::UnknownSuit),
        };

        let rank = match rank_part.to_ascii_uppercase().as_str() {
            "A" => 1,
            "J" => 11,
            "Q" => 12,
            "K" => 13,
            numeral => numeral
                .parse::<u8>()
                .ok()
                .filter(|rank| (1..=13).contains(rank))
                .ok_or(ParseCardError::UnknownRank)?,
        };

        Ok(Self::new(suit, rank))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
