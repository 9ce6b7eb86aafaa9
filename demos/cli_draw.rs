//! Interactive card-drawing example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use deckrs::{Card, Deck, Suit};

fn main() {
    println!("Deck of cards (Enter = draw, 'r' = reshuffle, 'q' = quit)");
    println!("You cannot draw the same card again until you reshuffle.");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or_else(time_seed);

    let mut deck = Deck::new(seed);

    loop {
        if deck.remaining() == 0 {
            println!("Deck is empty. Press 'r' to reshuffle or 'q' to quit.");
        } else {
            println!(
                "Cards remaining: {}  (drawn: {})",
                deck.remaining(),
                deck.drawn_count()
            );
        }

        match prompt_line("> ").as_str() {
            "q" | "quit" => {
                println!("Goodbye.");
                break;
            }
            "r" | "reshuffle" => {
                deck.reset();
                println!("Deck reshuffled.");
            }
            // Enter alone draws a card.
            "" => match deck.draw() {
                Some(card) => println!("You drew the {}", format_card(card)),
                None => println!("No cards to draw. Press 'r' to reshuffle or 'q' to quit."),
            },
            _ => println!("Unknown command. Use Enter to draw, 'r' to reshuffle, 'q' to quit."),
        }
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn format_card(card: Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
