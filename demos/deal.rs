//! CLI dealing example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use foldem::{BLANK, Card, Deck, Suit};

const HAND_SIZE: usize = 5;

fn main() {
    println!("Card dealing example (press Enter to deal, 'q' to quit)");

    for suit in Suit::ALL {
        let glyphs: String = suit.cards().iter().map(Card::symbol).collect();
        println!("{} {suit} {glyphs}", suit.initial());
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut deck = Deck::from_seed(seed);
    let mut hand = [BLANK; HAND_SIZE];
    let mut slot = 0;

    loop {
        print_hand(&hand, deck.remaining());

        if matches!(prompt_line("> ").as_str(), "q" | "quit") {
            break;
        }

        match deck.deal() {
            Ok(card) => {
                println!(
                    "Dealt {card} ({} of {})",
                    card.name(),
                    card.suit().map_or("none", Suit::name)
                );
                hand[slot] = card;
                slot += 1;
            }
            Err(err) => {
                println!("Deal error: {err}");
                break;
            }
        }

        if slot == HAND_SIZE {
            let mut sorted = hand;
            sorted.sort();
            let high = sorted[HAND_SIZE - 1];
            print_hand(&sorted, deck.remaining());
            println!("High card: {high} (rank {})", high.rank());
            hand = [BLANK; HAND_SIZE];
            slot = 0;
        }
    }

    println!("{deck}");
}

fn print_hand(hand: &[Card], remaining: usize) {
    let glyphs: Vec<String> = hand.iter().map(ToString::to_string).collect();
    println!("Hand: {}  ({remaining} cards left)", glyphs.join(" "));
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
