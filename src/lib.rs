//! Playing cards with Unicode glyphs and a shuffled 52-card deck, with
//! optional `no_std` support.
//!
//! Cards are generated at compile time per [`Suit`] from the Unicode Playing
//! Cards block and compare by rank alone. A [`Deck`] shuffles all 52 of them
//! and deals one at a time.
//!
//! # Example
//!
//! ```
//! use foldem::{DealError, Deck};
//!
//! let mut deck = Deck::from_seed(42);
//! let card = deck.deal().unwrap();
//! assert_eq!(deck.dealt(), &[card]);
//! assert_eq!(deck.remaining(), 51);
//!
//! while deck.deal().is_ok() {}
//! assert_eq!(deck.deal(), Err(DealError::Exhausted));
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
pub mod rank;
pub mod suit;

// Re-export main types
pub use card::{BLANK, Card, DECK_SIZE};
pub use deck::Deck;
pub use error::{CardError, DealError};
pub use rank::{BLANK_RANK, lookup_rank, rank_of};
pub use suit::{CARDS_PER_SUIT, CODEPOINT_OFFSETS, Suit};
