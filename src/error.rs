//! Error types for card construction and dealing.

use thiserror::Error;

/// Errors that can occur when constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The card name is not in the rank table.
    #[error("card name is not in the rank table")]
    UnknownRank,
}

/// Errors that can occur when dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Every card has already been dealt.
    #[error("no undealt cards left in the deck")]
    Exhausted,
}
