//! The shuffled deck and its deal lifecycle.

use core::fmt;

use alloc::vec::Vec;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Glyphs};
use crate::error::DealError;
use crate::suit::Suit;

/// A shuffled 52-card deck.
///
/// Every card is either undealt or dealt. [`Deck::deal`] moves one card from
/// the end of the undealt pool to the end of the dealt pile; nothing moves
/// back. Drop the deck when done with it.
#[derive(Clone)]
pub struct Deck {
    undealt: Vec<Card>,
    dealt: Vec<Card>,
}

impl Deck {
    /// Creates a deck shuffled with the thread-local random source.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(&mut rand::rng())
    }

    /// Creates a deck shuffled with the given random source.
    ///
    /// Every permutation of the 52 cards is equally likely.
    #[must_use]
    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut undealt = Self::create_cards();
        undealt.shuffle(rng);

        Self {
            undealt,
            dealt: Vec::with_capacity(DECK_SIZE),
        }
    }

    /// Creates a reproducible deck from a seed.
    ///
    /// # Example
    ///
    /// ```
    /// use foldem::Deck;
    ///
    /// let a = Deck::from_seed(7);
    /// let b = Deck::from_seed(7);
    /// assert_eq!(a.undealt()[0].symbol(), b.undealt()[0].symbol());
    /// ```
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(&mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Collects the cards of every suit, unshuffled.
    fn create_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            cards.extend_from_slice(suit.cards());
        }
        cards
    }

    /// Deals the last undealt card and records it as dealt.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::Exhausted`] once all 52 cards have been dealt.
    /// The deck is left unchanged in that case.
    pub fn deal(&mut self) -> Result<Card, DealError> {
        let card = self.undealt.pop().ok_or(DealError::Exhausted)?;
        self.dealt.push(card);
        Ok(card)
    }

    /// Cards not yet dealt. The next [`Deck::deal`] returns the last one.
    #[must_use]
    pub fn undealt(&self) -> &[Card] {
        &self.undealt
    }

    /// Cards dealt so far, in deal order.
    #[must_use]
    pub fn dealt(&self) -> &[Card] {
        &self.dealt
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.undealt.len()
    }

    /// Returns the number of dealt cards.
    #[must_use]
    pub fn dealt_count(&self) -> usize {
        self.dealt.len()
    }

    /// Returns `true` when there is nothing left to deal.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.undealt.is_empty()
    }
}

#[cfg(feature = "std")]
impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dealt={} undealt={}",
            Glyphs(&self.dealt),
            Glyphs(&self.undealt)
        )
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deck")
            .field("dealt", &Glyphs(&self.dealt))
            .field("undealt", &Glyphs(&self.undealt))
            .finish()
    }
}
