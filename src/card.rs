//! Card values and the blank sentinel.

use core::cmp::Ordering;
use core::fmt;

use crate::error::CardError;
use crate::rank::{BLANK_RANK, rank_of};
use crate::suit::Suit;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// The face-down card, used to represent an absent card.
///
/// It has no suit, ranks 0 and renders as the card back glyph `🂠`.
pub const BLANK: Card = Card {
    name: "blank",
    suit: None,
    symbol: '\u{1F0A0}',
    rank: BLANK_RANK,
};

/// A playing card.
///
/// Cards compare by rank alone. A `7♠` and a `7♥` are equal, and neither
/// is less than the other; games that need suit tie-breaks must compare
/// [`Card::suit`] themselves. For the same reason `Card` is not `Hash`.
#[derive(Clone, Copy)]
pub struct Card {
    name: &'static str,
    suit: Option<Suit>,
    symbol: char,
    rank: u8,
}

impl Card {
    /// Creates a card, deriving its rank from `name`.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::UnknownRank`] if `name` is not in the rank table.
    ///
    /// # Example
    ///
    /// ```
    /// use foldem::{Card, Suit};
    ///
    /// let king = Card::new("K", Some(Suit::Hearts), '\u{1F0BE}').unwrap();
    /// assert_eq!(king.rank(), 13);
    /// ```
    pub const fn new(
        name: &'static str,
        suit: Option<Suit>,
        symbol: char,
    ) -> Result<Self, CardError> {
        match rank_of(name) {
            Some(rank) => Ok(Self {
                name,
                suit,
                symbol,
                rank,
            }),
            None => Err(CardError::UnknownRank),
        }
    }

    /// Builds a card from the suit generation table.
    ///
    /// Only called during const evaluation, so an unknown name fails the build.
    pub(crate) const fn generated(name: &'static str, suit: Suit, symbol: char) -> Self {
        match Self::new(name, Some(suit), symbol) {
            Ok(card) => card,
            Err(_) => panic!("generated card name is missing from the rank table"),
        }
    }

    /// The card name (`"2"`..`"10"`, `"J"`, `"Q"`, `"K"`, `"A"` or `"blank"`).
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The owning suit. `None` only for [`BLANK`].
    #[must_use]
    pub const fn suit(&self) -> Option<Suit> {
        self.suit
    }

    /// The display glyph.
    #[must_use]
    pub const fn symbol(&self) -> char {
        self.symbol
    }

    /// The rank (2-14, or 0 for the blank card).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns `true` for the blank sentinel.
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.suit.is_none() && self.rank == BLANK.rank
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Card {}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Card")
            .field("name", &self.name)
            .field("suit", &self.suit.map(Suit::symbol))
            .field("symbol", &self.symbol)
            .finish()
    }
}

/// Comma-separated card glyphs.
pub(crate) struct Glyphs<'a>(pub(crate) &'a [Card]);

impl fmt::Display for Glyphs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cards = self.0.iter();
        if let Some(first) = cards.next() {
            write!(f, "{first}")?;
        }
        for card in cards {
            write!(f, ",{card}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Glyphs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}
