//! Suits and their generated cards.
//!
//! Each suit owns a block of the Unicode Playing Cards range. Its cards are
//! computed at compile time from the block base and [`CODEPOINT_OFFSETS`].

use core::fmt;

use crate::card::{BLANK, Card, Glyphs};

/// Number of cards generated per suit.
pub const CARDS_PER_SUIT: usize = 13;

/// Card names in generation order with their offset from the suit base.
///
/// Numeric cards sit at their own value. Faces skip the Knight glyph
/// (`0xC`), and the Ace lives at `0x1`.
pub const CODEPOINT_OFFSETS: [(&str, u32); CARDS_PER_SUIT] = [
    ("2", 0x2),
    ("3", 0x3),
    ("4", 0x4),
    ("5", 0x5),
    ("6", 0x6),
    ("7", 0x7),
    ("8", 0x8),
    ("9", 0x9),
    ("10", 0xA),
    ("J", 0xB),
    ("Q", 0xD),
    ("K", 0xE),
    ("A", 0x1),
];

static SPADES: [Card; CARDS_PER_SUIT] = generate(Suit::Spades);
static HEARTS: [Card; CARDS_PER_SUIT] = generate(Suit::Hearts);
static DIAMONDS: [Card; CARDS_PER_SUIT] = generate(Suit::Diamonds);
static CLUBS: [Card; CARDS_PER_SUIT] = generate(Suit::Clubs);

const fn generate(suit: Suit) -> [Card; CARDS_PER_SUIT] {
    let mut cards = [BLANK; CARDS_PER_SUIT];
    let mut i = 0;
    while i < CARDS_PER_SUIT {
        let (name, offset) = CODEPOINT_OFFSETS[i];
        let symbol = match char::from_u32(suit.codepoint_base() + offset) {
            Some(symbol) => symbol,
            None => panic!("card codepoint is not a Unicode scalar value"),
        };
        cards[i] = Card::generated(name, suit, symbol);
        i += 1;
    }
    cards
}

/// Card suit.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits, in deck order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// The suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
        }
    }

    /// The uppercase first letter of the name.
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Self::Spades => 'S',
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
        }
    }

    /// The suit glyph.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
        }
    }

    /// Start of this suit's block in the Playing Cards range.
    #[must_use]
    pub const fn codepoint_base(self) -> u32 {
        match self {
            Self::Spades => 0x1F0A0,
            Self::Hearts => 0x1F0B0,
            Self::Diamonds => 0x1F0C0,
            Self::Clubs => 0x1F0D0,
        }
    }

    /// The 13 cards of this suit, from 2 up to Ace.
    #[must_use]
    pub const fn cards(self) -> &'static [Card; CARDS_PER_SUIT] {
        match self {
            Self::Spades => &SPADES,
            Self::Hearts => &HEARTS,
            Self::Diamonds => &DIAMONDS,
            Self::Clubs => &CLUBS,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Debug for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Suit")
            .field("name", &self.name())
            .field("symbol", &self.symbol())
            .field("cards", &Glyphs(self.cards()))
            .finish()
    }
}
