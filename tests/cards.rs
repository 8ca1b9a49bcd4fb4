//! Rank table, card and suit tests.

use std::collections::HashSet;

use foldem::{
    BLANK, CARDS_PER_SUIT, CODEPOINT_OFFSETS, Card, CardError, Suit, lookup_rank, rank_of,
};

fn card(suit: Suit, name: &str) -> Card {
    *suit
        .cards()
        .iter()
        .find(|card| card.name() == name)
        .unwrap()
}

#[test]
fn rank_table_covers_every_name() {
    let expected = [
        ("blank", 0),
        ("2", 2),
        ("3", 3),
        ("4", 4),
        ("5", 5),
        ("6", 6),
        ("7", 7),
        ("8", 8),
        ("9", 9),
        ("10", 10),
        ("J", 11),
        ("Q", 12),
        ("K", 13),
        ("A", 14),
    ];
    for (name, rank) in expected {
        assert_eq!(rank_of(name), Some(rank), "{name}");
        assert_eq!(lookup_rank(name), Ok(rank), "{name}");
    }
}

#[test]
fn unknown_names_fail_lookup() {
    for name in ["", "1", "11", "j", "Ace", "Blank", " A", "Knight"] {
        assert_eq!(rank_of(name), None, "{name:?}");
        assert_eq!(lookup_rank(name), Err(CardError::UnknownRank), "{name:?}");
    }
}

#[test]
fn card_new_derives_rank() {
    let queen = Card::new("Q", Some(Suit::Diamonds), '\u{1F0CD}').unwrap();
    assert_eq!(queen.rank(), 12);
    assert_eq!(queen.name(), "Q");
    assert_eq!(queen.suit(), Some(Suit::Diamonds));
    assert_eq!(queen.symbol(), '🃍');
    assert!(!queen.is_blank());

    assert_eq!(
        Card::new("Z", Some(Suit::Clubs), 'Z').unwrap_err(),
        CardError::UnknownRank
    );
}

#[test]
fn every_suit_generates_thirteen_distinct_cards() {
    for suit in Suit::ALL {
        let cards = suit.cards();
        assert_eq!(cards.len(), CARDS_PER_SUIT);

        let symbols: HashSet<char> = cards.iter().map(Card::symbol).collect();
        assert_eq!(symbols.len(), CARDS_PER_SUIT, "{suit:?}");

        let mut ranks: Vec<u8> = cards.iter().map(Card::rank).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, (2..=14).collect::<Vec<u8>>(), "{suit:?}");

        assert!(cards.iter().all(|card| card.suit() == Some(suit)));
    }
}

#[test]
fn suits_do_not_share_glyphs() {
    let symbols: HashSet<char> = Suit::ALL
        .iter()
        .flat_map(|suit| suit.cards().iter().map(Card::symbol))
        .collect();
    assert_eq!(symbols.len(), 52);
}

#[test]
fn glyphs_follow_codepoint_offsets() {
    for suit in Suit::ALL {
        for (card, (name, offset)) in suit.cards().iter().zip(CODEPOINT_OFFSETS) {
            assert_eq!(card.name(), name);
            assert_eq!(u32::from(card.symbol()), suit.codepoint_base() + offset);
        }
    }

    assert_eq!(card(Suit::Spades, "A").symbol(), '\u{1F0A1}');
    assert_eq!(card(Suit::Hearts, "10").symbol(), '\u{1F0BA}');
    assert_eq!(card(Suit::Diamonds, "Q").symbol(), '\u{1F0CD}');
    assert_eq!(card(Suit::Clubs, "K").symbol(), '\u{1F0DE}');
    assert_eq!(card(Suit::Clubs, "J").symbol(), '\u{1F0DB}');
}

#[test]
fn suit_metadata() {
    let names: Vec<&str> = Suit::ALL.iter().map(|suit| suit.name()).collect();
    assert_eq!(names, ["Spades", "Hearts", "Diamonds", "Clubs"]);

    let initials: String = Suit::ALL.iter().map(|suit| suit.initial()).collect();
    assert_eq!(initials, "SHDC");

    let symbols: String = Suit::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(symbols, "♠♥♦♣");

    for suit in Suit::ALL {
        assert!(suit.name().starts_with(suit.initial()));
    }
}

// Equality ignores suit on purpose: pin it so nobody "fixes" it silently.
#[test]
fn equal_rank_cards_are_equal_across_suits() {
    let seven_spades = card(Suit::Spades, "7");
    let seven_hearts = card(Suit::Hearts, "7");

    assert_eq!(seven_spades, seven_hearts);
    assert!(seven_spades <= seven_hearts);
    assert!(seven_spades >= seven_hearts);
    assert!(!(seven_spades < seven_hearts));
    assert!(!(seven_hearts < seven_spades));
    assert_ne!(seven_spades.suit(), seven_hearts.suit());
    assert_ne!(seven_spades.symbol(), seven_hearts.symbol());
}

#[test]
fn ordering_follows_rank() {
    let all: Vec<Card> = Suit::ALL
        .iter()
        .flat_map(|suit| suit.cards().iter().copied())
        .collect();

    for a in &all {
        for b in &all {
            assert_eq!(a.cmp(b), a.rank().cmp(&b.rank()));
            assert_eq!(a == b, a.rank() == b.rank());
            assert_eq!(a != b, a.rank() != b.rank());
            assert_eq!(a > b, a.rank() > b.rank());
        }
    }

    assert!(card(Suit::Clubs, "2") < card(Suit::Spades, "3"));
    assert!(card(Suit::Hearts, "10") < card(Suit::Hearts, "J"));
    assert!(card(Suit::Diamonds, "K") < card(Suit::Clubs, "A"));
    assert_eq!(all.iter().max().unwrap().rank(), 14);
}

#[test]
fn blank_is_below_every_card() {
    assert_eq!(BLANK.rank(), 0);
    assert_eq!(BLANK.name(), "blank");
    assert_eq!(BLANK.suit(), None);
    assert_eq!(BLANK.symbol(), '🂠');
    assert!(BLANK.is_blank());

    for suit in Suit::ALL {
        for card in suit.cards() {
            assert!(BLANK < *card);
            assert!(!card.is_blank());
        }
    }

    let built = Card::new("blank", None, '\u{1F0A0}').unwrap();
    assert_eq!(built, BLANK);
    assert!(built.is_blank());
}

#[test]
fn display_and_debug() {
    let ace = card(Suit::Spades, "A");
    assert_eq!(ace.to_string(), "🂡");
    assert_eq!(
        format!("{ace:?}"),
        "Card { name: \"A\", suit: Some('♠'), symbol: '🂡' }"
    );
    assert_eq!(
        format!("{BLANK:?}"),
        "Card { name: \"blank\", suit: None, symbol: '🂠' }"
    );

    assert_eq!(Suit::Hearts.to_string(), "♥");
    assert_eq!(
        format!("{:?}", Suit::Hearts),
        "Suit { name: \"Hearts\", symbol: '♥', cards: \"🂲,🂳,🂴,🂵,🂶,🂷,🂸,🂹,🂺,🂻,🂽,🂾,🂱\" }"
    );
}
