//! Card-name to rank lookup.

use crate::error::CardError;

/// Rank of the sentinel blank card.
pub const BLANK_RANK: u8 = 0;

/// Returns the rank for a card name, or `None` if the name is unknown.
///
/// Numeric names `"2"` through `"10"` rank as their value, faces rank
/// `J` = 11, `Q` = 12, `K` = 13, `A` = 14, and `"blank"` ranks 0.
///
/// ```
/// assert_eq!(foldem::rank_of("Q"), Some(12));
/// assert_eq!(foldem::rank_of("1"), None);
/// ```
#[must_use]
pub const fn rank_of(name: &str) -> Option<u8> {
    match name.as_bytes() {
        b"blank" => Some(BLANK_RANK),
        b"2" => Some(2),
        b"3" => Some(3),
        b"4" => Some(4),
        b"5" => Some(5),
        b"6" => Some(6),
        b"7" => Some(7),
        b"8" => Some(8),
        b"9" => Some(9),
        b"10" => Some(10),
        b"J" => Some(11),
        b"Q" => Some(12),
        b"K" => Some(13),
        b"A" => Some(14),
        _ => None,
    }
}

/// Looks up the rank for a card name.
///
/// # Errors
///
/// Returns [`CardError::UnknownRank`] if the name is not one of
/// `2`..=`10`, `J`, `Q`, `K`, `A` or `blank`.
pub const fn lookup_rank(name: &str) -> Result<u8, CardError> {
    match rank_of(name) {
        Some(rank) => Ok(rank),
        None => Err(CardError::UnknownRank),
    }
}
