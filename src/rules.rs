//! Move legality.

use crate::card::{Card, RANKS};
use crate::hand::Hand;
use crate::pile::CenterPiles;

/// Returns whether two ranks are one apart, wrapping King back to Ace.
///
/// ```
/// use speedrs::rules::is_adjacent;
///
/// assert!(is_adjacent(1, 13));
/// assert!(is_adjacent(6, 5));
/// assert!(!is_adjacent(7, 7));
/// ```
#[must_use]
pub const fn is_adjacent(a: u8, b: u8) -> bool {
    let modulus = RANKS as i16;
    let diff = a as i16 - b as i16;
    diff.rem_euclid(modulus) == 1 || (-diff).rem_euclid(modulus) == 1
}

/// Returns whether a card of `rank` may be placed on `pile`.
///
/// A pile without a card accepts anything.
#[must_use]
pub const fn can_play(rank: u8, pile: Option<Card>) -> bool {
    match pile {
        Some(top) => is_adjacent(rank, top.rank),
        None => true,
    }
}

/// Returns whether any occupied slot in `hand` can go on either pile.
#[must_use]
pub fn has_any_move(hand: &Hand, piles: &CenterPiles) -> bool {
    hand.occupied()
        .any(|(_, card)| piles.iter().any(|(_, top)| can_play(card.rank, top)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_wraps_and_is_symmetric() {
        assert!(is_adjacent(1, 13));
        assert!(is_adjacent(13, 1));
        assert!(is_adjacent(1, 2));
        assert!(!is_adjacent(1, 3));
        assert!(!is_adjacent(7, 7));
        assert!(!is_adjacent(1, 12));

        for a in 1..=RANKS {
            for b in 1..=RANKS {
                assert_eq!(is_adjacent(a, b), is_adjacent(b, a));
            }
            let adjacent = (1..=RANKS).filter(|&b| is_adjacent(a, b)).count();
            assert_eq!(adjacent, 2, "rank {a}");
        }
    }
}
