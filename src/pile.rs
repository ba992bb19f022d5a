//! The two center piles.

use core::fmt;

use crate::card::Card;

/// Identifies a center pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PileId {
    /// Left pile.
    Left,
    /// Right pile.
    Right,
}

impl PileId {
    /// Both piles, left first.
    pub const ALL: [Self; 2] = [Self::Left, Self::Right];

    const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

impl fmt::Display for PileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// Top cards of the two center piles. Only the top is tracked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CenterPiles {
    tops: [Option<Card>; 2],
}

impl CenterPiles {
    /// Creates piles with the given tops.
    #[must_use]
    pub const fn new(left: Option<Card>, right: Option<Card>) -> Self {
        Self {
            tops: [left, right],
        }
    }

    /// Returns the top card of `pile`.
    #[must_use]
    pub const fn get(&self, pile: PileId) -> Option<Card> {
        self.tops[pile.index()]
    }

    /// Puts `card` on `pile`, returning the card it covers.
    pub const fn replace(&mut self, pile: PileId, card: Card) -> Option<Card> {
        self.tops[pile.index()].replace(card)
    }

    /// Replaces both tops, returning the covered cards left first.
    pub const fn reseed(&mut self, left: Card, right: Card) -> [Option<Card>; 2] {
        let covered = self.tops;
        self.tops = [Some(left), Some(right)];
        covered
    }

    /// Iterates over `(pile, top)`, left first.
    pub fn iter(&self) -> impl Iterator<Item = (PileId, Option<Card>)> + '_ {
        PileId::ALL.into_iter().map(|pile| (pile, self.get(pile)))
    }
}
