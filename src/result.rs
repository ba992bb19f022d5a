//! Records returned by successful match operations.

use crate::card::Card;
use crate::game::state::Side;
use crate::pile::PileId;

/// An accepted play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Play {
    /// Who played.
    pub side: Side,
    /// Hand slot the card came from (now empty).
    pub slot: usize,
    /// Pile the card went on.
    pub pile: PileId,
    /// The card played.
    pub card: Card,
    /// The previous top card, now discarded.
    pub covered: Option<Card>,
}

/// A reseed of both center piles from the shared stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PileReset {
    /// New top of the left pile.
    pub left: Card,
    /// New top of the right pile.
    pub right: Card,
    /// Cards left in the shared stock afterwards.
    pub remaining: usize,
}
