//! Error types for match operations.
//!
//! None of these are fatal: a rejected intent leaves the match untouched.

use thiserror::Error;

/// Errors that can occur when playing a hand card onto a center pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The slot index is outside the hand.
    #[error("slot index out of range")]
    SlotOutOfRange,
    /// The slot holds no card.
    #[error("slot is empty")]
    EmptySlot,
    /// The card is not one rank away from the pile's top card.
    #[error("card rank is not adjacent to the pile")]
    IllegalRank,
    /// The match has already ended or has not started.
    #[error("match is not in progress")]
    MatchOver,
}

/// Errors that can occur when drawing into a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The side's personal stock is exhausted.
    #[error("no cards left in the stock")]
    NoCardsLeft,
    /// Every slot already holds a card.
    #[error("hand is full")]
    HandFull,
    /// The match has already ended or has not started.
    #[error("match is not in progress")]
    MatchOver,
}

/// Reasons a pile reset does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResetError {
    /// At least one side still has a legal play.
    #[error("a legal move is still available")]
    MovesAvailable,
    /// Fewer than two cards remain in the shared stock.
    #[error("not enough cards to reseed the piles")]
    NotEnoughCards,
    /// The match has already ended or has not started.
    #[error("match is not in progress")]
    MatchOver,
}
