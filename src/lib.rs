//! A rules engine for the two-player Speed card game, with optional `no_std`
//! support.
//!
//! The crate provides a [`Match`] type that owns the deck, both hands, and
//! the two center piles, validates every play, and decides when the match is
//! won or tied. The computer opponent lives in [`opponent`] and is driven by
//! whatever timer the caller supplies.
//!
//! # Example
//!
//! ```
//! use speedrs::opponent::{GreedyOpponent, OpponentPolicy};
//! use speedrs::{Match, MatchOptions, MatchStatus, SpeedLevel};
//!
//! let game = Match::new(MatchOptions::default(), 42);
//! let snapshot = game.start(SpeedLevel::Easy);
//! assert_eq!(snapshot.status, MatchStatus::InProgress);
//!
//! let ticket = game.ticket();
//! let _ = GreedyOpponent.tick(&game, ticket);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod opponent;
pub mod options;
pub mod pile;
pub mod result;
pub mod rules;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS, Suit};
pub use deck::{Deal, Deck, STOCK_SIZE};
pub use error::{DrawError, PlayError, ResetError};
pub use game::{
    Match, MatchSnapshot, MatchStatus, Scheduler, Side, SubscriptionId, Table, TickTicket,
};
pub use hand::{HAND_SIZE, Hand, Slot};
pub use opponent::{Decision, GreedyOpponent, OpponentPolicy, TickOutcome};
pub use options::{MatchOptions, SpeedLevel};
pub use pile::{CenterPiles, PileId};
pub use result::{PileReset, Play};
