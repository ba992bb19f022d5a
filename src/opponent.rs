//! Computer opponent.
//!
//! A policy only decides; [`OpponentPolicy::tick`] applies the decision to
//! the match in one locked step and then checks for a finish. Something
//! outside the engine (see [`crate::Scheduler`]) calls `tick` at the cadence
//! given by [`crate::SpeedLevel::tick_interval`].

use core::time::Duration;

use tracing::{debug, trace};

use crate::card::Card;
use crate::error::{DrawError, PlayError};
use crate::game::{Match, MatchSnapshot, MatchStatus, Side, TickTicket};
use crate::pile::PileId;
use crate::result::Play;
use crate::rules::can_play;

/// What the opponent wants to do this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Play the card in `slot` onto `pile`.
    Play {
        /// Opponent hand slot.
        slot: usize,
        /// Target pile.
        pile: PileId,
    },
    /// Draw into an empty slot.
    Draw,
    /// Do nothing this tick.
    Wait,
}

/// What a tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A card was played. The slot should be refilled via
    /// [`finish_draw`] once `draw_after` has elapsed.
    Played {
        /// The accepted play.
        play: Play,
        /// Delay before the follow-up draw.
        draw_after: Duration,
    },
    /// A card was drawn into `slot`.
    Drew {
        /// Slot that was filled.
        slot: usize,
        /// Card drawn.
        card: Card,
    },
    /// Nothing to do.
    Idle,
    /// The policy asked for an illegal play; nothing changed.
    Rejected(PlayError),
    /// The ticket belongs to an earlier match; nothing changed.
    Stale,
    /// The match is over (possibly because of this tick).
    Finished(MatchStatus),
}

/// Chooses the opponent's moves.
pub trait OpponentPolicy {
    /// Picks a move for the opponent from a snapshot of the table.
    fn choose(&self, view: &MatchSnapshot) -> Decision;

    /// Runs one opponent turn against `game`.
    ///
    /// Returns [`TickOutcome::Stale`] without touching anything if `ticket`
    /// was issued for an earlier match.
    fn tick(&self, game: &Match, ticket: TickTicket) -> TickOutcome {
        let mut session = game.session();
        if !session.is_current(ticket) {
            trace!(generation = ticket.generation(), "stale opponent tick");
            return TickOutcome::Stale;
        }
        if session.status() != MatchStatus::InProgress {
            return TickOutcome::Finished(session.status());
        }

        let decision = self.choose(&session.snapshot());
        debug!(?decision, "opponent decision");

        let outcome = match decision {
            Decision::Play { slot, pile } => match session.play(Side::Opponent, slot, pile) {
                Ok(play) => TickOutcome::Played {
                    play,
                    draw_after: game.options().opponent_draw_delay,
                },
                Err(err) => TickOutcome::Rejected(err),
            },
            Decision::Draw => match session.draw(Side::Opponent) {
                Ok((slot, card)) => TickOutcome::Drew { slot, card },
                Err(_) => TickOutcome::Idle,
            },
            Decision::Wait => TickOutcome::Idle,
        };

        let transition = session.evaluate();
        drop(session);

        if let Some(status) = transition {
            game.notify(status);
            return TickOutcome::Finished(status);
        }
        outcome
    }
}

/// Performs the opponent's delayed refill after a [`TickOutcome::Played`].
///
/// Protected by `ticket` the same way as a tick.
pub fn finish_draw(game: &Match, ticket: TickTicket) -> TickOutcome {
    let mut session = game.session();
    if !session.is_current(ticket) {
        trace!(generation = ticket.generation(), "stale opponent draw");
        return TickOutcome::Stale;
    }

    let outcome = match session.draw(Side::Opponent) {
        Ok((slot, card)) => {
            debug!(slot, "opponent drew");
            TickOutcome::Drew { slot, card }
        }
        Err(DrawError::MatchOver) => return TickOutcome::Finished(session.status()),
        Err(DrawError::NoCardsLeft | DrawError::HandFull) => TickOutcome::Idle,
    };

    let transition = session.evaluate();
    drop(session);

    if let Some(status) = transition {
        game.notify(status);
        return TickOutcome::Finished(status);
    }
    outcome
}

/// Plays the leftmost card that fits a pile, trying the left pile first.
///
/// With nothing playable it draws only when the hand is completely empty,
/// and otherwise waits for the piles to change.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyOpponent;

impl OpponentPolicy for GreedyOpponent {
    fn choose(&self, view: &MatchSnapshot) -> Decision {
        let hand = view.hand(Side::Opponent);

        for (slot, card) in hand.occupied() {
            for pile in PileId::ALL {
                if can_play(card.rank, view.pile(pile)) {
                    return Decision::Play { slot, pile };
                }
            }
        }

        if hand.is_empty() {
            Decision::Draw
        } else {
            Decision::Wait
        }
    }
}
