use tracing::{debug, trace};

use crate::card::Card;
use crate::error::{DrawError, PlayError};
use crate::pile::PileId;
use crate::result::Play;
use crate::rules::can_play;

use super::{Match, MatchStatus, Session, Side};

impl Session<'_> {
    pub(crate) fn play(&mut self, side: Side, slot: usize, pile: PileId) -> Result<Play, PlayError> {
        if self.status() != MatchStatus::InProgress {
            return Err(PlayError::MatchOver);
        }

        let table = &mut *self.table;
        let card = table
            .hand(side)
            .slot(slot)
            .ok_or(PlayError::SlotOutOfRange)?
            .card()
            .ok_or(PlayError::EmptySlot)?;

        if !can_play(card.rank, table.piles.get(pile)) {
            return Err(PlayError::IllegalRank);
        }

        if let Some(source) = table.hand_mut(side).slot_mut(slot) {
            source.take();
        }

        let covered = table.piles.replace(pile, card);
        if let Some(covered) = covered {
            table.discard.push(covered);
        }

        Ok(Play {
            side,
            slot,
            pile,
            card,
            covered,
        })
    }

    pub(crate) fn draw(&mut self, side: Side) -> Result<(usize, Card), DrawError> {
        if self.status() != MatchStatus::InProgress {
            return Err(DrawError::MatchOver);
        }

        if self.table.stock(side).is_empty() {
            return Err(DrawError::NoCardsLeft);
        }

        self.table.refill(side).ok_or(DrawError::HandFull)
    }
}

impl Match {
    /// Plays the card in `slot` of `side`'s hand onto `pile`.
    ///
    /// On success the card becomes the pile's top, the covered card is
    /// discarded, the slot is left empty, and the match is checked for a
    /// finish.
    ///
    /// # Errors
    ///
    /// Returns an error if the match is not in progress, the slot index is
    /// out of range, the slot is empty, or the card is not one rank away from
    /// the pile's top card. Nothing changes on error.
    pub fn attempt_play(&self, side: Side, slot: usize, pile: PileId) -> Result<Play, PlayError> {
        let mut session = self.session();
        let result = session.play(side, slot, pile);

        let transition = match &result {
            Ok(play) => {
                debug!(
                    ?side,
                    slot,
                    %pile,
                    card = %play.card,
                    "card played"
                );
                session.evaluate()
            }
            Err(err) => {
                trace!(?side, slot, %pile, %err, "play rejected");
                None
            }
        };
        drop(session);

        if let Some(status) = transition {
            self.notify(status);
        }
        result
    }

    /// Moves the next card of `side`'s stock into its leftmost empty slot.
    ///
    /// Drawing does not check for a finish; call
    /// [`Match::evaluate_terminal`] afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the match is not in progress, the side's stock is
    /// empty, or every slot is already occupied.
    pub fn draw_card(&self, side: Side) -> Result<Card, DrawError> {
        let mut session = self.session();
        match session.draw(side) {
            Ok((slot, card)) => {
                debug!(
                    ?side,
                    slot,
                    card = %card,
                    stock = session.table.stock(side).len(),
                    "card drawn"
                );
                Ok(card)
            }
            Err(err) => {
                trace!(?side, %err, "draw refused");
                Err(err)
            }
        }
    }
}
