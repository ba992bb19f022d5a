use tracing::{debug, trace};

use crate::error::ResetError;
use crate::result::PileReset;
use crate::rules::has_any_move;

use super::{Match, MatchStatus, Session, Side};

impl Session<'_> {
    /// Whether either hand can play onto either pile.
    pub(crate) fn any_move(&self) -> bool {
        [Side::Player, Side::Opponent]
            .into_iter()
            .any(|side| has_any_move(self.table.hand(side), &self.table.piles))
    }

    fn reset_piles(&mut self) -> Result<PileReset, ResetError> {
        if self.status() != MatchStatus::InProgress {
            return Err(ResetError::MatchOver);
        }
        if self.any_move() {
            return Err(ResetError::MovesAvailable);
        }
        if self.table.shared.len() < 2 {
            return Err(ResetError::NotEnoughCards);
        }

        let table = &mut *self.table;
        let (Some(left), Some(right)) = (table.shared.pop_top(), table.shared.pop_top()) else {
            return Err(ResetError::NotEnoughCards);
        };

        let covered = table.piles.reseed(left, right);
        table.discard.extend(covered.into_iter().flatten());

        Ok(PileReset {
            left,
            right,
            remaining: table.shared.len(),
        })
    }
}

impl Match {
    /// Reseeds both center piles from the shared stock when nobody can move.
    ///
    /// The new tops are placed without any rank check. This is the "can't
    /// play" button: the match is not checked for a finish here.
    ///
    /// # Errors
    ///
    /// Returns an error (and changes nothing) if the match is not in
    /// progress, either side still has a legal play, or fewer than two cards
    /// remain in the shared stock.
    pub fn request_pile_reset(&self) -> Result<PileReset, ResetError> {
        let mut session = self.session();
        let result = session.reset_piles();
        match &result {
            Ok(reset) => debug!(
                left = %reset.left,
                right = %reset.right,
                remaining = reset.remaining,
                "piles reset"
            ),
            Err(err) => trace!(%err, "pile reset skipped"),
        }
        result
    }
}
