use tracing::info;

use super::{Match, MatchStatus, Session, Side};

impl Session<'_> {
    /// Works out whether the match has finished and records it.
    ///
    /// Returns the new status only when this call caused the transition.
    pub(crate) fn evaluate(&mut self) -> Option<MatchStatus> {
        if self.status() != MatchStatus::InProgress {
            return None;
        }

        let player_has_cards = self.table.has_cards(Side::Player);
        let opponent_has_cards = self.table.has_cards(Side::Opponent);

        // A double run-out goes to the player, never to a tie.
        let finished = match (player_has_cards, opponent_has_cards) {
            (false, true) => Some(MatchStatus::OpponentWon),
            (_, false) => Some(MatchStatus::PlayerWon),
            (true, true) if !self.any_move() && self.table.shared.is_empty() => {
                Some(MatchStatus::Tie)
            }
            (true, true) => None,
        }?;

        self.phase.status = finished;
        info!(
            status = ?finished,
            generation = self.phase.generation,
            player_stock = self.table.player_stock.len(),
            opponent_stock = self.table.opponent_stock.len(),
            "match finished"
        );
        Some(finished)
    }
}

impl Match {
    /// Checks whether the match has finished and returns the status.
    ///
    /// A side left with no cards in hand or stock hands the win to the other
    /// side. Otherwise, if no occupied slot on either side fits either pile
    /// and the shared stock is empty, the match is a tie. Once final, the
    /// status never changes again, so repeated calls agree.
    pub fn evaluate_terminal(&self) -> MatchStatus {
        let mut session = self.session();
        let transition = session.evaluate();
        let status = session.status();
        drop(session);

        if let Some(status) = transition {
            self.notify(status);
        }
        status
    }
}
