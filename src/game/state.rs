//! Match state types.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::{Deal, Deck};
use crate::hand::{HAND_SIZE, Hand, Slot};
use crate::pile::{CenterPiles, PileId};

/// Match status. Every status other than `InProgress` and `NotStarted` is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    /// No match has been started yet.
    NotStarted,
    /// Cards are being played.
    InProgress,
    /// The opponent ran out of cards in hand and stock (or both sides did at once).
    PlayerWon,
    /// The player ran out of cards in hand and stock.
    OpponentWon,
    /// Nobody can move and the piles cannot be reseeded.
    Tie,
}

impl MatchStatus {
    /// Returns whether the match has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::PlayerWon | Self::OpponentWon | Self::Tie)
    }
}

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The human player.
    Player,
    /// The computer opponent.
    Opponent,
}

impl Side {
    /// Returns the other side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Player => Self::Opponent,
            Self::Opponent => Self::Player,
        }
    }

    /// Whether this side's cards are dealt face-up.
    #[must_use]
    pub const fn deals_face_up(self) -> bool {
        matches!(self, Self::Player)
    }
}

/// Everything on the table for one match.
///
/// Fields are public so that tests and replays can stack a position; the
/// match engine guards this behind its lock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// The player's hand.
    pub player_hand: Hand,
    /// The opponent's hand.
    pub opponent_hand: Hand,
    /// The player's personal draw stock. The last card is drawn next.
    pub player_stock: Vec<Card>,
    /// The opponent's personal draw stock.
    pub opponent_stock: Vec<Card>,
    /// Center piles.
    pub piles: CenterPiles,
    /// Shared stock used only to reseed the piles.
    pub shared: Deck,
    /// Cards covered on the piles.
    pub discard: Vec<Card>,
}

impl Table {
    /// Lays out a fresh deal: five slots filled from each stock, the
    /// remaining stock kept for drawing.
    #[must_use]
    pub fn from_deal(deal: Deal) -> Self {
        let mut table = Self {
            player_stock: deal.player,
            opponent_stock: deal.opponent,
            piles: CenterPiles::new(deal.center[0], deal.center[1]),
            shared: deal.remaining,
            ..Self::default()
        };

        for side in [Side::Player, Side::Opponent] {
            for _ in 0..HAND_SIZE {
                table.refill(side);
            }
        }

        table
    }

    /// Returns a side's hand.
    #[must_use]
    pub const fn hand(&self, side: Side) -> &Hand {
        match side {
            Side::Player => &self.player_hand,
            Side::Opponent => &self.opponent_hand,
        }
    }

    /// Returns a side's hand mutably.
    pub const fn hand_mut(&mut self, side: Side) -> &mut Hand {
        match side {
            Side::Player => &mut self.player_hand,
            Side::Opponent => &mut self.opponent_hand,
        }
    }

    /// Returns a side's personal stock.
    #[must_use]
    pub fn stock(&self, side: Side) -> &[Card] {
        match side {
            Side::Player => &self.player_stock,
            Side::Opponent => &self.opponent_stock,
        }
    }

    const fn stock_mut(&mut self, side: Side) -> &mut Vec<Card> {
        match side {
            Side::Player => &mut self.player_stock,
            Side::Opponent => &mut self.opponent_stock,
        }
    }

    /// Moves the next stock card into the leftmost empty slot.
    ///
    /// Returns the slot index and card, or `None` if the hand is full or the
    /// stock is empty. Nothing moves in either case.
    pub fn refill(&mut self, side: Side) -> Option<(usize, Card)> {
        let index = self.hand(side).first_empty()?;
        let card = self.stock_mut(side).pop()?;
        let slot = self.hand_mut(side).slot_mut(index)?;
        slot.fill(card, side.deals_face_up());
        Some((index, card))
    }

    /// Whether a side still holds any card in hand or stock.
    #[must_use]
    pub fn has_cards(&self, side: Side) -> bool {
        !self.hand(side).is_empty() || !self.stock(side).is_empty()
    }

    /// Every card currently accounted for, in no particular order.
    #[must_use]
    pub fn census(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(crate::card::DECK_SIZE);
        for side in [Side::Player, Side::Opponent] {
            cards.extend(self.hand(side).occupied().map(|(_, card)| card));
            cards.extend_from_slice(self.stock(side));
        }
        cards.extend(PileId::ALL.iter().filter_map(|&pile| self.piles.get(pile)));
        cards.extend_from_slice(self.shared.cards());
        cards.extend_from_slice(&self.discard);
        cards
    }

    /// Replaces a side's hand with the given cards, left to right.
    ///
    /// Slots beyond `cards` are left empty.
    pub fn set_hand(&mut self, side: Side, cards: &[Option<Card>]) {
        let face_up = side.deals_face_up();
        let mut hand = Hand::new();
        for (index, card) in cards.iter().enumerate().take(HAND_SIZE) {
            if let (Some(card), Some(slot)) = (card, hand.slot_mut(index)) {
                *slot = Slot::with_card(*card, face_up);
            }
        }
        *self.hand_mut(side) = hand;
    }

    /// Replaces a side's stock. The first card in `draws` is drawn first.
    pub fn set_stock(&mut self, side: Side, draws: &[Card]) {
        let stock = self.stock_mut(side);
        stock.clear();
        stock.extend(draws.iter().rev().copied());
    }

    /// Replaces the shared stock. The first card in `draws` is popped first.
    pub fn set_shared(&mut self, draws: &[Card]) {
        let mut cards = draws.to_vec();
        cards.reverse();
        self.shared = Deck::from_cards(cards);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sides_pair_up_and_deal_faces() {
        assert_eq!(Side::Player.other(), Side::Opponent);
        assert_eq!(Side::Opponent.other(), Side::Player);
        assert!(Side::Player.deals_face_up());
        assert!(!Side::Player.other().deals_face_up());
    }
}
