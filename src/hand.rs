//! Hand slots.

use crate::card::Card;

/// Number of slots in each hand.
pub const HAND_SIZE: usize = 5;

/// A fixed hand position holding at most one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Slot {
    card: Option<Card>,
    face_up: bool,
}

impl Slot {
    /// Creates an occupied slot.
    #[must_use]
    pub const fn with_card(card: Card, face_up: bool) -> Self {
        Self {
            card: Some(card),
            face_up,
        }
    }

    /// Returns the card in the slot, face-up or not.
    #[must_use]
    pub const fn card(&self) -> Option<Card> {
        self.card
    }

    /// Returns the card only if it is showing.
    #[must_use]
    pub const fn visible_card(&self) -> Option<Card> {
        if self.face_up { self.card } else { None }
    }

    /// Returns whether the slot holds a card.
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        self.card.is_some()
    }

    /// Returns whether the card is face-up.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Turns the card face-up.
    pub const fn reveal(&mut self) {
        self.face_up = true;
    }

    /// Empties the slot, returning its card.
    pub const fn take(&mut self) -> Option<Card> {
        self.face_up = false;
        self.card.take()
    }

    /// Places a card in the slot.
    pub const fn fill(&mut self, card: Card, face_up: bool) {
        self.card = Some(card);
        self.face_up = face_up;
    }
}

/// A side's five hand slots. Slots are refilled, never added or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hand {
    slots: [Slot; HAND_SIZE],
}

impl Hand {
    /// Creates a hand with every slot empty.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [Slot {
                card: None,
                face_up: false,
            }; HAND_SIZE],
        }
    }

    /// Returns all slots in order.
    #[must_use]
    pub const fn slots(&self) -> &[Slot; HAND_SIZE] {
        &self.slots
    }

    /// Returns the slot at `index`.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// Returns the slot at `index` mutably.
    pub fn slot_mut(&mut self, index: usize) -> Option<&mut Slot> {
        self.slots.get_mut(index)
    }

    /// Returns the leftmost empty slot index.
    #[must_use]
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(|slot| !slot.is_occupied())
    }

    /// Iterates over occupied slots as `(index, card)`, left to right.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, Card)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.card().map(|card| (index, card)))
    }

    /// Returns the number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.occupied().count()
    }

    /// Returns whether every slot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| !slot.is_occupied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    #[test]
    fn slots_fill_left_to_right() {
        let mut hand = Hand::new();
        assert!(hand.is_empty());
        assert_eq!(hand.first_empty(), Some(0));

        for (index, slot) in hand.slots.iter_mut().enumerate() {
            slot.fill(Card::new(Suit::Spades, index as u8 + 1), true);
        }
        assert_eq!(hand.first_empty(), None);
        assert_eq!(hand.len(), HAND_SIZE);

        let taken = hand.slot_mut(2).and_then(Slot::take);
        assert_eq!(taken, Some(Card::new(Suit::Spades, 3)));
        assert_eq!(hand.first_empty(), Some(2));
    }

    #[test]
    fn face_down_cards_are_hidden() {
        let mut slot = Slot::with_card(Card::new(Suit::Hearts, 4), false);
        assert!(slot.is_occupied());
        assert_eq!(slot.visible_card(), None);
        slot.reveal();
        assert_eq!(slot.visible_card(), Some(Card::new(Suit::Hearts, 4)));
    }
}
