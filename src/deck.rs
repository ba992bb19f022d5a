//! Deck construction, shuffling, and the opening split.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, RANKS, Suit};

/// Number of cards each side receives as its personal stock.
pub const STOCK_SIZE: usize = 15;

/// An ordered pile of cards. The last card is the top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

/// The cards handed out at the start of a match.
///
/// Each stock is ordered so that popping from its end yields cards in the
/// order they were taken off the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    /// The player's personal stock (hand slots are filled from it).
    pub player: Vec<Card>,
    /// The opponent's personal stock.
    pub opponent: Vec<Card>,
    /// Seed cards for the left and right center piles.
    pub center: [Option<Card>; 2],
    /// Shared stock used only to reseed the center piles.
    pub remaining: Deck,
}

impl Deck {
    /// Builds all 52 rank and suit combinations and shuffles them.
    pub fn build<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=RANKS {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Wraps an explicit card order. The last card is dealt first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Removes and returns the top card, or `None` once the deck is empty.
    pub fn pop_top(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Splits the deck in popped order: 15 to the player, 15 to the
    /// opponent, one card to each center pile, and the rest stays behind.
    ///
    /// A short deck yields short stocks and empty center seeds instead of
    /// failing.
    #[must_use]
    pub fn deal_split(mut self) -> Deal {
        let player = self.take_stock(STOCK_SIZE);
        let opponent = self.take_stock(STOCK_SIZE);
        let left = self.pop_top();
        let right = self.pop_top();

        Deal {
            player,
            opponent,
            center: [left, right],
            remaining: self,
        }
    }

    fn take_stock(&mut self, count: usize) -> Vec<Card> {
        let mut stock: Vec<Card> = (0..count).map_while(|_| self.pop_top()).collect();
        stock.reverse();
        stock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn build_yields_every_card_once() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let deck = Deck::build(&mut rng);
        assert_eq!(deck.len(), DECK_SIZE);

        let mut cards = deck.cards().to_vec();
        cards.sort();
        cards.dedup();
        assert_eq!(cards.len(), DECK_SIZE);
    }

    #[test]
    fn deal_split_follows_popped_order() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let deck = Deck::build(&mut rng);
        let mut popped = deck.cards().to_vec();
        popped.reverse();

        let mut deal = deck.deal_split();
        assert_eq!(deal.player.len(), STOCK_SIZE);
        assert_eq!(deal.opponent.len(), STOCK_SIZE);
        assert_eq!(deal.remaining.len(), DECK_SIZE - 2 * STOCK_SIZE - 2);
        assert_eq!(deal.center, [Some(popped[30]), Some(popped[31])]);

        assert_eq!(deal.player.pop(), Some(popped[0]));
        assert_eq!(deal.opponent.pop(), Some(popped[15]));
        assert_eq!(deal.remaining.pop_top(), Some(popped[32]));
    }

    #[test]
    fn short_deck_leaves_center_empty() {
        let cards = (1..=RANKS).map(|rank| Card::new(Suit::Clubs, rank)).collect();
        let deal = Deck::from_cards(cards).deal_split();
        assert_eq!(deal.player.len(), 13);
        assert!(deal.opponent.is_empty());
        assert_eq!(deal.center, [None, None]);
        assert!(deal.remaining.is_empty());
    }

    #[test]
    fn pop_top_reports_empty() {
        let mut deck = Deck::default();
        assert_eq!(deck.pop_top(), None);
    }
}
