//! Shared helpers for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use speedrs::{Card, Match, MatchOptions, Side, SpeedLevel, Suit, Table};
use tracing_subscriber::{EnvFilter, fmt};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Installs a test subscriber once. Level comes from `TEST_LOG`, then
/// `RUST_LOG`, then `warn`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Starts a seeded match and returns it.
pub fn started(seed: u64) -> Match {
    init_logging();
    let game = Match::new(MatchOptions::default(), seed);
    game.start(SpeedLevel::Medium);
    game
}

/// Starts a match and replaces the table with a hand-built position.
pub fn staged(build: impl FnOnce(&mut Table)) -> Match {
    let game = started(1);
    {
        let mut table = game.table.lock();
        *table = Table::default();
        build(&mut table);
    }
    game
}

/// Ranks as clubs, for hands where suits do not matter.
pub fn clubs(ranks: &[u8]) -> Vec<Option<Card>> {
    ranks.iter().map(|&rank| Some(card(Suit::Clubs, rank))).collect()
}

pub fn set_piles(table: &mut Table, left: Card, right: Card) {
    table.piles = speedrs::CenterPiles::new(Some(left), Some(right));
}

pub fn set_hands(table: &mut Table, player: &[Option<Card>], opponent: &[Option<Card>]) {
    table.set_hand(Side::Player, player);
    table.set_hand(Side::Opponent, opponent);
}
