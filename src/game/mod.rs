//! Match engine and state management.

use alloc::boxed::Box;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::Hand;
use crate::options::{MatchOptions, SpeedLevel};
use crate::pile::{CenterPiles, PileId};
use crate::sync::{Mutex, MutexGuard};

mod play;
mod reset;
pub mod state;
mod terminal;

pub use state::{MatchStatus, Side, Table};

type Listener = Box<dyn FnMut(MatchStatus) + Send>;

/// Handle returned by [`Match::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Proof that a piece of scheduled work belongs to a particular match.
///
/// Every call to [`Match::start`] invalidates all tickets handed out before
/// it, so a timer that fires after a restart cannot touch the new match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickTicket {
    generation: u64,
}

impl TickTicket {
    /// Returns the match generation this ticket was issued for.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// Something that can invoke the opponent at a fixed cadence.
///
/// The engine never spawns timers itself; the presentation layer supplies
/// one of these and drives [`crate::opponent::OpponentPolicy::tick`] from it.
pub trait Scheduler {
    /// Starts firing every `interval` for the match identified by `ticket`.
    fn schedule_every(&mut self, interval: core::time::Duration, ticket: TickTicket);

    /// Stops firing. Must take effect before it returns.
    fn cancel(&mut self);
}

/// A read-only copy of the table for rendering and for opponent decisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSnapshot {
    /// Current status.
    pub status: MatchStatus,
    /// Generation of the match this snapshot was taken from.
    pub generation: u64,
    /// The player's hand.
    pub player_hand: Hand,
    /// The opponent's hand. Face-down cards are flagged on each slot.
    pub opponent_hand: Hand,
    /// Center pile tops.
    pub piles: CenterPiles,
    /// Cards left in the player's stock.
    pub player_stock: usize,
    /// Cards left in the opponent's stock.
    pub opponent_stock: usize,
    /// Cards left in the shared stock.
    pub shared_stock: usize,
    /// Cards covered on the piles so far.
    pub discarded: usize,
}

impl MatchSnapshot {
    /// Returns a side's hand.
    #[must_use]
    pub const fn hand(&self, side: Side) -> &Hand {
        match side {
            Side::Player => &self.player_hand,
            Side::Opponent => &self.opponent_hand,
        }
    }

    /// Returns the number of cards left in a side's stock.
    #[must_use]
    pub const fn stock_len(&self, side: Side) -> usize {
        match side {
            Side::Player => self.player_stock,
            Side::Opponent => self.opponent_stock,
        }
    }

    /// Returns the top card of a pile.
    #[must_use]
    pub const fn pile(&self, pile: PileId) -> Option<Card> {
        self.piles.get(pile)
    }
}

struct Phase {
    status: MatchStatus,
    generation: u64,
}

/// Both locks held for the duration of one intent.
pub(crate) struct Session<'a> {
    phase: MutexGuard<'a, Phase>,
    pub(crate) table: MutexGuard<'a, Table>,
}

impl Session<'_> {
    pub(crate) fn status(&self) -> MatchStatus {
        self.phase.status
    }

    pub(crate) fn is_current(&self, ticket: TickTicket) -> bool {
        self.phase.generation == ticket.generation
    }

    pub(crate) fn snapshot(&self) -> MatchSnapshot {
        let table = &*self.table;
        MatchSnapshot {
            status: self.phase.status,
            generation: self.phase.generation,
            player_hand: table.player_hand,
            opponent_hand: table.opponent_hand,
            piles: table.piles,
            player_stock: table.player_stock.len(),
            opponent_stock: table.opponent_stock.len(),
            shared_stock: table.shared.len(),
            discarded: table.discard.len(),
        }
    }
}

/// A Speed match between a human player and the computer opponent.
///
/// The match owns the deck, both hands, and the center piles. Every intent
/// takes the match's locks for its whole duration, so intents from the
/// player and opponent ticks are applied one at a time.
pub struct Match {
    /// Cards on the table.
    pub table: Mutex<Table>,
    phase: Mutex<Phase>,
    options: Mutex<MatchOptions>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_subscription: Mutex<u64>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Match {
    /// Creates an idle match with the given seed. Call [`Match::start`] to deal.
    ///
    /// # Example
    ///
    /// ```
    /// use speedrs::{Match, MatchOptions, MatchStatus};
    ///
    /// let game = Match::new(MatchOptions::default(), 42);
    /// assert_eq!(game.status(), MatchStatus::NotStarted);
    /// ```
    #[must_use]
    pub fn new(options: MatchOptions, seed: u64) -> Self {
        Self {
            table: Mutex::new(Table::default()),
            phase: Mutex::new(Phase {
                status: MatchStatus::NotStarted,
                generation: 0,
            }),
            options: Mutex::new(options),
            listeners: Mutex::new(Vec::new()),
            next_subscription: Mutex::new(0),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    pub(crate) fn session(&self) -> Session<'_> {
        let phase = self.phase.lock();
        let table = self.table.lock();
        Session { phase, table }
    }

    /// Shuffles a fresh deck, deals, and puts the match in progress.
    ///
    /// Any earlier match is discarded along with every [`TickTicket`] issued
    /// for it.
    pub fn start(&self, speed: SpeedLevel) -> MatchSnapshot {
        let options = {
            let mut options = self.options.lock();
            options.speed = speed;
            *options
        };

        let deck = Deck::build(&mut *self.rng.lock());

        let mut session = self.session();
        session.phase.generation += 1;
        session.phase.status = MatchStatus::InProgress;
        *session.table = Table::from_deal(deck.deal_split());

        let snapshot = session.snapshot();
        info!(
            generation = snapshot.generation,
            ?speed,
            interval_ms = options.tick_interval().as_millis() as u64,
            left = ?snapshot.piles.get(PileId::Left),
            right = ?snapshot.piles.get(PileId::Right),
            "match started"
        );
        snapshot
    }

    /// Starts a new match at the configured speed.
    pub fn restart(&self) -> MatchSnapshot {
        let speed = self.options.lock().speed;
        self.start(speed)
    }

    /// Cancels `scheduler`, starts a new match, and schedules opponent ticks
    /// at the new match's cadence.
    pub fn start_scheduled<S: Scheduler + ?Sized>(
        &self,
        speed: SpeedLevel,
        scheduler: &mut S,
    ) -> MatchSnapshot {
        scheduler.cancel();
        let snapshot = self.start(speed);
        scheduler.schedule_every(
            speed.tick_interval(),
            TickTicket {
                generation: snapshot.generation,
            },
        );
        snapshot
    }

    /// Returns a ticket for the current match.
    pub fn ticket(&self) -> TickTicket {
        TickTicket {
            generation: self.phase.lock().generation,
        }
    }

    /// Returns whether `ticket` was issued for the current match.
    pub fn is_current(&self, ticket: TickTicket) -> bool {
        self.phase.lock().generation == ticket.generation
    }

    /// Returns the match options.
    pub fn options(&self) -> MatchOptions {
        *self.options.lock()
    }

    /// Returns the current match status.
    pub fn status(&self) -> MatchStatus {
        self.phase.lock().status
    }

    /// Returns a copy of the whole table.
    pub fn snapshot(&self) -> MatchSnapshot {
        self.session().snapshot()
    }

    /// Returns a copy of a side's hand.
    pub fn hand(&self, side: Side) -> Hand {
        *self.table.lock().hand(side)
    }

    /// Returns the top card of a center pile.
    pub fn pile(&self, pile: PileId) -> Option<Card> {
        self.table.lock().piles.get(pile)
    }

    /// Returns the number of cards left in a side's stock.
    pub fn stock_len(&self, side: Side) -> usize {
        self.table.lock().stock(side).len()
    }

    /// Returns the number of cards left in the shared stock.
    pub fn shared_len(&self) -> usize {
        self.table.lock().shared.len()
    }

    /// Registers a callback for transitions into a final status.
    ///
    /// Callbacks run on the thread that caused the transition, after the
    /// match's table lock is released. They must not subscribe or
    /// unsubscribe from inside the callback.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: FnMut(MatchStatus) + Send + 'static,
    {
        let id = {
            let mut next = self.next_subscription.lock();
            *next += 1;
            SubscriptionId(*next)
        };
        self.listeners.lock().push((id, Box::new(listener)));
        id
    }

    /// Removes a callback. Returns whether it was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    pub(crate) fn notify(&self, status: MatchStatus) {
        let mut listeners = self.listeners.lock();
        debug!(?status, listeners = listeners.len(), "notifying listeners");
        for (_, listener) in listeners.iter_mut() {
            listener(status);
        }
    }
}
