//! Opponent and scheduling integration tests.

mod common;

use core::time::Duration;

use common::{card, clubs, set_hands, set_piles, staged, started};
use speedrs::opponent::{GreedyOpponent, OpponentPolicy, TickOutcome, finish_draw};
use speedrs::{
    Decision, Match, MatchOptions, MatchStatus, PileId, PlayError, Scheduler, Side, SpeedLevel,
    Suit, TickTicket,
};

#[derive(Default)]
struct RecordingScheduler {
    calls: Vec<String>,
    ticket: Option<TickTicket>,
}

impl Scheduler for RecordingScheduler {
    fn schedule_every(&mut self, interval: Duration, ticket: TickTicket) {
        self.calls.push(format!("every {}ms", interval.as_millis()));
        self.ticket = Some(ticket);
    }

    fn cancel(&mut self) {
        self.calls.push("cancel".to_owned());
        self.ticket = None;
    }
}

struct AlwaysLeft;

impl OpponentPolicy for AlwaysLeft {
    fn choose(&self, _view: &speedrs::MatchSnapshot) -> Decision {
        Decision::Play {
            slot: 0,
            pile: PileId::Left,
        }
    }
}

#[test]
fn tick_plays_first_fitting_card_and_schedules_refill() {
    let game = staged(|table| {
        set_hands(table, &clubs(&[1]), &clubs(&[9, 4, 6]));
        set_piles(table, card(Suit::Hearts, 5), card(Suit::Spades, 3));
        table.set_stock(Side::Opponent, &[card(Suit::Diamonds, 12)]);
        table.set_shared(&[card(Suit::Hearts, 10), card(Suit::Hearts, 11)]);
    });
    let ticket = game.ticket();

    let TickOutcome::Played { play, draw_after } = GreedyOpponent.tick(&game, ticket) else {
        panic!("expected a play");
    };
    assert_eq!(play.side, Side::Opponent);
    assert_eq!(play.slot, 1);
    assert_eq!(play.pile, PileId::Left);
    assert_eq!(play.card, card(Suit::Clubs, 4));
    assert_eq!(draw_after, MatchOptions::default().opponent_draw_delay);
    assert!(!game.hand(Side::Opponent).slots()[1].is_occupied());

    assert_eq!(
        finish_draw(&game, ticket),
        TickOutcome::Drew {
            slot: 1,
            card: card(Suit::Diamonds, 12)
        }
    );
    let refilled = game.hand(Side::Opponent).slots()[1];
    assert!(!refilled.is_face_up());
}

#[test]
fn tick_waits_when_holding_only_unplayable_cards() {
    let game = staged(|table| {
        set_hands(table, &clubs(&[6]), &clubs(&[9, 11]));
        set_piles(table, card(Suit::Hearts, 5), card(Suit::Spades, 3));
        table.set_stock(Side::Opponent, &[card(Suit::Diamonds, 12)]);
    });
    let before = game.table.lock().clone();

    assert_eq!(GreedyOpponent.tick(&game, game.ticket()), TickOutcome::Idle);
    assert_eq!(*game.table.lock(), before);
}

#[test]
fn tick_draws_into_an_empty_hand() {
    let game = staged(|table| {
        set_hands(table, &clubs(&[6]), &[]);
        set_piles(table, card(Suit::Hearts, 5), card(Suit::Spades, 3));
        table.set_stock(Side::Opponent, &[card(Suit::Diamonds, 12), card(Suit::Diamonds, 1)]);
    });

    assert_eq!(
        GreedyOpponent.tick(&game, game.ticket()),
        TickOutcome::Drew {
            slot: 0,
            card: card(Suit::Diamonds, 12)
        }
    );
    assert_eq!(game.stock_len(Side::Opponent), 1);
}

#[test]
fn tick_reports_the_finish_it_causes() {
    let game = staged(|table| {
        set_hands(table, &clubs(&[9]), &clubs(&[4]));
        set_piles(table, card(Suit::Hearts, 5), card(Suit::Spades, 3));
    });

    assert_eq!(
        GreedyOpponent.tick(&game, game.ticket()),
        TickOutcome::Finished(MatchStatus::PlayerWon)
    );
    assert_eq!(
        GreedyOpponent.tick(&game, game.ticket()),
        TickOutcome::Finished(MatchStatus::PlayerWon)
    );
}

#[test]
fn tick_ends_a_stalemate_with_no_stock_in_a_tie() {
    let game = staged(|table| {
        set_hands(table, &clubs(&[3]), &clubs(&[3]));
        set_piles(table, card(Suit::Hearts, 7), card(Suit::Spades, 9));
    });

    assert_eq!(
        GreedyOpponent.tick(&game, game.ticket()),
        TickOutcome::Finished(MatchStatus::Tie)
    );
}

#[test]
fn illegal_policy_choice_is_rejected() {
    let game = staged(|table| {
        set_hands(table, &clubs(&[6]), &clubs(&[9, 4]));
        set_piles(table, card(Suit::Hearts, 5), card(Suit::Spades, 3));
    });
    let before = game.table.lock().clone();

    assert_eq!(
        AlwaysLeft.tick(&game, game.ticket()),
        TickOutcome::Rejected(PlayError::IllegalRank)
    );
    assert_eq!(*game.table.lock(), before);
}

#[test]
fn greedy_choice_is_deterministic() {
    let game = started(17);
    let snapshot = game.snapshot();
    let first = GreedyOpponent.choose(&snapshot);
    for _ in 0..10 {
        assert_eq!(GreedyOpponent.choose(&snapshot), first);
    }

    let twin = started(17);
    assert_eq!(
        GreedyOpponent.tick(&game, game.ticket()),
        GreedyOpponent.tick(&twin, twin.ticket())
    );
    assert_eq!(game.snapshot(), twin.snapshot());
}

#[test]
fn stale_ticket_cannot_touch_a_new_match() {
    let game = started(5);
    let old = game.ticket();
    game.restart();
    assert!(!game.is_current(old));
    let before = game.snapshot();

    assert_eq!(GreedyOpponent.tick(&game, old), TickOutcome::Stale);
    assert_eq!(finish_draw(&game, old), TickOutcome::Stale);
    assert_eq!(game.snapshot(), before);
    assert!(game.is_current(game.ticket()));
}

#[test]
fn scheduled_start_cancels_before_rescheduling() {
    let game = Match::new(MatchOptions::default(), 8);
    let mut scheduler = RecordingScheduler::default();

    game.start_scheduled(SpeedLevel::Hard, &mut scheduler);
    let first = scheduler.ticket.expect("scheduled");
    game.start_scheduled(SpeedLevel::Easy, &mut scheduler);

    assert_eq!(
        scheduler.calls,
        vec!["cancel", "every 1000ms", "cancel", "every 4000ms"]
    );
    assert!(!game.is_current(first));
    assert!(game.is_current(scheduler.ticket.expect("rescheduled")));
    assert_eq!(game.options().speed, SpeedLevel::Easy);
}

#[test]
fn speed_levels_map_to_tick_intervals() {
    assert_eq!(SpeedLevel::Easy.tick_interval(), Duration::from_secs(4));
    assert_eq!(SpeedLevel::Medium.tick_interval(), Duration::from_secs(2));
    assert_eq!(SpeedLevel::Hard.tick_interval(), Duration::from_secs(1));
    assert_eq!(SpeedLevel::default(), SpeedLevel::Medium);
}
