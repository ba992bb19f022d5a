//! CLI Speed example.
//!
//! The opponent runs on a background thread at the chosen speed while you
//! type moves. Set `RUST_LOG=speedrs=debug` to watch the engine.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use speedrs::opponent::{GreedyOpponent, OpponentPolicy, TickOutcome, finish_draw};
use speedrs::{
    Hand, Match, MatchOptions, MatchSnapshot, PileId, Scheduler, Side, SpeedLevel, TickTicket,
};
use tracing_subscriber::{EnvFilter, fmt};

const POLL: Duration = Duration::from_millis(20);

/// Runs opponent ticks on a thread. `cancel` joins the thread, so no tick
/// can land after it returns.
struct ThreadScheduler {
    game: Arc<Match>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl ThreadScheduler {
    fn new(game: Arc<Match>) -> Self {
        Self {
            game,
            stop: Arc::new(AtomicBool::new(false)),
            handle: None,
        }
    }
}

/// Sleeps for `duration`, returning early (with `false`) if stopped.
fn pause(stop: &AtomicBool, duration: Duration) -> bool {
    let until = Instant::now() + duration;
    while Instant::now() < until {
        if stop.load(Ordering::SeqCst) {
            return false;
        }
        thread::sleep(POLL);
    }
    !stop.load(Ordering::SeqCst)
}

impl Scheduler for ThreadScheduler {
    fn schedule_every(&mut self, interval: Duration, ticket: TickTicket) {
        let game = Arc::clone(&self.game);
        let stop = Arc::new(AtomicBool::new(false));
        self.stop = Arc::clone(&stop);

        self.handle = Some(thread::spawn(move || {
            while pause(&stop, interval) {
                match GreedyOpponent.tick(&game, ticket) {
                    TickOutcome::Played { play, draw_after } => {
                        println!("\nOpponent plays {} on the {} pile.", play.card, play.pile);
                        if !pause(&stop, draw_after) {
                            return;
                        }
                        if let TickOutcome::Finished(_) | TickOutcome::Stale =
                            finish_draw(&game, ticket)
                        {
                            return;
                        }
                    }
                    TickOutcome::Finished(_) | TickOutcome::Stale => return,
                    TickOutcome::Drew { .. } | TickOutcome::Idle | TickOutcome::Rejected(_) => {}
                }
            }
        }));
    }

    fn cancel(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).without_time().init();

    println!("Speed CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Arc::new(Match::new(MatchOptions::default(), seed));
    let mut scheduler = ThreadScheduler::new(Arc::clone(&game));

    game.subscribe(|status| println!("\n*** Match over: {status:?} ***"));

    let Some(speed) = prompt_speed() else {
        return;
    };
    let snapshot = game.start_scheduled(speed, &mut scheduler);
    print_table(&snapshot);

    loop {
        println!("Moves: p <slot 1-5> <l|r> | d (draw) | c (can't play) | n (new match) | q");
        let line = prompt_line("> ");
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            ["p", slot, pile] => {
                let Some((slot, pile)) = parse_play(slot, pile) else {
                    println!("Usage: p <slot 1-5> <l|r>");
                    continue;
                };
                if let Err(err) = game.attempt_play(Side::Player, slot, pile) {
                    println!("Can't play that: {err}");
                }
            }
            ["d"] => match game.draw_card(Side::Player) {
                Ok(card) => println!("You drew {card}."),
                Err(err) => println!("Draw refused: {err}"),
            },
            ["c"] => match game.request_pile_reset() {
                Ok(reset) => println!("Piles reset to {} and {}.", reset.left, reset.right),
                Err(err) => println!("No reset: {err}"),
            },
            ["n"] => {
                let Some(speed) = prompt_speed() else {
                    break;
                };
                game.start_scheduled(speed, &mut scheduler);
            }
            ["q"] => break,
            _ => println!("Unknown move."),
        }

        // Give a pending opponent draw time to land before judging the finish.
        thread::sleep(game.options().terminal_check_delay);
        game.evaluate_terminal();

        print_table(&game.snapshot());
    }

    scheduler.cancel();
    println!("Goodbye.");
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_speed() -> Option<SpeedLevel> {
    loop {
        match prompt_line("Speed (e)asy, (m)edium, (h)ard: ").as_str() {
            "e" | "easy" => return Some(SpeedLevel::Easy),
            "m" | "medium" => return Some(SpeedLevel::Medium),
            "h" | "hard" => return Some(SpeedLevel::Hard),
            "q" | "quit" => return None,
            _ => println!("Pick e, m, or h."),
        }
    }
}

fn parse_play(slot: &str, pile: &str) -> Option<(usize, PileId)> {
    let slot = slot.parse::<usize>().ok()?.checked_sub(1)?;
    let pile = match pile {
        "l" | "left" => PileId::Left,
        "r" | "right" => PileId::Right,
        _ => return None,
    };
    Some((slot, pile))
}

fn format_hand(hand: &Hand) -> String {
    hand.slots()
        .iter()
        .map(|slot| match (slot.card(), slot.visible_card()) {
            (None, _) => "--".to_owned(),
            (Some(_), None) => "##".to_owned(),
            (Some(_), Some(card)) => card.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_table(snapshot: &MatchSnapshot) {
    let pile = |id| {
        snapshot
            .pile(id)
            .map_or_else(|| "--".to_owned(), |card| card.to_string())
    };

    println!();
    println!(
        "Opponent [{:>2}] {}",
        snapshot.opponent_stock,
        format_hand(&snapshot.opponent_hand)
    );
    println!(
        "Center   [{:>2}] {} | {}",
        snapshot.shared_stock,
        pile(PileId::Left),
        pile(PileId::Right)
    );
    println!(
        "You      [{:>2}] {}",
        snapshot.player_stock,
        format_hand(&snapshot.player_hand)
    );
    println!("Status: {:?}", snapshot.status);
    println!();
}
