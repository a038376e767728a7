use std::process;
use std::thread;
use std::time::Duration;

use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

use blackjack::{GameError, Pacing, Table, TableUi};

mod console;
mod render;

use console::Console;

/// Cosmetic pause between dealer draws; pure pacing, no game semantics.
struct SleepPacing {
    delay: Duration,
}

impl Default for SleepPacing {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(1),
        }
    }
}

impl Pacing for SleepPacing {
    fn between_dealer_draws(&mut self) {
        thread::sleep(self.delay);
    }
}

fn main() {
    env_logger::init();

    let mut table = Table::new(ChaCha8Rng::from_entropy());
    let mut ui = Console::new();
    let mut pacing = SleepPacing::default();

    println!("\n=== ASCII Blackjack ===");
    loop {
        match table.play_round(&mut ui, &mut pacing) {
            Ok(summary) => log::debug!("round settled: {:?}", summary.outcome),
            Err(GameError::Interrupted) => return farewell(),
            Err(err) => fatal(err),
        }

        match ui.read_line("Play again? (y/n) > ") {
            Ok(answer) if answer == "y" => {}
            Ok(_) => break,
            Err(GameError::Interrupted) => return farewell(),
            Err(err) => fatal(err),
        }
    }
}

fn farewell() {
    println!("\nBye!");
}

fn fatal(err: GameError) -> ! {
    log::error!("unrecoverable error: {err}");
    eprintln!("fatal: {err}");
    process::exit(1);
}
