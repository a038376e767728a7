//! Terminal front end for the table: prints the ASCII hands and reads the
//! player's decisions. When stdin is a tty, prompts run in raw mode so Ctrl-C
//! arrives as a key event and can shut the game down gracefully.

use std::io::{self, BufRead, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::tty::IsTty;

use blackjack::{GameError, Hand, HandView, RoundSummary, TableUi, TurnEnd};

use crate::render;

/// Keeps raw mode scoped to a single prompt.
struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

pub struct Console {
    interactive: bool,
}

impl Console {
    pub fn new() -> Self {
        Self {
            interactive: io::stdin().is_tty(),
        }
    }

    fn read_raw(&self) -> Result<String, GameError> {
        let _guard = RawModeGuard::enter()?;
        let mut line = String::new();
        loop {
            if let Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) = event::read()?
            {
                match code {
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        return Err(GameError::Interrupted);
                    }
                    KeyCode::Char('d')
                        if modifiers.contains(KeyModifiers::CONTROL) && line.is_empty() =>
                    {
                        return Err(GameError::Interrupted);
                    }
                    KeyCode::Char(c) => {
                        line.push(c);
                        print!("{c}");
                        io::stdout().flush()?;
                    }
                    KeyCode::Backspace => {
                        if line.pop().is_some() {
                            print!("\x08 \x08");
                            io::stdout().flush()?;
                        }
                    }
                    KeyCode::Enter => {
                        print!("\r\n");
                        io::stdout().flush()?;
                        return Ok(line);
                    }
                    _ => {}
                }
            }
        }
    }

    fn read_piped(&self) -> Result<String, GameError> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            // stdin closed under us; same exit path as an interrupt.
            return Err(GameError::Interrupted);
        }
        Ok(line)
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl TableUi for Console {
    fn reshuffling(&mut self) {
        println!("\n>>> Reshuffling <<<\n");
    }

    fn show_hand(&mut self, view: HandView, hand: &Hand) {
        let label = match view {
            HandView::Player => "\nYour hand:",
            HandView::DealerUpcard => "Dealer shows:",
            HandView::DealerReveal => "\nDealer reveals:",
            HandView::DealerFinal => "Dealer stands with:",
        };
        println!("{label}\n{}", render::hand_block(&hand.cards, view.hides_hole()));
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, GameError> {
        print!("{prompt}");
        io::stdout().flush()?;
        let line = if self.interactive {
            self.read_raw()?
        } else {
            self.read_piped()?
        };
        Ok(line.trim().to_lowercase())
    }

    fn invalid_input(&mut self) {
        println!("Please enter h or s.");
    }

    fn turn_ended(&mut self, end: TurnEnd) {
        match end {
            TurnEnd::Blackjack => println!("Blackjack!"),
            TurnEnd::Busted => println!("Bust!"),
            TurnEnd::Stand => {}
        }
    }

    fn round_over(&mut self, summary: &RoundSummary) {
        println!(
            "\nFinal: You {} vs Dealer {} → {}\n",
            summary.player_score,
            summary.dealer_score,
            summary.outcome.message()
        );
    }
}
