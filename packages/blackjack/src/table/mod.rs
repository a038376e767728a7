use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::deck::Deck;
use crate::error::GameError;
use crate::hand::Hand;


/// A fresh deck is swapped in before any round that starts with fewer cards
/// than this. A round consumes at most 2x(2+hits) cards, well under the margin.
pub const RESHUFFLE_THRESHOLD: usize = 15;

/// The dealer draws strictly below this total and stands on any 17, soft or
/// hard.
pub const DEALER_STAND_ON: u8 = 17;

const HIT_OR_STAND_PROMPT: &str = "Hit or stand? (h/s) > ";

/// A validated hit/stand choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Hit,
    Stand,
}

impl Decision {
    /// Input arrives trimmed and lowercased from the input collaborator;
    /// anything but "h" or "s" is rejected and re-prompted.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "h" => Some(Decision::Hit),
            "s" => Some(Decision::Stand),
            _ => None,
        }
    }
}

/// Which presentation moment a hand display belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandView {
    Player,
    /// The dealer's initial two cards with the hole card face-down.
    DealerUpcard,
    /// The dealer's full hand at the start of the dealer turn.
    DealerReveal,
    /// The dealer's hand once the draw policy has finished.
    DealerFinal,
}

impl HandView {
    pub fn hides_hole(&self) -> bool {
        matches!(self, HandView::DealerUpcard)
    }
}

/// Terminal states of the player turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEnd {
    Stand,
    Busted,
    Blackjack,
}

/// Presentation and input collaborators rolled into one table-facing surface.
/// The engine never touches the terminal itself.
pub trait TableUi {
    fn reshuffling(&mut self);
    fn show_hand(&mut self, view: HandView, hand: &Hand);
    fn read_line(&mut self, prompt: &str) -> Result<String, GameError>;
    fn invalid_input(&mut self);
    fn turn_ended(&mut self, end: TurnEnd);
    fn round_over(&mut self, summary: &RoundSummary);
}

/// Cosmetic pause between dealer draws, injectable so tests run at full speed.
pub trait Pacing {
    fn between_dealer_draws(&mut self);
}

/// No delay at all; the default for tests and simulations.
pub struct NoPacing;

impl Pacing for NoPacing {
    fn between_dealer_draws(&mut self) {}
}

/// How a seat decides on cards: a human is asked, an automated seat draws up
/// to a fixed threshold. Composition instead of a participant class hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatPolicy {
    Human,
    StandOn(u8),
}

/// One participant's place at the table: a hand plus a draw policy.
#[derive(Debug, Clone)]
pub struct Seat {
    pub hand: Hand,
    pub policy: SeatPolicy,
}

impl Seat {
    pub fn human() -> Self {
        Self {
            hand: Hand::new(),
            policy: SeatPolicy::Human,
        }
    }

    pub fn dealer() -> Self {
        Self {
            hand: Hand::new(),
            policy: SeatPolicy::StandOn(DEALER_STAND_ON),
        }
    }

    /// Whether the automated policy wants another card. A human seat never
    /// auto-draws; it is asked through the input collaborator instead.
    pub fn wants_card(&self) -> bool {
        match self.policy {
            SeatPolicy::Human => false,
            SeatPolicy::StandOn(threshold) => self.hand.score() < threshold,
        }
    }
}

/// Round result, in settlement precedence order: bust checks first, then
/// naturals, then plain score comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    PlayerBust,
    DealerBust,
    PlayerBlackjack,
    DealerBlackjack,
    PlayerWin,
    DealerWin,
    Push,
}

impl Outcome {
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::PlayerBust => "Dealer wins – you bust.",
            Outcome::DealerBust => "You win – dealer busts!",
            Outcome::PlayerBlackjack => "You win with a Blackjack!",
            Outcome::DealerBlackjack => "Dealer wins with a Blackjack.",
            Outcome::PlayerWin => "You win!",
            Outcome::DealerWin => "Dealer wins.",
            Outcome::Push => "Push – tie.",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Final scores and outcome of one settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub outcome: Outcome,
    pub player_score: u8,
    pub dealer_score: u8,
}

/// One blackjack table: a shoe of one deck, a human seat and a dealer seat.
/// All mutation happens on the caller's single thread.
pub struct Table<R: Rng> {
    pub deck: Deck,
    pub player: Seat,
    pub dealer: Seat,
    rng: R,
}

impl<R: Rng> Table<R> {
    pub fn new(mut rng: R) -> Self {
        let deck = Deck::shuffled(&mut rng);
        Self {
            deck,
            player: Seat::human(),
            dealer: Seat::dealer(),
            rng,
        }
    }

    /// Reshuffle when the shoe runs low, clear both hands, then deal two cards
    /// each in the conventional alternating order: player, dealer, player,
    /// dealer.
    pub fn deal_new_round(&mut self, ui: &mut dyn TableUi) -> Result<(), GameError> {
        if self.deck.remaining() < RESHUFFLE_THRESHOLD {
            log::info!(
                "reshuffling with {} cards left in the shoe",
                self.deck.remaining()
            );
            ui.reshuffling();
            self.deck = Deck::shuffled(&mut self.rng);
        }

        self.player.hand.clear();
        self.dealer.hand.clear();
        for _ in 0..2 {
            self.player.hand.add_card(self.deck.draw()?);
            self.dealer.hand.add_card(self.deck.draw()?);
        }
        Ok(())
    }

    /// The player decision loop. Shows the hand each iteration, short-circuits
    /// on a natural or a bust, otherwise keeps asking until a valid hit or
    /// stand comes in. Invalid input consumes neither a turn nor a card.
    fn player_turn(&mut self, ui: &mut dyn TableUi) -> Result<TurnEnd, GameError> {
        loop {
            ui.show_hand(HandView::Player, &self.player.hand);
            if self.player.hand.is_blackjack() {
                ui.turn_ended(TurnEnd::Blackjack);
                return Ok(TurnEnd::Blackjack);
            }
            if self.player.hand.is_bust() {
                ui.turn_ended(TurnEnd::Busted);
                return Ok(TurnEnd::Busted);
            }

            let line = ui.read_line(HIT_OR_STAND_PROMPT)?;
            match Decision::parse(&line) {
                Some(Decision::Hit) => self.player.hand.add_card(self.deck.draw()?),
                Some(Decision::Stand) => {
                    ui.turn_ended(TurnEnd::Stand);
                    return Ok(TurnEnd::Stand);
                }
                None => ui.invalid_input(),
            }
        }
    }

    /// The scripted dealer: reveal the hole card, then draw while the policy
    /// asks for more.
    fn dealer_turn(
        &mut self,
        ui: &mut dyn TableUi,
        pacing: &mut dyn Pacing,
    ) -> Result<(), GameError> {
        ui.show_hand(HandView::DealerReveal, &self.dealer.hand);
        while self.dealer.wants_card() {
            pacing.between_dealer_draws();
            let card = self.deck.draw()?;
            log::debug!("dealer draws {card}");
            self.dealer.hand.add_card(card);
        }
        ui.show_hand(HandView::DealerFinal, &self.dealer.hand);
        Ok(())
    }

    /// Outcome precedence, first match wins: player bust, dealer bust, player
    /// natural, dealer natural, higher score, push.
    pub fn settle(&self) -> RoundSummary {
        let player = &self.player.hand;
        let dealer = &self.dealer.hand;

        let outcome = if player.is_bust() {
            Outcome::PlayerBust
        } else if dealer.is_bust() {
            Outcome::DealerBust
        } else if player.is_blackjack() && !dealer.is_blackjack() {
            Outcome::PlayerBlackjack
        } else if dealer.is_blackjack() && !player.is_blackjack() {
            Outcome::DealerBlackjack
        } else if player.score() > dealer.score() {
            Outcome::PlayerWin
        } else if dealer.score() > player.score() {
            Outcome::DealerWin
        } else {
            Outcome::Push
        };

        RoundSummary {
            outcome,
            player_score: player.score(),
            dealer_score: dealer.score(),
        }
    }

    /// One full round: deal, show the dealer's upcard with the hole hidden,
    /// run the player, run the dealer unless the player busted, settle.
    pub fn play_round(
        &mut self,
        ui: &mut dyn TableUi,
        pacing: &mut dyn Pacing,
    ) -> Result<RoundSummary, GameError> {
        self.deal_new_round(ui)?;
        ui.show_hand(HandView::DealerUpcard, &self.dealer.hand);

        self.player_turn(ui)?;
        if !self.player.hand.is_bust() {
            self.dealer_turn(ui, pacing)?;
        }

        let summary = self.settle();
        ui.round_over(&summary);
        Ok(summary)
    }
}
