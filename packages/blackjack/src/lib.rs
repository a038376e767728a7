mod card;
mod deck;
mod error;
mod hand;
mod table;

pub use card::{Card, Rank, Suit};
pub use deck::Deck;
pub use error::GameError;
pub use hand::{hand_value, is_blackjack, is_bust, is_soft, Hand};
pub use table::{
    Decision, HandView, NoPacing, Outcome, Pacing, RoundSummary, Seat, SeatPolicy, Table, TableUi,
    TurnEnd, DEALER_STAND_ON, RESHUFFLE_THRESHOLD,
};
