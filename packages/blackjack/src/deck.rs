use rand::seq::SliceRandom;
use rand::Rng;

use crate::card::{Card, Rank, Suit};
use crate::error::GameError;

/// A single 52-card deck. Cards are drawn from the back of the vec and never
/// returned; rounds replace the whole deck instead of reinserting cards.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A full deck in a fresh uniform permutation. Every call shuffles
    /// independently with the caller's rng.
    pub fn shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        cards.shuffle(rng);
        Self { cards }
    }

    /// A deck in a prearranged order; the last card is drawn first.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}
