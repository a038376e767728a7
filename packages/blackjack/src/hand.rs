use std::fmt;

use serde::{Deserialize, Serialize};

use crate::card::Card;

/// Calculate the value of a blackjack hand.
///
/// Aces start at 11; while the total is over 21 and a soft ace remains, one ace
/// at a time is dropped to 1. Each reduction lowers the total by exactly 10, so
/// the loop terminates once the aces run out.
pub fn hand_value(cards: &[Card]) -> u8 {
    let mut total = 0;
    let mut aces = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        total += card.value();
    }

    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    total
}

/// Check if a hand is soft (has an ace still counted as 11).
pub fn is_soft(cards: &[Card]) -> bool {
    let mut total = 0;
    let mut aces = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        total += card.value();
    }

    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    aces > 0
}

/// Check if a hand is busted.
pub fn is_bust(cards: &[Card]) -> bool {
    hand_value(cards) > 21
}

/// Check if a hand is a natural blackjack (21 with exactly 2 cards).
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && hand_value(cards) == 21
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Emptied at round boundaries; discarded cards are never reused, the deck
    /// is replaced instead.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Recomputed on every call, never cached.
    pub fn score(&self) -> u8 {
        hand_value(&self.cards)
    }

    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
    }

    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "  (={})", self.score())
    }
}
