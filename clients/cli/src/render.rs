//! ASCII card rendering: bordered boxes joined side by side, with a filler box
//! for the dealer's hidden hole card.

use blackjack::Card;

const CARD_HEIGHT: usize = 7;

const HIDDEN_CARD: [&str; CARD_HEIGHT] = [
    "┌─────────┐",
    "│░░░░░░░░░│",
    "│░░░░░░░░░│",
    "│░░░░░░░░░│",
    "│░░░░░░░░░│",
    "│░░░░░░░░░│",
    "└─────────┘",
];

fn card_lines(card: &Card) -> [String; CARD_HEIGHT] {
    let rank = card.rank.symbol();
    let suit = card.suit.symbol();
    [
        "┌─────────┐".to_string(),
        format!("│{rank:<2}       │"),
        "│         │".to_string(),
        format!("│    {suit}    │"),
        "│         │".to_string(),
        format!("│       {rank:>2}│"),
        "└─────────┘".to_string(),
    ]
}

/// A multi-line block depicting every card in `cards` side by side. With
/// `hide_first`, the first card renders face-down.
pub fn hand_block(cards: &[Card], hide_first: bool) -> String {
    let boxes: Vec<[String; CARD_HEIGHT]> = cards
        .iter()
        .enumerate()
        .map(|(i, card)| {
            if hide_first && i == 0 {
                HIDDEN_CARD.map(str::to_string)
            } else {
                card_lines(card)
            }
        })
        .collect();

    (0..CARD_HEIGHT)
        .map(|row| {
            boxes
                .iter()
                .map(|lines| lines[row].as_str())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
