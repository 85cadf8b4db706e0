use crate::card::{Card, CardColor, WildAction};

/// Whether `card` may be played on `top` while `color` is the active color.
///
/// A Wild Draw Four is only allowed when `hand` has no number or action card of the active
/// color. Numbers and actions match by color, or by the same number or action as the top card.
pub fn is_playable(card: &Card, top: &Card, color: CardColor, hand: &[Card]) -> bool {
    match (card, top) {
        (Card::Wild(WildAction::Wild), _) => true,
        (Card::Wild(WildAction::WildDrawFour), _) => {
            !hand.iter().any(|c| c.color() == Some(color))
        }
        (Card::Number(c, _), _) | (Card::Action(c, _), _) if *c == color => true,
        (Card::Number(_, number), Card::Number(_, top_number)) => number == top_number,
        (Card::Action(_, action), Card::Action(_, top_action)) => action == top_action,
        _ => false,
    }
}

/// The cards of `hand` that can be played right now, in hand order.
pub fn legal_cards(hand: &[Card], top: &Card, color: CardColor) -> Vec<Card> {
    hand.iter()
        .filter(|card| is_playable(card, top, color, hand))
        .copied()
        .collect()
}
