use crate::card::{Card, CardColor};

/// What a player can see when asked to decide something.
#[derive(Clone, Copy, Debug)]
pub struct TurnView<'a> {
    pub player: &'a str,
    pub hand: &'a [Card],
    pub top: &'a Card,
    /// `None` only while the opening Wild is waiting for its color.
    pub color: Option<CardColor>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Played a card from the hand.
    Played(Card),
    /// Had nothing to play, drew this card and could play it right away.
    DrewAndPlayed(Card),
    /// Had nothing to play and kept the drawn card.
    Drew(Card),
}

impl TurnOutcome {
    pub fn played_card(&self) -> Option<Card> {
        match self {
            TurnOutcome::Played(card) | TurnOutcome::DrewAndPlayed(card) => Some(*card),
            TurnOutcome::Drew(_) => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct PlayTurnResult {
    pub player: usize,
    pub outcome: TurnOutcome,
    pub uno: bool,
    pub won: bool,
}
