use rand::{seq::SliceRandom, Rng};
use strum::IntoEnumIterator;
use tracing::debug;

use crate::{
    card::{Action, Card, CardColor, WildAction},
    constants::*,
    error::{Result, UnoError},
    player::Player,
};

#[derive(Debug, Clone)]
pub struct Deck(pub(crate) Vec<Card>);

impl Deck {
    /// Builds the standard 108 card deck in a fixed order. Shuffling is a separate step.
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK.into());

        for color in CardColor::iter() {
            // Number Cards
            for number in NUMBER_CARDS_PER_COLOR {
                cards.push(Card::Number(color, *number));
            }

            // Action Cards
            for action in Action::iter() {
                for _ in 0..COPIES_OF_EACH_ACTION_PER_COLOR {
                    cards.push(Card::Action(color, action));
                }
            }
        }

        for action in WildAction::iter() {
            for _ in 0..COPIES_OF_EACH_WILD_CARD {
                cards.push(Card::Wild(action));
            }
        }

        Self(cards)
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }

    /// Shuffles the deck and hands [`HAND_SIZE`] cards to every player, in seat order.
    /// Each player's previous hand is replaced.
    pub fn deal<R: Rng + ?Sized>(&mut self, players: &mut [Player], rng: &mut R) -> Result<()> {
        if self.0.is_empty() {
            return Err(UnoError::InvalidDeck);
        }

        let needed = players.len() * HAND_SIZE;
        if self.0.len() < needed {
            return Err(UnoError::InsufficientCards {
                needed,
                available: self.0.len(),
            });
        }

        self.shuffle(rng);

        for player in players.iter_mut() {
            let split_at = self.0.len() - HAND_SIZE;
            player.hand = self.0.split_off(split_at);
            player.uno_performed = false;
        }

        debug!(
            players = players.len(),
            remaining = self.0.len(),
            "dealt starting hands"
        );

        Ok(())
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.0
    }

    pub fn cards_count(&self) -> usize {
        self.0.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}
