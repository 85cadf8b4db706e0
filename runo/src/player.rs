use rand::{seq::SliceRandom, Rng};
use tracing::debug;

use crate::card::Card;
use crate::constants::{AI_NAMES, MAX_PLAYERS, MIN_PLAYERS};
use crate::error::{Result, UnoError};
use crate::strategy::{Strategy, StrategyKind};

#[derive(Debug)]
pub struct Player {
    pub(crate) name: String,
    pub hand: Vec<Card>,
    pub(crate) strategy: Box<dyn Strategy>,
    /// Set the first time the player gets down to one card, and kept for the rest of the game.
    pub uno_performed: bool,
}

impl Player {
    pub fn new(name: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            strategy,
            uno_performed: false,
        }
    }

    pub fn with_hand(mut self, hand: Vec<Card>) -> Self {
        self.hand = hand;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn strategy_kind(&self) -> StrategyKind {
        self.strategy.kind()
    }

    pub fn cards_count(&self) -> usize {
        self.hand.len()
    }

    pub fn card_index(&self, card: &Card) -> Option<usize> {
        self.hand.iter().position(|x| x == card)
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub fn remove_card(&mut self, index: usize) -> Card {
        self.hand.remove(index)
    }

    pub fn uno(&mut self) {
        self.uno_performed = true;
    }
}

/// Seats a table of `count` players: the human at index 0 with the given strategy, every other
/// seat an automated player with a uniformly random automated strategy and a name from the pool.
pub fn seat_players<R: Rng + ?Sized>(
    count: usize,
    human_name: impl Into<String>,
    human_strategy: Box<dyn Strategy>,
    rng: &mut R,
) -> Result<Vec<Player>> {
    if count < MIN_PLAYERS {
        return Err(UnoError::NotEnoughPlayers);
    }
    if count > MAX_PLAYERS {
        return Err(UnoError::TooManyPlayers);
    }

    let mut players = Vec::with_capacity(count);
    players.push(Player::new(human_name, human_strategy));

    for seat in 1..count {
        let kind = StrategyKind::random_automated(rng);
        let name = AI_NAMES.choose(rng).copied().unwrap_or("Bot");
        debug!(seat, name, %kind, "seating automated player");
        players.push(Player::new(name, kind.into_strategy()));
    }

    Ok(players)
}
