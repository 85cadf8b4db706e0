use thiserror::Error;

use crate::card::Card;

#[derive(Error, Debug)]
pub enum UnoError {
    #[error("Not enough players")]
    NotEnoughPlayers,
    #[error("Too many players")]
    TooManyPlayers,
    #[error("Deck does not contain valid cards")]
    InvalidDeck,
    #[error("Not enough cards to deal: need {needed}, deck has {available}")]
    InsufficientCards { needed: usize, available: usize },
    #[error("{0} is not in the player's hand")]
    CardNotInHand(Card),
    #[error("{0} cannot be played right now")]
    IllegalMove(Card),
    #[error("Discard pile is empty, cannot reshuffle")]
    EmptyDiscardPile,
    #[error("No cards left to draw")]
    NoCardsToDraw,
    #[error("Input was closed while waiting for a choice")]
    InputClosed,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = UnoError> = std::result::Result<T, E>;
