use strum::EnumCount;

use crate::card::{Action, CardColor};

pub(crate) const NUMBER_CARDS_PER_COLOR: &[u8] =
    &[0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9];
pub(crate) const COPIES_OF_EACH_ACTION_PER_COLOR: u8 = 2;

pub(crate) const NUMBER_CARDS_IN_DECK: u8 = (NUMBER_CARDS_PER_COLOR.len() * CardColor::COUNT) as u8;
pub(crate) const ACTION_CARDS_IN_DECK: u8 =
    COPIES_OF_EACH_ACTION_PER_COLOR * (Action::COUNT * CardColor::COUNT) as u8;

pub(crate) const COPIES_OF_EACH_WILD_CARD: u8 = 4;
pub(crate) const WILD_CARDS_IN_DECK: u8 = COPIES_OF_EACH_WILD_CARD * 2;

pub const TOTAL_CARDS_IN_DECK: u8 = NUMBER_CARDS_IN_DECK + ACTION_CARDS_IN_DECK + WILD_CARDS_IN_DECK;

pub const HAND_SIZE: usize = 7;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;

pub(crate) const AI_NAMES: &[&str] = &[
    "Rudy",
    "Sharlene",
    "Rosalie",
    "Thomas",
    "Jimmie",
    "Gail",
    "Terri",
    "Christina",
    "Isabel",
    "Garfield",
    "Jonathon",
    "Jordan",
    "Horace",
];
