//! The rules of UNO: the deck, dealing, who plays when, which cards are legal and what action
//! cards do. Decisions are made by pluggable [`strategy::Strategy`] implementations, anything
//! worth showing to people is reported as [`event::GameEvent`]s.

pub mod card;
pub mod constants;
pub mod deck;
pub mod error;
pub mod event;
pub mod interactive;
pub mod player;
pub mod rules;
pub mod state;
pub mod strategy;
pub mod turn;
pub mod uno;
