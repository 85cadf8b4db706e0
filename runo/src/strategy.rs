//! Decision strategies: who picks the card and the color on a player's turn.
//!
//! Every strategy only sees what the player could see at the table (see [`TurnView`]) and
//! the list of legal cards the engine already filtered. None of the automated ones keep
//! memory between calls.

use std::fmt::Debug;

use rand::{
    seq::{IteratorRandom, SliceRandom},
    Rng, RngCore,
};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::card::{Card, CardColor};
use crate::error::Result;
use crate::turn::TurnView;

#[derive(Clone, Copy, Debug, Display, EnumIter, PartialEq, Eq)]
pub enum StrategyKind {
    Interactive,
    Random,
    Simple,
    Smart,
}

impl StrategyKind {
    pub fn is_automated(&self) -> bool {
        !matches!(self, StrategyKind::Interactive)
    }

    /// Picks one of the automated kinds uniformly.
    pub fn random_automated<R: Rng + ?Sized>(rng: &mut R) -> Self {
        StrategyKind::iter()
            .filter(StrategyKind::is_automated)
            .choose(rng)
            .unwrap_or(StrategyKind::Random)
    }

    /// Builds the automated strategy of this kind. Interactive players need an input
    /// channel, so they fall back to [`RandomStrategy`] here.
    pub fn into_strategy(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Simple => Box::new(SimpleStrategy),
            StrategyKind::Smart => Box::new(SmartStrategy),
            StrategyKind::Random | StrategyKind::Interactive => Box::new(RandomStrategy),
        }
    }
}

pub trait Strategy: Debug {
    fn kind(&self) -> StrategyKind;

    /// Must return one of `legal`, which the engine guarantees is non-empty.
    fn choose_card(
        &mut self,
        view: &TurnView<'_>,
        legal: &[Card],
        rng: &mut dyn RngCore,
    ) -> Result<Card>;

    fn choose_color(&mut self, view: &TurnView<'_>, rng: &mut dyn RngCore) -> Result<CardColor>;
}

fn random_color(rng: &mut dyn RngCore) -> CardColor {
    CardColor::iter().choose(rng).unwrap_or(CardColor::Red)
}

/// The color with the most number and action cards in `hand`. Ties go to the color seen first.
pub fn most_common_color(hand: &[Card]) -> Option<CardColor> {
    let mut counts: Vec<(CardColor, usize)> = Vec::with_capacity(4);

    for color in hand.iter().filter_map(Card::color) {
        match counts.iter_mut().find(|(c, _)| *c == color) {
            Some((_, count)) => *count += 1,
            None => counts.push((color, 1)),
        }
    }

    counts
        .into_iter()
        .fold(None, |best: Option<(CardColor, usize)>, (color, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((color, count)),
        })
        .map(|(color, _)| color)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Random
    }

    fn choose_card(
        &mut self,
        _view: &TurnView<'_>,
        legal: &[Card],
        rng: &mut dyn RngCore,
    ) -> Result<Card> {
        Ok(*legal.choose(rng).unwrap_or(&legal[0]))
    }

    fn choose_color(&mut self, _view: &TurnView<'_>, rng: &mut dyn RngCore) -> Result<CardColor> {
        Ok(random_color(rng))
    }
}

/// Holds wilds back: plays an action card if it can, then any other colored card.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleStrategy;

impl Strategy for SimpleStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Simple
    }

    fn choose_card(
        &mut self,
        _view: &TurnView<'_>,
        legal: &[Card],
        _rng: &mut dyn RngCore,
    ) -> Result<Card> {
        let non_wild: Vec<&Card> = legal.iter().filter(|c| !c.is_wild()).collect();

        let card = non_wild
            .iter()
            .find(|c| c.is_action())
            .or(non_wild.first())
            .copied()
            .unwrap_or(&legal[0]);

        Ok(*card)
    }

    fn choose_color(&mut self, view: &TurnView<'_>, rng: &mut dyn RngCore) -> Result<CardColor> {
        Ok(most_common_color(view.hand).unwrap_or_else(|| random_color(rng)))
    }
}

/// Leads with action cards, wilds only as a last resort.
#[derive(Debug, Default, Clone, Copy)]
pub struct SmartStrategy;

impl Strategy for SmartStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Smart
    }

    fn choose_card(
        &mut self,
        _view: &TurnView<'_>,
        legal: &[Card],
        _rng: &mut dyn RngCore,
    ) -> Result<Card> {
        let card = legal
            .iter()
            .find(|c| c.is_action())
            .or_else(|| legal.iter().find(|c| !c.is_wild()))
            .unwrap_or(&legal[0]);

        Ok(*card)
    }

    fn choose_color(&mut self, view: &TurnView<'_>, rng: &mut dyn RngCore) -> Result<CardColor> {
        Ok(most_common_color(view.hand).unwrap_or_else(|| random_color(rng)))
    }
}
