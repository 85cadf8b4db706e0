use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use rand::RngCore;
use strum::IntoEnumIterator;
use tracing::trace;

use crate::card::{Card, CardColor};
use crate::error::{Result, UnoError};
use crate::strategy::{Strategy, StrategyKind};
use crate::turn::TurnView;

/// A human at the keyboard. Blocks the game until a valid answer comes in on `input`,
/// re-asking as many times as it takes.
pub struct InteractiveStrategy<R, W> {
    input: R,
    output: W,
    // Re-used for every answer, always cleared before reading.
    buf: String,
}

impl<R: BufRead, W: Write> InteractiveStrategy<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            buf: String::new(),
        }
    }

    fn read_answer(&mut self) -> Result<&str> {
        self.output.flush()?;
        self.buf.clear();
        if self.input.read_line(&mut self.buf)? == 0 {
            return Err(UnoError::InputClosed);
        }
        Ok(self.buf.trim())
    }
}

impl<R, W> fmt::Debug for InteractiveStrategy<R, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractiveStrategy").finish_non_exhaustive()
    }
}

impl<R: BufRead, W: Write> Strategy for InteractiveStrategy<R, W> {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Interactive
    }

    fn choose_card(
        &mut self,
        view: &TurnView<'_>,
        legal: &[Card],
        _rng: &mut dyn RngCore,
    ) -> Result<Card> {
        match view.color {
            Some(color) => writeln!(
                self.output,
                "{}, the top card is {} and the color is {color}. You can play:",
                view.player, view.top
            )?,
            None => writeln!(
                self.output,
                "{}, the top card is {}. You can play:",
                view.player, view.top
            )?,
        }
        for (index, card) in legal.iter().enumerate() {
            writeln!(self.output, "  [{index}] {card}")?;
        }

        loop {
            write!(self.output, "Choose a card by its number: ")?;
            let answer = self.read_answer()?;
            match answer.parse::<usize>().ok().and_then(|i| legal.get(i)) {
                Some(card) => return Ok(*card),
                None => {
                    trace!(answer, "rejected card choice");
                    writeln!(
                        self.output,
                        "Invalid choice, enter a number from 0 to {}.",
                        legal.len() - 1
                    )?;
                }
            }
        }
    }

    fn choose_color(&mut self, view: &TurnView<'_>, _rng: &mut dyn RngCore) -> Result<CardColor> {
        let names = CardColor::iter()
            .map(|c| c.to_string().to_lowercase())
            .collect::<Vec<_>>()
            .join("/");

        loop {
            write!(self.output, "{}, choose a color ({names}): ", view.player)?;
            let answer = self.read_answer()?;
            match CardColor::from_str(answer) {
                Ok(color) => return Ok(color),
                Err(_) => {
                    trace!(answer, "rejected color choice");
                    writeln!(self.output, "Invalid color.")?;
                }
            }
        }
    }
}
