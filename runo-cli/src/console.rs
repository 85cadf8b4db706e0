use std::io::Write;

use runo::event::{EventSink, GameEvent};
use tracing::warn;

/// Prints the game to a terminal.
pub struct ConsoleSink<W> {
    out: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn line(event: &GameEvent) -> String {
        match event {
            GameEvent::GameStarted { top, color } => {
                format!("The first card is {top}, the color is {color}.")
            }
            GameEvent::HandShown { hand, .. } => {
                let hand = hand
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("Your cards are: {hand}")
            }
            GameEvent::CardPlayed {
                player,
                card,
                color,
            } if card.is_wild() => format!("{player} plays {card} and picks {color}"),
            GameEvent::CardPlayed { player, card, .. } => format!("{player} plays {card}"),
            GameEvent::CardDrawn { player } => format!("{player} draws a card"),
            GameEvent::PenaltyDrawn { player, count } => format!("{player} draws {count} cards"),
            GameEvent::Uno { player } => format!("{player} says UNO!"),
            GameEvent::Won { player } => format!("{player} wins!"),
        }
    }
}

impl<W: Write> EventSink for ConsoleSink<W> {
    fn notify(&mut self, event: &GameEvent) {
        if let Err(error) = writeln!(self.out, "{}", Self::line(event)) {
            warn!(%error, "failed to print game event");
        }
    }
}
