use crate::card::{Card, CardColor};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn reverse(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// The seat next to `index` at a table of `players`.
    pub fn step(self, index: usize, players: usize) -> usize {
        match self {
            Direction::Clockwise => (index + 1) % players,
            Direction::CounterClockwise => (index + players - 1) % players,
        }
    }
}

/// The match in progress. Only [`Uno`](crate::uno::Uno) mutates it during play.
///
/// Both piles are stacks: the last element of `draw_pile` is drawn next and the last element of
/// `discard_pile` is the card on top. Once the game has started the discard pile is never empty.
#[derive(Clone, Debug)]
pub struct GameState {
    pub draw_pile: Vec<Card>,
    pub discard_pile: Vec<Card>,
    pub current_player: usize,
    pub direction: Direction,
    pub current_color: CardColor,
    pub pending_draw: usize,
    pub skip_next: bool,
}

impl GameState {
    pub fn new(draw_pile: Vec<Card>, top: Card, current_color: CardColor) -> Self {
        Self {
            draw_pile,
            discard_pile: vec![top],
            current_player: 0,
            direction: Direction::default(),
            current_color,
            pending_draw: 0,
            skip_next: false,
        }
    }

    pub fn top_card(&self) -> Option<&Card> {
        self.discard_pile.last()
    }

    pub fn next_player(&self, players: usize) -> usize {
        self.direction.step(self.current_player, players)
    }
}
