use crate::card::{Card, CardColor};

/// Things that happened at the table, for whoever is watching. Sinks never affect the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    GameStarted {
        top: Card,
        color: CardColor,
    },
    HandShown {
        player: String,
        hand: Vec<Card>,
    },
    CardPlayed {
        player: String,
        card: Card,
        color: CardColor,
    },
    CardDrawn {
        player: String,
    },
    PenaltyDrawn {
        player: String,
        count: usize,
    },
    Uno {
        player: String,
    },
    Won {
        player: String,
    },
}

pub trait EventSink {
    fn notify(&mut self, event: &GameEvent);
}

impl EventSink for () {
    fn notify(&mut self, _event: &GameEvent) {}
}

/// Collects every event, mostly useful in tests.
impl EventSink for Vec<GameEvent> {
    fn notify(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}
