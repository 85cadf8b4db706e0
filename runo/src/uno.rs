use std::mem;

use rand::{seq::SliceRandom, Rng};
use tracing::{debug, info, trace};

use crate::card::{Action, Card, CardColor, WildAction};
use crate::constants::{MAX_PLAYERS, MIN_PLAYERS};
use crate::deck::Deck;
use crate::error::{Result, UnoError};
use crate::event::{EventSink, GameEvent};
use crate::player::Player;
use crate::rules::{is_playable, legal_cards};
use crate::state::GameState;
use crate::strategy::StrategyKind;
use crate::turn::{PlayTurnResult, TurnOutcome, TurnView};

/// A match in progress. This is the only thing that mutates the [`GameState`] and the players'
/// hands once the game has started, and every card stays in exactly one of the draw pile,
/// the discard pile or a hand.
#[derive(Debug)]
pub struct Uno<R> {
    state: GameState,
    players: Vec<Player>,
    rng: R,
    events: Vec<GameEvent>,
    winner: Option<usize>,
}

fn check_player_count(count: usize) -> Result<()> {
    if count < MIN_PLAYERS {
        return Err(UnoError::NotEnoughPlayers);
    }
    if count > MAX_PLAYERS {
        return Err(UnoError::TooManyPlayers);
    }
    Ok(())
}

fn ask_color<R: Rng>(
    player: &mut Player,
    top: &Card,
    color: Option<CardColor>,
    rng: &mut R,
) -> Result<CardColor> {
    let view = TurnView {
        player: &player.name,
        hand: &player.hand,
        top,
        color,
    };
    let chosen = player.strategy.choose_color(&view, rng)?;
    debug!(player = %player.name, color = %chosen, "color chosen");
    Ok(chosen)
}

impl<R: Rng> Uno<R> {
    /// Builds a fresh deck, deals to `players` and opens the game.
    pub fn new(mut players: Vec<Player>, mut rng: R) -> Result<Self> {
        check_player_count(players.len())?;

        let mut deck = Deck::new();
        deck.deal(&mut players, &mut rng)?;

        Self::start(deck, players, rng)
    }

    /// Opens the game with already dealt `players` and the rest of the cards in `deck`.
    ///
    /// The deck is shuffled and cards are turned over until one is not a Wild Draw Four, which
    /// goes back under the pile instead. An opening plain Wild gets its color from the first
    /// player, who is asked again when its effect is applied. An opening action card or Wild
    /// takes effect before anyone plays.
    pub fn start(deck: Deck, mut players: Vec<Player>, mut rng: R) -> Result<Self> {
        check_player_count(players.len())?;

        let mut draw_pile = deck.into_cards();
        if draw_pile.iter().all(Card::is_wild_draw_four) {
            return Err(UnoError::InvalidDeck);
        }
        draw_pile.shuffle(&mut rng);

        let top = loop {
            let card = draw_pile.pop().ok_or(UnoError::InvalidDeck)?;
            if !card.is_wild_draw_four() {
                break card;
            }
            draw_pile.insert(0, card);
        };

        let color = match top.color() {
            Some(color) => color,
            None => ask_color(&mut players[0], &top, None, &mut rng)?,
        };

        info!(players = players.len(), %top, %color, "game started");

        let mut uno = Uno {
            state: GameState::new(draw_pile, top, color),
            players,
            rng,
            events: vec![GameEvent::GameStarted { top, color }],
            winner: None,
        };

        if !matches!(top, Card::Number(_, _)) {
            uno.apply_action(top)?;
            uno.end_turn()?;
        }

        Ok(uno)
    }

    /// Resolves the effect of `card`, which the current player just played.
    pub fn apply_action(&mut self, card: Card) -> Result<()> {
        match card {
            Card::Action(_, Action::Skip) => self.state.skip_next = true,
            Card::Action(_, Action::Reverse) => {
                // Reversing between two players just hands the turn back.
                if self.players.len() == 2 {
                    self.state.skip_next = true;
                } else {
                    self.state.direction = self.state.direction.reverse();
                    debug!(direction = ?self.state.direction, "direction reversed");
                }
            }
            Card::Action(_, Action::DrawTwo) => {
                self.state.pending_draw += 2;
                self.state.skip_next = true;
            }
            Card::Wild(action) => {
                let current = self.state.current_player;
                self.state.current_color = ask_color(
                    &mut self.players[current],
                    &card,
                    Some(self.state.current_color),
                    &mut self.rng,
                )?;

                if action == WildAction::WildDrawFour {
                    self.state.pending_draw += 4;
                    self.state.skip_next = true;
                }
            }
            Card::Number(_, _) => {}
        }

        Ok(())
    }

    /// Moves `card` from the current player's hand to the discard pile and applies its effect.
    pub fn play_card(&mut self, card: Card) -> Result<()> {
        let current = self.state.current_player;
        let player = &mut self.players[current];

        let hand_card_index = player
            .card_index(&card)
            .ok_or(UnoError::CardNotInHand(card))?;

        let top = self
            .state
            .top_card()
            .ok_or(UnoError::EmptyDiscardPile)?;
        if !is_playable(&card, top, self.state.current_color, &player.hand) {
            return Err(UnoError::IllegalMove(card));
        }

        player.remove_card(hand_card_index);
        self.state.discard_pile.push(card);
        if let Some(color) = card.color() {
            self.state.current_color = color;
        }
        debug!(player = %player.name, %card, "card played");

        self.apply_action(card)
    }

    /// Passes the turn on, first making the next player take any pending draw penalty.
    /// If the skip flag is set, that same player also loses their turn.
    pub fn end_turn(&mut self) -> Result<()> {
        let n = self.players.len();
        let target = self.state.next_player(n);

        let count = mem::take(&mut self.state.pending_draw);
        if count > 0 {
            for _ in 0..count {
                self.draw_card(target)?;
            }
            let player = self.players[target].name.clone();
            debug!(%player, count, "penalty drawn");
            self.events.push(GameEvent::PenaltyDrawn { player, count });
        }

        self.state.current_player = if mem::take(&mut self.state.skip_next) {
            trace!(skipped = target, "turn skipped");
            self.state.direction.step(target, n)
        } else {
            target
        };
        trace!(current_player = self.state.current_player, "turn passed");

        Ok(())
    }

    /// Gives the top card of the draw pile to the player at `player_index`, reshuffling the
    /// discard pile first if the draw pile ran out.
    pub fn draw_card(&mut self, player_index: usize) -> Result<Card> {
        if self.state.draw_pile.is_empty() {
            self.reshuffle()?;
        }

        let card = self.state.draw_pile.pop().ok_or(UnoError::NoCardsToDraw)?;
        self.players[player_index].add_card(card);

        Ok(card)
    }

    /// Shuffles everything but the top of the discard pile back into the draw pile.
    pub fn reshuffle(&mut self) -> Result<()> {
        let top = self
            .state
            .discard_pile
            .pop()
            .ok_or(UnoError::EmptyDiscardPile)?;

        let mut recycled = mem::replace(&mut self.state.discard_pile, vec![top]);
        recycled.shuffle(&mut self.rng);
        self.state.draw_pile.append(&mut recycled);

        trace!(draw_pile = self.state.draw_pile.len(), "discard pile reshuffled");

        Ok(())
    }

    /// Plays the current player's turn: a card picked by their strategy if anything is legal,
    /// otherwise a single draw that is played right away only if it happens to be legal.
    pub fn take_turn(&mut self) -> Result<TurnOutcome> {
        let current = self.state.current_player;
        let top = *self.state.top_card().ok_or(UnoError::EmptyDiscardPile)?;
        let color = self.state.current_color;

        let legal = legal_cards(&self.players[current].hand, &top, color);

        let outcome = if legal.is_empty() {
            let drawn = self.draw_card(current)?;
            let player = &self.players[current];
            debug!(player = %player.name, "nothing to play, drew a card");
            self.events.push(GameEvent::CardDrawn {
                player: player.name.clone(),
            });

            if is_playable(&drawn, &top, color, &self.players[current].hand) {
                self.play_card(drawn)?;
                TurnOutcome::DrewAndPlayed(drawn)
            } else {
                TurnOutcome::Drew(drawn)
            }
        } else {
            let player = &mut self.players[current];
            let view = TurnView {
                player: &player.name,
                hand: &player.hand,
                top: &top,
                color: Some(color),
            };
            let card = player.strategy.choose_card(&view, &legal, &mut self.rng)?;
            self.play_card(card)?;
            TurnOutcome::Played(card)
        };

        if let Some(card) = outcome.played_card() {
            self.events.push(GameEvent::CardPlayed {
                player: self.players[current].name.clone(),
                card,
                color: self.state.current_color,
            });
        }

        self.end_turn()?;

        Ok(outcome)
    }

    /// One iteration of the game loop: takes the current player's turn, then announces UNO
    /// or the win for them. Recorded events are handed to `sink` before and after the turn.
    pub fn play_turn(&mut self, sink: &mut dyn EventSink) -> Result<PlayTurnResult> {
        let current = self.state.current_player;

        let player = &self.players[current];
        if player.strategy_kind() == StrategyKind::Interactive {
            self.events.push(GameEvent::HandShown {
                player: player.name.clone(),
                hand: player.hand.clone(),
            });
        }
        // Anything a person needs to see before deciding goes out now.
        self.flush_events(sink);

        let outcome = self.take_turn()?;

        let player = &mut self.players[current];
        let uno = player.cards_count() == 1 && !player.uno_performed;
        let won = player.cards_count() == 0;
        let name = player.name.clone();

        if uno {
            player.uno();
            info!(player = %name, "UNO");
            self.events.push(GameEvent::Uno {
                player: name.clone(),
            });
        }
        if won {
            info!(player = %name, "won the game");
            self.winner = Some(current);
            self.events.push(GameEvent::Won { player: name });
        }

        self.flush_events(sink);

        Ok(PlayTurnResult {
            player: current,
            outcome,
            uno,
            won,
        })
    }

    /// Plays turns until somebody empties their hand and returns that player's index.
    pub fn run(&mut self, sink: &mut dyn EventSink) -> Result<usize> {
        if let Some(winner) = self.winner {
            return Ok(winner);
        }

        loop {
            let result = self.play_turn(sink)?;
            if result.won {
                return Ok(result.player);
            }
        }
    }

    fn flush_events(&mut self, sink: &mut dyn EventSink) {
        for event in self.events.drain(..) {
            sink.notify(&event);
        }
    }

}

impl<R> Uno<R> {
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn player_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    pub fn current_player(&self) -> usize {
        self.state.current_player
    }

    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Total number of cards in both piles and every hand.
    pub fn card_count(&self) -> usize {
        self.state.draw_pile.len()
            + self.state.discard_pile.len()
            + self.players.iter().map(Player::cards_count).sum::<usize>()
    }
}
