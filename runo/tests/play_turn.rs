use std::io::Cursor;

use rand::{rngs::StdRng, RngCore, SeedableRng};

use runo::{
    card::{Action, Card, CardColor, WildAction},
    error::{Result, UnoError},
    event::GameEvent,
    interactive::InteractiveStrategy,
    player::Player,
    rules::legal_cards,
    state::Direction,
    strategy::{SmartStrategy, Strategy, StrategyKind},
    turn::{TurnOutcome, TurnView},
    uno::Uno,
};

/// Always plays the first legal card and names a fixed color.
#[derive(Debug)]
struct FirstLegal(CardColor);

impl Strategy for FirstLegal {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Simple
    }

    fn choose_card(
        &mut self,
        _view: &TurnView<'_>,
        legal: &[Card],
        _rng: &mut dyn RngCore,
    ) -> Result<Card> {
        Ok(legal[0])
    }

    fn choose_color(&mut self, _view: &TurnView<'_>, _rng: &mut dyn RngCore) -> Result<CardColor> {
        Ok(self.0)
    }
}

fn create_players(count: usize) -> Vec<Player> {
    (0..count)
        .map(|i| Player::new(format!("Player {}", i + 1), Box::new(SmartStrategy)))
        .collect()
}

/// Takes `card` out of the draw pile, or out of a hand which gets a card from the draw pile in
/// exchange, so the total stays the same.
fn take_card(uno: &mut Uno<StdRng>, card: Card) -> Card {
    if let Some(index) = uno.state().draw_pile.iter().position(|c| *c == card) {
        return uno.state_mut().draw_pile.remove(index);
    }

    let (player, index) = (0..uno.players().len())
        .find_map(|p| uno.player(p).unwrap().card_index(&card).map(|i| (p, i)))
        .expect("Card must be somewhere.");
    let replacement = uno.state_mut().draw_pile.pop().unwrap();
    uno.player_mut(player).unwrap().hand[index] = replacement;
    card
}

/// Puts `hand` into `player`'s hand, their old cards go to the bottom of the draw pile.
fn set_hand(uno: &mut Uno<StdRng>, player: usize, hand: &[Card]) {
    let mut pile = std::mem::take(&mut uno.player_mut(player).unwrap().hand);
    let state = uno.state_mut();
    pile.append(&mut state.draw_pile);
    state.draw_pile = pile;
    for card in hand {
        let card = take_card(uno, *card);
        uno.player_mut(player).unwrap().hand.push(card);
    }
}

/// Turns `top` over onto the discard pile, with its color active and seat 0 about to play.
fn set_table(uno: &mut Uno<StdRng>, top: Card) {
    let old_top = uno.state_mut().discard_pile.pop().unwrap();
    uno.state_mut().draw_pile.insert(0, old_top);
    let top = take_card(uno, top);

    let state = uno.state_mut();
    state.discard_pile.push(top);
    state.current_color = top.color().unwrap_or(CardColor::Red);
    state.current_player = 0;
    state.direction = Direction::Clockwise;
    state.pending_draw = 0;
    state.skip_next = false;
}

fn create_game(players: Vec<Player>, top: Card) -> Uno<StdRng> {
    let mut uno = Uno::new(players, StdRng::seed_from_u64(2024)).unwrap();
    set_table(&mut uno, top);
    uno
}

#[test]
fn draw_two_penalizes_and_skips_other_player() {
    let mut uno = create_game(create_players(2), Card::Number(CardColor::Green, 4));
    let draw_two = Card::Action(CardColor::Green, Action::DrawTwo);
    let card = take_card(&mut uno, draw_two);
    let old = std::mem::replace(&mut uno.player_mut(0).unwrap().hand[0], card);
    uno.state_mut().draw_pile.insert(0, old);

    let player_0_before = uno.player(0).unwrap().cards_count();
    let player_1_before = uno.player(1).unwrap().cards_count();

    uno.play_card(draw_two).unwrap();
    uno.end_turn().unwrap();

    assert_eq!(uno.player(0).unwrap().cards_count(), player_0_before - 1);
    assert_eq!(uno.player(1).unwrap().cards_count(), player_1_before + 2);
    assert_eq!(uno.current_player(), 0);
    assert_eq!(uno.state().pending_draw, 0);
    assert!(!uno.state().skip_next);
    assert_eq!(uno.state().top_card(), Some(&draw_two));
    assert_eq!(uno.card_count(), 108);
}

#[test]
fn play_turn_prefers_draw_two_and_returns_to_player() {
    let mut uno = create_game(create_players(2), Card::Number(CardColor::Green, 4));
    set_hand(
        &mut uno,
        0,
        &[
            Card::Number(CardColor::Green, 1),
            Card::Action(CardColor::Green, Action::DrawTwo),
            Card::Number(CardColor::Blue, 9),
        ],
    );
    let player_1_before = uno.player(1).unwrap().cards_count();

    let mut events = Vec::new();
    let result = uno.play_turn(&mut events).unwrap();

    assert_eq!(
        result.outcome,
        TurnOutcome::Played(Card::Action(CardColor::Green, Action::DrawTwo))
    );
    assert!(!result.won);
    assert_eq!(uno.player(1).unwrap().cards_count(), player_1_before + 2);
    assert_eq!(uno.current_player(), 0);
    assert!(events.contains(&GameEvent::PenaltyDrawn {
        player: "Player 2".to_string(),
        count: 2
    }));
    assert_eq!(uno.card_count(), 108);
}

#[test]
fn play_turn_performs_skip_properly() {
    let mut uno = create_game(create_players(4), Card::Number(CardColor::Red, 3));
    set_hand(
        &mut uno,
        0,
        &[
            Card::Action(CardColor::Red, Action::Skip),
            Card::Number(CardColor::Blue, 9),
        ],
    );

    uno.play_turn(&mut ()).unwrap();

    assert_eq!(uno.current_player(), 2);
    assert_eq!(uno.state().direction, Direction::Clockwise);
}

#[test]
fn play_turn_performs_reverse_properly() {
    let mut uno = create_game(create_players(4), Card::Number(CardColor::Red, 3));
    set_hand(
        &mut uno,
        0,
        &[
            Card::Action(CardColor::Red, Action::Reverse),
            Card::Number(CardColor::Blue, 9),
        ],
    );

    uno.play_turn(&mut ()).unwrap();

    assert_eq!(uno.state().direction, Direction::CounterClockwise);
    assert_eq!(uno.current_player(), 3);
    assert!(!uno.state().skip_next);
}

#[test]
fn reverse_with_two_players_is_a_skip() {
    let mut uno = create_game(create_players(2), Card::Number(CardColor::Red, 3));
    set_hand(
        &mut uno,
        0,
        &[
            Card::Action(CardColor::Red, Action::Reverse),
            Card::Number(CardColor::Blue, 9),
        ],
    );

    uno.play_turn(&mut ()).unwrap();

    assert_eq!(uno.state().direction, Direction::Clockwise);
    assert_eq!(uno.current_player(), 0);
}

#[test]
fn play_turn_performs_wild_properly() {
    let players = vec![
        Player::new("Player 1", Box::new(FirstLegal(CardColor::Yellow))),
        Player::new("Player 2", Box::new(SmartStrategy)),
        Player::new("Player 3", Box::new(SmartStrategy)),
    ];
    let mut uno = create_game(players, Card::Number(CardColor::Red, 3));
    set_hand(
        &mut uno,
        0,
        &[Card::Wild(WildAction::Wild), Card::Number(CardColor::Blue, 9)],
    );

    let mut events = Vec::new();
    uno.play_turn(&mut events).unwrap();

    assert_eq!(uno.state().current_color, CardColor::Yellow);
    assert_eq!(uno.current_player(), 1);
    assert!(events.contains(&GameEvent::CardPlayed {
        player: "Player 1".to_string(),
        card: Card::Wild(WildAction::Wild),
        color: CardColor::Yellow,
    }));
}

#[test]
fn play_turn_performs_wild_draw_four_properly() {
    let players = vec![
        Player::new("Player 1", Box::new(FirstLegal(CardColor::Blue))),
        Player::new("Player 2", Box::new(SmartStrategy)),
        Player::new("Player 3", Box::new(SmartStrategy)),
    ];
    let mut uno = create_game(players, Card::Number(CardColor::Red, 3));
    set_hand(
        &mut uno,
        0,
        &[
            Card::Wild(WildAction::WildDrawFour),
            Card::Number(CardColor::Blue, 9),
        ],
    );
    let next_before = uno.player(1).unwrap().cards_count();

    uno.play_turn(&mut ()).unwrap();

    assert_eq!(uno.state().current_color, CardColor::Blue);
    assert_eq!(uno.player(1).unwrap().cards_count(), next_before + 4);
    assert_eq!(uno.current_player(), 2);
}

#[test]
fn wild_draw_four_is_not_offered_when_color_can_be_followed() {
    let players = vec![
        Player::new("Player 1", Box::new(FirstLegal(CardColor::Blue))),
        Player::new("Player 2", Box::new(SmartStrategy)),
    ];
    let mut uno = create_game(players, Card::Number(CardColor::Red, 3));
    set_hand(
        &mut uno,
        0,
        &[
            Card::Wild(WildAction::WildDrawFour),
            Card::Number(CardColor::Red, 9),
        ],
    );

    let top = *uno.state().top_card().unwrap();
    let legal = legal_cards(&uno.player(0).unwrap().hand, &top, CardColor::Red);
    assert_eq!(legal, vec![Card::Number(CardColor::Red, 9)]);

    let result = uno.play_turn(&mut ()).unwrap();
    assert_eq!(
        result.outcome,
        TurnOutcome::Played(Card::Number(CardColor::Red, 9))
    );
    assert_eq!(uno.state().pending_draw, 0);
}

#[test]
fn drawn_card_is_played_only_if_legal() {
    let mut uno = create_game(create_players(2), Card::Number(CardColor::Red, 3));
    set_hand(&mut uno, 0, &[Card::Number(CardColor::Blue, 9)]);

    let legal_draw = take_card(&mut uno, Card::Number(CardColor::Red, 8));
    uno.state_mut().draw_pile.push(legal_draw);

    let result = uno.play_turn(&mut ()).unwrap();

    assert_eq!(result.outcome, TurnOutcome::DrewAndPlayed(legal_draw));
    assert_eq!(uno.player(0).unwrap().hand, vec![Card::Number(CardColor::Blue, 9)]);
    assert_eq!(uno.state().top_card(), Some(&legal_draw));
    assert_eq!(uno.current_player(), 1);
}

#[test]
fn drawn_illegal_card_is_kept() {
    let mut uno = create_game(create_players(2), Card::Number(CardColor::Red, 3));
    set_hand(&mut uno, 0, &[Card::Number(CardColor::Blue, 9)]);

    let illegal_draw = take_card(&mut uno, Card::Number(CardColor::Green, 8));
    uno.state_mut().draw_pile.push(illegal_draw);

    let mut events = Vec::new();
    let result = uno.play_turn(&mut events).unwrap();

    assert_eq!(result.outcome, TurnOutcome::Drew(illegal_draw));
    assert_eq!(uno.player(0).unwrap().cards_count(), 2);
    assert_eq!(uno.state().top_card(), Some(&Card::Number(CardColor::Red, 3)));
    assert_eq!(uno.current_player(), 1);
    assert!(!events
        .iter()
        .any(|e| matches!(e, GameEvent::CardPlayed { .. })));
}

#[test]
fn play_card_fails_if_card_not_in_hand() {
    let mut uno = create_game(create_players(4), Card::Number(CardColor::Red, 3));
    set_hand(&mut uno, 0, &[Card::Number(CardColor::Green, 1)]);

    let error = uno.play_card(Card::Number(CardColor::Red, 1)).unwrap_err();

    assert!(matches!(error, UnoError::CardNotInHand(_)));
    assert_eq!(uno.state().top_card(), Some(&Card::Number(CardColor::Red, 3)));
}

#[test]
fn reshuffle_keeps_top_card_and_every_other_card() {
    let mut uno = create_game(create_players(3), Card::Number(CardColor::Yellow, 6));
    let state = uno.state_mut();
    let top = state.discard_pile.pop().unwrap();
    let mut rest = std::mem::take(&mut state.draw_pile);
    state.discard_pile.append(&mut rest);
    state.discard_pile.push(top);
    assert!(uno.state().discard_pile.len() > 1);

    let before = uno.player(0).unwrap().cards_count();
    uno.draw_card(0).unwrap();

    assert_eq!(uno.player(0).unwrap().cards_count(), before + 1);
    assert_eq!(uno.state().discard_pile, vec![top]);
    assert_eq!(uno.card_count(), 108);
}

#[test]
fn turn_uno_is_announced_once() {
    let mut uno = create_game(create_players(2), Card::Number(CardColor::Red, 5));
    set_hand(
        &mut uno,
        0,
        &[
            Card::Number(CardColor::Red, 3),
            Card::Number(CardColor::Red, 7),
        ],
    );

    let mut events = Vec::new();
    let result = uno.play_turn(&mut events).unwrap();

    assert!(result.uno);
    assert!(!result.won);
    assert!(uno.player(0).unwrap().uno_performed);

    // Back above one card, then down to one again.
    uno.draw_card(0).unwrap();
    assert_eq!(uno.player(0).unwrap().cards_count(), 2);
    assert!(uno.player(0).unwrap().uno_performed);
    set_table(&mut uno, Card::Number(CardColor::Red, 9));
    set_hand(
        &mut uno,
        0,
        &[
            Card::Number(CardColor::Red, 3),
            Card::Number(CardColor::Red, 7),
        ],
    );

    let result = uno.play_turn(&mut events).unwrap();

    assert!(!result.uno);
    assert_eq!(uno.player(0).unwrap().cards_count(), 1);
    let announced = events
        .iter()
        .filter(|e| matches!(e, GameEvent::Uno { player } if player == "Player 1"))
        .count();
    assert_eq!(announced, 1);
    assert_eq!(uno.card_count(), 108);
}

#[test]
fn uno_is_announced_at_most_once_per_player_in_a_game() {
    for seed in 0..20 {
        let mut uno = Uno::new(create_players(2), StdRng::seed_from_u64(seed)).unwrap();
        let mut events = Vec::new();
        uno.run(&mut events).unwrap();

        for name in ["Player 1", "Player 2"] {
            let announced = events
                .iter()
                .filter(|e| matches!(e, GameEvent::Uno { player } if player == name))
                .count();
            assert!(announced <= 1, "{name} said UNO {announced} times with seed {seed}");
        }
    }
}

#[test]
fn turn_winning_works_properly() {
    let mut uno = create_game(create_players(2), Card::Number(CardColor::Red, 5));
    set_hand(
        &mut uno,
        0,
        &[
            Card::Number(CardColor::Red, 3),
            Card::Number(CardColor::Red, 7),
        ],
    );

    let result = uno.play_turn(&mut ()).unwrap();
    assert_eq!(uno.player(0).unwrap().cards_count(), 1);
    assert!(result.uno);

    // Hand the turn straight back to the first player.
    uno.state_mut().current_player = 0;

    let mut events = Vec::new();
    let winner = uno.run(&mut events).unwrap();

    assert_eq!(winner, 0);
    assert_eq!(uno.winner(), Some(0));
    assert_eq!(uno.player(0).unwrap().cards_count(), 0);
    assert_eq!(
        events.last(),
        Some(&GameEvent::Won {
            player: "Player 1".to_string()
        })
    );
}

#[test]
fn seeded_games_are_reproducible() {
    let play = |seed| {
        let mut uno = Uno::new(create_players(4), StdRng::seed_from_u64(seed)).unwrap();
        let mut events = Vec::new();
        let winner = uno.run(&mut events).unwrap();
        (winner, events)
    };

    assert_eq!(play(99), play(99));
}

#[test]
fn human_hand_is_shown_before_their_play() {
    let human = InteractiveStrategy::new(Cursor::new("5\n1\n"), Vec::new());
    let players = vec![
        Player::new("Human", Box::new(human)),
        Player::new("Player 2", Box::new(SmartStrategy)),
    ];
    let mut uno = create_game(players, Card::Number(CardColor::Red, 3));
    set_hand(
        &mut uno,
        0,
        &[
            Card::Number(CardColor::Red, 1),
            Card::Number(CardColor::Red, 2),
            Card::Number(CardColor::Blue, 9),
        ],
    );

    let mut events = Vec::new();
    let result = uno.play_turn(&mut events).unwrap();

    assert_eq!(result.outcome, TurnOutcome::Played(Card::Number(CardColor::Red, 2)));
    let shown = events
        .iter()
        .position(|e| matches!(e, GameEvent::HandShown { player, .. } if player == "Human"))
        .unwrap();
    let played = events
        .iter()
        .position(|e| matches!(e, GameEvent::CardPlayed { .. }))
        .unwrap();
    assert!(shown < played);
}

#[test]
fn automated_hands_are_not_shown() {
    let mut uno = create_game(create_players(3), Card::Number(CardColor::Red, 3));

    let mut events = Vec::new();
    for _ in 0..3 {
        uno.play_turn(&mut events).unwrap();
    }

    assert!(!events
        .iter()
        .any(|e| matches!(e, GameEvent::HandShown { .. })));
}
