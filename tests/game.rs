//! Game integration tests.

use trickrs::{
    Card, DECK_SIZE, DealError, Deck, Face, Game, GameOptions, GameState, PlayError,
    ReshuffleError, Suit, TrumpError,
};

const fn card(face: Face, suit: Suit) -> Card {
    Card::new(face, suit)
}

/// Builds a full deck whose top cards come off in `draws` order.
fn stacked_deck(draws: &[Card]) -> Deck {
    let mut cards: Vec<Card> = Deck::new()
        .cards()
        .iter()
        .copied()
        .filter(|card| !draws.contains(card))
        .collect();
    cards.extend(draws.iter().rev());
    Deck::from(cards)
}

fn two_card_game(options: GameOptions) -> Game {
    let deck = stacked_deck(&[
        card(Face::Ace, Suit::Clubs),     // seat 0
        card(Face::Nine, Suit::Clubs),    // seat 1
        card(Face::Ten, Suit::Hearts),    // seat 0
        card(Face::King, Suit::Diamonds), // seat 1
    ]);
    Game::new(options.with_hand_size(2), 3).with_deck(deck)
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_players(4)
        .with_hand_size(3)
        .with_sort_hands(false)
        .with_enforce_follow_suit(false);

    assert_eq!(options.players, 4);
    assert_eq!(options.hand_size, 3);
    assert!(!options.sort_hands);
    assert!(!options.enforce_follow_suit);

    let defaults = GameOptions::default();
    assert_eq!(defaults.players, 2);
    assert_eq!(usize::from(defaults.hand_size), trickrs::HAND_SIZE);
}

#[test]
fn deal_fills_hands_and_sorts_on_trump() {
    let game = two_card_game(GameOptions::default());
    game.deal().unwrap();

    assert_eq!(game.state(), GameState::ChoosingTrump);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 4);
    assert_eq!(
        game.get_hand(0).unwrap().cards(),
        vec![card(Face::Ten, Suit::Hearts), card(Face::Ace, Suit::Clubs)]
    );

    game.declare_trump(Suit::Diamonds).unwrap();
    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(game.trump(), Some(Suit::Diamonds));
    assert_eq!(
        game.get_hand(0).unwrap().cards(),
        vec![card(Face::Ace, Suit::Clubs), card(Face::Ten, Suit::Hearts)]
    );
    assert_eq!(
        game.get_hand(1).unwrap().cards(),
        vec![card(Face::King, Suit::Diamonds), card(Face::Nine, Suit::Clubs)]
    );
}

#[test]
fn basic_round_flow() {
    let game = two_card_game(GameOptions::default());
    game.deal().unwrap();
    game.declare_trump(Suit::Diamonds).unwrap();

    assert_eq!(game.current_player(), Some(0));
    assert_eq!(
        game.play(1, card(Face::Nine, Suit::Clubs)).unwrap_err(),
        PlayError::NotYourTurn
    );

    assert_eq!(game.play(0, card(Face::Ace, Suit::Clubs)).unwrap(), None);
    assert_eq!(game.current_player(), Some(1));
    assert_eq!(game.current_trick().len(), 1);

    assert_eq!(
        game.play(1, card(Face::King, Suit::Diamonds)).unwrap_err(),
        PlayError::MustFollowSuit
    );
    assert_eq!(game.legal_cards(1), vec![card(Face::Nine, Suit::Clubs)]);

    let first = game
        .play(1, card(Face::Nine, Suit::Clubs))
        .unwrap()
        .unwrap();
    assert_eq!(first.winner, 0);
    assert_eq!(first.winning_card, card(Face::Ace, Suit::Clubs));
    assert_eq!(first.plays.len(), 2);
    assert!(game.current_trick().is_empty());
    assert_eq!(game.cards_in_play(), DECK_SIZE);

    assert_eq!(game.current_player(), Some(0));
    game.play(0, card(Face::Ten, Suit::Hearts)).unwrap();
    let second = game
        .play(1, card(Face::King, Suit::Diamonds))
        .unwrap()
        .unwrap();
    assert_eq!(second.winner, 1);
    assert_eq!(second.plays[0].player, 0);

    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.current_player(), None);
    assert_eq!(game.cards_in_play(), DECK_SIZE);

    game.clear_round();
    assert_eq!(game.state(), GameState::WaitingForDeal);
    assert_eq!(game.cards_remaining(), DECK_SIZE);
    assert_eq!(game.trump(), None);
    assert!(game.get_hand(0).unwrap().is_empty());
    game.reshuffle().unwrap();
    assert_eq!(game.cards_remaining(), DECK_SIZE);
}

#[test]
fn trick_winner_leads_next() {
    let deck = stacked_deck(&[
        card(Face::Nine, Suit::Spades), // seat 0
        card(Face::Ace, Suit::Spades),  // seat 1
        card(Face::Ten, Suit::Hearts),  // seat 0
        card(Face::Jack, Suit::Hearts), // seat 1
    ]);
    let game = Game::new(GameOptions::default().with_hand_size(2), 1).with_deck(deck);
    game.deal().unwrap();
    game.declare_trump(Suit::Clubs).unwrap();

    game.play(0, card(Face::Nine, Suit::Spades)).unwrap();
    let result = game.play(1, card(Face::Ace, Suit::Spades)).unwrap().unwrap();
    assert_eq!(result.winner, 1);
    assert_eq!(game.leader(), 1);
    assert_eq!(game.current_player(), Some(1));
    assert_eq!(
        game.play(0, card(Face::Ten, Suit::Hearts)).unwrap_err(),
        PlayError::NotYourTurn
    );
}

#[test]
fn follow_suit_can_be_relaxed() {
    let game = two_card_game(GameOptions::default().with_enforce_follow_suit(false));
    game.deal().unwrap();
    game.declare_trump(Suit::Diamonds).unwrap();

    game.play(0, card(Face::Ace, Suit::Clubs)).unwrap();
    assert_eq!(game.legal_cards(1).len(), 2);
    let result = game
        .play(1, card(Face::King, Suit::Diamonds))
        .unwrap()
        .unwrap();
    assert_eq!(result.winner, 1);
}

#[test]
fn unsorted_hands_keep_deal_order() {
    let game = two_card_game(GameOptions::default().with_sort_hands(false));
    game.deal().unwrap();
    game.declare_trump(Suit::Diamonds).unwrap();

    assert_eq!(
        game.get_hand(0).unwrap().cards(),
        vec![card(Face::Ten, Suit::Hearts), card(Face::Ace, Suit::Clubs)]
    );
}

#[test]
fn deal_errors() {
    let game = Game::new(GameOptions::default().with_players(0), 1);
    assert_eq!(game.deal().unwrap_err(), DealError::NoPlayers);

    let game = Game::new(GameOptions::default().with_players(5), 1);
    assert_eq!(game.deal().unwrap_err(), DealError::NotEnoughCards);
    assert_eq!(game.cards_remaining(), DECK_SIZE);
    assert_eq!(game.state(), GameState::WaitingForDeal);

    let game = Game::new(GameOptions::default(), 1);
    game.deal().unwrap();
    assert_eq!(game.deal().unwrap_err(), DealError::InvalidState);
}

#[test]
fn trump_errors() {
    let game = Game::new(GameOptions::default(), 1);
    assert_eq!(
        game.declare_trump(Suit::Hearts).unwrap_err(),
        TrumpError::InvalidState
    );

    game.deal().unwrap();
    game.declare_trump(Suit::Hearts).unwrap();
    assert_eq!(
        game.declare_trump(Suit::Spades).unwrap_err(),
        TrumpError::InvalidState
    );
}

#[test]
fn play_errors() {
    let game = two_card_game(GameOptions::default());
    assert_eq!(
        game.play(0, card(Face::Ace, Suit::Clubs)).unwrap_err(),
        PlayError::InvalidState
    );

    game.deal().unwrap();
    assert_eq!(
        game.play(0, card(Face::Ace, Suit::Clubs)).unwrap_err(),
        PlayError::InvalidState
    );

    game.declare_trump(Suit::Spades).unwrap();
    assert_eq!(
        game.play(2, card(Face::Ace, Suit::Clubs)).unwrap_err(),
        PlayError::PlayerNotFound
    );
    assert_eq!(
        game.play(0, card(Face::Queen, Suit::Spades)).unwrap_err(),
        PlayError::CardNotInHand
    );
    assert_eq!(game.get_hand(0).unwrap().len(), 2);
}

#[test]
fn reshuffle_errors() {
    let game = Game::new(GameOptions::default(), 1).with_deck(Deck::empty());
    assert_eq!(
        game.reshuffle().unwrap_err(),
        ReshuffleError::CardsOutstanding
    );

    let game = Game::new(GameOptions::default(), 1);
    game.deal().unwrap();
    assert_eq!(game.reshuffle().unwrap_err(), ReshuffleError::InvalidState);
}

#[test]
fn full_round_conserves_cards() {
    let game = Game::new(GameOptions::default().with_players(4), 2024);
    game.deal().unwrap();
    game.declare_trump(Suit::Hearts).unwrap();

    let mut tricks = 0;
    while game.state() == GameState::Playing {
        let player = game.current_player().unwrap();
        let card = game.legal_cards(player)[0];
        if game.play(player, card).unwrap().is_some() {
            tricks += 1;
        }
        assert_eq!(game.cards_in_play(), DECK_SIZE);
    }

    assert_eq!(tricks, trickrs::HAND_SIZE);
    assert_eq!(game.state(), GameState::RoundOver);

    game.clear_round();
    assert_eq!(game.cards_remaining(), DECK_SIZE);
}

#[test]
fn clear_round_mid_trick_returns_everything() {
    let game = Game::new(GameOptions::default().with_players(3), 9);
    game.deal().unwrap();
    game.declare_trump(Suit::Spades).unwrap();

    let card = game.legal_cards(0)[0];
    game.play(0, card).unwrap();

    game.clear_round();
    assert_eq!(game.cards_remaining(), DECK_SIZE);
    assert!(game.current_trick().is_empty());
    game.reshuffle().unwrap();
}
