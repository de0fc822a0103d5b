//! Property tests for hand structure, sorting, and dealing.

use std::cmp::Reverse;

use proptest::prelude::*;
use trickrs::dealing::{deal, return_hand_to_deck};
use trickrs::{Card, DECK_SIZE, Deck, Face, Hand, Suit};

#[derive(Debug, Clone)]
enum Op {
    Add(Card),
    Remove(Card),
    Take(usize),
    Swap(usize),
}

fn any_card() -> impl Strategy<Value = Card> {
    (0..Face::ALL.len(), 0..Suit::ALL.len())
        .prop_map(|(face, suit)| Card::new(Face::ALL[face], Suit::ALL[suit]))
}

fn any_suit() -> impl Strategy<Value = Suit> {
    (0..Suit::ALL.len()).prop_map(|suit| Suit::ALL[suit])
}

fn any_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any_card().prop_map(Op::Add),
        1 => any_card().prop_map(Op::Remove),
        1 => (0..10usize).prop_map(Op::Take),
        2 => (0..10usize).prop_map(Op::Swap),
    ]
}

fn walk_backward(hand: &Hand) -> Vec<Card> {
    let mut cards = Vec::new();
    let mut node = hand.last();
    while let Some(current) = node {
        cards.push(current.card());
        node = current.prev();
    }
    cards.reverse();
    cards
}

fn cards_held(deck: &Deck, hands: &[Hand]) -> usize {
    deck.len() + hands.iter().map(Hand::len).sum::<usize>()
}

proptest! {
    /// Any sequence of mutations leaves a chain that matches a plain vector
    /// model and reads the same in both directions.
    #[test]
    fn prop_chain_matches_model(ops in proptest::collection::vec(any_op(), 0..60)) {
        let mut hand = Hand::new();
        let mut model: Vec<Card> = Vec::new();

        for op in ops {
            match op {
                Op::Add(card) => {
                    hand.add_card(card);
                    model.insert(0, card);
                }
                Op::Remove(card) => {
                    let expected = model
                        .iter()
                        .position(|&held| held == card)
                        .map(|index| model.remove(index));
                    prop_assert_eq!(hand.remove_card(card), expected);
                }
                Op::Take(index) => {
                    let expected = (index < model.len()).then(|| model.remove(index));
                    prop_assert_eq!(hand.take_card(index), expected);
                }
                Op::Swap(index) => {
                    hand.swap_with_next(index);
                    if index + 1 < model.len() {
                        model.swap(index, index + 1);
                    }
                }
            }

            prop_assert_eq!(hand.cards(), model.clone());
            prop_assert_eq!(walk_backward(&hand), model.clone());
            prop_assert_eq!(hand.len(), model.len());
            prop_assert_eq!(hand.is_empty(), model.is_empty());
        }
    }

    /// Swapping the same position twice restores the original order.
    #[test]
    fn prop_swap_is_self_inverse(
        cards in proptest::collection::vec(any_card(), 2..10),
        index in 0..9usize,
    ) {
        let mut hand: Hand = cards.into_iter().collect();
        let before = hand.clone();
        hand.swap_with_next(index);
        hand.swap_with_next(index);
        prop_assert_eq!(hand, before);
    }

    /// Sorting by trump equals a stable sort on (not trump, descending rank).
    #[test]
    fn prop_sort_is_stable_trump_first(
        cards in proptest::collection::vec(any_card(), 0..10),
        trump in any_suit(),
    ) {
        let mut hand: Hand = cards.into_iter().collect();
        let mut expected = hand.cards();
        expected.sort_by_key(|card| (card.suit != trump, Reverse(card.rank_value())));

        hand.sort_by_trump(trump);
        prop_assert_eq!(hand.cards(), expected.clone());
        prop_assert_eq!(walk_backward(&hand), expected);
    }

    /// Cards are neither created nor lost moving between deck and hands.
    #[test]
    fn prop_deal_and_return_conserve_cards(
        seed in any::<u64>(),
        players in 1..5usize,
        cards_each in 0..7usize,
        returns in proptest::collection::vec(0..5usize, 0..5),
    ) {
        let mut deck = Deck::shuffled_with_seed(seed);
        let mut hands = vec![Hand::new(); players];
        let dealt = deal(&mut deck, &mut hands, cards_each).is_ok();
        prop_assert_eq!(dealt, players * cards_each <= DECK_SIZE);
        prop_assert_eq!(cards_held(&deck, &hands), DECK_SIZE);

        for seat in returns {
            if let Some(hand) = hands.get_mut(seat) {
                return_hand_to_deck(hand, &mut deck);
                prop_assert!(hand.is_empty());
            }
            prop_assert_eq!(cards_held(&deck, &hands), DECK_SIZE);
        }
    }
}
