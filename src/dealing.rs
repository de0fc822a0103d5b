//! Moving cards between the deck and hands.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::Hand;

/// Deals `cards_each` cards to every hand, one card per hand per round.
///
/// # Errors
///
/// Returns [`DealError::NotEnoughCards`] without touching the deck or hands if
/// the deck cannot cover the deal.
pub fn deal(deck: &mut Deck, hands: &mut [Hand], cards_each: usize) -> Result<(), DealError> {
    let needed = hands.len().saturating_mul(cards_each);
    if deck.len() < needed {
        return Err(DealError::NotEnoughCards);
    }

    for _ in 0..cards_each {
        for hand in hands.iter_mut() {
            let card = deck.pop().ok_or(DealError::NotEnoughCards)?;
            hand.add_card(card);
        }
    }

    tracing::debug!(
        hands = hands.len(),
        cards_each,
        remaining = deck.len(),
        "dealt hands"
    );
    Ok(())
}

/// Moves every card in `hand` back on top of `deck`, front card first.
///
/// Returns the number of cards returned.
pub fn return_hand_to_deck(hand: &mut Hand, deck: &mut Deck) -> usize {
    let mut returned = 0;
    while let Some(card) = hand.take_card(0) {
        deck.push(card);
        returned += 1;
    }
    returned
}

/// Moves loose cards (a trick or a won pile) back on top of `deck`.
pub(crate) fn return_cards_to_deck<I>(cards: I, deck: &mut Deck)
where
    I: IntoIterator<Item = Card>,
{
    for card in cards {
        deck.push(card);
    }
}
