//! Trick rules: following suit and deciding who takes a trick.
//!
//! These functions are pure. They read a hand but never change it; taking the
//! played card out of the hand is the caller's job.

use crate::card::{Card, Suit};
use crate::hand::Hand;

/// Returns whether `candidate` may be played from `hand` after `lead`.
///
/// A player must follow the lead suit if they hold any card of it; otherwise
/// any card is legal, trump included. `candidate` does not have to be in
/// `hand`, so check membership separately if needed.
#[must_use]
pub fn is_legal_move(hand: &Hand, lead: Card, candidate: Card) -> bool {
    candidate.suit == lead.suit || !hand.has_suit(lead.suit)
}

/// Returns `true` if `lead` beats `followed` under `trump`.
///
/// Same suit: the strictly higher rank wins and the lead wins ties. Otherwise
/// the follower wins only by playing trump.
#[must_use]
pub fn who_won(lead: Card, followed: Card, trump: Suit) -> bool {
    if followed.suit == lead.suit {
        lead.rank_value() >= followed.rank_value()
    } else {
        followed.suit != trump
    }
}

/// Returns the index of the card that takes a trick.
///
/// `cards` are in play order, so `cards[0]` is the lead. Each card is judged
/// against the best card so far with [`who_won`]. Returns `None` for an empty
/// trick.
#[must_use]
pub fn trick_winner(cards: &[Card], trump: Suit) -> Option<usize> {
    let (first, rest) = cards.split_first()?;
    let mut winner = 0;
    let mut best = *first;

    for (offset, &card) in rest.iter().enumerate() {
        if !who_won(best, card, trump) {
            winner = offset + 1;
            best = card;
        }
    }

    Some(winner)
}
