use core::sync::atomic::Ordering;

use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::error::{PlayError, TrumpError};
use crate::hand::Hand;
use crate::result::{Play, TrickResult};
use crate::rules;

use super::{Game, GameState};

impl Game {
    /// Names the trump suit and starts trick play. Seat 0 leads first.
    ///
    /// Hands are sorted by the new trump when `options.sort_hands` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if hands have not just been dealt.
    pub fn declare_trump(&self, suit: Suit) -> Result<(), TrumpError> {
        let mut state = self.state.lock();
        if *state != GameState::ChoosingTrump {
            return Err(TrumpError::InvalidState);
        }

        let mut hands = self.hands.lock();
        if self.options.sort_hands {
            for hand in hands.iter_mut() {
                hand.sort_by_trump(suit);
            }
        }
        let nothing_to_play = hands.iter().all(Hand::is_empty);
        drop(hands);

        *self.trump.lock() = Some(suit);
        *state = if nothing_to_play {
            GameState::RoundOver
        } else {
            GameState::Playing
        };
        drop(state);

        tracing::debug!(%suit, "trump declared");
        Ok(())
    }

    /// Plays `card` from `player`'s hand to the current trick.
    ///
    /// Returns the trick result once every seat has played, otherwise `None`.
    /// The trick winner leads next. After the last trick the game moves to
    /// [`GameState::RoundOver`].
    ///
    /// # Errors
    ///
    /// Returns an error if tricks are not being played, the seat does not exist
    /// or is out of turn, the card is not in the hand, or the card fails to
    /// follow suit while the rule is enforced.
    pub fn play(&self, player: u8, card: Card) -> Result<Option<TrickResult>, PlayError> {
        let mut state = self.state.lock();
        if *state != GameState::Playing {
            return Err(PlayError::InvalidState);
        }

        if player >= self.options.players {
            return Err(PlayError::PlayerNotFound);
        }

        let trump = (*self.trump.lock()).ok_or(PlayError::InvalidState)?;

        let mut trick = self.trick.lock();
        if player != self.seat_after(self.leader(), trick.len()) {
            return Err(PlayError::NotYourTurn);
        }

        let mut hands = self.hands.lock();
        let hand = hands
            .get_mut(usize::from(player))
            .ok_or(PlayError::PlayerNotFound)?;

        if !hand.contains(card) {
            return Err(PlayError::CardNotInHand);
        }

        if self.options.enforce_follow_suit {
            if let Some(lead) = trick.first() {
                if !rules::is_legal_move(hand, lead.card, card) {
                    return Err(PlayError::MustFollowSuit);
                }
            }
        }

        let card = hand.remove_card(card).ok_or(PlayError::CardNotInHand)?;
        trick.push(Play { player, card });
        tracing::trace!(player, %card, "card played");

        if trick.len() < usize::from(self.options.players) {
            return Ok(None);
        }

        let cards: Vec<Card> = trick.iter().map(|play| play.card).collect();
        let index = rules::trick_winner(&cards, trump).ok_or(PlayError::InvalidState)?;
        let winner = trick[index].player;
        let plays = core::mem::take(&mut *trick);
        drop(trick);

        self.taken.lock().extend(cards);
        self.leader.store(winner, Ordering::SeqCst);

        if hands.iter().all(Hand::is_empty) {
            *state = GameState::RoundOver;
            tracing::debug!("round over");
        }
        drop(hands);
        drop(state);

        let winning_card = plays[index].card;
        tracing::debug!(winner, %winning_card, "trick taken");

        Ok(Some(TrickResult {
            winner,
            winning_card,
            plays,
        }))
    }

    /// Returns the cards `player` may legally play right now.
    ///
    /// With no trick in progress, or when the follow-suit rule is off, every
    /// card in the hand is legal. Returns an empty list for unknown seats.
    pub fn legal_cards(&self, player: u8) -> Vec<Card> {
        let lead = self.trick.lock().first().map(|play| play.card);
        let hands = self.hands.lock();
        let Some(hand) = hands.get(usize::from(player)) else {
            return Vec::new();
        };

        match lead {
            Some(lead) if self.options.enforce_follow_suit => hand
                .iter()
                .filter(|&card| rules::is_legal_move(hand, lead, card))
                .collect(),
            _ => hand.cards(),
        }
    }
}
