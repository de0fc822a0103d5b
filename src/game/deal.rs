use core::sync::atomic::Ordering;

use crate::card::DECK_SIZE;
use crate::dealing;
use crate::deck::Deck;
use crate::error::{DealError, ReshuffleError};

use super::{Game, GameState};

impl Game {
    /// Deals `options.hand_size` cards to every seat.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a deal, there are no
    /// seats, or the deck is too short. The deck is untouched on error.
    pub fn deal(&self) -> Result<(), DealError> {
        let mut state = self.state.lock();
        if *state != GameState::WaitingForDeal {
            return Err(DealError::InvalidState);
        }

        if self.options.players == 0 {
            return Err(DealError::NoPlayers);
        }

        let mut deck = self.deck.lock();
        let mut hands = self.hands.lock();
        dealing::deal(&mut deck, &mut hands, usize::from(self.options.hand_size))?;
        drop(hands);
        drop(deck);

        self.leader.store(0, Ordering::SeqCst);
        *state = GameState::ChoosingTrump;
        drop(state);

        Ok(())
    }

    /// Collects every card back into the deck and waits for the next deal.
    ///
    /// Cards go back in this order: the unfinished trick, each hand by seat,
    /// then the won pile. The deck is not reshuffled.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn clear_round(&self) {
        let mut state = self.state.lock();
        let mut deck = self.deck.lock();
        let mut trick = self.trick.lock();
        let mut hands = self.hands.lock();
        let mut taken = self.taken.lock();

        dealing::return_cards_to_deck(trick.drain(..).map(|play| play.card), &mut deck);
        for hand in hands.iter_mut() {
            dealing::return_hand_to_deck(hand, &mut deck);
        }
        dealing::return_cards_to_deck(taken.drain(..), &mut deck);

        *self.trump.lock() = None;
        self.leader.store(0, Ordering::SeqCst);
        *state = GameState::WaitingForDeal;

        tracing::debug!(deck = deck.len(), "round cleared");
    }

    /// Rebuilds and reshuffles the deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a deal or cards are still
    /// out of the deck.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn reshuffle(&self) -> Result<(), ReshuffleError> {
        let state = self.state.lock();
        if *state != GameState::WaitingForDeal {
            return Err(ReshuffleError::InvalidState);
        }

        let mut deck = self.deck.lock();
        if deck.len() != DECK_SIZE {
            return Err(ReshuffleError::CardsOutstanding);
        }

        let mut rng = self.rng.lock();
        *deck = Deck::new();
        deck.shuffle(&mut *rng);

        tracing::debug!("deck reshuffled");
        Ok(())
    }
}
