//! Round driver and state management.

use core::sync::atomic::{AtomicU8, Ordering};

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::{Card, Suit};
use crate::deck::Deck;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::Play;

mod deal;
mod play;
pub mod state;

pub use state::GameState;

/// A trick-taking game that manages the deck, hands, and trick flow.
///
/// The game owns the deck and every seat's hand and serializes access to them
/// behind locks, so it can be shared between threads. Seats are numbered from
/// 0 to `options.players - 1`.
pub struct Game {
    /// Cards not currently in a hand, trick, or won pile.
    pub deck: Mutex<Deck>,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// Hands, indexed by seat.
    pub hands: Mutex<Vec<Hand>>,
    /// Trump suit for the current round.
    trump: Mutex<Option<Suit>>,
    /// Cards played to the trick in progress.
    trick: Mutex<Vec<Play>>,
    /// Cards from completed tricks.
    taken: Mutex<Vec<Card>>,
    /// Seat that leads the trick in progress.
    leader: AtomicU8,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with a deck shuffled from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use trickrs::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::WaitingForDeal);
    /// assert_eq!(game.cards_remaining(), trickrs::DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);

        let hands = (0..options.players).map(|_| Hand::new()).collect();

        Self {
            deck: Mutex::new(deck),
            options,
            state: Mutex::new(GameState::WaitingForDeal),
            hands: Mutex::new(hands),
            trump: Mutex::new(None),
            trick: Mutex::new(Vec::new()),
            taken: Mutex::new(Vec::new()),
            leader: AtomicU8::new(0),
            rng: Mutex::new(rng),
        }
    }

    /// Replaces the deck, e.g. with a stacked one for a known deal.
    #[must_use]
    pub fn with_deck(mut self, deck: Deck) -> Self {
        *self.deck.get_mut() = deck;
        self
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns the trump suit, if one has been declared this round.
    pub fn trump(&self) -> Option<Suit> {
        *self.trump.lock()
    }

    /// Returns the seat leading the current trick.
    pub fn leader(&self) -> u8 {
        self.leader.load(Ordering::SeqCst)
    }

    /// Returns the seat whose turn it is to play.
    ///
    /// Returns `None` outside the playing phase or when there are no seats.
    pub fn current_player(&self) -> Option<u8> {
        if *self.state.lock() != GameState::Playing || self.options.players == 0 {
            return None;
        }
        let played = self.trick.lock().len();
        Some(self.seat_after(self.leader(), played))
    }

    /// Returns a copy of a seat's hand.
    pub fn get_hand(&self, player: u8) -> Option<Hand> {
        self.hands.lock().get(usize::from(player)).cloned()
    }

    /// Returns the cards played so far to the trick in progress.
    pub fn current_trick(&self) -> Vec<Play> {
        self.trick.lock().clone()
    }

    /// Returns the number of cards in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// Returns the number of cards across the deck, hands, current trick, and
    /// completed tricks. Equals [`crate::DECK_SIZE`] at all times.
    pub fn cards_in_play(&self) -> usize {
        let deck = self.deck.lock().len();
        let trick = self.trick.lock().len();
        let hands: usize = self.hands.lock().iter().map(Hand::len).sum();
        let taken = self.taken.lock().len();
        deck + trick + hands + taken
    }

    fn seat_after(&self, seat: u8, steps: usize) -> u8 {
        let players = usize::from(self.options.players.max(1));
        ((usize::from(seat) + steps) % players) as u8
    }
}
