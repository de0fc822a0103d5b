//! The draw pile.

extern crate alloc;

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Face, Suit};

/// A stack of cards. The top of the deck is the end of the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full, unshuffled deck with one card per suit and face.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for face in Face::ALL {
                cards.push(Card::new(face, suit));
            }
        }
        Self { cards }
    }

    /// Creates a deck with no cards in it.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a full deck shuffled with the given seed.
    #[must_use]
    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut deck = Self::new();
        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        deck
    }

    /// Shuffles the deck in place.
    pub fn shuffle<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Puts a card on top of the deck.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the top card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Card>> for Deck {
    /// Builds a deck from cards listed bottom first.
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
