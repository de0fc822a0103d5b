//! A trick-taking card game engine with optional `no_std` support.
//!
//! The crate models a 24-card game (9 through Ace in four suits): a [`Deck`],
//! each player's [`Hand`], and the trick rules in [`rules`]. [`Game`] drives a
//! full round on top of them: dealing, declaring trump, and playing tricks.
//!
//! # Example
//!
//! ```
//! use trickrs::{Card, Face, Hand, Suit, rules};
//!
//! let mut hand = Hand::new();
//! hand.add_card(Card::new(Face::King, Suit::Clubs));
//! hand.add_card(Card::new(Face::Ten, Suit::Spades));
//!
//! let lead = Card::new(Face::Ace, Suit::Clubs);
//! assert!(!rules::is_legal_move(&hand, lead, Card::new(Face::Ten, Suit::Spades)));
//! assert!(rules::who_won(lead, Card::new(Face::King, Suit::Clubs), Suit::Hearts));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod dealing;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod rules;
mod sync;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, Face, HAND_SIZE, Suit};
pub use deck::Deck;
pub use error::{DealError, PlayError, ReshuffleError, TrumpError};
pub use game::{Game, GameState};
pub use hand::{CardNode, Hand};
pub use options::GameOptions;
pub use result::{Play, TrickResult};
