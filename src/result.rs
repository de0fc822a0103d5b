//! Trick result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// A card played into a trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Play {
    /// The seat that played the card.
    pub player: u8,
    /// The card played.
    pub card: Card,
}

/// Result of a completed trick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrickResult {
    /// The seat that took the trick and leads the next one.
    pub winner: u8,
    /// The card that took the trick.
    pub winning_card: Card,
    /// Cards in play order; the first entry is the lead.
    pub plays: Vec<Play>,
}
