//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// The game has no seats.
    #[error("no players to deal to")]
    NoPlayers,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur when declaring trump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrumpError {
    /// Invalid game state for declaring trump.
    #[error("invalid game state for declaring trump")]
    InvalidState,
}

/// Errors that can occur when playing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Invalid game state for playing a card.
    #[error("invalid game state for playing a card")]
    InvalidState,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// The card is not in the player's hand.
    #[error("card is not in hand")]
    CardNotInHand,
    /// The player holds the lead suit and must play it.
    #[error("must follow the lead suit")]
    MustFollowSuit,
}

/// Errors that can occur during reshuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReshuffleError {
    /// Invalid game state for reshuffling.
    #[error("invalid game state for reshuffling")]
    InvalidState,
    /// Some cards are still out of the deck.
    #[error("cards are still out of the deck")]
    CardsOutstanding,
}
