//! Game state types.

/// Phase of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// All cards are in the deck; waiting for the deal.
    WaitingForDeal,
    /// Hands are dealt; waiting for trump to be named.
    ChoosingTrump,
    /// Tricks are being played.
    Playing,
    /// Every hand is empty; the round can be cleared.
    RoundOver,
}
