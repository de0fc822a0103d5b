//! Game configuration options.

use crate::card::HAND_SIZE;

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use trickrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_players(4)
///     .with_sort_hands(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of seats at the table.
    pub players: u8,
    /// Cards dealt to each player.
    pub hand_size: u8,
    /// Whether hands are sorted by trump once trump is declared.
    pub sort_hands: bool,
    /// Whether plays that fail to follow suit are rejected.
    pub enforce_follow_suit: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            players: 2,
            hand_size: HAND_SIZE as u8,
            sort_hands: true,
            enforce_follow_suit: true,
        }
    }
}

impl GameOptions {
    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use trickrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_players(4);
    /// assert_eq!(options.players, 4);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: u8) -> Self {
        self.players = players;
        self
    }

    /// Sets the number of cards dealt to each player.
    ///
    /// # Example
    ///
    /// ```
    /// use trickrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(3);
    /// assert_eq!(options.hand_size, 3);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: u8) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets whether hands are sorted when trump is declared.
    #[must_use]
    pub const fn with_sort_hands(mut self, sort: bool) -> Self {
        self.sort_hands = sort;
        self
    }

    /// Sets whether the follow-suit rule is enforced.
    ///
    /// # Example
    ///
    /// ```
    /// use trickrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_enforce_follow_suit(false);
    /// assert!(!options.enforce_follow_suit);
    /// ```
    #[must_use]
    pub const fn with_enforce_follow_suit(mut self, enforce: bool) -> Self {
        self.enforce_follow_suit = enforce;
        self
    }
}
