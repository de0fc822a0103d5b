//! Card types and deck constants.

extern crate alloc;

use alloc::string::String;
use core::fmt;

/// Number of cards in a full deck (six faces in four suits).
pub const DECK_SIZE: usize = 24;

/// Number of cards dealt to each player.
pub const HAND_SIZE: usize = 5;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All suits, in deck construction order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Spades, Self::Hearts, Self::Diamonds];

    /// Returns the color of the suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Hearts | Self::Diamonds => Color::Red,
            Self::Clubs | Self::Spades => Color::Black,
        }
    }

    /// Returns the suit's name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Hearts and diamonds.
    Red,
    /// Clubs and spades.
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Red => "RED",
            Self::Black => "BLACK",
        })
    }
}

/// Card face. Only 9 through Ace are in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Face {
    /// All faces, in deck construction order (court cards first, then numbers).
    pub const ALL: [Self; 6] = [
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
        Self::Nine,
        Self::Ten,
    ];

    /// Returns the rank value of the face (9 = Nine up to 14 = Ace).
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Nine => 9,
            Self::Ten => 10,
            Self::Jack => 11,
            Self::Queen => 12,
            Self::King => 13,
            Self::Ace => 14,
        }
    }

    /// Returns the face's name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
        }
    }
}

/// A playing card.
///
/// Only the face and suit are stored; color, rank value and display name are
/// derived from them, so they can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The face of the card.
    pub face: Face,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(face: Face, suit: Suit) -> Self {
        Self { face, suit }
    }

    /// Returns the color of the card.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    /// Returns the rank value of the card (9 through 14).
    #[must_use]
    pub const fn rank_value(&self) -> u8 {
        self.face.value()
    }

    /// Returns the card's display name, e.g. `"King of Clubs"`.
    #[must_use]
    pub fn display_name(&self) -> String {
        alloc::format!("{self}")
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.face.name(), self.suit.name())
    }
}
