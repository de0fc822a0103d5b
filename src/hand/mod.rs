//! Player hand representation.
//!
//! A [`Hand`] is a doubly-linked list whose nodes live in an arena owned by the
//! hand and are addressed by slot index. Removed slots go onto a free list and
//! are reused by later insertions, so unlinking and swapping are pointer
//! (index) updates and never move card payloads.

extern crate alloc;

use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::card::{Card, Suit};

mod sort;

#[derive(Debug, Clone, Copy)]
struct HandNode {
    card: Card,
    prev: Option<usize>,
    next: Option<usize>,
}

/// A player's hand.
///
/// Cards are added at the front, so index 0 is always the most recently added
/// card until the hand is reordered.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Node storage. Slots listed in `free` are unreachable from `front`.
    nodes: Vec<HandNode>,
    /// Vacant slots available for reuse.
    free: Vec<usize>,
    /// Slot of the first card.
    front: Option<usize>,
    /// Number of linked nodes.
    count: usize,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            front: None,
            count: 0,
        }
    }

    /// Adds a card to the front of the hand.
    pub fn add_card(&mut self, card: Card) {
        let node = HandNode {
            card,
            prev: None,
            next: self.front,
        };

        let slot = if let Some(slot) = self.free.pop() {
            self.nodes[slot] = node;
            slot
        } else {
            self.nodes.push(node);
            self.nodes.len() - 1
        };

        if let Some(old_front) = self.front {
            self.nodes[old_front].prev = Some(slot);
        }
        self.front = Some(slot);
        self.count += 1;
    }

    /// Removes the first card equal to `card`, scanning from the front.
    ///
    /// Returns `None` and leaves the hand unchanged if the card is not held.
    pub fn remove_card(&mut self, card: Card) -> Option<Card> {
        let slot = self.find(card)?;
        Some(self.unlink(slot))
    }

    /// Removes and returns the card at `index`.
    ///
    /// This is a destructive read; use [`Hand::card_at`] to look without
    /// removing. Returns `None` if `index` is out of range.
    pub fn take_card(&mut self, index: usize) -> Option<Card> {
        let slot = self.slot_at(index)?;
        Some(self.unlink(slot))
    }

    /// Returns the card at `index` without removing it.
    #[must_use]
    pub fn card_at(&self, index: usize) -> Option<Card> {
        self.slot_at(index).map(|slot| self.nodes[slot].card)
    }

    /// Returns whether the hand holds `card`.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.find(card).is_some()
    }

    /// Returns whether the hand holds any card of `suit`.
    #[must_use]
    pub fn has_suit(&self, suit: Suit) -> bool {
        self.iter().any(|card| card.suit == suit)
    }

    /// Swaps the card at `index` with the one after it.
    ///
    /// Does nothing if either position is out of range. Reaching `index` is a
    /// walk from the front; the swap itself relinks a fixed number of nodes.
    pub fn swap_with_next(&mut self, index: usize) {
        if let Some(slot) = self.slot_at(index) {
            self.swap_slot_with_next(slot);
        }
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    /// Removes every card from the hand.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.front = None;
        self.count = 0;
    }

    /// Returns a cursor at the first card, or `None` if the hand is empty.
    #[must_use]
    pub fn first(&self) -> Option<CardNode<'_>> {
        self.front.map(|slot| CardNode { hand: self, slot })
    }

    /// Returns a cursor at the last card, or `None` if the hand is empty.
    #[must_use]
    pub fn last(&self) -> Option<CardNode<'_>> {
        let mut node = self.first()?;
        while let Some(next) = node.next() {
            node = next;
        }
        Some(node)
    }

    /// Iterates over the cards from front to back.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            hand: self,
            cursor: self.front,
            remaining: self.count,
        }
    }

    /// Returns a copy of the cards from front to back.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.iter().collect()
    }

    fn slot_at(&self, index: usize) -> Option<usize> {
        if index >= self.count {
            return None;
        }
        let mut slot = self.front?;
        for _ in 0..index {
            slot = self.nodes[slot].next?;
        }
        Some(slot)
    }

    fn find(&self, card: Card) -> Option<usize> {
        let mut cursor = self.front;
        while let Some(slot) = cursor {
            if self.nodes[slot].card == card {
                return Some(slot);
            }
            cursor = self.nodes[slot].next;
        }
        None
    }

    fn unlink(&mut self, slot: usize) -> Card {
        let HandNode { card, prev, next } = self.nodes[slot];

        match prev {
            Some(prev) => self.nodes[prev].next = next,
            None => self.front = next,
        }
        if let Some(next) = next {
            self.nodes[next].prev = prev;
        }

        self.free.push(slot);
        self.count -= 1;
        card
    }

    /// Relinks `slot` and its successor so the successor comes first.
    /// No-op if `slot` is the last node.
    fn swap_slot_with_next(&mut self, slot: usize) {
        let Some(next) = self.nodes[slot].next else {
            return;
        };
        let before = self.nodes[slot].prev;
        let after = self.nodes[next].next;

        match before {
            Some(before) => self.nodes[before].next = Some(next),
            None => self.front = Some(next),
        }
        self.nodes[next].prev = before;
        self.nodes[next].next = Some(slot);
        self.nodes[slot].prev = Some(next);
        self.nodes[slot].next = after;
        if let Some(after) = after {
            self.nodes[after].prev = Some(slot);
        }
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl Eq for Hand {}

impl FromIterator<Card> for Hand {
    /// Adds each card in turn, so the last card yielded ends up in front.
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut hand = Self::new();
        for card in iter {
            hand.add_card(card);
        }
        hand
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = Card;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Read-only cursor on one card of a [`Hand`].
#[derive(Debug, Clone, Copy)]
pub struct CardNode<'a> {
    hand: &'a Hand,
    slot: usize,
}

impl<'a> CardNode<'a> {
    /// Returns the card at this position.
    #[must_use]
    pub fn card(&self) -> Card {
        self.hand.nodes[self.slot].card
    }

    /// Moves to the following card.
    #[must_use]
    pub fn next(&self) -> Option<CardNode<'a>> {
        self.hand.nodes[self.slot]
            .next
            .map(|slot| CardNode { hand: self.hand, slot })
    }

    /// Moves to the preceding card.
    #[must_use]
    pub fn prev(&self) -> Option<CardNode<'a>> {
        self.hand.nodes[self.slot]
            .prev
            .map(|slot| CardNode { hand: self.hand, slot })
    }
}

/// Front-to-back iterator over the cards of a [`Hand`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    hand: &'a Hand,
    cursor: Option<usize>,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        let slot = self.cursor?;
        let node = &self.hand.nodes[slot];
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.card)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
