use crate::card::{Card, Suit};

use super::Hand;

/// Whether `a` belongs strictly ahead of `b`: trump first, then higher rank.
fn outranks(a: Card, b: Card, trump: Suit) -> bool {
    let a_trump = a.suit == trump;
    let b_trump = b.suit == trump;
    if a_trump != b_trump {
        return a_trump;
    }
    a.rank_value() > b.rank_value()
}

impl Hand {
    /// Sorts the hand into play priority for the given trump suit.
    ///
    /// Trump cards come first, then the rest; each group runs from highest to
    /// lowest rank. Cards of equal rank within a group keep their previous
    /// relative order.
    ///
    /// Works by bubbling adjacent nodes with the same relink used by
    /// [`Hand::swap_with_next`], so the chain stays consistent after every
    /// step. Quadratic in the hand size.
    pub fn sort_by_trump(&mut self, trump: Suit) {
        loop {
            let mut swapped = false;
            let mut cursor = self.front;

            while let Some(slot) = cursor {
                let Some(next) = self.nodes[slot].next else {
                    break;
                };

                if outranks(self.nodes[next].card, self.nodes[slot].card, trump) {
                    // `slot` now sits after `next`; keep carrying it forward.
                    self.swap_slot_with_next(slot);
                    swapped = true;
                    cursor = Some(slot);
                } else {
                    cursor = Some(next);
                }
            }

            if !swapped {
                break;
            }
        }
    }
}
