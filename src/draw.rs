use std::collections::{HashSet, VecDeque};

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::Card;

/// Returns a uniformly-shuffled copy of `cards`. The input is left untouched.
pub fn shuffled<R: Rng>(cards: &[Card], rng: &mut R) -> Vec<Card> {
    let mut copy = cards.to_vec();
    copy.shuffle(rng);
    copy
}

/// Result of one [`draw_unique`] call.
#[derive(Debug, Clone)]
pub struct Draw {
    /// Cards accepted this call, in draw order.
    pub selected: Vec<Card>,
    /// The rest of the queue, with name-collision skips reattached at the tail.
    pub remaining: Vec<Card>,
    /// True iff exactly the requested count was accepted.
    pub complete: bool,
}

/// Draws up to `count` cards from the front of `queue`, rejecting any card
/// whose display name is already in `used_names` or among the cards accepted
/// earlier in this call.
///
/// Rejected cards are not discarded: they are set aside and appended to the
/// tail of `remaining`, so a copy skipped for a name collision stays
/// available to a later pack in which that name may not appear. The queue is
/// expected to be shuffled upstream; this function draws in order.
pub fn draw_unique(queue: Vec<Card>, count: usize, used_names: &HashSet<String>) -> Draw {
    let mut queue: VecDeque<Card> = queue.into();
    let mut selected: Vec<Card> = Vec::with_capacity(count);
    let mut deferred: Vec<Card> = Vec::new();

    while selected.len() < count {
        let Some(card) = queue.pop_front() else {
            break;
        };
        let duplicate =
            used_names.contains(&card.name) || selected.iter().any(|c| c.name == card.name);
        if duplicate {
            deferred.push(card);
        } else {
            selected.push(card);
        }
    }

    let complete = selected.len() == count;
    let mut remaining: Vec<Card> = queue.into();
    remaining.extend(deferred);

    Draw {
        selected,
        remaining,
        complete,
    }
}
