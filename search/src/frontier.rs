//! Decrease-key priority queue with lazy deletion.
//!
//! Improving a state's priority pushes a fresh heap entry instead of
//! re-keying the old one. Superseded entries stay in the heap and are
//! discarded when popped, because their priority no longer matches the
//! recorded one.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

use crate::contract::Cost;

/// Recorded priority of a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    /// Discovered, not yet extracted.
    Open(Cost),
    /// Extracted; never reopened.
    Done,
}

/// A heap entry: `(priority, push order)` plus the state.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse` to get min-heap
/// behavior. Equal priorities pop in push order.
#[derive(Debug)]
struct FrontierEntry<S> {
    key: Reverse<(Cost, u64)>,
    state: S,
}

impl<S> PartialEq for FrontierEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<S> Eq for FrontierEntry<S> {}

impl<S> PartialOrd for FrontierEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for FrontierEntry<S> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Uniform cost search frontier.
///
/// Maintains:
/// - A `BinaryHeap` of entries, some of which may be stale
/// - A `HashMap` from state to its recorded priority or `Done` marker
///
/// Each state is returned by [`PriorityQueue::remove_min`] at most once.
#[derive(Debug)]
pub struct PriorityQueue<S> {
    heap: BinaryHeap<FrontierEntry<S>>,
    priorities: HashMap<S, Slot>,
    next_seq: u64,
    live: usize,
    high_water: u64,
}

impl<S: Clone + Eq + Hash> PriorityQueue<S> {
    /// Create a new empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            priorities: HashMap::new(),
            next_seq: 0,
            live: 0,
            high_water: 0,
        }
    }

    /// Insert `state` with `new_priority`, or lower its recorded priority.
    ///
    /// Returns `true` iff the queue changed: the state had no record, or
    /// `new_priority` is strictly smaller than the recorded one. Extracted
    /// states are final and always return `false`.
    pub fn update(&mut self, state: S, new_priority: Cost) -> bool {
        match self.priorities.get(&state) {
            Some(Slot::Done) => return false,
            Some(Slot::Open(old)) if new_priority >= *old => return false,
            Some(Slot::Open(_)) => {}
            None => self.live += 1,
        }
        self.priorities
            .insert(state.clone(), Slot::Open(new_priority));
        self.heap.push(FrontierEntry {
            key: Reverse((new_priority, self.next_seq)),
            state,
        });
        self.next_seq += 1;
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
        true
    }

    /// Extract the live state with the smallest recorded priority.
    ///
    /// Stale entries encountered on the way are dropped. Returns `None`
    /// once no live entries remain.
    pub fn remove_min(&mut self) -> Option<(S, Cost)> {
        while let Some(entry) = self.heap.pop() {
            let Reverse((priority, _)) = entry.key;
            match self.priorities.get_mut(&entry.state) {
                Some(slot) if *slot == Slot::Open(priority) => {
                    *slot = Slot::Done;
                    self.live -= 1;
                    return Some((entry.state, priority));
                }
                // Superseded by a lower priority, or already extracted.
                _ => {}
            }
        }
        None
    }

    /// The live recorded priority of `state`, if discovered and not extracted.
    #[must_use]
    pub fn priority(&self, state: &S) -> Option<Cost> {
        match self.priorities.get(state) {
            Some(Slot::Open(p)) => Some(*p),
            Some(Slot::Done) | None => None,
        }
    }

    /// Whether `state` has been extracted.
    #[must_use]
    pub fn is_done(&self, state: &S) -> bool {
        matches!(self.priorities.get(state), Some(Slot::Done))
    }

    /// Number of discovered states not yet extracted.
    #[must_use]
    pub fn live_len(&self) -> usize {
        self.live
    }

    /// Whether no live entries remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// High-water mark of the underlying heap, stale entries included.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

impl<S: Clone + Eq + Hash> Default for PriorityQueue<S> {
    fn default() -> Self {
        Self::new()
    }
}
