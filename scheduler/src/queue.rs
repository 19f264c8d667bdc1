use std::collections::vec_deque::{Drain, Iter};
use std::collections::VecDeque;

use crate::{Pcb, Process};

/// An ordered process queue.
///
/// Records are always appended at the tail, so iteration order is
/// insertion order. The simulator uses one of these for every
/// pending state (arriving, ready, blocked, finished).
#[derive(Debug, Default)]
pub struct ProcessQueue {
    items: VecDeque<Pcb>,
}

impl ProcessQueue {
    pub fn new() -> Self {
        ProcessQueue {
            items: VecDeque::new(),
        }
    }

    /// Append `pcb` at the tail.
    pub fn push(&mut self, pcb: Pcb) {
        self.items.push_back(pcb);
    }

    /// Remove and return the head, or `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<Pcb> {
        self.items.pop_front()
    }

    /// Extract every record matching `predicate`.
    ///
    /// Both the extracted records and the ones left behind keep
    /// their relative order.
    pub fn remove_where<F>(&mut self, mut predicate: F) -> Vec<Pcb>
    where
        F: FnMut(&Pcb) -> bool,
    {
        let mut removed = Vec::new();
        let mut kept = VecDeque::with_capacity(self.items.len());
        for pcb in self.items.drain(..) {
            if predicate(&pcb) {
                removed.push(pcb);
            } else {
                kept.push_back(pcb);
            }
        }
        self.items = kept;
        removed
    }

    /// Position of the first record with the smallest remaining time.
    fn shortest_position(&self) -> Option<usize> {
        let mut shortest: Option<(usize, usize)> = None;
        for (index, pcb) in self.items.iter().enumerate() {
            match shortest {
                Some((_, remaining)) if pcb.remaining() >= remaining => {}
                _ => shortest = Some((index, pcb.remaining())),
            }
        }
        shortest.map(|(index, _)| index)
    }

    /// Remove and return the record with the smallest remaining time.
    ///
    /// Ties go to the record closest to the head.
    pub fn take_shortest(&mut self) -> Option<Pcb> {
        let index = self.shortest_position()?;
        self.items.remove(index)
    }

    /// The smallest remaining time in the queue, without removing anything.
    pub fn shortest_remaining(&self) -> Option<usize> {
        self.items.iter().map(Process::remaining).min()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Pcb> {
        self.items.iter()
    }

    pub fn drain(&mut self) -> Drain<'_, Pcb> {
        self.items.drain(..)
    }
}
