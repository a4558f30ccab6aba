//! Sliding vertex window over the strip being clipped.

use crate::gpu::record::Record;

/// Ring capacity. One slot stays free so `head == tail` always means empty.
pub const CAPACITY: usize = 4;

/// Bounded ring buffer holding the most recent vertices of the current strip.
///
/// The three oldest entries form "the current triangle" once the window is
/// full.
#[derive(Clone, Debug, Default)]
pub struct ClipWindow {
    slots: [Record; CAPACITY],
    head: usize,
    tail: usize,
}

impl ClipWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        (self.tail + CAPACITY - self.head) % CAPACITY
    }

    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Append a vertex at the newest end.
    pub fn push(&mut self, v: Record) {
        debug_assert!(self.len() < CAPACITY - 1, "clip window overflow");
        self.slots[self.tail] = v;
        self.tail = (self.tail + 1) % CAPACITY;
    }

    /// Drop the oldest vertex.
    pub fn pop_front(&mut self) {
        if !self.is_empty() {
            self.head = (self.head + 1) % CAPACITY;
        }
    }

    /// Vertex `i` positions from the oldest end.
    pub fn get(&self, i: usize) -> &Record {
        debug_assert!(i < self.len());
        &self.slots[(self.head + i) % CAPACITY]
    }

    /// Overwrite vertex `i` positions from the oldest end.
    pub fn replace(&mut self, i: usize, v: Record) {
        debug_assert!(i < self.len());
        self.slots[(self.head + i) % CAPACITY] = v;
    }

    /// The current triangle, oldest first.
    pub fn triangle(&self) -> [Record; 3] {
        [*self.get(0), *self.get(1), *self.get(2)]
    }

    pub fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
    }
}
