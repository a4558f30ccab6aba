//! Hardware submission path: records go out as 32-byte store-queue bursts.
//!
//! Generic over `StoreQueue` so the same emitter drives the real device
//! mapping or an in-memory capture.

use tagl_hal::{StoreQueue, BURST_WORDS};

use super::record::Record;
use super::sink::CommandSink;

/// Number of hardware store queues the emitter alternates between.
pub const QUEUE_COUNT: u8 = 2;

/// Emits each record as one burst, alternating store queues so one can be
/// filled while the other writes back.
pub struct StoreQueueSink<Q: StoreQueue> {
    queue: Q,
    /// Queue that receives the next burst.
    next: u8,
    bursts: usize,
}

impl<Q: StoreQueue> StoreQueueSink<Q> {
    pub fn new(queue: Q) -> Self {
        Self {
            queue,
            next: 0,
            bursts: 0,
        }
    }

    /// Number of bursts issued since creation.
    pub fn bursts(&self) -> usize {
        self.bursts
    }

    /// Drain both queues and hand back the underlying transport.
    pub fn finish(mut self) -> Q {
        self.queue.drain();
        self.queue
    }
}

impl<Q: StoreQueue> CommandSink for StoreQueueSink<Q> {
    fn emit(&mut self, record: &Record) {
        self.queue.burst(self.next, &record.to_words());
        self.next = (self.next + 1) % QUEUE_COUNT;
        self.bursts += 1;
    }
}

/// In-memory `StoreQueue` that keeps every burst in issue order.
///
/// Stands in for the device FIFO when emulating the hardware path. Bursts
/// past capacity are dropped and counted.
#[derive(Clone, Debug, Default)]
pub struct BurstLog<const N: usize> {
    bursts: heapless::Vec<[u32; BURST_WORDS], N>,
    dropped: usize,
    drains: usize,
}

impl<const N: usize> BurstLog<N> {
    pub fn new() -> Self {
        Self {
            bursts: heapless::Vec::new(),
            dropped: 0,
            drains: 0,
        }
    }

    pub fn bursts(&self) -> &[[u32; BURST_WORDS]] {
        &self.bursts
    }

    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Number of times the queues were drained.
    pub fn drains(&self) -> usize {
        self.drains
    }

    /// Decode the captured bursts back into records.
    pub fn records(&self) -> impl Iterator<Item = Record> + '_ {
        self.bursts.iter().map(Record::from_words)
    }
}

impl<const N: usize> StoreQueue for BurstLog<N> {
    fn burst(&mut self, _queue: u8, words: &[u32; BURST_WORDS]) {
        if self.bursts.push(*words).is_err() {
            self.dropped += 1;
        }
    }

    fn drain(&mut self) {
        self.drains += 1;
    }
}
