//! Software command sinks.

use super::record::Record;

/// Destination for the records produced by the clip engine.
///
/// The engine calls `emit` in stream order and never reads back what it wrote.
pub trait CommandSink {
    fn emit(&mut self, record: &Record);
}

impl<S: CommandSink + ?Sized> CommandSink for &mut S {
    fn emit(&mut self, record: &Record) {
        (**self).emit(record);
    }
}

/// Portable backend: append to a growable buffer consumed by a software
/// rasterizer or a test.
#[cfg(feature = "alloc")]
impl CommandSink for alloc::vec::Vec<Record> {
    fn emit(&mut self, record: &Record) {
        self.push(*record);
    }
}

/// Bounded software sink that never allocates.
///
/// Records that do not fit are dropped and counted.
#[derive(Clone, Debug, Default)]
pub struct FixedSink<const N: usize> {
    records: heapless::Vec<Record, N>,
    dropped: usize,
}

impl<const N: usize> FixedSink<N> {
    pub fn new() -> Self {
        Self {
            records: heapless::Vec::new(),
            dropped: 0,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records that arrived after the buffer was full.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.dropped = 0;
    }
}

impl<const N: usize> CommandSink for FixedSink<N> {
    fn emit(&mut self, record: &Record) {
        if self.records.push(*record).is_err() {
            self.dropped += 1;
        }
    }
}
