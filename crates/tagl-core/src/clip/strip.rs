//! Bookkeeping for the output strip currently being written.

use crate::gpu::record::Record;
use crate::gpu::sink::CommandSink;

/// Minimum vertex count of a strip the hardware will accept.
pub const MIN_STRIP_VERTICES: usize = 3;

/// Tracks the strip open in the sink: how many vertices it has and the last
/// one written, so it can be extended with degenerate duplicates or closed
/// after the fact.
#[derive(Clone, Debug, Default)]
pub struct OutputStrip {
    len: usize,
    last: Record,
}

impl OutputStrip {
    /// True while vertices have been written without a terminator.
    pub fn is_open(&self) -> bool {
        self.len > 0
    }

    /// Write a screen-space vertex, flagged as terminator when `last`.
    pub fn send<S: CommandSink + ?Sized>(&mut self, sink: &mut S, screen: Record, last: bool) {
        let record = screen.with_last(last);
        sink.emit(&record);
        self.last = record;
        self.len = if last { 0 } else { self.len + 1 };
    }

    /// Write the previous terminator again, leaving a zero-area strip tail.
    pub fn repeat_terminator<S: CommandSink + ?Sized>(&mut self, sink: &mut S) {
        debug_assert!(self.last.is_last() && !self.is_open());
        sink.emit(&self.last);
    }

    /// Terminate the open strip by repeating its last vertex, padding it to
    /// the minimum legal length. No-op when nothing is open.
    pub fn close<S: CommandSink + ?Sized>(&mut self, sink: &mut S) {
        if !self.is_open() {
            return;
        }
        let tail = self.last;
        while self.len < MIN_STRIP_VERTICES - 1 {
            self.send(sink, tail, false);
        }
        self.send(sink, tail, true);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
