#![no_std]

/// Number of 32-bit words in one store-queue burst (32 bytes).
pub const BURST_WORDS: usize = 8;

/// Abstracts the cache-bypassing, write-combining path into the tile
/// accelerator's input FIFO.
///
/// Implementations receive exactly one 32-byte block per call and must push
/// blocks to the device in the order they were issued. There is no error
/// channel: the path is fire-and-forget once the queue has been armed.
pub trait StoreQueue {
    /// Fill store queue `queue` (0 or 1) with `words` and trigger its flush.
    fn burst(&mut self, queue: u8, words: &[u32; BURST_WORDS]);

    /// Block until both queues have finished writing back.
    fn drain(&mut self);
}

/// Floating-point primitives the clipper and viewport mapping are built on.
///
/// Lets a platform swap in fused or hardware-approximated instructions
/// without the clipping algorithm knowing which one is active.
pub trait FloatOps {
    /// Return `1 / x`.
    fn reciprocal(&self, x: f32) -> f32;

    /// Return `a * b + c`.
    fn fmac(&self, a: f32, b: f32, c: f32) -> f32;
}

impl<T: FloatOps + ?Sized> FloatOps for &T {
    fn reciprocal(&self, x: f32) -> f32 {
        (**self).reciprocal(x)
    }

    fn fmac(&self, a: f32, b: f32, c: f32) -> f32 {
        (**self).fmac(a, b, c)
    }
}
