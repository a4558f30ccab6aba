#![no_std]

//! Near-plane clipping and strip submission for tile-accelerator GPUs.
//!
//! Takes clip-space polygon headers and triangle strips, clips every
//! triangle against `z + w >= 0`, reassembles the survivors into strips,
//! and writes perspective-divided, viewport-mapped records to a
//! [`CommandSink`].

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod clip;
pub mod gpu;
pub mod math;
pub mod render;
pub mod validate;
pub mod viewport;

pub use clip::RenderPass;
pub use gpu::record::{Command, Record};
pub use gpu::sink::{CommandSink, FixedSink};
pub use gpu::store_queue::{BurstLog, StoreQueueSink};
pub use math::{FusedMath, PortableMath};
pub use validate::{validate_stream, StreamError, StreamStats};
pub use viewport::{Viewport, ViewportError};
