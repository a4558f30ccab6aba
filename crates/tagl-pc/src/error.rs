use tagl_core::{StreamError, ViewportError};

/// Errors that end a host run.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// Viewport rejected by the core.
    #[error("viewport: {0}")]
    Viewport(#[from] ViewportError),

    /// The clip engine produced a stream the accelerator would reject.
    #[error("frame {frame}: malformed command stream: {source}")]
    Stream { frame: u32, source: StreamError },

    /// Store-queue bursts were issued out of queue order.
    #[error("frame {frame}: burst {burst} went to queue {queue}, expected {expected}")]
    QueueOrder {
        frame: u32,
        burst: usize,
        queue: u8,
        expected: u8,
    },

    /// The software and store-queue backends disagree.
    #[error("frame {frame}: backends differ at record {index}")]
    BackendMismatch { frame: u32, index: usize },
}
