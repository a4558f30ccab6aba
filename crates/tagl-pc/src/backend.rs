//! Backends the host can drive the clip engine into.

use tagl_core::gpu::store_queue::QUEUE_COUNT;
use tagl_core::{validate_stream, Record, RenderPass, StoreQueueSink, StreamStats};
use tagl_hal::{FloatOps, StoreQueue, BURST_WORDS};

use crate::error::HostError;

/// Output path selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum BackendKind {
    /// Append to a growable buffer, as fed to a software rasterizer.
    Software,
    /// Emulated store-queue bursts, decoded back into records.
    StoreQueue,
    /// Run both and require identical output.
    Compare,
}

/// Store queue backed by host memory. Keeps issue order and the queue each
/// burst went to.
#[derive(Debug, Default)]
pub struct EmulatedQueue {
    bursts: Vec<(u8, [u32; BURST_WORDS])>,
    drains: usize,
}

impl EmulatedQueue {
    /// Check that bursts alternated between the queues in strict order.
    fn check_order(&self, frame: u32) -> Result<(), HostError> {
        for (burst, (queue, _)) in self.bursts.iter().enumerate() {
            let expected = (burst % usize::from(QUEUE_COUNT)) as u8;
            if *queue != expected {
                return Err(HostError::QueueOrder {
                    frame,
                    burst,
                    queue: *queue,
                    expected,
                });
            }
        }
        Ok(())
    }

    fn records(&self) -> Vec<Record> {
        self.bursts
            .iter()
            .map(|(_, words)| Record::from_words(words))
            .collect()
    }
}

impl StoreQueue for EmulatedQueue {
    fn burst(&mut self, queue: u8, words: &[u32; BURST_WORDS]) {
        self.bursts.push((queue, *words));
    }

    fn drain(&mut self) {
        self.drains += 1;
    }
}

/// Clips one frame and checks the result.
pub struct FrameRunner<M: FloatOps> {
    pass: RenderPass<M>,
    kind: BackendKind,
}

impl<M: FloatOps> FrameRunner<M> {
    pub fn new(pass: RenderPass<M>, kind: BackendKind) -> Self {
        Self { pass, kind }
    }

    /// Submit `input` and return the validated output stream.
    pub fn run(&mut self, frame: u32, input: &[Record]) -> Result<FrameOutput, HostError> {
        let records = match self.kind {
            BackendKind::Software => self.software(input),
            BackendKind::StoreQueue => self.store_queue(frame, input)?,
            BackendKind::Compare => {
                let software = self.software(input);
                let hardware = self.store_queue(frame, input)?;
                compare(frame, &software, &hardware)?;
                software
            }
        };

        let stats =
            validate_stream(&records).map_err(|source| HostError::Stream { frame, source })?;
        log::trace!("frame {}: {:?}", frame, stats);
        Ok(FrameOutput { records, stats })
    }

    fn software(&mut self, input: &[Record]) -> Vec<Record> {
        let mut out = Vec::new();
        self.pass.submit(input, &mut out);
        out
    }

    fn store_queue(&mut self, frame: u32, input: &[Record]) -> Result<Vec<Record>, HostError> {
        let mut sink = StoreQueueSink::new(EmulatedQueue::default());
        self.pass.submit(input, &mut sink);
        let queue = sink.finish();
        debug_assert_eq!(queue.drains, 1);
        queue.check_order(frame)?;
        Ok(queue.records())
    }
}

/// Records produced for one frame and their counts.
pub struct FrameOutput {
    pub records: Vec<Record>,
    pub stats: StreamStats,
}

fn compare(frame: u32, software: &[Record], hardware: &[Record]) -> Result<(), HostError> {
    if let Some(index) = software
        .iter()
        .zip(hardware.iter())
        .position(|(a, b)| !a.bit_eq(b))
    {
        return Err(HostError::BackendMismatch { frame, index });
    }
    if software.len() != hardware.len() {
        return Err(HostError::BackendMismatch {
            frame,
            index: software.len().min(hardware.len()),
        });
    }
    Ok(())
}
