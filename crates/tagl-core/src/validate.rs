//! Structural checks on a command stream.
//!
//! Used by tests and debug hosts to confirm that a stream is something the
//! tile accelerator accepts: every strip follows a header, has at least three
//! vertices and ends with exactly one terminator.

use core::fmt;

use crate::clip::strip::MIN_STRIP_VERTICES;
use crate::gpu::record::{Command, Record};

/// Counts gathered from a well-formed stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreamStats {
    pub headers: usize,
    /// Headers followed directly by another header or the end of the stream.
    pub empty_headers: usize,
    pub strips: usize,
    /// Vertex records, duplicates included.
    pub vertices: usize,
    /// Terminators repeated bit-for-bit right after a terminator.
    pub duplicate_terminators: usize,
}

/// First structural fault found in a stream. `index` is the record offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamError {
    /// A vertex arrived before any header.
    MissingHeader { index: usize },
    /// A header arrived while a strip was still open.
    HeaderInsideStrip { index: usize },
    /// A strip ended with fewer than three vertices.
    ShortStrip { index: usize, len: usize },
    /// The stream ended while a strip was still open.
    UnterminatedStrip { index: usize },
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::MissingHeader { index } => {
                write!(f, "vertex at record {index} precedes any header")
            }
            StreamError::HeaderInsideStrip { index } => {
                write!(f, "header at record {index} interrupts an open strip")
            }
            StreamError::ShortStrip { index, len } => {
                write!(f, "strip ending at record {index} has only {len} vertices")
            }
            StreamError::UnterminatedStrip { index } => {
                write!(f, "strip starting at record {index} has no terminator")
            }
        }
    }
}

impl core::error::Error for StreamError {}

/// Walk `records` and check the strip structure.
pub fn validate_stream(records: &[Record]) -> Result<StreamStats, StreamError> {
    let mut stats = StreamStats::default();
    let mut seen_header = false;
    let mut header_used = false;
    let mut strip_len = 0usize;
    let mut strip_start = 0usize;
    let mut prev: Option<&Record> = None;

    for (index, record) in records.iter().enumerate() {
        match record.command() {
            Command::Header => {
                if strip_len > 0 {
                    return Err(StreamError::HeaderInsideStrip { index });
                }
                if seen_header && !header_used {
                    stats.empty_headers += 1;
                }
                seen_header = true;
                header_used = false;
                stats.headers += 1;
            }
            Command::Vertex | Command::VertexEol => {
                if !seen_header {
                    return Err(StreamError::MissingHeader { index });
                }
                stats.vertices += 1;

                let repeated_terminator = record.is_last()
                    && strip_len == 0
                    && prev.is_some_and(|p| p.is_last() && p.bit_eq(record));
                if repeated_terminator {
                    stats.duplicate_terminators += 1;
                    prev = Some(record);
                    continue;
                }

                if strip_len == 0 {
                    strip_start = index;
                }
                strip_len += 1;

                if record.is_last() {
                    if strip_len < MIN_STRIP_VERTICES {
                        return Err(StreamError::ShortStrip {
                            index,
                            len: strip_len,
                        });
                    }
                    stats.strips += 1;
                    header_used = true;
                    strip_len = 0;
                }
            }
        }
        prev = Some(record);
    }

    if strip_len > 0 {
        return Err(StreamError::UnterminatedStrip { index: strip_start });
    }
    if seen_header && !header_used {
        stats.empty_headers += 1;
    }
    Ok(stats)
}
