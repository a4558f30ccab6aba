//! Near-plane clipping and strip reassembly.
//!
//! Consumes clip-space headers and triangle strips and writes a stream the
//! tile accelerator can take as-is: every triangle lies in front of the near
//! plane (`z >= -w`), strips stay connected where the geometry allows, and
//! vertices leave perspective-divided and viewport-mapped.
//!
//! Emission trails the input by two vertices. The two newest vertices of the
//! window are pending: fully visible triangles send only their oldest vertex
//! and leave the rest for the triangles that follow. A partially visible
//! triangle is cut into the part in front of the plane. A lone visible corner
//! becomes a triangle of its own and ends the output strip; two visible
//! corners continue it, terminated only at the strip's last triangle.
//!
//! After a partial triangle, a hidden vertex that stays in the window is
//! replaced by the crossing on the edge it shares with the next triangle, so
//! the strip is clipped against the boundary already cut. Once two visible
//! vertices lead a strip, every later window pair is visible and the whole
//! input strip comes out as one output strip.

pub mod edge;
pub mod mask;
pub mod strip;
pub mod window;

use tagl_hal::FloatOps;

use crate::gpu::record::{Command, Record};
use crate::gpu::sink::CommandSink;
use crate::math::PortableMath;
use crate::viewport::Viewport;

use edge::clip_edge;
use mask::{Case, VisibilityMask};
use strip::OutputStrip;
use window::ClipWindow;

/// Smallest submission that can draw anything: a header and three vertices.
pub const MIN_SUBMIT_RECORDS: usize = 4;

/// Caller-owned render-pass context.
///
/// Holds the read-only viewport, the arithmetic back end and the scratch
/// state of the strip being clipped. Scratch state never survives a
/// `submit` call.
pub struct RenderPass<M: FloatOps = PortableMath> {
    viewport: Viewport,
    math: M,
    window: ClipWindow,
    mask: VisibilityMask,
    strip: OutputStrip,
}

impl RenderPass<PortableMath> {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_math(viewport, PortableMath)
    }
}

impl<M: FloatOps> RenderPass<M> {
    pub fn with_math(viewport: Viewport, math: M) -> Self {
        log::debug!("render pass: {:?}", viewport);
        Self {
            viewport,
            math,
            window: ClipWindow::new(),
            mask: VisibilityMask::EMPTY,
            strip: OutputStrip::default(),
        }
    }

    /// Replace the viewport between draw calls.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Clip `records` and write the result to `sink`.
    ///
    /// Fewer than [`MIN_SUBMIT_RECORDS`] records is a no-op. There is no
    /// error channel: malformed strips produce odd-looking but well-formed
    /// output, and NaNs pass through.
    pub fn submit<S: CommandSink + ?Sized>(&mut self, records: &[Record], sink: &mut S) {
        if records.len() < MIN_SUBMIT_RECORDS {
            return;
        }
        log::trace!("submit: {} records", records.len());

        self.reset_window();
        self.strip.reset();

        for record in records {
            match record.command() {
                Command::Header => {
                    self.strip.close(sink);
                    sink.emit(record);
                    self.reset_window();
                }
                Command::Vertex | Command::VertexEol => self.push_vertex(record, sink),
            }
        }

        if self.strip.is_open() {
            log::debug!("submit: input ended inside a strip, closing it");
            self.strip.close(sink);
        }
        self.reset_window();
    }

    fn reset_window(&mut self) {
        self.window.clear();
        self.mask = VisibilityMask::EMPTY;
    }

    fn push_vertex<S: CommandSink + ?Sized>(&mut self, v: &Record, sink: &mut S) {
        let last = v.is_last();
        self.window.push(*v);
        self.mask = self.mask.push(v.is_in_front());

        if self.window.len() < 3 {
            if last {
                // Fewer than three vertices never make a triangle.
                self.reset_window();
            }
            return;
        }

        let [w0, w1, w2] = self.window.triangle();

        match self.mask.case() {
            Case::Hidden => {}

            Case::Visible => {
                self.emit(sink, &w0, false);
                if last {
                    self.emit(sink, &w1, false);
                    self.emit(sink, &w2, true);
                }
            }

            Case::OldestOnly => {
                let a = clip_edge(&self.math, &w0, &w1);
                let b = clip_edge(&self.math, &w0, &w2);
                self.restart(sink, &w0);
                self.emit(sink, &a, false);
                self.emit(sink, &b, true);
                self.strip.repeat_terminator(sink);
            }

            Case::MiddleOnly => {
                let a = clip_edge(&self.math, &w1, &w0);
                let b = clip_edge(&self.math, &w1, &w2);
                self.restart(sink, &a);
                self.emit(sink, &w1, false);
                self.emit(sink, &b, true);
                self.strip.repeat_terminator(sink);
                self.reseed(2, b);
            }

            Case::NewestOnly => {
                let a = clip_edge(&self.math, &w2, &w0);
                let b = clip_edge(&self.math, &w2, &w1);
                self.restart(sink, &a);
                self.emit(sink, &b, false);
                self.emit(sink, &w2, true);
                self.reseed(1, b);
            }

            Case::NewestHidden => {
                let a = clip_edge(&self.math, &w0, &w2);
                let b = clip_edge(&self.math, &w1, &w2);
                self.emit(sink, &w0, false);
                self.emit(sink, &w1, false);
                self.emit(sink, &a, false);
                if last {
                    self.emit(sink, &w1, false);
                    self.emit(sink, &b, true);
                }
                self.reseed(2, b);
            }

            Case::MiddleHidden => {
                let a = clip_edge(&self.math, &w0, &w1);
                let b = clip_edge(&self.math, &w2, &w1);
                self.restart(sink, &w0);
                self.emit(sink, &a, false);
                self.emit(sink, &w0, false);
                if last {
                    self.emit(sink, &b, false);
                    self.emit(sink, &w2, true);
                }
                self.reseed(1, b);
            }

            Case::OldestHidden => {
                let a = clip_edge(&self.math, &w1, &w0);
                let b = clip_edge(&self.math, &w2, &w0);
                self.restart(sink, &a);
                self.emit(sink, &w1, false);
                self.emit(sink, &b, false);
                if last {
                    self.emit(sink, &w1, false);
                    self.emit(sink, &w2, true);
                }
            }
        }

        if last {
            self.reset_window();
        } else {
            self.window.pop_front();
        }
    }

    /// Put the clipped vertex `v` in place of hidden window corner `corner`.
    fn reseed(&mut self, corner: usize, v: Record) {
        self.window.replace(corner, v);
        self.mask = self.mask.mark_visible(corner);
    }

    /// Project and write one vertex.
    fn emit<S: CommandSink + ?Sized>(&mut self, sink: &mut S, v: &Record, last: bool) {
        let screen = self.viewport.project(&self.math, v);
        self.strip.send(sink, screen, last);
    }

    /// Start a new output strip at `v`, closing any strip still open.
    fn restart<S: CommandSink + ?Sized>(&mut self, sink: &mut S, v: &Record) {
        self.strip.close(sink);
        self.emit(sink, v, false);
    }
}
