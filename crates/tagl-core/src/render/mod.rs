//! Input assembly: object-space strips to clip-space record streams.

pub mod transform;

use glam::{Mat4, Vec3};

use crate::gpu::record::Record;

/// A single vertex in object space.
#[derive(Clone, Copy, Debug)]
pub struct ObjectVertex {
    pub position: Vec3,
    pub uv: [f32; 2],
    pub color: [u8; 4], // RGBA
}

impl ObjectVertex {
    pub fn new(position: Vec3, uv: [f32; 2], color: [u8; 4]) -> Self {
        Self {
            position,
            uv,
            color,
        }
    }
}

/// Appends headers and transformed strips to a record stream.
pub struct StripAssembler<'a, E: Extend<Record>> {
    out: &'a mut E,
    mvp: Mat4,
}

impl<'a, E: Extend<Record>> StripAssembler<'a, E> {
    pub fn new(out: &'a mut E, mvp: Mat4) -> Self {
        Self { out, mvp }
    }

    /// Change the transform for subsequent strips.
    pub fn set_mvp(&mut self, mvp: Mat4) {
        self.mvp = mvp;
    }

    /// Append an opaque polygon header.
    pub fn header(&mut self, payload: [u32; 7]) -> &mut Self {
        self.out.extend([Record::header(payload)]);
        self
    }

    /// Append `vertices` as one strip, the final vertex flagged end-of-strip.
    pub fn strip(&mut self, vertices: &[ObjectVertex]) -> &mut Self {
        let mvp = self.mvp;
        let count = vertices.len();
        self.out.extend(vertices.iter().enumerate().map(|(i, v)| {
            transform::clip_record(v, &mvp).with_last(i + 1 == count)
        }));
        self
    }

    /// Append a quad as a 4-vertex strip: corners in strip order
    /// (bottom-left, bottom-right, top-left, top-right).
    pub fn quad(&mut self, corners: [ObjectVertex; 4]) -> &mut Self {
        self.strip(&corners)
    }
}
