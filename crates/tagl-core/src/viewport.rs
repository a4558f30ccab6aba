//! Viewport configuration and the perspective divide.

use core::fmt;

use tagl_hal::FloatOps;

use crate::gpu::record::Record;

/// Bias added to z for orthographic (`w == 1`) depth: keeps `1 / (bias + z)`
/// finite at `z = -1`.
pub const ORTHO_DEPTH_BIAS: f32 = 1.0001;

/// Invalid viewport configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportError {
    /// Width or height is zero, negative or not finite.
    BadExtent { width: f32, height: f32 },
    /// Screen height is zero, negative or not finite.
    BadScreenHeight(f32),
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewportError::BadExtent { width, height } => {
                write!(f, "invalid viewport extent {width}x{height}")
            }
            ViewportError::BadScreenHeight(h) => write!(f, "invalid screen height {h}"),
        }
    }
}

impl core::error::Error for ViewportError {}

/// Read-only per-frame mapping from normalized device coordinates to pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub half_width: f32,
    /// Left edge plus half width.
    pub x_offset: f32,
    pub half_height: f32,
    /// Bottom edge plus half height.
    pub y_offset: f32,
    /// Height of the render target; y is flipped against it.
    pub screen_height: f32,
}

impl Viewport {
    /// Viewport at (`x`, `y`) of `width` x `height` pixels, with y measured
    /// from the bottom of a `screen_height`-pixel target.
    pub fn new(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        screen_height: f32,
    ) -> Result<Self, ViewportError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(width) || !positive(height) {
            return Err(ViewportError::BadExtent { width, height });
        }
        if !positive(screen_height) {
            return Err(ViewportError::BadScreenHeight(screen_height));
        }

        let half_width = width * 0.5;
        let half_height = height * 0.5;
        Ok(Self {
            half_width,
            x_offset: x + half_width,
            half_height,
            y_offset: y + half_height,
            screen_height,
        })
    }

    /// Full-screen viewport for a `width` x `height` target.
    pub fn full_screen(width: f32, height: f32) -> Result<Self, ViewportError> {
        Self::new(0.0, 0.0, width, height, height)
    }

    /// Perspective-divide a clip-space vertex and map it to screen space.
    ///
    /// x and y become pixels, z becomes the depth value written to the
    /// hardware (1/w, or `1 / (1.0001 + z)` when `w == 1` exactly). `w`, UV,
    /// color and flags are carried over unchanged.
    pub fn project<M: FloatOps>(&self, math: &M, v: &Record) -> Record {
        let inv_w = math.reciprocal(v.w);
        let mut out = *v;

        out.xyz[0] = math.fmac(self.half_width, v.xyz[0] * inv_w, self.x_offset);
        out.xyz[1] =
            self.screen_height - math.fmac(self.half_height, v.xyz[1] * inv_w, self.y_offset);

        // Orthographic input keeps w at 1, so 1/w would flatten depth.
        out.xyz[2] = if v.w == 1.0 {
            1.0 / (ORTHO_DEPTH_BIAS + v.xyz[2])
        } else {
            inv_w
        };

        out
    }
}
