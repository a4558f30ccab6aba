//! Intersection of a triangle edge with the near plane.

use tagl_hal::FloatOps;

use crate::gpu::record::Record;
use crate::math::fixed::lerp_bgra;

/// Guard added to the clip parameter's denominator, signed to push it away
/// from zero. Changing it moves clipped vertices along shared edges.
pub const CLIP_EPSILON: f32 = 0.00001;

/// Interpolation parameter of the plane crossing along `from -> to`.
///
/// `d0 / (d0 - d1 ± epsilon)`, unclamped. NaN input propagates.
pub fn crossing<M: FloatOps>(math: &M, from: &Record, to: &Record) -> f32 {
    let d0 = from.near_distance();
    let d1 = to.near_distance();
    let epsilon = if d0 < d1 { -CLIP_EPSILON } else { CLIP_EPSILON };

    d0 * math.reciprocal(d0 - d1 + epsilon)
}

/// New vertex where the edge `from -> to` meets the near plane.
///
/// `from` is normally the visible endpoint. Position, w and UV interpolate
/// linearly; color uses an 8-bit fixed-point weight. The result carries
/// `from`'s flags; callers re-flag it.
pub fn clip_edge<M: FloatOps>(math: &M, from: &Record, to: &Record) -> Record {
    let t = crossing(math, from, to);
    let lerp = |a: f32, b: f32| math.fmac(b - a, t, a);

    Record {
        flags: from.flags,
        xyz: [
            lerp(from.xyz[0], to.xyz[0]),
            lerp(from.xyz[1], to.xyz[1]),
            lerp(from.xyz[2], to.xyz[2]),
        ],
        uv: [lerp(from.uv[0], to.uv[0]), lerp(from.uv[1], to.uv[1])],
        w: lerp(from.w, to.w),
        bgra: lerp_bgra(from.bgra, to.bgra, t),
    }
}
