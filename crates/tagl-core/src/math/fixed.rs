//! Fixed-point helpers for packed vertex colors.
//!
//! Color channels are blended with an 8-bit fixed-point weight instead of
//! floats, matching the 8-bit-per-channel packing the hardware consumes.

use fixed::types::U8F8;

/// Weight scale: a weight of `ONE` selects the second color entirely.
pub const ONE: u32 = 1 << 8;

/// Convert an interpolation parameter in [0, 1] to an 8-bit fixed-point
/// weight in `0..=256`.
///
/// Out-of-range input saturates. NaN maps to 0.
pub fn weight(t: f32) -> u32 {
    if t.is_nan() {
        return 0;
    }
    let clamped = t.clamp(0.0, 1.0);
    U8F8::checked_from_num(clamped).map_or(0, |w| u32::from(w.to_bits()))
}

/// Blend two packed colors channel by channel: `(a * (256 - f) + b * f) >> 8`.
pub fn lerp_bgra(a: [u8; 4], b: [u8; 4], t: f32) -> [u8; 4] {
    let f2 = weight(t);
    let f1 = ONE - f2;
    let mut out = [0u8; 4];
    for (o, (&ca, &cb)) in out.iter_mut().zip(a.iter().zip(b.iter())) {
        *o = ((u32::from(ca) * f1 + u32::from(cb) * f2) >> 8) as u8;
    }
    out
}
