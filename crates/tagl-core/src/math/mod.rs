//! Arithmetic back ends for the clip engine.
//!
//! Both implement `tagl_hal::FloatOps`. The clipper is generic over the
//! trait, so switching back ends never changes which records are produced,
//! only the last bits of their float payloads.

pub mod fixed;

use tagl_hal::FloatOps;

/// Plain IEEE division and separate multiply/add. Reference behaviour.
#[derive(Clone, Copy, Debug, Default)]
pub struct PortableMath;

impl FloatOps for PortableMath {
    #[inline]
    fn reciprocal(&self, x: f32) -> f32 {
        1.0 / x
    }

    #[inline]
    fn fmac(&self, a: f32, b: f32, c: f32) -> f32 {
        a * b + c
    }
}

/// Single-rounding fused multiply-add, for targets with an FMAC unit.
#[derive(Clone, Copy, Debug, Default)]
pub struct FusedMath;

impl FloatOps for FusedMath {
    #[inline]
    fn reciprocal(&self, x: f32) -> f32 {
        1.0 / x
    }

    #[inline]
    fn fmac(&self, a: f32, b: f32, c: f32) -> f32 {
        libm::fmaf(a, b, c)
    }
}
