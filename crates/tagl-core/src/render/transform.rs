//! Object-space to clip-space transform helpers.
//!
//! A minimal stand-in for the full transform stage: enough to feed the clip
//! engine from demo scenes and tests. Uses the GL depth convention so the
//! near plane sits at `z = -w`.

use glam::{Mat4, Vec3, Vec4};

use crate::gpu::record::Record;

use super::ObjectVertex;

/// Transform an object-space position by the MVP matrix into clip space.
/// No divide happens here; w is kept for the clipper.
pub fn to_clip(position: Vec3, mvp: &Mat4) -> Vec4 {
    *mvp * Vec4::new(position.x, position.y, position.z, 1.0)
}

/// Clip-space vertex record for `v`. Colors are swizzled from RGBA to the
/// hardware's BGRA order.
pub fn clip_record(v: &ObjectVertex, mvp: &Mat4) -> Record {
    let clip = to_clip(v.position, mvp);
    let [r, g, b, a] = v.color;
    Record::vertex([clip.x, clip.y, clip.z], clip.w, v.uv, [b, g, r, a])
}

/// Build a perspective projection matrix with a [-1, 1] depth range.
/// fov_y: vertical field of view in radians.
/// aspect: width / height (e.g., 640/480 = 1.333).
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    Mat4::perspective_rh_gl(fov_y, aspect, near, far)
}

/// Build an orthographic projection; its clip-space w is always 1.
pub fn orthographic(half_width: f32, half_height: f32, near: f32, far: f32) -> Mat4 {
    Mat4::orthographic_rh_gl(-half_width, half_width, -half_height, half_height, near, far)
}

/// Build a look-at view matrix (right-handed).
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    Mat4::look_at_rh(eye, target, up)
}

/// Build a Y-axis rotation matrix.
pub fn rotate_y(angle: f32) -> Mat4 {
    Mat4::from_rotation_y(angle)
}
