//! Demo scenes that push geometry through the near plane.
//!
//! Each scene builds one frame of clip-space records with the core's strip
//! assembler. The camera is placed so some geometry always straddles the
//! near plane, exercising every clip case over a run.

use core::f32::consts::{FRAC_PI_3, TAU};

use glam::{Mat4, Vec3};
use tagl_core::render::transform::{look_at, perspective, rotate_y};
use tagl_core::render::{ObjectVertex, StripAssembler};
use tagl_core::Record;

const NEAR: f32 = 0.5;
const FAR: f32 = 100.0;

/// Scene selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum SceneKind {
    /// Camera gliding low over a tiled floor; rows behind it get clipped.
    Floor,
    /// A ribbon snaking back and forth across the near plane.
    Wave,
    /// Camera orbiting through a ring of pillars.
    Orbit,
}

impl SceneKind {
    /// Clip-space records for `frame`.
    pub fn build(self, frame: u32, aspect: f32) -> Vec<Record> {
        let projection = perspective(FRAC_PI_3, aspect, NEAR, FAR);
        let mut records = Vec::new();
        match self {
            SceneKind::Floor => floor(&mut records, projection, frame),
            SceneKind::Wave => wave(&mut records, projection, frame),
            SceneKind::Orbit => orbit(&mut records, projection, frame),
        }
        records
    }
}

/// Header payload: scene-specific context words, opaque to the engine.
fn header(material: u32) -> [u32; 7] {
    [material, 0, 0, 0, 0, 0, 0]
}

fn checker(a: usize, b: usize) -> [u8; 4] {
    if (a + b) % 2 == 0 {
        [200, 200, 200, 255]
    } else {
        [60, 60, 90, 255]
    }
}

fn floor(records: &mut Vec<Record>, projection: Mat4, frame: u32) {
    const TILES: usize = 16;
    const TILE: f32 = 1.0;
    let extent = TILES as f32 * TILE * 0.5;

    // Sweep the camera from one end of the floor to the other.
    let travel = (frame % 120) as f32 / 120.0;
    let eye_z = extent - travel * 2.0 * extent;
    let eye = Vec3::new(0.0, 0.6, eye_z);
    let view = look_at(eye, eye + Vec3::new(0.0, -0.3, -1.0), Vec3::Y);

    let mut asm = StripAssembler::new(records, projection * view);
    asm.header(header(1));

    for row in 0..TILES {
        let z0 = -extent + row as f32 * TILE;
        let z1 = z0 + TILE;
        let strip: Vec<ObjectVertex> = (0..=TILES)
            .flat_map(|col| {
                let x = -extent + col as f32 * TILE;
                let color = checker(row, col);
                let u = col as f32;
                [
                    ObjectVertex::new(Vec3::new(x, 0.0, z1), [u, 1.0], color),
                    ObjectVertex::new(Vec3::new(x, 0.0, z0), [u, 0.0], color),
                ]
            })
            .collect();
        asm.strip(&strip);
    }
}

fn wave(records: &mut Vec<Record>, projection: Mat4, frame: u32) {
    const SEGMENTS: usize = 48;
    const WIDTH: f32 = 8.0;

    let phase = frame as f32 * 0.1;
    let eye = Vec3::new(0.0, 0.0, 0.0);
    let view = look_at(eye, Vec3::NEG_Z, Vec3::Y);

    let mut asm = StripAssembler::new(records, projection * view);
    asm.header(header(2));

    // The ribbon runs across the view at the near distance, weaving in
    // front of and behind the plane.
    let strip: Vec<ObjectVertex> = (0..=SEGMENTS)
        .flat_map(|i| {
            let s = i as f32 / SEGMENTS as f32;
            let x = (s - 0.5) * WIDTH;
            let z = -NEAR - 0.4 * (s * TAU * 3.0 + phase).sin();
            let shade = (128.0 + 127.0 * (s * TAU).cos()) as u8;
            [
                ObjectVertex::new(Vec3::new(x, -0.5, z), [s, 0.0], [shade, 64, 255 - shade, 255]),
                ObjectVertex::new(Vec3::new(x, 0.5, z), [s, 1.0], [shade, 64, 255 - shade, 255]),
            ]
        })
        .collect();
    asm.strip(&strip);
}

fn orbit(records: &mut Vec<Record>, projection: Mat4, frame: u32) {
    const PILLARS: usize = 8;
    const RING: f32 = 3.0;
    const HALF_WIDTH: f32 = 0.4;

    let angle = frame as f32 * TAU / 240.0;
    let eye = rotate_y(angle).transform_point3(Vec3::new(0.0, 1.0, RING));
    let ahead = rotate_y(angle + 0.3).transform_point3(Vec3::new(0.0, 1.0, RING));
    let view = look_at(eye, ahead, Vec3::Y);
    let view_projection = projection * view;

    let mut asm = StripAssembler::new(records, view_projection);
    for p in 0..PILLARS {
        let model = rotate_y(p as f32 * TAU / PILLARS as f32)
            * Mat4::from_translation(Vec3::new(0.0, 0.0, RING));
        asm.set_mvp(view_projection * model);
        asm.header(header(3 + p as u32));

        let color = checker(p, 0);
        asm.quad([
            ObjectVertex::new(Vec3::new(-HALF_WIDTH, 0.0, 0.0), [0.0, 0.0], color),
            ObjectVertex::new(Vec3::new(HALF_WIDTH, 0.0, 0.0), [1.0, 0.0], color),
            ObjectVertex::new(Vec3::new(-HALF_WIDTH, 2.0, 0.0), [0.0, 1.0], color),
            ObjectVertex::new(Vec3::new(HALF_WIDTH, 2.0, 0.0), [1.0, 1.0], color),
        ]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagl_core::{validate_stream, RenderPass, Viewport};

    #[test]
    fn every_scene_clips_to_a_valid_stream() {
        let viewport = Viewport::full_screen(640.0, 480.0).expect("valid viewport");
        for scene in [SceneKind::Floor, SceneKind::Wave, SceneKind::Orbit] {
            for frame in (0..240).step_by(17) {
                let input = scene.build(frame, 640.0 / 480.0);
                let mut out: Vec<Record> = Vec::new();
                RenderPass::new(viewport).submit(&input, &mut out);
                validate_stream(&out).unwrap_or_else(|e| panic!("{scene:?} frame {frame}: {e}"));
            }
        }
    }

    #[test]
    fn wave_crosses_the_near_plane() {
        let input = SceneKind::Wave.build(0, 1.0);
        let visible = input.iter().filter(|r| r.is_vertex() && r.is_in_front()).count();
        let hidden = input.iter().filter(|r| r.is_vertex() && !r.is_in_front()).count();
        assert!(visible > 0 && hidden > 0, "visible {visible}, hidden {hidden}");
    }
}
