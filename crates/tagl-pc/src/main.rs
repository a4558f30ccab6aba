//! Portable host for the tagl clip engine.
//!
//! Builds demo scenes in clip space, clips them through a `RenderPass`, and
//! checks the command stream on the software path, the emulated store-queue
//! path, or both.

mod backend;
mod error;
mod scene;

use clap::Parser;
use tagl_core::{FusedMath, PortableMath, RenderPass, Viewport};
use tagl_hal::FloatOps;

use backend::{BackendKind, FrameRunner};
use error::HostError;
use scene::SceneKind;

/// Arithmetic back end for the clip engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum MathKind {
    /// Separate multiply and add.
    Portable,
    /// Fused multiply-add.
    Fused,
}

#[derive(Parser)]
#[command(name = "tagl-pc")]
#[command(about = "Clip demo scenes and check the command stream", long_about = None)]
struct Cli {
    /// Scene to render
    #[arg(short, long, value_enum, default_value = "floor")]
    scene: SceneKind,

    /// Number of frames to clip
    #[arg(short, long, default_value = "120")]
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    frames: u32,

    /// Render target width in pixels
    #[arg(long, default_value = "640")]
    width: u32,

    /// Render target height in pixels
    #[arg(long, default_value = "480")]
    height: u32,

    /// Output path
    #[arg(short, long, value_enum, default_value = "compare")]
    backend: BackendKind,

    /// Arithmetic back end
    #[arg(short, long, value_enum, default_value = "portable")]
    math: MathKind,
}

/// Totals over a run.
#[derive(Debug, Default)]
struct Summary {
    input_records: usize,
    output_records: usize,
    strips: usize,
    vertices: usize,
    duplicate_terminators: usize,
}

fn main() -> Result<(), HostError> {
    env_logger::init();
    let cli = Cli::parse();
    log::info!(
        "tagl-pc: {:?} scene, {} frames, {}x{}, {:?} backend, {:?} math",
        cli.scene,
        cli.frames,
        cli.width,
        cli.height,
        cli.backend,
        cli.math
    );

    let viewport = Viewport::full_screen(cli.width as f32, cli.height as f32)?;
    let summary = match cli.math {
        MathKind::Portable => run(&cli, RenderPass::with_math(viewport, PortableMath))?,
        MathKind::Fused => run(&cli, RenderPass::with_math(viewport, FusedMath))?,
    };

    log::info!("tagl-pc: {:?}", summary);
    println!(
        "{} frames: {} records in, {} out ({} strips, {} vertices, {} duplicate terminators)",
        cli.frames,
        summary.input_records,
        summary.output_records,
        summary.strips,
        summary.vertices,
        summary.duplicate_terminators
    );
    Ok(())
}

fn run<M: FloatOps>(cli: &Cli, pass: RenderPass<M>) -> Result<Summary, HostError> {
    let aspect = cli.width as f32 / cli.height as f32;
    let mut runner = FrameRunner::new(pass, cli.backend);
    let mut summary = Summary::default();

    for frame in 0..cli.frames {
        let input = cli.scene.build(frame, aspect);
        let output = runner.run(frame, &input)?;
        log::debug!(
            "frame {}: {} -> {} records, {} strips",
            frame,
            input.len(),
            output.records.len(),
            output.stats.strips
        );

        summary.input_records += input.len();
        summary.output_records += output.records.len();
        summary.strips += output.stats.strips;
        summary.vertices += output.stats.vertices;
        summary.duplicate_terminators += output.stats.duplicate_terminators;
    }

    Ok(summary)
}
