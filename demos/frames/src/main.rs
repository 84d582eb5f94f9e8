//! Headless host for slingshot: replays a scenario, runs the frame loop at 60Hz and writes the
//! rendered frames as PNG files.

mod canvas;
mod scenario;

use canvas::RasterCanvas;
use scenario::{Scenario, Script, FRAME_MS};

use anyhow::{Context, Result};
use clap::Parser;
use image::Rgba;
use slingshot::Simulation;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(about = "Render a slingshot scenario to PNG frames")]
struct Args {
    /// Scenario file (YAML). Without one, the default configuration is used.
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Number of frames to run.
    #[arg(short, long, default_value_t = 240)]
    frames: u64,

    /// Write every n-th frame.
    #[arg(short, long, default_value_t = 10)]
    every: u64,

    /// Output directory.
    #[arg(short, long, default_value = "frames")]
    out: PathBuf,

    /// Start from the preset, whatever the scenario says.
    #[arg(long)]
    preset: bool,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn load_scenario(path: &Path) -> Result<Scenario> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let scenario = serde_yaml::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;

    Ok(scenario)
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let scenario = match &args.scenario {
        Some(path) => load_scenario(path)?,
        None => Scenario::default(),
    };

    let mut simulation = Simulation::new(scenario.config).context("invalid configuration")?;
    if scenario.preset || args.preset {
        simulation.preset();
    }
    if scenario.traces {
        simulation.toggle_traces();
    }

    let bounds = simulation.config().bounds;
    let mut canvas = RasterCanvas::new(
        bounds.width.ceil() as u32,
        bounds.height.ceil() as u32,
        Rgba([0, 0, 0, 255]),
    );
    let mut script = Script::new(scenario.gestures);

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;

    let every = args.every.max(1);
    let mut written = 0;
    for frame in 0..args.frames {
        let now = frame as f64 * FRAME_MS;

        script.before_frame(&mut simulation, frame, now);
        simulation.frame(now, Some(&mut canvas));

        if frame % every == 0 {
            let path = args.out.join(format!("frame_{frame:05}.png"));
            canvas
                .image()
                .save(&path)
                .with_context(|| format!("writing {}", path.display()))?;
            written += 1;
        }
    }

    if !script.is_done() {
        tracing::warn!("some gestures did not complete before the last frame");
    }

    tracing::info!(
        frames = args.frames,
        written,
        particles = simulation.particles().len(),
        time = simulation.time(),
        kinetic_energy = simulation.kinetic_energy(),
        out = %args.out.display(),
        "done"
    );

    Ok(())
}
