//! `molsketch` command line: headless SVG snapshots of the structure and
//! pocket views, interaction diagrams and option presets.

use std::cell::RefCell;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use molsketch::camera::Viewport;
use molsketch::diagram::InteractionDiagram;
use molsketch::engine::{
    ManualScheduler, PocketModel, ProteinModel, RenderLoop, SceneModel, Viewer,
};
use molsketch::input::InputEvent;
use molsketch::options::Options;
use molsketch::renderer::{RenderStyle, SvgSurface};

/// Nominal frame interval handed to the headless scheduler, in ms.
const FRAME_INTERVAL_MS: f64 = 1000.0 / 60.0;

#[derive(Parser)]
#[command(name = "molsketch")]
#[command(
    about = "Deterministic procedural protein and ligand sketches",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a protein structure snapshot as SVG
    Structure {
        /// Structure identifier, used as the geometry seed
        id: String,

        /// Render style: ribbon or ball-and-stick
        #[arg(long, default_value = "ribbon")]
        style: String,

        #[command(flatten)]
        frame: FrameArgs,
    },
    /// Render a ligand binding pocket snapshot as SVG
    Pocket {
        /// Compound name, used as the geometry seed
        compound: String,

        #[command(flatten)]
        frame: FrameArgs,
    },
    /// Write the 2D interaction diagram for a compound
    Diagram {
        /// Compound name
        compound: String,

        /// Emit responsive markup (width 100%, height auto) for inlining
        #[arg(long)]
        embed: bool,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write the default options as TOML
    Options {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct FrameArgs {
    /// Display name drawn under the identifier when the overlay is on
    #[arg(long, default_value = "")]
    name: String,

    /// Animation frames to run before the snapshot
    #[arg(long, default_value_t = 1)]
    frames: u32,

    /// Width in CSS pixels
    #[arg(long, default_value_t = 800.0)]
    width: f32,

    /// Height in CSS pixels
    #[arg(long, default_value_t = 600.0)]
    height: f32,

    /// Device pixel ratio
    #[arg(long, default_value_t = 1.0)]
    dpr: f32,

    /// Zoom steps in before rendering
    #[arg(long, default_value_t = 0)]
    zoom_in: u32,

    /// Zoom steps out before rendering
    #[arg(long, default_value_t = 0)]
    zoom_out: u32,

    /// Options preset (TOML)
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn load_options(path: Option<&Path>) -> Result<Options> {
    match path {
        Some(path) => Options::load(path).with_context(|| {
            format!("loading options from {}", path.display())
        }),
        None => Ok(Options::default()),
    }
}

fn emit(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("writing {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

/// Drive a viewer through `frame.frames` animation frames on a manually
/// pumped scheduler and return the last frame as SVG.
fn snapshot<M: SceneModel + 'static>(
    id: &str,
    style: RenderStyle,
    frame: &FrameArgs,
) -> Result<String> {
    let options = load_options(frame.options.as_deref())?;
    let mut viewer = Viewer::<M>::new(options);
    viewer.set_structure(id, &frame.name);
    viewer.set_render_style(style);
    for _ in 0..frame.zoom_in {
        let _ = viewer.handle_input(InputEvent::ZoomIn);
    }
    for _ in 0..frame.zoom_out {
        let _ = viewer.handle_input(InputEvent::ZoomOut);
    }

    let viewport = Viewport::new(frame.width, frame.height, frame.dpr);
    let viewer = Rc::new(RefCell::new(viewer));
    let surface = Rc::new(RefCell::new(SvgSurface::new(viewport)));

    let scheduler = ManualScheduler::new();
    let (v, s) = (Rc::clone(&viewer), Rc::clone(&surface));
    let render_loop = RenderLoop::start(Rc::new(scheduler.clone()), move |_| {
        let _ = v.borrow_mut().render_frame(&mut *s.borrow_mut());
    })?;
    for i in 0..frame.frames {
        let _ = scheduler.run_frame(f64::from(i) * FRAME_INTERVAL_MS);
    }
    render_loop.stop();
    log::info!(
        "rendered {} frame(s) of {id:?}, {} geometry build(s)",
        render_loop.frames(),
        viewer.borrow().cache().build_count()
    );

    let markup = surface.borrow().to_markup();
    Ok(markup)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Structure { id, style, frame } => {
            let Some(style) = RenderStyle::from_name(&style) else {
                bail!(
                    "unknown render style {style:?} \
                     (expected ribbon or ball-and-stick)"
                );
            };
            let svg = snapshot::<ProteinModel>(&id, style, &frame)?;
            emit(frame.output.as_deref(), &svg)
        }
        Command::Pocket { compound, frame } => {
            let svg = snapshot::<PocketModel>(
                &compound,
                RenderStyle::default(),
                &frame,
            )?;
            emit(frame.output.as_deref(), &svg)
        }
        Command::Diagram {
            compound,
            embed,
            output,
        } => {
            let diagram = InteractionDiagram::generate(&compound);
            let markup = if embed {
                diagram.to_embedded_markup()
            } else {
                diagram.to_markup()
            };
            emit(output.as_deref(), &markup)
        }
        Command::Options { output } => {
            let toml = Options::default().to_toml()?;
            emit(output.as_deref(), &toml)
        }
    }
}
