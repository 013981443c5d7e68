use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use scrollreel::{
    CanvasSurface, CpuSurface, FsFrameSource, ReelConfig, RenderOutcome, ScrollReel, SimulatedHost,
};

#[derive(Parser, Debug)]
#[command(name = "scrollreel", version)]
struct Cli {
    /// Log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the frame shown at one scroll position as a PNG.
    Frame(FrameArgs),
    /// Simulate a scroll through the whole region and write every rendered tick as a PNG.
    Sweep(SweepArgs),
}

#[derive(Parser, Debug)]
struct ViewArgs {
    /// Reel configuration JSON. Frame paths resolve against its directory.
    #[arg(long)]
    config: PathBuf,

    /// Frame root directory, overriding the config's directory.
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 720)]
    height: u32,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    view: ViewArgs,

    /// Scroll progress through the tracked region, in [0, 1].
    #[arg(long)]
    progress: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    #[command(flatten)]
    view: ViewArgs,

    /// Output directory for numbered PNGs.
    #[arg(long)]
    out_dir: PathBuf,

    /// Number of scroll events between progress 0 and 1.
    #[arg(long, default_value_t = 10)]
    steps: u32,

    /// Simulated host frame rate.
    #[arg(long, default_value_t = 60)]
    fps: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sweep(args) => cmd_sweep(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn open_reel(view: &ViewArgs) -> anyhow::Result<(Rc<SimulatedHost>, ScrollReel<CpuSurface>)> {
    let cfg = ReelConfig::from_path(&view.config)?;
    let root = match &view.assets {
        Some(dir) => dir.clone(),
        None => view
            .config
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf(),
    };

    // The tracked region spans four viewport heights, like a tall scroll section.
    let host = Rc::new(SimulatedHost::with_screens(
        CanvasSurface::new(view.width, view.height),
        4.0,
    ));
    let reel = ScrollReel::new(
        &cfg,
        Arc::new(FsFrameSource::new(root)),
        host.clone(),
        host.clone(),
        CpuSurface::new(cfg.clear_rgba),
    )?;
    Ok((host, reel))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    if !(0.0..=1.0).contains(&args.progress) {
        anyhow::bail!("--progress must be within [0, 1], got {}", args.progress);
    }
    let (host, mut reel) = open_reel(&args.view)?;
    host.scroll_to_progress(args.progress);
    reel.init()?;
    reel.wait_for_assets();

    let report = reel.tick(Duration::ZERO);
    match report.outcome {
        Some(RenderOutcome::Drawn { index, .. }) => tracing::debug!(index, "frame drawn"),
        other => anyhow::bail!(
            "no frame drawn at progress {} (index {:?}): {other:?}",
            args.progress,
            report.index
        ),
    }

    write_png(&mut reel, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    if args.steps == 0 || args.fps == 0 {
        anyhow::bail!("--steps and --fps must be >= 1");
    }
    let (host, mut reel) = open_reel(&args.view)?;
    reel.init()?;
    reel.wait_for_assets();
    let counts = reel.counts();
    if counts.failed > 0 {
        eprintln!(
            "{} of {} frames failed to load",
            counts.failed,
            reel.loader().sequence().len()
        );
    }

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let frame_dt = Duration::from_secs(1) / args.fps;
    let mut now = Duration::ZERO;
    let mut step = 0u32;
    let mut written = 0usize;
    loop {
        if step <= args.steps {
            if step > 0 {
                host.scroll_to_progress(f64::from(step) / f64::from(args.steps));
                reel.handle_scroll(now);
            }
            step += 1;
        }
        let report = reel.tick(now);
        if report.outcome.is_some_and(|o| o.is_drawn()) {
            let out = args.out_dir.join(format!("tick_{written:05}.png"));
            write_png(&mut reel, &out)?;
            written += 1;
        }
        if step > args.steps && !reel.interpolator().is_running() {
            break;
        }
        now += frame_dt;
    }

    eprintln!("wrote {written} frames to {}", args.out_dir.display());
    Ok(())
}

fn write_png(reel: &mut ScrollReel<CpuSurface>, out: &Path) -> anyhow::Result<()> {
    let frame = reel.renderer_mut().surface_mut().frame()?;
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))?;
    Ok(())
}
