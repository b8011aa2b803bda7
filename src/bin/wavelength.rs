use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use wavelength::{PngSequenceSink, SceneConfig, render_animation, render_still};

#[derive(Parser, Debug)]
#[command(name = "wavelength", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame of the wave background as a PNG.
    Frame(FrameArgs),
    /// Render the animation as a PNG sequence.
    Render(RenderArgs),
    /// Render a JSON project list into HTML cards.
    Cards(CardsArgs),
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Scene JSON. Defaults apply when omitted.
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Override the scene seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Override the viewport width.
    #[arg(long)]
    width: Option<u32>,

    /// Override the viewport height.
    #[arg(long)]
    height: Option<u32>,

    /// Disable per-pixel noise.
    #[arg(long, default_value_t = false)]
    no_noise: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Time in seconds since the animation started.
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Page scroll position in pixels.
    #[arg(long, default_value_t = 0.0)]
    scroll: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Output directory; frames are written as `frame_00000.png`, `frame_00001.png`, ...
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct CardsArgs {
    /// Projects JSON array.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output HTML fragment path. Writes to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::Cards(args) => cmd_cards(args),
    }
}

fn load_scene(args: &SceneArgs) -> anyhow::Result<SceneConfig> {
    let mut scene = match &args.scene {
        Some(path) => SceneConfig::from_path(path)
            .with_context(|| format!("load scene '{}'", path.display()))?,
        None => SceneConfig::default(),
    };
    if let Some(seed) = args.seed {
        scene.seed = Some(seed);
    }
    if let Some(width) = args.width {
        scene.viewport.width = width;
    }
    if let Some(height) = args.height {
        scene.viewport.height = height;
    }
    if args.no_noise {
        scene.waves.with_noise = false;
    }
    scene.validate()?;
    Ok(scene)
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.scene)?;
    let frame = render_still(&scene, args.time, args.scroll)?;

    ensure_parent(&args.out)?;
    let mut scratch = Vec::new();
    wavelength::encode::sink::write_png(&args.out, &frame, &mut scratch)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.scene)?;
    let mut sink = PngSequenceSink::new(&args.out);
    let stats = render_animation(&scene, &mut sink)?;
    eprintln!(
        "wrote {} ({} frames)",
        args.out.display(),
        stats.frames_rendered
    );
    Ok(())
}

/// A project list that cannot be loaded is logged and yields an empty fragment.
fn cmd_cards(args: CardsArgs) -> anyhow::Result<()> {
    let html = wavelength::projects::card::render_projects(&args.in_path);
    match args.out {
        Some(out) => {
            ensure_parent(&out)?;
            std::fs::write(&out, html).with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => print!("{html}"),
    }
    Ok(())
}
