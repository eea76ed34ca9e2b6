use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use strokepaint::{
    FrameThreading, PaintConfig, PaintSession, PixelBuffer, SinkControl, StrokeEvent, StrokeLog,
    StrokeSink, TextureSet,
};

#[derive(Parser, Debug)]
#[command(name = "strokepaint", version)]
struct Cli {
    /// Log every committed stroke.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Paint a still image and write the result as a PNG.
    Paint(PaintArgs),
    /// Paint every frame of a GIF and write a painted GIF.
    Animate(AnimateArgs),
    /// Re-render a saved stroke log at a new size.
    Render(RenderArgs),
}

#[derive(clap::Args, Debug)]
struct TextureArgs {
    /// Directory of texture images (png, jpg, jpeg, webp, bmp).
    #[arg(long, conflicts_with = "texture")]
    textures: Option<PathBuf>,

    /// Single texture image; repeat for several.
    #[arg(long)]
    texture: Vec<PathBuf>,
}

#[derive(clap::Args, Debug)]
struct RunArgs {
    /// Paint configuration JSON. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of strokes per frame.
    #[arg(long)]
    strokes: Option<u32>,

    /// Run seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Shorter side of the computation canvas.
    #[arg(long)]
    computation_size: Option<u32>,

    /// Longer side of the written output.
    #[arg(long)]
    output_size: Option<u32>,
}

#[derive(Parser, Debug)]
struct PaintArgs {
    /// Target image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Also write the committed strokes as JSON.
    #[arg(long)]
    strokes_json: Option<PathBuf>,

    #[command(flatten)]
    textures: TextureArgs,

    #[command(flatten)]
    run: RunArgs,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    /// Target GIF.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output GIF path.
    #[arg(long)]
    out: PathBuf,

    /// Also write each painted frame as `frame_NNNN.png` into this directory.
    #[arg(long)]
    frames_dir: Option<PathBuf>,

    /// Paint frames concurrently.
    #[arg(long)]
    parallel: bool,

    /// Worker threads when painting in parallel.
    #[arg(long)]
    threads: Option<usize>,

    #[command(flatten)]
    textures: TextureArgs,

    #[command(flatten)]
    run: RunArgs,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Stroke log JSON written by `paint --strokes-json`.
    #[arg(long)]
    log: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Longer side of the output in pixels.
    #[arg(long)]
    size: u32,

    #[command(flatten)]
    textures: TextureArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Paint(args) => cmd_paint(args),
        Command::Animate(args) => cmd_animate(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn cmd_paint(args: PaintArgs) -> anyhow::Result<()> {
    let config = load_config(&args.run)?;
    let textures = load_texture_args(&args.textures)?;
    let target = strokepaint::load_target(&args.in_path, config.computation_size)
        .with_context(|| format!("load target '{}'", args.in_path.display()))?;

    let background = target.average_rgb();
    let canvas = PixelBuffer::new_filled(target.width(), target.height(), background)?;
    let mut session = PaintSession::new(&target, canvas, &textures, &config)?;
    let mut rng = strokepaint::frame_rng(config.seed, 0);
    let report = session.paint(&mut rng, &mut ProgressSink::new(config.stroke_count));
    let painting = session.into_painting();

    let log = StrokeLog {
        bounds: target.bounds(),
        opacity: config.opacity,
        background,
        strokes: painting.strokes,
    };
    let out = log.render(&textures, config.output_size)?;
    write_png(&args.out, &out)?;

    if let Some(path) = &args.strokes_json {
        ensure_parent(path)?;
        let f = File::create(path)
            .with_context(|| format!("create stroke log '{}'", path.display()))?;
        log.to_writer(BufWriter::new(f))?;
        eprintln!("wrote {}", path.display());
    }

    eprintln!(
        "wrote {} ({} strokes, {} skipped)",
        args.out.display(),
        report.committed,
        report.degraded
    );
    Ok(())
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    let config = load_config(&args.run)?;
    let textures = load_texture_args(&args.textures)?;
    let bytes = std::fs::read(&args.in_path)
        .with_context(|| format!("read animation '{}'", args.in_path.display()))?;
    let anim = strokepaint::decode_animation_frames(&bytes, config.computation_size)?;

    let paintings = strokepaint::paint_frames(
        &anim.frames,
        &textures,
        &config,
        FrameThreading {
            parallel: args.parallel,
            threads: args.threads,
        },
    )?;

    let mut rendered = Vec::with_capacity(paintings.len());
    for (painting, target) in paintings.into_iter().zip(&anim.frames) {
        let log = StrokeLog {
            bounds: target.bounds(),
            opacity: config.opacity,
            background: target.average_rgb(),
            strokes: painting.strokes,
        };
        rendered.push(log.render(&textures, config.output_size)?);
    }

    if let Some(dir) = &args.frames_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create frames dir '{}'", dir.display()))?;
        for (i, frame) in rendered.iter().enumerate() {
            write_png(&dir.join(format!("frame_{i:04}.png")), frame)?;
        }
    }

    let gif = strokepaint::encode_gif(&rendered, &anim.delays_ms)?;
    ensure_parent(&args.out)?;
    std::fs::write(&args.out, gif)
        .with_context(|| format!("write gif '{}'", args.out.display()))?;
    eprintln!("wrote {} ({} frames)", args.out.display(), rendered.len());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let log = StrokeLog::from_path(&args.log)?;
    let textures = load_texture_args(&args.textures)?;
    let out = log.render(&textures, args.size)?;
    write_png(&args.out, &out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn load_config(run: &RunArgs) -> anyhow::Result<PaintConfig> {
    let mut config = match &run.config {
        Some(path) => PaintConfig::from_path(path)?,
        None => PaintConfig::default(),
    };
    if let Some(v) = run.strokes {
        config.stroke_count = v;
    }
    if let Some(v) = run.seed {
        config.seed = v;
    }
    if let Some(v) = run.computation_size {
        config.computation_size = v;
    }
    if let Some(v) = run.output_size {
        config.output_size = v;
    }
    config.validate()?;
    Ok(config)
}

fn load_texture_args(args: &TextureArgs) -> anyhow::Result<TextureSet> {
    if let Some(dir) = &args.textures {
        return Ok(strokepaint::load_texture_dir(dir)?);
    }
    if args.texture.is_empty() {
        anyhow::bail!("pass --textures <dir> or at least one --texture <file>");
    }
    Ok(strokepaint::load_textures(&args.texture)?)
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn write_png(path: &Path, buffer: &PixelBuffer) -> anyhow::Result<()> {
    ensure_parent(path)?;
    image::save_buffer_with_format(
        path,
        &buffer.to_rgba8(),
        buffer.width(),
        buffer.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}

/// Logs progress roughly every tenth of the run.
struct ProgressSink {
    total: u32,
    every: u32,
}

impl ProgressSink {
    fn new(total: u32) -> Self {
        Self {
            total,
            every: (total / 10).max(1),
        }
    }
}

impl StrokeSink for ProgressSink {
    fn on_stroke(&mut self, event: &StrokeEvent<'_>) -> SinkControl {
        let done = event.index + 1;
        if done % self.every == 0 || done == self.total {
            tracing::info!(
                stroke = done,
                total = self.total,
                score = event.score,
                "painting"
            );
        }
        SinkControl::Continue
    }
}
