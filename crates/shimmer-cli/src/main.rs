use anyhow::{bail, Context, Result};
use clap::Parser;
use kurbo::Point;
use shimmer_core::{Color, Shimmer, ShimmerConfig};
use shimmer_raster::{RasterContent, RasterContext, Skeleton};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const PADDING: f64 = 16.0;

/// Render frames of a shimmering skeleton placeholder to PNG files.
#[derive(Parser, Debug)]
#[command(name = "shimmer-render", version, about)]
struct Args {
    /// JSON shimmer configuration. Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output width in pixels.
    #[arg(long, default_value_t = 360)]
    width: u32,

    /// Number of skeleton list rows.
    #[arg(long, default_value_t = 3)]
    rows: usize,

    #[arg(long, default_value_t = 45)]
    frames: u32,

    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Directory receiving frame_NNNN.png files.
    #[arg(long, default_value = "frames")]
    out: PathBuf,

    #[arg(long, default_value = "#FFFFFF")]
    background: Color,

    /// Color of the placeholder shapes beneath the shimmer.
    #[arg(long, default_value = "#E0E0E0")]
    bone: Color,

    /// Emit logs as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.json);

    if args.fps == 0 {
        bail!("--fps must be positive");
    }
    let content_width = args.width as f64 - 2.0 * PADDING;
    if content_width <= 0.0 {
        bail!("--width must exceed {} pixels", 2.0 * PADDING);
    }

    let config = load_config(args.config.as_deref())?;
    let skeleton = Skeleton::list(args.bone, content_width, args.rows);
    let size = skeleton.size();
    let height = (size.height + 2.0 * PADDING).ceil() as u32;

    fs::create_dir_all(&args.out)
        .with_context(|| format!("Failed to create output directory: {}", args.out.display()))?;

    let mut shimmer = Shimmer::new(config).context("Invalid shimmer configuration")?;
    shimmer.on_cycle_complete(|event| info!(cycle = event.cycle, last = event.last, "cycle complete"));
    let mut ctx = RasterContext::new(args.width, height)?;

    let dt = Duration::from_secs_f64(1.0 / args.fps as f64);
    let offset = Point::new(PADDING, PADDING);
    let child: &dyn RasterContent = &skeleton;

    for frame in 0..args.frames {
        if frame > 0 {
            shimmer.advance(dt);
        }
        if shimmer.compositor().needs_layout() {
            shimmer.layout(Some(size));
        }
        ctx.clear(args.background);
        shimmer.paint(&mut ctx, offset, Some(child));

        let path = args.out.join(format!("frame_{:04}.png", frame));
        ctx.save_png(&path)
            .with_context(|| format!("Failed to write frame {}", frame))?;
        debug!(frame, progress = shimmer.progress(), "frame rendered");
    }
    shimmer.dispose();

    info!(
        frames = args.frames,
        width = args.width,
        height,
        out = %args.out.display(),
        "render complete"
    );
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ShimmerConfig> {
    let Some(path) = path else {
        return Ok(ShimmerConfig::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;
    Ok(config)
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
