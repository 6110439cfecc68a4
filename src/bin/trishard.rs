use std::{fs, path::PathBuf};

use anyhow::Context as _;
use clap::Parser;
use rand::{SeedableRng as _, rngs::StdRng};
use trishard::{
    AlphaMode, Frame, Mesh, ProgressQueue, Rgba8, SamplingMode, Texture, progress_from_angle,
    render,
};

#[derive(Parser, Debug)]
#[command(name = "trishard", version, about = "Render a shatter animation to PNG frames")]
struct Cli {
    /// Source image to shatter.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory for numbered PNG frames.
    #[arg(long)]
    out_dir: PathBuf,

    /// Number of frames across one full dial turn.
    #[arg(long, default_value_t = 90)]
    frames: u32,

    /// Destination frame width in pixels.
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Destination frame height in pixels.
    #[arg(long, default_value_t = 480)]
    height: u32,

    /// Grid cells per axis of the source image.
    #[arg(long, default_value_t = 4)]
    cells: u32,

    /// Sample the texture with bilinear filtering instead of nearest.
    #[arg(long)]
    bilinear: bool,

    /// Weight each pixel by the sampled alpha instead of painting opaque.
    #[arg(long)]
    alpha_mix: bool,

    /// Seed for curve and rotation randomness.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.frames == 0 || cli.cells == 0 {
        anyhow::bail!("--frames and --cells must be > 0");
    }

    let bytes = fs::read(&cli.in_path)
        .with_context(|| format!("read source image {}", cli.in_path.display()))?;
    let texture = Texture::decode(&bytes)?;
    let step = texture.width() / cli.cells;

    let mut rng = StdRng::seed_from_u64(cli.seed);
    let mut mesh = Mesh::build(texture.width(), texture.height(), step, &mut rng)?;

    let sampling = if cli.bilinear {
        SamplingMode::Bilinear
    } else {
        SamplingMode::Nearest
    };
    let alpha = if cli.alpha_mix {
        AlphaMode::Weighted
    } else {
        AlphaMode::Opaque
    };

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("create output directory {}", cli.out_dir.display()))?;

    let mut queue = ProgressQueue::default();
    let mut frame = Frame::new(cli.width, cli.height)?;
    let mut written = 0u32;
    for tick in 0..cli.frames {
        queue.push(progress_from_angle(tick * 360 / cli.frames));
        for progress in queue.drain() {
            frame.fill(Rgba8::WHITE);
            render(&mut mesh, progress, &mut frame, &texture, sampling, alpha)?;
            let path = cli.out_dir.join(format!("frame_{written:04}.png"));
            frame
                .clone()
                .into_rgba_image()
                .save(&path)
                .with_context(|| format!("write {}", path.display()))?;
            written += 1;
        }
    }

    println!("wrote {written} frames to {}", cli.out_dir.display());
    Ok(())
}
