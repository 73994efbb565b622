use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "slabstep", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame of a back-to-back tap session as a PNG.
    Frame(FrameArgs),
    /// Render a scripted session as a PNG sequence.
    Play(PlayArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Number of taps, each delivered as soon as the previous step settles.
    #[arg(long, default_value_t = 1)]
    taps: usize,

    /// Frame index (0-based). Defaults to the last frame of the session.
    #[arg(long)]
    frame: Option<u64>,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 360)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 640)]
    height: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Session config JSON.
    #[arg(long)]
    config: PathBuf,

    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Play(args) => cmd_play(args),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let canvas = slabstep::Canvas {
        width: args.width,
        height: args.height,
    };
    let config =
        slabstep::SessionConfig::back_to_back(canvas, slabstep::Fps::default(), args.taps);
    let idx = slabstep::FrameIndex(args.frame.unwrap_or(config.duration - 1));

    let mut player = slabstep::Player::new(config.canvas, config.fps)?;
    let frame = player.frame_at(&config, idx)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    slabstep::write_png(&args.out, &frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let config = slabstep::SessionConfig::from_path(&args.config)?;
    let mut player = slabstep::Player::new(config.canvas, config.fps)?;
    let mut sink = slabstep::PngSequenceSink::new(&args.out_dir);
    let stats = player.play(&config, &mut sink)?;

    eprintln!(
        "wrote {} frames ({} taps, {} steps) to {}",
        stats.frames,
        stats.taps,
        stats.settlements,
        args.out_dir.display()
    );
    Ok(())
}
