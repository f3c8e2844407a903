use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use fieldmovie::{Config, FfmpegEncoder, JsonDatasetLoader, Stages};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fieldmovie", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render missing frames, then encode movies (requires the configured encoder).
    Render(RunArgs),
    /// Render missing frames only.
    Frames(RunArgs),
    /// Encode movies from frames already on disk.
    Encode(RunArgs),
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Configuration JSON.
    #[arg(long)]
    config: PathBuf,

    /// Field to process; repeat for several. Defaults to `movies.fields`.
    #[arg(long = "field")]
    fields: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => run(args, Stages::All),
        Command::Frames(args) => run(args, Stages::FramesOnly),
        Command::Encode(args) => run(args, Stages::EncodeOnly),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: RunArgs, stages: Stages) -> anyhow::Result<()> {
    let cfg = Config::from_path(&args.config)
        .with_context(|| format!("load config '{}'", args.config.display()))?;

    let fields = if args.fields.is_empty() {
        cfg.movies.fields.clone()
    } else {
        args.fields
    };

    let loader = JsonDatasetLoader::from_config(&cfg);
    let encoder = FfmpegEncoder::from_config(&cfg);
    let summaries = fieldmovie::run_movies(&cfg, &fields, stages, &loader, &encoder)?;

    for s in &summaries {
        eprintln!(
            "{}: {} frames written, {} skipped, {} movies",
            s.field,
            s.frames.written,
            s.frames.skipped,
            s.movies.len()
        );
    }
    Ok(())
}
