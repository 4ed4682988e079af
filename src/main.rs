// src/main.rs - Command line entry point
use clap::{CommandFactory, Parser};
use clap::error::ErrorKind;
use laser_mask::{LineTransformer, MaskConfig, MaskError, TransformStats, load_config};
use std::path::PathBuf;

/// Turns faint laser marking moves into fast travel moves.
#[derive(Parser, Debug)]
#[command(name = "laser-mask", version, about = "Speeds up raster laser engraving G-code by skipping faint pixels.")]
struct Cli {
    /// G-code file to read
    input: PathBuf,

    /// File to write (created or truncated)
    output: PathBuf,

    /// Marking moves with an intensity below this become travel moves (usually 1-255)
    #[arg(allow_negative_numbers = true)]
    threshold: f64,

    /// Path to a TOML config file with a [mask] table
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also match intensities with three or more integer digits
    #[arg(long)]
    wide_intensity: bool,

    /// Log every rewritten and dropped line
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> Result<TransformStats, MaskError> {
    let mut config = match &cli.config {
        Some(path) => load_config(&path.to_string_lossy())?,
        None => MaskConfig::default(),
    };
    config.threshold = cli.threshold;
    config.wide_intensity |= cli.wide_intensity;

    let transformer = LineTransformer::new(config)?;
    tracing::info!("Masking {} with threshold {}", cli.input.display(), transformer.config().threshold);
    transformer.transform_file(&cli.input, &cli.output)
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            ErrorKind::ValueValidation | ErrorKind::InvalidValue => {
                eprintln!("{e}");
                std::process::exit(1);
            }
            _ => {
                let mut cmd = Cli::command();
                println!("{}", cmd.render_usage());
                std::process::exit(1);
            }
        },
    };

    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(stats) => {
            println!("Output written to {}", cli.output.display());
            println!("Marking moves changed to travel: {}", stats.reclassified);
            println!("Redundant travel moves removed: {}", stats.elided);
        }
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    }
}
