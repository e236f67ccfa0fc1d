use clap::Parser;
use sc2winjupos::{DEFAULT_IMAGE_PATTERN, Renamer, TransferMode};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sc2winjupos", version)]
#[command(
    about = "Create copies (or hardlinks) of stacked image files created using SharpCap 4 and AutoStakkert! 3 with filenames suitable for WinJUPOS' Image Measurement.",
    long_about = None
)]
struct Args {
    /// Directory where SharpCap's CameraSettings files are saved
    sc_dir: PathBuf,

    /// Directory where stacked image files are saved
    as_dir: PathBuf,

    /// Directory where renamed copies (or hardlinks) of stacked image files are saved
    target_dir: PathBuf,

    /// Filename pattern of stacked image files
    #[arg(short = 'p', long, default_value = DEFAULT_IMAGE_PATTERN)]
    pattern: String,

    /// Create hardlinks instead of copies
    #[arg(short = 'l', long)]
    link: bool,

    /// Observer name. By default, value of USER or USERNAME environment variable is used
    #[arg(short = 'o', long)]
    observer: Option<String>,

    /// Image information. {cam} expands to the camera name, {ff} to the free field value of AS!3
    #[arg(short = 'i', long)]
    imageinfo: Option<String>,

    /// Do not copy (or hardlink) files
    #[arg(long)]
    dry_run: bool,

    /// Print the actions as JSON instead of one line each
    #[arg(long)]
    json: bool,

    /// Log skipped files and other details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn default_observer() -> Option<String> {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .ok()
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let renamer = Renamer::builder()
        .observer(args.observer.or_else(default_observer).unwrap_or_default())
        .maybe_imageinfo(args.imageinfo)
        .pattern(args.pattern)
        .mode(if args.link {
            TransferMode::Link
        } else {
            TransferMode::Copy
        })
        .dry_run(args.dry_run)
        .build()?;

    let prefix = if renamer.is_dry_run() { "[dry-run] " } else { "" };
    let actions = renamer.run(&args.sc_dir, &args.as_dir, &args.target_dir, |action| {
        if !args.json {
            println!("{prefix}{action}");
        }
    })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&actions)?);
    }

    Ok(())
}
