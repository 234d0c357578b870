// Command-line entry point. The resize logic lives in the library crate.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use batch_resizer::{ResizeJob, resize_images};

/// Resize every image in a folder to a target width and save JPEG copies
/// to a sibling folder named `<folder>-w-<width>`.
#[derive(Parser, Debug)]
#[command(name = "batch-resizer", version, about)]
struct Cli {
    /// Folder containing the images; asked for interactively when omitted
    folder: Option<PathBuf>,

    /// Target width in pixels; narrower images keep their size
    #[arg(default_value_t = ResizeJob::DEFAULT_WIDTH, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// JPEG quality, 1-100
    #[arg(default_value_t = ResizeJob::DEFAULT_QUALITY)]
    quality: u8,

    /// Print diagnostics to stderr (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Print the run summary as JSON instead of the progress report
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_file(false)         // Remove file path
        .with_line_number(false)  // Remove line numbers
        .with_thread_ids(false)   // Remove thread IDs
        .with_thread_names(false) // Remove thread names
        .with_target(false)       // Remove module path
        .with_ansi(true)          // Keep colored output
        .with_writer(io::stderr)  // stdout is reserved for the report
        .compact()
        .init();
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let folder = match cli.folder {
        Some(folder) => folder,
        None => prompt_for_folder()?,
    };

    let job = ResizeJob::new(folder)
        .with_target_width(cli.width)
        .with_quality(cli.quality);
    info!("Resizing {} to width {} at quality {}", job.input_dir.display(), job.target_width, job.quality);

    let json = cli.json;
    match resize_images(&job, |progress| {
        if !json {
            println!("{progress}");
        }
    }) {
        Ok(summary) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
            debug!("{} processed, {} failed", summary.processed, summary.failed());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_input_folder_error() => {
            eprintln!("Error: {e}");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

fn prompt_for_folder() -> anyhow::Result<PathBuf> {
    // stderr, so a `--json` document on stdout stays parseable
    let mut stderr = io::stderr();
    write!(stderr, "Enter folder path (or press Enter for current directory): ")?;
    stderr.flush()?;

    let mut answer = String::new();
    io::stdin()
        .read_line(&mut answer)
        .context("Failed to read folder path from stdin")?;

    Ok(folder_from_answer(&answer))
}

/// An empty answer means the current directory.
fn folder_from_answer(answer: &str) -> PathBuf {
    match answer.trim() {
        "" => PathBuf::from("."),
        folder => PathBuf::from(folder),
    }
}
