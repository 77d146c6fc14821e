//! devdex - color notation and unit converter
//!
//! Converts colors between hex, RGB, HSL, HSV, HWB, CMY and CMYK, and
//! values between physical or data-size units.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

mod commands;

/// Environment variable holding a `tracing` filter, e.g. `devdex_color=trace`.
const LOG_ENV: &str = "DEVDEX_LOG";

#[derive(Parser)]
#[command(name = "devdex")]
#[command(author, version, about = "Color notation and unit converter")]
#[command(long_about = "
Converts color values between notations and quantities between units.

Notations: hex, rgb, hsl, hsv, hwb, cmy, cmyk

Examples:
  devdex color '#ff0000' --from hex --to rgb
  devdex color 'hsl(240, 100%, 50%)' -f hsl -t hex
  devdex color 'cmyk(0, 0, 0, 1)' -f cmyk -t rgb
  devdex inspect '#336699' -f hex --json
  devdex batch colors.txt -f hex -t hsl
  devdex units 10 cm in
  devdex bytes 1 GiB MB
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (repeat for more: -v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads for batch conversion (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a color value to another notation
    #[command(visible_alias = "c")]
    Color(ColorArgs),

    /// Show a color value in every notation
    #[command(visible_alias = "i")]
    Inspect(InspectArgs),

    /// Convert one color value per line of a file or stdin
    #[command(visible_alias = "b")]
    Batch(BatchArgs),

    /// Convert between physical units (length, mass, volume, ...)
    #[command(visible_alias = "u")]
    Units(UnitsArgs),

    /// Convert between data sizes (B, kB, MB, KiB, MiB, ...)
    Bytes(UnitsArgs),
}

/// Arguments for the `color` command.
#[derive(Args)]
struct ColorArgs {
    /// Color value, e.g. '#ff0000' or 'rgb(255, 0, 0)'
    value: String,

    /// Input notation: hex, rgb, hsl, hsv, hwb, cmy, cmyk
    #[arg(short, long)]
    from: String,

    /// Output notation: hex, rgb, hsl, hsv, hwb, cmy, cmyk
    #[arg(short, long)]
    to: String,

    /// Read HWB input with the legacy formula
    #[arg(long)]
    legacy_hwb: bool,
}

/// Arguments for the `inspect` command.
#[derive(Args)]
struct InspectArgs {
    /// Color value
    value: String,

    /// Input notation: hex, rgb, hsl, hsv, hwb, cmy, cmyk
    #[arg(short, long)]
    from: String,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,

    /// Read HWB input with the legacy formula
    #[arg(long)]
    legacy_hwb: bool,
}

/// Arguments for the `batch` command.
#[derive(Args)]
struct BatchArgs {
    /// Input file with one value per line ('-' or omitted for stdin)
    input: Option<PathBuf>,

    /// Input notation: hex, rgb, hsl, hsv, hwb, cmy, cmyk
    #[arg(short, long)]
    from: String,

    /// Output notation: hex, rgb, hsl, hsv, hwb, cmy, cmyk
    #[arg(short, long)]
    to: String,

    /// Machine-readable output (JSON array)
    #[arg(long)]
    json: bool,

    /// Read HWB input with the legacy formula
    #[arg(long)]
    legacy_hwb: bool,
}

/// Arguments for the `units` and `bytes` commands.
#[derive(Args)]
struct UnitsArgs {
    /// Value to convert
    #[arg(allow_negative_numbers = true)]
    value: f64,

    /// Source unit symbol
    from: String,

    /// Target unit symbol
    to: String,
}

/// Installs the global `tracing` subscriber.
///
/// The filter comes from `DEVDEX_LOG` when set, otherwise from the verbosity
/// count. The returned guard must live until exit so buffered file logs are
/// flushed.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let name = path
        .file_name()
        .with_context(|| format!("Log file path has no file name: {}", path.display()))?;

    let appender = tracing_appender::rolling::never(dir, name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(Some(guard))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Color(args) => commands::color::run(args, cli.verbose),
        Commands::Inspect(args) => commands::inspect::run(args, cli.verbose),
        Commands::Batch(args) => commands::batch::run(args, cli.verbose),
        Commands::Units(args) => commands::units::run_physical(args, cli.verbose),
        Commands::Bytes(args) => commands::units::run_data(args, cli.verbose),
    }
}
