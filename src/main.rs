// SvgSweep - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading (before logging, since it may set the level)
// 3. Logging initialisation
// 4. Running one relocation pass and printing its per-file lines
//
// Exit code 1 only when the pass cannot start (or an explicit --config is
// missing). Per-file failures are printed and do not change the exit code.

use clap::Parser;
use std::path::PathBuf;
use svgsweep::app::relocate::{self, RelocatorConfig};
use svgsweep::core::model::PassEvent;
use svgsweep::platform::config::{self, PlatformPaths};
use svgsweep::util;

/// SvgSweep - move SVG files hiding behind raster extensions.
///
/// Every regular file directly inside the source directory whose leading
/// bytes look like SVG is moved into the destination directory with its
/// extension replaced by `.svg`. Everything else is left alone.
#[derive(Parser, Debug)]
#[command(name = "svgsweep", version, about)]
struct Cli {
    /// Directory to scan (overrides [paths] source_dir).
    #[arg(short = 's', long = "source")]
    source: Option<PathBuf>,

    /// Directory that receives SVG files (overrides [paths] destination_dir).
    #[arg(short = 'o', long = "destination")]
    destination: Option<PathBuf>,

    /// Path to config.toml (defaults to the platform config directory).
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "Run aborted");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> util::error::Result<()> {
    let config_path = match cli.config {
        Some(ref path) => {
            config::require_file(path)?;
            path.clone()
        }
        None => PlatformPaths::resolve().config_file(),
    };
    let (app_config, config_warnings) = config::load_config(&config_path);

    util::logging::init(cli.debug, app_config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        config = %config_path.display(),
        "SvgSweep starting"
    );

    for warning in &config_warnings {
        tracing::warn!("{}", warning);
    }

    // CLI > config.toml > built-in default.
    let relocator = RelocatorConfig {
        source_dir: cli.source.unwrap_or(app_config.source_dir),
        destination_dir: cli.destination.unwrap_or(app_config.destination_dir),
    };

    for warning in config::validate_paths(&relocator.source_dir, &relocator.destination_dir) {
        tracing::warn!("{}", warning);
    }

    relocate::run_pass(&relocator, |event| match event {
        PassEvent::Moved { original, renamed } => {
            println!(
                "Moving SVG: {} -> {}",
                original.to_string_lossy(),
                renamed.to_string_lossy()
            );
        }
        PassEvent::Failed { file_name, error } => {
            println!("Error processing {}: {error}", file_name.to_string_lossy());
        }
    })?;

    Ok(())
}
