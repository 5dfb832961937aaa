use anyhow::{Context, Result};
use clap::Parser;
use img_webp::{BatchConverter, ConvertConfig, DEFAULT_DIRECTORY};
use shared_utils::logging::{self, LogConfig};
use std::path::PathBuf;
use std::time::Instant;
use tracing::Level;

#[derive(Parser)]
#[command(name = "img-webp")]
#[command(
    version,
    about = "Convert PNG/JPEG images in a directory to WebP (quality 80) and delete the originals",
    long_about = None
)]
struct Cli {
    /// Directory whose images are converted (not recursive)
    #[arg(value_name = "DIRECTORY", default_value = DEFAULT_DIRECTORY)]
    directory: PathBuf,

    /// Mirror debug logs to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Where the rolling log file is written (defaults to the temp dir)
    #[arg(long, value_name = "PATH")]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut log_config = LogConfig::default().with_console(cli.verbose);
    if cli.verbose {
        log_config = log_config.with_level(Level::DEBUG);
    }
    if let Some(dir) = &cli.log_dir {
        log_config = log_config.with_log_dir(dir);
    }
    if let Err(e) = logging::init_logging("img_webp", log_config) {
        eprintln!("⚠️  File logging unavailable: {:#}", e);
    }

    if let Err(reason) =
        shared_utils::check_safe_for_destructive(&cli.directory, "convert and delete")
    {
        eprintln!("{}", reason);
        std::process::exit(1);
    }

    let start = Instant::now();
    logging::log_operation_start("webp_conversion", &cli.directory);

    let converter = BatchConverter::new(ConvertConfig::new(&cli.directory));
    let outcome = converter.run();
    logging::log_operation_end("webp_conversion", start.elapsed(), outcome.is_ok());

    // per-file failures are inside the summary; only a directory failure lands here
    let result = outcome.with_context(|| {
        format!(
            "❌ Conversion aborted, cannot list {}",
            cli.directory.display()
        )
    })?;

    shared_utils::print_run_summary(&result, start.elapsed());
    Ok(())
}
