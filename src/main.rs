use cgpa::core::config::{CliOverrides, CgpaConfig, load_config, resolve};
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cgpa", about = "Credit-weighted CGPA calculator with PDF reports")]
struct Args {
    /// Number of subject rows to start with
    #[arg(short, long)]
    subjects: Option<usize>,

    /// Directory where PDF reports are written
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Log file path
    #[arg(long, default_value = "cgpa.log")]
    log_file: PathBuf,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let config = load_config().unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {}", e);
        CgpaConfig::default()
    });
    let resolved = resolve(
        &config,
        &CliOverrides {
            subjects: args.subjects,
            output_dir: args.output_dir,
        },
    );

    log::info!(
        "CGPA calculator starting with {} subject row(s)",
        resolved.subject_count
    );

    cgpa::tui::run(resolved)
}
