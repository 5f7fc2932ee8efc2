// ABOUTME: Command-line entry point that uploads planned workouts to intervals.icu
// ABOUTME: Parses flags, loads configuration, runs the pipeline, and maps errors to exit codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Usage:
//! ```bash
//! # Upload training.json using ATHLETE_ID and API_KEY from the environment
//! upload-trainings
//!
//! # Upload another file with pace zones
//! upload-trainings --file plan.json --zone-type Pace
//!
//! # Print the formatted events without uploading
//! upload-trainings --dry-run
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};
use workout_uploader::{
    config::{ConfigOverrides, UploaderConfig},
    errors::PipelineError,
    logging::LoggingConfig,
    models::{TargetMode, UnclassifiedSport, ZoneType},
    pipeline::{self, PipelineOutcome},
};

#[derive(Parser, Debug)]
#[command(
    name = "upload-trainings",
    version,
    about = "Upload planned workouts to an intervals.icu calendar",
    long_about = "Reads a JSON document with a `trainings` array, formats each workout as a \
                  calendar event, and creates them all with one bulk request."
)]
struct Cli {
    /// Training document path (env: TRAINING_FILE)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// intervals.icu athlete ID (env: ATHLETE_ID)
    #[arg(long)]
    athlete_id: Option<String>,

    /// intervals.icu API key (env: API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// API base URL (env: INTERVALS_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Zone label in step descriptions: HR or Pace (env: ZONE_TYPE)
    #[arg(long)]
    zone_type: Option<ZoneType>,

    /// Step target mode: zone or power (env: TARGET_MODE)
    #[arg(long)]
    target_mode: Option<TargetMode>,

    /// Sport for names without Bike/Run/Swim: ride, run, swim or reject (env: UNCLASSIFIED_SPORT)
    #[arg(long)]
    unclassified_sport: Option<UnclassifiedSport>,

    /// Request timeout in seconds (env: HTTP_TIMEOUT_SECS)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Print the formatted events as JSON instead of uploading
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            training_file: self.file.clone(),
            athlete_id: self.athlete_id.clone(),
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            zone_type: self.zone_type,
            target_mode: self.target_mode,
            unclassified_sport: self.unclassified_sport,
            timeout_secs: self.timeout_secs,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Failed to load .env file: {e}");
        }
    }

    if let Err(e) = LoggingConfig::from_env().verbose(cli.verbose).init() {
        eprintln!("{e}");
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(&cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code(), "{}: {e}", e.code().description());
            eprintln!("Error: {e}");
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        }
    }
}

async fn run(cli: &Cli) -> Result<(), PipelineError> {
    let config = UploaderConfig::from_env()?.with_overrides(cli.overrides())?;
    config.log_summary();

    match pipeline::run(&config, cli.dry_run).await? {
        PipelineOutcome::Uploaded(receipt) => {
            info!(
                http.status = receipt.status,
                events.count = receipt.event_count,
                "Trainings uploaded"
            );
            println!("Trainings uploaded successfully.");
        }
        PipelineOutcome::NothingToUpload => {
            warn!(file = %config.training_file.display(), "Training file has no workouts");
            println!("No trainings to upload.");
        }
        PipelineOutcome::DryRun(events) => println!("{}", pipeline::render_events(&events)?),
    }
    Ok(())
}
