use chrono::NaiveDate;
use clap::Args;
use gym_manager::config::AppConfig;
use gym_manager::error::AppError;
use gym_manager::gym::Date;
use gym_manager::manager::{GymManager, ImportSummary};
use gym_manager::telemetry;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Args, Debug)]
pub(crate) struct SessionArgs {
    /// Read commands from this file instead of standard input
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Preload members from a CSV file (first_name,last_name,dob,expiration,location)
    #[arg(long)]
    pub(crate) members: Option<PathBuf>,
    /// Date used for age and expiration checks (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Override the configured log filter
    #[arg(long)]
    pub(crate) log_level: Option<String>,
}

pub(crate) fn run(mut args: SessionArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(level) = args.log_level.take() {
        config.telemetry.log_level = level;
    }

    telemetry::init(&config.telemetry)?;

    let today = args.today.map(Date::from).unwrap_or_else(Date::today);
    let mut manager = GymManager::new(&config.schedule, today);
    info!(?config.environment, %today, "gym manager session starting");

    if let Some(path) = args.members.take() {
        let summary = manager.import_members_from_path(&path)?;
        report_import(&path, &summary);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.input.take() {
        Some(path) => {
            let file = File::open(&path)?;
            manager.run(BufReader::new(file), &mut out)?;
        }
        None => manager.run(io::stdin().lock(), &mut out)?,
    }

    Ok(())
}

fn report_import(path: &Path, summary: &ImportSummary) {
    if summary.rejected.is_empty() {
        info!(path = %path.display(), added = summary.added, "members preloaded");
    } else {
        warn!(
            path = %path.display(),
            added = summary.added,
            rejected = summary.rejected.len(),
            "members preloaded with rejected rows"
        );
    }
}
