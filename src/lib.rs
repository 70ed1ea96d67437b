pub mod charts;
pub mod db;
pub mod downsample;
pub mod metrics;
pub mod segmentation;
pub mod server;
pub mod settings;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use charts::ChartService;
use db::Database;
use settings::Settings;

#[derive(Clone)]
pub struct AppState {
    pub charts: ChartService,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        let db = Database::new(settings.database_path.clone());
        Self {
            charts: ChartService::new(db, settings.default_range_hours),
        }
    }
}

/// Chart data service for the Raspilapse dashboard.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// JSON settings file.
    #[arg(
        long,
        env = "RASPILAPSE_DASHBOARD_SETTINGS",
        default_value = "/home/pi/raspilapse/config/dashboard.json"
    )]
    pub settings: PathBuf,

    /// Capture database, overriding the settings file.
    #[arg(long)]
    pub database: Option<PathBuf>,

    /// Listen address, overriding the settings file.
    #[arg(long)]
    pub bind: Option<String>,
}

impl Cli {
    pub fn resolve_settings(&self) -> Result<Settings> {
        let mut settings = Settings::load(&self.settings)?;
        if let Some(database) = &self.database {
            settings.database_path = database.clone();
        }
        if let Some(bind) = &self.bind {
            settings.bind_address = bind.clone();
        }
        Ok(settings)
    }
}

pub fn run() -> Result<()> {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let settings = cli.resolve_settings()?;

    log::info!(
        "Raspilapse dashboard starting up (database {})",
        settings.database_path.display()
    );
    if !settings.database_path.is_file() {
        log::warn!(
            "Capture database {} does not exist yet; chart endpoints will report it",
            settings.database_path.display()
        );
    }

    let state = AppState::new(&settings);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::serve(state, &settings.bind_address))
}
