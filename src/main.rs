mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::handlers::{self, ConfigChanges};
use roza::config::AppConfig;
use roza::prayer_times::Season;
use roza::tracker::{FastingTracker, SqliteStore};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = AppConfig::load().context("Loading config")?;

    match cli.command {
        Some(Commands::Times { district, lang }) => {
            let season = load_season(&config)?;
            handlers::handle_times(&config, &season, district.as_deref(), lang.as_deref())?;
        }
        Some(Commands::Ramadan { district, lang }) => {
            let season = load_season(&config)?;
            AppConfig::ensure_data_dir()?;
            let db_path = AppConfig::db_path()?;
            handlers::handle_ramadan(
                &config,
                &season,
                &db_path,
                district.as_deref(),
                lang.as_deref(),
            )?;
        }
        Some(Commands::Districts { query, lang }) => {
            handlers::handle_districts(&config, query.as_deref(), lang.as_deref())?;
        }
        Some(Commands::Holidays {
            day,
            month,
            year,
            lang,
        }) => {
            handlers::handle_holidays(&config, day, month, year, lang.as_deref())?;
        }
        Some(Commands::Calendar { month, year, lang }) => {
            handlers::handle_calendar(&config, month, year, lang.as_deref())?;
        }
        Some(Commands::Fast { action }) => {
            let season = load_season(&config)?;
            AppConfig::ensure_data_dir()?;
            let db_path = AppConfig::db_path()?;
            handlers::handle_fast(&config, &season, &db_path, &action)?;
        }
        // Runs without the season table so a broken `season.file` can be fixed.
        Some(Commands::Config {
            district,
            lang,
            today,
            season_file,
            builtin_season,
        }) => {
            let config_path = AppConfig::config_path()?;
            handlers::handle_config(
                &mut config,
                &config_path,
                ConfigChanges {
                    district,
                    lang,
                    today,
                    season_file,
                    builtin_season,
                },
            )?;
        }
        Some(Commands::Export { district, lang }) => {
            let season = load_season(&config)?;
            handlers::handle_export(&config, &season, district.as_deref(), lang.as_deref())?;
        }

        // No subcommand → launch TUI
        None => {
            let season = load_season(&config)?;
            AppConfig::ensure_data_dir()?;
            let db_path = AppConfig::db_path()?;
            let store = SqliteStore::open(&db_path)
                .with_context(|| format!("Opening database at {:?}", db_path))?;
            let tracker = FastingTracker::open(store, season.tracker_key())?;
            tui::app::run(config, AppConfig::config_path()?, season, tracker)?;
        }
    }

    Ok(())
}

fn load_season(config: &AppConfig) -> Result<Season> {
    Season::load_or_builtin(config.season.file.as_deref()).context(
        "Loading Ramadan season table (run `roza config --builtin-season` to go back to the built-in one)",
    )
}
