use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "roza",
    version,
    about = "Sehri, Iftar and prayer times for every district of Bangladesh"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show today's prayer, Sehri and Iftar times
    Times {
        /// District id (e.g. dhaka, sylhet, coxsbazar)
        #[arg(long, short)]
        district: Option<String>,
        /// Language: bn or en
        #[arg(long, short)]
        lang: Option<String>,
    },
    /// Show the full Ramadan Sehri/Iftar calendar
    Ramadan {
        #[arg(long, short)]
        district: Option<String>,
        #[arg(long, short)]
        lang: Option<String>,
    },
    /// List districts, optionally filtered by an English or Bengali name
    Districts {
        query: Option<String>,
        #[arg(long, short)]
        lang: Option<String>,
    },
    /// Show holidays for a day or a whole month
    Holidays {
        /// Day of month; omit to list the whole month
        #[arg(long)]
        day: Option<u32>,
        /// Month, 1-12 (defaults to this month)
        #[arg(long, short)]
        month: Option<u32>,
        /// Year (defaults to this year)
        #[arg(long, short)]
        year: Option<i32>,
        #[arg(long, short)]
        lang: Option<String>,
    },
    /// Print a month calendar with holidays marked
    Calendar {
        /// Month, 1-12 (defaults to this month)
        #[arg(long, short)]
        month: Option<u32>,
        /// Year; on its own prints all twelve months
        #[arg(long, short)]
        year: Option<i32>,
        #[arg(long, short)]
        lang: Option<String>,
    },
    /// Ramadan fasting tracker
    Fast {
        #[command(subcommand)]
        action: FastCommands,
    },
    /// Show or change saved defaults
    Config {
        /// Default district id
        #[arg(long)]
        district: Option<String>,
        /// Default language: bn or en
        #[arg(long)]
        lang: Option<String>,
        /// How today's Ramadan row is picked: static or system
        #[arg(long)]
        today: Option<String>,
        /// Reference table for another Ramadan season (TOML)
        #[arg(long)]
        season_file: Option<PathBuf>,
        /// Go back to the built-in season table
        #[arg(long, conflicts_with = "season_file")]
        builtin_season: bool,
    },
    /// Export a district's Ramadan calendar as JSON
    Export {
        #[arg(long, short)]
        district: Option<String>,
        #[arg(long, short)]
        lang: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum FastCommands {
    /// Mark or unmark a Ramadan day (1-30) as fasted
    Toggle {
        ordinal: u8,
    },
    /// Clear every marked day of the season
    Reset,
    /// Show fasting progress for the season
    Status {
        #[arg(long, short)]
        lang: Option<String>,
    },
}
