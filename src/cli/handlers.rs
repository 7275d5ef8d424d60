use anyhow::{Context, Result, anyhow, bail};
use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;
use std::path::{Path, PathBuf};

use roza::calendar::{HolidayCalendarIndex, month_grid};
use roza::config::AppConfig;
use roza::districts::{find_district, lookup_district, search_districts};
use roza::models::{District, Language, PrayerKind, RAMADAN_DAYS, RamadanDayResult};
use roza::prayer_times::{ClockTime, Season, TodayMode, build_schedule, next_event};
use roza::tracker::{FastingTracker, SqliteStore};
use roza::utils::format::{
    format_duration_mins, format_offset, format_percent, pad_display, pad_display_left,
    progress_bar,
};
use roza::utils::labels::{
    holiday_kind, islamic_date_label, month_name, prayer_name, weekday_headers,
};
use roza::utils::{localize_digits, localize_number};

use crate::cli::args::FastCommands;

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const TEAL: &str = "\x1b[38;2;77;128;126m";
const RESET: &str = "\x1b[0m";

// ─── Flag resolution ─────────────────────────────────────────────────────────

fn resolve_lang(flag: Option<&str>, config: &AppConfig) -> Result<Language> {
    match flag {
        Some(s) => s.parse(),
        None => Ok(config.general.language),
    }
}

/// An explicit `--district` must exist; the saved default falls back to Dhaka.
fn resolve_district(flag: Option<&str>, config: &AppConfig) -> Result<&'static District> {
    match flag {
        Some(id) => lookup_district(id).ok_or_else(|| {
            anyhow!("Unknown district '{}'. Run `roza districts` to list them.", id)
        }),
        None => Ok(find_district(&config.general.district)),
    }
}

/// Month flags are 1-12 on the command line and zero-based inside.
fn resolve_month(flag: Option<u32>) -> Result<u32> {
    match flag {
        None => Ok(Local::now().date_naive().month0()),
        Some(m @ 1..=12) => Ok(m - 1),
        Some(m) => bail!("Month must be between 1 and 12, got {}", m),
    }
}

fn district_title(district: &District, lang: Language) -> String {
    match lang {
        Language::Bn => district.name_bn.to_string(),
        Language::En => format!("{} ({})", district.name_en, district.name_bn),
    }
}

// ─── Times ───────────────────────────────────────────────────────────────────

pub fn handle_times(
    config: &AppConfig,
    season: &Season,
    district: Option<&str>,
    lang: Option<&str>,
) -> Result<()> {
    let lang = resolve_lang(lang, config)?;
    let district = resolve_district(district, config)?;
    let schedule = build_schedule(district, lang, &season.reference);

    println!();
    println_colored!(TEAL, "  {}", district_title(district, lang));
    println!();

    for event in &schedule {
        let line = format!("  {}  {}", pad_display(&event.name, 10), event.time);
        if event.highlighted {
            println_colored!(AMBER, "{}", line);
        } else {
            println_colored!(BOLD, "{}", line);
        }
    }

    let now = ClockTime::from(Local::now().time());
    let (kind, mins) = next_event(district, &season.reference, now);
    println!();
    println_colored!(
        DIM,
        "  {} {} {}",
        match lang {
            Language::Bn => "পরবর্তী:",
            Language::En => "Next:",
        },
        prayer_name(kind, lang),
        format_duration_mins(mins, lang)
    );
    println!();
    Ok(())
}

// ─── Ramadan ─────────────────────────────────────────────────────────────────

pub fn handle_ramadan(
    config: &AppConfig,
    season: &Season,
    db_path: &Path,
    district: Option<&str>,
    lang: Option<&str>,
) -> Result<()> {
    let lang = resolve_lang(lang, config)?;
    let district = resolve_district(district, config)?;
    let month = season.build_month(district, lang);
    let today = config.season.today.resolve(Local::now().date_naive());
    let tracker = FastingTracker::open(SqliteStore::open(db_path)?, season.tracker_key())?;

    println!();
    println_colored!(
        TEAL,
        "  {} {} · {}",
        match lang {
            Language::Bn => "রমজান",
            Language::En => "Ramadan",
        },
        localize_number(season.hijri_year, lang),
        district_title(district, lang)
    );
    println!();
    println_colored!(
        DIM,
        "  {}{}{}{}",
        pad_display("", 12),
        pad_display("", 28),
        pad_display_left(prayer_name(PrayerKind::Sehri, lang), 10),
        pad_display_left(prayer_name(PrayerKind::Iftar, lang), 10)
    );

    for row in &month {
        let mark = if tracker.is_fasted(row.ordinal) { "✓" } else { "·" };
        let line = format!(
            "  {}{}{}{}  {}",
            pad_display(&row.islamic_date_label, 12),
            pad_display(&row.gregorian_date_label, 28),
            pad_display_left(&localize_digits(&row.sehri, lang), 10),
            pad_display_left(&localize_digits(&row.iftar, lang), 10),
            mark
        );
        if season.is_current_day(row.ordinal, today) {
            println_colored!(AMBER, "{}", line);
        } else if tracker.is_fasted(row.ordinal) {
            println_colored!(GREEN, "{}", line);
        } else {
            println!("{}", line);
        }
    }

    println!();
    print_progress(&tracker, lang);
    if let Some(source) = &season.source {
        println_colored!(DIM, "  {}", source);
    }
    println!();
    Ok(())
}

fn print_progress(tracker: &FastingTracker<SqliteStore>, lang: Language) {
    let count = tracker.fasted_count() as u32;
    println_colored!(
        GREEN,
        "  {}  {} / {}  {}",
        progress_bar(count, RAMADAN_DAYS as u32, 20),
        localize_number(count, lang),
        localize_number(RAMADAN_DAYS, lang),
        format_percent(tracker.progress_ratio(), lang)
    );
}

// ─── Districts ───────────────────────────────────────────────────────────────

pub fn handle_districts(config: &AppConfig, query: Option<&str>, lang: Option<&str>) -> Result<()> {
    let lang = resolve_lang(lang, config)?;
    let found = search_districts(query.unwrap_or(""));

    println!();
    if found.is_empty() {
        println_colored!(AMBER, "  No district matches '{}'", query.unwrap_or(""));
        println!();
        return Ok(());
    }

    for d in found {
        let selected = d.id == config.general.district;
        let line = format!(
            "  {}{}{}",
            pad_display(d.id, 18),
            pad_display(&format!("{} ({})", d.name_en, d.name_bn), 34),
            format_offset(d.offset_minutes, lang)
        );
        if selected {
            println_colored!(TEAL, "{}", line);
        } else {
            println!("{}", line);
        }
    }
    println!();
    Ok(())
}

// ─── Holidays ────────────────────────────────────────────────────────────────

pub fn handle_holidays(
    config: &AppConfig,
    day: Option<u32>,
    month: Option<u32>,
    year: Option<i32>,
    lang: Option<&str>,
) -> Result<()> {
    let lang = resolve_lang(lang, config)?;
    let month = resolve_month(month)?;
    let year = year.unwrap_or_else(|| Local::now().date_naive().year());
    let index = HolidayCalendarIndex::builtin();

    let by_day = match day {
        Some(d) => {
            let events = index.events_on(d, month, year);
            if events.is_empty() {
                Default::default()
            } else {
                std::iter::once((d, events)).collect()
            }
        }
        None => index.month_events(month, year),
    };

    println!();
    println_colored!(
        TEAL,
        "  {} {}",
        month_name(month, lang),
        localize_number(year, lang)
    );
    println!();

    if by_day.is_empty() {
        println_colored!(
            DIM,
            "  {}",
            match lang {
                Language::Bn => "কোনো ছুটি বা দিবস নেই",
                Language::En => "No holidays or events",
            }
        );
    }

    for (d, events) in &by_day {
        for e in events {
            let line = format!(
                "  {}  {}  {}",
                pad_display_left(&localize_number(d, lang), 2),
                pad_display(e.title(lang), 48),
                holiday_kind(e.is_holiday, lang)
            );
            if e.is_holiday {
                println_colored!(RED, "{}", line);
            } else {
                println_colored!(AMBER, "{}", line);
            }
        }
    }
    println!();
    Ok(())
}

// ─── Calendar ────────────────────────────────────────────────────────────────

/// `calendar --year Y` with no month prints the whole year; otherwise one
/// month, defaulting to the current one.
fn calendar_months(
    month: Option<u32>,
    year: Option<i32>,
    today: NaiveDate,
) -> Result<(i32, Vec<u32>)> {
    match (month, year) {
        (None, Some(y)) => Ok((y, (0..12).collect())),
        (m, y) => Ok((y.unwrap_or_else(|| today.year()), vec![resolve_month(m)?])),
    }
}

pub fn handle_calendar(
    config: &AppConfig,
    month: Option<u32>,
    year: Option<i32>,
    lang: Option<&str>,
) -> Result<()> {
    let lang = resolve_lang(lang, config)?;
    let today = Local::now().date_naive();
    let (year, months) = calendar_months(month, year, today)?;
    let index = HolidayCalendarIndex::builtin();

    println!();
    for month in months {
        for line in month_block(&index, year, month, today, lang) {
            println!("{}", line);
        }
        println!();
    }
    Ok(())
}

/// One month as printable lines: title, weekday header, the grid and the
/// month's events. Holidays are red, other observances amber.
fn month_block(
    index: &HolidayCalendarIndex,
    year: i32,
    month: u32,
    today: NaiveDate,
    lang: Language,
) -> Vec<String> {
    let events = index.month_events(month, year);
    let mut lines = Vec::new();

    lines.push(format!(
        "{}  {} {}{}",
        TEAL,
        month_name(month, lang),
        localize_number(year, lang),
        RESET
    ));
    let header: String = weekday_headers(lang)
        .iter()
        .map(|h| pad_display_left(h, 5))
        .collect();
    lines.push(format!("{}  {}{}", DIM, header, RESET));

    let cells = month_grid(year, month);
    for week in cells.chunks(7) {
        let mut line = String::from("  ");
        for cell in week {
            let Some(d) = cell else {
                line.push_str("     ");
                continue;
            };
            let text = pad_display_left(&localize_number(d, lang), 5);
            let is_today =
                today.year() == year && today.month0() == month && today.day() == *d;
            let color = match events.get(d) {
                Some(es) if es.iter().any(|e| e.is_holiday) => RED,
                Some(_) => AMBER,
                None if is_today => BOLD,
                None => "",
            };
            if color.is_empty() {
                line.push_str(&text);
            } else {
                line.push_str(&format!("{}{}{}", color, text, RESET));
            }
        }
        lines.push(line);
    }

    for (d, es) in &events {
        for e in es {
            lines.push(format!(
                "{}  {}  {}{}",
                DIM,
                pad_display_left(&localize_number(d, lang), 2),
                e.title(lang),
                RESET
            ));
        }
    }
    lines
}

// ─── Fasting tracker ─────────────────────────────────────────────────────────

pub fn handle_fast(
    config: &AppConfig,
    season: &Season,
    db_path: &Path,
    action: &FastCommands,
) -> Result<()> {
    let mut tracker = FastingTracker::open(SqliteStore::open(db_path)?, season.tracker_key())?;

    match action {
        FastCommands::Toggle { ordinal } => {
            let lang = config.general.language;
            let fasted = tracker.toggle(*ordinal)?;
            let label = islamic_date_label(*ordinal, lang);
            if fasted {
                println_colored!(GREEN, "  ✓ {} marked as fasted", label);
            } else {
                println_colored!(DIM, "  ○ {} unmarked", label);
            }
            print_progress(&tracker, lang);
        }
        FastCommands::Reset => {
            tracker.reset()?;
            println_colored!(AMBER, "  Cleared fasting record '{}'", tracker.key());
        }
        FastCommands::Status { lang } => {
            let lang = resolve_lang(lang.as_deref(), config)?;
            println!();
            print_progress(&tracker, lang);
            let days: Vec<String> = tracker
                .fasted_days()
                .map(|d| localize_number(d, lang))
                .collect();
            if !days.is_empty() {
                println_colored!(DIM, "  {}", days.join(" "));
            }
            println!();
        }
    }
    Ok(())
}

// ─── Config ──────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct ConfigChanges {
    pub district: Option<String>,
    pub lang: Option<String>,
    pub today: Option<String>,
    pub season_file: Option<PathBuf>,
    pub builtin_season: bool,
}

/// Apply `changes` and save to `config_path`. Never loads the saved season
/// table, so a broken `season.file` can always be replaced from here.
pub fn handle_config(
    config: &mut AppConfig,
    config_path: &Path,
    changes: ConfigChanges,
) -> Result<()> {
    let changed = apply_config_changes(config, changes)?;

    if changed {
        config.save_to(config_path)?;
        println_colored!(GREEN, "  ✓ Configuration saved to {:?}", config_path);
    }

    let district = find_district(&config.general.district);
    println!();
    println!("  District:  {} ({})", district.name_en, district.name_bn);
    println!("  Language:  {}", config.general.language.display_name());
    println!("  Today:     {}", config.season.today.as_str());
    match &config.season.file {
        Some(p) => println!("  Season:    {:?}", p),
        None => println!("  Season:    built-in"),
    }
    println!();
    Ok(())
}

fn apply_config_changes(config: &mut AppConfig, changes: ConfigChanges) -> Result<bool> {
    let mut changed = false;

    if let Some(id) = &changes.district {
        let district = lookup_district(id)
            .ok_or_else(|| anyhow!("Unknown district '{}'. Run `roza districts` to list them.", id))?;
        config.general.district = district.id.to_string();
        changed = true;
    }
    if let Some(lang) = &changes.lang {
        config.general.language = lang.parse()?;
        changed = true;
    }
    if let Some(today) = &changes.today {
        config.season.today = today.parse::<TodayMode>()?;
        changed = true;
    }
    if let Some(path) = changes.season_file {
        // Stored absolute so later runs work from any directory.
        let path = std::fs::canonicalize(&path)
            .with_context(|| format!("Season file {:?} not found", path))?;
        // Refuse to save a table that would break the next start-up.
        Season::load(&path)?;
        config.season.file = Some(path);
        changed = true;
    }
    if changes.builtin_season {
        config.season.file = None;
        changed = true;
    }
    Ok(changed)
}

// ─── Export ──────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct RamadanExport<'a> {
    season: &'a str,
    hijri_year: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
    district: &'a District,
    days: Vec<RamadanDayResult>,
}

pub fn handle_export(
    config: &AppConfig,
    season: &Season,
    district: Option<&str>,
    lang: Option<&str>,
) -> Result<()> {
    let lang = resolve_lang(lang, config)?;
    let district = resolve_district(district, config)?;
    let export = RamadanExport {
        season: &season.season,
        hijri_year: season.hijri_year,
        source: season.source.as_deref(),
        district,
        days: season.build_month(district, lang),
    };
    println!("{}", serde_json::to_string_pretty(&export)?);
    Ok(())
}
