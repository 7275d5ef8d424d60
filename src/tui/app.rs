use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use std::path::PathBuf;

use roza::calendar::{HolidayCalendarIndex, shift_month};
use roza::config::AppConfig;
use roza::districts::{find_district, search_districts};
use roza::models::{District, Language, PrayerEvent, PrayerKind, RAMADAN_DAYS, RamadanDayResult};
use roza::prayer_times::{ClockTime, Season, Today, build_schedule, next_event};
use roza::tracker::{FastingStore, FastingTracker, SqliteStore};

use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{
    calendar, district_picker, header, next_event as next_widget, progress, ramadan, schedule,
    statusbar,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Today,
    Ramadan,
    Calendar,
    Help,
}

impl View {
    fn next(self) -> View {
        match self {
            View::Today => View::Ramadan,
            View::Ramadan => View::Calendar,
            View::Calendar | View::Help => View::Today,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    DistrictSearch,
}

pub struct App<S: FastingStore> {
    pub view: View,
    pub config: AppConfig,
    pub config_path: PathBuf,
    pub season: Season,
    pub tracker: FastingTracker<S>,
    pub holidays: HolidayCalendarIndex,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub picker_idx: usize,
    pub message: Option<String>,

    pub district: &'static District,
    pub lang: Language,
    pub ramadan_cursor: usize,
    pub cal_year: i32,
    pub cal_month: u32,

    // Cached state (refreshed on tick/action)
    pub today: NaiveDate,
    pub today_mode: Today,
    pub schedule: Vec<PrayerEvent>,
    pub month: Vec<RamadanDayResult>,
    pub next_event: Option<(PrayerKind, i64)>,
    previous_view: View,
}

impl<S: FastingStore> App<S> {
    pub fn new(
        config: AppConfig,
        config_path: PathBuf,
        season: Season,
        tracker: FastingTracker<S>,
    ) -> Self {
        let today = Local::now().date_naive();
        let today_mode = config.season.today.resolve(today);
        let district = find_district(&config.general.district);
        let lang = config.general.language;
        let ramadan_cursor = season
            .current_ordinal(today_mode)
            .map(|o| o as usize - 1)
            .unwrap_or(0);

        let mut app = App {
            view: View::Today,
            config,
            config_path,
            season,
            tracker,
            holidays: HolidayCalendarIndex::builtin(),
            should_quit: false,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            picker_idx: 0,
            message: None,
            district,
            lang,
            ramadan_cursor,
            cal_year: today.year(),
            cal_month: today.month0(),
            today,
            today_mode,
            schedule: Vec::new(),
            month: Vec::new(),
            next_event: None,
            previous_view: View::Today,
        };
        app.reload();
        app
    }

    /// Rebuild everything that depends on the district or language.
    pub fn reload(&mut self) {
        self.schedule = build_schedule(self.district, self.lang, &self.season.reference);
        self.month = self.season.build_month(self.district, self.lang);
        self.tick_at(ClockTime::from(Local::now().time()));
    }

    pub fn tick(&mut self) {
        let today = Local::now().date_naive();
        if today != self.today {
            self.today = today;
            self.today_mode = self.config.season.today.resolve(today);
        }
        self.tick_at(ClockTime::from(Local::now().time()));
    }

    fn tick_at(&mut self, now: ClockTime) {
        self.next_event = Some(next_event(self.district, &self.season.reference, now));
    }

    pub fn current_ordinal(&self) -> Option<u8> {
        self.season.current_ordinal(self.today_mode)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only handle actual key presses; some terminals also report release/repeat
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.input_mode {
            InputMode::DistrictSearch => self.handle_picker_key(key),
            InputMode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        self.message = None;

        if self.view == View::Help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                self.view = self.previous_view;
            }
            return;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => {
                self.previous_view = self.view;
                self.view = View::Help;
            }
            KeyCode::Tab => {
                self.view = self.view.next();
            }
            KeyCode::Char('1') => self.view = View::Today,
            KeyCode::Char('2') => self.view = View::Ramadan,
            KeyCode::Char('3') => self.view = View::Calendar,
            KeyCode::Char('l') => {
                self.lang = self.lang.toggled();
                self.config.general.language = self.lang;
                self.persist_config();
                self.reload();
            }
            KeyCode::Char('d') => {
                self.input_mode = InputMode::DistrictSearch;
                self.input_buffer.clear();
                self.picker_idx = 0;
            }
            _ => match self.view {
                View::Ramadan => self.handle_ramadan_key(key),
                View::Calendar => self.handle_calendar_key(key),
                View::Today | View::Help => {}
            },
        }
    }

    fn handle_ramadan_key(&mut self, key: KeyEvent) {
        let last = RAMADAN_DAYS as usize - 1;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.ramadan_cursor = self.ramadan_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.ramadan_cursor < last {
                    self.ramadan_cursor += 1;
                }
            }
            KeyCode::Home => self.ramadan_cursor = 0,
            KeyCode::End => self.ramadan_cursor = last,
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_focused_day(),
            _ => {}
        }
    }

    fn handle_calendar_key(&mut self, key: KeyEvent) {
        let delta = match key.code {
            KeyCode::Left => -1,
            KeyCode::Right => 1,
            KeyCode::Up => -12,
            KeyCode::Down => 12,
            KeyCode::Char('t') => {
                self.cal_year = self.today.year();
                self.cal_month = self.today.month0();
                return;
            }
            _ => return,
        };
        (self.cal_year, self.cal_month) = shift_month(self.cal_year, self.cal_month, delta);
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.input_buffer.clear();
            }
            KeyCode::Enter => {
                let matches = self.picker_matches();
                if let Some(&d) = matches.get(self.picker_idx) {
                    self.district = d;
                    self.config.general.district = d.id.to_string();
                    self.persist_config();
                    self.reload();
                    self.input_mode = InputMode::Normal;
                    self.input_buffer.clear();
                }
            }
            KeyCode::Up => {
                self.picker_idx = self.picker_idx.saturating_sub(1);
            }
            KeyCode::Down => {
                let max = self.picker_matches().len().saturating_sub(1);
                if self.picker_idx < max {
                    self.picker_idx += 1;
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
                self.picker_idx = 0;
            }
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
                self.picker_idx = 0;
            }
            _ => {}
        }
    }

    pub fn picker_matches(&self) -> Vec<&'static District> {
        search_districts(&self.input_buffer)
    }

    fn toggle_focused_day(&mut self) {
        let ordinal = self.ramadan_cursor as u8 + 1;
        if let Err(e) = self.tracker.toggle(ordinal) {
            log::error!("Could not save fasting day {}: {}", ordinal, e);
            self.message = Some(format!("✗ {}", e));
        }
    }

    fn persist_config(&mut self) {
        if let Err(e) = self.config.save_to(&self.config_path) {
            log::warn!("Could not save config: {:#}", e);
            self.message = Some(format!("✗ config not saved: {}", e));
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let outer_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // header
                Constraint::Min(0),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        header::render(
            frame,
            outer_chunks[0],
            self.district,
            self.lang,
            self.season.hijri_year,
            self.current_ordinal(),
            self.today,
        );
        statusbar::render(frame, outer_chunks[2], &self.view, self.message.as_deref());

        let body = outer_chunks[1];
        match self.view {
            View::Today => self.draw_today(frame, body),
            View::Ramadan => self.draw_ramadan(frame, body),
            View::Calendar => self.draw_calendar(frame, body),
            View::Help => {
                match self.previous_view {
                    View::Ramadan => self.draw_ramadan(frame, body),
                    View::Calendar => self.draw_calendar(frame, body),
                    View::Today | View::Help => self.draw_today(frame, body),
                }
                self.draw_help_overlay(frame);
            }
        }

        if self.input_mode == InputMode::DistrictSearch {
            district_picker::render(
                frame,
                area,
                &self.input_buffer,
                &self.picker_matches(),
                self.picker_idx,
                self.lang,
            );
        }
    }

    fn fasted(&self) -> Vec<u8> {
        self.tracker.fasted_days().collect()
    }

    fn draw_today(&self, frame: &mut Frame, body: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(body);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(10), // schedule
                Constraint::Min(0),     // holidays today
            ])
            .split(columns[0]);

        schedule::render(
            frame,
            left[0],
            &self.schedule,
            self.next_event.map(|(k, _)| k),
            self.lang,
        );
        self.draw_today_holidays(frame, left[1]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7), // next event
                Constraint::Min(0),    // progress
            ])
            .split(columns[1]);

        next_widget::render(frame, right[0], self.next_event, self.lang);
        progress::render(
            frame,
            right[1],
            &self.fasted(),
            self.current_ordinal(),
            self.lang,
        );
    }

    fn draw_today_holidays(&self, frame: &mut Frame, area: Rect) {
        let title = match self.lang {
            Language::Bn => " আজকের দিবস ",
            Language::En => " Today ",
        };
        let events =
            self.holidays
                .events_on(self.today.day(), self.today.month0(), self.today.year());

        let mut lines = vec![Line::from("")];
        if events.is_empty() {
            lines.push(Line::from(Span::styled("  --", theme::dim())));
        }
        for e in events {
            let style = if e.is_holiday {
                theme::red()
            } else {
                theme::amber()
            };
            lines.push(Line::from(Span::styled(format!("  {}", e.title(self.lang)), style)));
        }

        let block = Block::default()
            .title(Span::styled(title, theme::teal()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border(false))
            .style(theme::surface());
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn draw_ramadan(&self, frame: &mut Frame, body: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(60), Constraint::Length(38)])
            .split(body);

        let fasted = self.fasted();
        ramadan::render(
            frame,
            columns[0],
            ramadan::RamadanTable {
                rows: &self.month,
                fasted: &fasted,
                current: self.current_ordinal(),
                cursor: self.ramadan_cursor,
                lang: self.lang,
                focused: self.view == View::Ramadan,
            },
        );
        progress::render(
            frame,
            columns[1],
            &fasted,
            self.current_ordinal(),
            self.lang,
        );
    }

    fn draw_calendar(&self, frame: &mut Frame, body: Rect) {
        let events = self.holidays.month_events(self.cal_month, self.cal_year);
        calendar::render(
            frame,
            body,
            self.cal_year,
            self.cal_month,
            &events,
            self.today,
            self.lang,
        );
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();

        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 6,
            width: area.width / 2,
            height: (area.height * 2 / 3).max(16),
        }
        .intersection(area);

        frame.render_widget(Clear, popup_area);

        let bindings = [
            ("[Tab]        ", "Next view"),
            ("[1] [2] [3]  ", "Today / Ramadan / Calendar"),
            ("[d]          ", "Choose district"),
            ("[l]          ", "Toggle Bangla / English"),
            ("[↑ ↓]        ", "Move in the Ramadan table"),
            ("[Space]      ", "Mark day as fasted"),
            ("[← →]        ", "Previous / next month"),
            ("[t]          ", "Back to this month"),
            ("[?]          ", "Toggle help"),
            ("[Esc] [q]    ", "Quit"),
        ];

        let mut help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                theme::yellow().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for (key, label) in bindings {
            help_text.push(Line::from(vec![
                Span::styled(format!("  {}", key), theme::yellow()),
                Span::styled(label, theme::dim()),
            ]));
        }

        let block = Block::default()
            .title(Span::styled(" Help ", theme::yellow()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::yellow())
            .style(theme::surface());

        let paragraph = Paragraph::new(help_text).block(block);
        frame.render_widget(paragraph, popup_area);
    }
}

/// Run the TUI event loop.
pub fn run(
    config: AppConfig,
    config_path: PathBuf,
    season: Season,
    tracker: FastingTracker<SqliteStore>,
) -> Result<()> {
    let mut app = App::new(config, config_path, season, tracker);

    let mut terminal = ratatui::init();
    let events = EventHandler::new(1000);

    let result = loop {
        if let Err(e) = terminal.draw(|frame| app.draw(frame)) {
            break Err(e.into());
        }

        match events.next() {
            Ok(Event::Key(key)) => {
                app.handle_key(key);
                if app.should_quit {
                    break Ok(());
                }
            }
            Ok(Event::Resize) => {}
            Ok(Event::Tick) => app.tick(),
            Err(e) => break Err(e.into()),
        }
    };

    ratatui::restore();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
    use roza::tracker::MemoryStore;

    /// The app saves its config inside the returned directory.
    fn app() -> (App<MemoryStore>, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let season = Season::builtin().unwrap();
        let tracker = FastingTracker::open(MemoryStore::new(), season.tracker_key()).unwrap();
        let app = App::new(
            AppConfig::default(),
            dir.path().join("config.toml"),
            season,
            tracker,
        );
        (app, dir)
    }

    fn render(app: &App<MemoryStore>, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn press(app: &mut App<MemoryStore>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App<MemoryStore>, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn starts_on_today_with_config_defaults() {
        let (app, _dir) = app();
        assert_eq!(app.view, View::Today);
        assert_eq!(app.district.id, "dhaka");
        assert_eq!(app.lang, Language::Bn);
        assert_eq!(app.schedule.len(), 8);
        assert_eq!(app.month.len(), 30);
        assert!(app.next_event.is_some());
        // Static mode: day one is "today"
        assert_eq!(app.current_ordinal(), Some(1));
        assert_eq!(app.ramadan_cursor, 0);
    }

    #[test]
    fn tab_cycles_views() {
        let (mut app, _dir) = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.view, View::Ramadan);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.view, View::Calendar);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.view, View::Today);
    }

    #[test]
    fn help_returns_to_previous_view() {
        let (mut app, _dir) = app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.view, View::Help);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.view, View::Calendar);
        assert!(!app.should_quit);
    }

    #[test]
    fn space_toggles_fasting_under_cursor() {
        let (mut app, _dir) = app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.tracker.is_fasted(3));
        press(&mut app, KeyCode::Enter);
        assert!(!app.tracker.is_fasted(3));
    }

    #[test]
    fn ramadan_cursor_is_clamped() {
        let (mut app, _dir) = app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Up);
        assert_eq!(app.ramadan_cursor, 0);
        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.ramadan_cursor, 29);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.tracker.is_fasted(30));
    }

    #[test]
    fn calendar_arrows_wrap_years() {
        let (mut app, _dir) = app();
        press(&mut app, KeyCode::Char('3'));
        app.cal_year = 2026;
        app.cal_month = 0;
        press(&mut app, KeyCode::Left);
        assert_eq!((app.cal_year, app.cal_month), (2025, 11));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!((app.cal_year, app.cal_month), (2026, 1));
    }

    #[test]
    fn district_picker_filters_and_cancels() {
        let (mut app, _dir) = app();
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.input_mode, InputMode::DistrictSearch);
        type_str(&mut app, "syl");
        assert_eq!(app.picker_matches()[0].id, "sylhet");
        // 'q' is text while searching, not quit
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert!(app.picker_matches().is_empty());
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.district.id, "dhaka");
    }

    #[test]
    fn esc_quits_from_normal_mode() {
        let (mut app, _dir) = app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn language_toggle_is_saved() {
        let (mut app, dir) = app();
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.lang, Language::En);
        assert_eq!(app.schedule[0].name, "Sehri");
        assert!(app.message.is_none());

        let saved = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(saved.general.language, Language::En);
    }

    #[test]
    fn picking_a_district_is_saved() {
        let (mut app, dir) = app();
        let dhaka_sehri = app.month[0].sehri.clone();
        press(&mut app, KeyCode::Char('d'));
        type_str(&mut app, "Sylhet");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.district.id, "sylhet");
        assert_ne!(app.month[0].sehri, dhaka_sehri);

        let saved = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(saved.general.district, "sylhet");
    }

    #[test]
    fn save_failure_is_reported_not_fatal() {
        let (mut app, dir) = app();
        // A directory where the file should be makes the write fail.
        std::fs::create_dir(dir.path().join("config.toml")).unwrap();
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.lang, Language::En);
        assert!(app.message.is_some());
    }

    #[test]
    fn every_view_draws_on_small_terminals() {
        let (mut app, _dir) = app();
        for view in [View::Today, View::Ramadan, View::Calendar, View::Help] {
            app.view = view;
            for (w, h) in [(80, 10), (30, 8), (120, 40), (10, 3)] {
                render(&app, w, h);
            }
        }
    }

    #[test]
    fn today_view_shows_half_filled_progress_bar() {
        let (mut app, _dir) = app();
        for ordinal in 1..=15 {
            app.tracker.toggle(ordinal).unwrap();
        }
        let buffer = render(&app, 120, 40);
        let symbols: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        let filled = symbols.matches('█').count();
        let empty = symbols.matches('░').count();
        assert!(filled > 0);
        assert_eq!(filled, empty);
    }

    #[test]
    fn help_overlay_fits_short_terminal() {
        let (mut app, _dir) = app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.view, View::Help);
        render(&app, 80, 10);
    }

    #[test]
    fn district_picker_fits_narrow_terminal() {
        let (mut app, _dir) = app();
        press(&mut app, KeyCode::Char('d'));
        for (w, h) in [(50, 10), (20, 6), (80, 24)] {
            render(&app, w, h);
        }
        type_str(&mut app, "zzz");
        render(&app, 50, 10);
    }
}
