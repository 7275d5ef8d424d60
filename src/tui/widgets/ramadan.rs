use ratatui::{
    layout::{Constraint, Rect},
    style::Modifier,
    text::Span,
    widgets::{Block, BorderType, Borders, Cell, Row, Table, TableState},
    Frame,
};

use roza::models::{Language, PrayerKind, RamadanDayResult};
use roza::utils::labels::prayer_name;
use roza::utils::localize_digits;

use crate::tui::theme;

pub struct RamadanTable<'a> {
    pub rows: &'a [RamadanDayResult],
    pub fasted: &'a [u8],
    pub current: Option<u8>,
    pub cursor: usize,
    pub lang: Language,
    pub focused: bool,
}

pub fn render(frame: &mut Frame, area: Rect, table: RamadanTable<'_>) {
    let lang = table.lang;
    let title = match lang {
        Language::Bn => " সেহরি ও ইফতারের সময়সূচি ",
        Language::En => " Sehri & Iftar Timetable ",
    };
    let block = Block::default()
        .title(Span::styled(title, theme::teal()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(table.focused))
        .style(theme::surface());

    let fasted_label = match lang {
        Language::Bn => "রোজা",
        Language::En => "Fast",
    };
    let header = Row::new(vec![
        Cell::from(""),
        Cell::from(""),
        Cell::from(prayer_name(PrayerKind::Sehri, lang)),
        Cell::from(prayer_name(PrayerKind::Iftar, lang)),
        Cell::from(fasted_label),
    ])
    .style(theme::dim().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = table
        .rows
        .iter()
        .map(|r| {
            let fasted = table.fasted.contains(&r.ordinal);
            let is_today = table.current == Some(r.ordinal);

            let label_style = if is_today {
                theme::yellow().add_modifier(Modifier::BOLD)
            } else {
                theme::bold()
            };
            let mark = if fasted {
                Span::styled("  ✓", theme::green().add_modifier(Modifier::BOLD))
            } else {
                Span::styled("  ○", theme::dim())
            };

            Row::new(vec![
                Cell::from(Span::styled(r.islamic_date_label.clone(), label_style)),
                Cell::from(Span::styled(r.gregorian_date_label.clone(), theme::dim())),
                Cell::from(Span::styled(localize_digits(&r.sehri, lang), theme::teal())),
                Cell::from(Span::styled(localize_digits(&r.iftar, lang), theme::yellow())),
                Cell::from(mark),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Min(18),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(5),
    ];

    let widget = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(theme::cursor());

    let mut state = TableState::default().with_selected(table.focused.then_some(table.cursor));
    frame.render_stateful_widget(widget, area, &mut state);
}
