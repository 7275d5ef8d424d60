use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use std::collections::BTreeMap;

use roza::calendar::month_grid;
use roza::models::{HolidayEvent, Language};
use roza::utils::format::pad_display_left;
use roza::utils::labels::{holiday_kind, month_name, weekday_headers};
use roza::utils::localize_number;

use crate::tui::theme;

const CELL: usize = 5;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    year: i32,
    month: u32,
    events: &BTreeMap<u32, Vec<&HolidayEvent>>,
    today: NaiveDate,
    lang: Language,
) {
    let title = format!(
        " {} {} ",
        month_name(month, lang),
        localize_number(year, lang)
    );
    let block = Block::default()
        .title(Span::styled(title, theme::teal().add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(true))
        .style(theme::surface());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length((CELL * 7 + 4) as u16), Constraint::Min(0)])
        .split(inner);

    let header: Vec<Span> = weekday_headers(lang)
        .iter()
        .enumerate()
        .map(|(i, h)| {
            // Friday is the weekly holiday
            let style = if i == 5 { theme::red() } else { theme::dim() };
            Span::styled(pad_display_left(h, CELL), style)
        })
        .collect();

    let mut grid_lines = vec![Line::from(""), Line::from(header), Line::from("")];

    let is_this_month = today.year() == year && today.month0() == month;
    let cells = month_grid(year, month);
    for week in cells.chunks(7) {
        let spans: Vec<Span> = week
            .iter()
            .enumerate()
            .map(|(i, cell)| match cell {
                None => Span::raw(" ".repeat(CELL)),
                Some(d) => {
                    let text = pad_display_left(&localize_number(d, lang), CELL);
                    let mut style = match events.get(d) {
                        Some(es) if es.iter().any(|e| e.is_holiday) => theme::red(),
                        Some(_) => theme::amber(),
                        None if i == 5 => theme::red(),
                        None => theme::bold(),
                    };
                    if is_this_month && today.day() == *d {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    Span::styled(text, style)
                }
            })
            .collect();
        grid_lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(grid_lines), chunks[0]);

    let mut event_lines = vec![Line::from("")];
    if events.is_empty() {
        event_lines.push(Line::from(Span::styled(
            match lang {
                Language::Bn => "কোনো ছুটি বা দিবস নেই",
                Language::En => "No holidays or events",
            },
            theme::dim(),
        )));
    }
    for (d, es) in events {
        for e in es {
            let style = if e.is_holiday {
                theme::red()
            } else {
                theme::amber()
            };
            event_lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", pad_display_left(&localize_number(d, lang), 2)),
                    style.add_modifier(Modifier::BOLD),
                ),
                Span::styled(e.title(lang).to_string(), theme::bold()),
            ]));
            event_lines.push(Line::from(Span::styled(
                format!("   {}", holiday_kind(e.is_holiday, lang)),
                theme::dim(),
            )));
        }
    }

    frame.render_widget(Paragraph::new(event_lines), chunks[1]);
}
