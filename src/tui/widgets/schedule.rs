use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use roza::models::{Language, PrayerEvent, PrayerKind};
use roza::utils::format::pad_display;

use crate::tui::theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    events: &[PrayerEvent],
    upcoming: Option<PrayerKind>,
    lang: Language,
) {
    let title = match lang {
        Language::Bn => " আজকের সময়সূচি ",
        Language::En => " Today's Times ",
    };
    let block = Block::default()
        .title(Span::styled(title, theme::teal()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(false))
        .style(theme::surface());

    let items: Vec<ListItem> = events
        .iter()
        .map(|e| {
            let is_next = upcoming == Some(e.kind);

            let name_style = if e.highlighted {
                theme::yellow().add_modifier(Modifier::BOLD)
            } else {
                theme::bold()
            };
            let time_style = if e.highlighted {
                theme::yellow()
            } else {
                theme::dim()
            };

            let marker = if is_next {
                Span::styled("▸ ", theme::teal().add_modifier(Modifier::BOLD))
            } else {
                Span::styled("  ", theme::dim())
            };

            let line = Line::from(vec![
                marker,
                Span::styled(pad_display(&e.name, 10), name_style),
                Span::styled(e.time.clone(), time_style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
