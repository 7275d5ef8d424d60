use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState},
    Frame,
};

use roza::models::{District, Language};
use roza::utils::format::{format_offset, pad_display};

use crate::tui::theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    query: &str,
    matches: &[&'static District],
    selected: usize,
    lang: Language,
) {
    let popup_area = Rect {
        x: area.width / 4,
        y: area.height / 6,
        width: (area.width / 2).max(40),
        height: (area.height * 2 / 3).max(8),
    }
    .intersection(area);

    frame.render_widget(Clear, popup_area);

    let title = match lang {
        Language::Bn => " জেলা নির্বাচন ",
        Language::En => " Choose District ",
    };
    let block = Block::default()
        .title(Span::styled(title, theme::teal()))
        .title_bottom(Line::from(vec![
            Span::styled(" / ", theme::dim()),
            Span::styled(query.to_string(), theme::yellow().add_modifier(Modifier::BOLD)),
            Span::styled("█ ", theme::amber()),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::teal())
        .style(theme::surface());

    let items: Vec<ListItem> = if matches.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "  ✗ no match",
            theme::red(),
        )))]
    } else {
        matches
            .iter()
            .map(|d| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("  {}", pad_display(d.name_en, 16)), theme::bold()),
                    Span::styled(pad_display(d.name_bn, 14), theme::teal()),
                    Span::styled(format_offset(d.offset_minutes, lang), theme::dim()),
                ]))
            })
            .collect()
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(theme::cursor());

    let mut state = ListState::default().with_selected((!matches.is_empty()).then_some(selected));
    frame.render_stateful_widget(list, popup_area, &mut state);
}
