use chrono::NaiveDate;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use roza::models::{District, Language};
use roza::utils::labels::{gregorian_date_label, islamic_date_label};
use roza::utils::localize_number;

use crate::tui::theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    district: &District,
    lang: Language,
    hijri_year: u32,
    current: Option<u8>,
    today: NaiveDate,
) {
    let title = match lang {
        Language::Bn => format!("রমজান {}", localize_number(hijri_year, lang)),
        Language::En => format!("Ramadan {}", hijri_year),
    };

    let title_line = Line::from(vec![
        Span::styled("  রোজা  ", theme::yellow().add_modifier(Modifier::BOLD)),
        Span::styled(title, theme::teal()),
    ]);

    let mut date_spans = vec![Span::styled(
        district.display_name(lang),
        theme::teal().add_modifier(Modifier::BOLD),
    )];
    if let Some(ordinal) = current {
        date_spans.push(Span::styled("  ·  ", theme::dim()));
        date_spans.push(Span::styled(islamic_date_label(ordinal, lang), theme::yellow()));
    }
    date_spans.push(Span::styled("  ·  ", theme::dim()));
    date_spans.push(Span::styled(gregorian_date_label(today, lang), theme::dim()));

    let text = vec![title_line, Line::from(""), Line::from(date_spans)];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::teal().add_modifier(Modifier::BOLD))
        .style(theme::base());

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
