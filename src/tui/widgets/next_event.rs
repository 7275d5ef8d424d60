use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use roza::models::{Language, PrayerKind};
use roza::utils::format::format_duration_mins;
use roza::utils::labels::prayer_name;

use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, next: Option<(PrayerKind, i64)>, lang: Language) {
    let (title, lead) = match lang {
        Language::Bn => (" পরবর্তী ", "  বাকি  "),
        Language::En => (" Next ", "  in  "),
    };
    let block = Block::default()
        .title(Span::styled(title, theme::teal()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(false))
        .style(theme::surface());

    let content: Vec<Line> = match next {
        None => vec![
            Line::from(""),
            Line::from(Span::styled("  --", theme::dim())),
        ],
        Some((kind, mins)) => {
            let style = if kind.is_fasting_boundary() {
                theme::yellow().add_modifier(Modifier::BOLD)
            } else {
                theme::teal().add_modifier(Modifier::BOLD)
            };
            vec![
                Line::from(""),
                Line::from(Span::styled(format!("  {}", prayer_name(kind, lang)), style)),
                Line::from(""),
                Line::from(vec![
                    Span::styled(lead, theme::dim()),
                    Span::styled(
                        format_duration_mins(mins, lang),
                        theme::amber().add_modifier(Modifier::BOLD),
                    ),
                ]),
            ]
        }
    };

    let paragraph = Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, area);
}
