use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use roza::models::{Language, RAMADAN_DAYS};
use roza::utils::format::{format_percent, progress_bar};
use roza::utils::localize_number;

use crate::tui::theme;

/// Fasting progress: a bar sized to the panel plus one dot per Ramadan day.
pub fn render(frame: &mut Frame, area: Rect, fasted: &[u8], current: Option<u8>, lang: Language) {
    let title = match lang {
        Language::Bn => " রোজার হিসাব ",
        Language::En => " Fasts Kept ",
    };
    let block = Block::default()
        .title(Span::styled(title, theme::teal()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(false))
        .style(theme::surface());

    let count = fasted.len();
    let ratio = count as f64 / RAMADAN_DAYS as f64;

    let bar_len = (area.width.saturating_sub(6) as usize).clamp(6, 30);
    let bar = progress_bar(count as u32, RAMADAN_DAYS as u32, bar_len);

    let bar_line = Line::from(vec![
        Span::styled("  ", theme::dim()),
        Span::styled(bar, theme::green()),
    ]);

    let count_line = Line::from(vec![
        Span::styled(
            format!(
                "  {} / {}",
                localize_number(count, lang),
                localize_number(RAMADAN_DAYS, lang)
            ),
            theme::green().add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  ·  {}", format_percent(ratio, lang)), theme::dim()),
    ]);

    // 30 dots in two rows of 15
    let mut dot_lines = Vec::new();
    for row in 0..2u8 {
        let mut spans = vec![Span::styled("  ", theme::dim())];
        for i in 1..=15u8 {
            let ordinal = row * 15 + i;
            let (dot, style) = if fasted.contains(&ordinal) {
                ("●", theme::green().add_modifier(Modifier::BOLD))
            } else if current == Some(ordinal) {
                ("◉", theme::yellow())
            } else {
                ("○", theme::dim())
            };
            spans.push(Span::styled(dot, style));
            spans.push(Span::raw(" "));
        }
        dot_lines.push(Line::from(spans));
    }

    let mut text = vec![Line::from(""), bar_line, count_line, Line::from("")];
    text.extend(dot_lines);
    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
