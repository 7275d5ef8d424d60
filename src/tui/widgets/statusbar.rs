use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::View;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, view: &View, message: Option<&str>) {
    if let Some(msg) = message {
        let paragraph = Paragraph::new(Line::from(Span::styled(msg, theme::red())))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let mut hints = vec![("[Tab]", " view  "), ("[d]", " district  "), ("[l]", " language  ")];
    match view {
        View::Ramadan => hints.push(("[Space]", " fast  ")),
        View::Calendar => hints.push(("[← →]", " month  ")),
        View::Today | View::Help => {}
    }
    hints.push(("[?]", " help  "));
    hints.push(("[Esc]", " quit"));

    let mut spans = Vec::new();
    for (key, label) in &hints {
        spans.push(Span::styled(*key, theme::yellow()));
        spans.push(Span::styled(*label, theme::dim()));
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
