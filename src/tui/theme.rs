use ratatui::style::{Color, Modifier, Style};

pub const BG: Color = Color::Rgb(12, 20, 20);
pub const SURFACE: Color = Color::Rgb(19, 32, 31);
pub const BORDER: Color = Color::Rgb(44, 70, 68);
pub const TEXT: Color = Color::Rgb(222, 232, 228);
pub const TEXT_DIM: Color = Color::Rgb(118, 140, 136);
pub const TEAL: Color = Color::Rgb(77, 160, 150);
pub const YELLOW: Color = Color::Rgb(234, 196, 84);
pub const GREEN: Color = Color::Rgb(96, 170, 108);
pub const AMBER: Color = Color::Rgb(214, 140, 64);
pub const RED: Color = Color::Rgb(200, 84, 70);
pub const CURSOR: Color = Color::Rgb(36, 60, 58);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn teal() -> Style {
    Style::default().fg(TEAL)
}

pub fn yellow() -> Style {
    Style::default().fg(YELLOW)
}

pub fn green() -> Style {
    Style::default().fg(GREEN)
}

pub fn amber() -> Style {
    Style::default().fg(AMBER)
}

pub fn red() -> Style {
    Style::default().fg(RED)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub fn border(focused: bool) -> Style {
    if focused {
        teal()
    } else {
        Style::default().fg(BORDER)
    }
}

pub fn cursor() -> Style {
    Style::default().bg(CURSOR).add_modifier(Modifier::BOLD)
}
