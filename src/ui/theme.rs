use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ACCENT: Color = Color::Cyan;
    pub const ROW_BG: Color = Color::Rgb(48, 48, 48);
    pub const EDIT_BG: Color = Color::Rgb(70, 70, 70);

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn tab_active() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn count() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn button() -> Style {
        Style::default().fg(Color::Black).bg(Self::ACCENT)
    }

    pub fn key_hint() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn row() -> Style {
        Style::default().fg(Color::White).bg(Self::ROW_BG)
    }

    pub fn row_selected() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::ROW_BG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn row_editing() -> Style {
        Style::default().fg(Color::White).bg(Self::EDIT_BG)
    }

    pub fn quantity() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn input_label() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_info() -> Style {
        Style::default().fg(Color::Green).bg(Color::DarkGray)
    }

    pub fn status_error() -> Style {
        Style::default()
            .fg(Color::Red)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }
}
