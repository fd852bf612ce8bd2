use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" [{}] ", state.screen.title()),
        Style::default().fg(Theme::ACCENT).bg(Color::DarkGray),
    ));

    if let Some(ref msg) = state.status_message {
        let style = match msg.kind {
            StatusKind::Info => Theme::status_info(),
            StatusKind::Error => Theme::status_error(),
        };
        parts.push(Span::styled(format!(" {} ", msg.text), style));
    }

    // Key hints, right aligned
    let hints = key_hints(state);
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + hints.len());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(hints, Theme::status_bar()));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

fn key_hints(state: &AppState) -> &'static str {
    let list = state.list();
    match state.screen {
        Screen::Shopping if list.is_add_dialog_open => "Tab field  Enter add  Esc cancel ",
        Screen::Shopping if list.is_editing() => "Tab field  Enter save ",
        Screen::Shopping => "a add  e edit  d delete  Tab screen  q quit ",
        Screen::Counter => "+/- count  Tab screen  q quit ",
    }
}
