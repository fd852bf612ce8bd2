mod add_dialog;
mod counter_view;
mod layout;
mod shopping_view;
mod status_bar;
mod theme;

use crate::app::state::{AppState, Screen};
use ratatui::prelude::*;
use ratatui::widgets::Tabs;
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    render_tabs(frame, app_layout.tabs, state);
    match state.screen {
        Screen::Counter => counter_view::render(frame, app_layout.body, state),
        Screen::Shopping => {
            shopping_view::render(frame, app_layout.body, state);
            add_dialog::render(frame, state);
        }
    }
    status_bar::render(frame, app_layout.status_bar, state);
}

fn render_tabs(frame: &mut Frame, area: Rect, state: &AppState) {
    let screens = [Screen::Counter, Screen::Shopping];
    let titles = screens
        .iter()
        .enumerate()
        .map(|(i, s)| format!("F{} {}", i + 1, s.title()));
    let selected = screens.iter().position(|s| *s == state.screen);
    let tabs = Tabs::new(titles)
        .select(selected.unwrap_or(0))
        .style(Theme::tab_inactive())
        .highlight_style(Theme::tab_active())
        .divider("│");
    frame.render_widget(tabs, area);
}
