use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Counter ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(format!("Count : {}", state.count()), Theme::count())),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Decrement - ", Theme::button()),
            Span::raw("   "),
            Span::styled(" Increment + ", Theme::button()),
        ]),
        Line::from(""),
        Line::from(Span::styled("- / Down: decrement    + / Up: increment", Theme::key_hint())),
    ];

    // Vertically center the block of lines
    let height = lines.len() as u16;
    let top = inner.y + inner.height.saturating_sub(height) / 2;
    let content = Rect::new(inner.x, top, inner.width, height.min(inner.height));
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), content);
}
