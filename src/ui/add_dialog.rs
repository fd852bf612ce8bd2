use crate::app::state::{AppState, FormField};
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, state: &AppState) {
    let list = state.list();
    if !list.is_add_dialog_open {
        return;
    }

    let popup_area = centered(frame.area(), 48, 12);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Add Shopping Item ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height < 7 || inner.width < 10 {
        return;
    }

    let name_area = Rect::new(inner.x + 1, inner.y + 1, inner.width - 2, 3);
    let qty_area = Rect::new(inner.x + 1, inner.y + 4, inner.width - 2, 3);
    let buttons_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);

    let focus = state.form_field;
    render_field(frame, name_area, "Name", &list.draft_name, focus == FormField::Name);
    render_field(
        frame,
        qty_area,
        "Quantity",
        &list.draft_quantity_text,
        focus == FormField::Quantity,
    );

    let buttons = Line::from(vec![
        Span::styled(" Add ", Theme::button()),
        Span::styled(" Enter   ", Theme::key_hint()),
        Span::styled(" Cancel ", Theme::button()),
        Span::styled(" Esc", Theme::key_hint()),
    ]);
    frame.render_widget(Paragraph::new(buttons).alignment(Alignment::Center), buttons_area);
}

fn render_field(frame: &mut Frame, area: Rect, label: &str, text: &str, focused: bool) {
    let block = Block::default()
        .title(format!(" {} ", label))
        .title_style(Theme::input_label())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(text).style(Theme::input_text()), inner);

    if focused && inner.width > 0 {
        let cursor_x = inner.x + text.width() as u16;
        frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
    }
}
