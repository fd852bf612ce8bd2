use crate::app::state::{AppState, FormField};
use crate::shopping::ShoppingItem;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

/// Columns right of the name: quantity + action hints.
const TRAILER_WIDTH: usize = 24;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let list = state.list();
    let block = Block::default()
        .title(format!(" Shopping List ({}) ", list.items.len()))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 3 {
        return;
    }

    // Add button row
    let add_area = Rect::new(inner.x, inner.y, inner.width, 1);
    let add = Line::from(vec![
        Span::styled("  Add Item  ", Theme::button()),
        Span::styled("  a", Theme::key_hint()),
    ]);
    frame.render_widget(Paragraph::new(add).alignment(Alignment::Center), add_area);

    let list_area = Rect::new(inner.x, inner.y + 2, inner.width, inner.height - 2);
    if list.items.is_empty() {
        let empty = Paragraph::new(Span::styled(
            " Nothing on the list yet",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(empty, list_area);
        return;
    }

    let visible = list_area.height as usize;
    let start = (state.selected + 1).saturating_sub(visible);
    let end = (start + visible).min(list.items.len());

    let name_width = (list_area.width as usize).saturating_sub(TRAILER_WIDTH).max(8);
    for (row, index) in (start..end).enumerate() {
        let row_area = Rect::new(list_area.x, list_area.y + row as u16, list_area.width, 1);
        let item = &list.items[index];
        if list.is_editing_row(index) {
            render_editor(frame, row_area, state, name_width);
        } else {
            let line = item_line(item, name_width, index == state.selected);
            frame.render_widget(Paragraph::new(line), row_area);
        }
    }
}

fn item_line(item: &ShoppingItem, name_width: usize, selected: bool) -> Line<'static> {
    let style = if selected {
        Theme::row_selected()
    } else {
        Theme::row()
    };
    let marker = if selected { "▸ " } else { "  " };
    Line::from(vec![
        Span::styled(marker, style),
        Span::styled(pad(&item.name, name_width), style),
        Span::styled(format!("{:>6}", item.quantity), Theme::quantity().bg(Theme::ROW_BG)),
        Span::styled("   e edit  d delete ", Theme::key_hint().bg(Theme::ROW_BG)),
    ])
}

fn render_editor(frame: &mut Frame, area: Rect, state: &AppState, name_width: usize) {
    let list = state.list();
    let name_focused = state.form_field == FormField::Name;
    let field_style = |focused: bool| {
        if focused {
            Theme::row_editing().add_modifier(Modifier::UNDERLINED)
        } else {
            Theme::row_editing()
        }
    };

    let line = Line::from(vec![
        Span::styled("✎ ", Theme::row_editing()),
        Span::styled(pad(&list.edit_name, name_width), field_style(name_focused)),
        Span::styled(
            format!("{:>6}", list.edit_quantity_text),
            field_style(!name_focused),
        ),
        Span::styled("   Enter save       ", Theme::row_editing()),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    // "✎ " is two cells wide
    let cursor_x = if name_focused {
        area.x + 2 + list.edit_name.width().min(name_width) as u16
    } else {
        area.x + 2 + name_width as u16 + 6
    };
    frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(1)), area.y));
}

/// Left-align `text` in `width` terminal cells, truncating with `…`.
fn pad(text: &str, width: usize) -> String {
    if text.width() <= width {
        return format!("{}{}", text, " ".repeat(width - text.width()));
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out.push_str(&" ".repeat(width.saturating_sub(used + 1)));
    out
}
