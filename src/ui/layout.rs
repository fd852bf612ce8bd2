use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub tabs: Rect,
    pub body: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Screen tabs
            Constraint::Min(5),    // Active screen
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        tabs: chunks[0],
        body: chunks[1],
        status_bar: chunks[2],
    }
}

/// Center a `width` x `height` popup in `area`, shrinking it to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width.saturating_sub(2));
    let h = height.min(area.height.saturating_sub(2));
    let x = area.x + area.width.saturating_sub(w) / 2;
    let y = area.y + area.height.saturating_sub(h) / 2;
    Rect::new(x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_is_centered() {
        let popup = centered(Rect::new(0, 0, 80, 24), 40, 10);
        assert_eq!(popup, Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn popup_shrinks_in_small_terminals() {
        let popup = centered(Rect::new(0, 0, 30, 8), 40, 10);
        assert_eq!(popup, Rect::new(1, 1, 28, 6));
    }
}
