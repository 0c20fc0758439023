use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::Frame;

/// Helper function to create a centered rectangle
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((r.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((r.height.saturating_sub(height)) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((r.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((r.width.saturating_sub(width)) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Shows the terminal cursor after `before` on the first line of `area`,
/// clamped to the area's right edge.
pub fn place_cursor(frame: &mut Frame, area: Rect, before: &str) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let offset = (before.chars().count() as u16).min(area.width - 1);
    frame.set_cursor_position(Position::new(area.x + offset, area.y));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_sits_in_middle() {
        let area = centered_rect(20, 10, Rect::new(0, 0, 100, 50));

        assert_eq!(area, Rect::new(40, 20, 20, 10));
    }

    #[test]
    fn centered_rect_clamps_to_small_areas() {
        let area = centered_rect(80, 10, Rect::new(0, 0, 40, 5));

        assert!(area.width <= 40);
        assert!(area.height <= 5);
    }
}
