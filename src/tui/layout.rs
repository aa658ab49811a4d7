use ratatui::layout::{Constraint, Layout as RatLayout, Rect};

pub struct Layout {
    /// Area inside the outer border
    pub inner_area: Rect,
    pub header_area: Rect,
    pub body_area: Rect,
    /// Zero-height unless the bottom navigation is shown
    pub nav_area: Rect,
    pub status_area: Rect,
}

impl Layout {
    /// Minimum terminal dimensions required for the application.
    /// Width: the time-only picker and toggles fit in 40 columns.
    /// Height: header, status, nav and a full wheel (11 rows) plus margins.
    pub const MIN_WIDTH: u16 = 40;
    pub const MIN_HEIGHT: u16 = 16;

    pub fn calculate(size: Rect, with_nav: bool) -> Self {
        // Ensure minimum terminal size (accounting for outer border)
        let width = size.width.max(Self::MIN_WIDTH + 2);
        let height = size.height.max(Self::MIN_HEIGHT + 2);
        let size = Rect::new(size.x, size.y, width, height);

        let inner_area = Rect::new(
            size.x + 1,
            size.y + 1,
            size.width.saturating_sub(2),
            size.height.saturating_sub(2),
        );

        let nav_height = if with_nav { 1 } else { 0 };
        let [header_area, body_area, nav_area, status_area] = RatLayout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(nav_height),
            Constraint::Length(1),
        ])
        .areas(inner_area);

        Self {
            inner_area,
            header_area,
            body_area,
            nav_area,
            status_area,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn areas_stack_inside_border() {
        let layout = Layout::calculate(Rect::new(0, 0, 100, 30), true);
        assert_eq!(layout.inner_area, Rect::new(1, 1, 98, 28));
        assert_eq!(layout.header_area.y, 1);
        assert_eq!(layout.body_area.y, 2);
        assert_eq!(layout.body_area.height, 25);
        assert_eq!(layout.nav_area.height, 1);
        assert_eq!(layout.status_area.y, 28);
    }

    #[test]
    fn nav_collapses_and_tiny_terminals_are_padded() {
        let layout = Layout::calculate(Rect::new(0, 0, 10, 5), false);
        assert_eq!(layout.nav_area.height, 0);
        assert_eq!(layout.inner_area.width, Layout::MIN_WIDTH);
        assert_eq!(layout.inner_area.height, Layout::MIN_HEIGHT);
    }
}
