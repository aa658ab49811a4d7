use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Centered rect using a percentage of the available area
/// Based on ratatui popup example: https://ratatui.rs/examples/apps/popup/
pub fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

/// Centered rect of a fixed size, shrunk to fit
pub fn fixed_popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height.min(area.height))]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Length(width.min(area.width))]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

/// Full-width panel anchored to the bottom edge
pub fn bottom_sheet_area(area: Rect, percent_y: u16) -> Rect {
    let [_, sheet] = Layout::vertical([Constraint::Fill(1), Constraint::Percentage(percent_y)]).areas(area);
    sheet
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = popup_area(area, 50, 50);
        assert_eq!(popup, Rect::new(25, 10, 50, 20));
    }

    #[test]
    fn fixed_popup_shrinks_to_fit() {
        let area = Rect::new(0, 0, 30, 10);
        let popup = fixed_popup_area(area, 60, 20);
        assert_eq!(popup, area);
    }

    #[test]
    fn sheet_hugs_the_bottom() {
        let area = Rect::new(0, 0, 60, 40);
        let sheet = bottom_sheet_area(area, 85);
        assert_eq!(sheet.bottom(), 40);
        assert_eq!(sheet.width, 60);
        assert_eq!(sheet.height, 34);
    }
}
