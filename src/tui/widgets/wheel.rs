use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::context::Palette;
use crate::picker::wheel::ITEM_HEIGHT;
use crate::picker::WheelPicker;
use crate::tui::widgets::color::blend;
use crate::tui::widgets::text::truncate;

/// Terminal rows one wheel item occupies
pub const ROWS_PER_ITEM: u16 = 2;

/// Row offset from the center line for an item `distance` units away
pub fn row_offset(distance: f64) -> i32 {
    (distance / (ITEM_HEIGHT / ROWS_PER_ITEM as f64)).round() as i32
}

/// Draw one wheel column. The centered item sits on the middle row of `area`
/// between two band lines, bold in the wheel's `accent`.
pub fn render_wheel(
    f: &mut Frame,
    area: Rect,
    wheel: &WheelPicker,
    accent: Color,
    focused: bool,
    palette: &Palette,
) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let center_row = area.y + area.height / 2;
    let band_color = if focused { accent } else { palette.border };
    let band = "─".repeat(area.width as usize);
    for row in [center_row.checked_sub(1), Some(center_row + 1)].into_iter().flatten() {
        if row >= area.y && row < area.bottom() {
            f.render_widget(
                Paragraph::new(band.as_str()).style(Style::default().fg(band_color)),
                Rect::new(area.x, row, area.width, 1),
            );
        }
    }

    let centered = wheel.centered_index();
    for (index, item) in wheel.items().iter().enumerate() {
        let distance = index as f64 * ITEM_HEIGHT + wheel.offset();
        let row = center_row as i32 + row_offset(distance);
        if row < area.y as i32 || row >= area.bottom() as i32 {
            continue;
        }

        let visual = wheel.item_visual(index);
        let width = ((area.width as f64) * visual.scale).floor().max(1.0) as usize;
        let label = truncate(&item.label, width);
        let style = if index == centered {
            Style::default().fg(accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(blend(palette.fg, palette.bg, visual.opacity))
        };

        f.render_widget(
            Paragraph::new(Line::from(label).centered()).style(style),
            Rect::new(area.x, row as u16, area.width, 1),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{OCEAN_TEAL, Palette, ThemeMode};
    use crate::picker::WheelItem;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Duration;

    #[test]
    fn neighbors_sit_two_rows_apart() {
        assert_eq!(row_offset(0.0), 0);
        assert_eq!(row_offset(ITEM_HEIGHT), 2);
        assert_eq!(row_offset(-ITEM_HEIGHT), -2);
        assert_eq!(row_offset(ITEM_HEIGHT / 2.0), 1);
    }

    #[test]
    fn selected_item_is_drawn_on_center_row() {
        let items = (0..24).map(|h| WheelItem::new(h, format!("{:02}", h))).collect();
        let mut wheel = WheelPicker::new(items, 9);
        for _ in 0..300 {
            wheel.tick(Duration::from_millis(16));
        }
        let palette = Palette::for_mode(ThemeMode::Dark);

        let mut terminal = Terminal::new(TestBackend::new(6, 9)).unwrap();
        terminal
            .draw(|f| render_wheel(f, f.area(), &wheel, OCEAN_TEAL, false, &palette))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let row = |y: u16| -> String { (0..6).map(|x| buffer[(x, y)].symbol().to_string()).collect() };

        assert_eq!(row(4).trim(), "09");
        assert_eq!(row(2).trim(), "08");
        assert_eq!(row(6).trim(), "10");
        assert_eq!(row(3), "──────");

        // accent and weight do not depend on focus
        let centered = &buffer[(2, 4)];
        assert_eq!(centered.fg, OCEAN_TEAL);
        assert!(centered.modifier.contains(Modifier::BOLD));
        assert_ne!(buffer[(2, 2)].fg, OCEAN_TEAL);
    }
}
