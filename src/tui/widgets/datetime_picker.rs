use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::context::{OCEAN_BLUE, OCEAN_TEAL, Palette, UiContext};
use crate::picker::{DateTimePicker, PickerMode, WheelKind};
use crate::tui::widgets::wheel::render_wheel;

const TIME_COLUMN_WIDTH: u16 = 4;

/// Centered-item color of each wheel
pub fn wheel_accent(kind: WheelKind) -> Color {
    match kind {
        WheelKind::Date => OCEAN_BLUE,
        WheelKind::Hour | WheelKind::Minute => OCEAN_TEAL,
    }
}

/// Draw the picker's visible wheels side by side and return each wheel's
/// column so mouse events can be routed back to it
pub fn render_datetime_picker(
    f: &mut Frame,
    area: Rect,
    picker: &DateTimePicker,
    active: bool,
    ctx: &UiContext,
) -> Vec<(Rect, WheelKind)> {
    let palette = ctx.palette();
    let [header_area, wheels_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);

    let columns = match picker.mode() {
        PickerMode::Date => {
            let [date] = Layout::horizontal([Constraint::Fill(1)]).areas(wheels_area);
            vec![(date, WheelKind::Date)]
        }
        PickerMode::Time => {
            let [_, hour, colon, minute, _] = Layout::horizontal([
                Constraint::Fill(1),
                Constraint::Length(TIME_COLUMN_WIDTH),
                Constraint::Length(1),
                Constraint::Length(TIME_COLUMN_WIDTH),
                Constraint::Fill(1),
            ])
            .areas(wheels_area);
            render_colon(f, colon, &palette);
            vec![(hour, WheelKind::Hour), (minute, WheelKind::Minute)]
        }
        PickerMode::DateTime => {
            let [date, _, hour, colon, minute] = Layout::horizontal([
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Length(TIME_COLUMN_WIDTH),
                Constraint::Length(1),
                Constraint::Length(TIME_COLUMN_WIDTH),
            ])
            .areas(wheels_area);
            render_colon(f, colon, &palette);
            vec![
                (date, WheelKind::Date),
                (hour, WheelKind::Hour),
                (minute, WheelKind::Minute),
            ]
        }
    };

    render_header(f, header_area, picker, ctx, &palette);
    for (column, kind) in &columns {
        let focused = active && picker.focus() == *kind;
        render_wheel(f, *column, picker.wheel(*kind), wheel_accent(*kind), focused, &palette);
    }
    columns
}

fn render_header(f: &mut Frame, area: Rect, picker: &DateTimePicker, ctx: &UiContext, palette: &Palette) {
    let label = match picker.mode() {
        PickerMode::Date => ctx.t("datePicker.selectDate").to_string(),
        PickerMode::Time => ctx.t("datePicker.selectTime").to_string(),
        PickerMode::DateTime => format!(
            "{} · {}",
            ctx.t("datePicker.selectDate"),
            ctx.t("datePicker.selectTime")
        ),
    };
    f.render_widget(
        Paragraph::new(Line::from(label).centered())
            .style(Style::default().fg(palette.muted).add_modifier(Modifier::ITALIC)),
        area,
    );
}

fn render_colon(f: &mut Frame, area: Rect, palette: &Palette) {
    if area.height == 0 {
        return;
    }
    let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
    f.render_widget(
        Paragraph::new(":").style(Style::default().fg(palette.fg).add_modifier(Modifier::BOLD)),
        row,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ThemeMode;
    use crate::i18n::Language;
    use chrono::NaiveDate;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn picker(mode: PickerMode) -> DateTimePicker {
        let today = NaiveDate::from_ymd_opt(2025, 2, 3).unwrap();
        let value = today.and_hms_opt(14, 5, 0).unwrap();
        DateTimePicker::new(value, today, mode, Language::En)
    }

    fn columns_for(mode: PickerMode) -> Vec<(Rect, WheelKind)> {
        let ctx = UiContext::new(Language::En, ThemeMode::Dark);
        let picker = picker(mode);
        let mut columns = Vec::new();
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        terminal
            .draw(|f| columns = render_datetime_picker(f, f.area(), &picker, true, &ctx))
            .unwrap();
        columns
    }

    #[test]
    fn columns_follow_mode() {
        let kinds = |mode| columns_for(mode).into_iter().map(|(_, k)| k).collect::<Vec<_>>();
        assert_eq!(kinds(PickerMode::Date), vec![WheelKind::Date]);
        assert_eq!(kinds(PickerMode::Time), vec![WheelKind::Hour, WheelKind::Minute]);
        assert_eq!(
            kinds(PickerMode::DateTime),
            vec![WheelKind::Date, WheelKind::Hour, WheelKind::Minute]
        );
    }

    #[test]
    fn wheel_columns_do_not_overlap_and_skip_header() {
        let columns = columns_for(PickerMode::DateTime);
        for (area, _) in &columns {
            assert_eq!(area.y, 1);
            assert_eq!(area.height, 11);
        }
        assert!(columns[0].0.right() <= columns[1].0.x);
        assert!(columns[1].0.right() <= columns[2].0.x);
        assert_eq!(columns[2].0.width, TIME_COLUMN_WIDTH);
    }
}
