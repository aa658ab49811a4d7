use chrono::NaiveDate;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::context::{Palette, UiContext};
use crate::draft::{DraftField, DraftStep, TaskCreation};
use crate::i18n;
use crate::models::Priority;
use crate::picker::WheelKind;
use crate::tui::widgets::color::{get_contrast_text_color, parse_color};
use crate::tui::widgets::datetime_picker::render_datetime_picker;
use crate::tui::widgets::popup::fixed_popup_area;

const MODAL_WIDTH: u16 = 60;
const MODAL_HEIGHT: u16 = 22;

fn label_style(focused: bool, palette: &Palette) -> Style {
    if focused {
        Style::default().fg(palette.primary).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.muted)
    }
}

fn marker(focused: bool) -> &'static str {
    if focused { "▸ " } else { "  " }
}

/// Text field with a placeholder and a cursor while focused
fn text_field_lines(
    label: String,
    value: &str,
    placeholder: &str,
    focused: bool,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let mut value_spans = vec![Span::raw("    ")];
    if value.is_empty() {
        value_spans.push(Span::styled(
            placeholder.to_string(),
            Style::default().fg(palette.border).add_modifier(Modifier::ITALIC),
        ));
    } else {
        value_spans.push(Span::styled(value.to_string(), Style::default().fg(palette.fg)));
    }
    if focused {
        value_spans.push(Span::styled("▏", Style::default().fg(palette.primary)));
    }
    vec![
        Line::from(Span::styled(format!("{}{}", marker(focused), label), label_style(focused, palette))),
        Line::from(value_spans),
    ]
}

/// Lines of the basic step
pub fn basic_step_lines(creation: &TaskCreation, today: NaiveDate, ctx: &UiContext) -> Vec<Line<'static>> {
    let palette = ctx.palette();
    let draft = creation.draft();
    let field = creation.field();
    let mut lines = vec![
        Line::from(Span::styled(
            ctx.t("taskModal.fillDetails"),
            Style::default().fg(palette.muted),
        )),
        Line::from(""),
    ];

    lines.extend(text_field_lines(
        ctx.t("taskModal.taskTitle").to_string(),
        &draft.title,
        ctx.t("taskModal.taskTitlePlaceholder"),
        field == DraftField::Title,
        &palette,
    ));
    lines.extend(text_field_lines(
        format!("{} ({})", ctx.t("taskModal.description"), ctx.t("taskModal.optional")),
        &draft.description,
        ctx.t("taskModal.descriptionPlaceholder"),
        field == DraftField::Description,
        &palette,
    ));

    let due_focused = field == DraftField::Due;
    let due_text = match draft.due {
        Some(due) => i18n::format_due(ctx.language, due, today),
        None => ctx.t("taskModal.tapToSelect").to_string(),
    };
    lines.push(Line::from(Span::styled(
        format!("{}{}", marker(due_focused), ctx.t("taskModal.selectDateTime")),
        label_style(due_focused, &palette),
    )));
    lines.push(Line::from(vec![
        Span::raw("    📅 "),
        Span::styled(due_text, Style::default().fg(palette.fg)),
    ]));

    let priority_focused = field == DraftField::Priority;
    let mut priority_spans = vec![Span::styled(
        format!("{}{}  ", marker(priority_focused), ctx.t("taskModal.priority")),
        label_style(priority_focused, &palette),
    )];
    for priority in Priority::ALL {
        let color = parse_color(priority.color());
        let style = if priority == draft.priority {
            Style::default()
                .fg(get_contrast_text_color(color))
                .bg(color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        };
        priority_spans.push(Span::styled(format!(" {} ", ctx.t(priority.label_key())), style));
        priority_spans.push(Span::raw(" "));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(priority_spans));

    let reminder_focused = field == DraftField::Reminder;
    let (check, reminder_text) = if draft.reminder {
        ("[x]", ctx.t("taskModal.reminderOn"))
    } else {
        ("[ ]", ctx.t("taskModal.reminderOff"))
    };
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            format!("{}{} {}  ", marker(reminder_focused), check, ctx.t("taskModal.reminder")),
            label_style(reminder_focused, &palette),
        ),
        Span::styled(reminder_text, Style::default().fg(palette.muted)),
    ]));

    let create_focused = field == DraftField::Create;
    let create_style = if !creation.can_create() {
        Style::default().fg(palette.border).bg(palette.card)
    } else if create_focused {
        Style::default()
            .fg(get_contrast_text_color(palette.primary))
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.primary)
    };
    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(format!("[ {} ]", ctx.t("taskModal.createButton")), create_style))
            .alignment(Alignment::Center),
    );
    lines
}

/// Draw the creation modal. Returns the picker's wheel columns while the
/// date-time step is shown.
pub fn render_task_modal(
    f: &mut Frame,
    area: Rect,
    creation: &TaskCreation,
    today: NaiveDate,
    ctx: &UiContext,
) -> Vec<(Rect, WheelKind)> {
    let palette = ctx.palette();
    let modal_area = fixed_popup_area(area, MODAL_WIDTH, MODAL_HEIGHT);
    f.render_widget(Clear, modal_area);

    let title = match creation.step() {
        DraftStep::Basic => ctx.t("taskModal.createTask"),
        DraftStep::DateTime => ctx.t("taskModal.selectDateTime"),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.primary))
        .title(format!(" {} ", title))
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(palette.fg).bg(palette.card));
    let inner = block.inner(modal_area);
    f.render_widget(block, modal_area);

    match (creation.step(), creation.picker()) {
        (DraftStep::DateTime, Some(picker)) => {
            let [readout_area, picker_area, buttons_area] = Layout::vertical([
                Constraint::Length(2),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .areas(inner);

            f.render_widget(
                Paragraph::new(i18n::format_full(ctx.language, picker.value()))
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(palette.fg).add_modifier(Modifier::BOLD)),
                readout_area,
            );
            let columns = render_datetime_picker(f, picker_area, picker, true, ctx);

            let buttons = Line::from(vec![
                Span::styled(format!("[Esc] {}", ctx.t("taskModal.back")), Style::default().fg(palette.muted)),
                Span::raw("    "),
                Span::styled(
                    format!(" [Enter] {} ", ctx.t("taskModal.confirm")),
                    Style::default()
                        .fg(get_contrast_text_color(palette.primary))
                        .bg(palette.primary)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
            .alignment(Alignment::Center);
            f.render_widget(Paragraph::new(buttons), buttons_area);
            columns
        }
        _ => {
            let lines = basic_step_lines(creation, today, ctx);
            f.render_widget(Paragraph::new(lines), inner);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ThemeMode;
    use crate::i18n::Language;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 3).unwrap()
    }

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn basic_step_shows_placeholder_and_due_summary() {
        let ctx = UiContext::new(Language::En, ThemeMode::Dark);
        let mut creation = TaskCreation::default();
        creation.open();
        let before = text(&basic_step_lines(&creation, today(), &ctx));
        assert!(before.contains("What needs to be done?"));
        assert!(before.contains("Press Enter to choose"));

        creation.enter_datetime(today().and_hms_opt(9, 30, 0).unwrap(), today(), Language::En);
        creation.confirm_datetime();
        let after = text(&basic_step_lines(&creation, today(), &ctx));
        assert!(after.contains("Today, 09:30"));
    }

    #[test]
    fn datetime_step_reports_three_wheels() {
        let ctx = UiContext::new(Language::Ru, ThemeMode::Dark);
        let mut creation = TaskCreation::default();
        creation.open();
        creation.enter_datetime(today().and_hms_opt(9, 30, 0).unwrap(), today(), Language::Ru);

        let mut columns = Vec::new();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|f| columns = render_task_modal(f, f.area(), &creation, today(), &ctx))
            .unwrap();
        assert_eq!(columns.len(), 3);

        creation.back();
        terminal
            .draw(|f| columns = render_task_modal(f, f.area(), &creation, today(), &ctx))
            .unwrap();
        assert!(columns.is_empty());
    }
}
