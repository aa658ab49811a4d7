//! Organizer screens: auth, onboarding, the three main views and the picker
//! showcase.

use chrono::{NaiveDate, NaiveDateTime};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::context::UiContext;
use crate::i18n;
use crate::models::Task;
use crate::picker::WheelKind;
use crate::tui::app::{DemoState, PickerSlot};
use crate::tui::widgets::color::get_contrast_text_color;
use crate::tui::widgets::datetime_picker::render_datetime_picker;
use crate::tui::widgets::popup::fixed_popup_area;
use crate::tui::widgets::task_list::task_line;
use crate::tui::widgets::toggles::toggle_line;

/// Wheel picker columns drawn on a screen
pub type WheelAreas = Vec<(Rect, PickerSlot, WheelKind)>;

const PICKER_HEIGHT: u16 = 13;

fn card(ctx: &UiContext) -> Block<'static> {
    let palette = ctx.palette();
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().fg(palette.fg).bg(palette.card))
}

fn primary_button(label: String, ctx: &UiContext) -> Span<'static> {
    let palette = ctx.palette();
    Span::styled(
        format!(" {} ", label),
        Style::default()
            .fg(get_contrast_text_color(palette.primary))
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD),
    )
}

pub fn render_auth(f: &mut Frame, area: Rect, ctx: &UiContext) {
    let palette = ctx.palette();
    let card_area = fixed_popup_area(area, 50, 11);
    let lines = vec![
        Line::from(Span::styled("◉", Style::default().fg(palette.primary).add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::styled(
            ctx.t("auth.welcome"),
            Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(ctx.t("auth.subtitle"), Style::default().fg(palette.muted))),
        Line::from(""),
        Line::from(primary_button(ctx.t("auth.continue").to_string(), ctx)),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(card(ctx)),
        card_area,
    );
}

pub fn render_onboarding(f: &mut Frame, area: Rect, name: &str, ctx: &UiContext) {
    let palette = ctx.palette();
    let card_area = fixed_popup_area(area, 50, 10);
    let lines = vec![
        Line::from(Span::styled(
            ctx.t("onboarding.title"),
            Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(ctx.t("onboarding.namePrompt"), Style::default().fg(palette.muted))),
        Line::from(vec![
            Span::styled(format!("> {}", name), Style::default().fg(palette.fg)),
            Span::styled("▏", Style::default().fg(palette.primary)),
        ]),
        Line::from(""),
        Line::from(primary_button(format!("⏎ {}", ctx.t("onboarding.continue")), ctx)),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(card(ctx)),
        card_area,
    );
}

/// Tasks due on `today`, in creation order
pub fn due_today<'t>(tasks: &'t [Task], today: NaiveDate) -> Vec<&'t Task> {
    tasks
        .iter()
        .filter(|task| task.due.is_some_and(|due| due.date() == today))
        .collect()
}

pub fn render_today(
    f: &mut Frame,
    area: Rect,
    user_name: &str,
    tasks: &[Task],
    now: NaiveDateTime,
    ctx: &UiContext,
) {
    let palette = ctx.palette();
    let today = now.date();
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{}, {}!", ctx.t("app.greeting"), user_name),
            Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            i18n::format_full(ctx.language, now),
            Style::default().fg(palette.muted),
        )),
        Line::from(""),
    ];

    let todays = due_today(tasks, today);
    if todays.is_empty() {
        lines.push(Line::from(Span::styled(ctx.t("app.todayEmpty"), Style::default().fg(palette.muted))));
    } else {
        let width = area.width.saturating_sub(4) as usize;
        lines.extend(todays.into_iter().map(|task| task_line(task, today, ctx, width)));
    }

    f.render_widget(
        Paragraph::new(lines).block(card(ctx).title(format!(" {} ", ctx.t("app.nav.today")))),
        area,
    );
}

pub fn render_tasks_empty(f: &mut Frame, area: Rect, ctx: &UiContext) {
    let palette = ctx.palette();
    f.render_widget(
        Paragraph::new(ctx.t("app.tasksEmpty"))
            .style(Style::default().fg(palette.muted))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(card(ctx).title(format!(" {} ", ctx.t("app.nav.tasks")))),
        area,
    );
}

pub fn render_profile(f: &mut Frame, area: Rect, user_name: &str, ctx: &UiContext) {
    let palette = ctx.palette();
    let label = |key: &'static str| Span::styled(format!("{:<12}", ctx.t(key)), Style::default().fg(palette.muted));
    let mut toggles = toggle_line(ctx).spans;
    let theme_toggles = toggles.split_off(4);

    let mut language_row = vec![label("profile.language")];
    language_row.extend(toggles.into_iter().take(3));
    let mut theme_row = vec![label("profile.theme")];
    theme_row.extend(theme_toggles);

    let lines = vec![
        Line::from(Span::styled(
            format!("👤 {}", user_name),
            Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(language_row),
        Line::from(theme_row),
        Line::from(""),
        Line::from(Span::styled(ctx.t("app.tagline"), Style::default().fg(palette.muted))),
    ];
    f.render_widget(
        Paragraph::new(lines).block(card(ctx).title(format!(" {} ", ctx.t("profile.title")))),
        area,
    );
}

/// Showcase of the three picker layouts sharing one value
pub fn render_picker_demo(
    f: &mut Frame,
    area: Rect,
    demo: &DemoState,
    tasks: &[Task],
    today: NaiveDate,
    ctx: &UiContext,
) -> WheelAreas {
    let palette = ctx.palette();
    let [title_area, readout_area, pickers_area, tasks_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Length(PICKER_HEIGHT),
        Constraint::Fill(1),
    ])
    .areas(area);

    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                ctx.t("demo.title"),
                Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(ctx.t("demo.subtitle"), Style::default().fg(palette.muted))),
        ]),
        title_area,
    );
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!("{}: ", ctx.t("demo.selected")), Style::default().fg(palette.muted)),
            Span::styled(
                i18n::format_full(ctx.language, demo.value),
                Style::default().fg(palette.primary).add_modifier(Modifier::BOLD),
            ),
        ])),
        readout_area,
    );

    let [standalone_area, date_area, time_area] = Layout::horizontal([
        Constraint::Fill(2),
        Constraint::Fill(1),
        Constraint::Fill(1),
    ])
    .areas(pickers_area);

    let sections = [
        (standalone_area, PickerSlot::Standalone, &demo.standalone, "demo.standalone"),
        (date_area, PickerSlot::DateOnly, &demo.date_only, "demo.dateOnly"),
        (time_area, PickerSlot::TimeOnly, &demo.time_only, "demo.timeOnly"),
    ];
    let mut wheel_areas = Vec::new();
    for (section_area, slot, picker, title_key) in sections {
        let active = demo.focus == slot;
        let border = if active { palette.primary } else { palette.border };
        let block = card(ctx)
            .border_style(Style::default().fg(border))
            .title(format!(" {} ", ctx.t(title_key)));
        let inner = block.inner(section_area);
        f.render_widget(block, section_area);
        for (column, kind) in render_datetime_picker(f, inner, picker, active, ctx) {
            wheel_areas.push((column, slot, kind));
        }
    }

    let width = tasks_area.width.saturating_sub(4) as usize;
    let task_lines: Vec<Line> = tasks.iter().map(|task| task_line(task, today, ctx, width)).collect();
    f.render_widget(
        Paragraph::new(task_lines).block(card(ctx).title(format!(" {} ", ctx.t("demo.created")))),
        tasks_area,
    );

    wheel_areas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ThemeMode;
    use crate::i18n::Language;
    use crate::models::TaskDraft;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn today_keeps_only_tasks_due_today() {
        let today = NaiveDate::from_ymd_opt(2025, 2, 3).unwrap();
        let task = |id, due: Option<NaiveDateTime>| {
            Task::from_draft(
                id,
                TaskDraft {
                    title: format!("task {id}"),
                    due,
                    ..TaskDraft::default()
                },
            )
        };
        let tasks = vec![
            task(1, today.and_hms_opt(9, 0, 0)),
            task(2, None),
            task(3, today.succ_opt().and_then(|d| d.and_hms_opt(9, 0, 0))),
        ];
        let ids: Vec<u64> = due_today(&tasks, today).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn demo_reports_wheels_for_every_picker() {
        let ctx = UiContext::new(Language::En, ThemeMode::Dark);
        let today = NaiveDate::from_ymd_opt(2025, 2, 3).unwrap();
        let demo = DemoState::new(today.and_hms_opt(8, 15, 0).unwrap(), today, &ctx);

        let mut areas = Vec::new();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| areas = render_picker_demo(f, f.area(), &demo, &[], today, &ctx))
            .unwrap();

        let count = |slot| areas.iter().filter(|(_, s, _)| *s == slot).count();
        assert_eq!(count(PickerSlot::Standalone), 3);
        assert_eq!(count(PickerSlot::DateOnly), 1);
        assert_eq!(count(PickerSlot::TimeOnly), 2);
    }
}
