use chrono::NaiveDate;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, List, ListItem, ListState, Scrollbar, ScrollbarOrientation, ScrollbarState,
    StatefulWidget,
};
use ratatui::Frame;

use crate::context::UiContext;
use crate::i18n;
use crate::models::Task;
use crate::tui::widgets::color::{get_contrast_text_color, parse_color};
use crate::tui::widgets::text::truncate;

/// One list row: status, title, due summary and a priority dot
pub fn task_line(task: &Task, today: NaiveDate, ctx: &UiContext, max_width: usize) -> Line<'static> {
    let palette = ctx.palette();
    let status_indicator = if task.done { "✓" } else { "○" };
    let due_str = task
        .due
        .map(|due| format!(" [{}]", i18n::format_due(ctx.language, due, today)))
        .unwrap_or_default();
    let reminder = if task.reminder { " 🔔" } else { "" };

    let title = truncate(
        &format!("{} {}", status_indicator, task.title),
        max_width.saturating_sub(due_str.chars().count() + 2),
    );
    let title_style = if task.done {
        Style::default().fg(palette.muted).add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(palette.fg)
    };

    Line::from(vec![
        Span::styled("● ", Style::default().fg(parse_color(task.priority.color()))),
        Span::styled(title, title_style),
        Span::styled(due_str, Style::default().fg(palette.muted)),
        Span::raw(reminder),
    ])
}

pub fn render_task_list(
    f: &mut Frame,
    area: Rect,
    tasks: &[Task],
    list_state: &mut ListState,
    today: NaiveDate,
    ctx: &UiContext,
) {
    let palette = ctx.palette();
    // 2 for borders, 2 for padding
    let max_width = area.width.saturating_sub(4) as usize;
    let highlight_fg = get_contrast_text_color(palette.primary);

    let items: Vec<ListItem> = tasks
        .iter()
        .map(|task| ListItem::new(task_line(task, today, ctx, max_width)))
        .collect();

    let [list_area, scrollbar_area] =
        Layout::horizontal([Constraint::Min(1), Constraint::Length(1)]).areas(area);

    let done = tasks.iter().filter(|t| t.done).count();
    let title = format!(" {} ({}/{} {}) ", ctx.t("app.nav.tasks"), done, tasks.len(), ctx.t("app.tasksSummary"));
    let total_items = items.len();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .title(title),
        )
        .style(Style::default().fg(palette.fg).bg(palette.bg))
        .highlight_style(Style::default().fg(highlight_fg).bg(palette.primary));

    StatefulWidget::render(list, list_area, f.buffer_mut(), list_state);

    let visible_items = list_area.height.saturating_sub(2) as usize;
    if total_items > visible_items && list_area.height > 2 {
        let scrollbar_inner_area = Rect::new(
            scrollbar_area.x,
            list_area.y + 1,
            scrollbar_area.width,
            list_area.height.saturating_sub(2),
        );
        let mut scrollbar_state = ScrollbarState::new(total_items)
            .viewport_content_length(visible_items)
            .position(list_state.selected().unwrap_or(0));
        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("█");
        f.render_stateful_widget(scrollbar, scrollbar_inner_area, &mut scrollbar_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ThemeMode;
    use crate::i18n::Language;
    use crate::models::TaskDraft;

    #[test]
    fn line_shows_status_title_and_due() {
        let ctx = UiContext::new(Language::En, ThemeMode::Dark);
        let today = NaiveDate::from_ymd_opt(2025, 2, 3).unwrap();
        let mut task = Task::from_draft(
            1,
            TaskDraft {
                title: "Call bank".to_string(),
                due: today.succ_opt().and_then(|d| d.and_hms_opt(10, 0, 0)),
                ..TaskDraft::default()
            },
        );
        let text = |line: Line| line.spans.iter().map(|s| s.content.to_string()).collect::<String>();

        assert_eq!(text(task_line(&task, today, &ctx, 60)), "● ○ Call bank [Tomorrow, 10:00]");
        task.done = true;
        assert!(text(task_line(&task, today, &ctx, 60)).starts_with("● ✓ Call bank"));
    }
}
