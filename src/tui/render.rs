use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::cli::AppMode;
use crate::draft::DraftStep;
use crate::tui::app::{MainView, PickerSlot};
use crate::tui::{App, Layout};
use crate::tui::widgets::{
    cookie_banner::render_cookie_banner,
    landing::render_landing,
    nav::render_bottom_nav,
    project_detail::render_project_detail,
    screens::{render_auth, render_onboarding, render_picker_demo, render_profile, render_tasks_empty, render_today},
    status_bar::render_status_bar,
    task_list::render_task_list,
    task_modal::render_task_modal,
    toggles::render_header,
};
use crate::utils::format_key_binding_for_display;

fn header_title(app: &App) -> String {
    let ctx = &app.ctx;
    match app.ui.mode {
        AppMode::Landing => String::new(),
        AppMode::Auth | AppMode::Onboarding => ctx.t("app.tagline").to_string(),
        AppMode::Main => ctx.t(app.ui.main_view.label_key()).to_string(),
        AppMode::PickerDemo => ctx.t("demo.title").to_string(),
    }
}

pub fn render(f: &mut Frame, app: &mut App, layout: &Layout) {
    let ctx = app.ctx;
    let palette = ctx.palette();
    let outer_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(" Saturway ")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(palette.fg).bg(palette.bg));
    f.render_widget(outer_block, f.area());

    render_header(f, layout.header_area, &header_title(app), &ctx);

    // Wheel hit areas are rebuilt every frame
    app.ui.wheel_areas.clear();
    let today = App::today();

    match app.ui.mode {
        AppMode::Landing => render_landing(f, layout.body_area, &mut app.landing, &ctx),
        AppMode::Auth => render_auth(f, layout.body_area, &ctx),
        AppMode::Onboarding => render_onboarding(f, layout.body_area, &app.ui.onboarding_name, &ctx),
        AppMode::Main => {
            match app.ui.main_view {
                MainView::Today => render_today(
                    f,
                    layout.body_area,
                    &app.config.user_name,
                    &app.tasks.tasks,
                    App::now(),
                    &ctx,
                ),
                MainView::Tasks if app.tasks.tasks.is_empty() => {
                    render_tasks_empty(f, layout.body_area, &ctx)
                }
                MainView::Tasks => render_task_list(
                    f,
                    layout.body_area,
                    &app.tasks.tasks,
                    &mut app.tasks.list_state,
                    today,
                    &ctx,
                ),
                MainView::Profile => render_profile(f, layout.body_area, &app.config.user_name, &ctx),
            }
            render_bottom_nav(f, layout.nav_area, app.ui.main_view, &ctx);
        }
        AppMode::PickerDemo => {
            let areas = render_picker_demo(f, layout.body_area, &app.demo, &app.tasks.tasks, today, &ctx);
            app.ui.wheel_areas.extend(areas);
        }
    }

    // Overlays, after normal content
    if app.ui.mode == AppMode::Landing {
        if let Some(index) = app.landing.detail {
            if let Some(project) = app.landing.projects.get(index) {
                render_project_detail(f, layout.inner_area, project, &mut app.landing.detail_scroll, &ctx);
            }
        }
    }

    if app.creation.is_open() {
        // The modal covers whatever wheels were drawn underneath
        app.ui.wheel_areas.clear();
        let columns = render_task_modal(f, layout.body_area, &app.creation, today, &ctx);
        app.ui
            .wheel_areas
            .extend(columns.into_iter().map(|(area, kind)| (area, PickerSlot::Modal, kind)));
    }

    if app.banner_visible() {
        render_cookie_banner(f, layout.body_area, &ctx);
    }

    let key_hints = get_key_hints(app);
    render_status_bar(f, layout.status_area, app.status.message.as_ref(), &key_hints, &palette);
}

pub fn get_key_hints(app: &App) -> Vec<String> {
    let ctx = &app.ctx;
    let keys = &app.config.key_bindings;
    let hint = |key: &str, label_key: &str| format!("{}: {}", format_key_binding_for_display(key), ctx.t(label_key));

    let mut hints = Vec::new();
    if app.creation.is_open() {
        match app.creation.step() {
            DraftStep::Basic => {
                hints.push(hint("Tab", "hint.next"));
                hints.push(hint("←/→", "hint.change"));
                hints.push(format!("{}: {}", format_key_binding_for_display(&keys.select), ctx.t("taskModal.createButton")));
                hints.push(hint("Esc", "hint.close"));
            }
            DraftStep::DateTime => {
                hints.push(hint("↑/↓", "hint.wheel"));
                hints.push(hint("←/→", "hint.next"));
                hints.push(format!("{}: {}", format_key_binding_for_display(&keys.select), ctx.t("taskModal.confirm")));
                hints.push(format!("Esc: {}", ctx.t("taskModal.back")));
            }
        }
        return hints;
    }

    if app.ui.mode == AppMode::Landing && app.landing.detail.is_some() {
        hints.push(hint(&keys.select, "hint.open"));
        hints.push(hint("↑/↓", "hint.scroll"));
        hints.push(hint("Esc", "hint.close"));
        return hints;
    }

    match app.ui.mode {
        AppMode::Landing => {
            if app.banner_visible() {
                hints.push(hint("a/d", "hint.cookies"));
            }
            hints.push(hint("Tab", "hint.next"));
            hints.push(hint(&keys.select, "hint.open"));
            hints.push(hint("↑/↓", "hint.scroll"));
        }
        AppMode::Auth | AppMode::Onboarding => {
            hints.push(hint(&keys.select, "hint.continue"));
        }
        AppMode::Main => {
            hints.push(hint("←/→", "hint.views"));
            hints.push(hint(&keys.new_task, "hint.newTask"));
            if app.ui.main_view == MainView::Tasks {
                hints.push(hint(&keys.toggle_done, "hint.toggleDone"));
            }
        }
        AppMode::PickerDemo => {
            hints.push(hint("Tab", "hint.next"));
            hints.push(hint("↑/↓", "hint.wheel"));
            hints.push(hint(&keys.new_task, "hint.newTask"));
        }
    }

    let typing = app.ui.mode == AppMode::Onboarding;
    if !typing {
        hints.push(hint(&keys.toggle_language, "hint.language"));
        hints.push(hint(&keys.toggle_theme, "hint.theme"));
        hints.push(hint(&keys.quit, "hint.quit"));
    }
    hints
}
