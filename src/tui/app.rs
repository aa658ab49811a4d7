use chrono::{Local, NaiveDate, NaiveDateTime};
use ratatui::layout::{Position, Rect};
use ratatui::widgets::ListState;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::cli::AppMode;
use crate::config::Config;
use crate::consent::CookieBanner;
use crate::context::UiContext;
use crate::draft::TaskCreation;
use crate::landing::{self, LinkTarget, Project};
use crate::models::{OnboardingData, Task, TaskDraft};
use crate::picker::wheel::ITEM_HEIGHT;
use crate::picker::{DateTimePicker, PickerMode, WheelKind};
use crate::storage::{KeyValueStore, Store};
use crate::tui::error::TuiError;
use crate::tui::widgets::wheel::ROWS_PER_ITEM;

/// Key the onboarding answers are persisted under, as JSON
pub const ONBOARDING_KEY: &str = "saturway-onboarding";

/// Opens a URL outside the terminal
pub type Opener = fn(&str) -> std::io::Result<()>;

fn system_opener(url: &str) -> std::io::Result<()> {
    open::that(url)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainView {
    Today,
    Tasks,
    Profile,
}

impl MainView {
    pub const ALL: [MainView; 3] = [MainView::Today, MainView::Tasks, MainView::Profile];

    pub fn label_key(self) -> &'static str {
        match self {
            MainView::Today => "app.nav.today",
            MainView::Tasks => "app.nav.tasks",
            MainView::Profile => "app.nav.profile",
        }
    }

    pub fn index(self) -> usize {
        match self {
            MainView::Today => 0,
            MainView::Tasks => 1,
            MainView::Profile => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Focusable elements of the landing page, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingTarget {
    ExploreProjects,
    TryDemo,
    Project(usize),
    Cta(usize),
}

pub const LANDING_TARGETS: [LandingTarget; 6] = [
    LandingTarget::ExploreProjects,
    LandingTarget::TryDemo,
    LandingTarget::Project(0),
    LandingTarget::Project(1),
    LandingTarget::Cta(0),
    LandingTarget::Cta(1),
];

#[derive(Debug, Clone)]
pub struct LandingState {
    pub projects: Vec<Project>,
    pub focus: usize,
    pub scroll: u16,
    /// Line offset of the projects section, recorded on render
    pub projects_anchor: u16,
    pub content_height: u16,
    pub viewport_height: u16,
    /// Line offset of each focus target, recorded on render
    pub target_rows: Vec<u16>,
    /// Scroll the focused target into view on the next render
    pub reveal_focus: bool,
    /// Index into `projects` of the open detail view
    pub detail: Option<usize>,
    pub detail_scroll: u16,
}

impl Default for LandingState {
    fn default() -> Self {
        Self {
            projects: landing::projects(),
            focus: 0,
            scroll: 0,
            projects_anchor: 0,
            content_height: 0,
            viewport_height: 0,
            target_rows: Vec::new(),
            reveal_focus: false,
            detail: None,
            detail_scroll: 0,
        }
    }
}

impl LandingState {
    pub fn focused(&self) -> LandingTarget {
        LANDING_TARGETS[self.focus % LANDING_TARGETS.len()]
    }

    pub fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }
}

/// Which picker a wheel belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerSlot {
    Modal,
    Standalone,
    DateOnly,
    TimeOnly,
}

#[derive(Debug, Clone)]
pub struct DemoState {
    /// Value shared by the three demo pickers
    pub value: NaiveDateTime,
    pub standalone: DateTimePicker,
    pub date_only: DateTimePicker,
    pub time_only: DateTimePicker,
    pub focus: PickerSlot,
}

impl DemoState {
    pub fn new(value: NaiveDateTime, today: NaiveDate, ctx: &UiContext) -> Self {
        Self {
            value,
            standalone: DateTimePicker::new(value, today, PickerMode::DateTime, ctx.language),
            date_only: DateTimePicker::new(value, today, PickerMode::Date, ctx.language),
            time_only: DateTimePicker::new(value, today, PickerMode::Time, ctx.language),
            focus: PickerSlot::Standalone,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            PickerSlot::Standalone => PickerSlot::DateOnly,
            PickerSlot::DateOnly => PickerSlot::TimeOnly,
            PickerSlot::TimeOnly | PickerSlot::Modal => PickerSlot::Standalone,
        };
    }

    fn pickers_mut(&mut self) -> [&mut DateTimePicker; 3] {
        [&mut self.standalone, &mut self.date_only, &mut self.time_only]
    }
}

#[derive(Debug, Clone, Default)]
pub struct TaskState {
    pub tasks: Vec<Task>,
    pub list_state: ListState,
    next_id: u64,
}

#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub message: Option<String>,
    pub message_time: Option<Instant>,
}

/// A wheel held by the mouse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelDrag {
    pub slot: PickerSlot,
    pub kind: WheelKind,
    pub last_row: u16,
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub mode: AppMode,
    pub main_view: MainView,
    pub onboarding_name: String,
    /// Wheel columns drawn in the last frame, for mouse hit testing
    pub wheel_areas: Vec<(Rect, PickerSlot, WheelKind)>,
    pub drag: Option<WheelDrag>,
}

impl UiState {
    fn new(mode: AppMode) -> Self {
        Self {
            mode,
            main_view: MainView::Today,
            onboarding_name: String::new(),
            wheel_areas: Vec::new(),
            drag: None,
        }
    }
}

fn load_onboarding(store: &dyn KeyValueStore) -> Option<OnboardingData> {
    let json = match store.get(ONBOARDING_KEY) {
        Ok(json) => json?,
        Err(e) => {
            tracing::warn!("Failed to read onboarding data: {}", e);
            return None;
        }
    };
    match serde_json::from_str(&json) {
        Ok(data) => Some(data),
        Err(e) => {
            tracing::warn!("Ignoring malformed onboarding data: {}", e);
            None
        }
    }
}

pub struct App {
    pub config: Config,
    /// Where language and theme changes are persisted; `None` keeps them in memory
    pub config_path: Option<PathBuf>,
    pub ctx: UiContext,
    pub store: Store,
    pub banner: CookieBanner,
    pub ui: UiState,
    pub landing: LandingState,
    pub creation: TaskCreation,
    pub tasks: TaskState,
    pub demo: DemoState,
    pub status: StatusState,
    pub opener: Opener,
}

impl App {
    pub fn new(
        mut config: Config,
        store: Store,
        mode: AppMode,
        config_path: Option<PathBuf>,
    ) -> Result<Self, TuiError> {
        let banner = CookieBanner::load(
            &store,
            Duration::from_millis(config.cookie_banner_delay_ms),
        )?;
        if let Some(data) = load_onboarding(&store) {
            config.user_name = data.name;
        }
        let ctx = UiContext::new(config.language, config.theme);
        let demo = DemoState::new(Self::now(), Self::today(), &ctx);
        tracing::info!("Starting in {:?} mode", mode);

        Ok(Self {
            config,
            config_path,
            ctx,
            store,
            banner,
            ui: UiState::new(mode),
            landing: LandingState::default(),
            creation: TaskCreation::default(),
            tasks: TaskState::default(),
            demo,
            status: StatusState::default(),
            opener: system_opener,
        })
    }

    pub fn now() -> NaiveDateTime {
        Local::now().naive_local()
    }

    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    pub fn set_mode(&mut self, mode: AppMode) {
        if self.ui.mode != mode {
            tracing::info!("Switching mode {:?} -> {:?}", self.ui.mode, mode);
            self.ui.mode = mode;
            self.ui.drag = None;
        }
    }

    pub fn set_status_message(&mut self, message: String) {
        self.status.message = Some(message);
        self.status.message_time = Some(Instant::now());
    }

    pub fn clear_status_message(&mut self) {
        self.status.message = None;
        self.status.message_time = None;
    }

    /// Check if status message should be auto-cleared (after 3 seconds)
    pub fn check_status_message_timeout(&mut self) {
        const STATUS_MESSAGE_TIMEOUT_SECS: u64 = 3;
        if let Some(time) = self.status.message_time {
            if time.elapsed().as_secs() >= STATUS_MESSAGE_TIMEOUT_SECS {
                self.clear_status_message();
            }
        }
    }

    /// Advance every time-driven piece of state
    pub fn tick(&mut self, dt: Duration) {
        if self.ui.mode == AppMode::Landing {
            self.banner.tick(dt);
        }
        for picker in self.demo.pickers_mut() {
            picker.tick(dt);
        }
        if let Some(picker) = self.creation.picker_mut() {
            picker.tick(dt);
        }
        self.check_status_message_timeout();
    }

    // Language and theme

    pub fn toggle_language(&mut self) {
        self.ctx.language = self.ctx.language.toggled();
        self.config.language = self.ctx.language;
        let language = self.ctx.language;
        for picker in self.demo.pickers_mut() {
            picker.set_language(language);
        }
        if let Some(picker) = self.creation.picker_mut() {
            picker.set_language(language);
        }
        self.persist_config();
        self.set_status_message(self.ctx.t("status.languageChanged").to_string());
    }

    pub fn toggle_theme(&mut self) {
        self.ctx.theme = self.ctx.theme.toggled();
        self.config.theme = self.ctx.theme;
        self.persist_config();
        let message = format!(
            "{}: {}",
            self.ctx.t("status.themeChanged"),
            self.ctx.t(self.ctx.theme.label_key())
        );
        self.set_status_message(message);
    }

    fn persist_config(&mut self) {
        let Some(path) = self.config_path.clone() else {
            return;
        };
        if let Err(e) = self.config.save_to_path(&path) {
            tracing::warn!("Failed to save config to {:?}: {}", path, e);
            self.set_status_message(format!("{}: {}", self.ctx.t("status.saveFailed"), e));
        }
    }

    // External links

    pub fn open_link(&mut self, target: LinkTarget) {
        let url = target.url(&self.config.links).to_string();
        match (self.opener)(&url) {
            Ok(()) => {
                tracing::info!("Opened {}", url);
                self.set_status_message(format!("{} {}", self.ctx.t("status.opened"), url));
            }
            Err(e) => {
                tracing::warn!("Failed to open {}: {}", url, e);
                self.set_status_message(format!("{}: {}", self.ctx.t("status.openFailed"), url));
            }
        }
    }

    // Cookie consent

    pub fn accept_cookies(&mut self) {
        if let Err(e) = self.banner.accept(&self.store) {
            tracing::warn!("Failed to store cookie consent: {}", e);
        }
    }

    pub fn decline_cookies(&mut self) {
        if let Err(e) = self.banner.decline(&self.store) {
            tracing::warn!("Failed to store cookie consent: {}", e);
        }
    }

    pub fn banner_visible(&self) -> bool {
        self.ui.mode == AppMode::Landing && self.banner.is_visible()
    }

    // Landing page

    pub fn landing_focus_next(&mut self) {
        self.landing.focus = (self.landing.focus + 1) % LANDING_TARGETS.len();
        self.landing.reveal_focus = true;
    }

    pub fn landing_focus_prev(&mut self) {
        self.landing.focus = (self.landing.focus + LANDING_TARGETS.len() - 1) % LANDING_TARGETS.len();
        self.landing.reveal_focus = true;
    }

    pub fn scroll_landing(&mut self, delta: i32) {
        let next = (self.landing.scroll as i32 + delta).max(0) as u16;
        self.landing.scroll = next.min(self.landing.max_scroll());
    }

    pub fn activate_landing_target(&mut self) {
        match self.landing.focused() {
            LandingTarget::ExploreProjects => {
                self.landing.scroll = self.landing.projects_anchor.min(self.landing.max_scroll());
            }
            LandingTarget::TryDemo => self.set_mode(AppMode::PickerDemo),
            LandingTarget::Project(index) => self.open_project(index),
            LandingTarget::Cta(index) => {
                if let Some((_, _, _, target)) = landing::CTA_CARDS.get(index) {
                    self.open_link(*target);
                }
            }
        }
    }

    pub fn open_project(&mut self, index: usize) {
        if index < self.landing.projects.len() {
            tracing::debug!("Opening project {}", self.landing.projects[index].id);
            self.landing.detail = Some(index);
            self.landing.detail_scroll = 0;
        }
    }

    pub fn close_project(&mut self) {
        self.landing.detail = None;
        self.landing.detail_scroll = 0;
    }

    pub fn open_project_cta(&mut self) {
        let cta = self
            .landing
            .detail
            .and_then(|index| self.landing.projects.get(index))
            .and_then(|project| project.cta);
        if let Some(cta) = cta {
            self.open_link(cta.target);
        }
    }

    pub fn scroll_project_detail(&mut self, delta: i32) {
        self.landing.detail_scroll = (self.landing.detail_scroll as i32 + delta).max(0) as u16;
    }

    // Organizer flow

    pub fn complete_auth(&mut self) {
        self.set_mode(AppMode::Onboarding);
    }

    /// Finish onboarding; a blank name keeps the configured one
    pub fn complete_onboarding(&mut self) -> OnboardingData {
        let name = self.ui.onboarding_name.trim();
        if !name.is_empty() {
            self.config.user_name = name.to_string();
        }
        let data = OnboardingData {
            name: self.config.user_name.clone(),
        };
        tracing::info!("Onboarding complete: {:?}", data);
        match serde_json::to_string(&data) {
            Ok(json) => {
                if let Err(e) = self.store.set(ONBOARDING_KEY, &json) {
                    tracing::warn!("Failed to store onboarding data: {}", e);
                }
            }
            Err(e) => tracing::warn!("Failed to encode onboarding data: {}", e),
        }
        self.set_mode(AppMode::Main);
        data
    }

    pub fn add_task(&mut self, draft: TaskDraft) {
        self.tasks.next_id += 1;
        let task = Task::from_draft(self.tasks.next_id, draft);
        tracing::info!(id = task.id, priority = ?task.priority, "Task created: {}", task.title);
        self.tasks.tasks.push(task);
        self.tasks.list_state.select(Some(self.tasks.tasks.len() - 1));
        self.set_status_message(self.ctx.t("status.taskCreated").to_string());
    }

    /// Submit the creation modal; a blank title leaves it open
    pub fn submit_task(&mut self) {
        if let Some(draft) = self.creation.create() {
            self.add_task(draft);
        }
    }

    pub fn enter_task_datetime(&mut self) {
        let language = self.ctx.language;
        self.creation.enter_datetime(Self::now(), Self::today(), language);
    }

    pub fn select_next_task(&mut self) {
        let len = self.tasks.tasks.len();
        if len == 0 {
            return;
        }
        let next = self.tasks.list_state.selected().map_or(0, |i| (i + 1) % len);
        self.tasks.list_state.select(Some(next));
    }

    pub fn select_prev_task(&mut self) {
        let len = self.tasks.tasks.len();
        if len == 0 {
            return;
        }
        let prev = self.tasks.list_state.selected().map_or(0, |i| (i + len - 1) % len);
        self.tasks.list_state.select(Some(prev));
    }

    pub fn toggle_selected_task_done(&mut self) {
        let Some(index) = self.tasks.list_state.selected() else {
            return;
        };
        if let Some(task) = self.tasks.tasks.get_mut(index) {
            task.done = !task.done;
            tracing::debug!(id = task.id, done = task.done, "Task toggled");
        }
    }

    // Pickers

    pub fn picker_mut(&mut self, slot: PickerSlot) -> Option<&mut DateTimePicker> {
        match slot {
            PickerSlot::Modal => self.creation.picker_mut(),
            PickerSlot::Standalone => Some(&mut self.demo.standalone),
            PickerSlot::DateOnly => Some(&mut self.demo.date_only),
            PickerSlot::TimeOnly => Some(&mut self.demo.time_only),
        }
    }

    fn picker_changed(&mut self, slot: PickerSlot, value: NaiveDateTime) {
        if slot == PickerSlot::Modal {
            return;
        }
        self.demo.value = value;
        for picker in self.demo.pickers_mut() {
            if picker.value() != value {
                picker.set_value(value);
            }
        }
    }

    pub fn nudge_picker(&mut self, slot: PickerSlot, steps: i32) {
        let changed = self.picker_mut(slot).and_then(|picker| picker.nudge(steps));
        if let Some(value) = changed {
            self.picker_changed(slot, value);
        }
    }

    fn wheel_at(&self, column: u16, row: u16) -> Option<(PickerSlot, WheelKind)> {
        let position = Position::new(column, row);
        self.ui
            .wheel_areas
            .iter()
            .find(|(area, _, _)| area.contains(position))
            .map(|(_, slot, kind)| (*slot, *kind))
    }

    /// Grab the wheel under the pointer; returns false when there is none
    pub fn begin_wheel_drag(&mut self, column: u16, row: u16) -> bool {
        let Some((slot, kind)) = self.wheel_at(column, row) else {
            return false;
        };
        let Some(picker) = self.picker_mut(slot) else {
            return false;
        };
        picker.set_focus(kind);
        picker.begin_drag(kind);
        if slot != PickerSlot::Modal {
            self.demo.focus = slot;
        }
        self.ui.drag = Some(WheelDrag {
            slot,
            kind,
            last_row: row,
        });
        true
    }

    pub fn drag_wheel_to(&mut self, row: u16) {
        let Some(drag) = self.ui.drag else {
            return;
        };
        let rows = row as i32 - drag.last_row as i32;
        let units = rows as f64 * ITEM_HEIGHT / ROWS_PER_ITEM as f64;
        if let Some(picker) = self.picker_mut(drag.slot) {
            picker.drag_by(drag.kind, units);
        }
        self.ui.drag = Some(WheelDrag {
            last_row: row,
            ..drag
        });
    }

    pub fn end_wheel_drag(&mut self) {
        let Some(drag) = self.ui.drag.take() else {
            return;
        };
        let changed = self
            .picker_mut(drag.slot)
            .and_then(|picker| picker.end_drag(drag.kind));
        if let Some(value) = changed {
            self.picker_changed(drag.slot, value);
        }
    }

    /// Mouse wheel over a picker column; returns false when not over one
    pub fn scroll_wheel_at(&mut self, column: u16, row: u16, steps: i32) -> bool {
        let Some((slot, kind)) = self.wheel_at(column, row) else {
            return false;
        };
        if let Some(picker) = self.picker_mut(slot) {
            picker.set_focus(kind);
        }
        self.nudge_picker(slot, steps);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consent::ConsentState;
    use crate::i18n::Language;

    fn app(mode: AppMode) -> App {
        let store = Store::in_memory().unwrap();
        let mut app = App::new(Config::default(), store, mode, None).unwrap();
        app.opener = |_| Ok(());
        app
    }

    #[test]
    fn organizer_flow_moves_through_modes() {
        let mut app = app(AppMode::Auth);
        app.complete_auth();
        assert_eq!(app.ui.mode, AppMode::Onboarding);

        app.ui.onboarding_name = "  Maria ".to_string();
        let data = app.complete_onboarding();
        assert_eq!(data.name, "Maria");
        assert_eq!(app.ui.mode, AppMode::Main);
    }

    #[test]
    fn onboarding_name_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saturway.db");
        let path = path.to_str().unwrap();

        let store = Store::new(path).unwrap();
        let mut first = App::new(Config::default(), store, AppMode::Onboarding, None).unwrap();
        first.ui.onboarding_name = "Ivan".to_string();
        first.complete_onboarding();
        drop(first);

        let store = Store::new(path).unwrap();
        let second = App::new(Config::default(), store, AppMode::Main, None).unwrap();
        assert_eq!(second.config.user_name, "Ivan");
    }

    #[test]
    fn malformed_onboarding_record_is_ignored() {
        let store = Store::in_memory().unwrap();
        store.set(ONBOARDING_KEY, "{not json").unwrap();
        let app = App::new(Config::default(), store, AppMode::Main, None).unwrap();
        assert_eq!(app.config.user_name, "Alex");
    }

    #[test]
    fn blank_onboarding_name_keeps_default() {
        let mut app = app(AppMode::Onboarding);
        assert_eq!(app.complete_onboarding().name, "Alex");
    }

    #[test]
    fn banner_timer_runs_only_on_landing() {
        let mut app = app(AppMode::Main);
        app.tick(Duration::from_secs(5));
        assert!(!app.banner_visible());

        app.set_mode(AppMode::Landing);
        app.tick(Duration::from_millis(1999));
        assert!(!app.banner_visible());
        app.tick(Duration::from_millis(1));
        assert!(app.banner_visible());

        app.accept_cookies();
        assert!(!app.banner_visible());
        assert_eq!(app.banner.state(), ConsentState::Accepted);
    }

    #[test]
    fn landing_targets_cycle_and_activate() {
        let mut app = app(AppMode::Landing);
        app.landing_focus_prev();
        assert_eq!(app.landing.focused(), LandingTarget::Cta(1));
        app.activate_landing_target();
        assert!(app.status.message.as_deref().unwrap().contains("https://saturway.space/"));

        app.landing.focus = 2;
        app.activate_landing_target();
        assert_eq!(app.landing.detail, Some(0));
        app.open_project_cta();
        assert!(app.status.message.as_deref().unwrap().contains("https://t.me/your_bot_name"));
        app.close_project();
        assert_eq!(app.landing.detail, None);

        app.landing.focus = 1;
        app.activate_landing_target();
        assert_eq!(app.ui.mode, AppMode::PickerDemo);
    }

    #[test]
    fn failed_open_is_reported_not_fatal() {
        let mut app = app(AppMode::Landing);
        app.opener = |_| Err(std::io::Error::other("no opener"));
        app.open_link(LinkTarget::Telegram);
        assert!(app.status.message.as_deref().unwrap().starts_with("Не удалось"));
    }

    #[test]
    fn explore_jumps_to_projects_within_bounds() {
        let mut app = app(AppMode::Landing);
        app.landing.content_height = 200;
        app.landing.viewport_height = 40;
        app.landing.projects_anchor = 30;
        app.activate_landing_target();
        assert_eq!(app.landing.scroll, 30);
        app.scroll_landing(1000);
        assert_eq!(app.landing.scroll, 160);
        app.scroll_landing(-1000);
        assert_eq!(app.landing.scroll, 0);
    }

    #[test]
    fn modal_creates_task_once() {
        let mut app = app(AppMode::Main);
        app.creation.open();
        app.submit_task();
        assert!(app.tasks.tasks.is_empty());
        assert!(app.creation.is_open());

        app.creation.set_title("Buy milk");
        app.submit_task();
        app.submit_task();
        assert_eq!(app.tasks.tasks.len(), 1);
        assert!(!app.creation.is_open());

        app.toggle_selected_task_done();
        assert!(app.tasks.tasks[0].done);
    }

    #[test]
    fn language_toggle_relabels_open_pickers() {
        let mut app = app(AppMode::PickerDemo);
        assert_eq!(app.ctx.language, Language::Ru);
        app.toggle_language();
        assert_eq!(app.config.language, Language::En);
        assert_eq!(
            app.demo.date_only.wheel(WheelKind::Date).items()[0].label,
            "Today"
        );
    }

    #[test]
    fn demo_pickers_share_one_value() {
        let mut app = app(AppMode::PickerDemo);
        app.demo.time_only.set_focus(WheelKind::Hour);
        app.nudge_picker(PickerSlot::TimeOnly, 1);
        let value = app.demo.value;
        assert_eq!(app.demo.standalone.value(), value);
        assert_eq!(app.demo.date_only.value(), value);
        assert_eq!(app.demo.time_only.value(), value);
    }

    #[test]
    fn mouse_drag_moves_wheel_under_pointer() {
        let mut app = app(AppMode::PickerDemo);
        app.ui.wheel_areas = vec![(Rect::new(10, 5, 6, 11), PickerSlot::TimeOnly, WheelKind::Minute)];
        for _ in 0..300 {
            app.tick(Duration::from_millis(16));
        }
        let before = app.demo.time_only.wheel(WheelKind::Minute).selected_index();

        assert!(!app.begin_wheel_drag(0, 0));
        assert!(app.begin_wheel_drag(12, 10));
        assert!(app.ui.drag.is_some());
        // dragging up by two rows advances one item
        app.drag_wheel_to(8);
        app.end_wheel_drag();
        let after = app.demo.time_only.wheel(WheelKind::Minute).selected_index();
        assert_eq!(after, (before + 1).min(11));
        assert!(app.ui.drag.is_none());
    }
}
