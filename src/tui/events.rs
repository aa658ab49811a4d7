use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, size as terminal_size, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::io;
use std::time::{Duration, Instant};

use crate::cli::AppMode;
use crate::draft::{DraftField, DraftStep};
use crate::tui::app::{MainView, PickerSlot};
use crate::tui::error::TuiError;
use crate::tui::layout::Layout;
use crate::tui::App;
use crate::utils::{parse_key_binding, ParsedKeyBinding};

const FRAME: Duration = Duration::from_millis(16);
const SCROLL_STEP: i32 = 3;

/// Guard that ensures terminal state is restored even on panic
/// This is critical for TUI applications - if the terminal is left in raw mode
/// or alternate screen, the user's terminal will be unusable.
struct TerminalGuard {
    raw_mode_enabled: bool,
    alternate_screen_enabled: bool,
    mouse_capture_enabled: bool,
}

impl TerminalGuard {
    /// Initialize terminal state and return a guard
    /// The guard will restore terminal state when dropped (even on panic)
    fn new() -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

        Ok(Self {
            raw_mode_enabled: true,
            alternate_screen_enabled: true,
            mouse_capture_enabled: true,
        })
    }

    /// Manually restore terminal state (called on normal exit)
    /// After calling this, the guard will do nothing on drop
    fn restore(&mut self) -> Result<(), TuiError> {
        if self.mouse_capture_enabled {
            execute!(io::stdout(), DisableMouseCapture)?;
            self.mouse_capture_enabled = false;
        }
        if self.raw_mode_enabled {
            disable_raw_mode()?;
            self.raw_mode_enabled = false;
        }
        if self.alternate_screen_enabled {
            execute!(io::stdout(), LeaveAlternateScreen)?;
            self.alternate_screen_enabled = false;
        }
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Ignore errors in drop - we're already in a cleanup path
        if self.mouse_capture_enabled {
            let _ = execute!(io::stdout(), DisableMouseCapture);
        }
        if self.raw_mode_enabled {
            let _ = disable_raw_mode();
        }
        if self.alternate_screen_enabled {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
        }
    }
}

pub fn run_event_loop(mut app: App) -> Result<(), TuiError> {
    // Check terminal size before entering alternate screen
    // This allows us to show a helpful error message in the normal terminal
    let (width, height) = terminal_size().map_err(TuiError::IoError)?;
    let min_width_with_border = Layout::MIN_WIDTH + 2;
    let min_height_with_border = Layout::MIN_HEIGHT + 2;

    if width < min_width_with_border || height < min_height_with_border {
        return Err(TuiError::RenderError(format!(
            "Terminal size too small. Current: {}x{}, Minimum required: {}x{}. Please resize your terminal window.",
            width, height, min_width_with_border, min_height_with_border
        )));
    }

    let mut guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    let mut last_tick = Instant::now();

    loop {
        // Springs, the banner delay and status timeouts all run off the frame clock
        let now = Instant::now();
        app.tick(now.duration_since(last_tick));
        last_tick = now;

        let terminal_size = terminal.size()?;
        let terminal_rect = Rect::new(0, 0, terminal_size.width, terminal_size.height);
        terminal.draw(|f| {
            let layout = Layout::calculate(terminal_rect, app.ui.mode == AppMode::Main);
            crate::tui::render::render(f, &mut app, &layout);
        })?;

        if event::poll(FRAME)? {
            match event::read()? {
                Event::Key(key_event) => {
                    // Only process Press events (ignore Release events to prevent double-processing on Windows)
                    if key_event.kind == KeyEventKind::Press && handle_key_event(&mut app, key_event)? {
                        break;
                    }
                }
                Event::Mouse(mouse_event) => handle_mouse_event(&mut app, mouse_event),
                Event::Resize(_width, _height) => {
                    // The terminal.size() will be refreshed on next draw
                }
                _ => {}
            }
        }
    }

    guard.restore()?;
    tracing::info!("Exiting");

    Ok(())
}

fn binding(key: &str) -> Result<ParsedKeyBinding, TuiError> {
    parse_key_binding(key).map_err(TuiError::KeyBindingError)
}

/// Handle one key press; returns true when the app should quit
pub fn handle_key_event(app: &mut App, key_event: KeyEvent) -> Result<bool, TuiError> {
    if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL) {
        return Ok(true);
    }

    // Overlays and text entry take every key
    if app.creation.is_open() {
        handle_task_modal(app, key_event)?;
        return Ok(false);
    }
    if app.ui.mode == AppMode::Landing && app.landing.detail.is_some() {
        handle_project_detail(app, key_event)?;
        return Ok(false);
    }
    if app.ui.mode == AppMode::Onboarding {
        handle_onboarding(app, key_event)?;
        return Ok(false);
    }

    let keys = app.config.key_bindings.clone();
    if app.banner_visible() {
        match key_event.code {
            KeyCode::Char('a') => {
                app.accept_cookies();
                return Ok(false);
            }
            KeyCode::Char('d') => {
                app.decline_cookies();
                return Ok(false);
            }
            _ => {}
        }
    }

    if matches_key_event(key_event, &binding(&keys.quit)?) {
        return Ok(true);
    }
    if matches_key_event(key_event, &binding(&keys.toggle_language)?) {
        app.toggle_language();
        return Ok(false);
    }
    if matches_key_event(key_event, &binding(&keys.toggle_theme)?) {
        app.toggle_theme();
        return Ok(false);
    }

    match app.ui.mode {
        AppMode::Landing => handle_landing(app, key_event)?,
        AppMode::Auth => {
            if matches_key_event(key_event, &binding(&keys.select)?) {
                app.complete_auth();
            }
        }
        AppMode::Onboarding => {}
        AppMode::Main => handle_main(app, key_event)?,
        AppMode::PickerDemo => handle_picker_demo(app, key_event)?,
    }
    Ok(false)
}

fn handle_landing(app: &mut App, key_event: KeyEvent) -> Result<(), TuiError> {
    let page = app.landing.viewport_height.max(1) as i32;
    match key_event.code {
        KeyCode::Tab => app.landing_focus_next(),
        KeyCode::BackTab => app.landing_focus_prev(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_landing(-1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_landing(1),
        KeyCode::PageUp => app.scroll_landing(-page),
        KeyCode::PageDown => app.scroll_landing(page),
        KeyCode::Home => app.scroll_landing(i32::MIN / 2),
        KeyCode::End => app.scroll_landing(i32::MAX / 2),
        _ => {
            if matches_key_event(key_event, &binding(&app.config.key_bindings.select)?) {
                app.activate_landing_target();
            }
        }
    }
    Ok(())
}

fn handle_project_detail(app: &mut App, key_event: KeyEvent) -> Result<(), TuiError> {
    match key_event.code {
        KeyCode::Esc => app.close_project(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_project_detail(-1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_project_detail(1),
        KeyCode::PageUp => app.scroll_project_detail(-10),
        KeyCode::PageDown => app.scroll_project_detail(10),
        _ => {
            if matches_key_event(key_event, &binding(&app.config.key_bindings.select)?) {
                app.open_project_cta();
            }
        }
    }
    Ok(())
}

fn handle_onboarding(app: &mut App, key_event: KeyEvent) -> Result<(), TuiError> {
    match key_event.code {
        KeyCode::Enter => {
            app.complete_onboarding();
        }
        KeyCode::Backspace => {
            app.ui.onboarding_name.pop();
        }
        KeyCode::Char(c) if !key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            app.ui.onboarding_name.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_task_modal(app: &mut App, key_event: KeyEvent) -> Result<(), TuiError> {
    if app.creation.step() == DraftStep::DateTime {
        match key_event.code {
            KeyCode::Esc => app.creation.back(),
            KeyCode::Enter => app.creation.confirm_datetime(),
            KeyCode::Up | KeyCode::Char('k') => app.nudge_picker(PickerSlot::Modal, -1),
            KeyCode::Down | KeyCode::Char('j') => app.nudge_picker(PickerSlot::Modal, 1),
            KeyCode::Left | KeyCode::BackTab => {
                if let Some(picker) = app.creation.picker_mut() {
                    picker.focus_prev();
                }
            }
            KeyCode::Right | KeyCode::Tab => {
                if let Some(picker) = app.creation.picker_mut() {
                    picker.focus_next();
                }
            }
            _ => {}
        }
        return Ok(());
    }

    let field = app.creation.field();
    match key_event.code {
        KeyCode::Esc => app.creation.close(),
        KeyCode::Tab | KeyCode::Down => app.creation.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.creation.focus_prev(),
        KeyCode::Enter => match field {
            DraftField::Title | DraftField::Description => app.creation.focus_next(),
            DraftField::Due => app.enter_task_datetime(),
            DraftField::Priority => app.creation.cycle_priority(true),
            DraftField::Reminder => app.creation.toggle_reminder(),
            DraftField::Create => app.submit_task(),
        },
        KeyCode::Left if field == DraftField::Priority => app.creation.cycle_priority(false),
        KeyCode::Right if field == DraftField::Priority => app.creation.cycle_priority(true),
        KeyCode::Char(' ') if field == DraftField::Reminder => app.creation.toggle_reminder(),
        KeyCode::Backspace => app.creation.backspace(),
        KeyCode::Char(c) if !key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            app.creation.insert_char(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_main(app: &mut App, key_event: KeyEvent) -> Result<(), TuiError> {
    let keys = app.config.key_bindings.clone();
    if matches_key_event(key_event, &binding(&keys.new_task)?) {
        app.creation.open();
        return Ok(());
    }
    if app.ui.main_view == MainView::Tasks
        && matches_key_event(key_event, &binding(&keys.toggle_done)?)
    {
        app.toggle_selected_task_done();
        return Ok(());
    }

    match key_event.code {
        KeyCode::Left => app.ui.main_view = app.ui.main_view.prev(),
        KeyCode::Right => app.ui.main_view = app.ui.main_view.next(),
        KeyCode::Char('1') => app.ui.main_view = MainView::Today,
        KeyCode::Char('2') => app.ui.main_view = MainView::Tasks,
        KeyCode::Char('3') => app.ui.main_view = MainView::Profile,
        KeyCode::Down | KeyCode::Char('j') if app.ui.main_view == MainView::Tasks => {
            app.select_next_task()
        }
        KeyCode::Up | KeyCode::Char('k') if app.ui.main_view == MainView::Tasks => {
            app.select_prev_task()
        }
        _ => {}
    }
    Ok(())
}

fn handle_picker_demo(app: &mut App, key_event: KeyEvent) -> Result<(), TuiError> {
    if matches_key_event(key_event, &binding(&app.config.key_bindings.new_task)?) {
        app.creation.open();
        return Ok(());
    }

    let slot = app.demo.focus;
    match key_event.code {
        KeyCode::Esc => app.set_mode(AppMode::Landing),
        KeyCode::Tab => app.demo.focus_next(),
        KeyCode::Up | KeyCode::Char('k') => app.nudge_picker(slot, -1),
        KeyCode::Down | KeyCode::Char('j') => app.nudge_picker(slot, 1),
        KeyCode::Left => {
            if let Some(picker) = app.picker_mut(slot) {
                picker.focus_prev();
            }
        }
        KeyCode::Right => {
            if let Some(picker) = app.picker_mut(slot) {
                picker.focus_next();
            }
        }
        _ => {}
    }
    Ok(())
}

/// Route pointer input: wheels first, then whatever scrolls underneath
pub fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    let (column, row) = (mouse_event.column, mouse_event.row);
    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.begin_wheel_drag(column, row);
        }
        MouseEventKind::Drag(MouseButton::Left) => app.drag_wheel_to(row),
        MouseEventKind::Up(MouseButton::Left) => app.end_wheel_drag(),
        MouseEventKind::ScrollDown => scroll_at(app, column, row, 1),
        MouseEventKind::ScrollUp => scroll_at(app, column, row, -1),
        _ => {}
    }
}

fn scroll_at(app: &mut App, column: u16, row: u16, direction: i32) {
    if app.scroll_wheel_at(column, row, direction) {
        return;
    }
    if app.creation.is_open() {
        return;
    }
    match app.ui.mode {
        AppMode::Landing if app.landing.detail.is_some() => {
            app.scroll_project_detail(direction * SCROLL_STEP)
        }
        AppMode::Landing => app.scroll_landing(direction * SCROLL_STEP),
        AppMode::Main if app.ui.main_view == MainView::Tasks => {
            if direction > 0 {
                app.select_next_task();
            } else {
                app.select_prev_task();
            }
        }
        _ => {}
    }
}

fn matches_key_event(key_event: KeyEvent, binding: &ParsedKeyBinding) -> bool {
    // Use primary modifier check (Ctrl on Windows/Linux, Option/Alt on macOS)
    let has_primary_mod = crate::utils::has_primary_modifier(key_event.modifiers);
    if binding.requires_ctrl != has_primary_mod {
        return false;
    }

    binding.key_code == key_event.code
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::consent::ConsentState;
    use crate::storage::Store;

    fn app(mode: AppMode) -> App {
        let mut app = App::new(Config::default(), Store::in_memory().unwrap(), mode, None).unwrap();
        app.opener = |_| Ok(());
        app
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn quit_binding_is_ignored_while_typing() {
        let mut app = app(AppMode::Main);
        press(&mut app, KeyCode::Char('n'));
        assert!(app.creation.is_open());
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.creation.draft().title, "q");

        press(&mut app, KeyCode::Esc);
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn keyboard_creates_task_with_due_date() {
        let mut app = app(AppMode::Main);
        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "Gym");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.creation.field(), DraftField::Due);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.creation.step(), DraftStep::DateTime);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.creation.step(), DraftStep::Basic);
        let due = app.creation.draft().due.expect("due date committed");
        assert_eq!(due.date(), App::today().succ_opt().unwrap());

        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.creation.field(), DraftField::Create);
        press(&mut app, KeyCode::Enter);
        assert!(!app.creation.is_open());
        assert_eq!(app.tasks.tasks.len(), 1);
        assert_eq!(app.tasks.tasks[0].title, "Gym");
    }

    #[test]
    fn escape_in_datetime_step_discards_edit() {
        let mut app = app(AppMode::Main);
        press(&mut app, KeyCode::Char('n'));
        app.creation.set_focus(DraftField::Due);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Esc);
        assert!(app.creation.is_open());
        assert!(app.creation.draft().due.is_none());
    }

    #[test]
    fn onboarding_collects_name_then_enters_main() {
        let mut app = app(AppMode::Auth);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.ui.mode, AppMode::Onboarding);
        type_text(&mut app, "Lena");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.ui.mode, AppMode::Main);
        assert_eq!(app.config.user_name, "Len");
    }

    #[test]
    fn cookie_keys_only_act_while_banner_is_shown() {
        let mut app = app(AppMode::Landing);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.banner.state(), ConsentState::Unset);
        app.tick(Duration::from_secs(3));
        press(&mut app, KeyCode::Char('d'));
        assert!(!app.banner_visible());
    }

    #[test]
    fn language_and_theme_toggle_globally() {
        let mut app = app(AppMode::PickerDemo);
        let language = app.ctx.language;
        let theme = app.ctx.theme;
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char('t'));
        assert_ne!(app.ctx.language, language);
        assert_ne!(app.ctx.theme, theme);
    }

    #[test]
    fn detail_overlay_captures_keys() {
        let mut app = app(AppMode::Landing);
        app.open_project(1);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.landing.focus, 0);
        press(&mut app, KeyCode::Esc);
        assert!(app.landing.detail.is_none());
    }

    #[test]
    fn mouse_wheel_scrolls_landing_off_pickers() {
        let mut app = app(AppMode::Landing);
        app.landing.content_height = 100;
        app.landing.viewport_height = 20;
        let scroll = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 5,
            row: 5,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse_event(&mut app, scroll);
        assert_eq!(app.landing.scroll, SCROLL_STEP as u16);
    }
}
