//! Task creation modal state: a draft edited field by field, with a
//! date-time sub-step that only commits on confirm.

use chrono::{NaiveDate, NaiveDateTime};

use crate::i18n::Language;
use crate::models::TaskDraft;
use crate::picker::{DateTimePicker, PickerMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftStep {
    Basic,
    DateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Description,
    Due,
    Priority,
    Reminder,
    Create,
}

impl DraftField {
    const RING: [DraftField; 6] = [
        DraftField::Title,
        DraftField::Description,
        DraftField::Due,
        DraftField::Priority,
        DraftField::Reminder,
        DraftField::Create,
    ];

    fn shifted(self, step: isize) -> Self {
        let len = Self::RING.len() as isize;
        let current = Self::RING.iter().position(|f| *f == self).unwrap_or(0) as isize;
        Self::RING[(current + step).rem_euclid(len) as usize]
    }
}

#[derive(Debug, Clone)]
pub struct TaskCreation {
    open: bool,
    step: DraftStep,
    field: DraftField,
    draft: TaskDraft,
    /// Date being edited in the date-time step; discarded unless confirmed
    picker: Option<DateTimePicker>,
}

impl Default for TaskCreation {
    fn default() -> Self {
        Self {
            open: false,
            step: DraftStep::Basic,
            field: DraftField::Title,
            draft: TaskDraft::default(),
            picker: None,
        }
    }
}

impl TaskCreation {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn step(&self) -> DraftStep {
        self.step
    }

    pub fn field(&self) -> DraftField {
        self.field
    }

    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    pub fn picker(&self) -> Option<&DateTimePicker> {
        self.picker.as_ref()
    }

    pub fn picker_mut(&mut self) -> Option<&mut DateTimePicker> {
        self.picker.as_mut()
    }

    pub fn can_create(&self) -> bool {
        self.draft.is_submittable()
    }

    /// Open with an empty draft
    pub fn open(&mut self) {
        self.reset();
        self.open = true;
    }

    /// Discard the draft and close
    pub fn close(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn focus_next(&mut self) {
        self.field = self.field.shifted(1);
    }

    pub fn focus_prev(&mut self) {
        self.field = self.field.shifted(-1);
    }

    pub fn set_focus(&mut self, field: DraftField) {
        self.field = field;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    /// Type into the focused text field
    pub fn insert_char(&mut self, ch: char) {
        match self.field {
            DraftField::Title => self.draft.title.push(ch),
            DraftField::Description => self.draft.description.push(ch),
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.field {
            DraftField::Title => {
                self.draft.title.pop();
            }
            DraftField::Description => {
                self.draft.description.pop();
            }
            _ => {}
        }
    }

    pub fn cycle_priority(&mut self, forward: bool) {
        self.draft.priority = if forward {
            self.draft.priority.next()
        } else {
            self.draft.priority.prev()
        };
    }

    pub fn toggle_reminder(&mut self) {
        self.draft.reminder = !self.draft.reminder;
    }

    /// Switch to the date-time step, seeded from the committed due date or `now`
    pub fn enter_datetime(&mut self, now: NaiveDateTime, today: NaiveDate, language: Language) {
        if !self.open {
            return;
        }
        let seed = self.draft.due.unwrap_or(now);
        self.picker = Some(DateTimePicker::new(
            seed,
            today,
            PickerMode::DateTime,
            language,
        ));
        self.step = DraftStep::DateTime;
    }

    /// Commit the edited date to the draft and return to the basic step
    pub fn confirm_datetime(&mut self) {
        if let Some(picker) = self.picker.take() {
            self.draft.due = Some(picker.value());
        }
        self.step = DraftStep::Basic;
    }

    /// Leave the date-time step without touching the draft
    pub fn back(&mut self) {
        self.picker = None;
        self.step = DraftStep::Basic;
    }

    /// Hand the draft over exactly once; a blank title does nothing
    pub fn create(&mut self) -> Option<TaskDraft> {
        if !self.open || !self.can_create() {
            return None;
        }
        let draft = std::mem::take(&mut self.draft);
        self.reset();
        tracing::info!("Task draft submitted: {:?}", draft.title.trim());
        Some(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;
    use crate::picker::WheelKind;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 3).unwrap()
    }

    fn now() -> NaiveDateTime {
        today().and_hms_opt(14, 5, 0).unwrap()
    }

    #[test]
    fn blank_title_cannot_be_created() {
        let mut modal = TaskCreation::default();
        modal.open();
        modal.set_title("  ");
        assert!(!modal.can_create());
        assert_eq!(modal.create(), None);
        assert!(modal.is_open());
    }

    #[test]
    fn create_emits_once_with_defaults_then_resets() {
        let mut modal = TaskCreation::default();
        modal.open();
        for ch in "Buy milk".chars() {
            modal.insert_char(ch);
        }
        let draft = modal.create().unwrap();
        assert_eq!(draft.title, "Buy milk");
        assert_eq!(draft.priority, Priority::Medium);
        assert!(!draft.reminder);
        assert!(draft.due.is_none());

        assert!(!modal.is_open());
        assert_eq!(modal.draft(), &TaskDraft::default());
        assert_eq!(modal.create(), None);
    }

    #[test]
    fn back_discards_the_edited_date() {
        let mut modal = TaskCreation::default();
        modal.open();
        modal.enter_datetime(now(), today(), Language::En);
        assert_eq!(modal.step(), DraftStep::DateTime);

        let picker = modal.picker_mut().unwrap();
        picker.set_focus(WheelKind::Hour);
        picker.nudge(3);

        modal.back();
        assert_eq!(modal.step(), DraftStep::Basic);
        assert!(modal.draft().due.is_none());
        assert!(modal.picker().is_none());
    }

    #[test]
    fn confirm_commits_the_edited_date() {
        let mut modal = TaskCreation::default();
        modal.open();
        modal.enter_datetime(now(), today(), Language::En);
        let picker = modal.picker_mut().unwrap();
        picker.set_focus(WheelKind::Hour);
        picker.nudge(1);
        modal.confirm_datetime();

        let expected = today().and_hms_opt(15, 5, 0).unwrap();
        assert_eq!(modal.draft().due, Some(expected));

        // re-entering seeds from the committed value
        modal.enter_datetime(now(), today(), Language::En);
        assert_eq!(modal.picker().unwrap().value(), expected);
    }

    #[test]
    fn entering_datetime_does_not_touch_draft() {
        let mut modal = TaskCreation::default();
        modal.open();
        modal.enter_datetime(now(), today(), Language::Ru);
        assert!(modal.draft().due.is_none());
        assert_eq!(modal.picker().unwrap().value(), now());
    }

    #[test]
    fn close_resets_everything() {
        let mut modal = TaskCreation::default();
        modal.open();
        modal.set_title("Call mom");
        modal.set_description("evening");
        modal.cycle_priority(true);
        modal.toggle_reminder();
        modal.enter_datetime(now(), today(), Language::En);
        modal.close();

        assert!(!modal.is_open());
        assert_eq!(modal.step(), DraftStep::Basic);
        assert_eq!(modal.draft(), &TaskDraft::default());
    }

    #[test]
    fn focus_ring_wraps_and_typing_follows_focus() {
        let mut modal = TaskCreation::default();
        modal.open();
        modal.focus_prev();
        assert_eq!(modal.field(), DraftField::Create);
        modal.focus_next();
        modal.focus_next();
        assert_eq!(modal.field(), DraftField::Description);
        modal.insert_char('x');
        modal.insert_char('y');
        modal.backspace();
        assert_eq!(modal.draft().description, "x");
        assert!(modal.draft().title.is_empty());
    }
}
