//! Date, hour and minute wheels composed into one date-time value.

use chrono::{Duration as Days, NaiveDate, NaiveDateTime, Timelike};
use std::time::Duration;

use super::wheel::{WheelItem, WheelPicker};
use crate::i18n::{self, Language};

/// Number of selectable days, starting today
pub const DAYS_AHEAD: i64 = 30;
/// Minute wheel step
pub const MINUTE_STEP: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerMode {
    Date,
    Time,
    DateTime,
}

impl PickerMode {
    pub fn shows_date(self) -> bool {
        matches!(self, PickerMode::Date | PickerMode::DateTime)
    }

    pub fn shows_time(self) -> bool {
        matches!(self, PickerMode::Time | PickerMode::DateTime)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelKind {
    Date,
    Hour,
    Minute,
}

/// Nearest minute on the wheel: 47 -> 45, 48 -> 50, 58 -> 55
pub fn display_minute(minute: u32) -> u32 {
    let rounded = ((minute as f64 / MINUTE_STEP as f64).round() as u32) * MINUTE_STEP;
    rounded.min(60 - MINUTE_STEP)
}

#[derive(Debug, Clone)]
pub struct DateTimePicker {
    mode: PickerMode,
    today: NaiveDate,
    language: Language,
    value: NaiveDateTime,
    focus: WheelKind,
    date_wheel: WheelPicker,
    hour_wheel: WheelPicker,
    minute_wheel: WheelPicker,
}

impl DateTimePicker {
    pub fn new(value: NaiveDateTime, today: NaiveDate, mode: PickerMode, language: Language) -> Self {
        let date_wheel = WheelPicker::new(date_items(today, language), date_index(today, value.date()));
        let hour_wheel = WheelPicker::new(
            (0..24).map(|h| WheelItem::new(h, format!("{:02}", h))).collect(),
            value.hour() as i64,
        );
        let minute_wheel = WheelPicker::new(
            (0..60 / MINUTE_STEP)
                .map(|i| {
                    let m = i * MINUTE_STEP;
                    WheelItem::new(m as i64, format!("{:02}", m))
                })
                .collect(),
            display_minute(value.minute()) as i64,
        );
        let focus = if mode.shows_date() {
            WheelKind::Date
        } else {
            WheelKind::Hour
        };
        Self {
            mode,
            today,
            language,
            value,
            focus,
            date_wheel,
            hour_wheel,
            minute_wheel,
        }
    }

    pub fn mode(&self) -> PickerMode {
        self.mode
    }

    /// The composite value; untouched until the user moves a wheel
    pub fn value(&self) -> NaiveDateTime {
        self.value
    }

    pub fn focus(&self) -> WheelKind {
        self.focus
    }

    pub fn wheel(&self, kind: WheelKind) -> &WheelPicker {
        match kind {
            WheelKind::Date => &self.date_wheel,
            WheelKind::Hour => &self.hour_wheel,
            WheelKind::Minute => &self.minute_wheel,
        }
    }

    fn wheel_mut(&mut self, kind: WheelKind) -> &mut WheelPicker {
        match kind {
            WheelKind::Date => &mut self.date_wheel,
            WheelKind::Hour => &mut self.hour_wheel,
            WheelKind::Minute => &mut self.minute_wheel,
        }
    }

    /// Wheels shown for the current mode, left to right
    pub fn visible_wheels(&self) -> Vec<WheelKind> {
        let mut kinds = Vec::with_capacity(3);
        if self.mode.shows_date() {
            kinds.push(WheelKind::Date);
        }
        if self.mode.shows_time() {
            kinds.push(WheelKind::Hour);
            kinds.push(WheelKind::Minute);
        }
        kinds
    }

    pub fn focus_next(&mut self) {
        self.shift_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.shift_focus(-1);
    }

    pub fn set_focus(&mut self, kind: WheelKind) {
        if self.visible_wheels().contains(&kind) {
            self.focus = kind;
        }
    }

    fn shift_focus(&mut self, step: isize) {
        let kinds = self.visible_wheels();
        let current = kinds.iter().position(|k| *k == self.focus).unwrap_or(0) as isize;
        let len = kinds.len() as isize;
        let next = (current + step).rem_euclid(len) as usize;
        self.focus = kinds[next];
    }

    /// Take a new value from the caller; wheels settle toward it
    pub fn set_value(&mut self, value: NaiveDateTime) {
        self.value = value;
        self.date_wheel
            .set_selected_value(date_index(self.today, value.date()));
        self.hour_wheel.set_selected_value(value.hour() as i64);
        self.minute_wheel
            .set_selected_value(display_minute(value.minute()) as i64);
    }

    /// Relabel the date wheel after a language switch
    pub fn set_language(&mut self, language: Language) {
        if language != self.language {
            self.language = language;
            self.date_wheel.replace_items(date_items(self.today, language));
        }
    }

    pub fn begin_drag(&mut self, kind: WheelKind) {
        self.wheel_mut(kind).begin_drag();
    }

    pub fn drag_by(&mut self, kind: WheelKind, delta: f64) {
        self.wheel_mut(kind).drag_by(delta);
    }

    /// Release a wheel; returns the new composite value
    pub fn end_drag(&mut self, kind: WheelKind) -> Option<NaiveDateTime> {
        let picked = self.wheel_mut(kind).end_drag()?;
        Some(self.apply(kind, picked))
    }

    /// Move the focused wheel by whole items
    pub fn nudge(&mut self, steps: i32) -> Option<NaiveDateTime> {
        let kind = self.focus;
        let picked = self.wheel_mut(kind).nudge(steps)?;
        Some(self.apply(kind, picked))
    }

    fn apply(&mut self, kind: WheelKind, picked: i64) -> NaiveDateTime {
        let current = self.value;
        let next = match kind {
            WheelKind::Date => {
                let date = self.today + Days::days(picked);
                date.and_time(current.time())
            }
            WheelKind::Hour => current.with_hour(picked as u32).unwrap_or(current),
            WheelKind::Minute => current.with_minute(picked as u32).unwrap_or(current),
        };
        self.value = next;
        next
    }

    pub fn tick(&mut self, dt: Duration) {
        self.date_wheel.tick(dt);
        self.hour_wheel.tick(dt);
        self.minute_wheel.tick(dt);
    }
}

fn date_items(today: NaiveDate, language: Language) -> Vec<WheelItem> {
    (0..DAYS_AHEAD)
        .map(|offset| {
            let date = today + Days::days(offset);
            WheelItem::new(offset, i18n::format_day_label(language, date, today))
        })
        .collect()
}

/// Day offset of `date` on the wheel; dates outside the window show the nearest end
fn date_index(today: NaiveDate, date: NaiveDate) -> i64 {
    (date - today).num_days().clamp(0, DAYS_AHEAD - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::wheel::{ITEM_HEIGHT, centering_offset};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 3).unwrap()
    }

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 2, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn settle(picker: &mut DateTimePicker) {
        for _ in 0..300 {
            picker.tick(Duration::from_millis(16));
        }
    }

    #[test]
    fn minute_rounds_to_nearest_step() {
        assert_eq!(display_minute(47), 45);
        assert_eq!(display_minute(48), 50);
        assert_eq!(display_minute(0), 0);
        assert_eq!(display_minute(2), 0);
        assert_eq!(display_minute(3), 5);
        assert_eq!(display_minute(58), 55);
    }

    #[test]
    fn odd_minute_is_displayed_rounded_without_changing_value() {
        let value = at(3, 14, 47);
        let mut picker = DateTimePicker::new(value, today(), PickerMode::DateTime, Language::En);
        settle(&mut picker);
        assert_eq!(picker.wheel(WheelKind::Minute).selected_value(), Some(45));
        assert_eq!(picker.value(), value);

        let picker = DateTimePicker::new(at(3, 14, 48), today(), PickerMode::Time, Language::En);
        assert_eq!(picker.wheel(WheelKind::Minute).selected_value(), Some(50));
    }

    #[test]
    fn hour_change_keeps_date_and_minute() {
        let mut picker = DateTimePicker::new(at(5, 14, 47), today(), PickerMode::DateTime, Language::En);
        picker.set_focus(WheelKind::Hour);
        let next = picker.nudge(2).unwrap();
        assert_eq!(next, at(5, 16, 47));
    }

    #[test]
    fn date_change_keeps_time() {
        let mut picker = DateTimePicker::new(at(3, 9, 30), today(), PickerMode::DateTime, Language::En);
        settle(&mut picker);
        picker.begin_drag(WheelKind::Date);
        picker.drag_by(WheelKind::Date, -4.0 * ITEM_HEIGHT);
        let next = picker.end_drag(WheelKind::Date).unwrap();
        assert_eq!(next, at(7, 9, 30));
        // other wheels keep their positions
        assert_eq!(picker.wheel(WheelKind::Hour).selected_value(), Some(9));
        assert_eq!(picker.wheel(WheelKind::Minute).selected_value(), Some(30));
    }

    #[test]
    fn minute_change_applies_step_value() {
        let mut picker = DateTimePicker::new(at(3, 9, 47), today(), PickerMode::Time, Language::En);
        settle(&mut picker);
        picker.begin_drag(WheelKind::Minute);
        picker.drag_by(WheelKind::Minute, 10.0);
        assert_eq!(picker.end_drag(WheelKind::Minute), Some(at(3, 9, 45)));
    }

    #[test]
    fn external_value_moves_wheels() {
        let mut picker = DateTimePicker::new(at(3, 9, 0), today(), PickerMode::DateTime, Language::En);
        picker.set_value(at(4, 22, 10));
        settle(&mut picker);
        assert_eq!(picker.wheel(WheelKind::Date).offset(), centering_offset(1));
        assert_eq!(picker.wheel(WheelKind::Hour).offset(), centering_offset(22));
        assert_eq!(picker.wheel(WheelKind::Minute).offset(), centering_offset(2));
    }

    #[test]
    fn focus_cycles_through_visible_wheels() {
        let mut picker = DateTimePicker::new(at(3, 9, 0), today(), PickerMode::Time, Language::En);
        assert_eq!(picker.focus(), WheelKind::Hour);
        picker.focus_next();
        assert_eq!(picker.focus(), WheelKind::Minute);
        picker.focus_next();
        assert_eq!(picker.focus(), WheelKind::Hour);
        picker.set_focus(WheelKind::Date);
        assert_eq!(picker.focus(), WheelKind::Hour);
    }

    #[test]
    fn language_switch_relabels_dates() {
        let mut picker = DateTimePicker::new(at(3, 9, 0), today(), PickerMode::Date, Language::En);
        assert_eq!(picker.wheel(WheelKind::Date).items()[0].label, "Today");
        picker.set_language(Language::Ru);
        assert_eq!(picker.wheel(WheelKind::Date).items()[0].label, "Сегодня");
        assert_eq!(picker.wheel(WheelKind::Date).items().len(), DAYS_AHEAD as usize);
    }
}
