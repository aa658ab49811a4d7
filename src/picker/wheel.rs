//! Drag-to-scroll value selector that snaps to the nearest item.
//!
//! The strip offset is a continuous value in abstract units; item `i` is
//! centered when the offset equals `-i * ITEM_HEIGHT`.

use std::time::Duration;

use super::spring::{Settle, SpringConfig};

/// Vertical extent of one item
pub const ITEM_HEIGHT: f64 = 48.0;
/// Share of movement kept when dragging past either end of the list
pub const DRAG_ELASTIC: f64 = 0.1;
/// Opacity reached at two item heights from the center
pub const MIN_OPACITY: f64 = 0.3;
/// Scale reached at two item heights from the center
pub const MIN_SCALE: f64 = 0.8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelItem {
    pub value: i64,
    pub label: String,
}

impl WheelItem {
    pub fn new(value: i64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemVisual {
    pub opacity: f64,
    pub scale: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    start_offset: f64,
    delta: f64,
}

#[derive(Debug, Clone)]
pub struct WheelPicker {
    items: Vec<WheelItem>,
    offset: f64,
    selected_index: usize,
    settle: Settle,
    drag: Option<Drag>,
}

/// Offset that centers the item at `index`
pub fn centering_offset(index: usize) -> f64 {
    -(index as f64) * ITEM_HEIGHT
}

/// Index a drag released at `offset` resolves to
pub fn resolve_index(offset: f64, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let raw = (-offset / ITEM_HEIGHT).round();
    raw.clamp(0.0, (count - 1) as f64) as usize
}

/// Opacity and scale for an item `distance` units away from the center
pub fn visual_for_distance(distance: f64) -> ItemVisual {
    let t = (distance.abs() / (2.0 * ITEM_HEIGHT)).min(1.0);
    ItemVisual {
        opacity: 1.0 + (MIN_OPACITY - 1.0) * t,
        scale: 1.0 + (MIN_SCALE - 1.0) * t,
    }
}

impl WheelPicker {
    /// Build a wheel and start settling toward `selected_value`
    pub fn new(items: Vec<WheelItem>, selected_value: i64) -> Self {
        let mut picker = Self {
            items,
            offset: 0.0,
            selected_index: 0,
            settle: Settle::new(SpringConfig::default()),
            drag: None,
        };
        if let Some(index) = picker.index_of(selected_value) {
            picker.selected_index = index;
        }
        picker.settle.retarget(centering_offset(picker.selected_index));
        picker
    }

    pub fn items(&self) -> &[WheelItem] {
        &self.items
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_value(&self) -> Option<i64> {
        self.items.get(self.selected_index).map(|item| item.value)
    }

    fn index_of(&self, value: i64) -> Option<usize> {
        self.items.iter().position(|item| item.value == value)
    }

    fn min_offset(&self) -> f64 {
        centering_offset(self.items.len().saturating_sub(1))
    }

    /// Swap labels (e.g. after a language change) while keeping the position
    pub fn replace_items(&mut self, items: Vec<WheelItem>) {
        let current = self.selected_value();
        self.items = items;
        let index = current
            .and_then(|value| self.index_of(value))
            .unwrap_or(0)
            .min(self.items.len().saturating_sub(1));
        if index != self.selected_index {
            self.selected_index = index;
            self.settle.retarget(centering_offset(index));
        }
    }

    /// React to a new externally supplied value; unknown values are ignored
    pub fn set_selected_value(&mut self, value: i64) -> bool {
        let Some(index) = self.index_of(value) else {
            return false;
        };
        if index != self.selected_index {
            self.selected_index = index;
            if self.drag.is_none() {
                self.settle.retarget(centering_offset(index));
            }
        }
        true
    }

    /// Grab the strip where it is. A strip still past a bound is mapped
    /// back to the pointer position that would have produced it.
    pub fn begin_drag(&mut self) {
        self.settle.cancel();
        self.drag = Some(Drag {
            start_offset: self.unconstrain(self.offset),
            delta: 0.0,
        });
    }

    /// Follow the pointer 1:1 inside the bounds, elastically outside them
    pub fn drag_by(&mut self, delta: f64) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        drag.delta += delta;
        let raw = drag.start_offset + drag.delta;
        self.offset = self.constrain(raw);
    }

    fn constrain(&self, raw: f64) -> f64 {
        let max = 0.0;
        let min = self.min_offset();
        if raw > max {
            max + (raw - max) * DRAG_ELASTIC
        } else if raw < min {
            min + (raw - min) * DRAG_ELASTIC
        } else {
            raw
        }
    }

    fn unconstrain(&self, offset: f64) -> f64 {
        let max = 0.0;
        let min = self.min_offset();
        if offset > max {
            max + (offset - max) / DRAG_ELASTIC
        } else if offset < min {
            min + (offset - min) / DRAG_ELASTIC
        } else {
            offset
        }
    }

    /// Snap to the nearest item and report its value
    pub fn end_drag(&mut self) -> Option<i64> {
        self.drag.take()?;
        if self.items.is_empty() {
            return None;
        }
        let index = resolve_index(self.offset, self.items.len());
        self.selected_index = index;
        self.settle.retarget(centering_offset(index));
        let value = self.items[index].value;
        tracing::debug!(index, value, offset = self.offset, "Wheel released");
        Some(value)
    }

    /// Select an item `steps` away (positive moves down the list) and settle
    /// toward it from wherever the strip currently is
    pub fn nudge(&mut self, steps: i32) -> Option<i64> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() as i64 - 1;
        let index = (self.selected_index as i64 + steps as i64).clamp(0, last) as usize;
        self.drag = None;
        self.selected_index = index;
        self.settle.retarget(centering_offset(index));
        Some(self.items[index].value)
    }

    /// Advance the settle animation
    pub fn tick(&mut self, dt: Duration) {
        if self.drag.is_none() {
            self.offset = self.settle.update(self.offset, dt);
        }
    }

    /// Item currently closest to the center line
    pub fn centered_index(&self) -> usize {
        resolve_index(self.offset, self.items.len())
    }

    pub fn item_visual(&self, index: usize) -> ItemVisual {
        visual_for_distance(index as f64 * ITEM_HEIGHT + self.offset)
    }
}
