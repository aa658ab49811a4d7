pub mod datetime;
pub mod spring;
pub mod wheel;

pub use datetime::{DateTimePicker, PickerMode, WheelKind};
pub use wheel::{WheelItem, WheelPicker};
