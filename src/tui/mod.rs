pub mod app;
pub mod error;
pub mod events;
pub mod layout;
pub mod render;
pub mod widgets;

pub use app::{App, MainView, PickerSlot};
pub use error::TuiError;
pub use events::{handle_key_event, handle_mouse_event, run_event_loop};
pub use layout::Layout;
pub use render::render;
