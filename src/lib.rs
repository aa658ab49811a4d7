pub mod cli;
pub mod config;
pub mod consent;
pub mod context;
pub mod draft;
pub mod i18n;
pub mod images;
pub mod landing;
pub mod logging;
pub mod models;
pub mod picker;
pub mod storage;
pub mod tui;
pub mod utils;

pub use config::Config;
pub use context::{ThemeMode, UiContext};
pub use i18n::Language;
pub use models::{Priority, Task, TaskDraft};
pub use storage::Store;
pub use utils::Profile;
