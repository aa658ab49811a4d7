pub mod color;
pub mod cookie_banner;
pub mod datetime_picker;
pub mod landing;
pub mod nav;
pub mod popup;
pub mod project_detail;
pub mod screens;
pub mod status_bar;
pub mod task_list;
pub mod task_modal;
pub mod text;
pub mod toggles;
pub mod wheel;
