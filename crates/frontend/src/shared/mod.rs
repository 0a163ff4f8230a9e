pub mod alert;
pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod forms;
pub mod http;
pub mod icons;
pub mod loader;
pub mod modal;
pub mod state;
