pub mod app;
pub mod card_view;
pub mod flip_timer;
pub mod reset_modal;
pub mod settings;
pub mod theme;

pub use app::FlashyApp;
