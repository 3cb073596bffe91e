pub mod actions;
pub mod app;
pub mod confirm_modal;
pub mod detail_panel;
pub mod error_modal;
pub mod settings_modal;
pub mod status;
pub mod theme;
pub mod top_bar;
pub mod verb_list;

pub use app::VerbarioApp;
