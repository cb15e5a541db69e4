mod app;
mod input;
mod logging;
mod settings;
mod ui;

pub use app::run_app;
