pub mod constants;
pub mod render;
pub mod views;
