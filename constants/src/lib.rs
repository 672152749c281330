pub mod access;
pub mod grid;
pub mod motion;
pub mod render_settings;
