pub mod animation;
pub mod core;
pub mod input;
pub mod loading;
pub mod scene;
