//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, state transitions,
//! and plugin wiring for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with the showcase plugins, settings loading and
/// platform-specific configuration.
pub mod app_setup;

/// Application state machine: loading through to running.
pub mod app_state;

/// Per-frame system ordering shared by all showcase plugins.
pub mod sets;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
