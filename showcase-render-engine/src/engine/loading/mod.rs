//! Startup loading: runtime settings and the shared model scene.
//!
//! Settings resolve first (loaded JSON or compiled-in defaults), then the
//! model load is requested and the app moves to `Running`. The model itself
//! is never awaited; cells render empty until it arrives.

/// Model scene handle requested once settings are known.
pub mod model_loader;

/// Loading progress flags read by state transitions.
pub mod progress;

/// Runtime settings asset with defaults and sanitisation.
pub mod settings;

/// Settings JSON load and fallback handling.
pub mod settings_loader;
