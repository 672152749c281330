//! Time-varying motion for the showcase grid.
//!
//! Two layers compose on every instance:
//!
//! ```text
//! SpringTransform (instance root)
//!   └─> slow placement: grid slot <-> detail centre, scale in/out
//!       stepped with frame time, retargeted on selection changes
//!
//! HoverMotion (model pivot, child of the root)
//!   └─> fast per-frame response to pointer distance and scroll
//!       exponential smoothing with fixed per-tick factors
//! ```

/// Pointer-driven rotation, depth and hover scale for a single instance.
pub mod hover;

/// Mass/tension/friction springs with optional start delay.
pub mod spring;
