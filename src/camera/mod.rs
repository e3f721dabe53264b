//! Camera placement suggestions.
//!
//! Computes default camera poses and clipping planes for a loaded model,
//! either from its sector tree ([`suggest`]) or from an explicit bounding
//! box ([`fit`]). Consumers hand the resulting configuration to their own
//! camera controller; no input handling or animation lives here.

/// Suggested camera configuration value type.
pub mod config;
/// Fit a camera to an explicit world-space bounding box.
pub mod fit;
/// Default camera suggestion from a sector tree.
pub mod suggest;
