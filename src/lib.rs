// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera framing for sector-partitioned 3D scenes.
//!
//! Large 3D models ship with a hierarchical spatial index: a tree of
//! axis-aligned bounding boxes partitioning the model into sectors for
//! streaming and culling. Given the root of such a tree and a model-to-world
//! transform, `vantage` suggests a default camera placement — position,
//! look-at target, and near/far clipping planes — that frames the model from
//! an elevated three-quarter angle instead of a flat or top-down view.
//!
//! # Key entry points
//!
//! - [`camera::suggest::suggest_camera_config`] - default camera from a
//!   sector tree and model transform
//! - [`camera::fit::fit_camera_to_box`] - frame an explicit world-space box
//! - [`sector::Sector`] - owned sector tree, buildable from a flat sector
//!   table
//! - [`options::FramingOptions`] - tunable fit parameters with TOML preset
//!   support
//!
//! Rendering, sector streaming, and camera input handling are deliberately
//! out of scope; consumers feed the suggested configuration to their own
//! camera controller and projection setup.

pub mod bounds;
pub mod camera;
pub mod error;
pub mod options;
pub mod sector;
