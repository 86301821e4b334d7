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
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
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
// Tests may unwrap
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Engine-agnostic 3D camera built on glam.
//!
//! Vantage owns camera pose and projection state, derives view and
//! projection matrices, and maps per-frame input snapshots onto five
//! interaction modes: free-fly, first-person, third-person, orbit and
//! fixed.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - the camera state machine
//! - [`input::InputState`] - the default per-window input context, read by
//!   the camera through [`input::InputSource`]
//! - [`options::Options`] - tuning, key bindings and starting view, with
//!   TOML presets
//!
//! # Frame loop
//!
//! ```ignore
//! input.handle_event(event);           // as events arrive
//! camera.process_input(&input, dt);    // once per frame
//! input.end_frame();
//! let uniform = camera.uniform();      // upload to the GPU
//! ```

pub mod camera;
pub mod error;
pub mod input;
pub mod options;

pub use camera::{Camera, CameraMode, ProjectionKind};
pub use error::CameraError;
pub use options::Options;
