//! CLI module
//!
//! Provides:
//! - Argument parsing (`serve`, `check`)
//! - Configuration resolution (defaults → file → env → flags)
//! - Mode dispatch

pub mod args;
pub mod dispatch;

pub use args::{Args, Mode};
pub use dispatch::{resolve_config, run, run_check};

/// Exit codes (deterministic)
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
