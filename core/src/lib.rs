//! leancheck Core
//!
//! Hands submitted source text to an external checker binary through a
//! temporary file and turns the checker's error stream into structured
//! diagnostics.

pub mod checker;
pub mod config;
pub mod diagnostic;
pub mod error;

pub use checker::{CheckOutcome, Checker};
pub use config::{CheckerConfig, ConfigManager, ServerConfig, ServiceConfig};
pub use diagnostic::{ColonDelimitedParser, Diagnostic, DiagnosticParser};
pub use error::{CheckError, ConfigError, Result};
