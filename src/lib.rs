//! leancheck: a thin HTTP front for an external source checker
//!
//! Source text is written to a temporary file, the checker is run on it, and
//! the `<path>:<line>:<column>:<message>` lines it prints on stderr come back
//! as structured diagnostics.

pub mod cli;

pub use leancheck_api::{ApiConfig, ApiServer, CheckRequest, CheckResponse};
pub use leancheck_core::{
    CheckError, Checker, CheckerConfig, ColonDelimitedParser, ConfigManager, Diagnostic,
    DiagnosticParser, ServiceConfig,
};
