//! leancheck API Module
//!
//! HTTP surface for the checker: `POST /check` and `GET /health`, with open
//! CORS for browser front ends.

pub mod handlers;
pub mod models;
pub mod server;

pub use handlers::*;
pub use models::*;
pub use server::*;
