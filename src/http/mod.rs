//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware wiring)
//!     → middleware/cors.rs (preflight short-circuit, CORS headers)
//!     → proxy.rs (extract target URL, fetch, relay)
//!     → Send to client
//! ```

pub mod middleware;
pub mod proxy;
pub mod server;

pub use server::{AppState, HttpServer};
