//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → environment overrides (PORT)
//!     → ProxyConfig (immutable)
//!     → handed to HttpServer at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload
//! - All fields have defaults so the proxy runs with no file at all
//! - `PORT` wins over the file value, matching environment-first hosts

pub mod loader;
pub mod schema;

pub use loader::{apply_env, load_config, ConfigError};
pub use schema::{ListenerConfig, ProxyConfig};
