//! CORS Forwarding Proxy Library

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod upstream;

pub use config::ProxyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
