//! Lifecycle management subsystem.
//!
//! Startup is plain: load config, bind, serve. The only coordination is
//! shutdown, where the binary and the tests both need to stop a running
//! server.

pub mod shutdown;

pub use shutdown::Shutdown;
