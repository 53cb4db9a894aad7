//! Outbound fetch subsystem.
//!
//! # Design Decisions
//! - The target URL is handed to the client verbatim: no scheme, host, or
//!   content validation. A malformed target surfaces as a fetch error.
//! - Upstream error statuses (4xx/5xx) are not failures; they are carried
//!   in the result and passed through to the caller.
//! - No timeout or retry is applied; a hung upstream holds its request.

pub mod fetch;

pub use fetch::{FetchError, FetchedResponse, Fetcher};
