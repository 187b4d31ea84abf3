//! HTTP reachability probing
//!
//! This module performs the optional live check on a URL using an
//! async HTTP request. It is a thin wrapper over the HTTP client with a
//! documented contract: any HTTP response counts as reachable, network
//! failures are reported as typed errors.

pub mod checker;

// Re-export commonly used items
pub use checker::{CheckReachability, Checker, ReachabilityResult};
