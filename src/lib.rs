//! urlverifier — validate URL strings and optionally check they are live.
//!
//! Three verdicts are computed for every input:
//!
//! - `is_url`: a loose heuristic matching the human intuition of "this
//!   looks like a URL" (accepts bare domains, rejects filesystem paths);
//! - `is_rfc3986_url`: the strict RFC 3986 grammar for absolute URIs;
//! - `is_rfc3986_uri`: the strict grammar including rooted relative
//!   references and opaque `scheme:data` forms.
//!
//! The verdicts are independent and can disagree; malformed input is a
//! normal result, never an error. With the HTTP check enabled, verified
//! URLs with an `http`/`https` scheme are probed with a GET request.
//!
//! ```
//! use urlverifier::classify;
//!
//! let result = classify("https://example.com/");
//! assert!(result.is_url);
//! assert!(result.is_rfc3986_url);
//! assert!(result.is_rfc3986_uri);
//!
//! let path = classify("/abs/test/dir");
//! assert!(!path.is_url);
//! assert!(path.is_rfc3986_uri);
//! ```
//!
//! Probing a URL:
//!
//! ```no_run
//! use urlverifier::Verifier;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let mut verifier = Verifier::new();
//! verifier.enable_http_check();
//!
//! let result = verifier.verify("https://example.com/").await?;
//! if let Some(reachability) = result.reachability {
//!     println!("{} -> {}", result.url, reachability.status_code);
//! }
//! # Ok(())
//! # }
//! ```

pub mod classification;
pub mod config;
pub mod core;
pub mod logging;
pub mod patterns;
pub mod reachability;
pub mod verifier;

// Re-export the public surface at the crate root
pub use crate::classification::components::{UriSyntaxError, UrlComponents, UserInfo};
pub use crate::classification::{ClassificationResult, classify, is_rfc3986_uri, is_rfc3986_url};
pub use crate::config::VerifierConfig;
pub use crate::core::error::{Result, UrlVerifierError};
pub use crate::reachability::{CheckReachability, Checker, ReachabilityResult};
pub use crate::verifier::{VerificationResult, Verifier, VerifyError};
