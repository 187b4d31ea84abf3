//! Verifier facade
//!
//! Holds the configuration and orchestrates one verification run:
//! classify, then optionally probe reachability, then assemble the result.

use serde::Serialize;
use std::fmt;

use crate::classification::components::UrlComponents;
use crate::classification::{self, ClassificationResult};
use crate::config::VerifierConfig;
use crate::core::constants::schemes;
use crate::core::error::UrlVerifierError;
use crate::reachability::{CheckReachability, Checker, ReachabilityResult};

/// Everything known about one verified URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationResult {
    /// The input, verbatim
    pub url: String,
    /// Generic decomposition, absent when the input fails even the loose
    /// URL heuristic
    pub components: Option<UrlComponents>,
    /// Loose heuristic verdict
    pub is_url: bool,
    /// Strict absolute-URI verdict
    pub is_rfc3986_url: bool,
    /// Strict URI verdict
    pub is_rfc3986_uri: bool,
    /// Probe outcome; `None` when the HTTP check is disabled or the URL was
    /// not probeable
    pub reachability: Option<ReachabilityResult>,
}

impl VerificationResult {
    fn from_classification(url: &str, classification: ClassificationResult) -> Self {
        Self {
            url: url.to_string(),
            components: classification.components,
            is_url: classification.is_url,
            is_rfc3986_url: classification.is_rfc3986_url,
            is_rfc3986_uri: classification.is_rfc3986_uri,
            reachability: None,
        }
    }
}

/// Verification failure that still carries the populated result.
///
/// Classification never fails, so even when the reachability leg errors the
/// caller can inspect the verdicts and components through [`Self::result`].
#[derive(Debug)]
pub struct VerifyError {
    result: VerificationResult,
    source: UrlVerifierError,
}

impl VerifyError {
    fn new(result: VerificationResult, source: UrlVerifierError) -> Self {
        Self { result, source }
    }

    /// The populated verification result this error accompanies.
    pub fn result(&self) -> &VerificationResult {
        &self.result
    }

    /// Consume the error, keeping the verification result.
    pub fn into_result(self) -> VerificationResult {
        self.result
    }

    /// The underlying failure.
    pub fn error(&self) -> &UrlVerifierError {
        &self.source
    }
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl std::error::Error for VerifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// URL verifier: classification plus optional reachability checking.
///
/// Construction is cheap and the instance is reusable; configuration is
/// read once at the start of each `verify` call and must not be mutated
/// while a call is in flight.
#[derive(Debug, Default)]
pub struct Verifier {
    config: VerifierConfig,
    checker: Checker,
}

impl Verifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a verifier with an explicit configuration.
    pub fn with_config(config: VerifierConfig) -> Self {
        Self {
            config,
            checker: Checker::default(),
        }
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Probe URLs over HTTP during `verify`. Off by default.
    pub fn enable_http_check(&mut self) {
        self.config.http_check_enabled = true;
    }

    /// Do not probe URLs over HTTP during `verify` (the default).
    pub fn disable_http_check(&mut self) {
        self.config.http_check_enabled = false;
    }

    /// Skip TLS certificate verification when probing. Off by default.
    pub fn allow_skip_cert_verification(&mut self) {
        self.config.skip_cert_verification = true;
    }

    /// Verify TLS certificates when probing (the default).
    pub fn deny_skip_cert_verification(&mut self) {
        self.config.skip_cert_verification = false;
    }

    /// Classify `url` without any network traffic.
    pub fn classify(&self, url: &str) -> ClassificationResult {
        classification::classify(url)
    }

    /// Whether `url` is an absolute URL under the strict RFC 3986 grammar.
    pub fn is_rfc3986_url(&self, url: &str) -> bool {
        classification::is_rfc3986_url(url)
    }

    /// Whether `url` is a URI under the strict RFC 3986 grammar.
    pub fn is_rfc3986_uri(&self, url: &str) -> bool {
        classification::is_rfc3986_uri(url)
    }

    /// Verify `url`: classify it and, when the HTTP check is enabled, probe
    /// it for reachability.
    ///
    /// The classification fields are always populated. With the HTTP check
    /// enabled, a URL without an `http`/`https` scheme yields a
    /// `SchemeNotSupported` error, and a network failure yields a `Network`
    /// error with `reachability` set to the unreachable result; both carry
    /// the populated result inside the returned [`VerifyError`].
    pub async fn verify(&self, url: &str) -> Result<VerificationResult, VerifyError> {
        // Snapshot so a caller mutating between awaits cannot split one
        // run across two configurations.
        let config = self.config;

        let classification = classification::classify(url);
        let probeable = classification
            .components
            .as_ref()
            .and_then(|c| c.scheme.as_deref())
            .is_some_and(|scheme| scheme == schemes::HTTP || scheme == schemes::HTTPS);
        let mut result = VerificationResult::from_classification(url, classification);

        if !config.http_check_enabled {
            return Ok(result);
        }

        if !probeable {
            return Err(VerifyError::new(
                result,
                UrlVerifierError::SchemeNotSupported(url.to_string()),
            ));
        }

        match self
            .checker
            .check_reachability(url, config.skip_cert_verification)
            .await
        {
            Ok(reachability) => {
                result.reachability = Some(reachability);
                Ok(result)
            }
            Err(err) => {
                result.reachability = Some(ReachabilityResult::unreachable());
                Err(VerifyError::new(result, err))
            }
        }
    }
}
