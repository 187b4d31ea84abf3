//! Configuration management
//!
//! Holds the verifier's two switches and supports loading them from a
//! TOML file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{Result, UrlVerifierError};

/// Configuration for a `Verifier`.
///
/// Read once at the start of each verification run; mutate it only between
/// runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifierConfig {
    /// Probe URLs over HTTP as part of verification
    pub http_check_enabled: bool,

    /// Skip TLS certificate verification when probing
    pub skip_cert_verification: bool,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        // Secure by default: no network traffic, certificates verified.
        Self {
            http_check_enabled: false,
            skip_cert_verification: false,
        }
    }
}

impl VerifierConfig {
    /// Load configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            UrlVerifierError::Config(format!(
                "could not read config file '{}': {e}",
                path.display()
            ))
        })?;

        let config: VerifierConfig = toml::from_str(&content).map_err(|e| {
            UrlVerifierError::Config(format!(
                "invalid TOML in config file '{}': {e}",
                path.display()
            ))
        })?;

        Ok(config)
    }
}
