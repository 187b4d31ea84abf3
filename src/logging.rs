use crate::classification::ClassificationResult;
use crate::config::VerifierConfig;
use crate::reachability::ReachabilityResult;
use log::{debug, error, info, warn};

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &VerifierConfig) {
    info!(
        "Configuration: http_check={}, skip_cert_verification={}",
        config.http_check_enabled, config.skip_cert_verification
    );
}

/// Log the three classification verdicts for one input
pub fn log_classification(url: &str, result: &ClassificationResult) {
    debug!(
        "{url} -> url={}, rfc3986_url={}, rfc3986_uri={}, components={}",
        result.is_url,
        result.is_rfc3986_url,
        result.is_rfc3986_uri,
        if result.components.is_some() {
            "present"
        } else {
            "absent"
        }
    );
}

/// Log a reachability probe outcome
pub fn log_reachability(url: &str, result: &ReachabilityResult) {
    if result.reachable {
        debug!("✓ {url} -> {}", result.status_code);
    } else {
        debug!("✗ {url} -> unreachable");
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::classify;
    use std::io;

    #[test]
    fn test_logger_initialization_verbose() {
        // Logger can only be initialized once per process, so use
        // panic::catch_unwind and only assert we get here.
        std::panic::catch_unwind(|| init_logger(true, false)).ok();
    }

    #[test]
    fn test_logger_initialization_quiet() {
        std::panic::catch_unwind(|| init_logger(false, true)).ok();
    }

    #[test]
    fn test_log_config_info() {
        log_config_info(&VerifierConfig::default());
        log_config_info(&VerifierConfig {
            http_check_enabled: true,
            skip_cert_verification: true,
        });
    }

    #[test]
    fn test_log_classification_variants() {
        log_classification("http://example.com", &classify("http://example.com"));
        log_classification("", &classify(""));
        log_classification("./rel", &classify("./rel"));
    }

    #[test]
    fn test_log_reachability_variants() {
        log_reachability("http://example.com", &ReachabilityResult::reachable(200));
        log_reachability("http://example.com", &ReachabilityResult::reachable(404));
        log_reachability("http://example.com", &ReachabilityResult::unreachable());
    }

    #[test]
    fn test_log_error_with_and_without_source() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "not found");
        log_error("failed to probe", Some(&io_error));
        log_error("something went wrong", None);
    }

    #[test]
    fn test_log_warning() {
        log_warning("certificate verification disabled");
    }
}
