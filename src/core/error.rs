use std::fmt;

use crate::classification::components::UriSyntaxError;

/// Error types for urlverifier operations
#[derive(Debug)]
pub enum UrlVerifierError {
    /// Network failure while probing a URL (DNS, connect, TLS)
    Network(reqwest::Error),

    /// Reachability check requested for a URL without an HTTP or HTTPS scheme
    SchemeNotSupported(String),

    /// URI syntax violation surfaced by the decomposition layer
    Syntax(UriSyntaxError),

    /// Configuration error
    Config(String),
}

/// Render an error with its full cause chain, outermost first.
///
/// reqwest nests the interesting part (DNS lookup, TLS handshake) several
/// sources deep, so the chain is flattened into the message.
fn describe_chain(err: &dyn std::error::Error) -> String {
    let mut description = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        description.push_str(": ");
        description.push_str(&cause.to_string());
        source = cause.source();
    }
    description
}

impl fmt::Display for UrlVerifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlVerifierError::Network(err) => {
                write!(f, "network error: {}", describe_chain(err))
            }
            UrlVerifierError::SchemeNotSupported(_) => {
                write!(
                    f,
                    "unable to check reachability: URL does not have an HTTP or HTTPS scheme"
                )
            }
            UrlVerifierError::Syntax(err) => write!(f, "URI syntax error: {err}"),
            UrlVerifierError::Config(msg) => write!(f, "configuration error: {msg}"),
        }
    }
}

impl std::error::Error for UrlVerifierError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UrlVerifierError::Network(err) => Some(err),
            UrlVerifierError::Syntax(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for UrlVerifierError {
    fn from(err: reqwest::Error) -> Self {
        UrlVerifierError::Network(err)
    }
}

impl From<UriSyntaxError> for UrlVerifierError {
    fn from(err: UriSyntaxError) -> Self {
        UrlVerifierError::Syntax(err)
    }
}

/// Type alias for Results using UrlVerifierError
pub type Result<T> = std::result::Result<T, UrlVerifierError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let scheme_error = UrlVerifierError::SchemeNotSupported("ftp://example.com".to_string());
        assert_eq!(
            format!("{scheme_error}"),
            "unable to check reachability: URL does not have an HTTP or HTTPS scheme"
        );

        let config_error = UrlVerifierError::Config("bad value".to_string());
        assert_eq!(format!("{config_error}"), "configuration error: bad value");
    }

    #[test]
    fn test_error_from_syntax() {
        let syntax_error = UriSyntaxError::ControlCharacter;
        let err = UrlVerifierError::from(syntax_error);

        match err {
            UrlVerifierError::Syntax(_) => {} // Expected
            _ => panic!("Expected Syntax variant"),
        }
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_from_reqwest() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let reqwest_error = rt.block_on(async {
            reqwest::get("http://invalid-domain-that-does-not-exist.com")
                .await
                .unwrap_err()
        });
        let err = UrlVerifierError::from(reqwest_error);

        match &err {
            UrlVerifierError::Network(_) => {} // Expected
            _ => panic!("Expected Network variant"),
        }
        assert!(err.source().is_some());
        assert!(format!("{err}").starts_with("network error:"));
    }

    #[test]
    fn test_network_error_display_includes_cause_chain() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let reqwest_error = rt.block_on(async {
            reqwest::get("http://definitely-not-resolvable.invalid")
                .await
                .unwrap_err()
        });
        let err = UrlVerifierError::Network(reqwest_error);

        // The DNS detail lives deep in the source chain and must survive
        // into the rendered message.
        let message = format!("{err}");
        assert!(message.contains("dns error") || message.contains("lookup"));
    }

    #[test]
    fn test_error_no_source_variants() {
        let errors_without_source = vec![
            UrlVerifierError::SchemeNotSupported("mailto:x@y".to_string()),
            UrlVerifierError::Config("test".to_string()),
        ];

        for error in errors_without_source {
            assert!(error.source().is_none());
        }
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<UrlVerifierError>();
    }

    #[test]
    fn test_result_type_alias() {
        let success: Result<i32> = Ok(42);
        let error: Result<i32> = Err(UrlVerifierError::Config("test".to_string()));

        assert!(success.is_ok());
        assert!(error.is_err());
    }
}
