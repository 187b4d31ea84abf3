use async_trait::async_trait;
use log::debug;
use reqwest::redirect::Policy;
use serde::Serialize;

use crate::classification::components::split_scheme;
use crate::core::constants::{http_status, limits, schemes};
use crate::core::error::{Result, UrlVerifierError};

/// Outcome of probing a URL over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReachabilityResult {
    /// Whether an HTTP response was obtained at all. True even for error
    /// statuses like 500.
    pub reachable: bool,
    /// The HTTP status code, zero when unreachable
    pub status_code: u16,
    /// Whether the status code is success-like (2xx or 3xx)
    pub is_success: bool,
}

impl ReachabilityResult {
    /// Result for a URL that answered with `status_code`.
    pub fn reachable(status_code: u16) -> Self {
        Self {
            reachable: true,
            status_code,
            is_success: (http_status::SUCCESS_LOWER..http_status::SUCCESS_UPPER)
                .contains(&status_code),
        }
    }

    /// Result for a URL that produced no HTTP response.
    pub fn unreachable() -> Self {
        Self {
            reachable: false,
            status_code: http_status::UNREACHABLE,
            is_success: false,
        }
    }
}

#[async_trait]
pub trait CheckReachability {
    /// Probe `url` with an HTTP GET and report the outcome.
    async fn check_reachability(
        &self,
        url: &str,
        skip_cert_verification: bool,
    ) -> Result<ReachabilityResult>;
}

#[derive(Default, Debug)]
pub struct Checker {}

fn has_http_scheme(url: &str) -> bool {
    matches!(
        split_scheme(url),
        Ok((Some(scheme), _))
            if scheme.eq_ignore_ascii_case(schemes::HTTP)
                || scheme.eq_ignore_ascii_case(schemes::HTTPS)
    )
}

#[async_trait]
impl CheckReachability for Checker {
    /// Probe `url` with an HTTP GET.
    ///
    /// Only HTTP and HTTPS URLs are probed; anything else fails with
    /// `SchemeNotSupported`. No explicit timeout is set, so the transport
    /// default applies; callers needing bounded latency impose their own
    /// deadline. Certificate verification is skipped only when
    /// `skip_cert_verification` is set, and only for this request's client.
    async fn check_reachability(
        &self,
        url: &str,
        skip_cert_verification: bool,
    ) -> Result<ReachabilityResult> {
        if !has_http_scheme(url) {
            return Err(UrlVerifierError::SchemeNotSupported(url.to_string()));
        }

        let user_agent = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
        let mut client_builder = reqwest::Client::builder()
            .redirect(Policy::limited(limits::MAX_REDIRECTS))
            .user_agent(user_agent);

        if skip_cert_verification {
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        let client = client_builder.build()?;
        let response = client.get(url).send().await?;
        let status_code = response.status().as_u16();

        // Drain the body so the connection is released back to the pool
        // before the result is reported.
        let _ = response.bytes().await;

        debug!("probed {url}: status {status_code}");
        Ok(ReachabilityResult::reachable(status_code))
    }
}
