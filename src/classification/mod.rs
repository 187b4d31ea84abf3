//! URL classification
//!
//! Produces the three verdicts for a candidate string: the loose `is_url`
//! heuristic, and the strict `is_rfc3986_url` / `is_rfc3986_uri` grammar
//! checks, together with the generic component decomposition.

pub mod components;
mod strict;

use log::debug;
use serde::Serialize;
use std::borrow::Cow;

use crate::core::constants::limits;
use crate::patterns;
use components::{UrlComponents, decompose};
use strict::parse_request_target;

/// The three verdicts for one input, plus its decomposition.
///
/// The verdicts are independent and can legitimately disagree: a bare domain
/// is a URL but not a strict URI, a rooted path is a strict URI but not a
/// URL, and an authority with a malformed host label passes the strict
/// grammar while failing the heuristic. `components` is populated only when
/// the loose heuristic accepts the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    /// Loose heuristic: does this read as a URL
    pub is_url: bool,
    /// Strict grammar: absolute RFC 3986 URI (scheme present)
    pub is_rfc3986_url: bool,
    /// Strict grammar: RFC 3986 URI, absolute or rooted-relative
    pub is_rfc3986_uri: bool,
    /// Generic decomposition, absent when the heuristic rejects the input
    pub components: Option<UrlComponents>,
}

impl ClassificationResult {
    fn rejected() -> Self {
        Self {
            is_url: false,
            is_rfc3986_url: false,
            is_rfc3986_uri: false,
            components: None,
        }
    }
}

/// Loose whole-string heuristic backing the `is_url` verdict.
fn is_url_heuristic(raw: &str) -> bool {
    if raw.is_empty() || raw.len() <= limits::MIN_URL_BYTES || raw.starts_with('.') {
        return false;
    }
    if raw.chars().count() >= limits::MAX_URL_CHARS {
        return false;
    }

    // Decomposition probe. A scheme is prefixed when the input has a colon
    // but no scheme separator, so `host:port` shapes decompose as
    // authorities instead of degenerate scheme forms.
    let probe: Cow<'_, str> = if raw.contains(':') && !raw.contains("://") {
        Cow::Owned(format!("http://{raw}"))
    } else {
        Cow::Borrowed(raw)
    };
    let Ok(parsed) = decompose(&probe) else {
        return false;
    };
    if parsed.host.as_deref().is_some_and(|h| h.starts_with('.')) {
        return false;
    }
    // A host-less input must at least contain a dot to read as a domain;
    // this is what keeps bare words and relative paths out.
    if parsed.host.is_none() && !parsed.path.is_empty() && !parsed.path.contains('.') {
        return false;
    }

    patterns::matches_url_pattern(raw)
}

/// Classify `raw` under all three standards.
///
/// Never fails: malformed input yields false verdicts and absent components,
/// not an error.
pub fn classify(raw: &str) -> ClassificationResult {
    if raw.is_empty() {
        return ClassificationResult::rejected();
    }

    let is_url = is_url_heuristic(raw);
    let (is_rfc3986_uri, is_rfc3986_url) = match parse_request_target(raw) {
        Ok(target) => (true, target.has_scheme),
        Err(_) => (false, false),
    };
    let components = if is_url { decompose(raw).ok() } else { None };

    debug!(
        "classified {raw:?}: url={is_url} rfc3986_url={is_rfc3986_url} rfc3986_uri={is_rfc3986_uri}"
    );

    ClassificationResult {
        is_url,
        is_rfc3986_url,
        is_rfc3986_uri,
        components,
    }
}

/// Whether `raw` is an absolute URL under the strict RFC 3986 grammar.
pub fn is_rfc3986_url(raw: &str) -> bool {
    parse_request_target(raw).map(|t| t.has_scheme) == Ok(true)
}

/// Whether `raw` is a URI (absolute or rooted-relative) under the strict
/// RFC 3986 grammar.
pub fn is_rfc3986_uri(raw: &str) -> bool {
    parse_request_target(raw).is_ok()
}
