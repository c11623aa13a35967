//! Configuration constants and validation helpers for RSL documents.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// XML namespace of RSL documents.
pub const RSL_NAMESPACE: &str = "https://rslstandard.org/rsl";

/// Namespace prefix used when embedding RSL elements in foreign documents
/// such as RSS feeds.
pub const RSL_PREFIX: &str = "rsl:";

/// MIME type of a standalone RSL document.
pub const RSL_MIME_TYPE: &str = "application/rsl+xml";

/// Default currency for newly created payment terms.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Indentation unit for generated XML (two spaces per nesting level).
pub const XML_INDENT: &str = "  ";

/// Comment emitted inside the root element of a document without content
/// entries. Downstream tools diff generated documents, so this text must
/// stay stable.
pub const EMPTY_DOCUMENT_COMMENT: &str =
    "No content entries defined yet. Add content URLs and attach licenses to populate this document.";

/// Recognized rights-set keys on `<permits>`/`<prohibits>` elements.
/// Elements with any other `type` attribute are dropped during parsing.
pub const RIGHTS_KEYS: [&str; 3] = ["usage", "user", "geo"];

/// Email shape: a local part, `@`, and a domain with at least one dot.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// Check whether a string has the shape of an email address.
///
/// This is a plausibility check for authoring feedback, not RFC 5322
/// conformance.
///
/// # Examples
/// ```
/// use rslkit_engine::config::is_valid_email;
///
/// assert!(is_valid_email("legal@example.com"));
/// assert!(!is_valid_email("not-an-email"));
/// ```
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Check whether a string parses as an absolute URL.
///
/// # Examples
/// ```
/// use rslkit_engine::config::is_valid_url;
///
/// assert!(is_valid_url("https://example.com/page"));
/// assert!(!is_valid_url("example.com/page"));
/// ```
#[must_use]
pub fn is_valid_url(url: &str) -> bool {
    Url::parse(url).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("legal@example.com"));
        assert!(is_valid_email("a.b+c@sub.example.co.uk"));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("spaces in@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_is_valid_url() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("https://example.com/path?query=1"));
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url(""));
    }

    #[test]
    fn test_rights_keys_order() {
        // Builder emission order depends on this ordering.
        assert_eq!(RIGHTS_KEYS, ["usage", "user", "geo"]);
    }
}
