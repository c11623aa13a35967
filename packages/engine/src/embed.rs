//! Embedding RSL licensing into secondary formats.
//!
//! A published RSL document is discoverable through several channels:
//! a `License` directive in robots.txt, a `<link>` tag in HTML heads, and
//! namespace-prefixed fragments inside RSS items. These generators are
//! thin wrappers over the same model and emission rules as the canonical
//! document builder.

use crate::builder::build_content_fragment;
use crate::config::RSL_MIME_TYPE;
use crate::types::Content;

/// The robots.txt directive pointing crawlers at a published RSL
/// document.
///
/// # Examples
/// ```
/// use rslkit_engine::embed::robots_directive;
///
/// assert_eq!(
///     robots_directive("https://ex.com/license.xml"),
///     "License: https://ex.com/license.xml\n"
/// );
/// ```
#[must_use]
pub fn robots_directive(license_url: &str) -> String {
    format!("License: {license_url}\n")
}

/// The HTML head tag linking a page to its RSL document.
#[must_use]
pub fn html_head_link(license_url: &str) -> String {
    format!(
        r#"<link rel="license" type="{RSL_MIME_TYPE}" href="{}">"#,
        escape_href(license_url)
    )
}

/// The `<rsl:content>` fragment for embedding inside an RSS `<item>`.
/// Element emission rules are identical to the canonical document; only
/// the namespace handling differs.
#[must_use]
pub fn rss_content_fragment(content: &Content) -> String {
    build_content_fragment(content)
}

/// Minimal attribute-value escaping for the href.
fn escape_href(url: &str) -> String {
    url.replace('&', "&amp;").replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::{build_license, LicenseArchetype, LicenseOptions};

    #[test]
    fn test_robots_directive() {
        let directive = robots_directive("https://ex.com/.well-known/rsl.xml");
        assert_eq!(directive, "License: https://ex.com/.well-known/rsl.xml\n");
    }

    #[test]
    fn test_html_head_link() {
        let tag = html_head_link("https://ex.com/license.xml?v=1&lang=en");
        assert_eq!(
            tag,
            "<link rel=\"license\" type=\"application/rsl+xml\" \
             href=\"https://ex.com/license.xml?v=1&amp;lang=en\">"
        );
    }

    #[test]
    fn test_rss_fragment_uses_prefixed_elements() {
        let mut license = build_license(LicenseArchetype::Free, &LicenseOptions::default());
        license.permits.usage.push("search".to_string());
        let content = Content::new("https://ex.com/feed-item").with_license(license);

        let fragment = rss_content_fragment(&content);
        assert!(fragment.starts_with(
            "<rsl:content xmlns:rsl=\"https://rslstandard.org/rsl\" url=\"https://ex.com/feed-item\">"
        ));
        assert!(fragment.contains("<rsl:permits type=\"usage\">search</rsl:permits>"));
        assert!(fragment.ends_with("</rsl:content>\n"));
    }
}
