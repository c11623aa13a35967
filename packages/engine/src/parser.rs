//! Best-effort parsing of RSL XML back into the editable model.
//!
//! The parser reconstructs a [`Content`] list from a stored document so
//! the dashboard can re-edit it. It is tolerant by design: malformed XML
//! or a document without `<content>` elements never surfaces an error —
//! the editor always gets something to show. The cost is silent loss of
//! severely malformed input, which is the accepted trade-off.
//!
//! Hand-authored documents that deviate from the canonical shape are
//! simplified on the way in: unrecognized `<permits>`/`<prohibits>` type
//! keys are dropped, and only the first `<custom>`, `<amount>`,
//! `<schema>`, `<copyright>` and `<terms>` elements are read. One
//! build/parse round-trip makes these simplifications a fixed point.

use roxmltree::{Document, Node};
use tracing::{debug, warn};

use crate::factory::{build_license, LicenseArchetype, LicenseOptions};
use crate::types::{
    Content, CopyrightType, LegalEntry, LegalType, License, Metadata, Payment, PaymentType,
    RightsSet, RslData,
};
use crate::xml::{find_child, find_children, non_empty_text, split_tokens, tag_name, text_of};

/// Parse RSL XML into an editable content list.
///
/// Never fails and never returns an empty list: if the XML is malformed
/// or contains no `<content>` elements, the result is a single synthetic
/// entry for `fallback_url` carrying one fresh free license.
///
/// # Examples
/// ```
/// use rslkit_engine::parser::parse_document;
///
/// let contents = parse_document("not xml at all", "https://ex.com/");
/// assert_eq!(contents.len(), 1);
/// assert_eq!(contents[0].url, "https://ex.com/");
/// assert_eq!(contents[0].data.licenses.len(), 1);
/// ```
#[must_use]
pub fn parse_document(xml: &str, fallback_url: &str) -> Vec<Content> {
    let doc = match Document::parse(xml) {
        Ok(doc) => doc,
        Err(e) => {
            warn!("RSL document is not well-formed XML, falling back: {e}");
            return vec![fallback_content(fallback_url)];
        }
    };

    let contents: Vec<Content> = doc
        .descendants()
        .filter(|n| n.is_element() && tag_name(*n) == "content")
        .map(|n| parse_content(n, fallback_url))
        .collect();

    if contents.is_empty() {
        debug!("RSL document contains no content elements, falling back");
        return vec![fallback_content(fallback_url)];
    }

    contents
}

/// Synthetic entry used when nothing can be recovered from the input.
fn fallback_content(fallback_url: &str) -> Content {
    let mut content = Content::new(fallback_url);
    content
        .data
        .licenses
        .push(build_license(LicenseArchetype::Free, &LicenseOptions::default()));
    content
}

/// Extract one `<content>` element.
fn parse_content(node: Node<'_, '_>, fallback_url: &str) -> Content {
    let url = node
        .attribute("url")
        .filter(|s| !s.is_empty())
        .unwrap_or(fallback_url)
        .to_string();

    let data = RslData {
        license_server: node
            .attribute("server")
            .filter(|s| !s.is_empty())
            .map(String::from),
        // Anything other than the exact string "true" means unencrypted.
        encrypted: node.attribute("encrypted") == Some("true"),
        last_modified: node
            .attribute("lastmod")
            .filter(|s| !s.is_empty())
            .map(String::from),
        licenses: find_children(node, "license").map(parse_license).collect(),
        metadata: parse_metadata(node),
    };

    Content { url, data }
}

/// Extract one `<license>` element. Starts from a fresh free license
/// (the wire format carries no ids or names) and overlays what the
/// element declares.
fn parse_license(node: Node<'_, '_>) -> License {
    let mut license = build_license(LicenseArchetype::Free, &LicenseOptions::default());

    for child in node.children().filter(|n| n.is_element()) {
        match tag_name(child) {
            "permits" => assign_rights(&mut license.permits, child),
            "prohibits" => assign_rights(&mut license.prohibits, child),
            "payment" => license.payment = Some(parse_payment(child)),
            "legal" => {
                if let Some(entry) = parse_legal(child) {
                    license.legal.push(entry);
                }
            }
            other => debug!("Ignoring unexpected element <{other}> in license"),
        }
    }

    license
}

/// Assign a `<permits>`/`<prohibits>` element into the matching sub-list.
/// Unrecognized type keys are dropped silently.
fn assign_rights(rights: &mut RightsSet, node: Node<'_, '_>) {
    let Some(key) = node.attribute("type") else {
        return;
    };
    let tokens = split_tokens(&text_of(node));
    if !rights.assign(key, tokens) {
        debug!("Dropping rights list with unrecognized type '{key}'");
    }
}

/// Extract a `<payment>` element. Missing or unknown type attributes
/// default to free; only the first `<custom>` and `<amount>` are read.
fn parse_payment(node: Node<'_, '_>) -> Payment {
    let mut payment = Payment::new(PaymentType::from_token(
        node.attribute("type").unwrap_or("free"),
    ));

    payment.standard_urls = find_children(node, "standard")
        .filter_map(non_empty_text)
        .collect();
    payment.custom_url = find_child(node, "custom").and_then(non_empty_text);

    if let Some(amount) = find_child(node, "amount") {
        payment.amount = non_empty_text(amount);
        payment.currency = amount
            .attribute("currency")
            .filter(|s| !s.is_empty())
            .map(String::from);
    }

    payment
}

/// Extract a `<legal>` element. Entries with an unrecognized type or no
/// terms are skipped.
fn parse_legal(node: Node<'_, '_>) -> Option<LegalEntry> {
    let legal_type = LegalType::from_token(node.attribute("type")?)?;
    let terms = split_tokens(&text_of(node));
    if terms.is_empty() {
        return None;
    }
    Some(LegalEntry::new(legal_type, terms))
}

/// Extract metadata children of a `<content>` element. Returns `None`
/// when no metadata is present so rebuilding emits nothing.
fn parse_metadata(content: Node<'_, '_>) -> Option<Metadata> {
    let mut metadata = Metadata {
        schema_url: find_child(content, "schema").and_then(non_empty_text),
        terms_url: find_child(content, "terms").and_then(non_empty_text),
        ..Metadata::default()
    };

    if let Some(copyright) = find_child(content, "copyright") {
        // Only the exact value "organization" selects Organization; an
        // absent or different attribute means Person.
        metadata.copyright_type = Some(if copyright.attribute("type") == Some("organization") {
            CopyrightType::Organization
        } else {
            CopyrightType::Person
        });
        metadata.contact_email = copyright
            .attribute("contactEmail")
            .filter(|s| !s.is_empty())
            .map(String::from);
        metadata.contact_url = copyright
            .attribute("contactUrl")
            .filter(|s| !s.is_empty())
            .map(String::from);
        metadata.copyright_holder = non_empty_text(copyright);
    }

    Some(metadata).filter(|m| !m.is_empty())
}
