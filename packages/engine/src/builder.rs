//! Canonical XML emission for RSL documents.
//!
//! The builder renders an ordered list of [`Content`] entries into the
//! canonical RSL document shape: fixed element order (permits, prohibits,
//! payment, legal, then metadata), fixed attribute order, attributes only
//! when present and non-empty, two-space indentation. The output is a
//! published wire format — consumers diff and re-parse it, so every rule
//! here is a compatibility contract, covered by exact-string tests.
//!
//! The builder never validates. A structurally incomplete document (say, a
//! content entry without licenses) renders as-is; running the validator
//! first is the caller's responsibility.

use crate::config::{EMPTY_DOCUMENT_COMMENT, RSL_NAMESPACE, RSL_PREFIX, XML_INDENT};
use crate::types::{Content, LegalEntry, License, Metadata, Payment, RightsSet};

/// Line accumulator with an explicit indentation depth.
struct XmlWriter {
    lines: Vec<String>,
    depth: usize,
}

impl XmlWriter {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            depth: 0,
        }
    }

    /// Append one line at the current depth.
    fn line(&mut self, text: &str) {
        self.lines.push(format!("{}{}", XML_INDENT.repeat(self.depth), text));
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn finish(self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

/// Build the canonical RSL XML document for an ordered list of content
/// entries.
///
/// A document without content entries renders as the fixed
/// placeholder-commented shell.
///
/// # Examples
/// ```
/// use rslkit_engine::builder::build_document;
///
/// let xml = build_document(&[]);
/// assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
/// assert!(xml.contains("<rsl xmlns=\"https://rslstandard.org/rsl\">"));
/// ```
#[must_use]
pub fn build_document(contents: &[Content]) -> String {
    let mut w = XmlWriter::new();
    w.line(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    w.line(&format!(r#"<rsl xmlns="{RSL_NAMESPACE}">"#));
    w.indent();

    if contents.is_empty() {
        w.line(&format!("<!-- {EMPTY_DOCUMENT_COMMENT} -->"));
    } else {
        for content in contents {
            write_content(&mut w, content, "", &[]);
        }
    }

    w.dedent();
    w.line("</rsl>");
    w.finish()
}

/// Build a namespace-prefixed `<rsl:content>` fragment for embedding in a
/// foreign document such as an RSS item. Same emission rules as the
/// canonical document, with the namespace declared on the fragment root.
#[must_use]
pub fn build_content_fragment(content: &Content) -> String {
    let mut w = XmlWriter::new();
    write_content(&mut w, content, RSL_PREFIX, &[("xmlns:rsl", RSL_NAMESPACE)]);
    w.finish()
}

/// Emit one `<content>` element with its licenses and metadata.
fn write_content(w: &mut XmlWriter, content: &Content, prefix: &str, extra_attrs: &[(&str, &str)]) {
    let data = &content.data;

    let mut attrs = String::new();
    for (name, value) in extra_attrs {
        push_attr(&mut attrs, name, value);
    }
    // Attribute order is fixed: url, server, encrypted, lastmod.
    push_attr(&mut attrs, "url", &content.url);
    if let Some(server) = data.license_server.as_deref().filter(|s| !s.is_empty()) {
        push_attr(&mut attrs, "server", server);
    }
    if data.encrypted {
        // false is never written; absence means unencrypted.
        push_attr(&mut attrs, "encrypted", "true");
    }
    if let Some(lastmod) = data.last_modified.as_deref().filter(|s| !s.is_empty()) {
        push_attr(&mut attrs, "lastmod", lastmod);
    }

    let metadata = data.metadata.as_ref().filter(|m| !m.is_empty());
    if data.licenses.is_empty() && metadata.is_none() {
        w.line(&format!("<{prefix}content{attrs}></{prefix}content>"));
        return;
    }

    w.line(&format!("<{prefix}content{attrs}>"));
    w.indent();
    for license in &data.licenses {
        write_license(w, license, prefix);
    }
    if let Some(metadata) = metadata {
        write_metadata(w, metadata, prefix);
    }
    w.dedent();
    w.line(&format!("</{prefix}content>"));
}

/// Emit one `<license>` element: permits, prohibits, payment, legal.
fn write_license(w: &mut XmlWriter, license: &License, prefix: &str) {
    let has_children = !license.permits.is_empty()
        || !license.prohibits.is_empty()
        || license.payment.is_some()
        || !license.legal.is_empty();

    if !has_children {
        w.line(&format!("<{prefix}license></{prefix}license>"));
        return;
    }

    w.line(&format!("<{prefix}license>"));
    w.indent();
    write_rights(w, "permits", &license.permits, prefix);
    write_rights(w, "prohibits", &license.prohibits, prefix);
    if let Some(payment) = &license.payment {
        write_payment(w, payment, prefix);
    }
    for entry in &license.legal {
        write_legal(w, entry, prefix);
    }
    w.dedent();
    w.line(&format!("</{prefix}license>"));
}

/// Emit one `<permits>`/`<prohibits>` element per non-empty sub-list,
/// value comma-joined. Empty sub-lists emit nothing.
fn write_rights(w: &mut XmlWriter, element: &str, rights: &RightsSet, prefix: &str) {
    for (key, tokens) in rights.entries() {
        if tokens.is_empty() {
            continue;
        }
        w.line(&format!(
            r#"<{prefix}{element} type="{key}">{}</{prefix}{element}>"#,
            escape_text(&tokens.join(","))
        ));
    }
}

/// Emit the `<payment>` element: self-closing when only the type is known,
/// otherwise with ordered `<standard>`, `<custom>` and `<amount>` children.
/// An amount without a currency (or vice versa) emits neither.
fn write_payment(w: &mut XmlWriter, payment: &Payment, prefix: &str) {
    let type_attr = format!(r#" type="{}""#, payment.payment_type.as_str());

    if !payment.has_details() {
        w.line(&format!("<{prefix}payment{type_attr}/>"));
        return;
    }

    w.line(&format!("<{prefix}payment{type_attr}>"));
    w.indent();
    for url in &payment.standard_urls {
        w.line(&format!(
            "<{prefix}standard>{}</{prefix}standard>",
            escape_text(url)
        ));
    }
    if let Some(custom) = &payment.custom_url {
        w.line(&format!(
            "<{prefix}custom>{}</{prefix}custom>",
            escape_text(custom)
        ));
    }
    if let (Some(amount), Some(currency)) = (&payment.amount, &payment.currency) {
        w.line(&format!(
            r#"<{prefix}amount currency="{}">{}</{prefix}amount>"#,
            escape_attr(currency),
            escape_text(amount)
        ));
    }
    w.dedent();
    w.line(&format!("</{prefix}payment>"));
}

/// Emit one `<legal>` element; entries without terms are self-closing.
fn write_legal(w: &mut XmlWriter, entry: &LegalEntry, prefix: &str) {
    let type_attr = format!(r#" type="{}""#, entry.legal_type.as_str());
    if entry.terms.is_empty() {
        w.line(&format!("<{prefix}legal{type_attr}/>"));
    } else {
        w.line(&format!(
            "<{prefix}legal{type_attr}>{}</{prefix}legal>",
            escape_text(&entry.terms.join(","))
        ));
    }
}

/// Emit metadata elements after all licenses: `<schema>`, `<copyright>`,
/// `<terms>`.
fn write_metadata(w: &mut XmlWriter, metadata: &Metadata, prefix: &str) {
    if let Some(schema) = &metadata.schema_url {
        w.line(&format!(
            "<{prefix}schema>{}</{prefix}schema>",
            escape_text(schema)
        ));
    }

    if metadata.has_copyright_info() {
        let mut attrs = String::new();
        if let Some(copyright_type) = metadata.copyright_type {
            push_attr(&mut attrs, "type", copyright_type.as_str());
        }
        if let Some(email) = &metadata.contact_email {
            push_attr(&mut attrs, "contactEmail", email);
        }
        if let Some(url) = &metadata.contact_url {
            push_attr(&mut attrs, "contactUrl", url);
        }
        match &metadata.copyright_holder {
            Some(holder) => w.line(&format!(
                "<{prefix}copyright{attrs}>{}</{prefix}copyright>",
                escape_text(holder)
            )),
            None => w.line(&format!("<{prefix}copyright{attrs}/>")),
        }
    }

    if let Some(terms) = &metadata.terms_url {
        w.line(&format!(
            "<{prefix}terms>{}</{prefix}terms>",
            escape_text(terms)
        ));
    }
}

/// Append ` name="value"` with attribute escaping.
fn push_attr(attrs: &mut String, name: &str, value: &str) {
    attrs.push(' ');
    attrs.push_str(name);
    attrs.push_str("=\"");
    attrs.push_str(&escape_attr(value));
    attrs.push('"');
}

/// Escape text content: `&`, `<`, `>`.
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape an attribute value: text escapes plus `"`.
fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
