//! Helpers for navigating parsed XML trees.
//!
//! All lookups match on the local tag name, ignoring namespaces, so that
//! both plain RSL documents and namespace-prefixed embeddings resolve the
//! same way.

use roxmltree::Node;

/// Get the tag name without namespace prefix.
#[must_use]
pub fn tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Find the first child element with the given local tag name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use rslkit_engine::xml::find_child;
///
/// let doc = Document::parse("<root><a/><b/></root>").unwrap();
/// assert!(find_child(doc.root_element(), "b").is_some());
/// assert!(find_child(doc.root_element(), "c").is_none());
/// ```
#[must_use]
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && tag_name(*child) == tag)
}

/// Find all child elements with the given local tag name.
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| child.is_element() && tag_name(*child) == tag)
}

/// Get the trimmed text content of a node, or an empty string.
#[must_use]
pub fn text_of(node: Node<'_, '_>) -> String {
    node.text().map(|s| s.trim().to_string()).unwrap_or_default()
}

/// Get the trimmed, non-empty text content of a node.
#[must_use]
pub fn non_empty_text(node: Node<'_, '_>) -> Option<String> {
    Some(text_of(node)).filter(|s| !s.is_empty())
}

/// Split element text on commas, trimming entries and dropping empties.
///
/// # Examples
/// ```
/// use rslkit_engine::xml::split_tokens;
///
/// assert_eq!(split_tokens("a, b ,,c"), vec!["a", "b", "c"]);
/// assert!(split_tokens("  ").is_empty());
/// ```
#[must_use]
pub fn split_tokens(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
