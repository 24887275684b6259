use html::dom_utils::{find_element_by_dom_id, get_attr, is_anchor};
use html::traverse::find_node_by_id;
use html::{Id, Node};
use url::Url;

/// Why a click was left to the host's default behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Target id is not in the current document.
    UnknownTarget,
    NotAnAnchor,
    MissingHref,
    /// `href` could not be resolved against the document URL.
    UnresolvableHref,
    NoFragment,
    /// Resolved path differs from the document path.
    OtherPage,
}

/// A same-page fragment link, resolved at click time.
#[derive(Clone, Debug, PartialEq)]
pub struct AnchorTarget {
    pub url: Url,
    /// Non-empty fragment, without the leading `#`.
    pub fragment: String,
    /// First element whose `id` attribute equals `fragment`.
    pub element: Option<Id>,
}

/// Decide whether a click on `target` is a same-page fragment link.
///
/// Only the clicked node itself is considered, not its ancestors.
pub fn resolve_anchor(
    document: &Node,
    document_url: &Url,
    target: Id,
) -> Result<AnchorTarget, IgnoreReason> {
    let node = find_node_by_id(document, target).ok_or(IgnoreReason::UnknownTarget)?;
    if !is_anchor(node) {
        return Err(IgnoreReason::NotAnAnchor);
    }

    let href = get_attr(node, "href").ok_or(IgnoreReason::MissingHref)?;
    let url = document_url
        .join(href.trim())
        .map_err(|_| IgnoreReason::UnresolvableHref)?;

    let fragment = match url.fragment() {
        Some(f) if !f.is_empty() => f.to_string(),
        _ => return Err(IgnoreReason::NoFragment),
    };

    if url.path() != document_url.path() {
        return Err(IgnoreReason::OtherPage);
    }

    let element = find_element_by_dom_id(document, &fragment).map(Node::id);

    Ok(AnchorTarget {
        url,
        fragment,
        element,
    })
}
