use crate::traverse::node_path;
use crate::{Id, Node};

pub fn get_attr<'a>(node: &'a Node, name: &str) -> Option<&'a str> {
    match node {
        Node::Element { attributes, .. } => {
            for (k, v) in attributes {
                if k.eq_ignore_ascii_case(name) {
                    return v.as_deref();
                }
            }
            None
        }
        _ => None,
    }
}

pub fn is_anchor(node: &Node) -> bool {
    node.tag_name()
        .is_some_and(|name| name.eq_ignore_ascii_case("a"))
}

/// The node with `id` if it is an `<a>`, else its nearest `<a>` ancestor.
pub fn closest_anchor(root: &Node, id: Id) -> Option<&Node> {
    node_path(root, id).into_iter().rev().find(|n| is_anchor(n))
}

/// First element in document order whose `id` attribute equals `dom_id`.
///
/// The comparison is exact (case-sensitive), like `getElementById`.
pub fn find_element_by_dom_id<'a>(node: &'a Node, dom_id: &str) -> Option<&'a Node> {
    if matches!(node, Node::Element { .. }) && get_attr(node, "id") == Some(dom_id) {
        return Some(node);
    }
    node.children()
        .iter()
        .find_map(|c| find_element_by_dom_id(c, dom_id))
}

/// Collect `(node id, href)` for every `<a href>` in document order.
pub fn collect_anchor_hrefs(node: &Node, out: &mut Vec<(Id, String)>) {
    if is_anchor(node) {
        if let Some(href) = get_attr(node, "href") {
            out.push((node.id(), href.to_string()));
        }
    }
    for c in node.children() {
        collect_anchor_hrefs(c, out);
    }
}

/// Concatenated, whitespace-trimmed text content below `node`.
pub fn text_content(node: &Node) -> String {
    fn walk(node: &Node, out: &mut String) {
        match node {
            Node::Text { text, .. } => {
                let t = text.trim();
                if !t.is_empty() {
                    if !out.is_empty() {
                        out.push(' ');
                    }
                    out.push_str(t);
                }
            }
            Node::Comment { .. } => {}
            _ => {
                for c in node.children() {
                    walk(c, out);
                }
            }
        }
    }

    let mut out = String::new();
    walk(node, &mut out);
    out
}
