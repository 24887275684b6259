//! Small constructors for building DOM trees by hand.
//!
//! Nodes are created with `Id(0)`; call
//! [`assign_node_ids`](crate::traverse::assign_node_ids) once the tree is
//! complete.

use crate::{Id, Node};

pub fn document(children: Vec<Node>) -> Node {
    Node::Document {
        id: Id(0),
        doctype: Some("html".to_string()),
        children,
    }
}

pub fn element(name: &str, attributes: Vec<(&str, &str)>, children: Vec<Node>) -> Node {
    styled(name, attributes, Vec::new(), children)
}

pub fn styled(
    name: &str,
    attributes: Vec<(&str, &str)>,
    style: Vec<(&str, &str)>,
    children: Vec<Node>,
) -> Node {
    Node::Element {
        id: Id(0),
        name: name.to_string(),
        attributes: attributes
            .into_iter()
            .map(|(k, v)| (k.to_string(), Some(v.to_string())))
            .collect(),
        style: style
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        children,
    }
}

pub fn anchor(href: &str, children: Vec<Node>) -> Node {
    element("a", vec![("href", href)], children)
}

pub fn text(value: &str) -> Node {
    Node::Text {
        id: Id(0),
        text: value.to_string(),
    }
}
