use crate::{Id, Node};

pub fn assign_node_ids(root: &mut Node) {
    fn walk(node: &mut Node, next: &mut u32) {
        // only assign if currently unset
        let needs_id = node.id() == Id(0);

        if needs_id {
            let id = Id(*next);
            *next = next.wrapping_add(1);
            node.set_id(id);
        }

        if let Some(children) = node.children_mut() {
            for c in children {
                walk(c, next);
            }
        }
    }

    let mut next = max_node_id(root).wrapping_add(1).max(1);
    walk(root, &mut next);
}

fn max_node_id(node: &Node) -> u32 {
    node.children()
        .iter()
        .map(max_node_id)
        .fold(node.id().0, u32::max)
}

pub fn find_node_by_id(node: &Node, id: Id) -> Option<&Node> {
    if node.id() == id {
        return Some(node);
    }
    node.children()
        .iter()
        .find_map(|c| find_node_by_id(c, id))
}

/// Nodes from `root` down to the node with `id`, both included. Empty when
/// `id` is not in the tree.
pub fn node_path(root: &Node, id: Id) -> Vec<&Node> {
    fn walk<'a>(node: &'a Node, id: Id, path: &mut Vec<&'a Node>) -> bool {
        path.push(node);
        if node.id() == id || node.children().iter().any(|c| walk(c, id, path)) {
            return true;
        }
        path.pop();
        false
    }

    let mut path = Vec::new();
    walk(root, id, &mut path);
    path
}
