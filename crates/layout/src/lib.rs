use html::{Id, Node};

const DEFAULT_BLOCK_HEIGHT: f32 = 24.0; // temporary until we have text metrics

/// A rectangle in CSS px units, in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A node in the layout tree:
/// - points back to its DOM node by id
/// - has a geometry rect
/// - has child layout boxes
#[derive(Debug, Clone)]
pub struct LayoutBox {
    pub node_id: Id,
    pub rect: Rectangle,
    pub children: Vec<LayoutBox>,
}

impl LayoutBox {
    pub fn content_height(&self) -> f32 {
        self.rect.y + self.rect.height
    }
}

/// Compute block layout for a DOM tree.
/// - `root` is usually the document node
/// - `page_width` is the available content width in px
pub fn layout_block_tree(root: &Node, page_width: f32) -> LayoutBox {
    let (root_box, _next_y) = layout_block_subtree(root, 0.0, 0.0, page_width);
    root_box
}

pub fn find_layout_box_by_id(root: &LayoutBox, id: Id) -> Option<&LayoutBox> {
    if root.node_id == id {
        return Some(root);
    }
    root.children
        .iter()
        .find_map(|c| find_layout_box_by_id(c, id))
}

fn point_in_rect(p: (f32, f32), r: Rectangle) -> bool {
    let (x, y) = p;
    x >= r.x && x <= r.x + r.width && y >= r.y && y <= r.y + r.height
}

/// Ids of every box containing `point` (document coordinates), outermost
/// first. Later siblings win where boxes overlap.
pub fn hit_test_path(root: &LayoutBox, point: (f32, f32)) -> Vec<Id> {
    let mut path = Vec::new();
    let mut current = root;
    if !point_in_rect(point, current.rect) {
        return path;
    }
    loop {
        path.push(current.node_id);
        match current
            .children
            .iter()
            .rev()
            .find(|c| point_in_rect(point, c.rect))
        {
            Some(child) => current = child,
            None => return path,
        }
    }
}

/// `height: <n>px` from the inline style, if present and parseable.
fn declared_height(node: &Node) -> Option<f32> {
    let Node::Element { style, .. } = node else {
        return None;
    };
    let (_, value) = style
        .iter()
        .rev()
        .find(|(k, _)| k.eq_ignore_ascii_case("height"))?;
    let value = value.trim();
    let number = value.strip_suffix("px").unwrap_or(value).trim();
    number.parse::<f32>().ok().filter(|h| h.is_finite() && *h >= 0.0)
}

/// Internal recursive function:
/// - `x`, `y` = top-left of this box
/// - `width`  = available width
/// Returns: (this LayoutBox, next_y_cursor)
fn layout_block_subtree(node: &Node, x: f32, y: f32, width: f32) -> (LayoutBox, f32) {
    let mut children_boxes = Vec::new();

    // Where children start and how tall *we* are by default.
    let (content_start_y, base_height) = match node {
        // Document: no own row, just a container for children.
        Node::Document { .. } => (y, 0.0),

        // Structural containers: no base row either.
        Node::Element { name, .. }
            if name.eq_ignore_ascii_case("html")
                || name.eq_ignore_ascii_case("body")
                || name.eq_ignore_ascii_case("main") =>
        {
            (y, 0.0)
        }

        // Comments take no space.
        Node::Comment { .. } => (y, 0.0),

        // Everything else gets a base row of DEFAULT_BLOCK_HEIGHT.
        _ => (y + DEFAULT_BLOCK_HEIGHT, DEFAULT_BLOCK_HEIGHT),
    };
    let mut cursor_y = content_start_y;

    // Lay out children vertically inside our content area
    for child in node.children() {
        let (child_box, new_cursor) = layout_block_subtree(child, x, cursor_y, width);
        cursor_y = new_cursor;
        children_boxes.push(child_box);
    }

    // Our natural height = own row + children; an explicit height wins.
    let natural = base_height + (cursor_y - content_start_y);
    let height = declared_height(node).unwrap_or(natural);

    let layout_box = LayoutBox {
        node_id: node.id(),
        rect: Rectangle { x, y, width, height },
        children: children_boxes,
    };

    // Next sibling starts below us.
    (layout_box, y + height)
}
