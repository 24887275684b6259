#![allow(dead_code)]

use html::builder::{anchor, document, element, text};
use html::traverse::assign_node_ids;
use html::{Id, Node};
use smooth_scroll::{HistoryMode, ScrollHost, ScrollRequest};
use std::collections::HashMap;
use url::Url;

/// Records every call the interceptor makes into its host.
pub struct MockHost {
    pub document: Node,
    pub url: Url,
    pub tops: HashMap<Id, f64>,
    pub scroll_y: f64,
    pub scroll_requests: Vec<ScrollRequest>,
    pub fragment_updates: Vec<(String, HistoryMode)>,
}

impl MockHost {
    pub fn new(document: Node, url: &str) -> Self {
        Self {
            document,
            url: Url::parse(url).unwrap(),
            tops: HashMap::new(),
            scroll_y: 0.0,
            scroll_requests: Vec::new(),
            fragment_updates: Vec::new(),
        }
    }

    pub fn with_top(mut self, id: Id, top: f64) -> Self {
        self.tops.insert(id, top);
        self
    }

    pub fn with_scroll_y(mut self, y: f64) -> Self {
        self.scroll_y = y;
        self
    }

    pub fn untouched(&self) -> bool {
        self.scroll_requests.is_empty() && self.fragment_updates.is_empty()
    }
}

impl ScrollHost for MockHost {
    fn document(&self) -> &Node {
        &self.document
    }

    fn document_url(&self) -> &Url {
        &self.url
    }

    fn client_top(&self, node: Id) -> Option<f64> {
        self.tops.get(&node).copied()
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn scroll_to(&mut self, request: ScrollRequest) {
        self.scroll_requests.push(request);
    }

    fn update_fragment(&mut self, fragment: &str, mode: HistoryMode) {
        self.fragment_updates.push((fragment.to_string(), mode));
    }
}

/// Node ids after `assign_node_ids`.
pub mod ids {
    use html::Id;

    pub const SAME_PAGE_LINK: Id = Id(3);
    pub const OTHER_PAGE_LINK: Id = Id(5);
    pub const MISSING_TARGET_LINK: Id = Id(7);
    pub const PLAIN_LINK: Id = Id(9);
    pub const BUTTON: Id = Id(11);
    pub const LINK_LABEL: Id = Id(4);
    pub const SECTION_2: Id = Id(13);
}

/// A `/docs` page with one link of each interesting kind.
pub fn docs_page() -> Node {
    let mut dom = document(vec![
        element(
            "nav",
            Vec::new(),
            vec![
                anchor("/docs#section-2", vec![text("Section 2")]),
                anchor("/other-page#section-2", vec![text("Elsewhere")]),
                anchor("#missing", vec![text("Missing")]),
                anchor("/docs", vec![text("Top")]),
                element("button", Vec::new(), vec![text("Menu")]),
            ],
        ),
        element("section", vec![("id", "section-2")], vec![text("Body")]),
    ]);
    assign_node_ids(&mut dom);
    dom
}

pub fn docs_host() -> MockHost {
    MockHost::new(docs_page(), "https://example.com/docs")
        .with_top(ids::SECTION_2, 500.0)
        .with_scroll_y(100.0)
}
