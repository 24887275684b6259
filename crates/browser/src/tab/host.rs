use crate::history::SessionHistory;
use crate::viewport::Viewport;
use core_types::{HistoryMode, ScrollRequest};
use html::{Id, Node};
use layout::{LayoutBox, find_layout_box_by_id};
use smooth_scroll::ScrollHost;
use url::Url;

/// The parts of a [`Tab`](super::Tab) a click listener may see or touch,
/// borrowed separately from its listener registry.
pub(super) struct TabHost<'a> {
    pub document: &'a Node,
    pub layout: &'a LayoutBox,
    pub url: &'a mut Url,
    pub viewport: &'a mut Viewport,
    pub history: &'a mut SessionHistory,
}

impl ScrollHost for TabHost<'_> {
    fn document(&self) -> &Node {
        self.document
    }

    fn document_url(&self) -> &Url {
        self.url
    }

    fn client_top(&self, node: Id) -> Option<f64> {
        let lb = find_layout_box_by_id(self.layout, node)?;
        Some(lb.rect.y as f64 - self.viewport.scroll_y())
    }

    fn scroll_y(&self) -> f64 {
        self.viewport.scroll_y()
    }

    fn scroll_to(&mut self, request: ScrollRequest) {
        self.viewport.scroll_to(request);
    }

    fn update_fragment(&mut self, fragment: &str, mode: HistoryMode) {
        self.url.set_fragment(Some(fragment));
        self.history.record(self.url.clone(), mode);
        log::debug!(target: "browser.history", "{mode:?} -> {}", self.url);
    }
}
