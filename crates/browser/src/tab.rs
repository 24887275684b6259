use crate::NavError;
use crate::history::SessionHistory;
use crate::viewport::{Viewport, ViewportConfig};
use core_types::TabId;
use html::dom_utils::{collect_anchor_hrefs, is_anchor, text_content};
use html::traverse::{assign_node_ids, find_node_by_id};
use html::{Id, Node};
use layout::{LayoutBox, hit_test_path, layout_block_tree};
use smooth_scroll::{ClickEvent, ClickListeners, ScrollConfig, SmoothScrollSession};
use url::Url;

mod host;
mod nav;

use host::TabHost;

#[derive(Clone, Debug, PartialEq)]
pub enum PageAction {
    /// The page asked to leave for another document.
    Navigate(String),
}

pub struct Tab {
    pub tab_id: TabId,

    url: Url,
    history: SessionHistory,

    document: Node,
    layout: LayoutBox,
    viewport: Viewport,

    listeners: ClickListeners,
    smooth_scroll: Option<SmoothScrollSession>,
}

impl Tab {
    pub fn new(
        tab_id: TabId,
        url: &str,
        document: Node,
        config: ViewportConfig,
    ) -> Result<Self, NavError> {
        let url = nav::parse_url(url)?;
        let placeholder = Node::Document {
            id: Id(0),
            doctype: None,
            children: Vec::new(),
        };
        let layout = layout_block_tree(&placeholder, config.width);
        let mut tab = Self {
            tab_id,
            history: SessionHistory::new(url.clone()),
            url,
            document: placeholder,
            layout,
            viewport: Viewport::new(config),
            listeners: ClickListeners::new(),
            smooth_scroll: None,
        };
        tab.install_document(document);
        Ok(tab)
    }

    // -- Accessors ---
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    pub fn document(&self) -> &Node {
        &self.document
    }

    pub fn layout(&self) -> &LayoutBox {
        &self.layout
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn scroll_y(&self) -> f64 {
        self.viewport.scroll_y()
    }

    /// `(node, href)` for every link in the document, in document order.
    pub fn links(&self) -> Vec<(Id, String)> {
        let mut out = Vec::new();
        collect_anchor_hrefs(&self.document, &mut out);
        out
    }

    /// First link whose raw `href` attribute equals `href`.
    pub fn link_by_href(&self, href: &str) -> Option<Id> {
        self.links()
            .into_iter()
            .find(|(_, h)| h == href)
            .map(|(id, _)| id)
    }

    /// Visible label of a link (or any node).
    pub fn link_text(&self, id: Id) -> Option<String> {
        find_node_by_id(&self.document, id).map(text_content)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn smooth_scroll(&self) -> Option<&SmoothScrollSession> {
        self.smooth_scroll.as_ref()
    }

    // -- Smooth scroll session ---
    /// Attach the interceptor, or swap its configuration if already attached.
    pub fn mount_smooth_scroll(&mut self, config: ScrollConfig) {
        if self.smooth_scroll.is_some() {
            self.reconfigure_smooth_scroll(config);
        } else {
            self.smooth_scroll = Some(SmoothScrollSession::attach(&mut self.listeners, config));
        }
    }

    /// Swap the mounted session's configuration. Returns `false` when no
    /// session is mounted or the configuration is unchanged.
    pub fn reconfigure_smooth_scroll(&mut self, config: ScrollConfig) -> bool {
        match self.smooth_scroll.as_mut() {
            Some(session) => session.reconfigure(&mut self.listeners, config),
            None => false,
        }
    }

    pub fn unmount_smooth_scroll(&mut self) {
        if let Some(mut session) = self.smooth_scroll.take() {
            session.detach(&mut self.listeners);
        }
    }

    // -- Input ---
    /// Dispatch a click on `target`, then run the default action unless a
    /// listener prevented it.
    pub fn click(&mut self, target: Id) -> Option<PageAction> {
        let mut event = ClickEvent::new(target);
        let mut host = TabHost {
            document: &self.document,
            layout: &self.layout,
            url: &mut self.url,
            viewport: &mut self.viewport,
            history: &mut self.history,
        };
        self.listeners.dispatch(&mut event, &mut host);

        if event.default_prevented() {
            return None;
        }
        self.activate(target)
    }

    /// Click at a point in viewport coordinates. Links are the action
    /// target when the point falls anywhere inside one.
    pub fn click_at(&mut self, x: f32, y: f32) -> Option<PageAction> {
        let doc_point = (x, y + self.viewport.scroll_y() as f32);
        let path = hit_test_path(&self.layout, doc_point);
        let target = path
            .iter()
            .rev()
            .copied()
            .find(|id| find_node_by_id(&self.document, *id).is_some_and(is_anchor))
            .or_else(|| path.last().copied())?;
        self.click(target)
    }

    pub fn scroll_by(&mut self, dy: f64) {
        self.viewport.scroll_by(dy);
    }

    /// Advance any running scroll animation. Returns `true` while moving.
    pub fn tick(&mut self, dt_ms: f64) -> bool {
        self.viewport.tick(dt_ms)
    }

    pub fn settle(&mut self) {
        self.viewport.settle();
    }

    // -- Internal Helpers ---
    fn install_document(&mut self, mut document: Node) {
        assign_node_ids(&mut document);
        self.layout = layout_block_tree(&document, self.viewport.config().width);
        self.document = document;
        self.viewport
            .set_content_height(self.layout.content_height() as f64);
        self.viewport
            .scroll_to(core_types::ScrollRequest::instant(0.0));

        if let Some(fragment) = self.url.fragment().map(str::to_string) {
            self.jump_to_fragment(&fragment);
        }
    }
}
