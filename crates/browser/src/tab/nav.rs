use super::{PageAction, Tab};
use crate::NavError;
use core_types::ScrollRequest;
use html::dom_utils::{closest_anchor, find_element_by_dom_id, get_attr};
use html::{Id, Node};
use layout::find_layout_box_by_id;
use url::{Position, Url};

pub(super) fn parse_url(input: &str) -> Result<Url, NavError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(NavError::Empty);
    }
    Url::parse(trimmed).map_err(|source| NavError::InvalidUrl {
        input: trimmed.to_string(),
        source,
    })
}

/// Same document: everything up to and including the query matches.
fn same_document(a: &Url, b: &Url) -> bool {
    a[..Position::AfterQuery] == b[..Position::AfterQuery]
}

impl Tab {
    // -- Navigation Methods ---
    /// Replace the document. The current view goes away, so an attached
    /// smooth-scroll session is detached; mount it again for the new page.
    pub fn load(&mut self, url: &str, document: Node) -> Result<(), NavError> {
        let url = parse_url(url)?;
        self.unmount_smooth_scroll();
        log::debug!(target: "browser.nav", "tab {} loading {url}", self.tab_id);

        self.history.push(url.clone());
        self.url = url;
        self.install_document(document);
        Ok(())
    }

    /// Install `document` for the current history entry after a back or
    /// forward traversal left the document. Does NOT touch history.
    pub fn load_current(&mut self, document: Node) {
        self.unmount_smooth_scroll();
        self.url = self.history.current().clone();
        self.install_document(document);
    }

    pub fn go_back(&mut self) -> Option<PageAction> {
        let url = self.history.back()?.clone();
        self.traverse_to(url)
    }

    pub fn go_forward(&mut self) -> Option<PageAction> {
        let url = self.history.forward()?.clone();
        self.traverse_to(url)
    }

    // -- Internal Helpers ---
    fn traverse_to(&mut self, url: Url) -> Option<PageAction> {
        if !same_document(&self.url, &url) {
            return Some(PageAction::Navigate(url.to_string()));
        }
        self.url = url;
        match self.url.fragment().map(str::to_string) {
            Some(fragment) => self.jump_to_fragment(&fragment),
            None => self.viewport.scroll_to(ScrollRequest::instant(0.0)),
        }
        None
    }

    /// Default activation for an unprevented click: the clicked link, or
    /// the link enclosing the clicked node.
    pub(super) fn activate(&mut self, target: Id) -> Option<PageAction> {
        let node = closest_anchor(&self.document, target)?;
        let href = get_attr(node, "href")?;
        let resolved = match self.url.join(href.trim()) {
            Ok(url) => url,
            Err(err) => {
                log::debug!(target: "browser.nav", "ignoring link {href:?}: {err}");
                return None;
            }
        };

        if same_document(&self.url, &resolved)
            && let Some(fragment) = resolved.fragment().map(str::to_string)
        {
            self.history.push(resolved.clone());
            self.url = resolved;
            self.jump_to_fragment(&fragment);
            return None;
        }

        log::debug!(target: "browser.nav", "tab {} navigating to {resolved}", self.tab_id);
        Some(PageAction::Navigate(resolved.to_string()))
    }

    /// Instant scroll to the fragment's element; empty and `top` mean the
    /// top of the document, anything unknown leaves the position alone.
    pub(super) fn jump_to_fragment(&mut self, fragment: &str) {
        let element_top = find_element_by_dom_id(&self.document, fragment)
            .and_then(|el| find_layout_box_by_id(&self.layout, el.id()))
            .map(|lb| lb.rect.y as f64);

        let top = match element_top {
            Some(top) => top,
            None if fragment.is_empty() || fragment.eq_ignore_ascii_case("top") => 0.0,
            None => return,
        };
        self.viewport.scroll_to(ScrollRequest::instant(top));
    }
}
