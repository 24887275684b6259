use core_types::{HistoryMode, ScrollRequest};
use html::{Id, Node};
use url::Url;

/// Everything the interceptor reads from or asks of its environment.
///
/// Hosts are free to clamp or animate scroll requests however they like;
/// the interceptor never observes the result.
pub trait ScrollHost {
    /// Root of the current document.
    fn document(&self) -> &Node;

    /// Location of the current document.
    fn document_url(&self) -> &Url;

    /// Top edge of the node's box relative to the viewport top, or `None`
    /// when the node has no box.
    fn client_top(&self, node: Id) -> Option<f64>;

    /// Current vertical scroll offset of the viewport.
    fn scroll_y(&self) -> f64;

    fn scroll_to(&mut self, request: ScrollRequest);

    /// Record `#fragment` in session history without loading anything.
    fn update_fragment(&mut self, fragment: &str, mode: HistoryMode);
}
