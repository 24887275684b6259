use crate::anchor::{IgnoreReason, resolve_anchor};
use crate::config::ScrollConfig;
use crate::event::{ClickEvent, ClickListener};
use crate::host::ScrollHost;
use core_types::ScrollRequest;

/// What the interceptor did with one click.
#[derive(Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    /// Default behavior untouched.
    Ignored(IgnoreReason),
    /// Default prevented, but the fragment names no element with a box.
    Suppressed { fragment: String },
    /// Default prevented, smooth scroll requested and history updated.
    Scrolled { fragment: String, target_y: f64 },
}

impl ClickOutcome {
    pub fn prevented_default(&self) -> bool {
        !matches!(self, ClickOutcome::Ignored(_))
    }
}

/// The listener a session registers.
#[derive(Clone, Copy, Debug, Default)]
pub struct SmoothScrollHandler {
    config: ScrollConfig,
}

impl SmoothScrollHandler {
    pub fn new(config: ScrollConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn handle(&self, event: &mut ClickEvent, host: &mut dyn ScrollHost) -> ClickOutcome {
        let target = match resolve_anchor(host.document(), host.document_url(), event.target()) {
            Ok(target) => target,
            Err(reason) => return ClickOutcome::Ignored(reason),
        };

        event.prevent_default();

        // Default stays prevented even when nothing matches.
        let Some(top) = target.element.and_then(|id| host.client_top(id)) else {
            return ClickOutcome::Suppressed {
                fragment: target.fragment,
            };
        };

        let target_y = top + host.scroll_y() - self.config.offset;
        host.scroll_to(ScrollRequest::smooth(target_y));
        host.update_fragment(&target.fragment, self.config.history);

        ClickOutcome::Scrolled {
            fragment: target.fragment,
            target_y,
        }
    }
}

impl ClickListener for SmoothScrollHandler {
    fn on_click(&mut self, event: &mut ClickEvent, host: &mut dyn ScrollHost) {
        let outcome = self.handle(event, host);
        match &outcome {
            ClickOutcome::Ignored(reason) => {
                log::trace!(target: "smooth_scroll", "click on {:?} ignored: {reason:?}", event.target());
            }
            ClickOutcome::Suppressed { fragment } => {
                log::debug!(target: "smooth_scroll", "no element for #{fragment}; default suppressed");
            }
            ClickOutcome::Scrolled { fragment, target_y } => {
                log::debug!(target: "smooth_scroll", "scrolling to #{fragment} at y={target_y}");
            }
        }
    }
}
