use crate::config::ScrollConfig;
use crate::event::{ClickListeners, ListenerId};
use crate::handler::SmoothScrollHandler;

/// One view's interception session.
///
/// Owns at most one registration in a [`ClickListeners`] registry. The
/// registry is passed in explicitly at every mutation point, so the
/// session never touches listener state it does not own.
#[derive(Debug)]
pub struct SmoothScrollSession {
    config: ScrollConfig,
    registration: Option<ListenerId>,
}

impl SmoothScrollSession {
    pub fn attach(listeners: &mut ClickListeners, config: ScrollConfig) -> Self {
        let id = listeners.add(Box::new(SmoothScrollHandler::new(config)));
        log::debug!(
            target: "smooth_scroll",
            "session attached as listener {} (offset={}, duration={})",
            id.as_raw(),
            config.offset,
            config.duration
        );
        Self {
            config,
            registration: Some(id),
        }
    }

    /// Remove the listener. Safe to call any number of times; returns
    /// `true` only for the call that actually removed something.
    pub fn detach(&mut self, listeners: &mut ClickListeners) -> bool {
        let Some(id) = self.registration.take() else {
            return false;
        };
        let removed = listeners.remove(id);
        log::debug!(target: "smooth_scroll", "session listener {} detached", id.as_raw());
        removed
    }

    /// Swap the listener for one using `config`.
    ///
    /// The old registration is removed before the new one is added, within
    /// this call, so the registry never holds two listeners for this
    /// session. An unchanged config is a no-op. A detached session only
    /// records the new config. Returns `true` if a swap happened.
    pub fn reconfigure(&mut self, listeners: &mut ClickListeners, config: ScrollConfig) -> bool {
        if self.config.same_as(&config) {
            return false;
        }
        self.config = config;

        let Some(old) = self.registration.take() else {
            return false;
        };
        listeners.remove(old);
        let id = listeners.add(Box::new(SmoothScrollHandler::new(config)));
        self.registration = Some(id);
        log::debug!(
            target: "smooth_scroll",
            "session listener {} replaced by {}",
            old.as_raw(),
            id.as_raw()
        );
        true
    }

    pub fn is_attached(&self) -> bool {
        self.registration.is_some()
    }

    pub fn listener_id(&self) -> Option<ListenerId> {
        self.registration
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }
}
