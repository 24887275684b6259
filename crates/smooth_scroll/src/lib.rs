//! # smooth_scroll
//!
//! Turns clicks on same-page fragment links into a smooth scroll plus a
//! history fragment update, instead of the host's default instant jump.
//!
//! - [`SmoothScrollSession`]: owns exactly one listener registration for the
//!   lifetime of a view; `attach` on mount, `detach` on unmount.
//! - [`ClickListeners`]: document-level click dispatch surface.
//! - [`ScrollHost`]: what the interceptor needs from its environment
//!   (document, location, geometry, scroll and history APIs).
//! - [`ScrollConfig`]: `offset`, `duration` and history mode.
//!
//! Nothing here reports errors. A click the interceptor does not understand
//! is left alone so the host's normal link behavior applies.

mod anchor;
mod config;
mod event;
mod handler;
mod host;
mod session;

pub use anchor::{AnchorTarget, IgnoreReason, resolve_anchor};
pub use config::ScrollConfig;
pub use event::{ClickEvent, ClickListener, ClickListeners, ListenerId};
pub use handler::{ClickOutcome, SmoothScrollHandler};
pub use host::ScrollHost;
pub use session::SmoothScrollSession;

pub use core_types::{HistoryMode, ScrollBehavior, ScrollRequest};
