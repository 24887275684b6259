//! In-memory browser tab hosting the smooth-scroll interceptor: document,
//! block layout, viewport, session history and default link activation.

mod error;
mod history;
mod tab;
mod viewport;

pub mod pages;

pub use error::NavError;
pub use history::SessionHistory;
pub use tab::{PageAction, Tab};
pub use viewport::{Viewport, ViewportConfig};
