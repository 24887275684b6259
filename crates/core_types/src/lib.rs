use serde::Deserialize;

pub type TabId = u64;

/// How the host should move the viewport for a scroll request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump straight to the target position.
    #[default]
    Instant,
    /// Animate using the host's own smooth-scroll timing.
    Smooth,
}

/// Absolute vertical scroll target, in CSS px from the top of the document.
///
/// The value is passed through as-is; clamping to the scrollable range is
/// the host's job.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

impl ScrollRequest {
    pub fn smooth(top: f64) -> Self {
        Self {
            top,
            behavior: ScrollBehavior::Smooth,
        }
    }

    pub fn instant(top: f64) -> Self {
        Self {
            top,
            behavior: ScrollBehavior::Instant,
        }
    }
}

/// How a fragment change is recorded in session history.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// Rewrite the fragment of the current entry.
    #[default]
    Replace,
    /// Add a new entry that differs only by fragment.
    Push,
}
