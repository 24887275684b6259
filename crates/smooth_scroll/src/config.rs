use core_types::HistoryMode;
use serde::Deserialize;

/// Interceptor options.
///
/// Values are taken as given: negative or non-finite numbers are not
/// rejected and flow straight into the scroll target computation.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Pixels subtracted from the element's absolute top so it lands this
    /// far below the viewport top.
    pub offset: f64,
    /// Requested animation length in ms. Not consumed: the host's own
    /// smooth-scroll timing is used.
    pub duration: f64,
    pub history: HistoryMode,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            offset: 80.0,
            duration: 800.0,
            history: HistoryMode::Replace,
        }
    }
}

impl ScrollConfig {
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_history(mut self, history: HistoryMode) -> Self {
        self.history = history;
        self
    }

    /// Bitwise comparison, so a `NaN` offset still compares equal to itself.
    pub fn same_as(&self, other: &ScrollConfig) -> bool {
        self.offset.to_bits() == other.offset.to_bits()
            && self.duration.to_bits() == other.duration.to_bits()
            && self.history == other.history
    }
}
