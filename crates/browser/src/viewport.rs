use core_types::{ScrollBehavior, ScrollRequest};
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: f32,
    pub height: f32,
    /// Length of the host's own smooth-scroll animation.
    pub smooth_scroll_ms: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 768.0,
            smooth_scroll_ms: 300.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct ScrollAnimation {
    from: f64,
    to: f64,
    elapsed_ms: f64,
    duration_ms: f64,
}

/// Vertical scroll state of a page viewport.
#[derive(Clone, Debug)]
pub struct Viewport {
    config: ViewportConfig,
    scroll_y: f64,
    content_height: f64,
    animation: Option<ScrollAnimation>,
}

fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

impl Viewport {
    pub fn new(config: ViewportConfig) -> Self {
        Self {
            config,
            scroll_y: 0.0,
            content_height: 0.0,
            animation: None,
        }
    }

    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn max_scroll(&self) -> f64 {
        (self.content_height - self.config.height as f64).max(0.0)
    }

    /// Where the viewport will come to rest.
    pub fn scroll_target(&self) -> f64 {
        self.animation.map_or(self.scroll_y, |a| a.to)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn set_content_height(&mut self, height: f64) {
        self.content_height = height.max(0.0);
        self.scroll_y = self.clamp(self.scroll_y);
        let max = self.max_scroll();
        if let Some(anim) = self.animation.as_mut() {
            anim.to = anim.to.min(max);
        }
    }

    fn clamp(&self, y: f64) -> f64 {
        if y.is_nan() {
            return 0.0;
        }
        y.clamp(0.0, self.max_scroll())
    }

    /// Start moving towards `request.top`. A smooth request replaces any
    /// animation already in flight, starting from the current position.
    pub fn scroll_to(&mut self, request: ScrollRequest) {
        let to = self.clamp(request.top);
        let duration_ms = self.config.smooth_scroll_ms;

        match request.behavior {
            ScrollBehavior::Smooth if duration_ms > 0.0 && to != self.scroll_y => {
                self.animation = Some(ScrollAnimation {
                    from: self.scroll_y,
                    to,
                    elapsed_ms: 0.0,
                    duration_ms,
                });
            }
            _ => {
                self.animation = None;
                self.scroll_y = to;
            }
        }
    }

    /// User scrolling (wheel, keys): immediate, cancels any animation.
    pub fn scroll_by(&mut self, dy: f64) {
        self.scroll_to(ScrollRequest::instant(self.scroll_y + dy));
    }

    /// Advance the animation by `dt_ms`. Returns `true` while still moving.
    pub fn tick(&mut self, dt_ms: f64) -> bool {
        let Some(anim) = self.animation.as_mut() else {
            return false;
        };
        anim.elapsed_ms += dt_ms.max(0.0);
        let t = (anim.elapsed_ms / anim.duration_ms).min(1.0);
        if t >= 1.0 {
            self.scroll_y = anim.to;
            self.animation = None;
            return false;
        }
        self.scroll_y = anim.from + (anim.to - anim.from) * ease_in_out_cubic(t);
        true
    }

    /// Jump to the end of any running animation.
    pub fn settle(&mut self) {
        if let Some(anim) = self.animation.take() {
            self.scroll_y = anim.to;
        }
    }
}
