//! Auto-scrolling testimonial marquee: a pure two-lane driver plus the
//! frame loop that ticks it.

mod driver;
mod frame_loop;

pub use driver::{duplicated, MarqueeDriver, MarqueeState, MarqueeTrack, TrackId};
pub use frame_loop::{use_frame_loop, FrameLoop};

use serde::Deserialize;

/// Lane speeds are in pixels per frame; delays are in frames.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarqueeConfig {
    pub slow_speed: f64,
    pub fast_speed: f64,
    pub slow_delay_frames: u64,
    pub fast_delay_frames: u64,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            slow_speed: 1.2,
            fast_speed: 1.8,
            // ~1 s at 60 fps
            slow_delay_frames: 60,
            fast_delay_frames: 0,
        }
    }
}
