//! Frame-driven state for the two testimonial lanes.
//!
//! Each lane renders its items twice back to back; scrolling through exactly
//! one copy (half the strip width) and snapping back looks continuous. The
//! driver never measures anything itself: the view reports strip widths via
//! [`MarqueeDriver::set_width`] and calls [`MarqueeDriver::tick`] once per frame.

use crate::i18n::Direction;

use super::MarqueeConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackId {
    /// Upper lane; waits out its start delay before moving.
    Slow,
    /// Lower lane; moves from the first frame.
    Fast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarqueeState {
    /// Waiting for both strip widths.
    Idle,
    Running,
    Paused,
}

/// One lane: scroll offset, speed, start delay and measured strip width.
#[derive(Debug, Clone, PartialEq)]
pub struct MarqueeTrack {
    offset: f64,
    speed: f64,
    start_delay: u64,
    width: Option<f64>,
}

impl MarqueeTrack {
    pub fn new(speed: f64, start_delay: u64) -> Self {
        Self {
            offset: 0.0,
            speed,
            start_delay,
            width: None,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn start_delay(&self) -> u64 {
        self.start_delay
    }

    pub fn width(&self) -> Option<f64> {
        self.width
    }

    /// Half the strip width: the length of one copy of the items.
    pub fn midpoint(&self) -> Option<f64> {
        self.width
            .filter(|w| w.is_finite() && *w > 0.0)
            .map(|w| w / 2.0)
    }

    /// Offset at which a loop begins for `direction`.
    pub fn start_position(&self, direction: Direction) -> Option<f64> {
        self.midpoint().map(|mid| match direction {
            Direction::Ltr => 0.0,
            Direction::Rtl => mid,
        })
    }

    /// Horizontal shift to render the strip at. LTR strips sit at the lane's
    /// left edge and move left; RTL strips sit at the right edge, so counting
    /// down from the midpoint shows as a rightward shift from 0.
    pub fn translation(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Ltr => -self.offset,
            Direction::Rtl => self.midpoint().map_or(0.0, |mid| mid - self.offset),
        }
    }

    /// Moves one step and wraps. No-op while the width is unknown.
    fn advance(&mut self, direction: Direction) {
        let Some(mid) = self.midpoint() else {
            return;
        };
        match direction {
            Direction::Ltr => {
                self.offset += self.speed;
                if self.offset >= mid {
                    self.offset = 0.0;
                }
            }
            Direction::Rtl => {
                self.offset -= self.speed;
                if self.offset <= 0.0 {
                    self.offset = mid;
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarqueeDriver {
    slow: MarqueeTrack,
    fast: MarqueeTrack,
    hovering: bool,
    frame: u64,
    started: bool,
}

impl MarqueeDriver {
    pub fn new(config: &MarqueeConfig) -> Self {
        Self {
            slow: MarqueeTrack::new(config.slow_speed, config.slow_delay_frames),
            fast: MarqueeTrack::new(config.fast_speed, config.fast_delay_frames),
            hovering: false,
            frame: 0,
            started: false,
        }
    }

    pub fn state(&self) -> MarqueeState {
        match (self.started, self.hovering) {
            (false, _) => MarqueeState::Idle,
            (true, true) => MarqueeState::Paused,
            (true, false) => MarqueeState::Running,
        }
    }

    pub fn track(&self, id: TrackId) -> &MarqueeTrack {
        match id {
            TrackId::Slow => &self.slow,
            TrackId::Fast => &self.fast,
        }
    }

    fn track_mut(&mut self, id: TrackId) -> &mut MarqueeTrack {
        match id {
            TrackId::Slow => &mut self.slow,
            TrackId::Fast => &mut self.fast,
        }
    }

    pub fn offset(&self, id: TrackId) -> f64 {
        self.track(id).offset()
    }

    /// Frames advanced so far (paused frames are not counted).
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Records a strip measurement; `None` means layout is not ready. A
    /// narrower strip folds the offset back into one copy of the new width.
    pub fn set_width(&mut self, id: TrackId, width: Option<f64>) {
        let track = self.track_mut(id);
        track.width = width;
        if let Some(mid) = track.midpoint() {
            if track.offset > mid {
                track.offset = track.offset.rem_euclid(mid);
            }
        }
    }

    /// Shared by both lanes: hovering either one pauses both.
    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    /// One display frame. `direction` is read fresh every call, so a language
    /// switch flips motion on the next frame without touching the offsets.
    pub fn tick(&mut self, direction: Direction) {
        if !self.started && !self.try_start(direction) {
            return;
        }
        if self.hovering {
            return;
        }

        self.frame += 1;
        let frame = self.frame;
        for track in [&mut self.fast, &mut self.slow] {
            if frame > track.start_delay {
                track.advance(direction);
            }
        }
    }

    fn try_start(&mut self, direction: Direction) -> bool {
        let (Some(slow_start), Some(fast_start)) = (
            self.slow.start_position(direction),
            self.fast.start_position(direction),
        ) else {
            return false;
        };
        self.slow.offset = slow_start;
        self.fast.offset = fast_start;
        self.started = true;
        tracing::debug!(%direction, "[marquee] both lanes measured; starting");
        true
    }
}

/// Items of one lane followed by an exact copy, tagged with the copy index
/// (0 or 1) so rendered keys stay unique.
pub fn duplicated<T>(items: &[T]) -> impl Iterator<Item = (usize, &T)> {
    (0..2).flat_map(move |copy| items.iter().map(move |item| (copy, item)))
}
