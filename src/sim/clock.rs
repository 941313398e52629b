//! Frame timing normalization
//!
//! Speeds are expressed per target frame. Each real frame is scaled by how
//! many target frames actually elapsed, so motion ignores the refresh rate.
//! A gap longer than the stall threshold (a backgrounded tab, a debugger
//! pause) counts as exactly one target frame.

/// Timing of a single frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Milliseconds since the previous frame
    pub delta_ms: f64,
    /// `delta_ms / target interval`, 1.0 at exactly the target rate
    pub scale: f32,
}

/// Converts monotonic millisecond timestamps into frame scale factors
#[derive(Debug, Clone)]
pub struct FrameClock {
    interval_ms: f64,
    stall_ms: f64,
    previous_ms: Option<f64>,
}

impl FrameClock {
    pub fn new(interval_ms: f64, stall_ms: f64) -> Self {
        Self {
            interval_ms,
            stall_ms,
            previous_ms: None,
        }
    }

    /// Seed the previous timestamp with the loop start time
    pub fn start(&mut self, now_ms: f64) {
        self.previous_ms = Some(now_ms);
    }

    pub fn is_started(&self) -> bool {
        self.previous_ms.is_some()
    }

    /// Advance to `now_ms`. An unstarted clock treats this as the start time.
    pub fn advance(&mut self, now_ms: f64) -> FrameTime {
        const IDLE: FrameTime = FrameTime {
            delta_ms: 0.0,
            scale: 0.0,
        };

        if !now_ms.is_finite() {
            return IDLE;
        }
        let previous = self.previous_ms.unwrap_or(now_ms);
        self.previous_ms = Some(now_ms);

        if self.interval_ms.is_nan() || self.interval_ms <= 0.0 {
            return IDLE;
        }
        // Non-monotonic host clocks clamp to zero
        let mut delta_ms = (now_ms - previous).max(0.0);
        if delta_ms > self.stall_ms {
            log::debug!("Frame gap of {:.0}ms treated as a stall", delta_ms);
            delta_ms = self.interval_ms;
        }

        FrameTime {
            delta_ms,
            scale: (delta_ms / self.interval_ms) as f32,
        }
    }
}
