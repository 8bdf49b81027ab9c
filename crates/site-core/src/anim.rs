//! Time-based animation helpers: easing curves, number counters and the
//! drifting hero orbs. Everything here is driven by elapsed seconds supplied
//! by the frame loop, so it runs the same on host and in the browser.

use crate::constants::{COUNTER_DURATION_SEC, ORB_DRIFT_X_PX, ORB_DRIFT_Y_PX, ORB_LEG_SEC};
use glam::DVec2;
use std::f64::consts::PI;

#[inline]
pub fn power3_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[inline]
pub fn sine_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    -((PI * t).cos() - 1.0) / 2.0
}

/// Counts from zero up to `target` once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    pub target: f64,
    pub duration_sec: f64,
}

impl CounterAnimation {
    pub fn new(target: f64) -> Self {
        Self {
            target,
            duration_sec: COUNTER_DURATION_SEC,
        }
    }

    /// Parse `data-counter-target`; anything missing or non-numeric counts to 0.
    pub fn from_attr(raw: Option<&str>) -> Self {
        let target = raw
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or(0.0);
        Self::new(target)
    }

    pub fn is_finished(&self, elapsed_sec: f64) -> bool {
        elapsed_sec >= self.duration_sec
    }

    pub fn value_at(&self, elapsed_sec: f64) -> f64 {
        if self.duration_sec <= 0.0 || self.is_finished(elapsed_sec) {
            return self.target;
        }
        self.target * power3_out(elapsed_sec / self.duration_sec)
    }

    pub fn display_at(&self, elapsed_sec: f64) -> String {
        format_da_dk(self.value_at(elapsed_sec).round() as i64)
    }
}

/// Integer formatting with Danish digit grouping (`1.234.567`).
pub fn format_da_dk(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Endless back-and-forth drift of a decorative orb.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbDrift {
    pub amplitude: DVec2,
    pub leg_sec: f64,
}

impl OrbDrift {
    /// Even orbs drift right/up, odd orbs left/down.
    pub fn for_index(index: usize) -> Self {
        let amplitude = if index % 2 == 0 {
            DVec2::new(ORB_DRIFT_X_PX, -ORB_DRIFT_Y_PX)
        } else {
            DVec2::new(-ORB_DRIFT_X_PX, ORB_DRIFT_Y_PX)
        };
        Self {
            amplitude,
            leg_sec: ORB_LEG_SEC,
        }
    }

    pub fn offset_at(&self, elapsed_sec: f64) -> DVec2 {
        if self.leg_sec <= 0.0 {
            return DVec2::ZERO;
        }
        let legs = elapsed_sec.max(0.0) / self.leg_sec;
        let local = legs.fract();
        let progress = if (legs.floor() as u64) % 2 == 0 {
            local
        } else {
            1.0 - local
        };
        self.amplitude * sine_in_out(progress)
    }
}

/// Tracks whether an animation-frame request is outstanding, so the loop only
/// runs while there is something to animate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameSchedule {
    running: bool,
}

impl FrameSchedule {
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// New work arrived; true when the caller must request the first frame.
    pub fn wake(&mut self) -> bool {
        let idle = !self.running;
        self.running = true;
        idle
    }

    /// A frame finished; true when another frame should be requested.
    pub fn after_frame(&mut self, has_work: bool) -> bool {
        self.running = has_work;
        has_work
    }
}
