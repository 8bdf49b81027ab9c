use crate::constants::{CONFETTI_DURATION_MS, CONFETTI_MAX_PARTICLES};
use rand::Rng;

pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

/// Tracks progress through the Konami code from `KeyboardEvent.key` values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KonamiTracker {
    index: usize,
}

impl KonamiTracker {
    #[inline]
    pub fn progress(&self) -> usize {
        self.index
    }

    /// Feed one key; returns true when the full sequence has just been entered.
    pub fn push(&mut self, key: &str) -> bool {
        if key == KONAMI_SEQUENCE[self.index] {
            self.index += 1;
            if self.index == KONAMI_SEQUENCE.len() {
                self.index = 0;
                return true;
            }
        } else {
            // A wrong key may still be the start of a fresh attempt
            self.index = usize::from(key == KONAMI_SEQUENCE[0]);
        }
        false
    }
}

/// Timing for the confetti celebration fired by the easter egg.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfettiBurst {
    pub started_ms: f64,
    pub duration_ms: f64,
}

impl ConfettiBurst {
    pub fn start(now_ms: f64) -> Self {
        Self {
            started_ms: now_ms,
            duration_ms: CONFETTI_DURATION_MS,
        }
    }

    pub fn time_left(&self, now_ms: f64) -> f64 {
        self.started_ms + self.duration_ms - now_ms
    }

    /// Particles per burst; `None` once the celebration is over.
    pub fn particle_count(&self, now_ms: f64) -> Option<f64> {
        let left = self.time_left(now_ms);
        if left <= 0.0 {
            return None;
        }
        Some(CONFETTI_MAX_PARTICLES * (left / self.duration_ms))
    }
}

/// Launch origins (normalized viewport coords) for the left and right bursts.
pub fn confetti_origins<R: Rng>(rng: &mut R) -> [(f64, f64); 2] {
    let y = |rng: &mut R| rng.gen::<f64>() - 0.2;
    [
        (rng.gen_range(0.1..0.3), y(rng)),
        (rng.gen_range(0.7..0.9), y(rng)),
    ]
}
