// Shared page tuning constants used by the web frontend.

// Map overlay defaults (Copenhagen)
pub const DEFAULT_LATITUDE: f64 = 55.6761;
pub const DEFAULT_LONGITUDE: f64 = 12.5683;
pub const DEFAULT_SCALE_FACTOR: f64 = 300.0; // circle size relative to the shorter container side

// Navigation
pub const NAV_COLLAPSE_BREAKPOINT_PX: f64 = 980.0; // at or below this width links close the menu

// Scrolling
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 300.0;
pub const PARALLAX_DEPTH_STEP: f64 = 20.0; // depth added per element index
pub const PARALLAX_DIVISOR: f64 = 1200.0;

// Counters
pub const COUNTER_DURATION_SEC: f64 = 2.0;
pub const COUNTER_VISIBLE_THRESHOLD: f64 = 0.6; // fraction in view before counting starts

// Hero orbs
pub const ORB_DRIFT_X_PX: f64 = 40.0;
pub const ORB_DRIFT_Y_PX: f64 = 30.0;
pub const ORB_LEG_SEC: f64 = 12.0; // one direction of the yoyo

// Confetti
pub const CONFETTI_DURATION_MS: f64 = 2500.0;
pub const CONFETTI_INTERVAL_MS: i32 = 250;
pub const CONFETTI_MAX_PARTICLES: f64 = 50.0;
pub const CONFETTI_START_VELOCITY: f64 = 30.0;
pub const CONFETTI_SPREAD: f64 = 360.0;
pub const CONFETTI_TICKS: f64 = 80.0;
pub const CONFETTI_Z_INDEX: f64 = 9999.0;
