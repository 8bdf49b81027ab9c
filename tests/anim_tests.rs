// Host-side tests for counters, easing and orb drift.

use site_core::constants::{COUNTER_DURATION_SEC, ORB_DRIFT_X_PX, ORB_DRIFT_Y_PX, ORB_LEG_SEC};
use site_core::{format_da_dk, power3_out, CounterAnimation, FrameSchedule, OrbDrift};

#[test]
fn counter_starts_at_zero_and_lands_on_target() {
    let c = CounterAnimation::new(12500.0);
    assert_eq!(c.value_at(0.0), 0.0);
    assert_eq!(c.value_at(COUNTER_DURATION_SEC), 12500.0);
    assert_eq!(c.value_at(COUNTER_DURATION_SEC + 5.0), 12500.0);
    assert_eq!(c.display_at(COUNTER_DURATION_SEC), "12.500");
}

#[test]
fn counter_is_monotonic_and_front_loaded() {
    let c = CounterAnimation::new(1000.0);
    let mut prev = -1.0;
    for step in 0..=40 {
        let v = c.value_at(step as f64 * COUNTER_DURATION_SEC / 40.0);
        assert!(v >= prev, "counter went backwards at step {step}");
        prev = v;
    }
    // power3.out covers most of the distance in the first half
    assert!(c.value_at(COUNTER_DURATION_SEC / 2.0) > 800.0);
}

#[test]
fn counter_target_attribute_parsing() {
    assert_eq!(CounterAnimation::from_attr(Some("250")).target, 250.0);
    assert_eq!(CounterAnimation::from_attr(Some(" 3.5 ")).target, 3.5);
    assert_eq!(CounterAnimation::from_attr(Some("many")).target, 0.0);
    assert_eq!(CounterAnimation::from_attr(None).target, 0.0);
}

#[test]
fn counter_finish_flag() {
    let c = CounterAnimation::new(10.0);
    assert!(!c.is_finished(0.0));
    assert!(!c.is_finished(COUNTER_DURATION_SEC - 0.01));
    assert!(c.is_finished(COUNTER_DURATION_SEC));
}

#[test]
fn danish_number_formatting() {
    assert_eq!(format_da_dk(12), "12");
    assert_eq!(format_da_dk(100_000), "100.000");
    assert_eq!(format_da_dk(-1_000_000), "-1.000.000");
}

#[test]
fn power3_out_midpoint() {
    assert!((power3_out(0.5) - 0.875).abs() < 1e-12);
}

#[test]
fn orbs_alternate_direction_by_index() {
    let even = OrbDrift::for_index(0);
    let odd = OrbDrift::for_index(1);
    let e = even.offset_at(ORB_LEG_SEC);
    let o = odd.offset_at(ORB_LEG_SEC);
    assert!((e.x - ORB_DRIFT_X_PX).abs() < 1e-9);
    assert!((e.y + ORB_DRIFT_Y_PX).abs() < 1e-9);
    assert!((o.x + ORB_DRIFT_X_PX).abs() < 1e-9);
    assert!((o.y - ORB_DRIFT_Y_PX).abs() < 1e-9);
}

#[test]
fn orb_drift_yoyos() {
    let d = OrbDrift::for_index(2);
    assert!(d.offset_at(0.0).length() < 1e-9);
    let there = d.offset_at(ORB_LEG_SEC * 0.5);
    let back = d.offset_at(ORB_LEG_SEC * 1.5);
    assert!((there - back).length() < 1e-9);
    assert!(d.offset_at(ORB_LEG_SEC * 2.0).length() < 1e-9);
    assert!(d.offset_at(-3.0).length() < 1e-9);
}

#[test]
fn frame_schedule_requests_only_when_idle() {
    let mut s = FrameSchedule::default();
    assert!(!s.is_running());
    assert!(s.wake(), "first registration starts the loop");
    assert!(!s.wake(), "loop already running");
    assert!(s.after_frame(true));
    assert!(s.is_running());
}

#[test]
fn frame_schedule_sleeps_without_work_and_restarts() {
    let mut s = FrameSchedule::default();
    s.wake();
    assert!(!s.after_frame(false));
    assert!(!s.is_running());
    // A counter scrolled into view later wakes it again
    assert!(s.wake());
    assert!(s.is_running());
}
