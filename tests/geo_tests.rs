// Host-side tests for the map overlay projection.
// The web crate is wasm-only, so these drive `site-core` directly.

use site_core::{
    project, recompute, resolve_overlay, ConfigError, ContainerSize, Coordinate, GeoOverlay,
    OverlayConfig, OverlayGeometry, RenderTarget,
};

const EPS: f64 = 1e-9;

#[derive(Default)]
struct Recorder {
    applied: Vec<OverlayGeometry>,
}

impl RenderTarget for Recorder {
    fn apply(&mut self, geometry: &OverlayGeometry) {
        self.applied.push(*geometry);
    }
}

fn coord(lat: f64, lon: f64) -> Coordinate {
    Coordinate::new(lat, lon).unwrap()
}

#[test]
fn copenhagen_in_1000_by_500() {
    let p = project(coord(55.6761, 12.5683), ContainerSize::new(1000.0, 500.0));
    // (12.5683 + 180) * 1000 / 360
    assert!((p.x - 534.912).abs() < 0.001, "x = {}", p.x);
    assert!((p.y - 95.34).abs() < 0.01, "y = {}", p.y);
}

#[test]
fn projection_hits_container_edges() {
    let size = ContainerSize::new(640.0, 320.0);
    assert!(project(coord(90.0, 0.0), size).y.abs() < EPS);
    assert!((project(coord(-90.0, 0.0), size).y - 320.0).abs() < EPS);
    assert!(project(coord(0.0, -180.0), size).x.abs() < EPS);
    assert!((project(coord(0.0, 180.0), size).x - 640.0).abs() < EPS);
}

#[test]
fn overlay_is_centred_on_projected_point() {
    let cfg = OverlayConfig::new(0.0, 0.0, 0.1).unwrap();
    let g = recompute(&cfg, ContainerSize::new(400.0, 200.0));
    assert!((g.width - 20.0).abs() < EPS);
    assert_eq!(g.width, g.height);
    assert!((g.left + g.width / 2.0 - 200.0).abs() < EPS);
    assert!((g.top + g.height / 2.0 - 100.0).abs() < EPS);
}

#[test]
fn default_scale_uses_shorter_side() {
    let cfg = OverlayConfig::default();
    let g = recompute(&cfg, ContainerSize::new(1000.0, 500.0));
    assert!((g.width - 500.0 * cfg.scale_factor()).abs() < EPS);
}

#[test]
fn tall_container_sizes_from_width() {
    let cfg = OverlayConfig::new(0.0, 0.0, 0.2).unwrap();
    let g = recompute(&cfg, ContainerSize::new(300.0, 600.0));
    assert!((g.width - 300.0 * cfg.scale_factor()).abs() < EPS);
    assert_eq!(g.width, g.height);
    // Equator/prime meridian sits at the container centre (150, 300)
    assert!((g.left - (150.0 - 30.0)).abs() < EPS);
    assert!((g.top - (300.0 - 30.0)).abs() < EPS);
}

#[test]
fn zero_sized_container_gives_zero_geometry() {
    let cfg = OverlayConfig::default();
    let g = recompute(&cfg, ContainerSize::new(0.0, 0.0));
    assert_eq!(g, OverlayGeometry::default());
    assert!(!g.left.is_nan() && !g.top.is_nan());
}

#[test]
fn recompute_is_idempotent() {
    let cfg = OverlayConfig::default();
    let size = ContainerSize::new(1280.0, 720.0);
    let a = recompute(&cfg, size);
    let b = recompute(&cfg, size);
    assert_eq!(a.width.to_bits(), b.width.to_bits());
    assert_eq!(a.left.to_bits(), b.left.to_bits());
    assert_eq!(a.top.to_bits(), b.top.to_bits());
}

#[test]
fn resize_triggers_one_proportional_recompute() {
    let mut overlay = GeoOverlay::new(OverlayConfig::default(), Recorder::default());
    let before = overlay.update(ContainerSize::new(1000.0, 500.0));
    let after = overlay.update(ContainerSize::new(800.0, 400.0));

    assert_eq!(overlay.target().applied.len(), 2);
    assert_eq!(overlay.target().applied[1], after);
    for (b, a) in [
        (before.width, after.width),
        (before.left, after.left),
        (before.top, after.top),
    ] {
        assert!((a - b * 0.8).abs() < 1e-6, "{a} != 0.8 * {b}");
    }
}

#[test]
fn independent_overlays_do_not_share_state() {
    let north_cfg = OverlayConfig::new(60.0, 10.0, 0.05).unwrap();
    let south_cfg = OverlayConfig::new(-33.9, 18.4, 0.05).unwrap();
    let mut north = GeoOverlay::new(north_cfg, Recorder::default());
    let mut south = GeoOverlay::new(south_cfg, Recorder::default());
    let size = ContainerSize::new(720.0, 360.0);
    let n = north.update(size);
    let s = south.update(size);
    assert!(n.top < s.top);
    assert_eq!(north.target().applied.len(), 1);
    assert_eq!(south.target().applied.len(), 1);
}

#[test]
fn config_rejects_out_of_range_values() {
    assert_eq!(
        OverlayConfig::new(91.0, 0.0, 1.0),
        Err(ConfigError::LatitudeOutOfRange(91.0))
    );
    assert_eq!(
        OverlayConfig::new(0.0, -180.5, 1.0),
        Err(ConfigError::LongitudeOutOfRange(-180.5))
    );
    assert!(matches!(
        OverlayConfig::new(0.0, 0.0, f64::INFINITY),
        Err(ConfigError::InvalidScale(_))
    ));
}

#[test]
fn config_accessors_expose_validated_values() {
    let cfg = OverlayConfig::new(-12.5, 130.25, 4.0).unwrap();
    assert_eq!(cfg.coordinate(), coord(-12.5, 130.25));
    assert_eq!(cfg.scale_factor(), 4.0);
    assert_eq!(
        OverlayConfig::new(0.0, 0.0, -1.0),
        Err(ConfigError::InvalidScale(-1.0))
    );
    assert!(OverlayConfig::new(0.0, 0.0, f64::NAN).is_err());
    assert!(OverlayConfig::from_attrs(None, None, Some("-3")).is_err());
}

#[test]
fn overlay_resolution_prefers_nested_circle() {
    assert_eq!(resolve_overlay(0, Some("nested"), Some("stray")), Some("nested"));
    assert_eq!(resolve_overlay(3, Some("nested"), Some("stray")), Some("nested"));
}

#[test]
fn only_first_container_adopts_stray_circle() {
    assert_eq!(resolve_overlay(0, None, Some("stray")), Some("stray"));
    assert_eq!(resolve_overlay(1, None, Some("stray")), None);
    assert_eq!(resolve_overlay::<&str>(0, None, None), None);
}

#[test]
fn config_from_attributes() {
    let cfg = OverlayConfig::from_attrs(Some("48.8566"), Some("2.3522"), None).unwrap();
    assert_eq!(cfg.coordinate().latitude(), 48.8566);
    assert_eq!(cfg.coordinate().longitude(), 2.3522);
    assert_eq!(cfg.scale_factor(), OverlayConfig::default().scale_factor());

    assert_eq!(
        OverlayConfig::from_attrs(None, None, None).unwrap(),
        OverlayConfig::default()
    );
    assert!(matches!(
        OverlayConfig::from_attrs(Some("north"), None, None),
        Err(ConfigError::NotANumber { name: "data-lat", .. })
    ));
}
