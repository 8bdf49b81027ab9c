//! Geographic overlay placement.
//!
//! A fixed coordinate is mapped onto a responsive container with a linear
//! equirectangular projection and a circular overlay is centred on the
//! resulting point. Geometry is always recomputed from the current container
//! size; nothing is carried over between resizes.

use crate::constants::{DEFAULT_LATITUDE, DEFAULT_LONGITUDE, DEFAULT_SCALE_FACTOR};
use crate::error::ConfigError;
use glam::DVec2;

/// Latitude/longitude pair in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ConfigError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ConfigError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ConfigError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Observed pixel size of the bounding container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

impl ContainerSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Negative or non-finite dimensions are treated as "not laid out yet".
    #[inline]
    fn sanitized(self) -> Self {
        let clean = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self {
            width: clean(self.width),
            height: clean(self.height),
        }
    }
}

/// Pixel placement written to the overlay element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OverlayGeometry {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub top: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayConfig {
    coordinate: Coordinate,
    scale_factor: f64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            coordinate: Coordinate {
                latitude: DEFAULT_LATITUDE,
                longitude: DEFAULT_LONGITUDE,
            },
            scale_factor: DEFAULT_SCALE_FACTOR,
        }
    }
}

impl OverlayConfig {
    pub fn new(latitude: f64, longitude: f64, scale_factor: f64) -> Result<Self, ConfigError> {
        if !scale_factor.is_finite() || scale_factor < 0.0 {
            return Err(ConfigError::InvalidScale(scale_factor));
        }
        Ok(Self {
            coordinate: Coordinate::new(latitude, longitude)?,
            scale_factor,
        })
    }

    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    #[inline]
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Build a config from optional string attributes (`data-lat`,
    /// `data-lon`, `data-scale`). Missing attributes keep their defaults.
    pub fn from_attrs(
        lat: Option<&str>,
        lon: Option<&str>,
        scale: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let latitude = parse_attr("data-lat", lat)?.unwrap_or(defaults.coordinate.latitude);
        let longitude = parse_attr("data-lon", lon)?.unwrap_or(defaults.coordinate.longitude);
        let scale_factor = parse_attr("data-scale", scale)?.unwrap_or(defaults.scale_factor);
        Self::new(latitude, longitude, scale_factor)
    }
}

fn parse_attr(name: &'static str, raw: Option<&str>) -> Result<Option<f64>, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Some)
        .ok_or_else(|| ConfigError::NotANumber {
            name,
            value: raw.to_string(),
        })
}

/// Linear equirectangular projection; north is at the top edge.
#[inline]
pub fn project(coordinate: Coordinate, size: ContainerSize) -> DVec2 {
    let size = size.sanitized();
    DVec2::new(
        (coordinate.longitude + 180.0) * (size.width / 360.0),
        (90.0 - coordinate.latitude) * (size.height / 180.0),
    )
}

/// Compute the overlay box for `config` inside a container of `size`.
pub fn recompute(config: &OverlayConfig, size: ContainerSize) -> OverlayGeometry {
    let size = size.sanitized();
    let center = project(config.coordinate, size);
    let diameter = size.width.min(size.height) * config.scale_factor;
    let half = diameter / 2.0;
    OverlayGeometry {
        width: diameter,
        height: diameter,
        left: center.x - half,
        top: center.y - half,
    }
}

/// Sink for computed geometry, typically an absolutely positioned element.
pub trait RenderTarget {
    fn apply(&mut self, geometry: &OverlayGeometry);
}

/// Binds a configuration to a render target and keeps it in sync with the
/// container size.
pub struct GeoOverlay<T: RenderTarget> {
    config: OverlayConfig,
    target: T,
}

impl<T: RenderTarget> GeoOverlay<T> {
    pub fn new(config: OverlayConfig, target: T) -> Self {
        Self { config, target }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Recompute from the live container size and push it to the target.
    pub fn update(&mut self, size: ContainerSize) -> OverlayGeometry {
        let geometry = recompute(&self.config, size);
        log::debug!(
            "[geo] container={:.0}x{:.0} -> size={:.1} left={:.1} top={:.1}",
            size.width,
            size.height,
            geometry.width,
            geometry.left,
            geometry.top
        );
        self.target.apply(&geometry);
        geometry
    }
}

/// Pick the overlay element a map container drives.
///
/// A circle nested in the container always wins. Only the first container may
/// adopt a `stray` circle, i.e. one that sits outside every map container, so
/// two overlays never write to the same element.
pub fn resolve_overlay<T>(
    container_index: usize,
    scoped: Option<T>,
    stray: Option<T>,
) -> Option<T> {
    scoped.or(if container_index == 0 { stray } else { None })
}
