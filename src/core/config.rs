//! Configuration for map views used when placing symbols
//!
//! Options come from a small preset system: pick a profile, resolve it, and
//! optionally tweak the result before building a [`MapView`].
//!
//! [`MapView`]: crate::core::viewport::MapView

use crate::core::constants::{DEFAULT_MAX_NATIVE_ZOOM, MAX_ZOOM, MIN_ZOOM, TILE_SIZE};
use crate::core::geo::Point;
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub enum MapViewProfile {
    Standard,
    /// Double-density canvas: same logical size, tiles twice as large.
    Retina,
    Custom(MapViewOptions),
}

impl MapViewProfile {
    pub fn resolve(&self) -> MapViewOptions {
        match self {
            Self::Standard => MapViewOptions {
                size: Point::new(800.0, 600.0),
                tile_size: TILE_SIZE,
                min_zoom: MIN_ZOOM,
                max_zoom: MAX_ZOOM,
                max_native_zoom: DEFAULT_MAX_NATIVE_ZOOM,
            },
            Self::Retina => MapViewOptions {
                size: Point::new(800.0, 600.0),
                tile_size: TILE_SIZE * 2,
                min_zoom: MIN_ZOOM,
                max_zoom: MAX_ZOOM,
                max_native_zoom: DEFAULT_MAX_NATIVE_ZOOM,
            },
            Self::Custom(options) => options.clone(),
        }
    }
}

impl Default for MapViewProfile {
    fn default() -> Self {
        Self::Standard
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapViewOptions {
    /// Canvas size in pixels
    pub size: Point,
    /// Pixel width of the world at zoom 0
    pub tile_size: u32,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Zoom whose plane render points are expressed in
    pub max_native_zoom: u8,
}

impl MapViewOptions {
    pub fn validate(&self) -> Result<()> {
        if !(self.size.is_finite() && self.size.x > 0.0 && self.size.y > 0.0) {
            return Err(MapError::InvalidConfig(format!(
                "canvas size must be positive, got {}x{}",
                self.size.x, self.size.y
            )));
        }
        if self.tile_size == 0 {
            return Err(MapError::InvalidConfig("tile size must be non-zero".into()));
        }
        if self.min_zoom > self.max_zoom {
            return Err(MapError::InvalidConfig(format!(
                "min zoom {} exceeds max zoom {}",
                self.min_zoom, self.max_zoom
            )));
        }
        Ok(())
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.size = Point::new(width, height);
        self
    }

    pub fn with_max_native_zoom(mut self, zoom: u8) -> Self {
        self.max_native_zoom = zoom;
        self
    }
}

impl Default for MapViewOptions {
    fn default() -> Self {
        MapViewProfile::default().resolve()
    }
}
