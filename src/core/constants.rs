//! Core constants derived from Leaflet defaults and common web-map conventions.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

/// Web Mercator equatorial radius in meters.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Latitude beyond which Web Mercator diverges.
pub const MAX_LATITUDE: f64 = 85.0511287798;

/// Zoom at which render points are produced unless the map says otherwise.
pub const DEFAULT_MAX_NATIVE_ZOOM: u8 = 18;

/// Lowest zoom a view accepts.
pub const MIN_ZOOM: f64 = 0.0;

/// Highest zoom a view accepts (overzoom past native tiles allowed).
pub const MAX_ZOOM: f64 = 24.0;

/// A transform whose scale differs from 1 by less than this counts as identity.
pub const TRANSFORM_SCALE_EPSILON: f64 = 0.001;

/// A transform translating less than this many pixels counts as identity.
pub const TRANSFORM_TRANSLATE_EPSILON: f64 = 0.1;
