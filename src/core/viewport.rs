use crate::core::config::MapViewOptions;
use crate::core::constants::{
    EARTH_RADIUS, TRANSFORM_SCALE_EPSILON, TRANSFORM_TRANSLATE_EPSILON,
};
use crate::core::geo::{LatLng, Point};
use crate::traits::MapProjector;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Transform state for animations (CSS-style transforms)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Translation in pixels
    pub translate: Point,
    /// Scale factor (1.0 = no scaling)
    pub scale: f64,
    /// Transform origin point in pixels
    pub origin: Point,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translate: Point::ORIGIN,
            scale: 1.0,
            origin: Point::ORIGIN,
        }
    }
}

impl Transform {
    pub fn new(translate: Point, scale: f64, origin: Point) -> Self {
        Self {
            translate,
            scale,
            origin,
        }
    }

    /// Create identity transform (no change)
    pub fn identity() -> Self {
        Self::default()
    }

    /// Check if this is effectively an identity transform
    pub fn is_identity(&self) -> bool {
        (self.scale - 1.0).abs() < TRANSFORM_SCALE_EPSILON
            && self.translate.x.abs() < TRANSFORM_TRANSLATE_EPSILON
            && self.translate.y.abs() < TRANSFORM_TRANSLATE_EPSILON
    }

    /// Scales around `origin`, then translates
    pub fn apply(&self, point: Point) -> Point {
        (point - self.origin) * self.scale + self.origin + self.translate
    }
}

/// The current view of the map: plane center, zoom, bearing and canvas size.
///
/// The center is kept in plane coordinates at the current zoom, so moving
/// between zoom levels is a pure rescale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    center: Point,
    zoom: f64,
    /// Map rotation in radians, clockwise on screen
    bearing: f64,
    size: Point,
    tile_size: u32,
    min_zoom: f64,
    max_zoom: f64,
    max_native_zoom: u8,
    /// Current transform for zoom animations
    current_transform: Transform,
    /// Set while a pan/zoom/rotate gesture is in progress
    gesture_active: bool,
}

impl MapView {
    pub fn new(options: MapViewOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            center: Point::ORIGIN,
            zoom: options.min_zoom,
            bearing: 0.0,
            size: options.size,
            tile_size: options.tile_size,
            min_zoom: options.min_zoom,
            max_zoom: options.max_zoom,
            max_native_zoom: options.max_native_zoom,
            current_transform: Transform::identity(),
            gesture_active: false,
        })
    }

    /// Sets center and zoom from a geographic coordinate
    pub fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        self.center = self.project(&center, self.zoom);
    }

    /// Sets the zoom level, keeping the same geographic center
    pub fn set_zoom(&mut self, zoom: f64) {
        let zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        self.center = self.center * 2_f64.powf(zoom - self.zoom);
        self.zoom = zoom;
    }

    /// Sets the center directly in plane coordinates at the current zoom
    pub fn set_center_point(&mut self, center: Point) {
        self.center = center;
    }

    /// Sets the map bearing in degrees (clockwise)
    pub fn set_bearing(&mut self, degrees: f64) {
        self.bearing = degrees.to_radians();
    }

    pub fn set_size(&mut self, size: Point) {
        self.size = size;
    }

    /// Sets the current transform for animations
    pub fn set_transform(&mut self, transform: Transform) {
        self.current_transform = transform;
    }

    /// Clears the current transform (sets to identity)
    pub fn clear_transform(&mut self) {
        self.current_transform = Transform::identity();
    }

    pub fn begin_gesture(&mut self) {
        self.gesture_active = true;
    }

    pub fn end_gesture(&mut self) {
        self.gesture_active = false;
        self.clear_transform();
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn bearing(&self) -> f64 {
        self.bearing
    }

    pub fn size(&self) -> Point {
        self.size
    }

    /// Pans the view by a container-space pixel delta
    pub fn pan(&mut self, delta: Point) {
        self.center = self.center - delta.rotate(-self.bearing);
    }

    /// Projects a LatLng to plane coordinates at the given zoom level (EPSG:3857)
    pub fn project(&self, lat_lng: &LatLng, zoom: f64) -> Point {
        let scale = f64::from(self.tile_size) * 2_f64.powf(zoom);
        let lat = LatLng::clamp_lat(lat_lng.lat);

        let x = lat_lng.lng.to_radians() * EARTH_RADIUS;
        let y = (PI / 4.0 + lat.to_radians() / 2.0).tan().ln() * EARTH_RADIUS;

        let circumference = 2.0 * PI * EARTH_RADIUS;
        Point::new(
            (x + PI * EARTH_RADIUS) / circumference * scale,
            (-y + PI * EARTH_RADIUS) / circumference * scale,
        )
    }

    /// Ratio converting a plane point at `zoom` into the current zoom's plane
    pub fn resolution_ratio(&self, zoom: f64) -> f64 {
        2_f64.powf(self.zoom - zoom)
    }

    /// Converts a plane point at the current zoom into container pixels.
    /// Applies the animation transform when one is active.
    pub fn plane_to_container(&self, plane: Point) -> Point {
        let half = self.size * 0.5;
        let result = (plane - self.center).rotate(self.bearing) + half;

        if self.current_transform.is_identity() {
            result
        } else {
            self.current_transform.apply(result)
        }
    }

    pub fn get_transform(&self) -> &Transform {
        &self.current_transform
    }

    /// Check if a transform is currently active
    pub fn has_active_transform(&self) -> bool {
        !self.current_transform.is_identity()
    }
}

impl Default for MapView {
    fn default() -> Self {
        let options = MapViewOptions::default();
        Self {
            center: Point::ORIGIN,
            zoom: options.min_zoom,
            bearing: 0.0,
            size: options.size,
            tile_size: options.tile_size,
            min_zoom: options.min_zoom,
            max_zoom: options.max_zoom,
            max_native_zoom: options.max_native_zoom,
            current_transform: Transform::identity(),
            gesture_active: false,
        }
    }
}

impl MapProjector for MapView {
    fn point_to_plane(&self, point: Point, zoom: f64) -> Point {
        point * self.resolution_ratio(zoom)
    }

    fn point_to_container(&self, point: Point, zoom: f64, altitude: f64) -> Point {
        let container = self.plane_to_container(self.point_to_plane(point, zoom));
        Point::new(container.x, container.y - altitude)
    }

    fn is_transforming(&self) -> bool {
        self.gesture_active || self.has_active_transform()
    }

    fn max_native_zoom(&self) -> u8 {
        self.max_native_zoom
    }
}
