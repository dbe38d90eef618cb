//! Shared trait abstractions for symbol placement
//!
//! The placement core only talks to the map, the geometry, the layer and the
//! drawing surface through these traits. Each has a concrete implementation
//! in this crate, and tests substitute their own.

use crate::{
    core::{extent::Extent, geo::Point},
    symbolizers::placement::{PlacementMode, RenderPlacement},
    Result,
};

/// Projection between plane coordinates and drawing-surface pixels
pub trait MapProjector {
    /// Converts a plane point given at `zoom` into the plane at the map's
    /// current zoom.
    fn point_to_plane(&self, point: Point, zoom: f64) -> Point;

    /// Converts a plane point given at `zoom` into container pixels, lifting
    /// it by `altitude` pixels.
    fn point_to_container(&self, point: Point, zoom: f64, altitude: f64) -> Point;

    /// True while a pan/zoom/rotate gesture or animation is running
    fn is_transforming(&self) -> bool;

    /// Zoom level render points are expressed at
    fn max_native_zoom(&self) -> u8;
}

/// Source of render points for a geometry
pub trait GeometryPlacementSource {
    fn render_placement(&self, mode: PlacementMode) -> Result<RenderPlacement>;

    /// Altitude of the geometry as a pixel offset
    fn altitude(&self) -> f64 {
        0.0
    }
}

/// Top-left reference point of a layer's canvas, in container pixels
pub trait LayerOrigin {
    fn surface_origin(&self) -> Result<Point>;
}

/// Whether the current draw happens inside a pre-rendered sprite batch
pub trait SpriteModeFlag {
    fn is_sprite_mode(&self) -> bool;
}

impl SpriteModeFlag for bool {
    fn is_sprite_mode(&self) -> bool {
        *self
    }
}

/// The transform stack of a drawing surface.
///
/// Every `save` must be paired with exactly one `restore`; use
/// [`TransformGuard`](crate::rendering::canvas::TransformGuard) rather than
/// pairing them by hand.
pub trait CanvasTransform {
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, angle: f64);
}

/// Geometry contract shared by every point-anchored symbolizer
pub trait Symbolizer {
    /// Placement mode used to query render points
    fn placement(&self) -> PlacementMode;

    /// Extent of the render points in the current zoom's plane
    fn get_2d_extent(&self) -> Result<Extent>;

    /// Anchor positions on the layer canvas, one per render point
    fn container_points(&self, ignore_altitude: bool) -> Result<Vec<Point>>;

    /// Rotation in radians for the anchor at `index`; `None` means unrotated
    fn rotation_at(&self, index: usize) -> Result<Option<f64>>;
}
