//! Placement math shared by every point-anchored symbol
//!
//! [`PointSymbolizer`] turns a geometry's render points into canvas anchors
//! and rotations. It keeps no state between calls: every method re-reads the
//! geometry, map and layer it was built with, so a symbolizer built once per
//! frame always reflects the current view.

use crate::core::extent::Extent;
use crate::core::geo::Point;
use crate::rendering::canvas::TransformGuard;
use crate::symbolizers::placement::{PlacementMode, RenderPlacement};
use crate::symbolizers::symbol::SymbolConfig;
use crate::traits::{
    CanvasTransform, GeometryPlacementSource, LayerOrigin, MapProjector, SpriteModeFlag,
    Symbolizer,
};
use crate::{MapError, Result};

pub struct PointSymbolizer<'a> {
    symbol: SymbolConfig,
    geometry: &'a dyn GeometryPlacementSource,
    map: Option<&'a dyn MapProjector>,
    layer: Option<&'a dyn LayerOrigin>,
    sprite: &'a dyn SpriteModeFlag,
}

impl<'a> PointSymbolizer<'a> {
    /// Creates a symbolizer for a geometry that is not yet on a map.
    /// Attach the map and layer before asking for container points.
    pub fn new(symbol: SymbolConfig, geometry: &'a dyn GeometryPlacementSource) -> Self {
        Self {
            symbol,
            geometry,
            map: None,
            layer: None,
            sprite: &false,
        }
    }

    pub fn with_map(mut self, map: &'a dyn MapProjector) -> Self {
        self.map = Some(map);
        self
    }

    pub fn with_layer(mut self, layer: &'a dyn LayerOrigin) -> Self {
        self.layer = Some(layer);
        self
    }

    pub fn with_sprite_flag(mut self, sprite: &'a dyn SpriteModeFlag) -> Self {
        self.sprite = sprite;
        self
    }

    pub fn symbol(&self) -> &SymbolConfig {
        &self.symbol
    }

    fn get_map(&self) -> Result<&'a dyn MapProjector> {
        self.map.ok_or_else(|| {
            log::warn!("point symbolizer used before its geometry was added to a map");
            MapError::Precondition("geometry is not attached to a map".into())
        })
    }

    fn get_layer(&self) -> Result<&'a dyn LayerOrigin> {
        self.layer.ok_or_else(|| {
            log::warn!("point symbolizer used before its geometry was added to a layer");
            MapError::Precondition("geometry is not attached to a layer".into())
        })
    }

    fn render_points(&self) -> Result<RenderPlacement> {
        self.geometry.render_placement(self.placement())
    }

    /// Pixel offset of the marker from its anchor
    pub fn dx_dy(&self) -> Point {
        self.symbol.dx_dy()
    }

    /// Base rotation from the symbol, in canvas radians
    pub fn rotation(&self) -> Option<f64> {
        self.symbol.rotation()
    }

    /// Moves the canvas origin to `origin - dx_dy` and rotates it.
    ///
    /// Returns the offset to draw at in the rotated frame, or `None` without
    /// touching the canvas when there is no rotation. A `Some` return leaves
    /// one transform saved: the caller must `restore` once the symbol is
    /// drawn. Prefer [`PointSymbolizer::draw_rotated`], which does that.
    pub fn rotate<C>(&self, canvas: &mut C, origin: Point, rotation: Option<f64>) -> Option<Point>
    where
        C: CanvasTransform + ?Sized,
    {
        let rotation = rotation?;
        let dxdy = self.dx_dy();
        let p = origin - dxdy;
        canvas.save();
        canvas.translate(p.x, p.y);
        canvas.rotate(rotation);
        Some(dxdy)
    }

    /// Runs `draw` with the canvas rotated around `origin`.
    ///
    /// `draw` receives the canvas and the point to draw the symbol at: the
    /// offset inside the rotated frame, or `origin` itself when unrotated.
    /// The saved transform is restored on every exit from `draw`.
    pub fn draw_rotated<C, R, F>(
        &self,
        canvas: &mut C,
        origin: Point,
        rotation: Option<f64>,
        draw: F,
    ) -> Result<R>
    where
        C: CanvasTransform + ?Sized,
        F: FnOnce(&mut C, Point) -> Result<R>,
    {
        match self.rotate(canvas, origin, rotation) {
            Some(offset) => {
                let mut guard = TransformGuard::new(canvas, offset);
                draw(&mut *guard, offset)
            }
            None => draw(canvas, origin),
        }
    }
}

impl Symbolizer for PointSymbolizer<'_> {
    fn placement(&self) -> PlacementMode {
        self.symbol.placement()
    }

    /// Visits the render points in reverse order; the box is the same either way.
    fn get_2d_extent(&self) -> Result<Extent> {
        let map = self.get_map()?;
        let max_zoom = f64::from(map.max_native_zoom());
        let points = self.render_points()?.points;
        if points.is_empty() {
            return Err(MapError::EmptyPlacement(self.placement()));
        }

        Ok(Extent::from_points(
            points.iter().rev().map(|p| map.point_to_plane(*p, max_zoom)),
        ))
    }

    fn container_points(&self, ignore_altitude: bool) -> Result<Vec<Point>> {
        let points = self.render_points()?.points;
        if self.sprite.is_sprite_mode() {
            log::trace!("sprite batch: {} render points used as-is", points.len());
            return Ok(points);
        }

        let map = self.get_map()?;
        let layer_point = self.get_layer()?.surface_origin()?;
        let max_zoom = f64::from(map.max_native_zoom());
        let altitude = if ignore_altitude {
            0.0
        } else {
            self.geometry.altitude()
        };
        let dxdy = self.dx_dy();

        Ok(points
            .into_iter()
            .map(|point| map.point_to_container(point, max_zoom, altitude) + dxdy - layer_point)
            .collect())
    }

    /// While the map is transforming, the bearing pair is re-projected to
    /// container pixels so the symbol turns with the map instead of lagging
    /// one frame behind.
    fn rotation_at(&self, index: usize) -> Result<Option<f64>> {
        let rotation = self.rotation();
        let Some(bearings) = self.render_points()?.bearings else {
            return Ok(rotation);
        };
        let [mut p0, mut p1] = *bearings.get(index).ok_or_else(|| {
            MapError::Precondition(format!(
                "bearing index {index} out of range for {} anchors",
                bearings.len()
            ))
        })?;

        let map = self.get_map()?;
        if map.is_transforming() {
            let max_zoom = f64::from(map.max_native_zoom());
            p0 = map.point_to_container(p0, max_zoom, 0.0);
            p1 = map.point_to_container(p1, max_zoom, 0.0);
            log::trace!("bearing {index} re-projected during map transform");
        }

        Ok(Some(rotation.unwrap_or(0.0) + p0.angle_to(&p1)))
    }
}
