use crate::{
    core::geo::Point,
    traits::{LayerOrigin, MapProjector, SpriteModeFlag},
    MapError, Result,
};

/// A layer drawn onto its own canvas.
///
/// The canvas covers the view from the layer's north-west corner, so symbol
/// anchors are made relative to that corner before drawing.
#[derive(Debug, Clone)]
pub struct CanvasLayer {
    id: String,
    /// North-west corner in container pixels, set per frame
    north_west: Option<Point>,
    spriting: bool,
}

impl CanvasLayer {
    pub fn new(id: String) -> Self {
        Self {
            id,
            north_west: None,
            spriting: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Records where the canvas sits for this frame. `north_west` is a plane
    /// point at the map's max native zoom.
    pub fn prepare_frame(&mut self, map: &dyn MapProjector, north_west: Point) {
        let zoom = f64::from(map.max_native_zoom());
        self.north_west = Some(map.point_to_container(north_west, zoom, 0.0));
    }

    /// Forgets the canvas position, e.g. after the layer is removed
    pub fn clear_frame(&mut self) {
        self.north_west = None;
    }

    /// Switches sprite batching on while symbols are pre-rendered
    pub fn set_spriting(&mut self, spriting: bool) {
        log::debug!("layer {}: sprite batching {}", self.id, spriting);
        self.spriting = spriting;
    }
}

impl LayerOrigin for CanvasLayer {
    fn surface_origin(&self) -> Result<Point> {
        self.north_west.ok_or_else(|| {
            MapError::Precondition(format!(
                "layer {} has no canvas for this frame",
                self.id
            ))
        })
    }
}

impl SpriteModeFlag for CanvasLayer {
    fn is_sprite_mode(&self) -> bool {
        self.spriting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::MapViewOptions;
    use crate::core::viewport::MapView;

    fn layer() -> CanvasLayer {
        CanvasLayer::new("pins".into())
    }

    #[test]
    fn test_origin_requires_a_frame() {
        let layer = layer();
        assert_eq!(layer.id(), "pins");
        match layer.surface_origin() {
            Err(MapError::Precondition(msg)) => assert!(msg.contains("pins")),
            other => panic!("expected a precondition error, got {other:?}"),
        }
    }

    #[test]
    fn test_prepare_frame_projects_north_west() {
        let options = MapViewOptions::default()
            .with_size(400.0, 300.0)
            .with_max_native_zoom(2);
        let mut view = MapView::new(options).unwrap();
        view.set_zoom(2.0);
        view.set_center_point(Point::new(500.0, 500.0));

        let mut layer = layer();
        layer.prepare_frame(&view, Point::new(300.0, 350.0));
        assert_eq!(layer.surface_origin().unwrap(), Point::new(0.0, 0.0));

        layer.clear_frame();
        assert!(layer.surface_origin().is_err());
    }

    #[test]
    fn test_sprite_flag() {
        let mut layer = layer();
        assert!(!layer.is_sprite_mode());
        layer.set_spriting(true);
        assert!(layer.is_sprite_mode());
    }
}
