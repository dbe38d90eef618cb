use crate::core::extent::Extent;
use crate::core::geo::Point;
use crate::symbolizers::placement::PlacementMode;
use crate::symbolizers::point::PointSymbolizer;
use crate::traits::{CanvasTransform, Symbolizer};
use crate::Result;

/// Where and how one marker is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerAnchor {
    /// Index into the placement's render points
    pub index: usize,
    /// Position to draw at, in the canvas's current frame
    pub position: Point,
    /// Rotation already applied to the canvas, if any
    pub rotation: Option<f64>,
}

/// Draw pass for marker-like symbols.
///
/// Walks the container points of a [`PointSymbolizer`], rotating the canvas
/// around each one before handing it to the painter's draw closure.
pub struct MarkerSymbolizer<'a> {
    inner: PointSymbolizer<'a>,
}

impl<'a> MarkerSymbolizer<'a> {
    pub fn new(inner: PointSymbolizer<'a>) -> Self {
        Self { inner }
    }

    pub fn point_symbolizer(&self) -> &PointSymbolizer<'a> {
        &self.inner
    }

    /// Draws every anchor and returns how many were drawn.
    ///
    /// Anchors with non-finite coordinates are skipped. An error from `draw`
    /// aborts the pass after the current anchor's transform is restored.
    pub fn symbolize<C, F>(&self, canvas: &mut C, mut draw: F) -> Result<usize>
    where
        C: CanvasTransform + ?Sized,
        F: FnMut(&mut C, MarkerAnchor) -> Result<()>,
    {
        let points = self.inner.container_points(false)?;
        let mut drawn = 0;

        for (index, point) in points.into_iter().enumerate() {
            if !point.is_finite() {
                log::trace!("skipping marker {index}: anchor is not finite");
                continue;
            }
            let rotation = self.inner.rotation_at(index)?;
            self.inner
                .draw_rotated(canvas, point, rotation, |canvas, position| {
                    draw(
                        canvas,
                        MarkerAnchor {
                            index,
                            position,
                            rotation,
                        },
                    )
                })?;
            drawn += 1;
        }

        Ok(drawn)
    }
}

impl Symbolizer for MarkerSymbolizer<'_> {
    fn placement(&self) -> PlacementMode {
        self.inner.placement()
    }

    fn get_2d_extent(&self) -> Result<Extent> {
        self.inner.get_2d_extent()
    }

    fn container_points(&self, ignore_altitude: bool) -> Result<Vec<Point>> {
        self.inner.container_points(ignore_altitude)
    }

    fn rotation_at(&self, index: usize) -> Result<Option<f64>> {
        self.inner.rotation_at(index)
    }
}
