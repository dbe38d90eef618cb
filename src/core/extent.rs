use crate::core::geo::Point;

/// Axis-aligned bounding box accumulated over plane points.
///
/// `Extent::empty()` is inverted (min = +inf, max = -inf) so the first
/// `combine` snaps it to that point. An empty extent reports
/// `is_valid() == false` and must not be used as bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: Point,
    pub max: Point,
}

impl Extent {
    /// Creates an extent from two corners
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Creates an extent from individual coordinates
    pub fn from_coords(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::new(Point::new(min_x, min_y), Point::new(max_x, max_y))
    }

    /// Creates empty bounds (invalid bounds that can be extended)
    pub fn empty() -> Self {
        Self::new(
            Point::new(f64::INFINITY, f64::INFINITY),
            Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        )
    }

    /// Minimal extent containing every point, `empty()` for no points
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        points.into_iter().fold(Self::empty(), |mut extent, p| {
            extent.combine(&p);
            extent
        })
    }

    /// Grows the extent to include a point
    pub fn combine(&mut self, point: &Point) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    /// Checks if the extent is valid (min <= max)
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }

    /// Checks if the extent contains a point (edges inclusive)
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_extent_is_invalid() {
        let extent = Extent::empty();
        assert!(!extent.is_valid());
        assert!(!extent.contains(&Point::ORIGIN));
        assert_eq!(Extent::from_points(Vec::new()), extent);
    }

    #[test]
    fn test_single_point_extent() {
        let extent = Extent::from_points([Point::new(3.0, 4.0)]);
        assert!(extent.is_valid());
        assert_eq!(extent.min, Point::new(3.0, 4.0));
        assert_eq!(extent.max, Point::new(3.0, 4.0));
        assert!(extent.contains(&Point::new(3.0, 4.0)));
    }

    #[test]
    fn test_combine_is_minimal() {
        let extent = Extent::from_points([
            Point::new(10.0, 20.0),
            Point::new(-5.0, 25.0),
            Point::new(30.0, 0.0),
        ]);
        assert_eq!(extent, Extent::from_coords(-5.0, 0.0, 30.0, 25.0));
        assert!(!extent.contains(&Point::new(-5.5, 10.0)));
    }
}
