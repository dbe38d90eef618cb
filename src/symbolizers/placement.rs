//! Render-point placement for point symbols
//!
//! A placement mode decides where along a geometry symbols are anchored and,
//! for direction-following modes, which two points give each anchor its
//! bearing.

use crate::core::geo::{LatLng, Point};
use crate::core::viewport::MapView;
use crate::traits::{GeometryPlacementSource, MapProjector};
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where symbols are anchored on a geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlacementMode {
    /// The geometry's center (or every point of a multi-point)
    #[default]
    Point,
    /// Every vertex, oriented along the path
    Vertex,
    VertexFirst,
    VertexLast,
    /// The middle of every segment, oriented along it
    Line,
}

impl fmt::Display for PlacementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementMode::Point => write!(f, "point"),
            PlacementMode::Vertex => write!(f, "vertex"),
            PlacementMode::VertexFirst => write!(f, "vertex-first"),
            PlacementMode::VertexLast => write!(f, "vertex-last"),
            PlacementMode::Line => write!(f, "line"),
        }
    }
}

impl FromStr for PlacementMode {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "point" => Ok(PlacementMode::Point),
            "vertex" => Ok(PlacementMode::Vertex),
            "vertex-first" => Ok(PlacementMode::VertexFirst),
            "vertex-last" => Ok(PlacementMode::VertexLast),
            "line" => Ok(PlacementMode::Line),
            other => Err(MapError::InvalidPlacement(other.to_string())),
        }
    }
}

/// Two points whose direction orients one anchor
pub type BearingPair = [Point; 2];

/// Render points for one placement query, in plane coordinates at the map's
/// max native zoom.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderPlacement {
    pub points: Vec<Point>,
    /// One pair per point when the placement follows a direction
    pub bearings: Option<Vec<BearingPair>>,
}

impl RenderPlacement {
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            bearings: None,
        }
    }

    /// Pairs each point with the bearing pair at the same index
    pub fn with_bearings(points: Vec<Point>, bearings: Vec<BearingPair>) -> Result<Self> {
        if points.len() != bearings.len() {
            return Err(MapError::InvalidPlacement(format!(
                "{} render points but {} bearing pairs",
                points.len(),
                bearings.len()
            )));
        }
        Ok(Self {
            points,
            bearings: Some(bearings),
        })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// Unconnected points
    MultiPoint,
    /// Vertices joined in order
    LineString,
}

/// Placement source over a geometry's vertices.
///
/// Vertices are plane coordinates at the max native zoom of the map the
/// geometry is drawn on.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPlacement {
    kind: PathKind,
    vertices: Vec<Point>,
    altitude: f64,
}

impl PathPlacement {
    pub fn line_string(vertices: Vec<Point>) -> Self {
        Self {
            kind: PathKind::LineString,
            vertices,
            altitude: 0.0,
        }
    }

    pub fn multi_point(vertices: Vec<Point>) -> Self {
        Self {
            kind: PathKind::MultiPoint,
            vertices,
            altitude: 0.0,
        }
    }

    /// Projects geographic coordinates at the view's max native zoom
    pub fn from_lat_lngs(view: &MapView, kind: PathKind, coords: &[LatLng]) -> Self {
        let zoom = f64::from(view.max_native_zoom());
        let vertices = coords.iter().map(|c| view.project(c, zoom)).collect();
        Self {
            kind,
            vertices,
            altitude: 0.0,
        }
    }

    pub fn with_altitude(mut self, altitude: f64) -> Self {
        self.altitude = altitude;
        self
    }

    pub fn kind(&self) -> PathKind {
        self.kind
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    fn center(&self) -> Option<Point> {
        if self.vertices.is_empty() {
            return None;
        }
        let sum = self
            .vertices
            .iter()
            .fold(Point::ORIGIN, |acc, p| acc + *p);
        let n = self.vertices.len() as f64;
        Some(Point::new(sum.x / n, sum.y / n))
    }

    fn vertex_placement(&self) -> Result<RenderPlacement> {
        let v = &self.vertices;
        let last = v.len().saturating_sub(1);
        let bearings = (0..v.len())
            .map(|i| [v[i.saturating_sub(1)], v[(i + 1).min(last)]])
            .collect();
        RenderPlacement::with_bearings(v.clone(), bearings)
    }

    fn line_placement(&self) -> Result<RenderPlacement> {
        let (points, bearings) = self
            .vertices
            .windows(2)
            .map(|w| ((w[0] + w[1]) * 0.5, [w[0], w[1]]))
            .unzip();
        RenderPlacement::with_bearings(points, bearings)
    }
}

impl GeometryPlacementSource for PathPlacement {
    fn render_placement(&self, mode: PlacementMode) -> Result<RenderPlacement> {
        let v = &self.vertices;
        let placement = match (mode, v.first(), v.last()) {
            (_, None, _) | (_, _, None) => RenderPlacement::default(),
            (PlacementMode::Point, _, _) => match self.kind {
                PathKind::MultiPoint => RenderPlacement::new(v.clone()),
                PathKind::LineString => RenderPlacement::new(self.center().into_iter().collect()),
            },
            (PlacementMode::Vertex, _, _) => self.vertex_placement()?,
            (PlacementMode::VertexFirst, Some(&first), _) => {
                let next = v.get(1).copied().unwrap_or(first);
                RenderPlacement::with_bearings(vec![first], vec![[first, next]])?
            }
            (PlacementMode::VertexLast, _, Some(&last)) => {
                let prev = v.len().checked_sub(2).map_or(last, |i| v[i]);
                RenderPlacement::with_bearings(vec![last], vec![[prev, last]])?
            }
            (PlacementMode::Line, _, _) => self.line_placement()?,
        };
        Ok(placement)
    }

    fn altitude(&self) -> f64 {
        self.altitude
    }
}
