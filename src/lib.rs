//! # maplet-symbolizer
//!
//! Per-frame placement math for point-anchored map symbols: markers, icons
//! and labels drawn on a 2D map canvas.
//!
//! Given a geometry's render points and a symbol definition, a
//! [`PointSymbolizer`] computes the extent of the points, their anchor
//! positions on the layer canvas, and the rotation of direction-following
//! symbols, staying consistent while the map pans, zooms and rotates.
//! Drawing itself is left to the caller.

pub mod core;
pub mod layers;
pub mod prelude;
pub mod rendering;
pub mod symbolizers;
pub mod traits;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{MapViewOptions, MapViewProfile},
    extent::Extent,
    geo::{LatLng, Point},
    viewport::{MapView, Transform},
};

pub use crate::layers::canvas::CanvasLayer;

pub use crate::rendering::canvas::{CanvasCommand, RecordingCanvas, TransformGuard};

pub use crate::symbolizers::{
    marker::{MarkerAnchor, MarkerSymbolizer},
    placement::{PathPlacement, PlacementMode, RenderPlacement},
    point::PointSymbolizer,
    symbol::SymbolConfig,
};

pub use crate::traits::{
    CanvasTransform, GeometryPlacementSource, LayerOrigin, MapProjector, SpriteModeFlag,
    Symbolizer,
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("no render points for placement '{0}'")]
    EmptyPlacement(PlacementMode),

    #[error("precondition failed: {0}")]
    Precondition(String),

    #[error("unknown placement: {0}")]
    InvalidPlacement(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Error type alias for convenience
pub type Error = MapError;
