//! Prelude module for common maplet-symbolizer types and traits
//!
//! This module re-exports the most commonly used types and traits for easy
//! importing with `use maplet_symbolizer::prelude::*;`

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
    placement::{BearingPair, PathKind, PathPlacement, PlacementMode, RenderPlacement},
    point::PointSymbolizer,
    symbol::SymbolConfig,
};

pub use crate::traits::{
    CanvasTransform, GeometryPlacementSource, LayerOrigin, MapProjector, SpriteModeFlag,
    Symbolizer,
};

pub use crate::{Error as MapError, Result};
