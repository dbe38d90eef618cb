//! Symbolizers compute where point symbols go on the canvas.
//!
//! - [`placement`]: placement modes and render points per geometry
//! - [`symbol`]: the placement fields of a symbol definition
//! - [`point`]: anchors, extents and rotations for point symbols
//! - [`marker`]: the per-anchor draw pass

pub mod marker;
pub mod placement;
pub mod point;
pub mod symbol;

pub use marker::{MarkerAnchor, MarkerSymbolizer};
pub use placement::{BearingPair, PathKind, PathPlacement, PlacementMode, RenderPlacement};
pub use point::PointSymbolizer;
pub use symbol::SymbolConfig;
