//! Placement-related fields of a point symbol
//!
//! Only the fields the placement core reads are modelled; the rest of a
//! symbol (colors, image, text) belongs to the painter.

use crate::core::geo::Point;
use crate::symbolizers::placement::PlacementMode;
use crate::Result;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SymbolConfig {
    /// Horizontal pixel offset of the marker
    #[serde(deserialize_with = "lenient_number")]
    pub marker_dx: Option<f64>,
    /// Vertical pixel offset of the marker
    #[serde(deserialize_with = "lenient_number")]
    pub marker_dy: Option<f64>,
    /// Rotation in degrees, counter-clockwise
    #[serde(deserialize_with = "lenient_number")]
    pub marker_rotation: Option<f64>,
    pub marker_placement: Option<PlacementMode>,
}

impl SymbolConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn with_offset(mut self, dx: f64, dy: f64) -> Self {
        self.marker_dx = Some(dx);
        self.marker_dy = Some(dy);
        self
    }

    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.marker_rotation = Some(degrees);
        self
    }

    pub fn with_placement(mut self, placement: PlacementMode) -> Self {
        self.marker_placement = Some(placement);
        self
    }

    /// Pixel offset, unset components resolve to 0
    pub fn dx_dy(&self) -> Point {
        Point::new(
            self.marker_dx.unwrap_or(0.0),
            self.marker_dy.unwrap_or(0.0),
        )
    }

    /// Canvas rotation in radians. Canvas angles run clockwise, so the
    /// configured counter-clockwise degrees are negated.
    pub fn rotation(&self) -> Option<f64> {
        self.marker_rotation.map(|deg| -deg.to_radians())
    }

    pub fn placement(&self) -> PlacementMode {
        self.marker_placement.unwrap_or_default()
    }
}

/// Accepts any JSON value; only finite numbers are kept.
fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64().filter(|v| v.is_finite()))
}
