//! JSON description of a linear gradient.
//!
//! ```json
//! {
//!   "stops": [
//!     { "color": [1, 0, 0] },
//!     { "color": [0, 0, 1], "offset": 0.8, "offset_kind": "relative",
//!       "hint": 0.3, "hint_kind": "relative_between_colors" }
//!   ],
//!   "spread": "reflect",
//!   "vector": { "direction": "to top right" },
//!   "transform": [1, 0, 0, 1, 0, 0]
//! }
//! ```

use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::core::builder::LinearGradientBuilder;
use crate::core::color::Color;
use crate::core::error::GradientError;
use crate::core::geometry::affine_from_slice;
use crate::core::spread::SpreadMethod;
use crate::core::stop::{ColorStop, HintKind, OffsetKind};
use crate::core::strategy::{Direction, VectorStrategy};

fn default_opacity() -> f64 { 1.0 }

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct StopTemplate {
    pub color: Color,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub offset: Option<f64>,
    /// Defaults to `relative` when an offset is given, `auto` otherwise
    #[serde(default)]
    pub offset_kind: Option<OffsetKind>,
    #[serde(default)]
    pub hint: Option<f64>,
    #[serde(default)]
    pub hint_kind: Option<HintKind>,
}

impl StopTemplate {
    pub fn to_stop(&self) -> ColorStop {
        let kind = self.offset_kind.unwrap_or(match self.offset {
            Some(_) => OffsetKind::Relative,
            None => OffsetKind::Auto,
        });
        let offset = self.offset.unwrap_or(0.0);
        let stop = ColorStop::with_opacity(self.color, self.opacity, offset, kind);
        match self.hint {
            Some(hint) => stop.hint(hint, self.hint_kind.unwrap_or(HintKind::RelativeBetweenColors)),
            None => stop,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum VectorTemplate {
    /// `{ "from": [x0, y0], "to": [x1, y1] }`
    Explicit { from: [f64; 2], to: [f64; 2] },
    /// `{ "direction": "to bottom left" }`
    Direction { direction: String },
    /// `{ "angle": 0.785 }` in radians
    Rotation { angle: f64 },
}

impl VectorTemplate {
    pub fn to_strategy(&self) -> Result<VectorStrategy, String> {
        Ok(match self {
            VectorTemplate::Explicit { from, to } => VectorStrategy::Explicit {
                start: Point::new(from[0], from[1]),
                end: Point::new(to[0], to[1]),
            },
            VectorTemplate::Direction { direction } => {
                VectorStrategy::Directional(direction.parse::<Direction>()?)
            }
            VectorTemplate::Rotation { angle } => VectorStrategy::Rotation(*angle),
        })
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GradientTemplate {
    pub stops: Vec<StopTemplate>,
    #[serde(default)]
    pub spread: SpreadMethod,
    #[serde(default)]
    pub vector: Option<VectorTemplate>,
    #[serde(default)]
    pub transform: Option<Vec<f64>>,
}

impl GradientTemplate {
    pub fn from_json(json: &str) -> Result<Self, GradientError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, GradientError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builder configured from this template. An unknown direction name
    /// falls back to the default direction.
    pub fn to_builder(&self) -> Result<LinearGradientBuilder, GradientError> {
        let mut builder = LinearGradientBuilder::new()
            .add_stops(self.stops.iter().map(StopTemplate::to_stop))
            .spread_method(self.spread);
        if let Some(vector) = &self.vector {
            match vector.to_strategy() {
                Ok(strategy) => builder = builder.vector(strategy),
                Err(reason) => log::warn!("{}, using default direction", reason),
            }
        }
        if let Some(coeffs) = &self.transform {
            builder = builder.gradient_transform(affine_from_slice(coeffs)?);
        }
        Ok(builder)
    }
}
