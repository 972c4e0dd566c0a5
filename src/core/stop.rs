use serde::{Deserialize, Serialize};

use crate::core::color::{clamp_unit, Color};

/// How a stop's offset is measured along the gradient vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OffsetKind {
    /// Units along the untransformed gradient vector.
    Absolute,
    /// Computed from the neighbouring stops.
    #[default]
    Auto,
    /// 0 is the vector start, 1 the vector end.
    Relative,
}

/// How a stop's color hint (transition midpoint) is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HintKind {
    AbsoluteOnGradient,
    /// 0..1 over the whole gradient vector.
    RelativeOnGradient,
    /// 0..1 between this stop and the next one.
    RelativeBetweenColors,
    #[default]
    None,
}

/// One color stop of a gradient.
///
/// Color and opacity are fixed at construction. The offset and the hint
/// are always set together with their kind, and an `Auto` offset or a
/// `None` hint stores 0.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorStop {
    color: Color,
    opacity: f64,
    offset: f64,
    offset_kind: OffsetKind,
    hint_offset: f64,
    hint_kind: HintKind,
}

impl ColorStop {
    /// Opaque stop whose offset is resolved from its neighbours.
    pub fn auto(color: Color) -> Self {
        Self::with_opacity(color, 1.0, 0.0, OffsetKind::Auto)
    }

    pub fn new(color: Color, offset: f64, kind: OffsetKind) -> Self {
        Self::with_opacity(color, 1.0, offset, kind)
    }

    pub fn with_opacity(color: Color, opacity: f64, offset: f64, kind: OffsetKind) -> Self {
        let mut stop = ColorStop {
            color,
            opacity: clamp_unit(opacity),
            offset: 0.0,
            offset_kind: OffsetKind::Auto,
            hint_offset: 0.0,
            hint_kind: HintKind::None,
        };
        stop.set_offset(offset, kind);
        stop
    }

    /// Copy of `base` (same color and opacity) at a new offset, without hint.
    pub fn relocated(base: &ColorStop, offset: f64, kind: OffsetKind) -> Self {
        Self::with_opacity(base.color, base.opacity, offset, kind)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Carried along with the stop but not applied to rendering yet.
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn offset_kind(&self) -> OffsetKind {
        self.offset_kind
    }

    pub fn hint_offset(&self) -> f64 {
        self.hint_offset
    }

    pub fn hint_kind(&self) -> HintKind {
        self.hint_kind
    }

    pub fn set_offset(&mut self, offset: f64, kind: OffsetKind) -> &mut Self {
        self.offset = if kind == OffsetKind::Auto { 0.0 } else { offset };
        self.offset_kind = kind;
        self
    }

    pub fn set_hint(&mut self, hint_offset: f64, kind: HintKind) -> &mut Self {
        self.hint_offset = if kind == HintKind::None { 0.0 } else { hint_offset };
        self.hint_kind = kind;
        self
    }

    /// Builder-style variant of [`ColorStop::set_hint`].
    pub fn hint(mut self, hint_offset: f64, kind: HintKind) -> Self {
        self.set_hint(hint_offset, kind);
        self
    }
}
