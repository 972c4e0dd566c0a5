use napi::bindgen_prelude::Buffer;
use napi::{Error, Result};
use napi_derive::napi;

use crate::core::builder::LinearGradientBuilder as CoreBuilder;
use crate::core::color::Color;
use crate::core::document::Document;
use crate::core::error::GradientError;
use crate::core::spread::SpreadMethod;
use crate::core::stop::{ColorStop, HintKind, OffsetKind};
use crate::core::strategy::Direction;
use crate::core::template::GradientTemplate;

// Helper to map gradient errors to N-API errors
fn map_err(e: GradientError) -> Error {
    Error::from_reason(e.to_string())
}

/// Linear gradient that can be rendered into a PDF page
#[napi]
pub struct LinearGradient {
    inner: CoreBuilder,
}

#[napi]
impl LinearGradient {
    #[napi(constructor)]
    pub fn new() -> Self {
        LinearGradient { inner: CoreBuilder::new() }
    }

    /// Load a gradient description from JSON
    #[napi(factory)]
    pub fn from_json(json: String) -> Result<Self> {
        let template = GradientTemplate::from_json(&json).map_err(map_err)?;
        let inner = template.to_builder().map_err(map_err)?;
        Ok(LinearGradient { inner })
    }

    /// Add a color stop. Without an offset the stop is placed automatically;
    /// `absolute` measures the offset in user space units. `hint` is the
    /// transition midpoint (0..1) towards the next stop.
    #[napi]
    pub fn add_stop(
        &mut self,
        r: f64,
        g: f64,
        b: f64,
        offset: Option<f64>,
        absolute: Option<bool>,
        hint: Option<f64>,
    ) {
        let color = Color::rgb(r, g, b);
        let mut stop = match (offset, absolute.unwrap_or(false)) {
            (None, _) => ColorStop::auto(color),
            (Some(offset), true) => ColorStop::new(color, offset, OffsetKind::Absolute),
            (Some(offset), false) => ColorStop::new(color, offset, OffsetKind::Relative),
        };
        if let Some(hint) = hint {
            stop = stop.hint(hint, HintKind::RelativeBetweenColors);
        }
        self.update(|builder| builder.add_stop(stop));
    }

    /// "pad", "reflect", "repeat" or "none"
    #[napi]
    pub fn set_spread(&mut self, spread: String) {
        self.update(|builder| builder.spread_method(SpreadMethod::from_name(&spread)));
    }

    #[napi]
    pub fn set_vector(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) {
        self.update(|builder| builder.gradient_vector(x0, y0, x1, y1));
    }

    /// CSS-like direction, e.g. "to top right"
    #[napi]
    pub fn set_direction(&mut self, direction: String) -> Result<()> {
        let direction = direction.parse::<Direction>().map_err(Error::from_reason)?;
        self.update(|builder| builder.direction(direction));
        Ok(())
    }

    /// Angle in radians, counter-clockwise, 0 = bottom to top
    #[napi]
    pub fn set_rotation(&mut self, angle: f64) {
        self.update(|builder| builder.rotation(angle));
    }

    /// Render a single page filled with the gradient and return the PDF bytes
    #[napi]
    pub fn render_pdf(&self, width: f64, height: f64) -> Result<Buffer> {
        let bytes = Document::with_gradient_page(&self.inner, width, height)
            .to_bytes()
            .map_err(map_err)?;
        Ok(bytes.into())
    }

    /// Write a single gradient page to a file
    #[napi]
    pub fn write_pdf(&self, path: String, width: f64, height: f64) -> Result<()> {
        Document::with_gradient_page(&self.inner, width, height)
            .write_to(&path)
            .map_err(map_err)
    }
}

impl LinearGradient {
    fn update(&mut self, f: impl FnOnce(CoreBuilder) -> CoreBuilder) {
        let builder = std::mem::take(&mut self.inner);
        self.inner = f(builder);
    }
}
