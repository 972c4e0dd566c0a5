use wasm_bindgen::prelude::*;

use crate::core::builder::LinearGradientBuilder as CoreBuilder;
use crate::core::color::Color;
use crate::core::document::Document as CoreDocument;
use crate::core::page::Page as CorePage;
use crate::core::spread::SpreadMethod;
use crate::core::stop::{ColorStop, HintKind, OffsetKind};
use crate::core::strategy::Direction;
use crate::core::template::GradientTemplate;

fn to_js(e: impl ToString) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct WasmLinearGradient {
    inner: CoreBuilder,
}

#[wasm_bindgen]
impl WasmLinearGradient {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmLinearGradient {
        WasmLinearGradient { inner: CoreBuilder::new() }
    }

    #[wasm_bindgen]
    pub fn from_json(json: &str) -> Result<WasmLinearGradient, JsValue> {
        let template = GradientTemplate::from_json(json).map_err(to_js)?;
        let inner = template.to_builder().map_err(to_js)?;
        Ok(WasmLinearGradient { inner })
    }

    /// `offset` is relative to the gradient vector unless `absolute` is set;
    /// pass `undefined` for an automatically placed stop.
    #[wasm_bindgen]
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
        let mut stop = match offset {
            None => ColorStop::auto(color),
            Some(offset) if absolute.unwrap_or(false) => ColorStop::new(color, offset, OffsetKind::Absolute),
            Some(offset) => ColorStop::new(color, offset, OffsetKind::Relative),
        };
        if let Some(hint) = hint {
            stop = stop.hint(hint, HintKind::RelativeBetweenColors);
        }
        self.update(|builder| builder.add_stop(stop));
    }

    #[wasm_bindgen]
    pub fn set_spread(&mut self, spread: &str) {
        let spread = SpreadMethod::from_name(spread);
        self.update(|builder| builder.spread_method(spread));
    }

    #[wasm_bindgen]
    pub fn set_vector(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) {
        self.update(|builder| builder.gradient_vector(x0, y0, x1, y1));
    }

    #[wasm_bindgen]
    pub fn set_direction(&mut self, direction: &str) -> Result<(), JsValue> {
        let direction = direction.parse::<Direction>().map_err(to_js)?;
        self.update(|builder| builder.direction(direction));
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_rotation(&mut self, angle: f64) {
        self.update(|builder| builder.rotation(angle));
    }

    /// One page of `width` x `height` filled with the gradient, as PDF bytes
    #[wasm_bindgen]
    pub fn render_pdf(&self, width: f64, height: f64) -> Result<Vec<u8>, JsValue> {
        CoreDocument::with_gradient_page(&self.inner, width, height)
            .to_bytes()
            .map_err(to_js)
    }
}

impl WasmLinearGradient {
    fn update(&mut self, f: impl FnOnce(CoreBuilder) -> CoreBuilder) {
        let builder = std::mem::take(&mut self.inner);
        self.inner = f(builder);
    }
}

#[wasm_bindgen]
pub struct WasmDocument {
    inner: CoreDocument,
}

#[wasm_bindgen]
impl WasmDocument {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmDocument {
        WasmDocument { inner: CoreDocument::new() }
    }

    /// Add a page filled with `gradient`; returns false when the gradient
    /// produced no color and the page stays blank.
    #[wasm_bindgen]
    pub fn add_gradient_page(&mut self, gradient: &WasmLinearGradient, width: f64, height: f64) -> bool {
        let mut page = CorePage::new(width, height);
        let area = page.media_box();
        let pattern = gradient.inner.build_color(Some(&area), None, &mut self.inner);
        if let Some(pattern) = pattern {
            page.fill_rect_with_pattern(&area, pattern);
        }
        self.inner.add_page(&page);
        pattern.is_some()
    }

    #[wasm_bindgen]
    pub fn save(&self) -> Result<Vec<u8>, JsValue> {
        self.inner.to_bytes().map_err(to_js)
    }
}
