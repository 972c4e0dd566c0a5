//! Linear gradients for PDF: color-stop normalization, spread handling
//! and the axial shading (with its stitching function) that paints a
//! region.
//!
//! ```no_run
//! use pdf_gradients::{two_color, Color, Direction, Document, SpreadMethod};
//!
//! let gradient = two_color(Color::red(), Color::blue())
//!     .direction(Direction::ToTopRight)
//!     .spread_method(SpreadMethod::Pad);
//! Document::with_gradient_page(&gradient, 595.0, 842.0)
//!     .write_to("gradient.pdf")
//!     .unwrap();
//! ```

pub mod core;

#[cfg(feature = "node")]
mod node;

#[cfg(target_arch = "wasm32")]
mod wasm;

pub use kurbo::{Affine, Point, Rect};

pub use crate::core::builder::{two_color, LinearGradientBuilder};
pub use crate::core::color::Color;
pub use crate::core::document::{Document, ShadingId};
pub use crate::core::error::GradientError;
pub use crate::core::function::{ExponentialSegment, StitchingFunction};
pub use crate::core::geometry::ZERO_EPSILON;
pub use crate::core::page::{Page, PatternId};
pub use crate::core::shading::{AxialShading, ShadingSink};
pub use crate::core::spread::SpreadMethod;
pub use crate::core::stop::{ColorStop, HintKind, OffsetKind};
pub use crate::core::strategy::{Direction, VectorStrategy};
pub use crate::core::template::GradientTemplate;
