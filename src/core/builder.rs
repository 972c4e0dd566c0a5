//! Linear gradient builder: collects stops, spread and vector settings,
//! then turns them into an axial shading for a given region.

use kurbo::{Affine, Point, Rect};

use crate::core::color::Color;
use crate::core::coverage::{coordinates_for_domain, covering_domain};
use crate::core::function::StitchingFunction;
use crate::core::geometry::{bounding_box, corners, invert, ZERO_EPSILON};
use crate::core::normalize::normalize_stops;
use crate::core::shading::{AxialShading, ShadingSink};
use crate::core::spread::{apply_spread, SpreadMethod};
use crate::core::stop::{ColorStop, OffsetKind};
use crate::core::strategy::{Direction, VectorStrategy};

/// Configuration of a linear gradient.
///
/// Setters can be called any number of times in any order; building
/// only reads the configuration, so one builder can produce shadings for
/// many regions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearGradientBuilder {
    stops: Vec<ColorStop>,
    spread: SpreadMethod,
    strategy: VectorStrategy,
    gradient_transform: Option<Affine>,
}

impl LinearGradientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_stop(mut self, stop: ColorStop) -> Self {
        self.stops.push(stop);
        self
    }

    pub fn add_stops(mut self, stops: impl IntoIterator<Item = ColorStop>) -> Self {
        self.stops.extend(stops);
        self
    }

    pub fn spread_method(mut self, spread: SpreadMethod) -> Self {
        self.spread = spread;
        self
    }

    pub fn vector(mut self, strategy: VectorStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Fixed gradient vector from `(x0, y0)` to `(x1, y1)`.
    pub fn gradient_vector(self, x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        self.vector(VectorStrategy::Explicit {
            start: Point::new(x0, y0),
            end: Point::new(x1, y1),
        })
    }

    pub fn direction(self, direction: Direction) -> Self {
        self.vector(VectorStrategy::Directional(direction))
    }

    /// Vector through the region's center, `angle` radians counter-clockwise
    /// from bottom-to-top.
    pub fn rotation(self, angle: f64) -> Self {
        self.vector(VectorStrategy::Rotation(angle))
    }

    /// Maps gradient vector space into the current space.
    pub fn gradient_transform(mut self, transform: Affine) -> Self {
        self.gradient_transform = Some(transform);
        self
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    pub fn spread(&self) -> SpreadMethod {
        self.spread
    }

    pub fn strategy(&self) -> &VectorStrategy {
        &self.strategy
    }

    /// Builds the shading that paints `region` (in current space, with
    /// `context` mapping current space to the page).
    ///
    /// `None` means there is no color to paint: no stops, no vector, or a
    /// `None` spread that misses the region.
    pub fn build_shading(&self, region: Option<&Rect>, context: Option<&Affine>) -> Option<AxialShading> {
        let Some(base) = self.strategy.vector(region, context) else {
            log::debug!("no gradient vector for region {:?}", region);
            return None;
        };
        if self.stops.is_empty() {
            log::debug!("gradient has no color stops");
            return None;
        }

        let mut matrix = context.copied().unwrap_or(Affine::IDENTITY);
        let mut region = region.copied();
        if let Some(transform) = self.gradient_transform {
            match invert(&transform) {
                Ok(inverse) => {
                    region = region.map(|r| bounding_box(&corners(&r).map(|p| inverse * p)));
                    matrix = matrix * transform;
                }
                Err(err) => log::warn!("ignoring gradient transform: {}", err),
            }
        }

        let (stops, coords, domain) = resolve(&self.stops, base, region.as_ref(), self.spread)?;
        log::trace!("linear gradient resolved to {} stops over {:?}", stops.len(), domain);

        Some(AxialShading {
            color_space: "DeviceRGB",
            coords,
            domain,
            function: StitchingFunction::from_stops(&stops),
            matrix,
        })
    }

    /// Builds the shading and hands it to `sink`, returning its pattern color.
    pub fn build_color<S: ShadingSink>(
        &self,
        region: Option<&Rect>,
        context: Option<&Affine>,
        sink: &mut S,
    ) -> Option<S::Pattern> {
        let shading = self.build_shading(region, context)?;
        let matrix = Some(shading.matrix).filter(|m| *m != Affine::IDENTITY);
        let handle = sink.axial_shading(&shading);
        Some(sink.shading_pattern(handle, matrix))
    }
}

/// Final stops, shading coordinates and domain for `base` over `region`.
fn resolve(
    stops: &[ColorStop],
    base: [Point; 2],
    region: Option<&Rect>,
    spread: SpreadMethod,
) -> Option<(Vec<ColorStop>, [Point; 2], [f64; 2])> {
    let length = base[0].distance(base[1]);
    let normalized = normalize_stops(stops, length);
    let last = normalized.last()?;

    if length < ZERO_EPSILON || normalized.len() == 1 {
        if spread == SpreadMethod::None {
            log::debug!("single color gradient with no spread paints nothing");
            return None;
        }
        // one flat color across the whole region
        let coords = match region {
            Some(r) => [Point::new(r.x0, r.y0), Point::new(r.x1, r.y0)],
            None => base,
        };
        let flat = vec![
            ColorStop::relocated(last, 0.0, OffsetKind::Relative),
            ColorStop::relocated(last, 1.0, OffsetKind::Relative),
        ];
        return Some((flat, coords, [0.0, 1.0]));
    }

    let coverage = covering_domain(base, region);
    let Some(spread_stops) = apply_spread(normalized, coverage, spread) else {
        log::debug!("gradient stops do not reach the covered domain {:?}", coverage);
        return None;
    };
    debug_assert!(spread_stops.domain[0] <= spread_stops.domain[1]);
    let coords = coordinates_for_domain(spread_stops.domain, base);
    Some((spread_stops.stops, coords, spread_stops.domain))
}

/// Two-color shorthand: `from` at the start of the vector, `to` at its end.
pub fn two_color(from: Color, to: Color) -> LinearGradientBuilder {
    LinearGradientBuilder::new()
        .add_stop(ColorStop::new(from, 0.0, OffsetKind::Relative))
        .add_stop(ColorStop::new(to, 1.0, OffsetKind::Relative))
}
