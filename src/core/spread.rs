//! Spread policies: how a gradient paints outside its first and last stop.

use serde::{Deserialize, Serialize};

use crate::core::geometry::ZERO_EPSILON;
use crate::core::stop::{ColorStop, OffsetKind};

/// What happens outside the interval covered by the color stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum SpreadMethod {
    /// Extend the edge colors outward.
    Pad,
    /// Mirror the stop sequence every period.
    Reflect,
    /// Tile the stop sequence every period.
    Repeat,
    /// Paint nothing outside the stops.
    #[default]
    None,
}

impl SpreadMethod {
    /// Parses `pad`, `reflect`, `repeat` or `none` (case-insensitive).
    /// Anything else, like a missing value, means [`SpreadMethod::None`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "pad" => SpreadMethod::Pad,
            "reflect" => SpreadMethod::Reflect,
            "repeat" => SpreadMethod::Repeat,
            _ => SpreadMethod::None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SpreadMethod::Pad => "pad",
            SpreadMethod::Reflect => "reflect",
            SpreadMethod::Repeat => "repeat",
            SpreadMethod::None => "none",
        }
    }
}

impl From<Option<String>> for SpreadMethod {
    fn from(name: Option<String>) -> Self {
        name.as_deref().map_or(SpreadMethod::None, SpreadMethod::from_name)
    }
}

impl From<SpreadMethod> for String {
    fn from(method: SpreadMethod) -> Self {
        method.name().to_string()
    }
}

/// Stops and axis interval ready to be turned into a shading.
#[derive(Debug, Clone, PartialEq)]
pub struct SpreadStops {
    pub stops: Vec<ColorStop>,
    pub domain: [f64; 2],
}

/// Fits normalized `stops` to the `coverage` interval under `method`.
///
/// Returns `None` when nothing would be painted: a `None` spread whose
/// stops have no width or overlap the covered interval in less than a
/// positive width.
pub fn apply_spread(
    stops: Vec<ColorStop>,
    coverage: [f64; 2],
    method: SpreadMethod,
) -> Option<SpreadStops> {
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(first), Some(last)) => (first.offset(), last.offset()),
        _ => return None,
    };

    match method {
        SpreadMethod::None => {
            let domain = [coverage[0].max(first), coverage[1].min(last)];
            if last - first < ZERO_EPSILON || domain[1] - domain[0] < ZERO_EPSILON {
                return None;
            }
            Some(SpreadStops { stops, domain })
        }
        SpreadMethod::Pad => Some(SpreadStops {
            stops: pad_stops(stops, coverage),
            domain: coverage,
        }),
        SpreadMethod::Repeat | SpreadMethod::Reflect => Some(SpreadStops {
            stops: tile_stops(&stops, coverage, method == SpreadMethod::Reflect),
            domain: coverage,
        }),
    }
}

/// Adds a stop at each edge of `coverage` that lies beyond the stops,
/// repeating the edge color.
pub fn pad_stops(mut stops: Vec<ColorStop>, coverage: [f64; 2]) -> Vec<ColorStop> {
    if let Some(first) = stops.first() {
        if coverage[0] < first.offset() {
            let edge = ColorStop::relocated(first, coverage[0], OffsetKind::Relative);
            stops.insert(0, edge);
        }
    }
    if let Some(last) = stops.last() {
        if coverage[1] > last.offset() {
            let edge = ColorStop::relocated(last, coverage[1], OffsetKind::Relative);
            stops.push(edge);
        }
    }
    stops
}

/// Repeats the stop period across `coverage`, every other period mirrored
/// when `reflect` is set. At most one stop is kept left of `coverage`.
fn tile_stops(stops: &[ColorStop], coverage: [f64; 2], reflect: bool) -> Vec<ColorStop> {
    let count = stops.len();
    let start = stops[0].offset();
    let end = stops[count - 1].offset();
    let period = end - start;
    if period < ZERO_EPSILON {
        let last = &stops[count - 1];
        return vec![
            ColorStop::relocated(last, coverage[0], OffsetKind::Relative),
            ColorStop::relocated(last, coverage[1], OffsetKind::Relative),
        ];
    }

    let start_shift = ((coverage[0] - start) / period).floor();
    let mut period_offset = start + period * start_shift;
    let mut backward = reflect && start_shift.abs() % 2.0 != 0.0;
    let mut index = if backward { count - 1 } else { 0 };

    let mut left_of_coverage: Option<ColorStop> = None;
    let mut visible = Vec::new();
    let mut offset = period_offset;
    while offset <= coverage[1] {
        let current = &stops[index];
        offset = if backward {
            period_offset + end - current.offset()
        } else {
            period_offset + current.offset() - start
        };
        let mut tiled = ColorStop::relocated(current, offset, OffsetKind::Relative);

        if backward {
            if index == 0 {
                period_offset += period;
                backward = false;
                index = 1;
            } else {
                index -= 1;
            }
        } else {
            index += 1;
            if index == count {
                period_offset += period;
                backward = reflect;
                index = if backward { count - 2 } else { 0 };
            }
        }

        // walking backwards, the segment ahead is described by the hint of
        // the stop we move to, seen from its other end
        if backward {
            let next = &stops[index];
            tiled.set_hint(1.0 - next.hint_offset(), next.hint_kind());
        } else {
            tiled.set_hint(current.hint_offset(), current.hint_kind());
        }

        if offset < coverage[0] {
            left_of_coverage = Some(tiled);
        } else {
            visible.push(tiled);
        }
    }

    left_of_coverage.into_iter().chain(visible).collect()
}
