//! Piecewise color functions in the shape PDF shadings expect: a Type 3
//! stitching function over Type 2 exponential segments.

use crate::core::color::Color;
use crate::core::geometry::ZERO_EPSILON;
use crate::core::stop::{ColorStop, HintKind};
use crate::core::writer::PdfObject;

/// Type 2 function: `C0 + t^N * (C1 - C0)` for `t` in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExponentialSegment {
    pub c0: Color,
    pub c1: Color,
    pub exponent: f64,
}

impl ExponentialSegment {
    /// Segment between two neighbouring stops, honouring the hint of `from`.
    ///
    /// The exponent puts the half-way blend at the hint position. A hint
    /// at either end turns the segment into a flat color.
    pub fn between(from: &ColorStop, to: &ColorStop) -> Self {
        let mut c0 = from.color();
        let mut c1 = to.color();
        let mut exponent = 1.0;
        if from.hint_kind() == HintKind::RelativeBetweenColors {
            let hint = from.hint_offset();
            if hint <= ZERO_EPSILON {
                c0 = c1;
            } else if hint >= 1.0 - ZERO_EPSILON {
                c1 = c0;
            } else {
                exponent = 0.5f64.ln() / hint.ln();
            }
        }
        ExponentialSegment { c0, c1, exponent }
    }

    pub fn evaluate(&self, t: f64) -> [f64; 3] {
        let factor = t.clamp(0.0, 1.0).powf(self.exponent);
        let (from, to) = (self.c0.to_array(), self.c1.to_array());
        [0, 1, 2].map(|i| from[i] + factor * (to[i] - from[i]))
    }

    pub fn to_pdf_object(&self) -> PdfObject {
        PdfObject::dict(vec![
            ("FunctionType", PdfObject::Integer(2)),
            ("Domain", PdfObject::reals(&[0.0, 1.0])),
            ("C0", PdfObject::reals(&self.c0.to_array())),
            ("C1", PdfObject::reals(&self.c1.to_array())),
            ("N", PdfObject::Real(self.exponent)),
        ])
    }
}

/// Type 3 function gluing `N - 1` segments together over `N` stops.
#[derive(Debug, Clone, PartialEq)]
pub struct StitchingFunction {
    pub domain: [f64; 2],
    /// Interior stop offsets, one fewer than segments.
    pub bounds: Vec<f64>,
    pub segments: Vec<ExponentialSegment>,
}

impl StitchingFunction {
    /// Builds the function for `stops`, which must hold at least two
    /// stops with non-decreasing offsets.
    pub fn from_stops(stops: &[ColorStop]) -> Self {
        debug_assert!(stops.len() >= 2);
        let segments = stops
            .windows(2)
            .map(|pair| ExponentialSegment::between(&pair[0], &pair[1]))
            .collect();
        let bounds = match stops {
            [_, interior @ .., _] => interior.iter().map(ColorStop::offset).collect(),
            _ => Vec::new(),
        };
        let domain = match (stops.first(), stops.last()) {
            (Some(first), Some(last)) => [first.offset(), last.offset()],
            _ => [0.0, 1.0],
        };
        StitchingFunction { domain, bounds, segments }
    }

    /// `[0 1]` for every segment
    pub fn encode(&self) -> Vec<f64> {
        self.segments.iter().flat_map(|_| [0.0, 1.0]).collect()
    }

    /// Color at `t`, following the PDF stitching rules: `t` is clamped to
    /// the domain and a bound belongs to the segment on its right.
    pub fn evaluate(&self, t: f64) -> [f64; 3] {
        let t = t.clamp(self.domain[0], self.domain[1]);
        let index = self.bounds.iter().take_while(|bound| t >= **bound).count();
        let index = index.min(self.segments.len().saturating_sub(1));
        let low = if index == 0 { self.domain[0] } else { self.bounds[index - 1] };
        let high = self.bounds.get(index).copied().unwrap_or(self.domain[1]);
        let local = if high - low > 0.0 { (t - low) / (high - low) } else { 0.0 };
        match self.segments.get(index) {
            Some(segment) => segment.evaluate(local),
            None => [0.0; 3],
        }
    }

    pub fn to_pdf_object(&self) -> PdfObject {
        PdfObject::dict(vec![
            ("FunctionType", PdfObject::Integer(3)),
            ("Domain", PdfObject::reals(&self.domain)),
            (
                "Functions",
                PdfObject::Array(self.segments.iter().map(|s| s.to_pdf_object()).collect()),
            ),
            ("Bounds", PdfObject::reals(&self.bounds)),
            ("Encode", PdfObject::reals(&self.encode())),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::stop::OffsetKind;

    fn stop(color: Color, offset: f64) -> ColorStop {
        ColorStop::new(color, offset, OffsetKind::Relative)
    }

    fn hinted(hint: f64) -> ExponentialSegment {
        let from = stop(Color::red(), 0.0).hint(hint, HintKind::RelativeBetweenColors);
        ExponentialSegment::between(&from, &stop(Color::blue(), 1.0))
    }

    #[test]
    fn test_two_stops_single_linear_segment() {
        let f = StitchingFunction::from_stops(&[stop(Color::red(), 0.0), stop(Color::blue(), 1.0)]);
        assert_eq!(f.segments.len(), 1);
        assert_eq!(f.segments[0].exponent, 1.0);
        assert_eq!(f.domain, [0.0, 1.0]);
        assert!(f.bounds.is_empty());
        assert_eq!(f.encode(), vec![0.0, 1.0]);
    }

    #[test]
    fn test_bounds_are_interior_offsets() {
        let f = StitchingFunction::from_stops(&[
            stop(Color::red(), -0.5),
            stop(Color::green(), 0.25),
            stop(Color::green(), 0.25),
            stop(Color::blue(), 2.0),
        ]);
        assert_eq!(f.domain, [-0.5, 2.0]);
        assert_eq!(f.bounds, vec![0.25, 0.25]);
        assert_eq!(f.segments.len(), 3);
        assert_eq!(f.encode().len(), 6);
    }

    #[test]
    fn test_hint_at_edges_is_flat() {
        let start = hinted(0.0);
        assert_eq!((start.c0, start.c1), (Color::blue(), Color::blue()));
        let end = hinted(1.0);
        assert_eq!((end.c0, end.c1), (Color::red(), Color::red()));
    }

    #[test]
    fn test_mid_hint_is_linear() {
        assert!((hinted(0.5).exponent - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_hint_places_half_blend() {
        let segment = hinted(0.2);
        let [r, _, b] = segment.evaluate(0.2);
        assert!((r - 0.5).abs() < 1e-9 && (b - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_evaluate_picks_segment_right_of_bound() {
        let f = StitchingFunction::from_stops(&[
            stop(Color::red(), 0.0),
            stop(Color::red(), 0.5),
            stop(Color::blue(), 0.5),
            stop(Color::blue(), 1.0),
        ]);
        assert_eq!(f.evaluate(0.49), Color::red().to_array());
        assert_eq!(f.evaluate(0.5), Color::blue().to_array());
        assert_eq!(f.evaluate(5.0), Color::blue().to_array());
    }

    #[test]
    fn test_pdf_dictionary() {
        let f = StitchingFunction::from_stops(&[
            stop(Color::white(), 0.0),
            stop(Color::gray(0.5), 0.5),
            stop(Color::black(), 1.0),
        ]);
        let pdf = f.to_pdf_object().to_pdf_string();
        assert!(pdf.starts_with("<< /FunctionType 3 /Domain [0 1]"));
        assert!(pdf.contains("/Bounds [0.5] /Encode [0 1 0 1]"));
        assert!(pdf.contains("/C0 [1 1 1] /C1 [0.5 0.5 0.5] /N 1"));
    }
}
