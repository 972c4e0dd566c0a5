//! Thin helpers over `kurbo` for the PDF (y-up) coordinate space.

use kurbo::{Affine, Point, Rect};

use crate::core::error::GradientError;

/// Tolerance for every "is this zero" decision in the gradient engine.
pub const ZERO_EPSILON: f64 = 1e-10;

/// Inverts `transform`, failing instead of producing infinities.
pub fn invert(transform: &Affine) -> Result<Affine, GradientError> {
    let determinant = transform.determinant();
    if !determinant.is_finite() || determinant.abs() < ZERO_EPSILON {
        return Err(GradientError::NonInvertible { determinant });
    }
    Ok(transform.inverse())
}

/// Builds an affine transform from the six PDF matrix numbers `[a b c d e f]`.
pub fn affine_from_slice(coeffs: &[f64]) -> Result<Affine, GradientError> {
    let coeffs: [f64; 6] = coeffs
        .try_into()
        .map_err(|_| GradientError::InvalidTransform(coeffs.len()))?;
    Ok(Affine::new(coeffs))
}

/// Rectangle from a PDF style origin and size.
pub fn rect_from_xywh(x: f64, y: f64, width: f64, height: f64) -> Rect {
    Rect::new(x, y, x + width, y + height).abs()
}

/// Corners in order: left-bottom, left-top, right-top, right-bottom.
pub fn corners(rect: &Rect) -> [Point; 4] {
    let rect = rect.abs();
    [
        Point::new(rect.x0, rect.y0),
        Point::new(rect.x0, rect.y1),
        Point::new(rect.x1, rect.y1),
        Point::new(rect.x1, rect.y0),
    ]
}

/// Smallest axis-aligned rectangle containing every point.
pub fn bounding_box(points: &[Point]) -> Rect {
    let Some(first) = points.first() else {
        return Rect::ZERO;
    };
    points
        .iter()
        .skip(1)
        .fold(Rect::from_points(*first, *first), |bbox, p| bbox.union_pt(*p))
}
