//! Which part of the gradient axis must be painted to fill a region.

use kurbo::{Affine, Point, Rect};

use crate::core::geometry::{corners, ZERO_EPSILON};

/// Transform that sends `start` to the origin and `end` to `(1, 0)`.
///
/// Directions within [`ZERO_EPSILON`] of an axis are snapped onto it so the
/// projected coordinates carry no rotation noise.
pub fn unit_vector_transform(start: Point, end: Point) -> Affine {
    let scale = 1.0 / start.distance(end);
    let mut sin = -(end.y - start.y) * scale;
    let mut cos = (end.x - start.x) * scale;
    if cos.abs() < ZERO_EPSILON {
        cos = 0.0;
        sin = if sin > 0.0 { 1.0 } else { -1.0 };
    } else if sin.abs() < ZERO_EPSILON {
        sin = 0.0;
        cos = if cos > 0.0 { 1.0 } else { -1.0 };
    }
    Affine::new([cos, sin, -sin, cos, 0.0, 0.0])
        * Affine::scale(scale)
        * Affine::translate(-start.to_vec2())
}

/// Interval of the gradient axis, in units where `vector` spans `[0, 1]`,
/// whose projection covers every corner of `region`.
///
/// Without a region there is nothing to clip against and `[0, 1]` is returned.
/// `vector` must not be degenerate.
pub fn covering_domain(vector: [Point; 2], region: Option<&Rect>) -> [f64; 2] {
    let Some(region) = region else {
        return [0.0, 1.0];
    };
    let transform = unit_vector_transform(vector[0], vector[1]);
    corners(region)
        .iter()
        .map(|corner| (transform * *corner).x)
        .fold([f64::INFINITY, f64::NEG_INFINITY], |[min, max], x| {
            [min.min(x), max.max(x)]
        })
}

/// Moves the endpoints of `vector` so that `domain` maps onto them.
pub fn coordinates_for_domain(domain: [f64; 2], vector: [Point; 2]) -> [Point; 2] {
    let along = vector[1] - vector[0];
    [vector[0] + along * domain[0], vector[1] + along * (domain[1] - 1.0)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::rect_from_xywh;

    fn assert_close(actual: [f64; 2], expected: [f64; 2]) {
        assert!(
            (actual[0] - expected[0]).abs() < 1e-9 && (actual[1] - expected[1]).abs() < 1e-9,
            "{actual:?} vs {expected:?}"
        );
    }

    #[test]
    fn test_no_region_is_unit_domain() {
        let vector = [Point::new(0.0, 0.0), Point::new(5.0, 5.0)];
        assert_eq!(covering_domain(vector, None), [0.0, 1.0]);
    }

    #[test]
    fn test_unit_transform_maps_endpoints() {
        let start = Point::new(10.0, 20.0);
        let end = Point::new(13.0, 24.0);
        let t = unit_vector_transform(start, end);
        let s = t * start;
        let e = t * end;
        assert!(s.x.abs() < 1e-9 && s.y.abs() < 1e-9);
        assert!((e.x - 1.0).abs() < 1e-9 && e.y.abs() < 1e-9);
    }

    #[test]
    fn test_near_axis_vector_is_snapped() {
        let start = Point::new(0.0, 0.0);
        let end = Point::new(1e-12, 1.0);
        let t = unit_vector_transform(start, end);
        let [a, b, c, d, _, _] = t.as_coeffs();
        assert_eq!((a, d), (0.0, 0.0));
        assert_eq!((b.abs(), c.abs()), (1.0, 1.0));

        let region = rect_from_xywh(-3.0, -2.0, 6.0, 4.0);
        for corner in corners(&region) {
            let projected = t * corner;
            assert_eq!(projected.y, -corner.x);
            assert_eq!(projected.x, corner.y);
        }
        assert_eq!(covering_domain([start, end], Some(&region)), [-2.0, 2.0]);
    }

    #[test]
    fn test_axis_aligned_domain() {
        let region = rect_from_xywh(0.0, 0.0, 100.0, 50.0);
        let vector = [Point::new(25.0, 0.0), Point::new(75.0, 0.0)];
        assert_close(covering_domain(vector, Some(&region)), [-0.5, 1.5]);

        // reversed vertical vector
        let vector = [Point::new(0.0, 50.0), Point::new(0.0, 0.0)];
        assert_close(covering_domain(vector, Some(&region)), [0.0, 1.0]);
    }

    #[test]
    fn test_diagonal_domain() {
        let region = rect_from_xywh(0.0, 0.0, 1.0, 1.0);
        let vector = [Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        assert_close(covering_domain(vector, Some(&region)), [0.0, 1.0]);
    }

    #[test]
    fn test_domain_contains_all_corner_projections() {
        let region = rect_from_xywh(-3.0, 7.0, 11.0, 4.0);
        for i in 0..24 {
            let angle = i as f64 * std::f64::consts::PI / 12.0;
            let start = Point::new(1.0, 2.0);
            let end = start + kurbo::Vec2::new(angle.cos(), angle.sin()) * 3.0;
            let [lo, hi] = covering_domain([start, end], Some(&region));
            assert!(lo <= hi);
            let t = unit_vector_transform(start, end);
            for corner in corners(&region) {
                let x = (t * corner).x;
                assert!(x >= lo - 1e-9 && x <= hi + 1e-9);
            }
        }
    }

    #[test]
    fn test_coordinates_for_domain() {
        let vector = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let [a, b] = coordinates_for_domain([-0.5, 2.0], vector);
        assert!((a.x + 5.0).abs() < 1e-9 && (b.x - 20.0).abs() < 1e-9);
        assert_eq!(coordinates_for_domain([0.0, 1.0], vector), vector);
    }
}
