//! Where the gradient vector comes from: fixed points, a named direction
//! over the painted region, or a rotation about the region's center.

use std::str::FromStr;

use kurbo::{Affine, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::core::coverage::{coordinates_for_domain, covering_domain};

/// CSS-like `to <side>` / `to <corner>` directions. Top is the larger y,
/// as in PDF user space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    ToTop,
    #[default]
    ToBottom,
    ToLeft,
    ToRight,
    ToTopLeft,
    ToTopRight,
    ToBottomLeft,
    ToBottomRight,
}

impl FromStr for Direction {
    type Err = String;

    /// Accepts `to top right`, `to-top-right` or `to_top_right`, in any order
    /// of the two sides.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        let words: Vec<&str> = lower
            .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
            .filter(|w| !w.is_empty())
            .collect();
        let sides = match words.as_slice() {
            ["to", sides @ ..] => sides,
            sides => sides,
        };
        let has = |side: &str| sides.contains(&side);
        let direction = match sides.len() {
            1 if has("top") => Direction::ToTop,
            1 if has("bottom") => Direction::ToBottom,
            1 if has("left") => Direction::ToLeft,
            1 if has("right") => Direction::ToRight,
            2 if has("top") && has("left") => Direction::ToTopLeft,
            2 if has("top") && has("right") => Direction::ToTopRight,
            2 if has("bottom") && has("left") => Direction::ToBottomLeft,
            2 if has("bottom") && has("right") => Direction::ToBottomRight,
            _ => return Err(format!("unknown gradient direction '{}'", s)),
        };
        Ok(direction)
    }
}

impl Direction {
    /// Gradient vector across `region` for this direction.
    pub fn vector(&self, region: &Rect) -> [Point; 2] {
        let r = region.abs();
        let center = r.center();
        match self {
            Direction::ToTop => [Point::new(center.x, r.y0), Point::new(center.x, r.y1)],
            Direction::ToBottom => [Point::new(center.x, r.y1), Point::new(center.x, r.y0)],
            Direction::ToLeft => [Point::new(r.x1, center.y), Point::new(r.x0, center.y)],
            Direction::ToRight => [Point::new(r.x0, center.y), Point::new(r.x1, center.y)],
            Direction::ToTopLeft => corner_vector(&r, -1.0, 1.0),
            Direction::ToTopRight => corner_vector(&r, 1.0, 1.0),
            Direction::ToBottomLeft => corner_vector(&r, -1.0, -1.0),
            Direction::ToBottomRight => corner_vector(&r, 1.0, -1.0),
        }
    }
}

/// Vector towards the corner in quadrant `(sx, sy)`. The line through the
/// center perpendicular to it is the diagonal joining the two neighbouring
/// corners, so the vector starts on the opposite corner and ends on the
/// target corner once expanded over the region.
fn corner_vector(region: &Rect, sx: f64, sy: f64) -> [Point; 2] {
    let center = region.center();
    let direction = Vec2::new(sx * region.height(), sy * region.width());
    expand_over(region, [center, center + direction])
}

/// Stretches `base` along its own line until it exactly covers `region`.
/// A degenerate `base` (empty region) is returned unchanged.
fn expand_over(region: &Rect, base: [Point; 2]) -> [Point; 2] {
    if base[0] == base[1] {
        return base;
    }
    coordinates_for_domain(covering_domain(base, Some(region)), base)
}

/// Source of the base gradient vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VectorStrategy {
    /// Fixed points, independent of the painted region.
    Explicit { start: Point, end: Point },
    Directional(Direction),
    /// Radians, counter-clockwise; 0 paints bottom to top.
    Rotation(f64),
}

impl Default for VectorStrategy {
    fn default() -> Self {
        VectorStrategy::Directional(Direction::default())
    }
}

impl VectorStrategy {
    /// Base vector for painting `region`.
    ///
    /// Region-relative strategies give `None` without a region. The context
    /// transform is accepted so other strategies may depend on the current
    /// space; none of the built-in ones do.
    pub fn vector(&self, region: Option<&Rect>, _context: Option<&Affine>) -> Option<[Point; 2]> {
        match self {
            VectorStrategy::Explicit { start, end } => Some([*start, *end]),
            VectorStrategy::Directional(direction) => region.map(|r| direction.vector(r)),
            VectorStrategy::Rotation(angle) => region.map(|r| rotated_vector(r, *angle)),
        }
    }
}

fn rotated_vector(region: &Rect, angle: f64) -> [Point; 2] {
    let r = region.abs();
    let center = r.center();
    let rotate = Affine::rotate_about(angle, center);
    let base = [
        rotate * Point::new(center.x, r.y0),
        rotate * Point::new(center.x, r.y1),
    ];
    expand_over(&r, base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::rect_from_xywh;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn assert_points(actual: [Point; 2], expected: [(f64, f64); 2]) {
        for (a, (x, y)) in actual.iter().zip(expected) {
            assert!(
                (a.x - x).abs() < 1e-9 && (a.y - y).abs() < 1e-9,
                "{actual:?} vs {expected:?}"
            );
        }
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!("to top".parse::<Direction>(), Ok(Direction::ToTop));
        assert_eq!("to-right-top".parse::<Direction>(), Ok(Direction::ToTopRight));
        assert_eq!("bottom_left".parse::<Direction>(), Ok(Direction::ToBottomLeft));
        assert!("to middle".parse::<Direction>().is_err());
        assert!("to top bottom".parse::<Direction>().is_err());
    }

    #[test]
    fn test_side_directions() {
        let region = rect_from_xywh(0.0, 0.0, 200.0, 100.0);
        assert_points(Direction::ToTop.vector(&region), [(100.0, 0.0), (100.0, 100.0)]);
        assert_points(Direction::ToBottom.vector(&region), [(100.0, 100.0), (100.0, 0.0)]);
        assert_points(Direction::ToLeft.vector(&region), [(200.0, 50.0), (0.0, 50.0)]);
        assert_points(Direction::ToRight.vector(&region), [(0.0, 50.0), (200.0, 50.0)]);
    }

    #[test]
    fn test_square_corner_is_diagonal() {
        let region = rect_from_xywh(0.0, 0.0, 10.0, 10.0);
        assert_points(Direction::ToTopRight.vector(&region), [(0.0, 0.0), (10.0, 10.0)]);
        assert_points(Direction::ToBottomLeft.vector(&region), [(10.0, 10.0), (0.0, 0.0)]);
        assert_points(Direction::ToTopLeft.vector(&region), [(10.0, 0.0), (0.0, 10.0)]);
    }

    #[test]
    fn test_corner_vector_ends_on_corner_lines() {
        // half-way line must join top-left and bottom-right
        let region = rect_from_xywh(0.0, 0.0, 200.0, 100.0);
        let [start, end] = Direction::ToTopRight.vector(&region);
        let mid = start.midpoint(end);
        assert!((mid.x - 100.0).abs() < 1e-9 && (mid.y - 50.0).abs() < 1e-9);
        let along = end - start;
        let diagonal = Point::new(200.0, 0.0) - Point::new(0.0, 100.0);
        assert!(along.dot(diagonal).abs() < 1e-6);
        // the target corner projects exactly onto the end of the vector
        let corner = Point::new(200.0, 100.0) - start;
        assert!((corner.dot(along) / along.hypot2() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_rotation_zero_is_bottom_to_top() {
        let region = rect_from_xywh(0.0, 0.0, 200.0, 100.0);
        let vector = VectorStrategy::Rotation(0.0).vector(Some(&region), None).unwrap();
        assert_points(vector, [(100.0, 0.0), (100.0, 100.0)]);
    }

    #[test]
    fn test_rotation_is_counter_clockwise() {
        let region = rect_from_xywh(0.0, 0.0, 200.0, 100.0);
        // a quarter turn counter-clockwise points "up" to the left
        let vector = VectorStrategy::Rotation(FRAC_PI_2).vector(Some(&region), None).unwrap();
        assert_points(vector, [(200.0, 50.0), (0.0, 50.0)]);
        let vector = VectorStrategy::Rotation(PI).vector(Some(&region), None).unwrap();
        assert_points(vector, [(100.0, 100.0), (100.0, 0.0)]);
    }

    #[test]
    fn test_region_strategies_need_region() {
        assert!(VectorStrategy::Rotation(1.0).vector(None, None).is_none());
        assert!(VectorStrategy::default().vector(None, None).is_none());
        let explicit = VectorStrategy::Explicit {
            start: Point::new(1.0, 2.0),
            end: Point::new(3.0, 4.0),
        };
        assert_eq!(
            explicit.vector(None, None),
            Some([Point::new(1.0, 2.0), Point::new(3.0, 4.0)])
        );
    }
}
