//! Turns user supplied color stops into a canonical list: every offset
//! relative to the gradient vector, non-decreasing, with `Auto` offsets
//! resolved and hints either `RelativeBetweenColors` or `None`.

use crate::core::geometry::ZERO_EPSILON;
use crate::core::stop::{ColorStop, HintKind, OffsetKind};

/// Normalizes `stops` for a gradient vector of `base_vector_length` units.
///
/// The input is left untouched. A zero-length vector collapses the whole
/// gradient to the last stop's color at offset 0.
pub fn normalize_stops(stops: &[ColorStop], base_vector_length: f64) -> Vec<ColorStop> {
    let Some(last) = stops.last() else {
        return Vec::new();
    };
    if base_vector_length < ZERO_EPSILON {
        return vec![ColorStop::relocated(last, 0.0, OffsetKind::Relative)];
    }

    let mut result = copy_with_relative_offsets(stops, base_vector_length);
    resolve_first_stop(&mut result);
    resolve_auto_stops(&mut result);
    resolve_hints(&mut result);
    result
}

/// Converts absolute offsets and hints to relative ones, raising any value
/// that would go backwards (in stream order, hints included) to the last one used.
fn copy_with_relative_offsets(stops: &[ColorStop], base_vector_length: f64) -> Vec<ColorStop> {
    let mut last_used = f64::NEG_INFINITY;
    stops
        .iter()
        .map(|stop| {
            let mut copy = stop.clone();

            let (mut offset, kind) = match stop.offset_kind() {
                OffsetKind::Absolute => (stop.offset() / base_vector_length, OffsetKind::Relative),
                kind => (stop.offset(), kind),
            };
            if kind == OffsetKind::Relative {
                offset = offset.max(last_used);
                last_used = offset;
            }
            copy.set_offset(offset, kind);

            let (mut hint, hint_kind) = match stop.hint_kind() {
                HintKind::AbsoluteOnGradient => {
                    (stop.hint_offset() / base_vector_length, HintKind::RelativeOnGradient)
                }
                kind => (stop.hint_offset(), kind),
            };
            if hint_kind == HintKind::RelativeOnGradient {
                hint = hint.max(last_used);
                last_used = hint;
            }
            copy.set_hint(hint, hint_kind);
            copy
        })
        .collect()
}

/// An `Auto` first stop starts at 0, or earlier if the first explicit
/// offset or on-gradient hint is negative.
fn resolve_first_stop(stops: &mut [ColorStop]) {
    if stops[0].offset_kind() != OffsetKind::Auto {
        return;
    }
    let anchor = stops
        .iter()
        .find_map(|stop| {
            if stop.offset_kind() == OffsetKind::Relative {
                Some(stop.offset())
            } else if stop.hint_kind() == HintKind::RelativeOnGradient {
                Some(stop.hint_offset())
            } else {
                None
            }
        })
        .unwrap_or(0.0);
    stops[0].set_offset(anchor.min(0.0), OffsetKind::Relative);
}

/// Position after which the next stop may be placed: the stop's
/// on-gradient hint if it has one, its offset otherwise.
fn trailing_anchor(stop: &ColorStop) -> f64 {
    if stop.hint_kind() == HintKind::RelativeOnGradient {
        stop.hint_offset()
    } else {
        stop.offset()
    }
}

fn resolve_auto_stops(stops: &mut [ColorStop]) {
    debug_assert_eq!(stops[0].offset_kind(), OffsetKind::Relative);
    let mut run_start = 1;
    let mut prev = trailing_anchor(&stops[0]);

    for i in 1..stops.len() {
        if stops[i].offset_kind() == OffsetKind::Auto {
            // an on-gradient hint closes the run, the hinted stop included
            if stops[i].hint_kind() == HintKind::RelativeOnGradient {
                let hint = stops[i].hint_offset();
                spread_evenly(stops, run_start, i + 1, prev, hint);
                prev = hint;
                run_start = i + 1;
            }
        } else {
            if run_start < i {
                let next = stops[i].offset();
                spread_evenly(stops, run_start, i, prev, next);
            }
            run_start = i + 1;
            prev = trailing_anchor(&stops[i]);
        }
    }

    if run_start < stops.len() {
        let len = stops.len();
        spread_evenly(stops, run_start, len, prev, prev.max(1.0));
    }
}

/// Places the auto stops `from..to` at even steps after `prev`. A run that
/// reaches the end of the list lands its last stop exactly on `next`.
fn spread_evenly(stops: &mut [ColorStop], from: usize, to: usize, prev: f64, next: f64) {
    debug_assert!(from < to);
    let intervals = to.min(stops.len() - 1) + 1 - from;
    let step = (next - prev) / intervals as f64;
    let mut current = prev;
    for stop in &mut stops[from..to] {
        debug_assert_eq!(stop.offset_kind(), OffsetKind::Auto);
        current += step;
        stop.set_offset(current, OffsetKind::Relative);
    }
}

fn resolve_hints(stops: &mut [ColorStop]) {
    for i in 0..stops.len() - 1 {
        if stops[i].hint_kind() != HintKind::RelativeOnGradient {
            continue;
        }
        let current = stops[i].offset();
        let next = stops[i + 1].offset();
        if current == next {
            stops[i].set_hint(0.0, HintKind::None);
        } else {
            let hint = (stops[i].hint_offset() - current) / (next - current);
            stops[i].set_hint(hint, HintKind::RelativeBetweenColors);
        }
    }
    if let Some(last) = stops.last_mut() {
        last.set_hint(0.0, HintKind::None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::Color;

    fn offsets(stops: &[ColorStop]) -> Vec<f64> {
        stops.iter().map(ColorStop::offset).collect()
    }

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{actual:?} vs {expected:?}");
        }
    }

    #[test]
    fn test_two_auto_stops() {
        let stops = [ColorStop::auto(Color::red()), ColorStop::auto(Color::blue())];
        let result = normalize_stops(&stops, 100.0);
        assert_close(&offsets(&result), &[0.0, 1.0]);
        assert!(result.iter().all(|s| s.offset_kind() == OffsetKind::Relative));
    }

    #[test]
    fn test_three_auto_stops_are_evenly_spaced() {
        let stops = [
            ColorStop::auto(Color::red()),
            ColorStop::auto(Color::green()),
            ColorStop::auto(Color::blue()),
        ];
        assert_close(&offsets(&normalize_stops(&stops, 10.0)), &[0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_degenerate_vector_keeps_last_color() {
        let stops = [
            ColorStop::new(Color::red(), 0.0, OffsetKind::Relative),
            ColorStop::new(Color::blue(), 1.0, OffsetKind::Relative),
        ];
        let result = normalize_stops(&stops, 0.0);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].color(), Color::blue());
        assert_eq!(result[0].offset(), 0.0);
        assert_eq!(result[0].offset_kind(), OffsetKind::Relative);
    }

    #[test]
    fn test_absolute_offsets_become_relative() {
        let stops = [
            ColorStop::new(Color::red(), 25.0, OffsetKind::Absolute),
            ColorStop::new(Color::blue(), 50.0, OffsetKind::Absolute),
        ];
        assert_close(&offsets(&normalize_stops(&stops, 100.0)), &[0.25, 0.5]);
    }

    #[test]
    fn test_decreasing_offsets_are_raised_not_reordered() {
        let stops = [
            ColorStop::new(Color::red(), 0.6, OffsetKind::Relative),
            ColorStop::new(Color::green(), 0.2, OffsetKind::Relative),
            ColorStop::new(Color::blue(), 0.6, OffsetKind::Relative),
        ];
        let result = normalize_stops(&stops, 1.0);
        assert_close(&offsets(&result), &[0.6, 0.6, 0.6]);
        assert_eq!(result[1].color(), Color::green());
    }

    #[test]
    fn test_auto_first_stop_takes_negative_anchor() {
        let stops = [
            ColorStop::auto(Color::red()),
            ColorStop::new(Color::blue(), -0.5, OffsetKind::Relative),
        ];
        assert_close(&offsets(&normalize_stops(&stops, 1.0)), &[-0.5, -0.5]);

        let stops = [
            ColorStop::auto(Color::red()),
            ColorStop::new(Color::blue(), 0.5, OffsetKind::Relative),
        ];
        assert_close(&offsets(&normalize_stops(&stops, 1.0)), &[0.0, 0.5]);
    }

    #[test]
    fn test_auto_run_between_anchors() {
        let stops = [
            ColorStop::new(Color::red(), 0.2, OffsetKind::Relative),
            ColorStop::auto(Color::green()),
            ColorStop::auto(Color::green()),
            ColorStop::auto(Color::green()),
            ColorStop::new(Color::blue(), 0.6, OffsetKind::Relative),
        ];
        assert_close(
            &offsets(&normalize_stops(&stops, 1.0)),
            &[0.2, 0.3, 0.4, 0.5, 0.6],
        );
    }

    #[test]
    fn test_trailing_auto_run_ends_at_one() {
        let stops = [
            ColorStop::new(Color::red(), 0.5, OffsetKind::Relative),
            ColorStop::auto(Color::green()),
            ColorStop::auto(Color::blue()),
        ];
        assert_close(&offsets(&normalize_stops(&stops, 1.0)), &[0.5, 0.75, 1.0]);

        let stops = [
            ColorStop::new(Color::red(), 1.5, OffsetKind::Relative),
            ColorStop::auto(Color::blue()),
        ];
        assert_close(&offsets(&normalize_stops(&stops, 1.0)), &[1.5, 1.5]);
    }

    #[test]
    fn test_on_gradient_hint_anchors_auto_run() {
        let stops = [
            ColorStop::new(Color::red(), 0.0, OffsetKind::Relative),
            ColorStop::auto(Color::green()).hint(0.4, HintKind::RelativeOnGradient),
            ColorStop::new(Color::blue(), 1.0, OffsetKind::Relative),
        ];
        let result = normalize_stops(&stops, 1.0);
        assert_close(&offsets(&result), &[0.0, 0.2, 1.0]);
        // hint 0.4 between 0.2 and 1.0
        assert_eq!(result[1].hint_kind(), HintKind::RelativeBetweenColors);
        assert!((result[1].hint_offset() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_hints_are_normalized() {
        let stops = [
            ColorStop::new(Color::red(), 0.0, OffsetKind::Relative)
                .hint(30.0, HintKind::AbsoluteOnGradient),
            ColorStop::new(Color::green(), 0.5, OffsetKind::Relative)
                .hint(0.5, HintKind::RelativeOnGradient),
            ColorStop::new(Color::blue(), 0.5, OffsetKind::Relative)
                .hint(0.9, HintKind::RelativeBetweenColors),
        ];
        let result = normalize_stops(&stops, 100.0);
        assert_eq!(result[0].hint_kind(), HintKind::RelativeBetweenColors);
        assert!((result[0].hint_offset() - 0.6).abs() < 1e-9);
        // zero-width segment can't carry a hint
        assert_eq!(result[1].hint_kind(), HintKind::None);
        // hint after the last color is dropped
        assert_eq!(result[2].hint_kind(), HintKind::None);
        assert_eq!(result[2].hint_offset(), 0.0);
    }

    #[test]
    fn test_input_is_not_modified() {
        let stops = vec![ColorStop::auto(Color::red()), ColorStop::auto(Color::blue())];
        let before = stops.clone();
        let _ = normalize_stops(&stops, 5.0);
        assert_eq!(stops, before);
    }

    #[test]
    fn test_offsets_are_monotonic() {
        let kinds = [OffsetKind::Absolute, OffsetKind::Auto, OffsetKind::Relative];
        let values = [-3.0, -0.5, 0.0, 0.3, 0.7, 1.0, 4.0];
        let hints = [HintKind::None, HintKind::RelativeOnGradient, HintKind::AbsoluteOnGradient];
        for seed in 0..200usize {
            let stops: Vec<ColorStop> = (0..5)
                .map(|i| {
                    let k = (seed / (i + 1) + i) % kinds.len();
                    let v = values[(seed * 7 + i * 3) % values.len()];
                    let h = hints[(seed + i * 5) % hints.len()];
                    let hv = values[(seed * 3 + i) % values.len()];
                    ColorStop::new(Color::gray(0.5), v, kinds[k]).hint(hv, h)
                })
                .collect();
            let result = normalize_stops(&stops, 2.0);
            assert_eq!(result.len(), stops.len());
            for pair in result.windows(2) {
                assert!(pair[0].offset() <= pair[1].offset(), "seed {seed}: {:?}", offsets(&result));
            }
        }
    }
}
