//! Screen-space tessellation quality.
//!
//! Segment counts are a function of the radius *as it appears on screen*
//! (local radius x the active transform's max scale factor), so zooming the
//! camera never reveals faceting on a previously smooth curve.

use core::f32::consts::TAU;

/// Hard cap on the segments of any full circle, bounding vertex cost.
pub const MAX_CIRCLE_SEGMENTS: u16 = 255;

/// Segments for a full circle of `screen_radius` pixels.
///
/// Non-decreasing in `screen_radius`: a fast linear ramp for small circles
/// (where each extra segment is clearly visible), then damped growth up to
/// [`MAX_CIRCLE_SEGMENTS`]. Non-positive and non-finite radii yield 0.
pub fn circle_segments(screen_radius: f32) -> u16 {
    if !(screen_radius > 0.0) || !screen_radius.is_finite() {
        return 0;
    }
    if screen_radius <= 5.0 {
        ((screen_radius + 3.0) as u16) * 2
    } else {
        (18.0 + (screen_radius - 5.0) / 2.2).min(MAX_CIRCLE_SEGMENTS as f32) as u16
    }
}

/// Segments for a partial arc of `screen_radius` pixels sweeping `angle`
/// radians: the full-circle count scaled by the covered fraction, at least 1
/// for any non-empty sweep.
pub fn arc_segments(screen_radius: f32, angle: f32) -> u16 {
    let full = circle_segments(screen_radius);
    if full == 0 || angle == 0.0 || !angle.is_finite() {
        return 0;
    }
    let fraction = (angle.abs().min(TAU)) / TAU;
    ((full as f32 * fraction).ceil() as u16).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── circle_segments ───────────────────────────────────────────────────

    #[test]
    fn zero_and_negative_radius_yield_zero() {
        assert_eq!(circle_segments(0.0), 0);
        assert_eq!(circle_segments(-3.0), 0);
        assert_eq!(circle_segments(f32::NAN), 0);
    }

    #[test]
    fn tiny_circle_still_gets_a_usable_count() {
        assert!(circle_segments(0.5) >= 6);
    }

    #[test]
    fn monotonically_non_decreasing() {
        let mut prev = 0;
        for i in 0..4000 {
            let r = i as f32 * 0.25;
            let n = circle_segments(r);
            assert!(n >= prev, "quality decreased at r={r}: {prev} -> {n}");
            prev = n;
        }
    }

    #[test]
    fn capped_at_maximum() {
        assert_eq!(circle_segments(1e6), MAX_CIRCLE_SEGMENTS);
        assert_eq!(circle_segments(f32::INFINITY), 0);
    }

    // ── arc_segments ──────────────────────────────────────────────────────

    #[test]
    fn full_sweep_matches_circle_quality() {
        assert_eq!(arc_segments(40.0, TAU), circle_segments(40.0));
    }

    #[test]
    fn narrow_sweep_scales_down_but_stays_positive() {
        let narrow = arc_segments(40.0, 0.01);
        assert!(narrow >= 1);
        assert!(narrow < circle_segments(40.0));
    }

    #[test]
    fn zero_sweep_is_degenerate() {
        assert_eq!(arc_segments(40.0, 0.0), 0);
    }

    #[test]
    fn negative_sweep_counts_by_magnitude() {
        assert_eq!(arc_segments(40.0, -TAU / 2.0), arc_segments(40.0, TAU / 2.0));
    }
}
