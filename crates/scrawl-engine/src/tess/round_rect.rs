use core::f32::consts::{FRAC_PI_2, PI};

use crate::coords::{ColorRgba, Rect, Vec2};

use super::{Geometry, circle_segments, rect::build_rect};

/// Tessellates a rounded rectangle as a fan over its outer contour.
///
/// `radius` is clamped to half the rect's minimum extent; a non-positive
/// radius falls back to a plain rect. `corner_segments` is derived inside
/// from `radius * scale` (the caller passes the active max scale factor) so
/// corner smoothness tracks screen size like circles do.
pub fn build_round_rect(
    out: &mut Geometry,
    rect: Rect,
    radius: f32,
    color: ColorRgba,
    scale: f32,
) -> bool {
    if rect.is_empty() || !rect.is_finite() {
        return false;
    }

    let r = radius.min(rect.size.x.min(rect.size.y) * 0.5);
    if !(r > 0.0) {
        return build_rect(out, rect, [color; 4]);
    }

    // Quarter-circle resolution from the screen-space corner radius.
    let per_corner = (circle_segments(r * scale.max(0.0)) / 4).max(1);

    let min = rect.min();
    let max = rect.max();
    // Corner circle centers, clockwise from top-right.
    let centers = [
        Vec2::new(max.x - r, min.y + r),
        Vec2::new(max.x - r, max.y - r),
        Vec2::new(min.x + r, max.y - r),
        Vec2::new(min.x + r, min.y + r),
    ];
    // Arc start angles (clockwise from 12 o'clock) for each corner.
    let starts = [0.0, FRAC_PI_2, PI, PI + FRAC_PI_2];

    let base = out.vertices.len() as u16;
    for (center, start) in centers.into_iter().zip(starts) {
        for i in 0..=per_corner {
            let angle = start + (FRAC_PI_2 * i as f32) / per_corner as f32;
            let (sin, cos) = angle.sin_cos();
            out.push(Vec2::new(center.x + r * sin, center.y - r * cos), color);
        }
    }

    // Convex contour: fan from the first vertex.
    let count = out.vertices.len() as u16 - base;
    for i in 1..count - 1 {
        out.push_triangle(base, base + i, base + i + 1);
    }
    true
}
