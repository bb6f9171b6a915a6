use core::f32::consts::TAU;

use crate::coords::{ColorRgba, Vec2};

use super::Geometry;

/// Point on a circle at `angle` radians, measured clockwise from 12 o'clock
/// (screen convention, +Y down).
#[inline]
fn circle_point(center: Vec2, radius: f32, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(center.x + radius * sin, center.y - radius * cos)
}

/// Tessellates a filled circle as a fan around the center vertex.
///
/// The center carries `inner_color`, the rim `outer_color`, giving a radial
/// gradient for free. `segments` comes from [`super::circle_segments`] on the
/// screen-space radius; counts below 3 (degenerate radius) are no-ops.
pub fn build_circle(
    out: &mut Geometry,
    center: Vec2,
    radius: f32,
    inner_color: ColorRgba,
    outer_color: ColorRgba,
    segments: u16,
) -> bool {
    if !(radius > 0.0) || !center.is_finite() || segments < 3 {
        return false;
    }

    let hub = out.push(center, inner_color);
    let step = TAU / segments as f32;
    for i in 0..segments {
        out.push(circle_point(center, radius, step * i as f32), outer_color);
    }
    for i in 0..segments {
        let next = (i + 1) % segments;
        out.push_triangle(hub, hub + 1 + i, hub + 1 + next);
    }
    true
}

/// Tessellates a circular ring between `inner_radius` and
/// `inner_radius + thickness`.
pub fn build_circle_frame(
    out: &mut Geometry,
    center: Vec2,
    inner_radius: f32,
    thickness: f32,
    inner_color: ColorRgba,
    outer_color: ColorRgba,
    segments: u16,
) -> bool {
    let inner_radius = inner_radius.max(0.0);
    let outer_radius = inner_radius + thickness;
    if !(thickness > 0.0) || !(outer_radius > 0.0) || !center.is_finite() || segments < 3 {
        return false;
    }

    let base = out.vertices.len() as u16;
    let step = TAU / segments as f32;
    for i in 0..segments {
        let angle = step * i as f32;
        out.push(circle_point(center, inner_radius, angle), inner_color);
        out.push(circle_point(center, outer_radius, angle), outer_color);
    }
    for i in 0..segments {
        let next = (i + 1) % segments;
        let (i0, o0) = (base + 2 * i, base + 2 * i + 1);
        let (i1, o1) = (base + 2 * next, base + 2 * next + 1);
        out.push_quad_indices(i0, o0, o1, i1);
    }
    true
}

/// Tessellates a pie slice: a fan from the center across `angle` radians
/// starting at `start_angle` (clockwise from 12 o'clock). The sweep is
/// clamped to one full turn.
pub fn build_circle_pie(
    out: &mut Geometry,
    center: Vec2,
    radius: f32,
    start_angle: f32,
    angle: f32,
    inner_color: ColorRgba,
    outer_color: ColorRgba,
    segments: u16,
) -> bool {
    if !(radius > 0.0) || !center.is_finite() || segments == 0 {
        return false;
    }
    if angle == 0.0 || !start_angle.is_finite() || !angle.is_finite() {
        return false;
    }

    let sweep = angle.clamp(-TAU, TAU);
    let hub = out.push(center, inner_color);
    let step = sweep / segments as f32;
    for i in 0..=segments {
        out.push(
            circle_point(center, radius, start_angle + step * i as f32),
            outer_color,
        );
    }
    for i in 0..segments {
        out.push_triangle(hub, hub + 1 + i, hub + 2 + i);
    }
    true
}

/// Tessellates a thick arc: the ring strip between `inner_radius` and
/// `inner_radius + thickness`, swept `angle` radians from `start_angle`.
pub fn build_circle_arc(
    out: &mut Geometry,
    center: Vec2,
    inner_radius: f32,
    start_angle: f32,
    angle: f32,
    thickness: f32,
    inner_color: ColorRgba,
    outer_color: ColorRgba,
    segments: u16,
) -> bool {
    let inner_radius = inner_radius.max(0.0);
    let outer_radius = inner_radius + thickness;
    if !(thickness > 0.0) || !(outer_radius > 0.0) || !center.is_finite() || segments == 0 {
        return false;
    }
    if angle == 0.0 || !start_angle.is_finite() || !angle.is_finite() {
        return false;
    }

    let sweep = angle.clamp(-TAU, TAU);
    let base = out.vertices.len() as u16;
    let step = sweep / segments as f32;
    for i in 0..=segments {
        let a = start_angle + step * i as f32;
        out.push(circle_point(center, inner_radius, a), inner_color);
        out.push(circle_point(center, outer_radius, a), outer_color);
    }
    for i in 0..segments {
        let (i0, o0) = (base + 2 * i, base + 2 * i + 1);
        let (i1, o1) = (base + 2 * i + 2, base + 2 * i + 3);
        out.push_quad_indices(i0, o0, o1, i1);
    }
    true
}
