use crate::coords::{ColorRgba, Vec2};

use super::Geometry;

/// Whether a point run forms a closed ring or an open strip.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Ring {
    Open,
    Closed,
}

/// Clamp on miter extension at sharp joins, in multiples of the half
/// thickness. Beyond this the join is beveled by the clamp rather than
/// spiking outward.
const MITER_LIMIT: f32 = 4.0;

/// Tessellates a uniformly colored thick polyline.
///
/// See [`build_line_string_colored`] for the geometry contract; this wrapper
/// replicates `color` across every point.
pub fn build_line_string(
    out: &mut Geometry,
    points: &[Vec2],
    offset: Option<Vec2>,
    thickness: f32,
    inner: bool,
    color: ColorRgba,
    ring: Ring,
) -> bool {
    build_string(out, points, None, offset, thickness, inner, color, ring)
}

/// Tessellates a thick polyline with one color per input point.
///
/// Joins are mitered (clamped at sharp angles), open ends get flat caps, and
/// a closed ring joins the last point back to the first. With `inner` the
/// ribbon lies entirely on the right-hand side of the path direction (the
/// inside of a clockwise ring); otherwise the thickness is centered.
///
/// Degenerate runs (fewer than 2 distinct points after removing zero-length
/// segments, `colors.len() != points.len()`, non-positive thickness) are
/// no-ops.
pub fn build_line_string_colored(
    out: &mut Geometry,
    points: &[Vec2],
    colors: &[ColorRgba],
    offset: Option<Vec2>,
    thickness: f32,
    inner: bool,
    ring: Ring,
) -> bool {
    if colors.len() != points.len() {
        return false;
    }
    build_string(
        out,
        points,
        Some(colors),
        offset,
        thickness,
        inner,
        ColorRgba::white(),
        ring,
    )
}

#[allow(clippy::too_many_arguments)]
fn build_string(
    out: &mut Geometry,
    points: &[Vec2],
    colors: Option<&[ColorRgba]>,
    offset: Option<Vec2>,
    thickness: f32,
    inner: bool,
    uniform_color: ColorRgba,
    ring: Ring,
) -> bool {
    if !(thickness > 0.0) || points.len() < 2 {
        return false;
    }
    if points.iter().any(|p| !p.is_finite()) {
        return false;
    }

    let shift = offset.unwrap_or(Vec2::zero());

    // Deduplicate consecutive points; keep the index of the surviving point
    // so per-point colors stay attached to it.
    let mut run: Vec<(Vec2, usize)> = Vec::with_capacity(points.len());
    for (i, &p) in points.iter().enumerate() {
        let p = p + shift;
        if run.last().is_none_or(|&(prev, _)| (p - prev).length_sq() > f32::EPSILON) {
            run.push((p, i));
        }
    }
    let closed = ring == Ring::Closed;
    if closed {
        if let (Some(&(first, _)), Some(&(last, _))) = (run.first(), run.last()) {
            if run.len() > 2 && (first - last).length_sq() <= f32::EPSILON {
                run.pop();
            }
        }
    }
    let n = run.len();
    if n < 2 || (closed && n < 3) {
        return false;
    }

    let color_at = |source_index: usize| match colors {
        Some(cs) => cs[source_index],
        None => uniform_color,
    };

    let segment_normal = |from: Vec2, to: Vec2| -> Vec2 {
        (to - from)
            .normalized()
            .map(Vec2::perpendicular)
            .unwrap_or(Vec2::zero())
    };

    let base = out.vertices.len() as u16;
    for k in 0..n {
        let (p, source_index) = run[k];

        // Join normal: average of the adjacent segment normals, scaled by
        // the miter factor; endpoint joins of open strips use their single
        // segment normal.
        let prev = if k > 0 {
            Some(run[k - 1].0)
        } else if closed {
            Some(run[n - 1].0)
        } else {
            None
        };
        let next = if k + 1 < n {
            Some(run[k + 1].0)
        } else if closed {
            Some(run[0].0)
        } else {
            None
        };

        let normal = match (prev, next) {
            (Some(a), Some(b)) => {
                let n0 = segment_normal(a, p);
                let n1 = segment_normal(p, b);
                match (n0 + n1).normalized() {
                    Some(m) => {
                        // Miter length 1/cos(theta/2), clamped for near-reversals.
                        let cos_half = m.dot(n0).max(1.0 / MITER_LIMIT);
                        m / cos_half
                    }
                    // 180-degree reversal: fall back to the incoming normal.
                    None => n0,
                }
            }
            (None, Some(b)) => segment_normal(p, b),
            (Some(a), None) => segment_normal(a, p),
            (None, None) => return false,
        };

        let color = color_at(source_index);
        if inner {
            out.push(p, color);
            out.push(p - normal * thickness, color);
        } else {
            let half = normal * (thickness * 0.5);
            out.push(p + half, color);
            out.push(p - half, color);
        }
    }

    let joins = if closed { n } else { n - 1 };
    for k in 0..joins {
        let next = (k + 1) % n;
        let (l0, r0) = (base + 2 * k as u16, base + 2 * k as u16 + 1);
        let (l1, r1) = (base + 2 * next as u16, base + 2 * next as u16 + 1);
        out.push_quad_indices(l0, l1, r1, r0);
    }
    true
}
