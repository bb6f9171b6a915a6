use crate::coords::{ColorRgba, Vec2};

use super::Geometry;

/// End-cap style for single line segments.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum LineCap {
    /// Ends exactly at the endpoints.
    #[default]
    Flat,
    /// Extends each end by half the thickness.
    Square,
}

/// Tessellates a thick line segment as one quad.
///
/// `colors` are the begin/end colors; the quad interpolates between them
/// along the segment. Zero-length segments, non-positive thickness, and
/// non-finite input are no-ops.
pub fn build_line(
    out: &mut Geometry,
    cap: LineCap,
    begin: Vec2,
    end: Vec2,
    thickness: f32,
    colors: [ColorRgba; 2],
) -> bool {
    if !(thickness > 0.0) || !begin.is_finite() || !end.is_finite() {
        return false;
    }
    let Some(dir) = (end - begin).normalized() else {
        return false;
    };

    let half = thickness * 0.5;
    let normal = dir.perpendicular() * half;

    let (p0, p1) = match cap {
        LineCap::Flat => (begin, end),
        LineCap::Square => (begin - dir * half, end + dir * half),
    };

    let a = out.push(p0 + normal, colors[0]);
    let b = out.push(p0 - normal, colors[0]);
    let c = out.push(p1 - normal, colors[1]);
    let d = out.push(p1 + normal, colors[1]);
    out.push_quad_indices(a, b, c, d);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white2() -> [ColorRgba; 2] {
        [ColorRgba::white(), ColorRgba::white()]
    }

    #[test]
    fn emits_one_quad() {
        let mut g = Geometry::new();
        assert!(build_line(
            &mut g,
            LineCap::Flat,
            Vec2::zero(),
            Vec2::new(10.0, 0.0),
            2.0,
            white2(),
        ));
        assert_eq!(g.vertices.len(), 4);
        assert_eq!(g.indices.len(), 6);
    }

    #[test]
    fn flat_cap_spans_exactly_between_endpoints() {
        let mut g = Geometry::new();
        build_line(&mut g, LineCap::Flat, Vec2::zero(), Vec2::new(10.0, 0.0), 2.0, white2());
        let xs: Vec<f32> = g.vertices.iter().map(|v| v.pos[0]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 0.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 10.0);
    }

    #[test]
    fn square_cap_extends_by_half_thickness() {
        let mut g = Geometry::new();
        build_line(&mut g, LineCap::Square, Vec2::zero(), Vec2::new(10.0, 0.0), 2.0, white2());
        let xs: Vec<f32> = g.vertices.iter().map(|v| v.pos[0]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), -1.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 11.0);
    }

    #[test]
    fn zero_length_is_noop() {
        let mut g = Geometry::new();
        assert!(!build_line(&mut g, LineCap::Flat, Vec2::zero(), Vec2::zero(), 2.0, white2()));
        assert!(g.is_empty());
    }

    #[test]
    fn non_positive_thickness_is_noop() {
        let mut g = Geometry::new();
        assert!(!build_line(
            &mut g,
            LineCap::Flat,
            Vec2::zero(),
            Vec2::new(1.0, 0.0),
            0.0,
            white2(),
        ));
        assert!(g.is_empty());
    }
}
