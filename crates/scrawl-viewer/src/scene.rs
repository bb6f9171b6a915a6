//! Demo scene: one call per shape family and state setter, animated.

use core::f32::consts::TAU;

use scrawl_engine::coords::{ColorRgba, Mat3x2, Rect, Vec2, Viewport};
use scrawl_engine::engine::Renderer2D;
use scrawl_engine::state::{BlendState, RasterizerState};
use scrawl_engine::tess::{LineCap, Ring, TriangleIndex};

const PANEL: ColorRgba = ColorRgba::new(0.10, 0.12, 0.18, 1.0);
const PANEL_EDGE: ColorRgba = ColorRgba::new(0.35, 0.42, 0.60, 1.0);
const ACCENT: ColorRgba = ColorRgba::new(0.95, 0.55, 0.20, 1.0);
const ACCENT_DIM: ColorRgba = ColorRgba::new(0.95, 0.55, 0.20, 0.0);
const TEAL: ColorRgba = ColorRgba::new(0.15, 0.75, 0.70, 1.0);
const GRID: ColorRgba = ColorRgba::new(1.0, 1.0, 1.0, 0.05);

pub fn build(r: &mut Renderer2D, viewport: Viewport, t: f32) {
    let (w, h) = (viewport.width, viewport.height);

    // Gentle camera breathing shows adaptive tessellation at work.
    let zoom = 1.0 + 0.05 * (t * 0.7).sin();
    r.set_camera_transform(
        Mat3x2::translation(-w * 0.5, -h * 0.5)
            * Mat3x2::scaling(zoom, zoom)
            * Mat3x2::translation(w * 0.5, h * 0.5),
    );

    background_grid(r, w, h);
    panels(r, t);
    gauges(r, t);
    wave(r, w, h, t);
    star(r, t);
    glow_field(r, w, h, t);
    scissored_inset(r, t);
}

fn background_grid(r: &mut Renderer2D, w: f32, h: f32) {
    let step = 48.0;
    let mut x = step;
    while x < w {
        r.add_line(LineCap::Flat, Vec2::new(x, 0.0), Vec2::new(x, h), 1.0, [GRID; 2]);
        x += step;
    }
    let mut y = step;
    while y < h {
        r.add_line(LineCap::Flat, Vec2::new(0.0, y), Vec2::new(w, y), 1.0, [GRID; 2]);
        y += step;
    }
}

fn panels(r: &mut Renderer2D, t: f32) {
    r.add_round_rect(Rect::new(24.0, 24.0, 300.0, 180.0), 12.0, PANEL);
    r.add_rect_frame(Rect::new(24.0, 24.0, 300.0, 180.0), 2.0, PANEL_EDGE, PANEL);

    // Gradient header strip.
    r.add_rect_colored(
        Rect::new(36.0, 36.0, 276.0, 28.0),
        [TEAL, ACCENT, ACCENT, TEAL],
    );

    // A spinning triangle under a local transform.
    let spin = Mat3x2::translation(-174.0, -140.0)
        * Mat3x2::rotation(t)
        * Mat3x2::translation(174.0, 140.0);
    r.set_local_transform(spin);
    r.add_triangle_colored(
        [
            Vec2::new(174.0, 110.0),
            Vec2::new(204.0, 165.0),
            Vec2::new(144.0, 165.0),
        ],
        [ACCENT, TEAL, ColorRgba::white()],
    );
    r.set_local_transform(Mat3x2::IDENTITY);

    // Skewed quad "shadow" under the panel.
    r.add_quad(
        [
            Vec2::new(36.0, 210.0),
            Vec2::new(324.0, 210.0),
            Vec2::new(334.0, 222.0),
            Vec2::new(46.0, 222.0),
        ],
        ColorRgba::new(0.0, 0.0, 0.0, 0.35),
    );
}

fn gauges(r: &mut Renderer2D, t: f32) {
    let center = Vec2::new(470.0, 120.0);

    // Radial-gradient dial face.
    r.add_circle(center, 70.0, ColorRgba::new(0.16, 0.18, 0.26, 1.0), PANEL);
    r.add_circle_frame(center, 70.0, 4.0, PANEL_EDGE, PANEL);

    // Progress arc sweeps with time.
    let sweep = (t * 0.8).sin().abs() * TAU * 0.75;
    r.add_circle_arc(center, 56.0, 0.0, sweep, 10.0, ACCENT, ACCENT_DIM);

    // Pie wedge marking the remaining share.
    r.add_circle_pie(center, 40.0, sweep, TAU - sweep, TEAL, ColorRgba::new(0.15, 0.75, 0.70, 0.1));

    // Companion ellipse gauge.
    let ecenter = Vec2::new(650.0, 120.0);
    r.add_ellipse(ecenter, 90.0, 55.0, ColorRgba::new(0.16, 0.18, 0.26, 1.0), PANEL);
    r.add_ellipse_frame(ecenter, 90.0, 55.0, 3.0, PANEL_EDGE, PANEL);
}

fn wave(r: &mut Renderer2D, w: f32, h: f32, t: f32) {
    let baseline = h * 0.62;
    let mut points = Vec::new();
    let mut colors = Vec::new();

    let n = 64;
    for i in 0..=n {
        let fx = i as f32 / n as f32;
        let x = 24.0 + fx * (w - 48.0);
        let y = baseline + (fx * TAU * 2.0 + t * 2.0).sin() * 24.0;
        points.push(Vec2::new(x, y));

        let fade = (fx * TAU).sin() * 0.5 + 0.5;
        colors.push(ColorRgba::new(
            TEAL.r + (ACCENT.r - TEAL.r) * fade,
            TEAL.g + (ACCENT.g - TEAL.g) * fade,
            TEAL.b + (ACCENT.b - TEAL.b) * fade,
            1.0,
        ));
    }

    r.add_line_string_colored(&points, &colors, None, 3.0, false, Ring::Open);

    // The same curve echoed lower as a uniform, offset ribbon.
    r.add_line_string(
        &points,
        Some(Vec2::new(0.0, 36.0)),
        1.5,
        false,
        ColorRgba::new(1.0, 1.0, 1.0, 0.15),
        Ring::Open,
    );
}

fn star(r: &mut Renderer2D, t: f32) {
    let center = Vec2::new(840.0, 140.0);
    let pulse = 1.0 + 0.1 * (t * 3.0).sin();

    // Hub-centered fan triangulation of a 5-point star.
    let mut points = vec![center];
    let spikes = 5;
    for i in 0..spikes * 2 {
        let angle = i as f32 / (spikes * 2) as f32 * TAU;
        let radius = if i % 2 == 0 { 56.0 } else { 24.0 } * pulse;
        points.push(Vec2::new(
            center.x + angle.sin() * radius,
            center.y - angle.cos() * radius,
        ));
    }
    let mut triangles: Vec<TriangleIndex> = Vec::new();
    let rim = (spikes * 2) as u16;
    for i in 0..rim {
        triangles.push([0, 1 + i, 1 + (i + 1) % rim]);
    }

    r.add_polygon(&points, &triangles, None, ACCENT);
    r.add_polygon_frame(&points[1..], 2.0, ColorRgba::white());
}

fn glow_field(r: &mut Renderer2D, w: f32, h: f32, t: f32) {
    // Additive pass: overlapping soft dots accumulate brightness.
    r.set_blend_state(BlendState::ADDITIVE);
    for k in 0..6 {
        let phase = t * 0.5 + k as f32 / 6.0 * TAU;
        let pos = Vec2::new(
            w * 0.5 + phase.cos() * w * 0.3,
            h * 0.82 + phase.sin() * 30.0,
        );
        r.add_circle(
            pos,
            18.0,
            ColorRgba::new(0.9, 0.6, 0.2, 0.5),
            ColorRgba::new(0.9, 0.6, 0.2, 0.0),
        );
    }
    r.set_blend_state(BlendState::ALPHA);
}

fn scissored_inset(r: &mut Renderer2D, t: f32) {
    let inset = Rect::new(24.0, 240.0, 300.0, 120.0);

    r.add_rect(inset, ColorRgba::new(0.05, 0.06, 0.10, 1.0));

    r.set_rasterizer_state(RasterizerState::SCISSORED_2D);
    r.set_scissor_rect(Some(inset));

    // Content deliberately larger than the inset; the scissor crops it.
    let scroll = (t * 40.0) % 80.0;
    for k in 0..8 {
        let y = inset.origin.y - 40.0 + k as f32 * 40.0 + scroll;
        r.add_round_rect(
            Rect::new(inset.origin.x + 8.0, y, inset.size.x - 16.0, 28.0),
            6.0,
            if k % 2 == 0 { PANEL } else { ColorRgba::new(0.14, 0.16, 0.24, 1.0) },
        );
    }

    r.set_scissor_rect(None);
    r.set_rasterizer_state(RasterizerState::DEFAULT_2D);
}
