// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Monotone cubic interpolation in x.
//!
//! The curve passes through every point, never overshoots between two points with monotone y,
//! and keeps tangents finite when consecutive points share an x coordinate. Points are expected
//! in ascending x order.

use kurbo::{BezPath, Point};

/// Builds a monotone-X cubic path through `points`.
///
/// Two points produce a straight segment; a single point produces a lone `MoveTo`.
pub fn monotone_x(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some((&first, rest)) = points.split_first() else {
        return path;
    };
    path.move_to(first);
    match rest {
        [] => return path,
        [only] => {
            path.line_to(*only);
            return path;
        }
        _ => {}
    }

    // Tangent at each point; interior tangents come from the neighbouring secants.
    let n = points.len();
    let mut tangents = vec![0.0; n];
    for i in 1..n - 1 {
        tangents[i] = interior_slope(points[i - 1], points[i], points[i + 1]);
    }
    tangents[0] = end_slope(points[0], points[1], tangents[1]);
    tangents[n - 1] = end_slope(points[n - 2], points[n - 1], tangents[n - 2]);

    for i in 0..n - 1 {
        let (p0, p1) = (points[i], points[i + 1]);
        let dx = (p1.x - p0.x) / 3.0;
        path.curve_to(
            Point::new(p0.x + dx, p0.y + dx * tangents[i]),
            Point::new(p1.x - dx, p1.y - dx * tangents[i + 1]),
            p1,
        );
    }
    path
}

fn sign(x: f64) -> f64 {
    if x < 0.0 { -1.0 } else { 1.0 }
}

/// Steffen-style tangent at `p1`, limited so the curve stays monotone.
fn interior_slope(p0: Point, p1: Point, p2: Point) -> f64 {
    let h0 = p1.x - p0.x;
    let h1 = p2.x - p1.x;
    let s0 = secant(p1.y - p0.y, h0, h1);
    let s1 = secant(p2.y - p1.y, h1, h0);
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    if s0.is_nan() || s1.is_nan() || p.is_nan() {
        return 0.0;
    }
    let m = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if m.is_nan() { 0.0 } else { m }
}

/// `dy / h`, with a zero-width step signed by the neighbouring step's direction.
fn secant(dy: f64, h: f64, other: f64) -> f64 {
    if h != 0.0 {
        dy / h
    } else if other < 0.0 {
        dy / -0.0
    } else {
        dy / 0.0
    }
}

/// One-sided tangent at an end point, from the secant and the neighbouring tangent.
fn end_slope(p0: Point, p1: Point, t: f64) -> f64 {
    let h = p1.x - p0.x;
    if h == 0.0 {
        t
    } else {
        (3.0 * (p1.y - p0.y) / h - t) / 2.0
    }
}
