//! Per-tick motion integration

use glam::Vec2;

use super::body::Body;

/// Wrap one axis back into `[0, size)`.
///
/// Single step, not modulo: bodies drift far less than a canvas per tick.
#[inline]
fn wrap_axis(v: f32, size: f32) -> f32 {
    if v < 0.0 {
        // Tiny negatives can round up to exactly `size`
        let w = v + size;
        if w < size { w } else { 0.0 }
    } else if v >= size {
        v - size
    } else {
        v
    }
}

/// Torus wrap: leaving one edge re-enters from the opposite edge
pub fn torus_wrap(pos: Vec2, size: f32) -> Vec2 {
    Vec2::new(wrap_axis(pos.x, size), wrap_axis(pos.y, size))
}

#[inline]
fn step(body: &Body) -> Vec2 {
    body.pos + body.vel + Vec2::new(body.torque, 0.0)
}

/// Move a body and wrap it around the canvas (ship, bullets, rocks)
pub fn move_body(body: &Body, canvas_size: f32) -> Body {
    Body {
        pos: torus_wrap(step(body), canvas_size),
        vel: body.vel + body.acc,
        ..body.clone()
    }
}

/// Move a body without wrapping (rock bullets fall off the canvas)
pub fn move_body_unwrapped(body: &Body) -> Body {
    Body {
        pos: step(body),
        vel: body.vel + body.acc,
        ..body.clone()
    }
}
