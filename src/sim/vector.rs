//! 2D vector helpers on top of `glam::Vec2`
//!
//! `glam` already gives us `+`, `-`, `length()` and scalar `*`. The game
//! additionally needs a perpendicular and a rotation in degrees, with
//! screen coordinates where "up" is `(0, -1)`.

use glam::Vec2;

/// The "up" direction on screen (y grows downward)
pub const UP: Vec2 = Vec2::new(0.0, -1.0);

/// Extra vector operations used by the simulation
pub trait VecExt {
    /// Perpendicular `(y, -x)`
    fn ortho(self) -> Self;
    /// Rotate by `deg` degrees using the standard 2D rotation matrix
    fn rotate_deg(self, deg: f32) -> Self;
}

impl VecExt for Vec2 {
    #[inline]
    fn ortho(self) -> Self {
        Vec2::new(self.y, -self.x)
    }

    fn rotate_deg(self, deg: f32) -> Self {
        let (sin, cos) = deg.to_radians().sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

/// Unit vector facing `deg` degrees clockwise from screen-up
#[inline]
pub fn unit_vec_in_direction(deg: f32) -> Vec2 {
    UP.rotate_deg(deg)
}
