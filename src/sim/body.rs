//! Bodies: the ship, rocks, and both kinds of bullet
//!
//! Every entity shares one shape. Only the tag and the starting kinematics
//! differ, so a single builder covers them all.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Kind of entity, doubles as the view class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewType {
    Ship,
    Rock,
    Bullet,
    RockBullet,
}

impl ViewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewType::Ship => "ship",
            ViewType::Rock => "rock",
            ViewType::Bullet => "bullet",
            ViewType::RockBullet => "rockBullet",
        }
    }
}

/// Identity of a body before its view prefix is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectId {
    /// Value of the state's object counter when the body was minted
    pub serial: u64,
    pub create_time: u64,
}

/// Geometry of a body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub pos: Vec2,
    pub radius: f32,
}

/// Immutable snapshot of one entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    /// View type followed by serial, e.g. `rock3`
    pub id: String,
    pub create_time: u64,
    pub view_type: ViewType,
    pub pos: Vec2,
    pub radius: f32,
    pub vel: Vec2,
    pub acc: Vec2,
    /// Facing, degrees clockwise from screen-up
    pub angle: f32,
    pub rotation: f32,
    /// Horizontal displacement added every tick (ship sliding)
    pub torque: f32,
    /// Layout bookkeeping only
    pub row: u32,
    pub col: u32,
}

impl Body {
    /// Build a body with zero acceleration, angle, rotation and torque
    pub fn build(view_type: ViewType, oid: ObjectId, circle: Circle, vel: Vec2) -> Self {
        Self {
            id: format!("{}{}", view_type.as_str(), oid.serial),
            create_time: oid.create_time,
            view_type,
            pos: circle.pos,
            radius: circle.radius,
            vel,
            acc: Vec2::ZERO,
            angle: 0.0,
            rotation: 0.0,
            torque: 0.0,
            row: 0,
            col: 0,
        }
    }

    pub fn rock(oid: ObjectId, circle: Circle, vel: Vec2) -> Self {
        Self::build(ViewType::Rock, oid, circle, vel)
    }

    pub fn bullet(oid: ObjectId, circle: Circle, vel: Vec2) -> Self {
        Self::build(ViewType::Bullet, oid, circle, vel)
    }

    pub fn rock_bullet(oid: ObjectId, circle: Circle, vel: Vec2) -> Self {
        Self::build(ViewType::RockBullet, oid, circle, vel)
    }

    /// The player ship, parked at bottom-center
    pub fn ship(tuning: &Tuning) -> Self {
        Self {
            id: ViewType::Ship.as_str().to_string(),
            create_time: 0,
            view_type: ViewType::Ship,
            pos: tuning.ship_start(),
            radius: tuning.ship_radius,
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            angle: 0.0,
            rotation: 0.0,
            torque: 0.0,
            row: 0,
            col: 0,
        }
    }

    /// Age in ticks at logical time `now`
    #[inline]
    pub fn age(&self, now: u64) -> u64 {
        now.saturating_sub(self.create_time)
    }
}

/// Starting rock formation: rows of `rock_columns`, all drifting together
pub fn start_rocks(tuning: &Tuning) -> Vec<Body> {
    (0..tuning.rock_count)
        .map(|i| {
            let row = i / tuning.rock_columns;
            let origin = tuning.rock_row_origins[row];
            let oid = ObjectId {
                serial: i as u64,
                create_time: 0,
            };
            let circle = Circle {
                pos: origin + Vec2::new(i as f32 * tuning.rock_spacing, 0.0),
                radius: tuning.rock_radius,
            };
            Body {
                row: row as u32,
                col: (i % tuning.rock_columns) as u32,
                ..Body::rock(oid, circle, tuning.rock_velocity)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prefixes_id() {
        let oid = ObjectId {
            serial: 12,
            create_time: 7,
        };
        let circle = Circle {
            pos: Vec2::new(1.0, 2.0),
            radius: 4.0,
        };
        let b = Body::rock_bullet(oid, circle, Vec2::new(0.0, 10.0));
        assert_eq!(b.id, "rockBullet12");
        assert_eq!(b.create_time, 7);
        assert_eq!(b.view_type, ViewType::RockBullet);
        assert_eq!(b.acc, Vec2::ZERO);
        assert_eq!(b.torque, 0.0);
        assert_eq!(b.angle, 0.0);
    }

    #[test]
    fn test_ship_bottom_center() {
        let ship = Body::ship(&Tuning::default());
        assert_eq!(ship.id, "ship");
        assert_eq!(ship.pos, Vec2::new(300.0, 550.0));
        assert_eq!(ship.radius, 20.0);
    }

    #[test]
    fn test_start_rocks_layout() {
        let rocks = start_rocks(&Tuning::default());
        assert_eq!(rocks.len(), 10);

        let xs: Vec<f32> = rocks.iter().map(|r| r.pos.x).collect();
        assert_eq!(
            xs,
            vec![150.0, 225.0, 300.0, 375.0, 450.0, 145.0, 220.0, 295.0, 370.0, 445.0]
        );
        assert!(rocks[..5].iter().all(|r| r.pos.y == 95.0 && r.row == 0));
        assert!(rocks[5..].iter().all(|r| r.pos.y == 185.0 && r.row == 1));
        assert!(rocks.iter().all(|r| r.vel == Vec2::new(0.3, 0.1) && r.radius == 20.0));
        assert_eq!(rocks[7].id, "rock7");
        assert_eq!(rocks[7].col, 2);
    }
}
