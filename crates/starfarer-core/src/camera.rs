//! Follow camera that trails the player ship.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use starfarer_logic::spaceship::Spaceship;

/// Camera offset in the ship's local frame: above and behind.
pub const FOLLOW_OFFSET: Vec3 = Vec3::new(0.0, 5.0, 20.0);

/// Where the camera sits and what it looks at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub eye: Vec3,
    pub target: Vec3,
}

impl CameraPose {
    pub fn follow(ship: &Spaceship) -> Self {
        Self {
            eye: ship.position + ship.orientation * FOLLOW_OFFSET,
            target: ship.position,
        }
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::follow(&Spaceship::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pose_behind_and_above() {
        let pose = CameraPose::default();
        assert_eq!(pose.eye, FOLLOW_OFFSET);
        assert_eq!(pose.target, Vec3::ZERO);
        assert!(pose.eye.z > pose.target.z);
    }

    #[test]
    fn test_offset_turns_with_ship() {
        let mut ship = Spaceship::default();
        ship.set_position(Vec3::new(10.0, 0.0, 10.0));
        for _ in 0..79 {
            ship.rotate_left();
        }
        // ~90 degrees left: facing -x, so the camera trails on +x.
        let pose = CameraPose::follow(&ship);
        let offset = pose.eye - ship.position;
        assert!(offset.x > 19.0);
        assert!((offset.y - 5.0).abs() < 1e-3);
        assert_eq!(pose.target, ship.position);
    }
}
