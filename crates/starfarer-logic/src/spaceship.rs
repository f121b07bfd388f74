//! Player spaceship - scalar-speed kinematics, fuel and shield.
//!
//! Thrust adjusts a scalar speed along the ship's facing; there is no mass
//! or vector thrust. While moving, the ship burns fuel in proportion to its
//! speed and bleeds speed at a constant rate.

use std::fmt;

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::config::ShipConfig;
use crate::math::{clamp, distance};

pub const MAX_FUEL: f32 = 100.0;
pub const MAX_SHIELD: f32 = 100.0;

/// Below this shield level the ship reports a critical warning.
pub const SHIELD_CRITICAL_THRESHOLD: f32 = 30.0;

/// Local forward axis of the hull.
pub const FORWARD: Vec3 = Vec3::NEG_Z;

/// Shield condition after taking damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShieldStatus {
    Nominal,
    Critical,
    Depleted,
}

impl ShieldStatus {
    pub fn from_level(shield: f32) -> Self {
        if shield <= 0.0 {
            Self::Depleted
        } else if shield < SHIELD_CRITICAL_THRESHOLD {
            Self::Critical
        } else {
            Self::Nominal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipError {
    /// Thrust requested with an empty tank.
    OutOfFuel,
}

impl fmt::Display for ShipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShipError::OutOfFuel => write!(f, "Out of fuel!"),
        }
    }
}

impl std::error::Error for ShipError {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spaceship {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Unit vector the ship faces.
    pub direction: Vec3,
    pub orientation: Quat,
    pub speed: f32,
    fuel: f32,
    shield: f32,
    params: ShipConfig,
}

impl Spaceship {
    pub fn new(params: ShipConfig) -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            direction: FORWARD,
            orientation: Quat::IDENTITY,
            speed: 0.0,
            fuel: clamp(params.starting_fuel, 0.0, MAX_FUEL),
            shield: clamp(params.starting_shield, 0.0, MAX_SHIELD),
            params,
        }
    }

    pub fn fuel(&self) -> f32 {
        self.fuel
    }

    pub fn shield(&self) -> f32 {
        self.shield
    }

    pub fn params(&self) -> &ShipConfig {
        &self.params
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Add thrust along the current facing.
    pub fn accelerate(&mut self) -> Result<f32, ShipError> {
        if self.fuel <= 0.0 {
            return Err(ShipError::OutOfFuel);
        }
        self.speed = (self.speed + self.params.acceleration).min(self.params.max_speed);
        self.sync_velocity();
        Ok(self.speed)
    }

    /// Brake at twice the acceleration rate.
    pub fn decelerate(&mut self) -> f32 {
        self.speed = (self.speed - self.params.acceleration * 2.0).max(0.0);
        self.sync_velocity();
        self.speed
    }

    pub fn rotate_left(&mut self) {
        self.rotate_local(Quat::from_rotation_y(self.params.rotation_speed));
    }

    pub fn rotate_right(&mut self) {
        self.rotate_local(Quat::from_rotation_y(-self.params.rotation_speed));
    }

    /// Flight-stick convention: "up" pushes the nose toward -y.
    pub fn pitch_up(&mut self) {
        self.rotate_local(Quat::from_rotation_x(-self.params.rotation_speed));
    }

    pub fn pitch_down(&mut self) {
        self.rotate_local(Quat::from_rotation_x(self.params.rotation_speed));
    }

    // Velocity keeps its old heading until the next thrust change or tick.
    fn rotate_local(&mut self, rotation: Quat) {
        self.orientation = (self.orientation * rotation).normalize();
        self.direction = (self.orientation * FORWARD).normalize();
    }

    /// One tick: move, burn fuel, bleed speed.
    pub fn update(&mut self) {
        self.position += self.velocity;

        if self.speed > 0.0 {
            self.consume_fuel();
            self.speed = (self.speed - self.params.deceleration).max(0.0);
            self.sync_velocity();
        }
    }

    fn consume_fuel(&mut self) {
        self.fuel = clamp(
            self.fuel - self.params.fuel_consumption_rate * self.speed,
            0.0,
            MAX_FUEL,
        );
    }

    fn sync_velocity(&mut self) {
        self.velocity = self.direction * self.speed;
    }

    /// Add fuel, returning the new level.
    pub fn refuel(&mut self, amount: f32) -> f32 {
        self.fuel = clamp(self.fuel + amount, 0.0, MAX_FUEL);
        self.fuel
    }

    /// Restore shield, returning the new level.
    pub fn repair_shield(&mut self, amount: f32) -> f32 {
        self.shield = clamp(self.shield + amount, 0.0, MAX_SHIELD);
        self.shield
    }

    pub fn take_damage(&mut self, amount: f32) -> ShieldStatus {
        self.shield = clamp(self.shield - amount, 0.0, MAX_SHIELD);
        ShieldStatus::from_level(self.shield)
    }

    /// Scale each velocity component by `factor` (negative bounces back).
    pub fn bounce(&mut self, factor: f32) {
        self.velocity *= factor;
    }

    /// Index of the first body (in iteration order) the hull overlaps.
    ///
    /// Bodies are `(center, radius)` pairs.
    pub fn check_collision<I>(&self, bodies: I) -> Option<usize>
    where
        I: IntoIterator<Item = (Vec3, f32)>,
    {
        bodies.into_iter().position(|(center, radius)| {
            distance(self.position, center) < radius + self.params.collision_radius
        })
    }
}

impl Default for Spaceship {
    fn default() -> Self {
        Self::new(ShipConfig::default())
    }
}
