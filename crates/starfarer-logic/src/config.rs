//! Game configuration - galaxy shape, ship tuning, mission rules.
//!
//! Every section has defaults matching the classic game feel, and every
//! field may be omitted from a JSON config file.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Top-level configuration for a game session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for all procedural content. `None` draws one from the OS.
    pub seed: Option<u64>,
    pub galaxy: GalaxyConfig,
    pub ship: ShipConfig,
    pub missions: MissionRules,
    /// Shield damage taken when the ship hits a planet.
    pub collision_damage: f32,
    /// Factor applied to each velocity component on impact.
    pub collision_bounce: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            galaxy: GalaxyConfig::default(),
            ship: ShipConfig::default(),
            missions: MissionRules::default(),
            collision_damage: 10.0,
            collision_bounce: -0.5,
        }
    }
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let g = &self.galaxy;
        if g.min_planets > g.max_planets {
            return Err(ConfigError::Invalid(format!(
                "galaxy.min_planets ({}) exceeds galaxy.max_planets ({})",
                g.min_planets, g.max_planets
            )));
        }
        if g.radius < 0.0 || !g.radius.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "galaxy.radius must be a non-negative number, got {}",
                g.radius
            )));
        }
        if self.ship.max_speed <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "ship.max_speed must be positive, got {}",
                self.ship.max_speed
            )));
        }
        let ship = &self.ship;
        non_negative("ship.acceleration", ship.acceleration)?;
        non_negative("ship.deceleration", ship.deceleration)?;
        non_negative("ship.rotation_speed", ship.rotation_speed)?;
        non_negative("ship.fuel_consumption_rate", ship.fuel_consumption_rate)?;
        non_negative("ship.collision_radius", ship.collision_radius)?;
        percentage("ship.starting_fuel", ship.starting_fuel)?;
        percentage("ship.starting_shield", ship.starting_shield)?;
        Ok(())
    }
}

fn non_negative(field: &str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "{field} must be a non-negative number, got {value}"
        )))
    }
}

fn percentage(field: &str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "{field} must be within 0..=100, got {value}"
        )))
    }
}

/// Shape of the generated galaxy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalaxyConfig {
    pub star_systems: usize,
    pub radius: f32,
    pub min_planets: u32,
    pub max_planets: u32,
    pub starfield_points: usize,
    pub starfield_extent: f32,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            star_systems: 10,
            radius: 2000.0,
            min_planets: 2,
            max_planets: 8,
            starfield_points: 10_000,
            starfield_extent: 6000.0,
        }
    }
}

/// Ship handling. Speeds are per tick, angles in radians.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    pub max_speed: f32,
    pub acceleration: f32,
    /// Passive speed loss per tick while moving.
    pub deceleration: f32,
    pub rotation_speed: f32,
    /// Fuel burned per tick per unit of speed.
    pub fuel_consumption_rate: f32,
    pub collision_radius: f32,
    pub starting_fuel: f32,
    pub starting_shield: f32,
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            max_speed: 10.0,
            acceleration: 0.1,
            deceleration: 0.05,
            rotation_speed: 0.02,
            fuel_consumption_rate: 0.05,
            collision_radius: 2.0,
            starting_fuel: 100.0,
            starting_shield: 100.0,
        }
    }
}

/// Mission board rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionRules {
    /// Missions offered when a session starts.
    pub initial_missions: usize,
    pub completion_fuel_reward: f32,
    pub completion_shield_reward: f32,
    /// Put abandoned missions back on the board as `Available` instead of
    /// keeping their `Abandoned` status.
    pub reopen_abandoned: bool,
}

impl Default for MissionRules {
    fn default() -> Self {
        Self {
            initial_missions: 3,
            completion_fuel_reward: 30.0,
            completion_shield_reward: 30.0,
            reopen_abandoned: false,
        }
    }
}

/// Errors that can occur while loading a config
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Config parse error: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}
