//! Planet model - descriptive attributes, orbit and spin kinematics, and the
//! info readout shown when a planet is selected or approached.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable planet identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlanetId(pub Uuid);

impl fmt::Display for PlanetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// PLANET TYPES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlanetType {
    Rocky,
    GasGiant,
    Ice,
    Molten,
    Desert,
    Ocean,
    Forest,
    Barren,
    Volcanic,
}

impl PlanetType {
    pub const ALL: [PlanetType; 9] = [
        Self::Rocky,
        Self::GasGiant,
        Self::Ice,
        Self::Molten,
        Self::Desert,
        Self::Ocean,
        Self::Forest,
        Self::Barren,
        Self::Volcanic,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Rocky => "rocky",
            Self::GasGiant => "gas-giant",
            Self::Ice => "ice",
            Self::Molten => "molten",
            Self::Desert => "desert",
            Self::Ocean => "ocean",
            Self::Forest => "forest",
            Self::Barren => "barren",
            Self::Volcanic => "volcanic",
        }
    }

    /// Label with the first letter upper-cased ("Gas-giant").
    pub fn display_name(self) -> String {
        let label = self.label();
        let mut chars = label.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Surface color as 0xRRGGBB.
    pub fn color(self) -> u32 {
        match self {
            Self::Rocky => 0x8B4513,
            Self::GasGiant => 0xE3DBDB,
            Self::Ice => 0xADD8E6,
            Self::Molten => 0xFF4500,
            Self::Desert => 0xF4A460,
            Self::Ocean => 0x1E90FF,
            Self::Forest => 0x228B22,
            Self::Barren => 0x808080,
            Self::Volcanic => 0x800000,
        }
    }

    /// Tint of the atmosphere shell, if the planet has one.
    pub fn atmosphere_color(self) -> u32 {
        match self {
            Self::GasGiant => 0xE3DBDB,
            Self::Ice => 0xADD8E6,
            Self::Ocean => 0x1E90FF,
            Self::Forest => 0x228B22,
            Self::Desert => 0xF4A460,
            Self::Volcanic => 0xFF4500,
            _ => 0xFFFFFF,
        }
    }
}

impl fmt::Display for PlanetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// CHARACTERISTICS
// ============================================================================

/// What lives on the planet, if anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InhabitedStatus {
    Uninhabited,
    Microorganisms,
    PrimitiveLife,
    IntelligentLife,
}

impl InhabitedStatus {
    /// Map a uniform roll in `[0, 1)` onto the 50/20/20/10 bands.
    pub fn from_roll(roll: f32) -> Self {
        if roll > 0.9 {
            Self::IntelligentLife
        } else if roll > 0.7 {
            Self::PrimitiveLife
        } else if roll > 0.5 {
            Self::Microorganisms
        } else {
            Self::Uninhabited
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Uninhabited => "uninhabited",
            Self::Microorganisms => "microorganisms",
            Self::PrimitiveLife => "primitive life",
            Self::IntelligentLife => "intelligent life",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    Minerals,
    Gases,
    Water,
    Organics,
    Energy,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 5] = [
        Self::Minerals,
        Self::Gases,
        Self::Water,
        Self::Organics,
        Self::Energy,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Minerals => "minerals",
            Self::Gases => "gases",
            Self::Water => "water",
            Self::Organics => "organics",
            Self::Energy => "energy",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Resource abundance, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Resources {
    pub minerals: f32,
    pub gases: f32,
    pub water: f32,
    pub organics: f32,
    pub energy: f32,
}

impl Resources {
    pub fn get(&self, kind: ResourceKind) -> f32 {
        match kind {
            ResourceKind::Minerals => self.minerals,
            ResourceKind::Gases => self.gases,
            ResourceKind::Water => self.water,
            ResourceKind::Organics => self.organics,
            ResourceKind::Energy => self.energy,
        }
    }
}

/// Environmental and resource attributes of a planet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Characteristics {
    pub has_water: bool,
    pub has_atmosphere: bool,
    /// 0.0 (trace) to 1.0 (thick).
    pub atmosphere_density: f32,
    /// Surface temperature in °C.
    pub temperature: f32,
    /// Surface gravity in G.
    pub gravity: f32,
    pub resources: Resources,
    pub inhabited_status: InhabitedStatus,
}

// ============================================================================
// KINEMATICS
// ============================================================================

/// Circular orbit in the xz-plane around `center`.
///
/// A zero radius means the body does not orbit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orbit {
    pub center: Vec3,
    pub radius: f32,
    /// Radians advanced per tick.
    pub speed: f32,
    /// Current angle in radians.
    pub angle: f32,
}

impl Orbit {
    pub const STATIONARY: Self = Self {
        center: Vec3::ZERO,
        radius: 0.0,
        speed: 0.0,
        angle: 0.0,
    };

    pub fn is_orbiting(&self) -> bool {
        self.radius > 0.0
    }

    /// Point on the orbit at the current angle, keeping `height` as y.
    pub fn point_at(&self, height: f32) -> Vec3 {
        Vec3::new(
            self.center.x + self.angle.cos() * self.radius,
            height,
            self.center.z + self.angle.sin() * self.radius,
        )
    }

    /// Advance one tick and return the new position. The y coordinate of
    /// `position` is preserved.
    pub fn step(&mut self, position: Vec3) -> Vec3 {
        if !self.is_orbiting() {
            return position;
        }
        self.angle += self.speed;
        self.point_at(position.y)
    }
}

/// Axial spin, purely cosmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Spin {
    pub angle: f32,
    pub speed: f32,
}

impl Spin {
    pub fn new(speed: f32) -> Self {
        Self { angle: 0.0, speed }
    }

    pub fn advance(&mut self) {
        self.angle = (self.angle + self.speed) % std::f32::consts::TAU;
    }
}

// ============================================================================
// PLANET
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub id: PlanetId,
    pub name: String,
    pub planet_type: PlanetType,
    pub radius: f32,
    pub position: Vec3,
    pub characteristics: Characteristics,
    pub orbit: Orbit,
    pub spin: Spin,
    /// Name of the star this planet orbits. Back-reference only.
    pub parent_star: Option<String>,
    pub color: u32,
    pub has_rings: bool,
}

impl Planet {
    /// One tick of spin and orbital motion.
    pub fn update(&mut self) {
        self.spin.advance();
        self.position = self.orbit.step(self.position);
    }

    /// Opacity of the atmosphere shell, `None` without an atmosphere.
    pub fn atmosphere_opacity(&self) -> Option<f32> {
        self.characteristics
            .has_atmosphere
            .then(|| 0.2 + self.characteristics.atmosphere_density * 0.3)
    }

    pub fn info(&self) -> PlanetInfo {
        PlanetInfo::from_planet(self)
    }
}

/// Formatted readout of a planet for an info panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetInfo {
    pub name: String,
    pub planet_type: String,
    pub diameter: String,
    pub gravity: String,
    pub temperature: String,
    pub atmosphere: String,
    pub water: String,
    pub resources: Vec<(ResourceKind, String)>,
    pub life_status: String,
    pub star: String,
}

impl PlanetInfo {
    pub fn from_planet(planet: &Planet) -> Self {
        let c = &planet.characteristics;
        let presence = |present: bool| if present { "Present" } else { "None" }.to_string();
        let life_status = match c.inhabited_status {
            InhabitedStatus::Uninhabited => "No life detected".to_string(),
            status => format!("Life detected: {}", status.label()),
        };

        Self {
            name: planet.name.clone(),
            planet_type: planet.planet_type.display_name(),
            diameter: format!("{:.0} km", planet.radius * 2.0 * 1000.0),
            gravity: format!("{:.2} G", c.gravity),
            temperature: format!("{:.1} °C", c.temperature),
            atmosphere: presence(c.has_atmosphere),
            water: presence(c.has_water),
            resources: ResourceKind::ALL
                .iter()
                .map(|&kind| (kind, format!("{:.1}%", c.resources.get(kind))))
                .collect(),
            life_status,
            star: planet
                .parent_star
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_planet() -> Planet {
        Planet {
            id: PlanetId(Uuid::nil()),
            name: "Kronox-42".to_string(),
            planet_type: PlanetType::GasGiant,
            radius: 7.5,
            position: Vec3::new(110.0, 3.0, 0.0),
            characteristics: Characteristics {
                has_water: false,
                has_atmosphere: true,
                atmosphere_density: 0.5,
                temperature: -12.34,
                gravity: 1.234,
                resources: Resources {
                    minerals: 10.0,
                    gases: 20.55,
                    water: 0.0,
                    organics: 99.99,
                    energy: 50.0,
                },
                inhabited_status: InhabitedStatus::PrimitiveLife,
            },
            orbit: Orbit {
                center: Vec3::new(10.0, 0.0, 0.0),
                radius: 100.0,
                speed: 0.001,
                angle: 0.0,
            },
            spin: Spin::new(0.003),
            parent_star: Some("Alpha Cygni".to_string()),
            color: PlanetType::GasGiant.color(),
            has_rings: true,
        }
    }

    #[test]
    fn test_inhabited_bands() {
        assert_eq!(InhabitedStatus::from_roll(0.0), InhabitedStatus::Uninhabited);
        assert_eq!(InhabitedStatus::from_roll(0.5), InhabitedStatus::Uninhabited);
        assert_eq!(InhabitedStatus::from_roll(0.51), InhabitedStatus::Microorganisms);
        assert_eq!(InhabitedStatus::from_roll(0.71), InhabitedStatus::PrimitiveLife);
        assert_eq!(InhabitedStatus::from_roll(0.95), InhabitedStatus::IntelligentLife);
    }

    #[test]
    fn test_display_name_capitalizes() {
        assert_eq!(PlanetType::GasGiant.display_name(), "Gas-giant");
        assert_eq!(PlanetType::Rocky.display_name(), "Rocky");
    }

    #[test]
    fn test_orbit_stays_on_radius_around_star() {
        let mut planet = sample_planet();
        for _ in 0..500 {
            planet.update();
            let dx = planet.position.x - planet.orbit.center.x;
            let dz = planet.position.z - planet.orbit.center.z;
            assert!(((dx * dx + dz * dz).sqrt() - 100.0).abs() < 1e-2);
            assert_eq!(planet.position.y, 3.0);
        }
        assert!((planet.orbit.angle - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_stationary_planet_does_not_move() {
        let mut planet = sample_planet();
        planet.orbit = Orbit::STATIONARY;
        let before = planet.position;
        planet.update();
        assert_eq!(planet.position, before);
    }

    #[test]
    fn test_spin_wraps() {
        let mut spin = Spin::new(1.0);
        for _ in 0..10 {
            spin.advance();
        }
        assert!(spin.angle < std::f32::consts::TAU);
    }

    #[test]
    fn test_info_formatting() {
        let info = sample_planet().info();
        assert_eq!(info.planet_type, "Gas-giant");
        assert_eq!(info.diameter, "15000 km");
        assert_eq!(info.gravity, "1.23 G");
        assert_eq!(info.temperature, "-12.3 °C");
        assert_eq!(info.atmosphere, "Present");
        assert_eq!(info.water, "None");
        assert_eq!(info.life_status, "Life detected: primitive life");
        assert_eq!(info.star, "Alpha Cygni");
        assert_eq!(info.resources[3], (ResourceKind::Organics, "100.0%".to_string()));
    }

    #[test]
    fn test_info_without_star_or_life() {
        let mut planet = sample_planet();
        planet.parent_star = None;
        planet.characteristics.inhabited_status = InhabitedStatus::Uninhabited;
        let info = planet.info();
        assert_eq!(info.star, "Unknown");
        assert_eq!(info.life_status, "No life detected");
    }

    #[test]
    fn test_atmosphere_opacity() {
        let mut planet = sample_planet();
        assert!((planet.atmosphere_opacity().unwrap() - 0.35).abs() < 1e-6);
        planet.characteristics.has_atmosphere = false;
        assert!(planet.atmosphere_opacity().is_none());
    }
}
