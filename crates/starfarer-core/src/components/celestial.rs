//! Components for stars and planets.

use glam::Vec3;
use hecs::{Entity, World};
use serde::{Deserialize, Serialize};

use starfarer_logic::planet::{Characteristics, Planet, PlanetId, PlanetType};
use starfarer_logic::star::StarId;

pub use starfarer_logic::planet::{Orbit, Spin};

/// World-space position
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec3);

/// Shared by every body that can be drawn or collided with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Celestial {
    pub name: String,
    pub radius: f32,
    /// 0xRRGGBB
    pub color: u32,
}

/// Marks a star entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarBody {
    pub id: StarId,
    pub planet_count: usize,
}

/// Descriptive planet data. Kinematics live in [`Orbit`] and [`Spin`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetBody {
    pub id: PlanetId,
    pub planet_type: PlanetType,
    pub characteristics: Characteristics,
    pub parent_star: Option<String>,
    pub has_rings: bool,
}

/// Split a planet into its components.
pub fn planet_components(planet: &Planet) -> (PlanetBody, Celestial, Position, Orbit, Spin) {
    (
        PlanetBody {
            id: planet.id,
            planet_type: planet.planet_type,
            characteristics: planet.characteristics,
            parent_star: planet.parent_star.clone(),
            has_rings: planet.has_rings,
        },
        Celestial {
            name: planet.name.clone(),
            radius: planet.radius,
            color: planet.color,
        },
        Position(planet.position),
        planet.orbit,
        planet.spin,
    )
}

/// Reassemble a planet snapshot from an entity's components.
pub fn planet_snapshot(world: &World, entity: Entity) -> Option<Planet> {
    let mut query = world
        .query_one::<(&PlanetBody, &Celestial, &Position, &Orbit, &Spin)>(entity)
        .ok()?;
    let (body, celestial, position, orbit, spin) = query.get()?;

    Some(Planet {
        id: body.id,
        name: celestial.name.clone(),
        planet_type: body.planet_type,
        radius: celestial.radius,
        position: position.0,
        characteristics: body.characteristics,
        orbit: *orbit,
        spin: *spin,
        parent_star: body.parent_star.clone(),
        color: celestial.color,
        has_rings: body.has_rings,
    })
}
