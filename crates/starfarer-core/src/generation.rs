//! Galaxy spawning - turns generated star systems into ECS entities

use std::collections::HashMap;

use hecs::{Entity, World};
use rand::Rng;

use starfarer_logic::config::GalaxyConfig;
use starfarer_logic::generation::generate_galaxy_from_config;
use starfarer_logic::mission::PlanetRef;
use starfarer_logic::planet::PlanetId;
use starfarer_logic::star::StarSystem;

use crate::components::{planet_components, Celestial, PlanetBody, Position, StarBody};

/// Entity handles for the spawned galaxy.
///
/// `planets` is in spawn order (system by system, innermost planet first),
/// which is also the collision scan order.
#[derive(Debug, Clone, Default)]
pub struct GalaxyLayout {
    pub stars: Vec<Entity>,
    pub planets: Vec<Entity>,
    planet_index: HashMap<PlanetId, Entity>,
}

impl GalaxyLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn planet_entity(&self, id: PlanetId) -> Option<Entity> {
        self.planet_index.get(&id).copied()
    }

    pub fn star_count(&self) -> usize {
        self.stars.len()
    }

    pub fn planet_count(&self) -> usize {
        self.planets.len()
    }
}

/// Generate a galaxy and spawn it into the world.
pub fn generate_galaxy(
    world: &mut World,
    config: &GalaxyConfig,
    rng: &mut impl Rng,
) -> GalaxyLayout {
    let galaxy = generate_galaxy_from_config(rng, config);
    spawn_galaxy(world, &galaxy)
}

pub fn spawn_galaxy(world: &mut World, galaxy: &[StarSystem]) -> GalaxyLayout {
    let mut layout = GalaxyLayout::new();
    for system in galaxy {
        spawn_star_system(world, &mut layout, system);
    }
    layout
}

/// Spawn one star and its planets, appending them to `layout`.
pub fn spawn_star_system(world: &mut World, layout: &mut GalaxyLayout, system: &StarSystem) {
    let star = world.spawn((
        StarBody {
            id: system.id,
            planet_count: system.planet_count(),
        },
        Celestial {
            name: system.name.clone(),
            radius: system.radius,
            color: system.color,
        },
        Position(system.position),
    ));
    layout.stars.push(star);

    for planet in &system.planets {
        let entity = world.spawn(planet_components(planet));
        layout.planets.push(entity);
        layout.planet_index.insert(planet.id, entity);
    }
}

/// Mission target candidates, in scan order.
pub fn planet_refs(world: &World, layout: &GalaxyLayout) -> Vec<PlanetRef> {
    layout
        .planets
        .iter()
        .filter_map(|&entity| {
            let mut query = world.query_one::<(&PlanetBody, &Celestial)>(entity).ok()?;
            let (body, celestial) = query.get()?;
            Some(PlanetRef {
                id: body.id,
                name: celestial.name.clone(),
                planet_type: body.planet_type,
                parent_star: body.parent_star.clone(),
            })
        })
        .collect()
}
