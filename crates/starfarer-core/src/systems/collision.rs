//! Collision system - player ship against planets

use glam::Vec3;
use hecs::{Entity, World};

use starfarer_logic::spaceship::{ShieldStatus, Spaceship};

use crate::components::{Celestial, Position};
use crate::generation::GalaxyLayout;

/// A collision resolved this tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Collision {
    pub planet: Entity,
    pub planet_name: String,
    /// Shield condition after the hit.
    pub shield: ShieldStatus,
}

/// First planet, in scan order, the ship's hull overlaps.
pub fn find_collision(world: &World, layout: &GalaxyLayout, ship: &Spaceship) -> Option<Entity> {
    let bodies: Vec<(Entity, Vec3, f32)> = layout
        .planets
        .iter()
        .filter_map(|&entity| {
            let mut query = world.query_one::<(&Position, &Celestial)>(entity).ok()?;
            let (position, celestial) = query.get()?;
            Some((entity, position.0, celestial.radius))
        })
        .collect();

    ship.check_collision(bodies.iter().map(|&(_, center, radius)| (center, radius)))
        .map(|index| bodies[index].0)
}

/// Damage and bounce the ship off the first planet it overlaps.
pub fn collision_system(
    world: &World,
    layout: &GalaxyLayout,
    ship: &mut Spaceship,
    damage: f32,
    bounce: f32,
) -> Option<Collision> {
    let planet = find_collision(world, layout, ship)?;
    let planet_name = world
        .get::<&Celestial>(planet)
        .map(|c| c.name.clone())
        .unwrap_or_default();

    let shield = ship.take_damage(damage);
    ship.bounce(bounce);
    log::debug!("Collision with {}: shield {:.1}", planet_name, ship.shield());

    Some(Collision {
        planet,
        planet_name,
        shield,
    })
}
