//! Mission proximity system - accrues progress near the active target

use glam::Vec3;
use hecs::{Entity, World};
use rand::Rng;

use starfarer_logic::math::distance;
use starfarer_logic::mission::{
    proximity_gain, MissionBoard, PlanetRef, ProgressUpdate, ProximityGain,
};
use starfarer_logic::planet::PlanetId;

use crate::components::{Celestial, Position};
use crate::generation::GalaxyLayout;

/// What happened to the active mission this tick.
#[derive(Debug, Clone, PartialEq)]
pub struct ProximityOutcome {
    pub planet: Entity,
    pub target: PlanetId,
    pub gain: ProximityGain,
    pub update: ProgressUpdate,
}

/// Accrue progress on the active mission from the player's distance to its
/// target. Returns `None` with no active mission, a missing target, or the
/// player out of range.
pub fn mission_proximity_system(
    world: &World,
    layout: &GalaxyLayout,
    board: &mut MissionBoard,
    player: Vec3,
    planets: &[PlanetRef],
    rng: &mut impl Rng,
) -> Option<ProximityOutcome> {
    let target = board.current()?.target.planet_id;
    let planet = layout.planet_entity(target)?;

    let (center, radius) = {
        let mut query = world.query_one::<(&Position, &Celestial)>(planet).ok()?;
        let (position, celestial) = query.get()?;
        (position.0, celestial.radius)
    };

    let gain = proximity_gain(distance(player, center), radius)?;
    let update = board.accrue(gain.progress, planets, rng).ok()?;
    log::debug!("Mission progress +{:.3} ({:?})", gain.progress, update);

    Some(ProximityOutcome {
        planet,
        target,
        gain,
        update,
    })
}
