//! Star system and galaxy generation.
//!
//! Star systems are laid out on a spiral: system `i` of `n` sits at angle
//! `i * 2.4` rad and distance `radius * i / n` from the galactic centre, with
//! a random vertical jitter. Each planet's orbit widens with its index.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use crate::config::GalaxyConfig;
use crate::generation::{
    generate_planet, generate_star_name, DEFAULT_MAX_PLANET_RADIUS, DEFAULT_MIN_PLANET_RADIUS,
};
use crate::math::{generate_uuid, random_float, random_index};
use crate::planet::Orbit;
use crate::star::{StarId, StarSystem};

/// Angle step between consecutive systems on the spiral.
pub const SPIRAL_ANGLE_STEP: f32 = 2.4;

/// Vertical jitter of star systems above/below the galactic plane.
pub const GALAXY_THICKNESS: f32 = 100.0;

static STAR_COLORS: &[u32] = &[0xFFFF00, 0xFFA500, 0xFF4500, 0x00BFFF, 0xFFFFFF, 0xF5DEB3];

pub fn generate_star_color(rng: &mut impl Rng) -> u32 {
    STAR_COLORS[random_index(rng, STAR_COLORS.len())]
}

/// Generate a star at `position` with `planet_count` planets in widening
/// orbits. Planet positions are absolute (already offset by the star).
pub fn generate_star_system(rng: &mut impl Rng, position: Vec3, planet_count: usize) -> StarSystem {
    let star_radius = random_float(rng, 20.0, 50.0);
    let color = generate_star_color(rng);
    let name = generate_star_name(rng);

    let mut planets = Vec::with_capacity(planet_count);
    for index in 0..planet_count {
        let orbit_radius = star_radius * 2.0 + index as f32 * random_float(rng, 20.0, 50.0);
        let angle = random_float(rng, 0.0, TAU);

        let planet_position = Vec3::new(
            position.x + angle.cos() * orbit_radius,
            position.y + angle.sin() * random_float(rng, -5.0, 5.0),
            position.z + angle.sin() * orbit_radius,
        );

        let mut planet = generate_planet(
            rng,
            planet_position,
            DEFAULT_MIN_PLANET_RADIUS,
            DEFAULT_MAX_PLANET_RADIUS,
        );
        planet.orbit = Orbit {
            center: position,
            radius: orbit_radius,
            speed: random_float(rng, 0.0005, 0.002),
            angle,
        };
        planet.parent_star = Some(name.clone());

        planets.push(planet);
    }

    StarSystem {
        id: StarId(generate_uuid(rng)),
        name,
        position,
        radius: star_radius,
        color,
        planets,
    }
}

/// Generate `count` star systems spread over a disc of `radius`, each with
/// 2–8 planets.
pub fn generate_galaxy(rng: &mut impl Rng, count: usize, radius: f32) -> Vec<StarSystem> {
    generate_galaxy_from_config(
        rng,
        &GalaxyConfig {
            star_systems: count,
            radius,
            ..GalaxyConfig::default()
        },
    )
}

/// Planets for one system, uniform in `[min, max]`.
fn planet_count(rng: &mut impl Rng, min: u32, max: u32) -> u32 {
    if max <= min {
        return min;
    }
    rng.gen_range(min..=max)
}

pub fn generate_galaxy_from_config(rng: &mut impl Rng, config: &GalaxyConfig) -> Vec<StarSystem> {
    let count = config.star_systems;
    let mut galaxy = Vec::with_capacity(count);

    for index in 0..count {
        let angle = index as f32 * SPIRAL_ANGLE_STEP;
        let distance = config.radius * (index as f32 / count as f32);

        let position = Vec3::new(
            angle.cos() * distance,
            random_float(rng, -GALAXY_THICKNESS, GALAXY_THICKNESS),
            angle.sin() * distance,
        );

        let planets = planet_count(rng, config.min_planets, config.max_planets);
        galaxy.push(generate_star_system(rng, position, planets as usize));
    }

    log::info!(
        "Generated galaxy: {} star systems, {} planets",
        galaxy.len(),
        galaxy.iter().map(StarSystem::planet_count).sum::<usize>()
    );

    galaxy
}

/// Background star points uniform in a cube of side `extent` around the origin.
pub fn generate_starfield(rng: &mut impl Rng, count: usize, extent: f32) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * extent,
                (rng.gen::<f32>() - 0.5) * extent,
                (rng.gen::<f32>() - 0.5) * extent,
            )
        })
        .collect()
}
