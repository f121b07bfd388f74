//! Planet generation - type, size and characteristics.

use glam::Vec3;
use rand::Rng;

use crate::generation::generate_planet_name;
use crate::math::{generate_uuid, random_float, random_index, roll_above};
use crate::planet::{
    Characteristics, InhabitedStatus, Orbit, Planet, PlanetId, PlanetType, Resources, Spin,
};

pub const DEFAULT_MIN_PLANET_RADIUS: f32 = 5.0;
pub const DEFAULT_MAX_PLANET_RADIUS: f32 = 15.0;

/// Chance a gas giant gets a ring system.
const RING_THRESHOLD: f32 = 0.6;

/// Generate a free-floating planet at `position` with a radius in
/// `[min_radius, max_radius]`. Orbit and parent star are left unset;
/// [`generate_star_system`](crate::generation::generate_star_system) fills them.
pub fn generate_planet(
    rng: &mut impl Rng,
    position: Vec3,
    min_radius: f32,
    max_radius: f32,
) -> Planet {
    let radius = random_float(rng, min_radius, max_radius);
    let planet_type = generate_planet_type(rng);
    let name = generate_planet_name(rng);
    let characteristics = generate_characteristics(rng);
    let id = PlanetId(generate_uuid(rng));
    let spin = Spin::new(random_float(rng, 0.001, 0.005));
    let has_rings = planet_type == PlanetType::GasGiant && roll_above(rng, RING_THRESHOLD);

    Planet {
        id,
        name,
        planet_type,
        radius,
        position,
        characteristics,
        orbit: Orbit::STATIONARY,
        spin,
        parent_star: None,
        color: planet_type.color(),
        has_rings,
    }
}

pub fn generate_planet_type(rng: &mut impl Rng) -> PlanetType {
    PlanetType::ALL[random_index(rng, PlanetType::ALL.len())]
}

/// Draw every characteristic independently and uniformly.
pub fn generate_characteristics(rng: &mut impl Rng) -> Characteristics {
    Characteristics {
        has_water: roll_above(rng, 0.5),
        has_atmosphere: roll_above(rng, 0.3),
        atmosphere_density: random_float(rng, 0.0, 1.0),
        temperature: random_float(rng, -200.0, 400.0),
        gravity: random_float(rng, 0.1, 2.5),
        resources: generate_resources(rng),
        inhabited_status: generate_inhabited_status(rng),
    }
}

pub fn generate_resources(rng: &mut impl Rng) -> Resources {
    Resources {
        minerals: random_float(rng, 0.0, 100.0),
        gases: random_float(rng, 0.0, 100.0),
        water: random_float(rng, 0.0, 100.0),
        organics: random_float(rng, 0.0, 100.0),
        energy: random_float(rng, 0.0, 100.0),
    }
}

pub fn generate_inhabited_status(rng: &mut impl Rng) -> InhabitedStatus {
    InhabitedStatus::from_roll(rng.gen::<f32>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaChaRng;

    #[test]
    fn test_planet_attribute_ranges() {
        let mut rng = ChaChaRng::seed_from_u64(21);
        for _ in 0..500 {
            let p = generate_planet(
                &mut rng,
                Vec3::ZERO,
                DEFAULT_MIN_PLANET_RADIUS,
                DEFAULT_MAX_PLANET_RADIUS,
            );
            let c = &p.characteristics;
            assert!((5.0..=15.0).contains(&p.radius));
            assert!((0.0..=1.0).contains(&c.atmosphere_density));
            assert!((-200.0..=400.0).contains(&c.temperature));
            assert!((0.1..=2.5).contains(&c.gravity));
            for kind in crate::planet::ResourceKind::ALL {
                assert!((0.0..=100.0).contains(&c.resources.get(kind)));
            }
            assert!((0.001..=0.005).contains(&p.spin.speed));
            assert_eq!(p.color, p.planet_type.color());
            if p.has_rings {
                assert_eq!(p.planet_type, PlanetType::GasGiant);
            }
        }
    }

    #[test]
    fn test_all_planet_types_appear() {
        let mut rng = ChaChaRng::seed_from_u64(22);
        let seen: std::collections::HashSet<PlanetType> =
            (0..500).map(|_| generate_planet_type(&mut rng)).collect();
        assert_eq!(seen.len(), PlanetType::ALL.len());
    }

    #[test]
    fn test_inhabited_distribution_roughly_banded() {
        let mut rng = ChaChaRng::seed_from_u64(23);
        let n = 10_000;
        let uninhabited = (0..n)
            .filter(|_| generate_inhabited_status(&mut rng) == InhabitedStatus::Uninhabited)
            .count();
        let share = uninhabited as f32 / n as f32;
        assert!((0.45..0.55).contains(&share), "share was {}", share);
    }

    #[test]
    fn test_free_planet_has_no_orbit_or_star() {
        let mut rng = ChaChaRng::seed_from_u64(24);
        let p = generate_planet(&mut rng, Vec3::ONE, 5.0, 15.0);
        assert!(!p.orbit.is_orbiting());
        assert!(p.parent_star.is_none());
        assert_eq!(p.position, Vec3::ONE);
    }
}
