//! Name generation for planets and stars.
//!
//! Names are prefix + suffix concatenations; nothing checks for uniqueness.

use rand::Rng;

use crate::math::{random_index, random_int};

/// Planet name such as `Kronox-417`.
pub fn generate_planet_name(rng: &mut impl Rng) -> String {
    let number = random_int(rng, 0, 999);
    let prefix = PLANET_PREFIXES[random_index(rng, PLANET_PREFIXES.len())];
    let suffix = PLANET_SUFFIXES[random_index(rng, PLANET_SUFFIXES.len())];

    format!("{}{}-{}", prefix, suffix, number)
}

/// Star name such as `Gamma Draconis`.
pub fn generate_star_name(rng: &mut impl Rng) -> String {
    let prefix = STAR_PREFIXES[random_index(rng, STAR_PREFIXES.len())];
    let suffix = STAR_SUFFIXES[random_index(rng, STAR_SUFFIXES.len())];

    format!("{} {}", prefix, suffix)
}

static PLANET_PREFIXES: &[&str] = &[
    "Al", "Ze", "Kro", "Thr", "Vex", "Nep", "Plu", "Sat", "Jup", "Mar",
];

static PLANET_SUFFIXES: &[&str] = &[
    "thor", "nox", "tron", "ton", "tex", "nus", "ter", "urn", "tis", "dor",
];

static STAR_PREFIXES: &[&str] = &[
    "Sol", "Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Eta", "Theta",
];

static STAR_SUFFIXES: &[&str] = &[
    "Centauri", "Cygni", "Draconis", "Eridani", "Lyrae", "Orionis", "Persei", "Tauri",
];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaChaRng;

    #[test]
    fn test_planet_name_shape() {
        let mut rng = ChaChaRng::seed_from_u64(11);
        for _ in 0..200 {
            let name = generate_planet_name(&mut rng);
            let (stem, number) = name.rsplit_once('-').unwrap();
            assert!(PLANET_PREFIXES.iter().any(|p| stem.starts_with(p)));
            assert!(PLANET_SUFFIXES.iter().any(|s| stem.ends_with(s)));
            let n: u32 = number.parse().unwrap();
            assert!(n <= 999);
        }
    }

    #[test]
    fn test_star_name_shape() {
        let mut rng = ChaChaRng::seed_from_u64(12);
        let name = generate_star_name(&mut rng);
        let (prefix, suffix) = name.split_once(' ').unwrap();
        assert!(STAR_PREFIXES.contains(&prefix));
        assert!(STAR_SUFFIXES.contains(&suffix));
    }

    #[test]
    fn test_name_variety() {
        let mut rng = ChaChaRng::seed_from_u64(13);
        let names: std::collections::HashSet<String> =
            (0..100).map(|_| generate_planet_name(&mut rng)).collect();
        assert!(names.len() > 50);
    }
}
