//! Generation feeding the mission board, end to end through the public API.

use rand::SeedableRng;
use starfarer_logic::config::{GalaxyConfig, MissionRules};
use starfarer_logic::generation::generate_galaxy_from_config;
use starfarer_logic::mission::{
    proximity_gain, MissionBoard, MissionStatus, PlanetRef, ProgressUpdate,
};
use starfarer_logic::GameRng;

fn planets_of(galaxy: &[starfarer_logic::star::StarSystem]) -> Vec<PlanetRef> {
    galaxy
        .iter()
        .flat_map(|s| s.planets.iter())
        .map(PlanetRef::from)
        .collect()
}

#[test]
fn test_missions_target_generated_planets() {
    let mut rng = GameRng::seed_from_u64(7);
    let galaxy = generate_galaxy_from_config(&mut rng, &GalaxyConfig::default());
    let planets = planets_of(&galaxy);
    assert!(planets.len() >= 20);

    let mut board = MissionBoard::new(&MissionRules::default());
    assert_eq!(board.generate(10, &planets, &mut rng), 10);

    for mission in board.available() {
        let planet = galaxy
            .iter()
            .flat_map(|s| s.planets.iter())
            .find(|p| p.id == mission.target.planet_id)
            .expect("target exists");
        assert_eq!(mission.target.planet_name, planet.name);
        assert_eq!(mission.target.star_name, planet.parent_star);
    }
}

#[test]
fn test_loiter_until_complete() {
    let mut rng = GameRng::seed_from_u64(8);
    let galaxy = generate_galaxy_from_config(&mut rng, &GalaxyConfig::default());
    let planets = planets_of(&galaxy);

    let mut board = MissionBoard::new(&MissionRules::default());
    board.generate(3, &planets, &mut rng);
    let id = board.available()[0].id;
    board.accept(id).unwrap();

    // Parked at the target's centre.
    let gain = proximity_gain(0.0, 10.0).unwrap();
    let mut ticks = 0;
    let completed = loop {
        ticks += 1;
        match board.accrue(gain.progress, &planets, &mut rng).unwrap() {
            ProgressUpdate::Advanced { .. } => continue,
            ProgressUpdate::Completed(mission) => break mission,
        }
    };

    assert_eq!(completed.id, id);
    assert_eq!(completed.status, MissionStatus::Completed);
    assert_eq!(ticks, 200);
    assert_eq!(board.completed().len(), 1);
    assert_eq!(board.available().len(), 3);
}

#[test]
fn test_same_seed_same_missions() {
    let run = |seed: u64| {
        let mut rng = GameRng::seed_from_u64(seed);
        let galaxy = generate_galaxy_from_config(&mut rng, &GalaxyConfig::default());
        let mut board = MissionBoard::default();
        board.generate(5, &planets_of(&galaxy), &mut rng);
        board.available().to_vec()
    };
    assert_eq!(run(99), run(99));
}
