//! Starfarer Headless Harness
//!
//! Validates galaxy generation, ship kinematics and the mission lifecycle
//! by driving real sessions frame by frame. No renderer, no browser.
//!
//! Usage:
//!   cargo run -p starfarer-simtest
//!   cargo run -p starfarer-simtest -- --verbose --seed 42
//!   cargo run -p starfarer-simtest -- --config game.json

use glam::Vec3;
use rand::{Rng, SeedableRng};

use starfarer_core::prelude::*;
use starfarer_logic::config::{GalaxyConfig, MissionRules};
use starfarer_logic::generation::generate_galaxy_from_config;
use starfarer_logic::mission::{
    MissionBoard, MissionError, MissionId, PlanetRef, ProgressUpdate,
};
use starfarer_logic::spaceship::{ShipError, Spaceship, MAX_FUEL, MAX_SHIELD};
use starfarer_logic::star::StarSystem;
use starfarer_logic::GameRng;

const DEFAULT_SEED: u64 = 42;
const SHIP_COMMANDS: u32 = 9;
const GENERATION_SWEEP: u64 = 10;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

impl TestResult {
    fn new(name: &str, passed: bool, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed,
            detail: detail.into(),
        }
    }
}

struct Args {
    verbose: bool,
    seed: u64,
    config: Option<String>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        verbose: false,
        seed: DEFAULT_SEED,
        config: None,
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--verbose" | "-v" => args.verbose = true,
            "--seed" => {
                let value = it.next().ok_or("--seed needs a value")?;
                args.seed = value
                    .parse()
                    .map_err(|e| format!("bad --seed {:?}: {}", value, e))?;
            }
            "--config" => args.config = Some(it.next().ok_or("--config needs a path")?),
            other => return Err(format!("unknown argument {:?}", other)),
        }
    }
    Ok(args)
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("usage: starfarer-simtest [--verbose] [--seed N] [--config PATH]");
            std::process::exit(2);
        }
    };

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    println!("=== Starfarer Simulation Harness ===\n");

    let mut results = Vec::new();

    // 1. Configuration
    let config = match load_config(&args, &mut results) {
        Some(config) => config,
        None => GameConfig {
            seed: Some(args.seed),
            ..GameConfig::default()
        },
    };
    if args.verbose {
        if let Ok(json) = serde_json::to_string_pretty(&config) {
            println!("{}\n", json);
        }
    }
    let seed = config.seed.unwrap_or(args.seed);
    log::info!("Running harness with seed {}", seed);

    // 2. Galaxy generation sweep
    results.extend(validate_generation(&config.galaxy, seed, args.verbose));

    // 3. Ship kinematics under random commands
    results.extend(validate_ship(&config, seed, args.verbose));

    // 4. Mission board lifecycle
    results.extend(validate_missions(&config, seed, args.verbose));

    // 5. Full sessions
    results.extend(validate_session(&config, seed, args.verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.len() - passed;

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || args.verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed,
        results.len(),
        failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Configuration ────────────────────────────────────────────────────

fn load_config(args: &Args, results: &mut Vec<TestResult>) -> Option<GameConfig> {
    println!("--- Configuration ---");

    let loaded = match &args.config {
        Some(path) => GameConfig::load(path),
        None => Ok(GameConfig::default()),
    };

    match loaded {
        Ok(mut config) => {
            config.seed = config.seed.or(Some(args.seed));
            results.push(TestResult::new(
                "config_valid",
                config.validate().is_ok(),
                format!(
                    "{} systems, {}-{} planets each, seed {:?}",
                    config.galaxy.star_systems,
                    config.galaxy.min_planets,
                    config.galaxy.max_planets,
                    config.seed
                ),
            ));
            Some(config)
        }
        Err(e) => {
            results.push(TestResult::new("config_load", false, e.to_string()));
            None
        }
    }
}

// ── 2. Galaxy Generation ────────────────────────────────────────────────

fn validate_generation(config: &GalaxyConfig, seed: u64, verbose: bool) -> Vec<TestResult> {
    println!("--- Galaxy Generation ---");
    let mut results = Vec::new();

    let galaxies: Vec<Vec<StarSystem>> = (seed..seed + GENERATION_SWEEP)
        .map(|s| generate_galaxy_from_config(&mut GameRng::seed_from_u64(s), config))
        .collect();

    let wrong_size = galaxies
        .iter()
        .filter(|g| g.len() != config.star_systems)
        .count();
    results.push(TestResult::new(
        "galaxy_system_count",
        wrong_size == 0,
        format!(
            "{} galaxies of {} systems, {} wrong",
            galaxies.len(),
            config.star_systems,
            wrong_size
        ),
    ));

    let planet_range = config.min_planets as usize..=config.max_planets as usize;
    let bad_counts = galaxies
        .iter()
        .flatten()
        .filter(|s| !planet_range.contains(&s.planet_count()))
        .count();
    results.push(TestResult::new(
        "galaxy_planet_counts",
        bad_counts == 0,
        format!("{} systems outside {:?} planets", bad_counts, planet_range),
    ));

    let planets: Vec<_> = galaxies
        .iter()
        .flatten()
        .flat_map(|s| s.planets.iter())
        .collect();
    let out_of_range = planets
        .iter()
        .filter(|p| {
            let c = &p.characteristics;
            !(0.0..=1.0).contains(&c.atmosphere_density)
                || !(0.1..=2.5).contains(&c.gravity)
                || !(-200.0..=400.0).contains(&c.temperature)
                || starfarer_logic::planet::ResourceKind::ALL
                    .iter()
                    .any(|&k| !(0.0..=100.0).contains(&c.resources.get(k)))
        })
        .count();
    results.push(TestResult::new(
        "planet_attribute_ranges",
        out_of_range == 0,
        format!("{} planets checked, {} out of range", planets.len(), out_of_range),
    ));

    let misplaced = galaxies
        .iter()
        .flatten()
        .flat_map(|s| s.planets.iter().map(move |p| (s, p)))
        .filter(|(s, p)| {
            let offset = p.position - s.position;
            let planar = Vec3::new(offset.x, 0.0, offset.z).length();
            p.orbit.center != s.position || (planar - p.orbit.radius).abs() > 1e-2
        })
        .count();
    results.push(TestResult::new(
        "planets_offset_from_star",
        misplaced == 0,
        format!("{} planets off their orbit", misplaced),
    ));

    let again = generate_galaxy_from_config(&mut GameRng::seed_from_u64(seed), config);
    results.push(TestResult::new(
        "generation_deterministic",
        galaxies.first() == Some(&again),
        format!("seed {} regenerated", seed),
    ));

    if verbose {
        if let Some(system) = galaxies.first().and_then(|g| g.first()) {
            println!(
                "  first system: {} ({} planets, radius {:.1})",
                system.name,
                system.planet_count(),
                system.radius
            );
        }
    }

    results
}

// ── 3. Ship Kinematics ──────────────────────────────────────────────────

/// One random pilot command. Commands past the last arm just coast. Returns
/// false when thrust was refused for lack of fuel.
fn apply_command(ship: &mut Spaceship, command: u32, rng: &mut impl Rng) -> bool {
    match command {
        0 | 1 => return !matches!(ship.accelerate(), Err(ShipError::OutOfFuel)),
        2 => {
            ship.decelerate();
        }
        3 => ship.rotate_left(),
        4 => ship.pitch_up(),
        5 => {
            ship.refuel(rng.gen_range(-50.0..150.0));
        }
        6 => {
            ship.take_damage(rng.gen_range(0.0..60.0));
        }
        7 => {
            ship.repair_shield(rng.gen_range(-20.0..80.0));
        }
        _ => {}
    }
    true
}

fn validate_ship(config: &GameConfig, seed: u64, verbose: bool) -> Vec<TestResult> {
    println!("--- Ship Kinematics ---");
    let mut results = Vec::new();
    let mut rng = GameRng::seed_from_u64(seed);
    let mut ship = Spaceship::new(config.ship.clone());

    let steps = 20_000;
    let mut violations = 0;
    let mut out_of_fuel = 0;
    for _ in 0..steps {
        let command = rng.gen_range(0..SHIP_COMMANDS);
        if !apply_command(&mut ship, command, &mut rng) {
            out_of_fuel += 1;
        }
        ship.update();

        if !(0.0..=MAX_FUEL).contains(&ship.fuel())
            || !(0.0..=MAX_SHIELD).contains(&ship.shield())
            || !(0.0..=ship.params().max_speed).contains(&ship.speed)
        {
            violations += 1;
        }
    }
    results.push(TestResult::new(
        "ship_levels_clamped",
        violations == 0,
        format!(
            "{} random steps, {} violations, {} empty-tank burns",
            steps, violations, out_of_fuel
        ),
    ));

    let mut dry = Spaceship::new(starfarer_logic::config::ShipConfig {
        starting_fuel: 0.0,
        ..config.ship.clone()
    });
    let refused = dry.accelerate() == Err(ShipError::OutOfFuel);
    results.push(TestResult::new(
        "ship_empty_tank",
        refused && dry.speed == 0.0 && dry.fuel() == 0.0,
        format!("speed {:.2}, fuel {:.2}", dry.speed, dry.fuel()),
    ));

    if verbose {
        println!(
            "  final ship: fuel {:.1}, shield {:.1}, speed {:.2}",
            ship.fuel(),
            ship.shield(),
            ship.speed
        );
    }

    results
}

// ── 4. Mission Board ────────────────────────────────────────────────────

fn validate_missions(config: &GameConfig, seed: u64, verbose: bool) -> Vec<TestResult> {
    println!("--- Mission Board ---");
    let mut results = Vec::new();
    let mut rng = GameRng::seed_from_u64(seed);

    let galaxy = generate_galaxy_from_config(&mut rng, &config.galaxy);
    let planets: Vec<PlanetRef> = galaxy
        .iter()
        .flat_map(|s| s.planets.iter())
        .map(PlanetRef::from)
        .collect();

    let mut board = MissionBoard::new(&config.missions);
    let offered = board.generate(config.missions.initial_missions.max(2), &planets, &mut rng);
    results.push(TestResult::new(
        "missions_generated",
        offered == config.missions.initial_missions.max(2),
        format!("{} missions over {} planets", offered, planets.len()),
    ));

    let targets_known = board
        .available()
        .iter()
        .all(|m| planets.iter().any(|p| p.id == m.target.planet_id));
    results.push(TestResult::new(
        "missions_target_real_planets",
        targets_known,
        "every target resolves to a generated planet",
    ));

    let before = board.available().to_vec();
    let unknown = MissionId(starfarer_logic::math::generate_uuid(&mut rng));
    let rejected = board.accept(unknown) == Err(MissionError::UnknownMission(unknown));
    results.push(TestResult::new(
        "accept_unknown_rejected",
        rejected && board.available() == before.as_slice() && board.current().is_none(),
        "unknown id leaves the board unchanged",
    ));

    let [first, second, ..] = before.as_slice() else {
        results.push(TestResult::new(
            "single_active_mission",
            false,
            format!("need two offered missions, got {}", before.len()),
        ));
        return results;
    };
    let (first, second) = (first.id, second.id);
    let accepted = board.accept(first).is_ok();
    let blocked = board.accept(second) == Err(MissionError::AlreadyActive(first));
    results.push(TestResult::new(
        "single_active_mission",
        accepted && blocked,
        "second accept rejected while one is active",
    ));

    let mut completions = 0;
    let mut monotonic = true;
    let mut last = 0.0;
    let mut ticks = 0;
    while board.current().is_some() && ticks < 10_000 {
        ticks += 1;
        match board.accrue(rng.gen_range(0.0..1.0), &planets, &mut rng) {
            Ok(ProgressUpdate::Advanced { progress, .. }) => {
                monotonic &= progress >= last;
                last = progress;
            }
            Ok(ProgressUpdate::Completed(_)) => completions += 1,
            Err(_) => break,
        }
    }
    results.push(TestResult::new(
        "progress_completes_once",
        completions == 1 && monotonic,
        format!("completed after {} ticks", ticks),
    ));
    results.push(TestResult::new(
        "completion_replaces_mission",
        board.available().len() == before.len() && board.completed().len() == 1,
        format!(
            "{} available, {} completed",
            board.available().len(),
            board.completed().len()
        ),
    ));

    let mut empty = MissionBoard::new(&MissionRules::default());
    results.push(TestResult::new(
        "no_planets_no_missions",
        empty.generate(3, &[], &mut rng) == 0 && empty.available().is_empty(),
        "empty galaxy yields no missions",
    ));

    if verbose {
        for mission in board.available() {
            println!("  offered: [{}] {}", mission.mission_type().label(), mission.title);
        }
    }

    results
}

// ── 5. Sessions ─────────────────────────────────────────────────────────

fn scripted_run(config: &GameConfig, frames: usize) -> Option<GameSession> {
    let mut session = GameSession::new(config.clone()).ok()?;
    session.finish_loading();
    for frame in 0..frames {
        let key = match frame % 120 {
            0 => Some((Key::Forward, true)),
            60 => Some((Key::Forward, false)),
            70 => Some((Key::TurnLeft, true)),
            90 => Some((Key::TurnLeft, false)),
            _ => None,
        };
        match key {
            Some((key, true)) => session.key_down(key),
            Some((key, false)) => session.key_up(key),
            None => {}
        }
        session.tick();
    }
    Some(session)
}

fn validate_session(config: &GameConfig, seed: u64, verbose: bool) -> Vec<TestResult> {
    println!("--- Sessions ---");
    let mut results = Vec::new();
    let config = GameConfig {
        seed: Some(seed),
        ..config.clone()
    };

    let (Some(a), Some(b)) = (scripted_run(&config, 600), scripted_run(&config, 600)) else {
        results.push(TestResult::new("session_start", false, "session rejected config"));
        return results;
    };
    results.push(TestResult::new(
        "session_deterministic",
        a.planets() == b.planets() && a.player.position == b.player.position,
        format!("ship at {:?} after {} frames", a.player.position, a.ticks()),
    ));

    let Some(mut session) = GameSession::new(GameConfig {
        collision_damage: 0.0,
        ..config.clone()
    })
    .ok() else {
        return results;
    };
    session.finish_loading();
    session.drain_events();

    let Some(mission) = session.missions.available().first().cloned() else {
        results.push(TestResult::new("session_loiter", false, "no missions offered"));
        return results;
    };
    let accepted = session.accept_mission(mission.id).is_ok();

    let mut frames = 0;
    while session.missions.current().is_some() && frames < 2000 {
        frames += 1;
        let Some(planet) = session.planet(mission.target.planet_id) else {
            break;
        };
        session
            .player
            .set_position(planet.position + Vec3::new(0.0, planet.radius * 1.8, 0.0));
        session.tick();
    }
    let completed = session
        .drain_events()
        .iter()
        .filter(|e| matches!(e, GameEvent::MissionCompleted { .. }))
        .count();
    results.push(TestResult::new(
        "session_loiter_completes",
        accepted && completed == 1 && session.missions.completed().len() == 1,
        format!("\"{}\" completed in {} frames", mission.title, frames),
    ));

    if verbose {
        println!(
            "  {} stars, {} planets, camera eye {:?}",
            session.star_count(),
            session.planet_count(),
            session.camera().eye
        );
    }

    results
}
