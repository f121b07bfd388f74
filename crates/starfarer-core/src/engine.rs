//! Game session - main entry point for running the game

use glam::Vec3;
use hecs::World;
use rand::SeedableRng;

use starfarer_logic::config::{ConfigError, GameConfig};
use starfarer_logic::generation::generate_starfield;
use starfarer_logic::math::ray_sphere_intersection;
use starfarer_logic::mission::{
    Mission, MissionBoard, MissionError, MissionId, PlanetRef, ProgressUpdate,
};
use starfarer_logic::planet::{Planet, PlanetId, PlanetInfo};
use starfarer_logic::spaceship::{ShieldStatus, ShipError, Spaceship};
use starfarer_logic::GameRng;

use crate::camera::CameraPose;
use crate::components::*;
use crate::events::{EventLog, GameEvent};
use crate::generation::{generate_galaxy, planet_refs, GalaxyLayout};
use crate::input::{Controls, Key};
use crate::loading::LoadingProgress;
use crate::panels::Panels;
use crate::systems::*;

/// Missions are offered when the player is within this many radii of the
/// selected planet.
pub const MISSION_OFFER_RANGE_FACTOR: f32 = 3.0;

/// One running game: the galaxy, the player's ship and everything around it.
pub struct GameSession {
    /// ECS world containing stars and planets
    pub world: World,
    /// Entity handles in spawn order
    pub layout: GalaxyLayout,
    pub player: Spaceship,
    pub missions: MissionBoard,
    pub controls: Controls,
    pub panels: Panels,
    /// Background star points
    pub starfield: Vec<Vec3>,
    pub loading: LoadingProgress,

    config: GameConfig,
    targets: Vec<PlanetRef>,
    camera: CameraPose,
    events: EventLog,
    rng: GameRng,
    is_loading: bool,
    ticks: u64,
    fuel_warned: bool,
}

impl GameSession {
    /// Build a session: starfield, galaxy, then the opening mission board.
    /// The session starts in the loading state.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => GameRng::seed_from_u64(seed),
            None => GameRng::from_entropy(),
        };

        let starfield = generate_starfield(
            &mut rng,
            config.galaxy.starfield_points,
            config.galaxy.starfield_extent,
        );

        let mut world = World::new();
        let layout = generate_galaxy(&mut world, &config.galaxy, &mut rng);
        let targets = planet_refs(&world, &layout);

        let mut missions = MissionBoard::new(&config.missions);
        missions.generate(config.missions.initial_missions, &targets, &mut rng);

        let player = Spaceship::new(config.ship.clone());
        let camera = CameraPose::follow(&player);

        log::info!(
            "Session ready: {} stars, {} planets, {} missions offered",
            layout.star_count(),
            layout.planet_count(),
            missions.available().len()
        );

        Ok(Self {
            world,
            layout,
            player,
            missions,
            controls: Controls::default(),
            panels: Panels::new(),
            starfield,
            loading: LoadingProgress::new(),
            config,
            targets,
            camera,
            events: EventLog::new(),
            rng,
            is_loading: true,
            ticks: 0,
            fuel_warned: false,
        })
    }

    // ========================================================================
    // LOADING
    // ========================================================================

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Step the loading ticker. Returns the new percentage.
    pub fn advance_loading(&mut self) -> u32 {
        self.loading.advance()
    }

    /// Leave the loading state and greet the player. Later calls do nothing.
    pub fn finish_loading(&mut self) {
        if !self.is_loading {
            return;
        }
        self.is_loading = false;
        self.events.push(GameEvent::Welcome);
    }

    // ========================================================================
    // FRAME UPDATE
    // ========================================================================

    /// Advance one frame. Does nothing while loading; returns whether the
    /// frame ran.
    pub fn tick(&mut self) -> bool {
        if self.is_loading {
            return false;
        }

        // Controls
        match self.controls.apply(&mut self.player) {
            Err(ShipError::OutOfFuel) => {
                if !self.fuel_warned {
                    self.events.push(GameEvent::OutOfFuel);
                    self.fuel_warned = true;
                }
            }
            Ok(()) => self.fuel_warned = false,
        }

        // Player
        self.player.update();

        // Camera
        self.camera = CameraPose::follow(&self.player);

        // Planets
        orbit_system(&mut self.world);

        // Missions
        self.check_mission_progress();

        // Collisions
        self.check_collisions();

        self.ticks += 1;
        true
    }

    fn check_mission_progress(&mut self) {
        let Some(outcome) = mission_proximity_system(
            &self.world,
            &self.layout,
            &mut self.missions,
            self.player.position,
            &self.targets,
            &mut self.rng,
        ) else {
            return;
        };

        if outcome.gain.in_info_range && self.panels.show_planet_info(outcome.target) {
            let planet = self.planet_name(outcome.planet);
            self.events.push(GameEvent::PlanetInRange { planet });
        }

        if let ProgressUpdate::Completed(mission) = outcome.update {
            self.reward(&mission);
        }
    }

    fn check_collisions(&mut self) {
        let Some(hit) = collision_system(
            &self.world,
            &self.layout,
            &mut self.player,
            self.config.collision_damage,
            self.config.collision_bounce,
        ) else {
            return;
        };

        self.events.push(GameEvent::Collision {
            planet: hit.planet_name,
        });
        match hit.shield {
            ShieldStatus::Depleted => self.events.push(GameEvent::ShieldDepleted),
            ShieldStatus::Critical => self.events.push(GameEvent::ShieldCritical),
            ShieldStatus::Nominal => {}
        }
    }

    fn reward(&mut self, mission: &Mission) {
        let rules = &self.config.missions;
        self.player.refuel(rules.completion_fuel_reward);
        self.player.repair_shield(rules.completion_shield_reward);
        self.panels.hide_mission_details();
        self.events.push(GameEvent::MissionCompleted {
            title: mission.title.clone(),
            fuel_reward: rules.completion_fuel_reward,
            shield_reward: rules.completion_shield_reward,
        });
    }

    // ========================================================================
    // INPUT
    // ========================================================================

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Missions => self
                .panels
                .toggle_mission_panel(self.missions.current().is_some()),
            Key::Escape => self.panels.hide_all(),
            key if key.is_flight_control() => self.controls.set(key, true),
            _ => {}
        }
    }

    pub fn key_up(&mut self, key: Key) {
        if key.is_flight_control() {
            self.controls.set(key, false);
        }
    }

    /// Nearest planet hit by a ray, e.g. one cast from the camera through the
    /// cursor.
    pub fn pick_planet(&self, origin: Vec3, direction: Vec3) -> Option<PlanetId> {
        self.world
            .query::<(&PlanetBody, &Position, &Celestial)>()
            .iter()
            .filter_map(|(_, (body, position, celestial))| {
                ray_sphere_intersection(origin, direction, position.0, celestial.radius)
                    .map(|t| (t, body.id))
            })
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, id)| id)
    }

    /// Show a planet's info panel, plus the mission list when the player is
    /// close enough. Returns false for an unknown planet.
    pub fn select_planet(&mut self, id: PlanetId) -> bool {
        let Some(planet) = self.planet(id) else {
            return false;
        };

        self.panels.show_planet_info(id);
        if planet.position.distance(self.player.position)
            < planet.radius * MISSION_OFFER_RANGE_FACTOR
        {
            self.panels.show_available_missions();
        }
        self.events.push(GameEvent::PlanetSelected { planet: planet.name });
        true
    }

    /// Pick and select in one go, as a mouse click would. Ignored while
    /// loading.
    pub fn click(&mut self, origin: Vec3, direction: Vec3) -> Option<PlanetId> {
        if self.is_loading {
            return None;
        }
        let id = self.pick_planet(origin, direction)?;
        self.select_planet(id);
        Some(id)
    }

    // ========================================================================
    // MISSIONS & SHIP
    // ========================================================================

    pub fn accept_mission(&mut self, id: MissionId) -> Result<(), MissionError> {
        let title = self.missions.accept(id)?.title.clone();
        self.panels.hide_available_missions();
        self.events.push(GameEvent::MissionAccepted { title });
        Ok(())
    }

    pub fn abandon_mission(&mut self) -> Result<(), MissionError> {
        let title = self.missions.abandon()?.title.clone();
        self.panels.hide_mission_details();
        self.events.push(GameEvent::MissionAbandoned { title });
        Ok(())
    }

    pub fn refuel(&mut self, amount: f32) -> f32 {
        let level = self.player.refuel(amount);
        self.events.push(GameEvent::Refueled { amount });
        level
    }

    pub fn repair_shield(&mut self, amount: f32) -> f32 {
        let level = self.player.repair_shield(amount);
        self.events.push(GameEvent::ShieldRepaired { amount });
        level
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn planet(&self, id: PlanetId) -> Option<Planet> {
        planet_snapshot(&self.world, self.layout.planet_entity(id)?)
    }

    pub fn planet_info(&self, id: PlanetId) -> Option<PlanetInfo> {
        self.planet(id).map(|p| p.info())
    }

    /// Every planet, in scan order.
    pub fn planets(&self) -> Vec<Planet> {
        self.layout
            .planets
            .iter()
            .filter_map(|&entity| planet_snapshot(&self.world, entity))
            .collect()
    }

    /// Mission target candidates, in scan order.
    pub fn target_planets(&self) -> &[PlanetRef] {
        &self.targets
    }

    pub fn camera(&self) -> CameraPose {
        self.camera
    }

    /// Events produced since the last call, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Frames run since loading finished.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn star_count(&self) -> usize {
        self.world.query::<&StarBody>().iter().count()
    }

    pub fn planet_count(&self) -> usize {
        self.world.query::<&PlanetBody>().iter().count()
    }

    fn planet_name(&self, entity: hecs::Entity) -> String {
        self.world
            .get::<&Celestial>(entity)
            .map(|c| c.name.clone())
            .unwrap_or_default()
    }
}
