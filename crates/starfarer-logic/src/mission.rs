//! Missions - content generation, lifecycle and proximity-driven progress.
//!
//! Lifecycle: `Available → Active → {Completed | Abandoned}`. At most one
//! mission is active. Progress accrues while the player loiters near the
//! target planet and completion fires exactly once when it reaches 100.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::MissionRules;
use crate::math::{clamp, generate_uuid, random_index, random_int};
use crate::planet::{Planet, PlanetId, PlanetType, ResourceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MissionId(pub Uuid);

impl fmt::Display for MissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// MISSION TYPES
// ============================================================================

/// Flavor of mission, drawn uniformly when generating content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissionType {
    Exploration,
    ResourceCollection,
    Rescue,
    Research,
    Delivery,
}

impl MissionType {
    pub const ALL: [MissionType; 5] = [
        Self::Exploration,
        Self::ResourceCollection,
        Self::Rescue,
        Self::Research,
        Self::Delivery,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Exploration => "exploration",
            Self::ResourceCollection => "resource-collection",
            Self::Rescue => "rescue",
            Self::Research => "research",
            Self::Delivery => "delivery",
        }
    }
}

/// Type-specific mission payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum MissionKind {
    Exploration,
    ResourceCollection { resource: ResourceKind, amount: u32 },
    Rescue,
    Research { phenomenon: PlanetType },
    Delivery,
}

impl MissionKind {
    pub fn mission_type(&self) -> MissionType {
        match self {
            Self::Exploration => MissionType::Exploration,
            Self::ResourceCollection { .. } => MissionType::ResourceCollection,
            Self::Rescue => MissionType::Rescue,
            Self::Research { .. } => MissionType::Research,
            Self::Delivery => MissionType::Delivery,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionStatus {
    Available,
    Active,
    Completed,
    Abandoned,
}

/// The planet a mission sends the player to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionTarget {
    pub planet_id: PlanetId,
    pub planet_name: String,
    pub star_name: Option<String>,
}

/// Lightweight view of a planet used as a mission target candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetRef {
    pub id: PlanetId,
    pub name: String,
    pub planet_type: PlanetType,
    pub parent_star: Option<String>,
}

impl PlanetRef {
    fn star_label(&self) -> &str {
        self.parent_star.as_deref().unwrap_or("Unknown")
    }

    fn as_target(&self) -> MissionTarget {
        MissionTarget {
            planet_id: self.id,
            planet_name: self.name.clone(),
            star_name: self.parent_star.clone(),
        }
    }
}

impl From<&Planet> for PlanetRef {
    fn from(planet: &Planet) -> Self {
        Self {
            id: planet.id,
            name: planet.name.clone(),
            planet_type: planet.planet_type,
            parent_star: planet.parent_star.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub id: MissionId,
    pub kind: MissionKind,
    pub title: String,
    pub description: String,
    pub objective: String,
    pub target: MissionTarget,
    /// 1 (easy) to 5 (hard).
    pub difficulty: u8,
    pub reward: u32,
    pub status: MissionStatus,
    /// Percent complete, 0–100.
    pub progress: f32,
}

impl Mission {
    pub fn mission_type(&self) -> MissionType {
        self.kind.mission_type()
    }
}

// ============================================================================
// CONTENT GENERATION
// ============================================================================

/// One mission of a uniformly drawn type. `None` when there are no planets.
pub fn generate_mission(planets: &[PlanetRef], rng: &mut impl Rng) -> Option<Mission> {
    let mission_type = MissionType::ALL[random_index(rng, MissionType::ALL.len())];
    create_mission(mission_type, planets, rng)
}

/// Build a mission of `mission_type` against a uniformly drawn planet.
///
/// Delivery missions draw a second planet independently and target that
/// one; nothing prevents it from being the first draw again.
pub fn create_mission(
    mission_type: MissionType,
    planets: &[PlanetRef],
    rng: &mut impl Rng,
) -> Option<Mission> {
    if planets.is_empty() {
        return None;
    }

    let id = MissionId(generate_uuid(rng));
    let difficulty = random_int(rng, 1, 5);
    let reward = difficulty * 100 + random_int(rng, 50, 150);
    let mut target = &planets[random_index(rng, planets.len())];

    let (kind, title, description, objective) = match mission_type {
        MissionType::Exploration => (
            MissionKind::Exploration,
            format!("Explore {}", target.name),
            format!(
                "Travel to and scan the uncharted planet {} in the {} system.",
                target.name,
                target.star_label()
            ),
            "Reach the target planet and perform a complete scan.".to_string(),
        ),
        MissionType::ResourceCollection => {
            let resource = ResourceKind::ALL[random_index(rng, ResourceKind::ALL.len())];
            let amount = random_int(rng, 10, 50) as u32;
            (
                MissionKind::ResourceCollection { resource, amount },
                format!("Collect {} from {}", resource, target.name),
                format!(
                    "Collect {} units of {} from {} in the {} system.",
                    amount,
                    resource,
                    target.name,
                    target.star_label()
                ),
                format!("Land on the planet and mine {} units of {}.", amount, resource),
            )
        }
        MissionType::Rescue => (
            MissionKind::Rescue,
            format!("Rescue mission to {}", target.name),
            format!(
                "A research team is stranded on {}. Their ship is damaged and they need immediate evacuation.",
                target.name
            ),
            "Land on the planet and rescue the research team.".to_string(),
        ),
        MissionType::Research => (
            MissionKind::Research {
                phenomenon: target.planet_type,
            },
            format!("Research {} phenomena on {}", target.planet_type, target.name),
            format!(
                "Scientists have detected unusual {} activity on {}. Collect data for their research.",
                target.planet_type, target.name
            ),
            "Travel to the planet and collect research data on the phenomena.".to_string(),
        ),
        MissionType::Delivery => {
            target = &planets[random_index(rng, planets.len())];
            (
                MissionKind::Delivery,
                format!("Deliver supplies to {}", target.name),
                format!(
                    "Transport essential supplies from your current location to {} in the {} system.",
                    target.name,
                    target.star_label()
                ),
                "Navigate to the destination planet and deliver the supplies.".to_string(),
            )
        }
    };

    Some(Mission {
        id,
        kind,
        title,
        description,
        objective,
        target: target.as_target(),
        difficulty: difficulty as u8,
        reward: reward as u32,
        status: MissionStatus::Available,
        progress: 0.0,
    })
}

// ============================================================================
// PROXIMITY ACCRUAL
// ============================================================================

/// Progress accrues inside `radius * PROXIMITY_RANGE_FACTOR` of the target.
pub const PROXIMITY_RANGE_FACTOR: f32 = 5.0;

/// Target details are surfaced inside `radius * INFO_RANGE_FACTOR`.
pub const INFO_RANGE_FACTOR: f32 = 2.0;

/// Progress per tick when sitting on the target's centre.
pub const MAX_PROGRESS_PER_TICK: f32 = 0.5;

/// Result of one proximity check against the mission target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityGain {
    pub progress: f32,
    pub in_info_range: bool,
}

/// Progress earned this tick at `distance` from a target of `radius`.
/// Closer means faster; `None` outside the accrual range.
pub fn proximity_gain(distance: f32, radius: f32) -> Option<ProximityGain> {
    let range = radius * PROXIMITY_RANGE_FACTOR;
    if radius <= 0.0 || distance >= range {
        return None;
    }
    Some(ProximityGain {
        progress: (1.0 - distance / range) * MAX_PROGRESS_PER_TICK,
        in_info_range: distance < radius * INFO_RANGE_FACTOR,
    })
}

// ============================================================================
// MISSION BOARD
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum MissionError {
    UnknownMission(MissionId),
    /// Another mission is already in progress.
    AlreadyActive(MissionId),
    NoActiveMission,
}

impl fmt::Display for MissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissionError::UnknownMission(id) => write!(f, "No available mission with id {}", id),
            MissionError::AlreadyActive(id) => write!(f, "Mission {} is already active", id),
            MissionError::NoActiveMission => write!(f, "No active mission"),
        }
    }
}

impl std::error::Error for MissionError {}

/// Outcome of a progress change on the active mission.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressUpdate {
    Advanced { mission: MissionId, progress: f32 },
    /// Progress hit 100; the mission moved to the completed history.
    Completed(Mission),
}

/// Holds the offered, active and finished missions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MissionBoard {
    current: Option<Mission>,
    available: Vec<Mission>,
    completed: Vec<Mission>,
    reopen_abandoned: bool,
}

impl MissionBoard {
    pub fn new(rules: &MissionRules) -> Self {
        Self {
            reopen_abandoned: rules.reopen_abandoned,
            ..Self::default()
        }
    }

    pub fn current(&self) -> Option<&Mission> {
        self.current.as_ref()
    }

    pub fn available(&self) -> &[Mission] {
        &self.available
    }

    pub fn completed(&self) -> &[Mission] {
        &self.completed
    }

    /// Look a mission up in any list.
    pub fn find(&self, id: MissionId) -> Option<&Mission> {
        self.current
            .iter()
            .chain(self.available.iter())
            .chain(self.completed.iter())
            .find(|m| m.id == id)
    }

    /// Offer `count` new missions. Returns how many were added.
    pub fn generate(&mut self, count: usize, planets: &[PlanetRef], rng: &mut impl Rng) -> usize {
        if planets.is_empty() {
            if count > 0 {
                log::warn!("No planets to target, skipping {} mission(s)", count);
            }
            return 0;
        }

        let before = self.available.len();
        self.available
            .extend((0..count).filter_map(|_| generate_mission(planets, rng)));
        self.available.len() - before
    }

    /// Take an offered mission. Fails if `id` is not on offer or a mission
    /// is already active; neither list changes on failure.
    pub fn accept(&mut self, id: MissionId) -> Result<&Mission, MissionError> {
        if let Some(active) = &self.current {
            log::warn!("Cannot accept {} while {} is active", id, active.id);
            return Err(MissionError::AlreadyActive(active.id));
        }
        let Some(index) = self.available.iter().position(|m| m.id == id) else {
            log::warn!("Unknown mission {}", id);
            return Err(MissionError::UnknownMission(id));
        };

        let mut mission = self.available.remove(index);
        mission.status = MissionStatus::Active;
        log::info!("Mission accepted: {}", mission.title);
        Ok(self.current.insert(mission))
    }

    /// Drop the active mission back onto the board, progress intact.
    pub fn abandon(&mut self) -> Result<&Mission, MissionError> {
        let mut mission = self.current.take().ok_or(MissionError::NoActiveMission)?;
        mission.status = if self.reopen_abandoned {
            MissionStatus::Available
        } else {
            MissionStatus::Abandoned
        };
        log::info!("Mission abandoned: {}", mission.title);

        self.available.push(mission);
        let last = self.available.len() - 1;
        Ok(&self.available[last])
    }

    /// Set the active mission's progress (clamped to 0–100), completing it
    /// at 100.
    pub fn set_progress(
        &mut self,
        progress: f32,
        planets: &[PlanetRef],
        rng: &mut impl Rng,
    ) -> Result<ProgressUpdate, MissionError> {
        let mission = self.current.as_mut().ok_or(MissionError::NoActiveMission)?;
        mission.progress = clamp(progress, 0.0, 100.0);

        if mission.progress >= 100.0 {
            return self.complete(planets, rng).map(ProgressUpdate::Completed);
        }
        Ok(ProgressUpdate::Advanced {
            mission: mission.id,
            progress: mission.progress,
        })
    }

    /// Add a non-negative amount of progress to the active mission.
    pub fn accrue(
        &mut self,
        amount: f32,
        planets: &[PlanetRef],
        rng: &mut impl Rng,
    ) -> Result<ProgressUpdate, MissionError> {
        let progress = self
            .current
            .as_ref()
            .ok_or(MissionError::NoActiveMission)?
            .progress;
        self.set_progress(progress + amount.max(0.0), planets, rng)
    }

    /// Finish the active mission and offer one replacement.
    pub fn complete(
        &mut self,
        planets: &[PlanetRef],
        rng: &mut impl Rng,
    ) -> Result<Mission, MissionError> {
        let mut mission = self.current.take().ok_or(MissionError::NoActiveMission)?;
        mission.status = MissionStatus::Completed;
        log::info!("Mission completed: {} (reward {})", mission.title, mission.reward);

        self.completed.push(mission.clone());
        self.generate(1, planets, rng);
        Ok(mission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaChaRng;

    fn sample_planets(count: usize) -> Vec<PlanetRef> {
        (0..count)
            .map(|i| PlanetRef {
                id: PlanetId(Uuid::from_u128(i as u128 + 1)),
                name: format!("Planet-{}", i),
                planet_type: PlanetType::ALL[i % PlanetType::ALL.len()],
                parent_star: Some("Sol Tauri".to_string()),
            })
            .collect()
    }

    fn board_with_missions(count: usize, rng: &mut ChaChaRng) -> (MissionBoard, Vec<PlanetRef>) {
        let planets = sample_planets(12);
        let mut board = MissionBoard::new(&MissionRules::default());
        board.generate(count, &planets, rng);
        (board, planets)
    }

    #[test]
    fn test_generated_mission_fields() {
        let mut rng = ChaChaRng::seed_from_u64(41);
        let planets = sample_planets(8);
        for _ in 0..200 {
            let m = generate_mission(&planets, &mut rng).unwrap();
            assert!((1..=5).contains(&m.difficulty));
            let base = m.difficulty as u32 * 100;
            assert!((base + 50..=base + 150).contains(&m.reward));
            assert_eq!(m.status, MissionStatus::Available);
            assert_eq!(m.progress, 0.0);
            assert!(planets.iter().any(|p| p.id == m.target.planet_id));
            if let MissionKind::ResourceCollection { amount, .. } = m.kind {
                assert!((10..=50).contains(&amount));
            }
        }
    }

    #[test]
    fn test_no_planets_no_mission() {
        let mut rng = ChaChaRng::seed_from_u64(42);
        assert!(generate_mission(&[], &mut rng).is_none());
        let mut board = MissionBoard::default();
        assert_eq!(board.generate(3, &[], &mut rng), 0);
        assert!(board.available().is_empty());
    }

    #[test]
    fn test_delivery_targets_second_draw() {
        let planets = sample_planets(20);
        let mut rng = ChaChaRng::seed_from_u64(43);
        let mut replay = rng.clone();

        let mission = create_mission(MissionType::Delivery, &planets, &mut rng).unwrap();

        let _id = generate_uuid(&mut replay);
        let _difficulty = random_int(&mut replay, 1, 5);
        let _bonus = random_int(&mut replay, 50, 150);
        let first = random_index(&mut replay, planets.len());
        let second = random_index(&mut replay, planets.len());

        assert_eq!(mission.target.planet_id, planets[second].id);
        if first != second {
            assert_ne!(mission.target.planet_id, planets[first].id);
        }
        assert_eq!(mission.kind, MissionKind::Delivery);
        assert!(mission.title.ends_with(&planets[second].name));
    }

    #[test]
    fn test_research_uses_target_type() {
        let planets = sample_planets(9);
        let mut rng = ChaChaRng::seed_from_u64(44);
        let m = create_mission(MissionType::Research, &planets, &mut rng).unwrap();
        let target = planets.iter().find(|p| p.id == m.target.planet_id).unwrap();
        assert_eq!(
            m.kind,
            MissionKind::Research {
                phenomenon: target.planet_type
            }
        );
        assert!(m.title.contains(target.planet_type.label()));
    }

    #[test]
    fn test_accept_moves_mission_to_current() {
        let mut rng = ChaChaRng::seed_from_u64(45);
        let (mut board, _) = board_with_missions(3, &mut rng);
        let id = board.available()[1].id;

        let accepted = board.accept(id).unwrap();
        assert_eq!(accepted.status, MissionStatus::Active);
        assert_eq!(board.current().unwrap().id, id);
        assert_eq!(board.available().len(), 2);
        assert!(board.available().iter().all(|m| m.id != id));
    }

    #[test]
    fn test_accept_unknown_leaves_board_unchanged() {
        let mut rng = ChaChaRng::seed_from_u64(46);
        let (mut board, _) = board_with_missions(3, &mut rng);
        let before = board.available().to_vec();

        let err = board.accept(MissionId(Uuid::nil())).unwrap_err();
        assert_eq!(err, MissionError::UnknownMission(MissionId(Uuid::nil())));
        assert_eq!(board.available(), before.as_slice());
        assert!(board.current().is_none());
    }

    #[test]
    fn test_accept_while_active_is_rejected() {
        let mut rng = ChaChaRng::seed_from_u64(47);
        let (mut board, _) = board_with_missions(3, &mut rng);
        let first = board.available()[0].id;
        let second = board.available()[1].id;
        board.accept(first).unwrap();

        assert_eq!(board.accept(second), Err(MissionError::AlreadyActive(first)));
        assert_eq!(board.current().unwrap().id, first);
        assert_eq!(board.available().len(), 2);
    }

    #[test]
    fn test_abandon_keeps_abandoned_status_by_default() {
        let mut rng = ChaChaRng::seed_from_u64(48);
        let (mut board, planets) = board_with_missions(2, &mut rng);
        let id = board.available()[0].id;
        board.accept(id).unwrap();
        board.set_progress(40.0, &planets, &mut rng).unwrap();

        let abandoned = board.abandon().unwrap();
        assert_eq!(abandoned.id, id);
        assert_eq!(abandoned.status, MissionStatus::Abandoned);
        assert_eq!(abandoned.progress, 40.0);
        assert!(board.current().is_none());

        // Still acceptable from the board.
        assert_eq!(board.accept(id).unwrap().status, MissionStatus::Active);
    }

    #[test]
    fn test_abandon_reopens_when_configured() {
        let mut rng = ChaChaRng::seed_from_u64(49);
        let planets = sample_planets(5);
        let mut board = MissionBoard::new(&MissionRules {
            reopen_abandoned: true,
            ..MissionRules::default()
        });
        board.generate(1, &planets, &mut rng);
        let id = board.available()[0].id;
        board.accept(id).unwrap();

        assert_eq!(board.abandon().unwrap().status, MissionStatus::Available);
    }

    #[test]
    fn test_abandon_without_active() {
        let mut board = MissionBoard::default();
        assert_eq!(board.abandon().unwrap_err(), MissionError::NoActiveMission);
    }

    #[test]
    fn test_progress_clamped_and_completes_once() {
        let mut rng = ChaChaRng::seed_from_u64(50);
        let (mut board, planets) = board_with_missions(3, &mut rng);
        let id = board.available()[2].id;
        board.accept(id).unwrap();

        let update = board.set_progress(-5.0, &planets, &mut rng).unwrap();
        assert_eq!(update, ProgressUpdate::Advanced { mission: id, progress: 0.0 });

        let update = board.set_progress(250.0, &planets, &mut rng).unwrap();
        match update {
            ProgressUpdate::Completed(m) => {
                assert_eq!(m.id, id);
                assert_eq!(m.progress, 100.0);
                assert_eq!(m.status, MissionStatus::Completed);
            }
            other => panic!("expected completion, got {:?}", other),
        }
        assert!(board.current().is_none());
        assert_eq!(board.completed().len(), 1);
        // Two left over plus exactly one replacement.
        assert_eq!(board.available().len(), 3);

        assert_eq!(
            board.set_progress(100.0, &planets, &mut rng),
            Err(MissionError::NoActiveMission)
        );
        assert_eq!(board.completed().len(), 1);
    }

    #[test]
    fn test_accrue_is_monotonic_until_completion() {
        let mut rng = ChaChaRng::seed_from_u64(51);
        let (mut board, planets) = board_with_missions(1, &mut rng);
        let id = board.available()[0].id;
        board.accept(id).unwrap();

        let mut last = 0.0;
        let mut completions = 0;
        for _ in 0..400 {
            match board.accrue(0.5, &planets, &mut rng) {
                Ok(ProgressUpdate::Advanced { progress, .. }) => {
                    assert!(progress >= last);
                    last = progress;
                }
                Ok(ProgressUpdate::Completed(_)) => completions += 1,
                Err(MissionError::NoActiveMission) => {}
                Err(e) => panic!("unexpected {:?}", e),
            }
        }
        assert_eq!(completions, 1);
        assert_eq!(board.available().len(), 1);

        // Negative amounts never roll progress back.
        let replacement = board.available()[0].id;
        board.accept(replacement).unwrap();
        board.accrue(10.0, &planets, &mut rng).unwrap();
        board.accrue(-5.0, &planets, &mut rng).unwrap();
        assert_eq!(board.current().unwrap().progress, 10.0);
    }

    #[test]
    fn test_find_searches_all_lists() {
        let mut rng = ChaChaRng::seed_from_u64(52);
        let (mut board, planets) = board_with_missions(2, &mut rng);
        let a = board.available()[0].id;
        let b = board.available()[1].id;
        board.accept(a).unwrap();
        board.complete(&planets, &mut rng).unwrap();
        assert!(board.find(a).is_some());
        assert!(board.find(b).is_some());
        assert!(board.find(MissionId(Uuid::nil())).is_none());
    }

    #[test]
    fn test_proximity_gain() {
        assert!(proximity_gain(50.0, 10.0).is_none());
        assert!(proximity_gain(51.0, 10.0).is_none());
        assert!(proximity_gain(1.0, 0.0).is_none());

        let far = proximity_gain(40.0, 10.0).unwrap();
        assert!((far.progress - 0.1).abs() < 1e-6);
        assert!(!far.in_info_range);

        let near = proximity_gain(10.0, 10.0).unwrap();
        assert!((near.progress - 0.4).abs() < 1e-6);
        assert!(near.in_info_range);

        let centre = proximity_gain(0.0, 10.0).unwrap();
        assert_eq!(centre.progress, MAX_PROGRESS_PER_TICK);
    }
}
