//! Game events - player-facing notices produced during a session
//!
//! The engine never talks to a UI directly. Anything the player should be
//! told about is pushed onto the [`EventLog`] and the host drains it once per
//! frame to show notifications.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Notices a host can surface to the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Loading finished and play has started
    Welcome,
    /// Thrust requested with an empty tank
    OutOfFuel,
    Refueled { amount: f32 },
    ShieldRepaired { amount: f32 },
    ShieldDepleted,
    ShieldCritical,
    MissionAccepted { title: String },
    MissionCompleted { title: String, fuel_reward: f32, shield_reward: f32 },
    MissionAbandoned { title: String },
    Collision { planet: String },
    /// The active mission's target is close enough to show its details
    PlanetInRange { planet: String },
    PlanetSelected { planet: String },
}

impl GameEvent {
    /// Does this event warn about ship condition?
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            GameEvent::OutOfFuel | GameEvent::ShieldDepleted | GameEvent::ShieldCritical
        )
    }

    /// How long a host should keep the notice on screen, in milliseconds.
    pub fn display_millis(&self) -> u32 {
        match self {
            GameEvent::Welcome | GameEvent::MissionCompleted { .. } => 5000,
            GameEvent::Refueled { .. } | GameEvent::ShieldRepaired { .. } => 2000,
            _ => 3000,
        }
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::Welcome => {
                write!(f, "Welcome to Starfarer! Use WASD to move and arrows to rotate")
            }
            GameEvent::OutOfFuel => write!(f, "Out of fuel!"),
            GameEvent::Refueled { amount } => write!(f, "Refueled: +{:.1}%", amount),
            GameEvent::ShieldRepaired { amount } => write!(f, "Shield repaired: +{:.1}%", amount),
            GameEvent::ShieldDepleted => write!(f, "WARNING: Shield depleted!"),
            GameEvent::ShieldCritical => write!(f, "WARNING: Shield critical!"),
            GameEvent::MissionAccepted { title } => write!(f, "Mission accepted: {}", title),
            GameEvent::MissionCompleted {
                fuel_reward,
                shield_reward,
                ..
            } => write!(
                f,
                "Mission completed! Reward: Fuel +{:.0}%, Shield +{:.0}%",
                fuel_reward, shield_reward
            ),
            GameEvent::MissionAbandoned { title } => write!(f, "Mission abandoned: {}", title),
            GameEvent::Collision { planet } => write!(f, "Collision with {}!", planet),
            GameEvent::PlanetInRange { planet } => write!(f, "Approaching {}", planet),
            GameEvent::PlanetSelected { planet } => write!(f, "Selected {}", planet),
        }
    }
}

/// Pending events, oldest first.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        if event.is_warning() {
            log::warn!("{}", event);
        } else {
            log::debug!("{}", event);
        }
        self.events.push(event);
    }

    /// Take everything pushed since the last drain.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
