//! Starfarer Core - Game Session Engine
//!
//! Runs one game of Starfarer: a procedurally generated galaxy held in an
//! ECS world, the player's ship, the mission board and the UI-facing state a
//! renderer needs to draw a frame.
//!
//! # Architecture
//!
//! The galaxy uses an Entity Component System (ECS) architecture via `hecs`:
//! - **Entities**: Stars and planets
//! - **Components**: Pure data attached to entities (Position, Celestial, Orbit, etc.)
//! - **Systems**: Orbit motion, collision checks and mission proximity
//!
//! Game rules that don't need the world (generation, ship kinematics, the
//! mission state machine) live in `starfarer-logic`.
//!
//! # Example
//!
//! ```rust,no_run
//! use starfarer_core::prelude::*;
//!
//! let mut session = GameSession::new(GameConfig::default()).unwrap();
//! session.finish_loading();
//!
//! session.key_down(Key::Forward);
//! loop {
//!     session.tick();
//!     for event in session.drain_events() {
//!         println!("{}", event);
//!     }
//! }
//! ```

pub mod camera;
pub mod components;
pub mod engine;
pub mod events;
pub mod generation;
pub mod input;
pub mod loading;
pub mod panels;
pub mod systems;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::camera::CameraPose;
    pub use crate::components::*;
    pub use crate::engine::GameSession;
    pub use crate::events::GameEvent;
    pub use crate::input::Key;
    pub use starfarer_logic::config::GameConfig;
}
