//! Pure game logic for Starfarer.
//!
//! This crate contains all game rules that are independent of the ECS world,
//! the renderer, or any host runtime. Functions take plain data plus an
//! explicit random source and return results, so a seeded `ChaChaRng` makes
//! every draw reproducible in tests.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Game, galaxy, ship and mission tuning loaded from JSON |
//! | [`generation`] | Procedural galaxy → star system → planet generation, names, starfield |
//! | [`math`] | Uniform draws, clamp/lerp, distance, UUIDs from the game RNG, ray picking |
//! | [`mission`] | Mission records, content generation, lifecycle, proximity accrual |
//! | [`planet`] | Planet model, characteristics, orbit/spin kinematics, info readout |
//! | [`spaceship`] | Player ship kinematics, fuel/shield, collision scan |
//! | [`star`] | Star system model and star identifiers |

pub mod config;
pub mod generation;
pub mod math;
pub mod mission;
pub mod planet;
pub mod spaceship;
pub mod star;

/// Random source used for all game content.
pub type GameRng = rand_chacha::ChaChaRng;
