//! Component definitions for the ECS galaxy.
//!
//! Components are pure data attached to star and planet entities.
//! Behavior lives in systems.

mod celestial;

pub use celestial::*;
