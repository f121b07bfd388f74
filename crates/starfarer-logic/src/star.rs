//! Star system model.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::planet::Planet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StarId(pub Uuid);

impl fmt::Display for StarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A star and its planets, in orbit order (innermost first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarSystem {
    pub id: StarId,
    pub name: String,
    pub position: Vec3,
    pub radius: f32,
    pub color: u32,
    pub planets: Vec<Planet>,
}

impl StarSystem {
    pub fn planet_count(&self) -> usize {
        self.planets.len()
    }
}
