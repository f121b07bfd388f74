//! Which UI panels are open. The host draws them; the engine only decides.

use serde::{Deserialize, Serialize};

use starfarer_logic::planet::PlanetId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panels {
    mission_details: bool,
    available_missions: bool,
    planet_info: Option<PlanetId>,
}

impl Panels {
    pub fn new() -> Self {
        Self::default()
    }

    /// The `m` key: details of the active mission if there is one, otherwise
    /// the list of offered missions. Pressing it again closes that panel.
    pub fn toggle_mission_panel(&mut self, has_active_mission: bool) {
        if has_active_mission {
            self.mission_details = !self.mission_details;
            self.available_missions = false;
        } else {
            self.available_missions = !self.available_missions;
            self.mission_details = false;
        }
    }

    pub fn show_available_missions(&mut self) {
        self.available_missions = true;
    }

    pub fn hide_available_missions(&mut self) {
        self.available_missions = false;
    }

    pub fn hide_mission_details(&mut self) {
        self.mission_details = false;
    }

    /// Open the info panel for `planet`. Returns false if it was already
    /// showing that planet.
    pub fn show_planet_info(&mut self, planet: PlanetId) -> bool {
        self.planet_info.replace(planet) != Some(planet)
    }

    pub fn hide_all(&mut self) {
        *self = Self::default();
    }

    pub fn mission_details(&self) -> bool {
        self.mission_details
    }

    pub fn available_missions(&self) -> bool {
        self.available_missions
    }

    pub fn planet_info(&self) -> Option<PlanetId> {
        self.planet_info
    }

    pub fn any_open(&self) -> bool {
        self.mission_details || self.available_missions || self.planet_info.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_toggle_depends_on_active_mission() {
        let mut panels = Panels::new();
        panels.toggle_mission_panel(false);
        assert!(panels.available_missions());
        assert!(!panels.mission_details());

        panels.toggle_mission_panel(true);
        assert!(panels.mission_details());
        assert!(!panels.available_missions());

        panels.toggle_mission_panel(true);
        assert!(!panels.any_open());
    }

    #[test]
    fn test_planet_info_reports_changes() {
        let mut panels = Panels::new();
        let a = PlanetId(Uuid::from_u128(1));
        let b = PlanetId(Uuid::from_u128(2));
        assert!(panels.show_planet_info(a));
        assert!(!panels.show_planet_info(a));
        assert!(panels.show_planet_info(b));
        assert_eq!(panels.planet_info(), Some(b));
    }

    #[test]
    fn test_hide_all() {
        let mut panels = Panels::new();
        panels.show_available_missions();
        panels.show_planet_info(PlanetId(Uuid::nil()));
        panels.hide_all();
        assert!(!panels.any_open());
    }
}
