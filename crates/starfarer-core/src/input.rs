//! Keyboard commands and held-key flight controls.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use starfarer_logic::spaceship::{ShipError, Spaceship};

/// A key the game responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
    PitchUp,
    PitchDown,
    /// Toggle the mission panel
    Missions,
    /// Close every panel
    Escape,
}

impl Key {
    /// Key name as reported by the host (`KeyboardEvent.key` style).
    pub fn name(self) -> &'static str {
        match self {
            Key::Forward => "w",
            Key::Backward => "s",
            Key::TurnLeft => "a",
            Key::TurnRight => "d",
            Key::PitchUp => "ArrowUp",
            Key::PitchDown => "ArrowDown",
            Key::Missions => "m",
            Key::Escape => "Escape",
        }
    }

    /// Is this a held flight control rather than a one-shot command?
    pub fn is_flight_control(self) -> bool {
        !matches!(self, Key::Missions | Key::Escape)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKey(pub String);

impl fmt::Display for UnknownKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unbound key: {:?}", self.0)
    }
}

impl std::error::Error for UnknownKey {}

impl FromStr for Key {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "w" => Ok(Key::Forward),
            "s" => Ok(Key::Backward),
            "a" => Ok(Key::TurnLeft),
            "d" => Ok(Key::TurnRight),
            "ArrowUp" => Ok(Key::PitchUp),
            "ArrowDown" => Ok(Key::PitchDown),
            "m" => Ok(Key::Missions),
            "Escape" => Ok(Key::Escape),
            other => Err(UnknownKey(other.to_string())),
        }
    }
}

/// Flight controls currently held down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub move_forward: bool,
    pub move_backward: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub pitch_up: bool,
    pub pitch_down: bool,
}

impl Controls {
    /// Record a press or release. Command keys are ignored here.
    pub fn set(&mut self, key: Key, pressed: bool) {
        let flag = match key {
            Key::Forward => &mut self.move_forward,
            Key::Backward => &mut self.move_backward,
            Key::TurnLeft => &mut self.turn_left,
            Key::TurnRight => &mut self.turn_right,
            Key::PitchUp => &mut self.pitch_up,
            Key::PitchDown => &mut self.pitch_down,
            Key::Missions | Key::Escape => return,
        };
        *flag = pressed;
    }

    /// Apply held controls to the ship for one tick.
    pub fn apply(&self, ship: &mut Spaceship) -> Result<(), ShipError> {
        let thrust = if self.move_forward {
            ship.accelerate().map(|_| ())
        } else {
            Ok(())
        };
        if self.move_backward {
            ship.decelerate();
        }
        if self.turn_left {
            ship.rotate_left();
        }
        if self.turn_right {
            ship.rotate_right();
        }
        if self.pitch_up {
            ship.pitch_up();
        }
        if self.pitch_down {
            ship.pitch_down();
        }
        thrust
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starfarer_logic::config::ShipConfig;

    #[test]
    fn test_parse_key_names() {
        for key in [
            Key::Forward,
            Key::Backward,
            Key::TurnLeft,
            Key::TurnRight,
            Key::PitchUp,
            Key::PitchDown,
            Key::Missions,
            Key::Escape,
        ] {
            assert_eq!(key.name().parse::<Key>(), Ok(key));
        }
        assert_eq!("W".parse::<Key>(), Err(UnknownKey("W".to_string())));
        assert!("Enter".parse::<Key>().is_err());
    }

    #[test]
    fn test_press_and_release() {
        let mut controls = Controls::default();
        controls.set(Key::Forward, true);
        controls.set(Key::PitchDown, true);
        controls.set(Key::Missions, true);
        assert!(controls.move_forward && controls.pitch_down);

        controls.set(Key::Forward, false);
        assert!(!controls.move_forward);
        assert!(controls.pitch_down);
    }

    #[test]
    fn test_command_keys_are_not_flight_controls() {
        assert!(Key::Forward.is_flight_control());
        assert!(Key::PitchDown.is_flight_control());
        assert!(!Key::Missions.is_flight_control());
        assert!(!Key::Escape.is_flight_control());
    }

    #[test]
    fn test_apply_thrust_and_turn() {
        let mut ship = Spaceship::default();
        let controls = Controls {
            move_forward: true,
            turn_left: true,
            ..Controls::default()
        };
        controls.apply(&mut ship).unwrap();
        assert!((ship.speed - 0.1).abs() < 1e-6);
        assert!(ship.direction.x < 0.0);
    }

    #[test]
    fn test_apply_reports_empty_tank_but_still_steers() {
        let mut ship = Spaceship::new(ShipConfig {
            starting_fuel: 0.0,
            ..ShipConfig::default()
        });
        let controls = Controls {
            move_forward: true,
            turn_right: true,
            ..Controls::default()
        };
        assert_eq!(controls.apply(&mut ship), Err(ShipError::OutOfFuel));
        assert_eq!(ship.speed, 0.0);
        assert!(ship.direction.x > 0.0);
    }
}
