//! Orbit system - spins every planet and advances it along its orbit

use hecs::World;

use crate::components::{Orbit, Position, Spin};

/// One tick of spin and orbital motion for every body that has both.
/// Stationary orbits (radius 0) leave the position untouched.
pub fn orbit_system(world: &mut World) {
    for (_entity, (position, orbit, spin)) in
        world.query_mut::<(&mut Position, &mut Orbit, &mut Spin)>()
    {
        spin.advance();
        position.0 = orbit.step(position.0);
    }
}
