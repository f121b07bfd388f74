//! Generation - procedural creation of planets, star systems and galaxies.

mod bodies;
mod galaxy;
mod names;

pub use bodies::*;
pub use galaxy::*;
pub use names::*;
