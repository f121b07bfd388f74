//! Systems - logic that runs over the galaxy each frame

mod collision;
mod missions;
mod orbit;

pub use collision::*;
pub use missions::*;
pub use orbit::*;
