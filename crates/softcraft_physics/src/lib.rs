pub mod forces;
pub mod integrator;
pub mod interaction;
pub mod procgen;
pub mod query;
pub mod step;

pub use query::{nearest_particle, Nearest};
pub use step::{simulate, StepReport};
