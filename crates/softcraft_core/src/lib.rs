pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod math;
pub mod structure;
pub mod types;

pub use config::PhysicsConfig;
pub use constants::*;
pub use error::CraftError;
pub use input::InputState;
pub use math::Vec2;
pub use structure::Structure;
pub use types::*;
