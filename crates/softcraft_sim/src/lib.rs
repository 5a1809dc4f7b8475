pub mod pipeline;
pub mod state;

pub use pipeline::{CraftSimPlugin, PointerEvent};
pub use state::CraftState;
