pub mod camera;
pub mod draw;
pub mod plugin;
pub mod ui;

pub use plugin::CraftRenderPlugin;
