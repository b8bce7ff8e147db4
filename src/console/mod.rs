//! Line-based console front end.
//!
//! Thin glue around the game core: reading coordinates, rendering the
//! board and driving the turn loop.

mod input;
mod orchestrator;
pub mod players;
mod render;

pub use input::parse_coords;
pub use orchestrator::Orchestrator;
pub use render::Renderer;
