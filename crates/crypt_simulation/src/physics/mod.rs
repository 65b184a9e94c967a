//! Physics domain — spatial queries для AI
//!
//! Симуляция не владеет физикой. Она только спрашивает:
//! - probe: trait SurfaceProbe + resource SurfaceProbes + helpers для FSM
//! - arena: headless реализация на axis-aligned коробках

pub mod arena;
pub mod probe;

pub use arena::{ArenaBlock, ArenaGeometry};
pub use probe::*;
