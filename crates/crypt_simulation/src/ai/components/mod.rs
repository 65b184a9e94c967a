//! AI components

pub mod fsm;
pub mod stats;


// Re-export all components
pub use fsm::*;
pub use stats::*;
