//! AI systems (strategic layer logic)

pub mod fsm;
pub mod spawn;


// Re-export all systems
pub use fsm::*;
pub use spawn::*;
