mod memory;
mod orchestrator;

pub use memory::*;
pub use orchestrator::*;
