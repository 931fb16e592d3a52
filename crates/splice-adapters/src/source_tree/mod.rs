//! Include tree adapters.

mod local;
mod memory;

pub use local::LocalSourceTree;
pub use memory::MemorySourceTree;
