//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod clean;
mod inspect;
mod replay;
mod standings;

pub use clean::Clean;
pub use inspect::Inspect;
pub use replay::Replay;
pub use standings::Standings;
