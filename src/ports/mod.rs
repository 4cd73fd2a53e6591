//! Port traits defining external boundaries.
//!
//! The analyzer process is the only external system this step talks to.
//! Implementations live in `src/adapters/`.

pub mod command;

pub use command::{CommandOutput, CommandRunner, CommandSpec};
