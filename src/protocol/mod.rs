//! Line-oriented text protocol spoken by the `chess-movegen` binary

pub mod command;
pub mod handler;

pub use command::{parse_command, Command, PositionSpec};
pub use handler::{handle_command, Flow};
