//! Interactive quiz REPL
//!
//! - [`command`]: parsing of command lines
//! - [`interaction`]: reedline-backed adapter for the interaction port
//! - [`prompt`]: the reedline prompt
//! - [`quiz_repl`]: the read-dispatch loop

pub mod command;
pub mod interaction;
pub mod prompt;
pub mod quiz_repl;
