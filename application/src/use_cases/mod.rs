//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod manage_quiz;
pub mod play_quiz;
pub(crate) mod shared;
pub mod test_quiz;
