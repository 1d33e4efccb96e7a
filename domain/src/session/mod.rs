//! Quiz session state machines.
//!
//! - [`test_round::TestRound`] - single-item test (`Idle -> AwaitingAnswer -> Graded`)
//! - [`play::PlaySession`] - randomized full-deck play with a running score
//! - [`verdict::Verdict`] - outcome of grading one answer
//!
//! These types hold no I/O. The application layer drives them by asking
//! the user for each answer and feeding it back in.

pub mod play;
pub mod test_round;
pub mod verdict;
