//! Quiz domain.
//!
//! - [`entities::QuizItem`] - a question/answer pair
//! - [`id::QuizId`] - positional identifier of an item
//! - [`store::QuizStore`] - the ordered deck of items

pub mod entities;
pub mod id;
pub mod store;
