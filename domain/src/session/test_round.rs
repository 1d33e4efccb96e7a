//! Single-item test round

use super::verdict::Verdict;
use crate::core::error::DomainError;
use crate::quiz::{entities::QuizItem, id::QuizId, store::QuizStore};

/// One question, one answer, one verdict.
///
/// A `TestRound` only exists in the `AwaitingAnswer` state: [`TestRound::start`]
/// is the `Idle` lookup (failing with `NotFound` for a bad id, so no question
/// is ever asked), and [`TestRound::grade`] consumes the round, which makes
/// `Graded` terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRound {
    id: QuizId,
    item: QuizItem,
}

impl TestRound {
    pub fn start(store: &QuizStore, id: QuizId) -> Result<Self, DomainError> {
        let item = store.get_by_index(id)?.clone();
        Ok(Self { id, item })
    }

    pub fn id(&self) -> QuizId {
        self.id
    }

    pub fn question(&self) -> &str {
        &self.item.question
    }

    pub fn grade(self, given: &str) -> Verdict {
        Verdict::from_bool(self.item.is_correct(given))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> QuizStore {
        let mut store = QuizStore::new();
        store.add("Capital of Italy", "Rome");
        store.add("Capital of Spain", "Madrid ");
        store
    }

    #[test]
    fn test_start_with_valid_id() {
        let round = TestRound::start(&store(), QuizId::new(1)).unwrap();
        assert_eq!(round.id(), QuizId::new(1));
        assert_eq!(round.question(), "Capital of Spain");
    }

    #[test]
    fn test_start_with_invalid_id() {
        let err = TestRound::start(&store(), QuizId::new(5)).unwrap_err();
        assert_eq!(err, DomainError::NotFound { id: 5, count: 2 });
    }

    #[test]
    fn test_grade_normalizes_both_sides() {
        let round = TestRound::start(&store(), QuizId::new(1)).unwrap();
        assert_eq!(round.grade(" madrid"), Verdict::Correct);
    }

    #[test]
    fn test_grade_incorrect() {
        let round = TestRound::start(&store(), QuizId::new(0)).unwrap();
        assert_eq!(round.grade("Milan"), Verdict::Incorrect);
    }
}
