//! Quiz store (the ordered deck)

use super::entities::QuizItem;
use super::id::QuizId;
use crate::core::error::DomainError;

/// Ordered, in-memory collection of quiz items (Aggregate)
///
/// Identifiers are positions. Growth is append-only and deletion is
/// positional, so deleting `k` renumbers every item after `k`. Sessions
/// borrow the store immutably for their whole run, which keeps every
/// mutation out of an in-flight session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizStore {
    items: Vec<QuizItem>,
}

impl QuizStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items currently stored
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All identifiers currently valid, in ascending order
    pub fn ids(&self) -> Vec<QuizId> {
        (0..self.items.len()).map(QuizId::new).collect()
    }

    /// Look up the item at `id`
    pub fn get_by_index(&self, id: QuizId) -> Result<&QuizItem, DomainError> {
        self.items.get(id.index()).ok_or(self.not_found(id))
    }

    /// Append a new item and return its identifier (the previous count)
    pub fn add(&mut self, question: impl Into<String>, answer: impl Into<String>) -> QuizId {
        let id = QuizId::new(self.items.len());
        self.items.push(QuizItem::new(question, answer));
        id
    }

    /// Replace question and answer of the item at `id`; the id is unchanged
    pub fn update(
        &mut self,
        id: QuizId,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<(), DomainError> {
        let not_found = self.not_found(id);
        let item = self.items.get_mut(id.index()).ok_or(not_found)?;
        item.question = question.into();
        item.answer = answer.into();
        Ok(())
    }

    /// Remove the item at `id`, shifting every later item down by one
    pub fn delete_by_index(&mut self, id: QuizId) -> Result<QuizItem, DomainError> {
        if id.index() >= self.items.len() {
            return Err(self.not_found(id));
        }
        Ok(self.items.remove(id.index()))
    }

    /// Snapshot of every item with its current identifier
    ///
    /// The returned vector is owned, so later mutations of the store are
    /// not visible through it.
    pub fn get_all(&self) -> Vec<(QuizId, QuizItem)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| (QuizId::new(i), item.clone()))
            .collect()
    }

    fn not_found(&self, id: QuizId) -> DomainError {
        DomainError::NotFound {
            id: id.index(),
            count: self.items.len(),
        }
    }
}

impl FromIterator<QuizItem> for QuizStore {
    fn from_iter<I: IntoIterator<Item = QuizItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> QuizStore {
        let mut store = QuizStore::new();
        store.add("A?", "a");
        store.add("B?", "b");
        store.add("C?", "c");
        store
    }

    #[test]
    fn test_add_returns_previous_count() {
        let mut store = abc();
        assert_eq!(store.count(), 3);
        let id = store.add("D?", "d");
        assert_eq!(id, QuizId::new(3));
        assert_eq!(store.get_by_index(id).unwrap().question, "D?");
    }

    #[test]
    fn test_delete_renumbers_later_items() {
        let mut store = abc();
        let removed = store.delete_by_index(QuizId::new(1)).unwrap();
        assert_eq!(removed.question, "B?");
        assert_eq!(store.count(), 2);
        // C was at 2, is now at 1
        assert_eq!(store.get_by_index(QuizId::new(1)).unwrap().question, "C?");
        assert!(store.get_by_index(QuizId::new(2)).is_err());
    }

    #[test]
    fn test_get_by_index_out_of_range() {
        let mut store = QuizStore::new();
        store.add("A?", "a");
        store.add("B?", "b");
        assert_eq!(
            store.get_by_index(QuizId::new(5)),
            Err(DomainError::NotFound { id: 5, count: 2 })
        );
    }

    #[test]
    fn test_update_keeps_identifier() {
        let mut store = abc();
        store.update(QuizId::new(0), "Z?", "z").unwrap();
        let item = store.get_by_index(QuizId::new(0)).unwrap();
        assert_eq!(item, &QuizItem::new("Z?", "z"));
        assert_eq!(store.count(), 3);
    }

    #[test]
    fn test_update_and_delete_out_of_range() {
        let mut store = abc();
        assert!(store.update(QuizId::new(3), "x", "y").unwrap_err().is_not_found());
        assert!(store.delete_by_index(QuizId::new(3)).unwrap_err().is_not_found());
        assert_eq!(store, abc());
    }

    #[test]
    fn test_get_all_is_a_snapshot() {
        let mut store = abc();
        let snapshot = store.get_all();
        store.delete_by_index(QuizId::new(0)).unwrap();
        store.add("D?", "d");

        let questions: Vec<_> = snapshot.iter().map(|(_, q)| q.question.as_str()).collect();
        assert_eq!(questions, ["A?", "B?", "C?"]);
        let ids: Vec<_> = snapshot.iter().map(|(id, _)| id.index()).collect();
        assert_eq!(ids, [0, 1, 2]);
    }

    #[test]
    fn test_ids_cover_current_range() {
        let store = abc();
        assert_eq!(
            store.ids(),
            [QuizId::new(0), QuizId::new(1), QuizId::new(2)]
        );
        assert!(QuizStore::new().ids().is_empty());
    }

    #[test]
    fn test_from_iterator() {
        let store: QuizStore = vec![QuizItem::new("A?", "a")].into_iter().collect();
        assert_eq!(store.count(), 1);
        assert!(!store.is_empty());
    }
}
