//! Initial deck seeding
//!
//! The store lives in memory only. At startup it is filled from the
//! `[deck]` config section, or from the built-in deck below.

use crate::config::FileDeckConfig;
use tracing::{info, warn};
use trivia_domain::{QuizItem, QuizStore};

/// Built-in deck used when the configuration lists no quizzes
pub fn builtin_deck() -> Vec<QuizItem> {
    vec![
        QuizItem::new("Capital of Italy", "Rome"),
        QuizItem::new("Capital of France", "Paris"),
        QuizItem::new("Capital of Spain", "Madrid"),
        QuizItem::new("Capital of Portugal", "Lisbon"),
    ]
}

/// Build the initial store from deck configuration.
///
/// Entries with an empty question or answer are skipped.
pub fn seed_store(config: &FileDeckConfig) -> QuizStore {
    let store: QuizStore = if !config.quizzes.is_empty() {
        config
            .quizzes
            .iter()
            .enumerate()
            .filter(|(index, quiz)| {
                let valid = !quiz.question.trim().is_empty() && !quiz.answer.trim().is_empty();
                if !valid {
                    warn!("Skipping deck entry {}: empty question or answer", index);
                }
                valid
            })
            .map(|(_, quiz)| quiz.clone())
            .collect()
    } else if config.builtin {
        builtin_deck().into_iter().collect()
    } else {
        QuizStore::new()
    };

    info!("Seeded store with {} quizzes", store.count());
    store
}
