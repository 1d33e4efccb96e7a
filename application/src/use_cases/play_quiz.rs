//! Play Quiz use case
//!
//! Runs the whole deck in random order without repetition, keeping score
//! until the deck is exhausted or the first wrong answer.

use crate::config::SessionConfig;
use crate::ports::interaction::{InteractionError, InteractionPort, SessionEvent};
use crate::use_cases::shared::question_prompt;
use rand::Rng;
use rand::rngs::StdRng;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};
use trivia_domain::{DomainError, FinishReason, PlaySession, PlayStep, QuizStore, Verdict};

/// Errors that can occur during a play session
#[derive(Error, Debug)]
pub enum PlayQuizError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Interaction failed: {0}")]
    Interaction(#[from] InteractionError),
}

impl PlayQuizError {
    /// The user backed out of a prompt; nothing was reported or stored.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, PlayQuizError::Interaction(e) if e.is_cancelled())
    }
}

/// Final result of a play session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOutcome {
    pub score: usize,
    pub total: usize,
    pub reason: FinishReason,
}

/// Use case for playing the whole deck
pub struct PlayQuizUseCase<P: InteractionPort + ?Sized, R: Rng = StdRng> {
    port: Arc<P>,
    rng: R,
}

impl<P: InteractionPort + ?Sized> PlayQuizUseCase<P, StdRng> {
    /// Create a use case whose random source follows `config`
    pub fn from_config(port: Arc<P>, config: &SessionConfig) -> Self {
        Self::with_rng(port, config.rng())
    }
}

impl<P: InteractionPort + ?Sized, R: Rng> PlayQuizUseCase<P, R> {
    pub fn with_rng(port: Arc<P>, rng: R) -> Self {
        Self { port, rng }
    }

    /// Play until the deck runs out or an answer is wrong.
    ///
    /// Both endings report the final score through the port. A cancelled
    /// `ask` abandons the session without a score report.
    pub async fn execute(&mut self, store: &QuizStore) -> Result<PlayOutcome, PlayQuizError> {
        let mut session = PlaySession::start(store);
        info!("Starting play session over {} quizzes", session.total());

        loop {
            let step = match session.next_step(store, &mut self.rng) {
                Ok(step) => step,
                Err(e) => {
                    warn!("Play session failed: {}", e);
                    return Err(e.into());
                }
            };

            match step {
                PlayStep::Ask { id, question } => {
                    debug!(
                        "Asking quiz {} ({} left in pool)",
                        id,
                        session.remaining().len()
                    );
                    let answer = self.port.ask(&question_prompt(&question)).await?;

                    // `answer` only returns None when no question is pending
                    let verdict = session.answer(&answer).unwrap_or(Verdict::Incorrect);
                    self.port.tell(&SessionEvent::Verdict(verdict));
                }
                PlayStep::Finished { score, reason } => {
                    if reason == FinishReason::Exhausted {
                        self.port.tell(&SessionEvent::NoMoreQuestions);
                    }
                    let total = session.total();
                    self.port.tell(&SessionEvent::FinalScore { score, total });
                    info!("Play session finished ({:?}): {}/{}", reason, score, total);
                    return Ok(PlayOutcome {
                        score,
                        total,
                        reason,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::interaction::ScriptedInteraction;
    use rand::SeedableRng;
    use std::collections::HashSet;
    use trivia_domain::QuizItem;

    fn deck() -> QuizStore {
        vec![
            QuizItem::new("Capital of Italy", "Rome"),
            QuizItem::new("Capital of France", "Paris"),
            QuizItem::new("Capital of Spain", "Madrid"),
            QuizItem::new("Capital of Portugal", "Lisbon"),
        ]
        .into_iter()
        .collect()
    }

    /// The order a seeded session will ask questions in
    fn question_order(store: &QuizStore, seed: u64) -> Vec<String> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = PlaySession::start(store);
        let mut order = Vec::new();
        while let PlayStep::Ask { id, question } = session.next_step(store, &mut rng).unwrap() {
            order.push(question);
            let answer = store.get_by_index(id).unwrap().answer.clone();
            session.answer(&answer);
        }
        order
    }

    fn answer_for(store: &QuizStore, question: &str) -> String {
        store
            .get_all()
            .into_iter()
            .find(|(_, item)| item.question == question)
            .map(|(_, item)| item.answer)
            .unwrap()
    }

    #[tokio::test]
    async fn test_empty_store_finishes_without_asking() {
        let port = Arc::new(ScriptedInteraction::new(["unused"]));
        let mut use_case = PlayQuizUseCase::from_config(port.clone(), &SessionConfig::with_seed(1));

        let outcome = use_case.execute(&QuizStore::new()).await.unwrap();

        assert_eq!(
            outcome,
            PlayOutcome {
                score: 0,
                total: 0,
                reason: FinishReason::Exhausted
            }
        );
        assert_eq!(port.ask_count(), 0);
        assert_eq!(
            port.events(),
            [
                SessionEvent::NoMoreQuestions,
                SessionEvent::FinalScore { score: 0, total: 0 }
            ]
        );
    }

    #[tokio::test]
    async fn test_full_score_run() {
        let store = deck();
        let order = question_order(&store, 9);
        let answers: Vec<String> = order
            .iter()
            .map(|q| format!("  {} ", answer_for(&store, q).to_uppercase()))
            .collect();

        let port = Arc::new(ScriptedInteraction::new(answers));
        let mut use_case = PlayQuizUseCase::from_config(port.clone(), &SessionConfig::with_seed(9));
        let outcome = use_case.execute(&store).await.unwrap();

        assert_eq!(outcome.score, store.count());
        assert_eq!(outcome.reason, FinishReason::Exhausted);

        // Every quiz asked exactly once
        let asked: HashSet<_> = port.prompts().into_iter().collect();
        assert_eq!(asked.len(), 4);
        assert_eq!(port.ask_count(), 4);

        let events = port.events();
        assert_eq!(events.len(), 6);
        assert!(
            events[..4]
                .iter()
                .all(|e| *e == SessionEvent::Verdict(Verdict::Correct))
        );
        assert_eq!(events[4], SessionEvent::NoMoreQuestions);
        assert_eq!(events[5], SessionEvent::FinalScore { score: 4, total: 4 });
    }

    #[tokio::test]
    async fn test_first_wrong_answer_ends_session() {
        let store = deck();
        let order = question_order(&store, 5);
        let answers = vec![answer_for(&store, &order[0]), "no idea".to_string()];

        let port = Arc::new(ScriptedInteraction::new(answers));
        let mut use_case = PlayQuizUseCase::from_config(port.clone(), &SessionConfig::with_seed(5));
        let outcome = use_case.execute(&store).await.unwrap();

        assert_eq!(
            outcome,
            PlayOutcome {
                score: 1,
                total: 4,
                reason: FinishReason::WrongAnswer
            }
        );
        assert_eq!(port.ask_count(), 2);
        assert_eq!(
            port.events(),
            [
                SessionEvent::Verdict(Verdict::Correct),
                SessionEvent::Verdict(Verdict::Incorrect),
                SessionEvent::FinalScore { score: 1, total: 4 },
            ]
        );
    }

    #[tokio::test]
    async fn test_no_question_repeats_across_seeds() {
        let store = deck();
        for seed in 0..20 {
            let order = question_order(&store, seed);
            let unique: HashSet<_> = order.iter().collect();
            assert_eq!(unique.len(), store.count(), "seed {}", seed);
        }
    }

    #[tokio::test]
    async fn test_cancelled_ask_abandons_session() {
        let store = deck();
        let port = Arc::new(ScriptedInteraction::new(Vec::<String>::new()));
        let mut use_case = PlayQuizUseCase::from_config(port.clone(), &SessionConfig::with_seed(2));

        let err = use_case.execute(&store).await.unwrap_err();

        assert!(matches!(err, PlayQuizError::Interaction(InteractionError::Cancelled)));
        assert!(err.is_cancelled());
        assert!(port.events().is_empty());
        assert_eq!(store, deck());
    }
}
