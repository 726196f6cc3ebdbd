//! Quiz session state machine.
//!
//! A session walks a shuffled copy of the catalog one question at a time:
//!
//! ```text
//! Ready(p) --submit--> Answered(p) --advance--> Ready(p + 1)
//!                                  \--advance (last)--> Finished --restart--> Ready(0)
//! ```
//!
//! Any other call is rejected with `QuizError::InvalidTransition` and leaves
//! the session untouched.

use crate::catalog::Catalog;
use crate::error::{QuizError, Result};
use crate::matching::judge_with;
use crate::shuffle::{shuffle, shuffle_in_place, RandomSource};
use crate::types::{QuizResults, QuizSettings, StudyItem, Verdict};
use rand::rngs::ThreadRng;
use serde::Serialize;
use tracing::debug;

/// Observable state of a quiz session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QuizState {
    /// Question `position` is shown and accepts an answer.
    Ready { position: usize },
    /// Feedback for question `position` is shown; input is locked.
    Answered {
        position: usize,
        answer: String,
        verdict: Verdict,
    },
    /// All questions answered.
    Finished(QuizResults),
}

impl QuizState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ready { .. } => "ready",
            Self::Answered { .. } => "answered",
            Self::Finished(_) => "finished",
        }
    }
}

/// Receives every state a session enters.
pub trait SessionObserver {
    fn on_state_change(&mut self, state: &QuizState);
}

impl<F: FnMut(&QuizState)> SessionObserver for F {
    fn on_state_change(&mut self, state: &QuizState) {
        self(state)
    }
}

/// One quiz run over a catalog. Owns its question order and score.
pub struct QuizSession<R: RandomSource = ThreadRng> {
    order: Vec<StudyItem>,
    position: usize,
    score: usize,
    state: QuizState,
    settings: QuizSettings,
    rng: R,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl QuizSession<ThreadRng> {
    /// Shuffle the catalog with the thread RNG and show the first question.
    pub fn start(catalog: &Catalog) -> Result<Self> {
        Self::start_with_rng(catalog, rand::rng())
    }

    pub fn start_with_settings(catalog: &Catalog, settings: QuizSettings) -> Result<Self> {
        Self::with_settings(catalog, settings, rand::rng())
    }
}

impl<R: RandomSource> QuizSession<R> {
    pub fn start_with_rng(catalog: &Catalog, rng: R) -> Result<Self> {
        Self::with_settings(catalog, QuizSettings::default(), rng)
    }

    /// # Errors
    ///
    /// Returns `QuizError::EmptyCatalog` for an empty catalog and
    /// `QuizError::InvalidSettings` when the settings fail validation.
    pub fn with_settings(catalog: &Catalog, settings: QuizSettings, mut rng: R) -> Result<Self> {
        settings.validate()?;
        if catalog.is_empty() {
            return Err(QuizError::EmptyCatalog);
        }

        let order = shuffle(catalog.items(), &mut rng);
        debug!(total = order.len(), "quiz session started");

        Ok(Self {
            order,
            position: 0,
            score: 0,
            state: QuizState::Ready { position: 0 },
            settings,
            rng,
            observers: Vec::new(),
        })
    }

    /// Register an observer; it immediately receives the current state.
    pub fn subscribe(&mut self, observer: impl SessionObserver + 'static) {
        let mut observer: Box<dyn SessionObserver> = Box::new(observer);
        observer.on_state_change(&self.state);
        self.observers.push(observer);
    }

    /// Judge an answer to the current question.
    ///
    /// Only legal from `Ready`; a second submit before `advance` is rejected
    /// and the score is left alone.
    pub fn submit(&mut self, answer: &str) -> Result<Verdict> {
        let QuizState::Ready { position } = self.state else {
            return Err(self.invalid("submit"));
        };

        let title = &self.order[position].title;
        let verdict = judge_with(answer, title, &self.settings);
        if verdict.is_correct {
            self.score += 1;
        }
        debug!(
            position,
            correct = verdict.is_correct,
            score = self.score,
            "answer judged"
        );

        self.transition(QuizState::Answered {
            position,
            answer: answer.trim().to_string(),
            verdict: verdict.clone(),
        });
        Ok(verdict)
    }

    /// Move past the feedback to the next question, or to the results.
    pub fn advance(&mut self) -> Result<&QuizState> {
        let QuizState::Answered { position, .. } = self.state else {
            return Err(self.invalid("advance"));
        };

        let next = if position + 1 < self.order.len() {
            self.position = position + 1;
            QuizState::Ready {
                position: self.position,
            }
        } else {
            QuizState::Finished(QuizResults::new(
                self.score,
                self.order.len(),
                &self.settings,
            ))
        };

        self.transition(next);
        Ok(&self.state)
    }

    /// Reshuffle and start over from the first question. Only legal once finished.
    pub fn restart(&mut self) -> Result<()> {
        if !matches!(self.state, QuizState::Finished(_)) {
            return Err(self.invalid("restart"));
        }

        shuffle_in_place(&mut self.order, &mut self.rng);
        self.position = 0;
        self.score = 0;
        self.transition(QuizState::Ready { position: 0 });
        Ok(())
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn total(&self) -> usize {
        self.order.len()
    }

    /// Session order of the items.
    pub fn order(&self) -> &[StudyItem] {
        &self.order
    }

    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    /// Item being asked or reviewed; `None` once finished.
    pub fn current_item(&self) -> Option<&StudyItem> {
        match self.state {
            QuizState::Finished(_) => None,
            _ => self.order.get(self.position),
        }
    }

    /// One-based question number and total, for "Question N of M".
    pub fn progress(&self) -> (usize, usize) {
        (self.position + 1, self.order.len())
    }

    /// The next `advance` leads to the results.
    pub fn is_last_question(&self) -> bool {
        self.position + 1 == self.order.len()
    }

    pub fn results(&self) -> Option<&QuizResults> {
        match &self.state {
            QuizState::Finished(results) => Some(results),
            _ => None,
        }
    }

    fn transition(&mut self, state: QuizState) {
        self.state = state;
        debug!(
            state = self.state.name(),
            position = self.position,
            score = self.score,
            "quiz state changed"
        );
        for observer in &mut self.observers {
            observer.on_state_change(&self.state);
        }
    }

    fn invalid(&self, operation: &'static str) -> QuizError {
        debug!(operation, state = self.state.name(), "rejected transition");
        QuizError::InvalidTransition {
            operation,
            state: self.state.name(),
        }
    }
}
