use std::rc::Rc;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::quiz::answer::{AnswerDecision, check_answer};
use crate::quiz::dataset::{Chapter, Dataset, Question};

/// Transition taken after a correct answer when auto-advance is on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AutoAdvanceMode {
    #[default]
    Off,
    ShuffleQuestions,
    ShuffleChaptersAndQuestions,
}

impl AutoAdvanceMode {
    pub fn next(self) -> Self {
        match self {
            AutoAdvanceMode::Off => AutoAdvanceMode::ShuffleQuestions,
            AutoAdvanceMode::ShuffleQuestions => AutoAdvanceMode::ShuffleChaptersAndQuestions,
            AutoAdvanceMode::ShuffleChaptersAndQuestions => AutoAdvanceMode::Off,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AutoAdvanceMode::Off => "Shuffle off",
            AutoAdvanceMode::ShuffleQuestions => "Shuffle questions",
            AutoAdvanceMode::ShuffleChaptersAndQuestions => "Shuffle chapters and questions",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("unknown chapter '{0}'")]
    UnknownChapter(String),
    #[error("question index {index} out of range for chapter '{chapter}' ({len} questions)")]
    QuestionOutOfRange {
        chapter: String,
        index: usize,
        len: usize,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// Position of the current chapter in dataset order.
    pub chapter: usize,
    pub question: usize,
    pub mode: AutoAdvanceMode,
}

/// Sole owner of `NavigationState`. Every transition keeps `chapter` and
/// `question` in range for the shared dataset.
pub struct Navigator<R> {
    dataset: Rc<Dataset>,
    state: NavigationState,
    rng: R,
}

impl<R: Rng> Navigator<R> {
    pub fn new(dataset: Rc<Dataset>, rng: R) -> Self {
        Self {
            dataset,
            state: NavigationState::default(),
            rng,
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn current_chapter(&self) -> &Chapter {
        self.dataset.chapter(self.state.chapter)
    }

    pub fn current_chapter_name(&self) -> &str {
        &self.current_chapter().name
    }

    pub fn current_question(&self) -> &Question {
        &self.current_chapter().questions[self.state.question]
    }

    pub fn mode(&self) -> AutoAdvanceMode {
        self.state.mode
    }

    pub fn set_mode(&mut self, mode: AutoAdvanceMode) {
        self.state.mode = mode;
    }

    fn chapter_len(&self) -> usize {
        self.current_chapter().len()
    }

    pub fn select_chapter(&mut self, name: &str) -> Result<(), NavigationError> {
        let position = self
            .dataset
            .position(name)
            .ok_or_else(|| NavigationError::UnknownChapter(name.to_string()))?;
        self.state.chapter = position;
        self.state.question = 0;
        Ok(())
    }

    pub fn select_question(&mut self, index: usize) -> Result<(), NavigationError> {
        let len = self.chapter_len();
        if index >= len {
            return Err(NavigationError::QuestionOutOfRange {
                chapter: self.current_chapter_name().to_string(),
                index,
                len,
            });
        }
        self.state.question = index;
        Ok(())
    }

    pub fn advance_question(&mut self) {
        self.state.question = (self.state.question + 1) % self.chapter_len();
    }

    pub fn retreat_question(&mut self) {
        let len = self.chapter_len();
        self.state.question = (self.state.question + len - 1) % len;
    }

    pub fn advance_chapter(&mut self) {
        self.state.chapter = (self.state.chapter + 1) % self.dataset.chapter_count();
        self.state.question = 0;
    }

    pub fn retreat_chapter(&mut self) {
        let count = self.dataset.chapter_count();
        self.state.chapter = (self.state.chapter + count - 1) % count;
        self.state.question = 0;
    }

    /// May land on the current question again.
    pub fn jump_to_random_question(&mut self) {
        self.state.question = self.rng.gen_range(0..self.chapter_len());
    }

    /// Chapter is drawn uniformly, not weighted by its size.
    pub fn jump_to_random_chapter_and_question(&mut self) {
        self.state.chapter = self.rng.gen_range(0..self.dataset.chapter_count());
        self.state.question = self.rng.gen_range(0..self.chapter_len());
    }

    pub fn cycle_auto_advance_mode(&mut self) -> AutoAdvanceMode {
        self.state.mode = self.state.mode.next();
        self.state.mode
    }

    pub fn auto_advance(&mut self) {
        match self.state.mode {
            AutoAdvanceMode::Off => self.advance_question(),
            AutoAdvanceMode::ShuffleQuestions => self.jump_to_random_question(),
            AutoAdvanceMode::ShuffleChaptersAndQuestions => {
                self.jump_to_random_chapter_and_question()
            }
        }
    }

    /// Checks the answer. A correct answer with `auto_advance_enabled`
    /// asks for an advance, which the caller performs with
    /// [`Navigator::auto_advance`] once its delay has elapsed. State is
    /// not touched here.
    pub fn on_answer_selected(
        &self,
        selected: &str,
        correct: &str,
        auto_advance_enabled: bool,
    ) -> AnswerDecision {
        let outcome = check_answer(selected, correct);
        AnswerDecision {
            outcome,
            advance: outcome.is_correct() && auto_advance_enabled,
        }
    }
}
