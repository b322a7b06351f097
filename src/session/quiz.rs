use std::time::{Duration, Instant};

use rand::Rng;

use crate::quiz::answer::{AnswerDecision, AnswerOutcome};
use crate::quiz::dataset::Question;
use crate::quiz::shuffle::{LabelledOption, shuffle_options};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect { selected: usize },
}

impl Feedback {
    pub fn outcome(self) -> AnswerOutcome {
        match self {
            Feedback::Correct => AnswerOutcome::Correct,
            Feedback::Incorrect { .. } => AnswerOutcome::Incorrect,
        }
    }
}

/// How a single option should be highlighted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionStatus {
    Pending,
    Locked,
    Correct,
    Wrong,
}

/// Display state of the question currently on screen. Rebuilt on every
/// display, so each one gets its own option order and no stale feedback.
pub struct QuizSession {
    pub options: Vec<LabelledOption>,
    answer: String,
    pub feedback: Option<Feedback>,
    pub pending_advance: Option<Instant>,
}

impl QuizSession {
    pub fn new<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> Self {
        Self {
            options: shuffle_options(&question.options, rng),
            answer: question.answer.clone(),
            feedback: None,
            pending_advance: None,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.feedback.is_some()
    }

    pub fn correct_position(&self) -> Option<usize> {
        self.options.iter().position(|o| o.text == self.answer)
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Text of the option at `position`, or `None` when the options are
    /// already locked or `position` is not a shown option.
    pub fn selectable(&self, position: usize) -> Option<&str> {
        if self.is_locked() {
            return None;
        }
        self.options.get(position).map(|o| o.text.as_str())
    }

    /// Locks the options with the given decision. An advance request is
    /// scheduled `delay` after `now`.
    pub fn record(
        &mut self,
        position: usize,
        decision: AnswerDecision,
        delay: Duration,
        now: Instant,
    ) {
        self.feedback = Some(match decision.outcome {
            AnswerOutcome::Correct => Feedback::Correct,
            AnswerOutcome::Incorrect => Feedback::Incorrect { selected: position },
        });
        if decision.advance {
            self.pending_advance = Some(now + delay);
        }
    }

    pub fn cancel_pending_advance(&mut self) {
        self.pending_advance = None;
    }

    /// True once, when a scheduled advance has come due.
    pub fn take_due_advance(&mut self, now: Instant) -> bool {
        match self.pending_advance {
            Some(deadline) if now >= deadline => {
                self.pending_advance = None;
                true
            }
            _ => false,
        }
    }

    pub fn option_status(&self, position: usize) -> OptionStatus {
        let Some(feedback) = self.feedback else {
            return OptionStatus::Pending;
        };
        if self.correct_position() == Some(position) {
            return OptionStatus::Correct;
        }
        match feedback {
            Feedback::Incorrect { selected } if selected == position => OptionStatus::Wrong,
            _ => OptionStatus::Locked,
        }
    }
}
