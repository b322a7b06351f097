#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
}

impl AnswerOutcome {
    pub fn is_correct(self) -> bool {
        matches!(self, AnswerOutcome::Correct)
    }

    pub fn message(self) -> &'static str {
        match self {
            AnswerOutcome::Correct => "Correct!",
            AnswerOutcome::Incorrect => "Wrong, try again!",
        }
    }
}

/// Result of answering a question: the outcome and whether the
/// mode-selected transition should follow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnswerDecision {
    pub outcome: AnswerOutcome,
    pub advance: bool,
}

/// Exact, case-sensitive comparison. No trimming or normalization.
pub fn check_answer(selected: &str, correct: &str) -> AnswerOutcome {
    if selected == correct {
        AnswerOutcome::Correct
    } else {
        AnswerOutcome::Incorrect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_string_is_correct() {
        assert_eq!(check_answer("Paris", "Paris"), AnswerOutcome::Correct);
        assert!(check_answer("x", "x").is_correct());
    }

    #[test]
    fn test_case_differs_is_incorrect() {
        assert_eq!(check_answer("Paris", "paris"), AnswerOutcome::Incorrect);
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        assert_eq!(check_answer("Paris ", "Paris"), AnswerOutcome::Incorrect);
    }

    #[test]
    fn test_messages() {
        assert_eq!(AnswerOutcome::Correct.message(), "Correct!");
        assert_eq!(AnswerOutcome::Incorrect.message(), "Wrong, try again!");
    }
}
