use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// How much of a clue the player has uncovered. Only ever moves forward.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Reveal {
    #[default]
    Hidden,
    Question,
    Answer,
}

impl Reveal {
    pub const fn next(self) -> Self {
        match self {
            Self::Hidden => Self::Question,
            Self::Question | Self::Answer => Self::Answer,
        }
    }

    pub const fn is_answered(self) -> bool {
        matches!(self, Self::Answer)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    ShowQuestion,
    ShowAnswer,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            ShowQuestion => true,
            ShowAnswer => true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    question: String,
    answer: String,
    reveal: Reveal,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            reveal: Reveal::Hidden,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn reveal(&self) -> Reveal {
        self.reveal
    }

    /// Text currently visible for this clue, `None` while hidden.
    pub fn visible_text(&self) -> Option<&str> {
        match self.reveal {
            Reveal::Hidden => None,
            Reveal::Question => Some(&self.question),
            Reveal::Answer => Some(&self.answer),
        }
    }

    /// Hidden -> Question -> Answer, then stays put.
    pub fn advance(&mut self) -> RevealOutcome {
        let outcome = match self.reveal {
            Reveal::Hidden => RevealOutcome::ShowQuestion,
            Reveal::Question => RevealOutcome::ShowAnswer,
            Reveal::Answer => return RevealOutcome::NoChange,
        };
        self.reveal = self.reveal.next();
        outcome
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            title: title.into(),
            clues,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    pub fn clue(&self, index: usize) -> Option<&Clue> {
        self.clues.get(index)
    }

    pub(crate) fn clue_mut(&mut self, index: usize) -> Option<&mut Clue> {
        self.clues.get_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_walks_hidden_question_answer_then_stops() {
        let mut clue = Clue::new("Largest planet", "Jupiter");
        assert_eq!(clue.reveal(), Reveal::Hidden);
        assert_eq!(clue.visible_text(), None);

        assert_eq!(clue.advance(), RevealOutcome::ShowQuestion);
        assert_eq!(clue.reveal(), Reveal::Question);
        assert_eq!(clue.visible_text(), Some("Largest planet"));

        assert_eq!(clue.advance(), RevealOutcome::ShowAnswer);
        assert_eq!(clue.reveal(), Reveal::Answer);
        assert_eq!(clue.visible_text(), Some("Jupiter"));

        for _ in 0..3 {
            assert_eq!(clue.advance(), RevealOutcome::NoChange);
            assert_eq!(clue.reveal(), Reveal::Answer);
            assert_eq!(clue.visible_text(), Some("Jupiter"));
        }
    }

    #[test]
    fn reveal_order_is_monotonic() {
        assert!(Reveal::Hidden < Reveal::Question);
        assert!(Reveal::Question < Reveal::Answer);
        assert_eq!(Reveal::Answer.next(), Reveal::Answer);
    }

    #[test]
    fn only_changing_outcomes_request_a_redraw() {
        assert!(!RevealOutcome::NoChange.has_update());
        assert!(RevealOutcome::ShowQuestion.has_update());
        assert!(RevealOutcome::ShowAnswer.has_update());
    }
}
