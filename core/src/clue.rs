use alloc::string::String;
use serde::{Deserialize, Serialize};

/// How far a single clue has been uncovered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealState {
    Hidden,
    Question,
    Answer,
}

impl RevealState {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Answer)
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Which side of a clue is on display.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealKind {
    Question,
    Answer,
}

impl RevealKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Question => "Question",
            Self::Answer => "Answer",
        }
    }
}

/// Text to show for a clue after a reveal click.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reveal {
    pub text: String,
    pub kind: RevealKind,
}

impl Reveal {
    pub const fn label(&self) -> &'static str {
        self.kind.label()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    question: String,
    answer: String,
    value: u32,
    reveal_state: RevealState,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>, value: u32) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            value,
            reveal_state: RevealState::Hidden,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn reveal_state(&self) -> RevealState {
        self.reveal_state
    }

    /// The currently displayed side, `None` while still hidden.
    pub fn current(&self) -> Option<Reveal> {
        match self.reveal_state {
            RevealState::Hidden => None,
            RevealState::Question => Some(self.side(RevealKind::Question)),
            RevealState::Answer => Some(self.side(RevealKind::Answer)),
        }
    }

    /// Advances Hidden -> Question -> Answer; Answer stays put.
    pub(crate) fn reveal(&mut self) -> Reveal {
        use RevealState::*;

        let kind = match self.reveal_state {
            Hidden => {
                self.reveal_state = Question;
                RevealKind::Question
            }
            Question | Answer => {
                self.reveal_state = Answer;
                RevealKind::Answer
            }
        };
        self.side(kind)
    }

    fn side(&self, kind: RevealKind) -> Reveal {
        let text = match kind {
            RevealKind::Question => &self.question,
            RevealKind::Answer => &self.answer,
        };
        Reveal {
            text: text.clone(),
            kind,
        }
    }
}
